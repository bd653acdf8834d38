use crate::error::{InputError, InputErrorExt};
use fp::domain::{ActivityInputs, Category};
use std::io::{BufRead, Write};

/// The question asked for each category.
#[must_use]
pub const fn question(category: Category) -> &'static str {
    match category {
        Category::Car => "How many km do you drive by car per week? ",
        Category::Bus => "How many km do you travel by bus per week? ",
        Category::Plane => "How many km do you travel by plane per year? ",
        Category::Electricity => "Monthly electricity consumption (kWh): ",
        Category::Food => "How many meals with meat per week? ",
    }
}

/// The [`ActivityInputs`] field an answer is stored in, used in error messages.
const fn field(category: Category) -> &'static str {
    match category {
        Category::Car => "km_car_per_week",
        Category::Bus => "km_bus_per_week",
        Category::Plane => "km_plane_per_year",
        Category::Electricity => "electricity_kwh_per_month",
        Category::Food => "meat_meals_per_week",
    }
}

/// Asks the five questions on `out` and reads one answer per line from `input`.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    out: W,
    line: String,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(input: R, out: W) -> Self {
        Self { input, out, line: String::new() }
    }

    /// Collects all answers in the fixed question order.
    ///
    /// # Errors
    /// Stops at the first answer that does not convert, see [`InputError`].
    pub fn read_inputs(&mut self) -> Result<ActivityInputs, InputError> {
        Ok(ActivityInputs {
            km_car_per_week: self.real(Category::Car)?,
            km_bus_per_week: self.real(Category::Bus)?,
            km_plane_per_year: self.real(Category::Plane)?,
            electricity_kwh_per_month: self.real(Category::Electricity)?,
            meat_meals_per_week: self.count(Category::Food)?,
        })
    }

    fn real(&mut self, category: Category) -> Result<f64, InputError> {
        let answer = self.ask(category)?;
        answer.parse::<f64>().context(format!("{} = '{answer}'", field(category)))
    }

    fn count(&mut self, category: Category) -> Result<i64, InputError> {
        let answer = self.ask(category)?;
        answer.parse::<i64>().context(format!("{} = '{answer}'", field(category)))
    }

    fn ask(&mut self, category: Category) -> Result<&str, InputError> {
        write!(self.out, "{}", question(category)).context("writing prompt")?;
        self.out.flush().context("flushing prompt")?;

        self.line.clear();
        let read = self.input.read_line(&mut self.line).context(field(category))?;
        if read == 0 {
            return Err(InputError::Closed {
                message: format!("no answer for {}", field(category)).into(),
                context: None,
            });
        }

        Ok(self.line.trim())
    }
}
