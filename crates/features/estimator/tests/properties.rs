use fp_domain::IntoEnumIterator;
use fp_estimator::{ActivityInputs, Category, FeedbackBand, category_emission, classify, estimate};
use proptest::prelude::*;
use proptest::sample::select;

fn inputs() -> impl Strategy<Value = ActivityInputs> {
    (0.0..5_000.0f64, 0.0..5_000.0f64, 0.0..200_000.0f64, 0.0..5_000.0f64, 0..50i64).prop_map(
        |(car, bus, plane, electricity, meals)| ActivityInputs {
            km_car_per_week: car,
            km_bus_per_week: bus,
            km_plane_per_year: plane,
            electricity_kwh_per_month: electricity,
            meat_meals_per_week: meals,
        },
    )
}

/// `inputs` with the rate behind `category` multiplied by `k`.
#[allow(clippy::cast_precision_loss)]
fn scale(inputs: ActivityInputs, category: Category, k: i64) -> ActivityInputs {
    let f = k as f64;
    match category {
        Category::Car => ActivityInputs { km_car_per_week: inputs.km_car_per_week * f, ..inputs },
        Category::Bus => ActivityInputs { km_bus_per_week: inputs.km_bus_per_week * f, ..inputs },
        Category::Plane => {
            ActivityInputs { km_plane_per_year: inputs.km_plane_per_year * f, ..inputs }
        },
        Category::Electricity => ActivityInputs {
            electricity_kwh_per_month: inputs.electricity_kwh_per_month * f,
            ..inputs
        },
        Category::Food => {
            ActivityInputs { meat_meals_per_week: inputs.meat_meals_per_week * k, ..inputs }
        },
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn total_is_sum_of_categories(inputs in inputs()) {
        let footprint = estimate(&inputs);
        let e = footprint.emissions();
        let expected = e[Category::Car] + e[Category::Bus] + e[Category::Plane]
            + e[Category::Electricity] + e[Category::Food];

        prop_assert_eq!(footprint.total(), expected);
        prop_assert_eq!(footprint.band(), classify(expected));
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn scaling_one_input_scales_only_its_category(
        inputs in inputs(),
        scaled_category in select(Category::iter().collect::<Vec<_>>()),
        k in 0..20i64,
    ) {
        let base = estimate(&inputs);
        let scaled = estimate(&scale(inputs, scaled_category, k));

        for category in Category::iter() {
            let before = base.emissions()[category];
            let after = scaled.emissions()[category];
            if category == scaled_category {
                prop_assert!(close(after, before * k as f64), "{category}: {after} != {before} * {k}");
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn doubling_meals_doubles_food(inputs in inputs()) {
        let doubled = ActivityInputs { meat_meals_per_week: inputs.meat_meals_per_week * 2, ..inputs };
        let before = category_emission(Category::Food, &inputs);
        let after = category_emission(Category::Food, &doubled);
        prop_assert!(close(after, before * 2.0));
    }

    #[test]
    fn bands_are_monotonic(a in 0.0..30_000.0f64, b in 0.0..30_000.0f64) {
        let rank = |band: FeedbackBand| match band {
            FeedbackBand::BelowAverage => 0,
            FeedbackBand::AroundAverage => 1,
            FeedbackBand::AboveAverage => 2,
        };
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(rank(classify(low)) <= rank(classify(high)));
    }
}
