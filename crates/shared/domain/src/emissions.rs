use crate::category::Category;
use std::ops::Index;
use strum::{EnumCount, IntoEnumIterator};

/// Yearly kg CO₂ per [`Category`], always iterated in category order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CategoryEmissions([f64; Category::COUNT]);

impl CategoryEmissions {
    /// Builds the mapping by evaluating `f` once per category, in order.
    pub fn from_fn(mut f: impl FnMut(Category) -> f64) -> Self {
        let mut values = [0.0; Category::COUNT];
        for category in Category::iter() {
            values[category.index()] = f(category);
        }
        Self(values)
    }

    #[must_use]
    pub const fn get(&self, category: Category) -> f64 {
        self.0[category.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::iter().map(|category| (category, self.get(category)))
    }

    /// Sum over all categories, added in category order.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl Index<Category> for CategoryEmissions {
    type Output = f64;

    fn index(&self, category: Category) -> &Self::Output {
        &self.0[category.index()]
    }
}
