// Analyzer module: aggregate figures derived from a normalized record set.

pub mod age_distribution;
pub mod population;

pub use age_distribution::average_age_distribution;
pub use population::{max_population, population_totals};
