use crate::model::DemographicRecordSet;

/// Male and female population totals across the set, in source units.
pub fn population_totals(set: &DemographicRecordSet) -> (f64, f64) {
    set.records.iter().fold((0.0, 0.0), |(male, female), r| {
        (male + r.male_population, female + r.female_population)
    })
}

/// Largest single population bar, used to scale the gender chart.
pub fn max_population(set: &DemographicRecordSet) -> f64 {
    set.records
        .iter()
        .flat_map(|r| [r.male_population, r.female_population])
        .fold(0.0, f64::max)
}
