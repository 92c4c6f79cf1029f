use crate::model::{AgeDistribution, DemographicRecord, DemographicRecordSet};
use crate::utils::mean;

/// Average age-bracket shares across all records of the set.
pub fn average_age_distribution(set: &DemographicRecordSet) -> AgeDistribution {
    AgeDistribution {
        children: bracket_mean(set, |r| r.age_0_14),
        working_age: bracket_mean(set, |r| r.age_15_64),
        elderly: bracket_mean(set, |r| r.age_65_plus),
    }
}

fn bracket_mean(set: &DemographicRecordSet, field: impl Fn(&DemographicRecord) -> f64) -> f64 {
    let values: Vec<f64> = set.records.iter().map(field).collect();
    mean(&values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::sample_data;
    use crate::normalizer::normalize;

    #[test]
    fn sample_data_averages() {
        let dist = average_age_distribution(&normalize(&sample_data()));
        assert!((dist.children - 18.1125).abs() < 1e-9);
        assert!((dist.working_age - 65.2125).abs() < 1e-9);
        assert!((dist.elderly - 16.675).abs() < 1e-9);
    }

    #[test]
    fn empty_set_averages_to_zero() {
        let dist = average_age_distribution(&DemographicRecordSet::default());
        assert_eq!(dist.children, 0.0);
        assert_eq!(dist.elderly, 0.0);
    }
}
