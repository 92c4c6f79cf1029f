// Built-in sample data used when too few indicators could be fetched
use crate::model::ColumnarData;

const SAMPLE_COUNTRIES: [&str; 8] = [
    "United States",
    "China",
    "India",
    "Germany",
    "Japan",
    "Brazil",
    "United Kingdom",
    "France",
];

/// Populations in millions, age brackets in percent.
const SAMPLE_COLUMNS: [(&str, [f64; 8]); 5] = [
    ("male_population", [163.0, 723.0, 717.0, 41.0, 61.0, 106.0, 33.0, 33.0]),
    ("female_population", [168.0, 689.0, 663.0, 42.0, 64.0, 109.0, 34.0, 35.0]),
    ("age_0_14_percent", [18.1, 17.3, 26.2, 13.9, 12.5, 21.1, 17.9, 17.9]),
    ("age_15_64_percent", [65.0, 70.1, 67.0, 64.9, 59.2, 69.6, 64.2, 61.7]),
    ("age_65_plus_percent", [16.9, 12.6, 6.8, 21.2, 28.3, 9.3, 17.9, 20.4]),
];

pub fn sample_data() -> ColumnarData {
    ColumnarData {
        countries: SAMPLE_COUNTRIES.iter().map(|c| c.to_string()).collect(),
        columns: SAMPLE_COLUMNS
            .iter()
            .map(|(key, values)| (key.to_string(), values.to_vec()))
            .collect(),
    }
}
