use crate::model::{
    ColumnarData, CountryField, DemographicRecord, DemographicRecordSet, IndicatorSet,
};
use serde_json::Value;
use std::collections::BTreeMap;

pub const MAX_COUNTRIES: usize = 8;

/// A record field: candidate column keys in priority order and the value
/// used when none of them is present.
pub struct FieldSpec {
    pub candidates: &'static [&'static str],
    pub default: f64,
}

impl FieldSpec {
    fn resolve<'a>(&self, data: &'a ColumnarData) -> Option<&'a [f64]> {
        self.candidates.iter().find_map(|key| data.column(key))
    }

    fn value_at(&self, column: Option<&[f64]>, index: usize) -> f64 {
        match column {
            Some(values) => values.get(index).copied().unwrap_or(0.0),
            None => self.default,
        }
    }
}

pub const MALE_POPULATION: FieldSpec = FieldSpec {
    candidates: &["male_population", "male_pop"],
    default: 100.0,
};
pub const FEMALE_POPULATION: FieldSpec = FieldSpec {
    candidates: &["female_population", "female_pop"],
    default: 100.0,
};
pub const AGE_0_14: FieldSpec = FieldSpec {
    candidates: &["age_0_14_percent", "age_0_14"],
    default: 20.0,
};
pub const AGE_15_64: FieldSpec = FieldSpec {
    candidates: &["age_15_64_percent", "age_15_64"],
    default: 65.0,
};
pub const AGE_65_PLUS: FieldSpec = FieldSpec {
    candidates: &["age_65_plus_percent", "age_65_plus"],
    default: 15.0,
};

/// Flattens fetched indicator tables into columns keyed by indicator name.
/// Country names are taken from the first table in the set.
pub fn tabulate(indicators: &IndicatorSet) -> ColumnarData {
    let countries: Vec<String> = indicators
        .values()
        .next()
        .map(|first| {
            let has_countries = first.has_country_column();
            first
                .rows
                .iter()
                .enumerate()
                .map(|(i, row)| match &row.country {
                    CountryField::Coded(name) | CountryField::Plain(name) if has_countries => {
                        name.clone()
                    }
                    _ => placeholder_name(i),
                })
                .collect()
        })
        .unwrap_or_default();

    let columns: BTreeMap<String, Vec<f64>> = indicators
        .iter()
        .filter(|(_, table)| !table.is_empty())
        .map(|(indicator, table)| {
            let values: Vec<f64> = table.rows.iter().map(|row| coerce_numeric(&row.value)).collect();
            (indicator.name().to_string(), values)
        })
        .collect();

    ColumnarData { countries, columns }
}

fn placeholder_name(index: usize) -> String {
    format!("Country_{}", index + 1)
}

/// Numbers pass through, numeric strings are parsed, anything else is 0.
pub fn coerce_numeric(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| !v.is_nan()).unwrap_or(0.0)
}

/// Builds at most `MAX_COUNTRIES` records in source order, resolving each
/// field through its candidate keys.
pub fn normalize(data: &ColumnarData) -> DemographicRecordSet {
    let count = MAX_COUNTRIES.min(data.countries.len());

    let male = MALE_POPULATION.resolve(data);
    let female = FEMALE_POPULATION.resolve(data);
    let young = AGE_0_14.resolve(data);
    let working = AGE_15_64.resolve(data);
    let elderly = AGE_65_PLUS.resolve(data);

    let records = data.countries[..count]
        .iter()
        .enumerate()
        .map(|(i, country)| DemographicRecord {
            country: country.clone(),
            male_population: MALE_POPULATION.value_at(male, i),
            female_population: FEMALE_POPULATION.value_at(female, i),
            age_0_14: AGE_0_14.value_at(young, i),
            age_15_64: AGE_15_64.value_at(working, i),
            age_65_plus: AGE_65_PLUS.value_at(elderly, i),
        })
        .collect();

    DemographicRecordSet { records }
}
