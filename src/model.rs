// Core structs: indicators, fetched tables, normalized records, errors
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Demographic indicators requested from the World Bank API.
/// Declaration order is fetch order and iteration order of an `IndicatorSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Indicator {
    MalePop,
    FemalePop,
    Age0To14,
    Age15To64,
    Age65Plus,
}

impl Indicator {
    pub const ALL: [Indicator; 5] = [
        Indicator::MalePop,
        Indicator::FemalePop,
        Indicator::Age0To14,
        Indicator::Age15To64,
        Indicator::Age65Plus,
    ];

    /// Short name, also used as the column key of fetched data.
    pub fn name(self) -> &'static str {
        match self {
            Indicator::MalePop => "male_pop",
            Indicator::FemalePop => "female_pop",
            Indicator::Age0To14 => "age_0_14",
            Indicator::Age15To64 => "age_15_64",
            Indicator::Age65Plus => "age_65_plus",
        }
    }

    /// World Bank indicator code.
    pub fn code(self) -> &'static str {
        match self {
            Indicator::MalePop => "SP.POP.TOTL.MA.IN",
            Indicator::FemalePop => "SP.POP.TOTL.FE.IN",
            Indicator::Age0To14 => "SP.POP.0014.TO.ZS",
            Indicator::Age15To64 => "SP.POP.1564.TO.ZS",
            Indicator::Age65Plus => "SP.POP.65UP.TO.ZS",
        }
    }
}

/// One indicator request for a set of countries and a year.
#[derive(Debug, Clone)]
pub struct IndicatorRequest {
    pub indicator: Indicator,
    /// Semicolon-delimited country codes, e.g. `USA;CHN`.
    pub countries: String,
    pub year: String,
}

/// The `country` field of an API row.
#[derive(Debug, Clone, PartialEq)]
pub enum CountryField {
    /// `{"id": "USA", "value": "United States"}`, holds the display name.
    Coded(String),
    /// Bare string.
    Plain(String),
    Absent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorRow {
    pub country: CountryField,
    /// Value exactly as sent by the API: number, string or null.
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct IndicatorTable {
    pub rows: Vec<IndicatorRow>,
}

impl IndicatorTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True if at least one row carries a country field.
    pub fn has_country_column(&self) -> bool {
        self.rows
            .iter()
            .any(|row| row.country != CountryField::Absent)
    }
}

/// Successfully fetched indicators, ordered by `Indicator`.
pub type IndicatorSet = BTreeMap<Indicator, IndicatorTable>;

/// Country names plus named numeric columns. Both live and sample data
/// are reduced to this shape before normalization.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnarData {
    pub countries: Vec<String>,
    pub columns: BTreeMap<String, Vec<f64>>,
}

impl ColumnarData {
    pub fn column(&self, key: &str) -> Option<&[f64]> {
        self.columns.get(key).map(Vec::as_slice)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemographicRecord {
    pub country: String,
    pub male_population: f64,
    pub female_population: f64,
    pub age_0_14: f64,
    pub age_15_64: f64,
    pub age_65_plus: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DemographicRecordSet {
    pub records: Vec<DemographicRecord>,
}

impl DemographicRecordSet {
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Where the normalized records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    Live,
    Sample,
}

impl DataOrigin {
    /// Console line announcing which data is used.
    pub fn banner(self) -> &'static str {
        match self {
            DataOrigin::Live => "Processing World Bank data...",
            DataOrigin::Sample => "Using sample demographic data...",
        }
    }

    /// Live populations are raw API head counts; the sample is in millions.
    pub fn population_axis(self) -> &'static str {
        match self {
            DataOrigin::Live => "Population",
            DataOrigin::Sample => "Population (Millions)",
        }
    }
}

/// Average share of each age bracket, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeDistribution {
    pub children: f64,
    pub working_age: f64,
    pub elderly: f64,
}


#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    #[error("{status} for url: {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
    #[error("malformed payload: {0}")]
    InvalidResponse(String),
}

impl FetchError {
    /// Transport and status failures are skipped per indicator; shape errors are not.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, FetchError::InvalidResponse(_))
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("drawing failed: {0}")]
    Drawing(String),
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Render(#[from] RenderError),
}
