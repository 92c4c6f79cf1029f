pub mod client;
pub mod progress;
pub mod traits;

pub use client::WorldBankClient;
pub use traits::IndicatorSource;

use crate::model::{FetchError, Indicator, IndicatorRequest, IndicatorSet};
use futures::future::join_all;
use tracing::{info, warn};

/// Requests every indicator for `countries` and `year`.
///
/// Transport and HTTP status failures are reported and the indicator is left
/// out; a malformed payload aborts with an error. The returned set may be empty.
pub async fn fetch_all(
    source: &dyn IndicatorSource,
    countries: &str,
    year: &str,
) -> Result<IndicatorSet, FetchError> {
    let requests: Vec<IndicatorRequest> = Indicator::ALL
        .iter()
        .map(|&indicator| IndicatorRequest {
            indicator,
            countries: countries.to_string(),
            year: year.to_string(),
        })
        .collect();

    let results = join_all(requests.iter().map(|req| source.fetch(req))).await;

    let mut set = IndicatorSet::new();
    for (req, result) in requests.iter().zip(results) {
        let name = req.indicator.name();
        match result {
            Ok(Some(table)) => {
                println!("{}", progress::fetched_line(name));
                info!("{}: {} rows", name, table.len());
                set.insert(req.indicator, table);
            }
            Ok(None) => {
                info!("{}: response carried no rows", name);
            }
            Err(e) if e.is_recoverable() => {
                println!("{}", progress::fetch_error_line(name, &e));
                warn!("Fetch failed for {}: {:?}", name, e);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(set)
}

#[cfg(test)]
pub mod testing {
    use super::traits::IndicatorSource;
    use crate::model::{
        CountryField, FetchError, Indicator, IndicatorRequest, IndicatorRow, IndicatorTable,
    };
    use serde_json::Value;
    use std::collections::HashMap;

    #[derive(Clone)]
    pub enum Outcome {
        Rows(IndicatorTable),
        NoRows,
        ServerError,
        Malformed,
    }

    /// Canned indicator source; indicators without an outcome fail with a 500.
    #[derive(Default)]
    pub struct FakeSource {
        pub outcomes: HashMap<Indicator, Outcome>,
    }

    impl FakeSource {
        pub fn with(mut self, indicator: Indicator, outcome: Outcome) -> Self {
            self.outcomes.insert(indicator, outcome);
            self
        }
    }

    #[async_trait::async_trait]
    impl IndicatorSource for FakeSource {
        async fn fetch(
            &self,
            req: &IndicatorRequest,
        ) -> Result<Option<IndicatorTable>, FetchError> {
            match self.outcomes.get(&req.indicator) {
                Some(Outcome::Rows(table)) => Ok(Some(table.clone())),
                Some(Outcome::NoRows) => Ok(None),
                Some(Outcome::Malformed) => Err(FetchError::InvalidResponse("truncated".into())),
                Some(Outcome::ServerError) | None => Err(FetchError::Status {
                    status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                    url: format!("http://fake/{}", req.indicator.code()),
                }),
            }
        }
    }

    /// Table with coded countries, as the API sends them.
    pub fn coded_table(rows: &[(&str, &str, Value)]) -> IndicatorTable {
        IndicatorTable {
            rows: rows
                .iter()
                .map(|(_code, name, value)| IndicatorRow {
                    country: CountryField::Coded(name.to_string()),
                    value: value.clone(),
                })
                .collect(),
        }
    }
}
