use crate::config::AppConfig;
use crate::fetcher::traits::IndicatorSource;
use crate::model::{FetchError, IndicatorRequest, IndicatorTable};
use crate::parser::parse_payload;

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

pub const PER_PAGE: &str = "1000";

/// World Bank v2 API client.
pub struct WorldBankClient {
    client: Client,
    base_url: String,
}

impl WorldBankClient {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Client for the configured base URL and optional request timeout.
    pub fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        Self::new(
            &config.api_base_url,
            config.request_timeout_seconds.map(Duration::from_secs),
        )
    }

    fn build_url(&self, req: &IndicatorRequest) -> String {
        format!(
            "{}/country/{}/indicator/{}",
            self.base_url,
            req.countries,
            req.indicator.code()
        )
    }
}

#[async_trait::async_trait]
impl IndicatorSource for WorldBankClient {
    async fn fetch(&self, req: &IndicatorRequest) -> Result<Option<IndicatorTable>, FetchError> {
        let url = self.build_url(req);
        debug!("GET {} (date={})", url, req.year);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("format", "json"),
                ("per_page", PER_PAGE),
                ("date", req.year.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: response.url().to_string(),
            });
        }

        let body = response.text().await?;
        let payload: Value = serde_json::from_str(&body)
            .map_err(|e| FetchError::InvalidResponse(format!("invalid JSON: {}", e)))?;

        parse_payload(&payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CountryField, Indicator};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request(indicator: Indicator) -> IndicatorRequest {
        IndicatorRequest {
            indicator,
            countries: "USA;DEU".into(),
            year: "2022".into(),
        }
    }

    #[test]
    fn url_contains_countries_and_indicator_code() {
        let client = WorldBankClient::new("https://api.worldbank.org/v2/", None).unwrap();
        assert_eq!(
            client.build_url(&request(Indicator::Age65Plus)),
            "https://api.worldbank.org/v2/country/USA;DEU/indicator/SP.POP.65UP.TO.ZS"
        );
    }

    #[tokio::test]
    async fn fetches_and_parses_rows() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/country/USA;DEU/indicator/SP.POP.TOTL.MA.IN"))
            .and(query_param("format", "json"))
            .and(query_param("per_page", "1000"))
            .and(query_param("date", "2022"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "page": 1, "pages": 1, "per_page": 1000, "total": 2 },
                [
                    { "country": { "id": "DE", "value": "Germany" }, "value": 41_000_000 },
                    { "country": { "id": "US", "value": "United States" }, "value": 165_000_000 }
                ]
            ])))
            .mount(&server)
            .await;

        let client = WorldBankClient::new(&server.uri(), None).unwrap();
        let table = client
            .fetch(&request(Indicator::MalePop))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].country, CountryField::Coded("Germany".into()));
    }

    #[tokio::test]
    async fn error_status_is_recoverable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = WorldBankClient::new(&server.uri(), None).unwrap();
        let err = client
            .fetch(&request(Indicator::FemalePop))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Status { .. }));
        assert!(err.is_recoverable());
    }

    #[tokio::test]
    async fn non_json_body_is_fatal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let client = WorldBankClient::new(&server.uri(), None).unwrap();
        let err = client
            .fetch(&request(Indicator::Age0To14))
            .await
            .unwrap_err();

        assert!(!err.is_recoverable());
    }

    #[tokio::test]
    async fn configured_timeout_cuts_slow_responses() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{}, []]))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let config = AppConfig {
            api_base_url: server.uri(),
            request_timeout_seconds: Some(1),
            ..AppConfig::default()
        };
        let client = WorldBankClient::from_config(&config).unwrap();
        let err = client
            .fetch(&request(Indicator::Age15To64))
            .await
            .unwrap_err();

        match &err {
            FetchError::Http(e) => assert!(e.is_timeout()),
            other => panic!("expected a timeout, got {:?}", other),
        }
        assert!(err.is_recoverable());
    }
}
