use crate::model::{FetchError, IndicatorRequest, IndicatorTable};

/// A source of indicator tables. `Ok(None)` means the request succeeded
/// but carried no rows.
#[async_trait::async_trait]
pub trait IndicatorSource: Send + Sync {
    async fn fetch(&self, req: &IndicatorRequest) -> Result<Option<IndicatorTable>, FetchError>;
}
