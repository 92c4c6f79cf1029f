// Console progress lines for indicator fetches
use crate::model::FetchError;

pub const FETCH_BANNER: &str = "Fetching World Bank demographic data...";

pub fn fetched_line(name: &str) -> String {
    format!("✓ Fetched {} data", name)
}

pub fn fetch_error_line(name: &str, err: &FetchError) -> String {
    format!("✗ Error fetching {}: {}", name, err)
}
