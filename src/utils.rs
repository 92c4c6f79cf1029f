// Utility functions

pub const MAX_LABEL_CHARS: usize = 12;

/// Shortens a country name for chart labels: longer than 12 characters
/// becomes the first 12 followed by "...".
pub fn shorten_label(name: &str) -> String {
    if name.chars().count() > MAX_LABEL_CHARS {
        let head: String = name.chars().take(MAX_LABEL_CHARS).collect();
        format!("{}...", head)
    } else {
        name.to_string()
    }
}

/// Arithmetic mean, 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
