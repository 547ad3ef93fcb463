//! Pure conversion from upstream documents to persisted records.
//!
//! Nothing here performs I/O; the pipelines fetch documents and hand them in.

pub mod detail;
pub mod listing;
pub mod numbers;

pub use detail::{extract_detail, DetailOutcome};
pub use listing::listing_from_widget;

use thiserror::Error;

/// Separator preceding the neighbourhood name in a listing's bottom description
const REGION_SEPARATOR: &str = "در ";

/// A required numeric field could not be parsed
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("{field}: not a decimal value: {input:?}")]
    InvalidDecimal { field: &'static str, input: String },

    #[error("{field}: not an integer value: {input:?}")]
    InvalidInteger { field: &'static str, input: String },
}

/// Region is whatever follows the last separator, or the whole text if there is none.
pub fn derive_region(description: &str) -> &str {
    trim_after_last(description, REGION_SEPARATOR)
}

fn trim_after_last<'a>(text: &'a str, pattern: &str) -> &'a str {
    match text.rfind(pattern) {
        Some(idx) => &text[idx + pattern.len()..],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_follows_last_separator() {
        assert_eq!(derive_region("لحظاتی پیش در تهران، ونک"), "تهران، ونک");
        assert_eq!(derive_region("در تهران در سعادت‌آباد"), "سعادت‌آباد");
    }

    #[test]
    fn region_without_separator_is_unchanged() {
        assert_eq!(derive_region("نیم ساعت پیش"), "نیم ساعت پیش");
        assert_eq!(derive_region(""), "");
    }

    #[test]
    fn region_after_trailing_separator_is_empty() {
        assert_eq!(derive_region("آگهی در "), "");
    }
}
