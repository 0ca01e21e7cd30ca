//! Pagination query parameters for the link listing.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

/// Default number of items per page.
pub const DEFAULT_LIMIT: i64 = 50;

/// Upper bound on items per page.
pub const MAX_LIMIT: i64 = 500;

/// `?skip=&limit=` query parameters.
///
/// Uses `serde_with` to parse the values from query strings as integers.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct ListQueryParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub skip: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<i64>,
}

impl ListQueryParams {
    /// Validates the parameters and returns the effective `(skip, limit)`.
    ///
    /// # Defaults
    ///
    /// - `skip`: 0
    /// - `limit`: [`DEFAULT_LIMIT`]
    ///
    /// # Validation
    ///
    /// - `skip` must be non-negative
    /// - `limit` must be between 1 and [`MAX_LIMIT`]
    pub fn validate_and_get_offset_limit(&self) -> Result<(i64, i64), String> {
        let skip = self.skip.unwrap_or(0);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);

        if skip < 0 {
            return Err("skip must be non-negative".to_string());
        }

        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(format!("limit must be between 1 and {}", MAX_LIMIT));
        }

        Ok((skip, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(skip: Option<i64>, limit: Option<i64>) -> ListQueryParams {
        ListQueryParams { skip, limit }
    }

    #[test]
    fn test_defaults() {
        let (skip, limit) = params(None, None).validate_and_get_offset_limit().unwrap();
        assert_eq!(skip, 0);
        assert_eq!(limit, DEFAULT_LIMIT);
    }

    #[test]
    fn test_explicit_values() {
        let (skip, limit) = params(Some(20), Some(10))
            .validate_and_get_offset_limit()
            .unwrap();
        assert_eq!(skip, 20);
        assert_eq!(limit, 10);
    }

    #[test]
    fn test_negative_skip_is_error() {
        assert!(params(Some(-1), None).validate_and_get_offset_limit().is_err());
    }

    #[test]
    fn test_limit_zero_is_error() {
        assert!(params(None, Some(0)).validate_and_get_offset_limit().is_err());
    }

    #[test]
    fn test_limit_at_maximum_is_ok() {
        assert!(
            params(None, Some(MAX_LIMIT))
                .validate_and_get_offset_limit()
                .is_ok()
        );
    }

    #[test]
    fn test_limit_above_maximum_is_error() {
        assert!(
            params(None, Some(MAX_LIMIT + 1))
                .validate_and_get_offset_limit()
                .is_err()
        );
    }

    #[test]
    fn test_query_string_integers_parse() {
        let p: ListQueryParams =
            serde_json::from_str(r#"{"skip": "25", "limit": "100"}"#).unwrap();
        assert_eq!(p.skip, Some(25));
        assert_eq!(p.limit, Some(100));
    }
}
