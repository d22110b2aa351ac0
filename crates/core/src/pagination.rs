//! Pagination defaults shared by list endpoints.

use serde::Deserialize;

/// Number of rows returned when `?limit=` is omitted.
pub const DEFAULT_LIMIT: i64 = 10;

/// Rows skipped when `?offset=` is omitted.
pub const DEFAULT_OFFSET: i64 = 0;

/// Generic pagination parameters (`?limit=&offset=`).
///
/// Values are passed to the storage layer as-is. SQLite treats a negative
/// `LIMIT` as unbounded and a negative `OFFSET` as zero.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PaginationParams {
    /// Effective limit, falling back to [`DEFAULT_LIMIT`].
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    /// Effective offset, falling back to [`DEFAULT_OFFSET`].
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(DEFAULT_OFFSET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_use_defaults() {
        let params = PaginationParams {
            limit: None,
            offset: None,
        };
        assert_eq!(params.limit(), 10);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn explicit_values_are_kept_verbatim() {
        let params = PaginationParams {
            limit: Some(0),
            offset: Some(-3),
        };
        assert_eq!(params.limit(), 0);
        assert_eq!(params.offset(), -3);
    }
}
