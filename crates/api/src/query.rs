//! Shared query parameter types for API handlers.

use discog_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIMIT, MAX_LIMIT};
use serde::Deserialize;

/// Generic pagination parameters (`?limit=&offset=`).
///
/// Values are clamped with [`PaginationParams::limit`] / [`PaginationParams::offset`]
/// before they reach a repository.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PaginationParams {
    pub fn limit(&self) -> i64 {
        clamp_limit(self.limit, DEFAULT_LIMIT, MAX_LIMIT)
    }

    pub fn offset(&self) -> i64 {
        clamp_offset(self.offset)
    }
}

/// Query parameters for `GET /artists` (`?q=&limit=&offset=`).
///
/// Fields are spelled out rather than flattening [`PaginationParams`]
/// because `serde_urlencoded` cannot parse numbers through `flatten`.
#[derive(Debug, Default, Deserialize)]
pub struct ArtistListParams {
    /// Case-insensitive substring match on the artist name.
    pub q: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ArtistListParams {
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams {
            limit: self.limit,
            offset: self.offset,
        }
    }

    /// The trimmed search term, or `None` when blank.
    pub fn search(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_defaults_and_clamps() {
        let params = PaginationParams::default();
        assert_eq!(params.limit(), DEFAULT_LIMIT);
        assert_eq!(params.offset(), 0);

        let params = PaginationParams {
            limit: Some(MAX_LIMIT + 1),
            offset: Some(-1),
        };
        assert_eq!(params.limit(), MAX_LIMIT);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn blank_search_is_ignored() {
        let params = ArtistListParams {
            q: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(params.search(), None);

        let params = ArtistListParams {
            q: Some(" bon ".into()),
            ..Default::default()
        };
        assert_eq!(params.search(), Some("bon"));
    }
}
