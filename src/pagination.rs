//! Cursor-based pagination primitives.
//!
//! Listings are ordered newest-first (`created_at DESC`, ties broken by
//! `id DESC`). The cursor is the `created_at` of the last row of the previous
//! page, serialized as an RFC 3339 UTC timestamp; the next page is everything
//! strictly *before* it. Direction is applied consistently to both the sort
//! and the comparison — mixing them skips or repeats rows.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use thiserror::Error;

/// Page size applied when the caller does not provide one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;
/// Upper bound on the page size a caller may request.
pub const MAX_PAGE_SIZE: i64 = 100;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("malformed cursor: {0}")]
pub struct CursorError(String);

/// Serialize a pagination boundary as an RFC 3339 UTC timestamp.
pub fn encode_cursor(boundary: NaiveDateTime) -> String {
    DateTime::<Utc>::from_naive_utc_and_offset(boundary, Utc)
        .to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a cursor previously produced by [`encode_cursor`].
pub fn decode_cursor(raw: &str) -> Result<NaiveDateTime, CursorError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_utc())
        .map_err(|_| CursorError(raw.to_string()))
}

/// One page of an ordered listing plus the boundary of the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorPage<T> {
    pub items: Vec<T>,
    pub next_cursor: Option<NaiveDateTime>,
}

impl<T> CursorPage<T> {
    /// Build a page from rows fetched with `limit + 1` (over-fetch technique).
    ///
    /// The presence of the extra row signals a further page; it is dropped and
    /// the sort key of the last *retained* row becomes the continuation
    /// cursor. Fewer rows than the limit means end of list.
    pub fn from_overfetched<F>(mut rows: Vec<T>, limit: i64, key: F) -> Self
    where
        F: Fn(&T) -> NaiveDateTime,
    {
        let limit = limit.max(0) as usize;
        let next_cursor = if rows.len() > limit {
            rows.truncate(limit);
            rows.last().map(&key)
        } else {
            None
        };
        Self { items: rows, next_cursor }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(secs: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 1)
            .unwrap()
            .and_hms_opt(12, 0, secs)
            .unwrap()
    }

    #[test]
    fn cursor_round_trips() {
        let boundary = ts(42);
        let encoded = encode_cursor(boundary);
        assert_eq!(decode_cursor(&encoded).unwrap(), boundary);
    }

    #[test]
    fn malformed_cursor_is_rejected() {
        assert!(decode_cursor("yesterday").is_err());
        assert!(decode_cursor("2026-08-01").is_err());
        assert!(decode_cursor("").is_err());
    }

    #[test]
    fn overfetched_page_trims_extra_row_and_sets_cursor() {
        // Descending rows, limit 2, one extra fetched.
        let page = CursorPage::from_overfetched(vec![ts(3), ts(2), ts(1)], 2, |t| *t);
        assert_eq!(page.items, vec![ts(3), ts(2)]);
        assert_eq!(page.next_cursor, Some(ts(2)));
    }

    #[test]
    fn short_page_has_no_cursor() {
        let page = CursorPage::from_overfetched(vec![ts(2), ts(1)], 2, |t| *t);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.next_cursor, None);

        let empty: CursorPage<NaiveDateTime> = CursorPage::from_overfetched(vec![], 2, |t| *t);
        assert!(empty.items.is_empty());
        assert_eq!(empty.next_cursor, None);
    }
}
