//! Shared helper functions for SQLite repositories.

use crate::db::PaginationOptions;

/// Build a LIMIT/OFFSET clause from pagination options. Zero means
/// unbounded / from the start.
///
/// Note: SQL requires LIMIT when using OFFSET. If an offset is given
/// without a limit, we use LIMIT -1 (SQLite's "no limit" value).
pub fn build_limit_offset_clause(page: &PaginationOptions) -> String {
    let mut clause = String::new();

    if page.limit != 0 {
        clause.push_str(&format!(" LIMIT {}", page.limit));
    } else if page.offset != 0 {
        clause.push_str(" LIMIT -1");
    }

    if page.offset != 0 {
        clause.push_str(&format!(" OFFSET {}", page.offset));
    }

    clause
}
