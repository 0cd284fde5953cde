//! Source location resolution for raw linter positions.
//!
//! Linters often report single-point locations (no end, or end equal to
//! start). Those are widened by one column so the resulting range is never
//! empty.

use crate::models::issue::{IssueLocation, ResolvedRange};

/// Resolve a raw 1-based `(line, column, end_line, end_column)` position.
///
/// - `line <= 0`: `None`, the issue belongs to the file as a whole.
/// - `column <= 0`: the whole of `line`.
/// - otherwise a range with 0-based half-open columns, widened when the raw
///   end does not lie after the start.
pub fn resolve(line: i32, column: i32, end_line: i32, end_column: i32) -> Option<IssueLocation> {
    if line <= 0 {
        return None;
    }
    if column <= 0 {
        return Some(IssueLocation::Line {
            line: line.unsigned_abs(),
        });
    }

    // Positive `i32` values fit in `u32` with room for the one-column widening.
    let start_column = column.unsigned_abs();
    let end_column = if end_column > column {
        end_column.unsigned_abs()
    } else {
        start_column + 1
    };

    Some(IssueLocation::Range(ResolvedRange {
        start_line: line.unsigned_abs(),
        start_column: start_column - 1,
        end_line: end_line.max(line).unsigned_abs(),
        end_column: end_column - 1,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(sl: u32, sc: u32, el: u32, ec: u32) -> Option<IssueLocation> {
        Some(IssueLocation::Range(ResolvedRange {
            start_line: sl,
            start_column: sc,
            end_line: el,
            end_column: ec,
        }))
    }

    #[test]
    fn no_line_means_no_location() {
        assert_eq!(resolve(0, 10, 5, 12), None);
        assert_eq!(resolve(-3, 0, 0, 0), None);
        assert_eq!(resolve(0, 0, 0, 0), None);
    }

    #[test]
    fn no_column_selects_whole_line() {
        assert_eq!(resolve(5, 0, 5, 0), Some(IssueLocation::Line { line: 5 }));
        assert_eq!(resolve(7, -1, 9, 4), Some(IssueLocation::Line { line: 7 }));
    }

    #[test]
    fn converts_columns_to_zero_based() {
        assert_eq!(resolve(3, 4, 3, 9), range(3, 3, 3, 8));
    }

    #[test]
    fn zero_width_range_is_widened() {
        assert_eq!(resolve(5, 10, 5, 10), range(5, 9, 5, 10));
    }

    #[test]
    fn missing_end_is_widened() {
        assert_eq!(resolve(5, 10, 0, 0), range(5, 9, 5, 10));
    }

    #[test]
    fn reversed_end_line_is_clamped_to_start() {
        assert_eq!(resolve(8, 2, 4, 6), range(8, 1, 8, 5));
    }

    #[test]
    fn reversed_end_column_is_widened_even_across_lines() {
        // End column is compared with the start column regardless of lines.
        assert_eq!(resolve(2, 10, 4, 3), range(2, 9, 4, 10));
    }

    #[test]
    fn multi_line_range_is_kept() {
        assert_eq!(resolve(2, 1, 6, 20), range(2, 0, 6, 19));
    }

    #[test]
    fn largest_column_still_widens() {
        let max = i32::MAX.unsigned_abs();
        assert_eq!(resolve(5, i32::MAX, 5, 0), range(5, max - 1, 5, max));
        assert_eq!(resolve(5, i32::MAX, 5, i32::MAX), range(5, max - 1, 5, max));
    }

    #[test]
    fn resolved_ranges_are_never_empty() {
        for line in 1..4 {
            for column in 1..6 {
                for end_line in -1..5 {
                    for end_column in -1..8 {
                        let Some(IssueLocation::Range(r)) =
                            resolve(line, column, end_line, end_column)
                        else {
                            panic!("expected a range");
                        };
                        assert!(r.end_line >= r.start_line);
                        assert!(r.end_line > r.start_line || r.end_column > r.start_column);
                    }
                }
            }
        }
    }
}
