//! Column width distribution for tables.
//!
//! Given each column's natural width and an optional total, [`resize_columns`]
//! grows or shrinks the columns in proportion to their natural widths. The
//! result is deterministic and sums to the target whenever the target is
//! reachable.

use tracing::trace;

use crate::metrics::width;

/// Natural width of each column: the widest cell in it.
///
/// Rows may be ragged; missing cells count as empty.
pub fn column_minimums<S: AsRef<str>>(rows: &[Vec<S>]) -> Vec<usize> {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0; columns];
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(width(cell.as_ref()));
        }
    }
    widths
}

/// Distribute a total width over columns.
///
/// - No target: the minimums are returned unchanged.
/// - Target at or above the sum: each column gets
///   `floor(surplus * min / sum)` extra, then the remainder goes one cell at
///   a time to the earliest columns.
/// - Target below the sum: each column keeps one cell plus
///   `floor((target - columns) * (min - 1) / capacity)`, where `capacity` is
///   the sum of `min - 1`. Leftover cells go to the largest fractional
///   shares, earliest first on ties, so a wider column never ends up
///   narrower than a smaller one.
/// - Target below the column count: every column is 1 wide and the total
///   exceeds the target.
///
/// ```rust
/// use veneer::resize_columns;
///
/// assert_eq!(resize_columns(&[3, 5, 2], Some(20)), vec![6, 10, 4]);
/// assert_eq!(resize_columns(&[3, 5, 2], None), vec![3, 5, 2]);
/// ```
pub fn resize_columns(minimums: &[usize], target: Option<usize>) -> Vec<usize> {
    let Some(target) = target else {
        trace!(columns = minimums.len(), "resize: natural widths");
        return minimums.to_vec();
    };
    if minimums.is_empty() {
        return Vec::new();
    }

    let sum: usize = minimums.iter().sum();
    if target >= sum {
        grow(minimums, sum, target)
    } else if minimums.len() > target {
        trace!(columns = minimums.len(), target, "resize: clamp to 1");
        vec![1; minimums.len()]
    } else {
        shrink(minimums, sum, target)
    }
}

fn grow(minimums: &[usize], sum: usize, target: usize) -> Vec<usize> {
    let surplus = target - sum;
    trace!(sum, target, surplus, "resize: grow");

    let mut widths: Vec<usize> = if sum == 0 {
        vec![surplus / minimums.len(); minimums.len()]
    } else {
        minimums
            .iter()
            .map(|&m| m + surplus * m / sum)
            .collect()
    };

    let remainder = target - widths.iter().sum::<usize>();
    let n = widths.len();
    for i in 0..remainder {
        widths[i % n] += 1;
    }
    widths
}

fn shrink(minimums: &[usize], sum: usize, target: usize) -> Vec<usize> {
    // Every column keeps one cell; the rest of the target is shared out in
    // proportion to what each column could give up.
    let spare = target - minimums.len();
    let capacity: usize = minimums.iter().map(|m| m.saturating_sub(1)).sum();
    trace!(sum, target, spare, capacity, "resize: shrink");

    let shares: Vec<usize> = minimums.iter().map(|m| spare * m.saturating_sub(1)).collect();
    let mut widths: Vec<usize> = shares.iter().map(|s| 1 + s / capacity).collect();

    // Largest fractional share first, earliest column on ties.
    let mut order: Vec<usize> = (0..minimums.len()).collect();
    order.sort_by_key(|&i| (std::cmp::Reverse(shares[i] % capacity), i));

    let remainder = target - widths.iter().sum::<usize>();
    for &i in order.iter().take(remainder) {
        widths[i] += 1;
    }
    widths
}
