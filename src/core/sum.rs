use crate::utils::error::{DrillError, Result};

/// Adds up `numbers`. An empty slice sums to zero.
pub fn sum(numbers: &[i64]) -> i64 {
    numbers.iter().sum()
}

/// Like [`sum`], but reports overflow instead of panicking or wrapping.
pub fn checked_sum(numbers: &[i64]) -> Result<i64> {
    let total = numbers.len();
    numbers
        .iter()
        .enumerate()
        .try_fold(0i64, |acc, (processed, &n)| {
            acc.checked_add(n)
                .ok_or_else(|| DrillError::OverflowError { processed, total })
        })
}
