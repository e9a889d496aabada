use std::cmp::Ordering;

use crate::{units::Reading, Error};

/// Arithmetic mean of the values. Empty input is an [`Error::EmptyInput`].
pub fn calculate_mean<T: Reading>(values: &[T]) -> Result<f64, Error> {
    if values.is_empty() {
        return Err(Error::EmptyInput);
    }

    let sum = values
        .iter()
        .map(|value| value.reading())
        .sum::<Result<f64, _>>()?;
    Ok(sum / values.len() as f64)
}

/// Smallest value and the index of its **last** occurrence, `None` when empty.
pub fn find_min<T: Reading>(values: &[T]) -> Result<Option<(f64, usize)>, Error> {
    find_last(values, Ordering::Less)
}

/// Largest value and the index of its **last** occurrence, `None` when empty.
pub fn find_max<T: Reading>(values: &[T]) -> Result<Option<(f64, usize)>, Error> {
    find_last(values, Ordering::Greater)
}

// Forward scan that also moves on equal values, so ties resolve to the last index.
// NaN sorts above every number (`total_cmp`).
fn find_last<T: Reading>(values: &[T], wanted: Ordering) -> Result<Option<(f64, usize)>, Error> {
    let mut best: Option<(f64, usize)> = None;

    for (index, value) in values.iter().enumerate() {
        let value = value.reading()?;
        match best {
            Some((current, _)) if value != current && value.total_cmp(&current) != wanted => {}
            _ => best = Some((value, index)),
        }
    }

    Ok(best)
}
