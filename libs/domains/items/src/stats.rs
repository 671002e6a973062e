//! Descriptive statistics over loosely typed sequences.
//!
//! Every function accepts a slice of anything [`Numeric`] and silently skips
//! entries that are not numbers (including NaN). With no numeric entries the
//! result is zero, never an error.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::models::Price;

/// A value that may or may not hold a number.
pub trait Numeric {
    fn as_number(&self) -> Option<f64>;
}

impl Numeric for f64 {
    fn as_number(&self) -> Option<f64> {
        (!self.is_nan()).then_some(*self)
    }
}

impl Numeric for i64 {
    fn as_number(&self) -> Option<f64> {
        Some(*self as f64)
    }
}

impl Numeric for Value {
    fn as_number(&self) -> Option<f64> {
        self.as_f64().filter(|n| !n.is_nan())
    }
}

impl Numeric for Price {
    fn as_number(&self) -> Option<f64> {
        self.amount()
    }
}

impl<T: Numeric> Numeric for Option<T> {
    fn as_number(&self) -> Option<f64> {
        self.as_ref().and_then(Numeric::as_number)
    }
}

impl<T: Numeric + ?Sized> Numeric for &T {
    fn as_number(&self) -> Option<f64> {
        (**self).as_number()
    }
}

/// Smallest and largest numeric entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MinMax {
    pub min: f64,
    pub max: f64,
}

fn numbers<T: Numeric>(values: &[T]) -> Vec<f64> {
    values.iter().filter_map(Numeric::as_number).collect()
}

fn mean_of(numbers: &[f64]) -> f64 {
    if numbers.is_empty() {
        return 0.0;
    }
    numbers.iter().sum::<f64>() / numbers.len() as f64
}

/// Arithmetic mean of the numeric entries.
pub fn mean<T: Numeric>(values: &[T]) -> f64 {
    mean_of(&numbers(values))
}

/// Middle value of the sorted numeric entries; mean of the two central
/// values when the count is even.
pub fn median<T: Numeric>(values: &[T]) -> f64 {
    let mut sorted = numbers(values);
    if sorted.is_empty() {
        return 0.0;
    }
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Population standard deviation of the numeric entries.
pub fn standard_deviation<T: Numeric>(values: &[T]) -> f64 {
    let numbers = numbers(values);
    if numbers.is_empty() {
        return 0.0;
    }

    let avg = mean_of(&numbers);
    let squared_diffs: Vec<f64> = numbers.iter().map(|n| (n - avg).powi(2)).collect();
    mean_of(&squared_diffs).sqrt()
}

/// Minimum and maximum of the numeric entries.
pub fn min_max<T: Numeric>(values: &[T]) -> MinMax {
    let numbers = numbers(values);
    if numbers.is_empty() {
        return MinMax::default();
    }

    numbers.iter().fold(
        MinMax {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        },
        |acc, &n| MinMax {
            min: acc.min.min(n),
            max: acc.max.max(n),
        },
    )
}
