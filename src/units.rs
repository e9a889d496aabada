use std::fmt;

use crate::Error;

/// Appended to every rendered temperature.
pub const DEGREE_CELSIUS: &str = "\u{b0}C";

/// Anything that can be read as a numeric observation.
///
/// Primitive numbers convert as-is. Text is trimmed and parsed, and fails with
/// [`Error::TypeConversion`] when it is not a number.
pub trait Reading {
    fn reading(&self) -> Result<f64, Error>;
}

macro_rules! impl_reading {
    ($($ty:ty),*) => {
        $(
            impl Reading for $ty {
                fn reading(&self) -> Result<f64, Error> {
                    Ok(*self as f64)
                }
            }
        )*
    };
}

impl_reading!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl Reading for str {
    fn reading(&self) -> Result<f64, Error> {
        self.trim().parse().map_err(|_| Error::TypeConversion {
            value: self.to_string(),
        })
    }
}

impl Reading for String {
    fn reading(&self) -> Result<f64, Error> {
        self.as_str().reading()
    }
}

impl<T: Reading + ?Sized> Reading for &T {
    fn reading(&self) -> Result<f64, Error> {
        (**self).reading()
    }
}

/// A Celsius value as it appears in a report: always one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Celsius(pub f64);

impl fmt::Display for Celsius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Rounds to one decimal place.
///
/// Ties are resolved to even on the exact binary value, so `0.05` (stored just
/// above the tie) becomes `0.1`, `0.15` (stored just below) becomes `0.1` and
/// the exact tie `0.25` becomes `0.2`.
pub fn round_tenth(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.1}").parse().unwrap_or(value)
}

/// Converts a Fahrenheit reading to Celsius, rounded to one decimal place.
pub fn convert_f_to_c(value: impl Reading) -> Result<f64, Error> {
    let fahrenheit = value.reading()?;
    Ok(round_tenth(((fahrenheit - 32.0) * 5.0) / 9.0))
}

/// Renders `value` followed by `°C`. The value is printed as given.
pub fn format_temperature(value: impl fmt::Display) -> String {
    format!("{value}{DEGREE_CELSIUS}")
}
