//! Daily weather reports from Fahrenheit min/max readings.
//!
//! Records are loaded from CSV text ([`parse_records`], [`load_data_from_csv`]),
//! converted to Celsius and turned into an overview ([`generate_summary`]) and
//! a per-day listing ([`generate_daily_summary`]).

use std::path::PathBuf;

use miette::Diagnostic;

pub mod date;
pub mod record;
pub mod stats;
pub mod summary;
pub mod units;

pub use date::convert_date;
pub use record::{load_data_from_csv, parse_records, RowError, RowErrorKind, WeatherRecord};
pub use stats::{calculate_mean, find_max, find_min};
pub use summary::{generate_daily_summary, generate_summary};
pub use units::{convert_f_to_c, format_temperature, round_tenth, Celsius, Reading};

#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum Error {
    #[error("cannot read `{value}` as a number")]
    #[diagnostic(code(weather_report::type_conversion))]
    TypeConversion { value: String },

    #[error("invalid ISO-8601 date `{value}`")]
    #[diagnostic(
        code(weather_report::invalid_date),
        help("dates are written YYYY-MM-DD, e.g. 2021-07-06")
    )]
    InvalidDate {
        value: String,
        source: time::error::Parse,
    },

    #[error("no values to average")]
    #[diagnostic(code(weather_report::empty_input))]
    EmptyInput,

    #[error(transparent)]
    #[diagnostic(transparent)]
    MalformedRow(#[from] RowError),

    #[error("could not read {}", path.display())]
    #[diagnostic(code(weather_report::io))]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
