use time::{format_description::BorrowedFormatItem, macros::format_description, Date};

use crate::Error;

const ISO_DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Turns `2021-07-06` into `Tuesday 06 July 2021`.
pub fn convert_date(iso: &str) -> Result<String, Error> {
    let date = Date::parse(iso, ISO_DATE).map_err(|source| Error::InvalidDate {
        value: iso.to_string(),
        source,
    })?;

    Ok(format!(
        "{} {:02} {} {:04}",
        date.weekday(),
        date.day(),
        date.month(),
        date.year()
    ))
}
