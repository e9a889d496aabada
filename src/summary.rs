use crate::{
    date::convert_date,
    record::WeatherRecord,
    stats::calculate_mean,
    units::{convert_f_to_c, format_temperature, round_tenth, Celsius},
    Error,
};

/// A record with its date and temperatures ready for display.
struct Day {
    label: String,
    min: f64,
    max: f64,
}

impl Day {
    fn convert(record: &WeatherRecord) -> Result<Self, Error> {
        Ok(Self {
            label: convert_date(&record.date)?,
            min: convert_f_to_c(record.temp_min_f)?,
            max: convert_f_to_c(record.temp_max_f)?,
        })
    }
}

fn days(records: &[WeatherRecord]) -> Result<Vec<Day>, Error> {
    records.iter().map(Day::convert).collect()
}

/// Overview of the whole period: extremes with the day they occur on, and
/// the average low and high.
///
/// The lowest and highest temperatures are attributed to the **first** day on
/// which they occur, unlike [`crate::find_min`] and [`crate::find_max`] which
/// report the last index.
pub fn generate_summary(records: &[WeatherRecord]) -> Result<String, Error> {
    let days = days(records)?;

    let mut lowest: Option<(f64, &str)> = None;
    let mut highest: Option<(f64, &str)> = None;
    for day in &days {
        if lowest.map_or(true, |(temp, _)| day.min < temp) {
            lowest = Some((day.min, &day.label));
        }
        if highest.map_or(true, |(temp, _)| day.max > temp) {
            highest = Some((day.max, &day.label));
        }
    }

    let (Some((low, day_low)), Some((high, day_high))) = (lowest, highest) else {
        return Err(Error::EmptyInput);
    };

    let mins: Vec<f64> = days.iter().map(|day| day.min).collect();
    let maxs: Vec<f64> = days.iter().map(|day| day.max).collect();
    let mean_low = round_tenth(calculate_mean(&mins)?);
    let mean_high = round_tenth(calculate_mean(&maxs)?);

    Ok(format!(
        "{} Day Overview\n\
         \x20 The lowest temperature will be {}, and will occur on {day_low}.\n\
         \x20 The highest temperature will be {}, and will occur on {day_high}.\n\
         \x20 The average low this week is {}.\n\
         \x20 The average high this week is {}.\n",
        records.len(),
        format_temperature(Celsius(low)),
        format_temperature(Celsius(high)),
        format_temperature(Celsius(mean_low)),
        format_temperature(Celsius(mean_high)),
    ))
}

/// One block per record, in input order. No records gives an empty string.
pub fn generate_daily_summary(records: &[WeatherRecord]) -> Result<String, Error> {
    Ok(days(records)?
        .iter()
        .map(|day| {
            format!(
                "---- {} ----\n  Minimum Temperature: {}\n  Maximum Temperature: {}\n\n",
                day.label,
                format_temperature(Celsius(day.min)),
                format_temperature(Celsius(day.max)),
            )
        })
        .collect())
}
