//! End-to-end: CSV text in, reports out.

use std::path::PathBuf;

use weather_report::{
    convert_f_to_c, find_max, find_min, generate_daily_summary, generate_summary,
    load_data_from_csv, parse_records, Error, RowErrorKind, WeatherRecord,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

#[test]
fn week_overview() {
    let records = load_data_from_csv(fixture("week.csv")).unwrap();
    assert_eq!(records.len(), 8);
    assert_eq!(records[0], WeatherRecord::new("2020-06-19", 47, 46));

    assert_eq!(
        generate_summary(&records).unwrap(),
        "8 Day Overview\n  \
         The lowest temperature will be 8.3°C, and will occur on Friday 19 June 2020.\n  \
         The highest temperature will be 22.2°C, and will occur on Sunday 21 June 2020.\n  \
         The average low this week is 11.4°C.\n  \
         The average high this week is 18.8°C.\n"
    );
}

#[test]
fn week_daily() {
    let records = load_data_from_csv(fixture("week.csv")).unwrap();
    let daily = generate_daily_summary(&records[..3]).unwrap();

    assert_eq!(
        daily,
        "---- Friday 19 June 2020 ----\n  \
         Minimum Temperature: 8.3°C\n  \
         Maximum Temperature: 7.8°C\n\n\
         ---- Saturday 20 June 2020 ----\n  \
         Minimum Temperature: 10.6°C\n  \
         Maximum Temperature: 19.4°C\n\n\
         ---- Sunday 21 June 2020 ----\n  \
         Minimum Temperature: 14.4°C\n  \
         Maximum Temperature: 22.2°C\n\n"
    );

    let full = generate_daily_summary(&records).unwrap();
    assert_eq!(full.matches("---- ").count(), 8);
}

#[test]
fn two_day_overview_from_text() {
    let records = parse_records("date,min,max\n2021-07-05,49,67\n2021-07-06,57,68\n").unwrap();
    let summary = generate_summary(&records).unwrap();
    let lines: Vec<&str> = summary.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "2 Day Overview");
    assert_eq!(lines[3], "  The average low this week is 11.7°C.");
    assert_eq!(lines[4], "  The average high this week is 19.7°C.");
}

// The overview credits a tied extreme to the first day, while find_min and
// find_max report the last index. Both behaviours are kept as they are.
#[test]
fn tie_break_differs_between_overview_and_extremes() {
    let records = vec![
        WeatherRecord::new("2021-07-01", 40, 60),
        WeatherRecord::new("2021-07-02", 40, 60),
    ];

    let summary = generate_summary(&records).unwrap();
    assert!(summary.contains("4.4°C, and will occur on Thursday 01 July 2021."));
    assert!(summary.contains("15.6°C, and will occur on Thursday 01 July 2021."));

    let mins: Vec<f64> = records
        .iter()
        .map(|record| convert_f_to_c(record.temp_min_f).unwrap())
        .collect();
    let maxs: Vec<f64> = records
        .iter()
        .map(|record| convert_f_to_c(record.temp_max_f).unwrap())
        .collect();
    assert_eq!(find_min(&mins).unwrap(), Some((4.4, 1)));
    assert_eq!(find_max(&maxs).unwrap(), Some((15.6, 1)));
}

#[test]
fn header_only_file() {
    let records = parse_records("date,min,max\n").unwrap();
    assert!(generate_daily_summary(&records).unwrap().is_empty());
    assert!(matches!(generate_summary(&records), Err(Error::EmptyInput)));
}

#[test]
fn malformed_row_aborts_the_load() {
    let err = parse_records("date,min,max\n2021-07-05,49,67\n2021-07-06,57\n2021-07-07,50,60\n")
        .unwrap_err();
    match err {
        Error::MalformedRow(row) => {
            assert_eq!(row.line, 3);
            assert_eq!(row.kind, RowErrorKind::WrongArity { found: 2 });
        }
        other => panic!("expected MalformedRow, got {other:?}"),
    }
}

#[test]
fn missing_file() {
    let err = load_data_from_csv(fixture("does-not-exist.csv")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }), "expected Io, got {err:?}");
    assert!(err.to_string().starts_with("could not read "));
}
