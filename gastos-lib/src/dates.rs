use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Day format used by the API, e.g. `16/12/2029`.
pub const DAY_FORMAT: &str = "%d/%m/%Y";

const DAY_FORMATS: [&str; 2] = [DAY_FORMAT, "%Y-%m-%d"];

const TIMESTAMP_FORMATS: [&str; 6] = [
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

pub fn parse_day(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DAY_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

/// Parses a point in time. A bare day means midnight; an RFC 3339 timestamp keeps the wall clock
/// time it was written with.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.naive_local())
        })
        .or_else(|| parse_day(value).map(|day| day.and_time(NaiveTime::MIN)))
}

pub fn format_day(date: NaiveDateTime) -> String {
    date.format(DAY_FORMAT).to_string()
}
