use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// "9:05 AM"
pub fn format_time<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format("%-I:%M %p").to_string()
}

/// "9:05:32 AM"
pub fn format_time_with_seconds<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format("%-I:%M:%S %p").to_string()
}

/// "Mon, Jan 5"
pub fn format_short_date<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format("%a, %b %-d").to_string()
}

/// "Friday, October 16, 2026"
pub fn format_long_date<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format("%A, %B %-d, %Y").to_string()
}

pub fn count_label(n: usize, what: &str) -> String {
    format!("{} {}", n, what)
}
