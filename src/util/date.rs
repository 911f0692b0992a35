//! Date rendering in the `zh-CN` numeric style used across the site.
//!
//! In the browser, timestamps are parsed by `Date`, so they are shown in the
//! visitor's local time zone. Native builds parse with `chrono` and render
//! the wall clock as written. A wasm build without `hydrate` has neither and
//! renders every timestamp as invalid.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

/// Rendered for input that does not parse as a timestamp.
pub const INVALID_DATE: &str = "Invalid Date";

/// Calendar and clock fields of a parsed timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateParts {
    pub year: i32,
    /// 1-based.
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl DateParts {
    /// `YYYY/MM/DD`.
    pub fn date_string(&self) -> String {
        format!("{}/{:02}/{:02}", self.year, self.month, self.day)
    }

    /// `YYYY/M/D HH:MM:SS`.
    pub fn date_time_string(&self) -> String {
        format!(
            "{}/{}/{} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Parse an ISO-8601 timestamp into local calendar fields.
pub fn parse_iso(iso: &str) -> Option<DateParts> {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(iso));
        if date.get_time().is_nan() {
            return None;
        }
        Some(DateParts {
            year: i32::try_from(date.get_full_year()).ok()?,
            month: date.get_month() + 1,
            day: date.get_date(),
            hour: date.get_hours(),
            minute: date.get_minutes(),
            second: date.get_seconds(),
        })
    }
    #[cfg(all(not(feature = "hydrate"), not(target_arch = "wasm32")))]
    {
        parse_iso_naive(iso)
    }
    #[cfg(all(not(feature = "hydrate"), target_arch = "wasm32"))]
    {
        let _ = iso;
        None
    }
}

#[cfg(all(not(feature = "hydrate"), not(target_arch = "wasm32")))]
fn parse_iso_naive(iso: &str) -> Option<DateParts> {
    use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};

    let iso = iso.trim();
    let naive = DateTime::parse_from_rfc3339(iso)
        .map(|dt| dt.naive_local())
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f").ok())
        .or_else(|| NaiveDateTime::parse_from_str(iso, "%Y-%m-%d %H:%M:%S%.f").ok())
        .or_else(|| NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M").ok())
        .or_else(|| {
            NaiveDate::parse_from_str(iso, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;

    Some(DateParts {
        year: naive.year(),
        month: naive.month(),
        day: naive.day(),
        hour: naive.hour(),
        minute: naive.minute(),
        second: naive.second(),
    })
}

/// Date only, e.g. `2024/03/05`. Empty input renders as empty.
pub fn format_date(iso: &str) -> String {
    if iso.is_empty() {
        return String::new();
    }
    parse_iso(iso).map_or_else(|| INVALID_DATE.to_owned(), |parts| parts.date_string())
}

/// Date and time, e.g. `2024/3/5 14:07:09`. Empty input renders as empty.
pub fn format_date_time(iso: &str) -> String {
    if iso.is_empty() {
        return String::new();
    }
    parse_iso(iso).map_or_else(|| INVALID_DATE.to_owned(), |parts| parts.date_time_string())
}
