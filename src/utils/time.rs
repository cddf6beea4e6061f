//! Wall-clock helpers backed by `Date`.

use js_sys::Date;

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> u64 {
    Date::now() as u64
}

/// Today's local date as `YYYY/M/D`.
pub fn today() -> String {
    let now = Date::new_0();
    format_date(now.get_full_year(), now.get_month() + 1, now.get_date())
}

/// Format a calendar date without zero padding.
pub fn format_date(year: u32, month: u32, day: u32) -> String {
    format!("{}/{}/{}", year, month, day)
}
