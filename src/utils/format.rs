//! Formatting utilities for dates and footer text.

/// Format a wall-clock time as `dd/mm/yyyy HH:MM:SS`.
///
/// `month` is 1-based.
pub fn format_timestamp(year: u32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> String {
    format!(
        "{:02}/{:02}/{:04} {:02}:{:02}:{:02}",
        day, month, year, hour, minute, second
    )
}

/// Current local time, formatted with [`format_timestamp`].
pub fn current_timestamp() -> String {
    let now = js_sys::Date::new_0();
    format_timestamp(
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date(),
        now.get_hours(),
        now.get_minutes(),
        now.get_seconds(),
    )
}

/// Current local year.
pub fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

/// Copyright years: `base` alone, or `base-current` once the year has passed.
pub fn copyright_years(base: i32, current: i32) -> String {
    if current > base {
        format!("{}-{}", base, current)
    } else {
        base.to_string()
    }
}
