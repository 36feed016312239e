//! Formatting utilities used for console output.

use unicode_width::UnicodeWidthStr;

/// Left-align `s` in a field of `width` terminal columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}

/// Right-align `s` in a field of `width` terminal columns.
pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{s}", " ".repeat(fill))
}

/// Seconds as `1d 02h 03m 04s`; the day part is omitted when zero.
///
/// Fractions are rounded to the nearest second.
pub fn secs2readable(seconds: f64) -> String {
    let total = if seconds.is_finite() {
        seconds.abs().round() as u64
    } else {
        0
    };
    let sign = if seconds < 0.0 && total > 0 { "-" } else { "" };

    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let secs = total % 60;

    if days > 0 {
        format!("{sign}{days}d {hours:02}h {minutes:02}m {secs:02}s")
    } else {
        format!("{sign}{hours:02}h {minutes:02}m {secs:02}s")
    }
}

/// `1.0` → `1`, `1782.951` → `1782.951`
pub fn trim_float(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        let s = format!("{value:.3}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
