//! Common helpers for worked-time arithmetic.
//!
//! This module provides the hour/minute split and its display form, shared
//! by per-card durations and aggregate totals.

/// Splits a minute count into whole hours and the leftover minutes.
///
/// # Arguments
///
/// * `total_minutes` - The minute count to split
///
/// # Returns
///
/// `(floor(total_minutes / 60), total_minutes mod 60)`.
///
/// # Examples
///
/// ```
/// use shift_core::calculations::common::split_hours_minutes;
///
/// assert_eq!(split_hours_minutes(150), (2, 30));
/// assert_eq!(split_hours_minutes(120), (2, 0));
/// assert_eq!(split_hours_minutes(59), (0, 59));
/// ```
pub fn split_hours_minutes(total_minutes: u32) -> (u32, u32) {
    (total_minutes / 60, total_minutes % 60)
}

/// Formats a minute count as `{H}時間` or `{H}時間{M}分`.
///
/// The minute part is omitted when it is zero.
///
/// # Examples
///
/// ```
/// use shift_core::calculations::common::format_hours_minutes;
///
/// assert_eq!(format_hours_minutes(150), "2時間30分");
/// assert_eq!(format_hours_minutes(120), "2時間");
/// assert_eq!(format_hours_minutes(0), "0時間");
/// ```
pub fn format_hours_minutes(total_minutes: u32) -> String {
    match split_hours_minutes(total_minutes) {
        (hours, 0) => format!("{hours}時間"),
        (hours, minutes) => format!("{hours}時間{minutes}分"),
    }
}
