//! Unit conversions
//!
//! All results are rounded half-up (`-2.5` becomes `-2`, `2.5` becomes `3`),
//! matching how the dashboard rounds for display.

/// Round to the nearest integer, ties towards positive infinity
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[allow(clippy::cast_possible_truncation)]
fn to_whole(value: f64) -> i32 {
    // `as` saturates on overflow and maps NaN to 0
    round_half_up(value) as i32
}

/// Convert degrees Celsius to whole degrees Fahrenheit
///
/// ```
/// use domain::units::celsius_to_fahrenheit;
///
/// assert_eq!(celsius_to_fahrenheit(0.0), 32);
/// assert_eq!(celsius_to_fahrenheit(100.0), 212);
/// ```
#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> i32 {
    to_whole(celsius * 9.0 / 5.0 + 32.0)
}

/// Convert metres per second to whole kilometres per hour
///
/// ```
/// use domain::units::meters_per_second_to_kmh;
///
/// assert_eq!(meters_per_second_to_kmh(10.0), 36);
/// ```
#[must_use]
pub fn meters_per_second_to_kmh(speed: f64) -> i32 {
    to_whole(speed * 3.6)
}

/// Round degrees Celsius to a whole number
#[must_use]
pub fn whole_celsius(celsius: f64) -> i32 {
    to_whole(celsius)
}
