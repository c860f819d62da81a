use num_traits::{Float, NumCast};
use std::fmt::Display;

/// Number of decimal places shown when printing results
pub const DISPLAY_DECIMALS: u32 = 2;

/// Rounds half away from zero to the given number of decimal places.
///
/// Values too large to carry the requested fractional digits are returned unchanged.
pub fn round_to<T: Float>(x: T, decimals: u32) -> T {
    let exp = i32::try_from(decimals).unwrap_or(i32::MAX);
    let scale = <T as NumCast>::from(10u8).map_or_else(T::one, |ten| ten.powi(exp));
    let scaled = x * scale;
    // beyond 1 / epsilon the mantissa holds no fractional part
    if !scaled.is_finite() || scaled.abs() >= T::epsilon().recip() {
        return x;
    }
    // adding zero turns -0 into 0
    (scaled.round() / scale) + T::zero()
}

/// Renders values as `[a, b, c]` after rounding each one.
///
/// Trailing zeros are dropped, i.e. `6.0` renders as `6` and `113.10` as `113.1`.
pub fn format_sequence<'a, T>(values: impl IntoIterator<Item = &'a T>, decimals: u32) -> String
where
    T: 'a + Float + Display,
{
    let items = values
        .into_iter()
        .map(|&x| round_to(x, decimals).to_string())
        .collect::<Vec<_>>();
    format!("[{}]", items.join(", "))
}
