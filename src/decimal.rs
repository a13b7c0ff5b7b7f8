//! Fixed-point number text that rounds ties away from zero.
//!
//! `format!("{:.N}")` rounds a value that sits exactly halfway between two
//! outputs to the even one; exported coordinates and displayed results round
//! it up instead.

#[cfg(test)]
#[path = "decimal_test.rs"]
mod decimal_test;

/// Largest integer every smaller one of which is exact in an `f64`.
const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

/// Most fraction digits that can still be rounded exactly.
const MAX_DIGITS: usize = 15;

/// `val` with exactly `digits` fraction digits.
pub fn to_fixed(val: f64, digits: usize) -> String {
    if !val.is_finite() || digits > MAX_DIGITS {
        return format!("{val:.digits$}");
    }
    // A halfway value is an odd multiple of 2^-(digits + 1); nothing else
    // with a 5 in that place is exact in binary.
    let exponent = digits as i32 + 1;
    let halves = val.abs() * 2f64.powi(exponent);
    let wide = val.abs() * 10f64.powi(exponent);
    let is_tie = halves.fract() == 0.0 && halves % 2.0 == 1.0;
    if !is_tie || wide >= MAX_EXACT {
        return format!("{val:.digits$}");
    }

    // `wide` ends in a 5; drop it and round the rest up.
    let rounded = (wide as u64) / 10 + 1;
    let sign = if val < 0.0 { "-" } else { "" };
    if digits == 0 {
        return format!("{sign}{rounded}");
    }
    let unit = 10u64.pow(digits as u32);
    format!("{sign}{}.{:0digits$}", rounded / unit, rounded % unit)
}
