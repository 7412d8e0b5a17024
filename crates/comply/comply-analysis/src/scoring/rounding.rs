//! Percentage rounding.
//!
//! Every percentage the pipeline emits goes through [`round_pct`]: two
//! decimals, ties rounded half away from zero (`f64::round`).

/// Round to two decimal places, half away from zero.
pub fn round_pct(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
