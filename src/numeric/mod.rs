//! Numeric helpers shared by both engines: rounding, interpolation, means

mod color;

pub use color::{ColorGradient, Rgb};

/// Round to `decimals` places, halves away from zero.
///
/// For the non-negative currency amounts of a projection this is the usual
/// half-up display rounding.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Round to two decimal places (currency and percentage display)
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Linear blend between `a` and `b`; `t = 0` gives `a`, `t = 1` gives `b`
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Short currency label for chart axes and console summaries.
///
/// `$0`, `$12.5`, `$5k`, `$1.2M`, `$3.4B`, `$1.0T`
pub fn format_compact_currency(value: f64) -> String {
    if value == 0.0 {
        return "$0".to_string();
    }

    let trillions = value / 1_000_000_000_000.0;
    let billions = value / 1_000_000_000.0;
    let millions = value / 1_000_000.0;
    let thousands = value / 1_000.0;

    if trillions >= 1.0 {
        format!("${:.1}T", trillions)
    } else if billions >= 1.0 {
        format!("${:.1}B", billions)
    } else if millions >= 1.0 {
        format!("${:.1}M", millions)
    } else if thousands >= 1.0 {
        format!("${:.0}k", thousands)
    } else {
        format!("${:.1}", value)
    }
}
