//! Field formatting shared by every report encoding
//!
//! Numbers are rendered the way the dashboard displays them: currency with a
//! `$` prefix and exactly two decimals, percentages as the supplied number
//! followed by `%`. Nothing is validated; NaN and infinities are printed
//! as `NaN` and `Infinity`.
//!
//! Exact halfway cents (`0.125`, `10.375`) round away from zero, and
//! percentages switch to exponent notation below `1e-6` and from `1e21`,
//! matching how the web dashboard prints the same numbers.

/// Render a non-finite value the way the dashboard prints it
fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("Infinity")
    } else if value == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

/// Format a currency amount: `$` + two decimals (`45.5` -> `$45.50`)
pub fn format_currency(value: f64) -> String {
    if let Some(text) = non_finite(value) {
        return format!("${}", text);
    }
    format!("${}", to_fixed_2(value))
}

/// Two-decimal rendering with ties rounded away from zero
///
/// A binary value sits exactly halfway between two cents only when it is an
/// odd number of eighths, so those are rounded with integer arithmetic and
/// everything else goes through `{:.2}`.
fn to_fixed_2(value: f64) -> String {
    // -0.0 prints as "-0.00" otherwise
    let value = if value == 0.0 { 0.0 } else { value };
    let eighths = value.abs() * 8.0;

    if eighths < MAX_EXACT_EIGHTHS && eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        // value * 100 = eighths * 25 / 2, odd numerator, so round up
        let cents = (eighths as u64 * 25 + 1) / 2;
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}{}.{:02}", sign, cents / 100, cents % 100);
    }

    format!("{:.2}", value)
}

/// Largest eighths count whose integer form is exact in an `f64`
const MAX_EXACT_EIGHTHS: f64 = 9_007_199_254_740_992.0;

/// Format a percentage as given, followed by `%` (`23` -> `23%`)
pub fn format_percentage(value: f64) -> String {
    if let Some(text) = non_finite(value) {
        return format!("{}%", text);
    }
    format!("{}%", number_text(value))
}

/// Shortest decimal form, in exponent notation outside `[1e-6, 1e21)`
fn number_text(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 {
        format!("{:e}", value).replacen('e', "e+", 1)
    } else if magnitude < 1e-6 {
        format!("{:e}", value)
    } else {
        format!("{}", value)
    }
}
