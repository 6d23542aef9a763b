// Number-to-text helpers shared by the engine and the GUI panels.

/// Default textual form of a calculator value. Matches Rust's shortest
/// round-trip float formatting ("15", "0.1", "NaN"); infinities are spelled
/// out so the display never shows "inf".
pub fn format_number(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity".into() } else { "-Infinity".into() };
    }
    format!("{}", value)
}

/// Fixed-decimal formatting with trailing zeros (and a dangling point)
/// trimmed, e.g. `trim_fixed(32.0, 4)` -> "32", `trim_fixed(1.50, 2)` -> "1.5".
/// Used by the converter and percentage panels.
pub fn trim_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".into();
    }
    let fixed = format!("{:.*}", decimals, value);
    if !fixed.contains('.') {
        return fixed;
    }
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Two-decimal money string with thousand separators, e.g. "1,234.56".
pub fn format_money(value: f64) -> String {
    if !value.is_finite() {
        return format_number(value);
    }
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_integers_have_no_point() {
        assert_eq!(format_number(15.0), "15");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-7.0), "-7");
    }

    #[test]
    fn test_format_number_specials() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_trim_fixed() {
        assert_eq!(trim_fixed(32.0, 4), "32");
        assert_eq!(trim_fixed(1.5, 2), "1.5");
        assert_eq!(trim_fixed(0.123456, 4), "0.1235");
        assert_eq!(trim_fixed(100.0, 6), "100");
    }

    #[test]
    fn test_format_money_grouping() {
        assert_eq!(format_money(1234.5), "1,234.50");
        assert_eq!(format_money(1000000.0), "1,000,000.00");
        assert_eq!(format_money(999.999), "1,000.00");
        assert_eq!(format_money(-42.0), "-42.00");
        assert_eq!(format_money(0.5), "0.50");
    }
}
