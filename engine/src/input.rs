// Parse-and-validate boundary for text fields. Every panel converts its raw
// input exactly once, here, instead of sprinkling ad hoc parse checks.

use crate::error::EngineError;

/// Strict parse: rejection names the offending field so the notification can
/// say which input was bad.
pub fn parse_field(field: &'static str, text: &str) -> Result<f64, EngineError> {
    let trimmed = text.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| EngineError::invalid_input(field, trimmed))
}

/// Lenient parse for fields whose legacy behaviour treats unparseable input
/// as zero (mortgage, tip, EMI live recomputation).
pub fn parse_or_zero(text: &str) -> f64 {
    parse_or(text, 0.0)
}

pub fn parse_or(text: &str, default: f64) -> f64 {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(default)
}

/// Strict integer parse, used by the vedic tricks and people counts.
pub fn parse_int_field(field: &'static str, text: &str) -> Result<i64, EngineError> {
    let trimmed = text.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| EngineError::invalid_input(field, trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_accepts_numbers() {
        assert_eq!(parse_field("amount", "42").unwrap(), 42.0);
        assert_eq!(parse_field("amount", " 3.5 ").unwrap(), 3.5);
        assert_eq!(parse_field("amount", "-0.25").unwrap(), -0.25);
    }

    #[test]
    fn test_parse_field_rejects_garbage() {
        assert!(parse_field("amount", "").is_err());
        assert!(parse_field("amount", "abc").is_err());
        assert!(parse_field("amount", "inf").is_err());
        assert!(parse_field("amount", "NaN").is_err());
    }

    #[test]
    fn test_parse_field_error_names_field() {
        let err = parse_field("bill amount", "x").unwrap_err();
        assert_eq!(err, EngineError::invalid_input("bill amount", "x"));
    }

    #[test]
    fn test_parse_or_zero() {
        assert_eq!(parse_or_zero(""), 0.0);
        assert_eq!(parse_or_zero("7"), 7.0);
        assert_eq!(parse_or("", 30.0), 30.0);
    }

    #[test]
    fn test_parse_int_field() {
        assert_eq!(parse_int_field("count", "35").unwrap(), 35);
        assert!(parse_int_field("count", "3.5").is_err());
    }
}
