// The three percentage questions: p% of x, what % is x of y, and x is p% of
// what.

use crate::error::EngineError;

/// p% of a total.
pub fn percent_of(percent: f64, total: f64) -> f64 {
    percent / 100.0 * total
}

/// What percent `part` is of `whole`.
pub fn what_percent(part: f64, whole: f64) -> Result<f64, EngineError> {
    if whole == 0.0 {
        return Err(EngineError::DivisionByZero);
    }
    Ok(part / whole * 100.0)
}

/// The number that `value` is `percent` of.
pub fn value_from_percent(value: f64, percent: f64) -> Result<f64, EngineError> {
    if percent == 0.0 {
        return Err(EngineError::DivisionByZero);
    }
    Ok(value / (percent / 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(15.0, 80.0), 12.0);
        assert_eq!(percent_of(0.0, 80.0), 0.0);
    }

    #[test]
    fn test_what_percent() {
        assert_eq!(what_percent(12.0, 50.0).unwrap(), 24.0);
        assert_eq!(what_percent(0.0, 50.0).unwrap(), 0.0);
        assert_eq!(what_percent(12.0, 0.0), Err(EngineError::DivisionByZero));
    }

    #[test]
    fn test_value_from_percent() {
        assert_eq!(value_from_percent(25.0, 40.0).unwrap(), 62.5);
        assert_eq!(value_from_percent(25.0, 0.0), Err(EngineError::DivisionByZero));
    }
}
