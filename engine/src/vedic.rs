// Vedic arithmetic shortcuts: each function implements one classic trick and
// validates that the input fits the trick's precondition.

use crate::error::EngineError;

/// Square of a number ending in 5: a·(a+1) with 25 appended, where a is the
/// leading digits. 35² = 3×4 | 25 = 1225.
pub fn square_ending_in_five(n: i64) -> Result<i64, EngineError> {
    if n < 0 || n % 10 != 5 {
        return Err(EngineError::invalid_input("number ending with 5", n.to_string()));
    }
    let tens = n / 10;
    tens.checked_mul(tens + 1)
        .and_then(|head| head.checked_mul(100))
        .and_then(|head| head.checked_add(25))
        .ok_or_else(|| EngineError::invalid_input("number ending with 5", n.to_string()))
}

/// Multiply by 11 (digit-pair addition trick; the arithmetic itself is
/// ordinary multiplication).
pub fn multiply_by_eleven(n: i64) -> Result<i64, EngineError> {
    n.checked_mul(11)
        .ok_or_else(|| EngineError::invalid_input("number", n.to_string()))
}

/// Square of a two-digit number via the base-100 expansion
/// (x + a)² = x² + 2ax + a² with x = 100.
pub fn two_digit_square(n: i64) -> Result<i64, EngineError> {
    if !(10..=99).contains(&n) {
        return Err(EngineError::invalid_input("two-digit number", n.to_string()));
    }
    let base = 100;
    let diff = n - base;
    Ok(base * base + 2 * base * diff + diff * diff)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Complement {
    /// Exponent of the power of ten subtracted from.
    pub exponent: u32,
    pub result: u64,
}

/// Subtraction from the next power of ten: all-from-9, last-from-10.
/// 1000 − 463 = 537.
pub fn complement_from_power_of_ten(n: u64) -> Result<Complement, EngineError> {
    if n == 0 {
        return Err(EngineError::invalid_input("number", "0"));
    }
    let exponent = n.ilog10() + 1;
    let power = 10u64
        .checked_pow(exponent)
        .ok_or_else(|| EngineError::invalid_input("number", n.to_string()))?;
    Ok(Complement { exponent, result: power - n })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_ending_in_five() {
        assert_eq!(square_ending_in_five(35).unwrap(), 1225);
        assert_eq!(square_ending_in_five(5).unwrap(), 25);
        assert_eq!(square_ending_in_five(105).unwrap(), 11025);
    }

    #[test]
    fn test_square_ending_in_five_rejects_others() {
        assert!(square_ending_in_five(34).is_err());
        assert!(square_ending_in_five(-15).is_err());
    }

    #[test]
    fn test_square_ending_in_five_overflow_rejected() {
        assert!(square_ending_in_five(4_000_000_005).is_err());
        assert!(square_ending_in_five(i64::MAX - 2).is_err());
        // Just under the overflow threshold still works.
        assert_eq!(square_ending_in_five(3_000_000_005).unwrap(), 9_000_000_030_000_000_025);
    }

    #[test]
    fn test_multiply_by_eleven() {
        assert_eq!(multiply_by_eleven(53).unwrap(), 583);
        assert_eq!(multiply_by_eleven(0).unwrap(), 0);
        assert_eq!(multiply_by_eleven(-8).unwrap(), -88);
    }

    #[test]
    fn test_multiply_by_eleven_overflow_rejected() {
        assert!(multiply_by_eleven(i64::MAX).is_err());
        assert!(multiply_by_eleven(i64::MIN).is_err());
        // Largest magnitudes that still fit.
        assert_eq!(multiply_by_eleven(i64::MAX / 11).unwrap(), i64::MAX / 11 * 11);
        assert_eq!(multiply_by_eleven(i64::MIN / 11).unwrap(), i64::MIN / 11 * 11);
    }

    #[test]
    fn test_two_digit_square_matches_plain_square() {
        for n in 10..=99 {
            assert_eq!(two_digit_square(n).unwrap(), n * n);
        }
    }

    #[test]
    fn test_two_digit_square_bounds() {
        assert!(two_digit_square(9).is_err());
        assert!(two_digit_square(100).is_err());
    }

    #[test]
    fn test_complement_from_power_of_ten() {
        let c = complement_from_power_of_ten(463).unwrap();
        assert_eq!(c.exponent, 3);
        assert_eq!(c.result, 537);

        let c = complement_from_power_of_ten(7).unwrap();
        assert_eq!(c.exponent, 1);
        assert_eq!(c.result, 3);
    }

    #[test]
    fn test_complement_rejects_zero() {
        assert!(complement_from_power_of_ten(0).is_err());
    }
}
