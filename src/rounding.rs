use crate::calc_error::CalcError;

/// Snaps `value` to the nearest multiple of `increment`. Exact halfway points
/// round away from zero, which is plain half-up on this non-negative domain.
///
/// # Errors
/// `InvalidIncrement` if `increment` is non-positive or non-finite, and
/// `InvalidWeight` if `value` is negative or non-finite.
///
pub fn round_to_increment(value: f64, increment: f64) -> Result<f64, CalcError> {
    if !increment.is_finite() || increment <= 0.0 {
        return Err(CalcError::InvalidIncrement(increment));
    }

    if !value.is_finite() || value < 0.0 {
        return Err(CalcError::InvalidWeight(value));
    }

    Ok((value / increment).round() * increment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snaps_to_nearest_multiple() {
        assert_eq!(round_to_increment(101.0, 2.5).unwrap(), 100.0);
        assert_eq!(round_to_increment(101.5, 2.5).unwrap(), 102.5);
        assert_eq!(round_to_increment(100.0, 2.5).unwrap(), 100.0);
        assert_eq!(round_to_increment(99.0, 1.0).unwrap(), 99.0);
    }

    #[test]
    fn ties_round_up() {
        assert_eq!(round_to_increment(1.25, 2.5).unwrap(), 2.5);
        assert_eq!(round_to_increment(3.75, 2.5).unwrap(), 5.0);
        assert_eq!(round_to_increment(102.5, 5.0).unwrap(), 105.0);
    }

    #[test]
    fn zero_rounds_to_zero() {
        assert_eq!(round_to_increment(0.0, 2.5).unwrap(), 0.0);
    }

    #[test]
    fn rejects_bad_increments() {
        for &increment in &[0.0, -2.5, f64::NAN, f64::INFINITY] {
            let result = round_to_increment(100.0, increment);
            assert!(matches!(result, Err(CalcError::InvalidIncrement(_))));
        }
    }

    #[test]
    fn rejects_bad_values() {
        for &value in &[-1.0, f64::NAN, f64::INFINITY] {
            let result = round_to_increment(value, 2.5);
            assert!(matches!(result, Err(CalcError::InvalidWeight(_))));
        }
    }
}
