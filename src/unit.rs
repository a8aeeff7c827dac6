use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::calc_error::CalcError;

/// 1 kg expressed in lb. Precise enough to keep kg -> lb -> kg round trips
/// within a relative error of 1e-6.
pub const KG_TO_LB: f64 = 2.204_622_621_8;

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Ord, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "lb")]
    Pound,
}

impl Unit {
    #[must_use]
    pub fn other(self) -> Unit {
        match self {
            Unit::Kilogram => Unit::Pound,
            Unit::Pound => Unit::Kilogram,
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Kilogram => write!(f, "kg"),
            Unit::Pound => write!(f, "lb"),
        }
    }
}

impl FromStr for Unit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" => Ok(Unit::Kilogram),
            "lb" => Ok(Unit::Pound),
            _ => Err(CalcError::InvalidUnit(s.to_string())),
        }
    }
}

/// A scalar weight tagged with the unit it was recorded in.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    value: f64,
    unit: Unit,
}

impl Weight {
    #[must_use]
    pub fn new(value: f64, unit: Unit) -> Self {
        Weight { value, unit }
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn unit(&self) -> Unit {
        self.unit
    }

    ///
    /// # Errors
    /// Whatever `convert_weight` fails with.
    ///
    pub fn convert_to(&self, unit: Unit) -> Result<Weight, CalcError> {
        Ok(Weight {
            value: convert_weight(self.value, self.unit, unit)?,
            unit,
        })
    }
}

///
/// # Errors
/// If `value` is negative, NaN, or non-finite.
///
pub fn convert_weight(value: f64, from: Unit, to: Unit) -> Result<f64, CalcError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CalcError::InvalidWeight(value));
    }

    // Identity conversions return the input untouched.
    Ok(match (from, to) {
        (Unit::Kilogram, Unit::Kilogram) | (Unit::Pound, Unit::Pound) => value,
        (Unit::Kilogram, Unit::Pound) => value * KG_TO_LB,
        (Unit::Pound, Unit::Kilogram) => value / KG_TO_LB,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "{actual} not within {tolerance} of {expected}"
        );
    }

    #[test]
    fn same_unit_is_exact_identity() {
        assert_eq!(convert_weight(100.0, Unit::Kilogram, Unit::Kilogram).unwrap(), 100.0);
        assert_eq!(convert_weight(0.1, Unit::Pound, Unit::Pound).unwrap(), 0.1);
        assert_eq!(convert_weight(0.0, Unit::Kilogram, Unit::Kilogram).unwrap(), 0.0);
    }

    #[test]
    fn converts_kg_to_lb() {
        assert_close(convert_weight(20.0, Unit::Kilogram, Unit::Pound).unwrap(), 44.09245, 1e-4);
        assert_close(convert_weight(100.0, Unit::Kilogram, Unit::Pound).unwrap(), 220.462, 1e-3);
    }

    #[test]
    fn converts_lb_to_kg() {
        assert_close(convert_weight(45.0, Unit::Pound, Unit::Kilogram).unwrap(), 20.41166, 1e-4);
    }

    #[test]
    fn round_trip_stays_within_relative_tolerance() {
        for &value in &[0.0, 0.25, 1.25, 2.5, 20.0, 45.0, 100.0, 142.5, 317.5, 1000.0] {
            let there = convert_weight(value, Unit::Kilogram, Unit::Pound).unwrap();
            let back = convert_weight(there, Unit::Pound, Unit::Kilogram).unwrap();
            assert_close(back, value, 1e-6 * value.max(1.0));
        }
    }

    #[test]
    fn rejects_invalid_weights() {
        for &value in &[-1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = convert_weight(value, Unit::Kilogram, Unit::Pound);
            assert!(matches!(result, Err(CalcError::InvalidWeight(_))));
        }
    }

    #[test]
    fn parses_unit_tokens() {
        assert_eq!(Unit::from_str("kg").unwrap(), Unit::Kilogram);
        assert_eq!(Unit::from_str("LB").unwrap(), Unit::Pound);
        assert!(matches!(Unit::from_str("st"), Err(CalcError::InvalidUnit(_))));
    }

    #[test]
    fn weight_objects_convert_and_keep_their_unit() {
        let weight = Weight::new(10.0, Unit::Kilogram);
        let converted = weight.convert_to(Unit::Pound).unwrap();

        assert_eq!(converted.unit(), Unit::Pound);
        assert_close(converted.value(), 22.0462, 1e-4);

        let same = weight.convert_to(Unit::Kilogram).unwrap();
        assert_eq!(same, weight);
    }

    #[test]
    fn serializes_to_wire_tokens() {
        assert_eq!(serde_json::to_string(&Unit::Kilogram).unwrap(), "\"kg\"");
        assert_eq!(serde_json::from_str::<Unit>("\"lb\"").unwrap(), Unit::Pound);
    }
}
