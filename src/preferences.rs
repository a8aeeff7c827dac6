use serde::{Deserialize, Serialize};

use crate::{
    calc_error::CalcError,
    unit::{Unit, convert_weight},
};

/// A user's loading setup: the bar, the rounding increment targets snap to,
/// and the plate weights on the rack. Each plate weight is one physical
/// plate, available in unlimited quantity and loaded in pairs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightPreferences {
    pub unit: Unit,
    pub bar_weight: f64,
    pub rounding: f64,
    pub plates: Vec<f64>,
}

impl WeightPreferences {
    #[must_use]
    pub fn new(unit: Unit, bar_weight: f64, rounding: f64, plates: Vec<f64>) -> Self {
        WeightPreferences {
            unit,
            bar_weight,
            rounding,
            plates,
        }
    }

    /// Standard olympic kg setup: 20 kg bar, full plate run down to 1.25 kg.
    #[must_use]
    pub fn default_kg() -> Self {
        WeightPreferences::new(
            Unit::Kilogram,
            20.0,
            2.5,
            vec![25.0, 20.0, 15.0, 10.0, 5.0, 2.5, 1.25],
        )
    }

    /// Standard lb setup: 45 lb bar, no 5 lb change plates.
    #[must_use]
    pub fn default_lb() -> Self {
        WeightPreferences::new(Unit::Pound, 45.0, 5.0, vec![45.0, 35.0, 25.0, 15.0, 10.0])
    }

    #[must_use]
    pub fn default_for(unit: Unit) -> Self {
        match unit {
            Unit::Kilogram => WeightPreferences::default_kg(),
            Unit::Pound => WeightPreferences::default_lb(),
        }
    }

    ///
    /// # Errors
    /// `InvalidWeight` if the bar weight or any plate breaks the bundle
    /// invariants, `InvalidIncrement` if the rounding increment does.
    ///
    pub fn validate(&self) -> Result<(), CalcError> {
        if !self.bar_weight.is_finite() || self.bar_weight < 0.0 {
            return Err(CalcError::InvalidWeight(self.bar_weight));
        }

        if !self.rounding.is_finite() || self.rounding <= 0.0 {
            return Err(CalcError::InvalidIncrement(self.rounding));
        }

        for &plate in &self.plates {
            if !plate.is_finite() || plate <= 0.0 {
                return Err(CalcError::InvalidWeight(plate));
            }
        }

        Ok(())
    }

    /// Re-expresses the whole bundle in `target_unit`, converting the bar
    /// weight, rounding increment, and every plate while preserving plate
    /// order. Same-unit reprojection is an identity with no recomputation.
    ///
    /// # Errors
    /// Whatever `convert_weight` fails with, propagated unchanged; no partial
    /// bundle is ever returned.
    ///
    pub fn reproject(&self, target_unit: Unit) -> Result<Self, CalcError> {
        if self.unit == target_unit {
            return Ok(self.clone());
        }

        let bar_weight = convert_weight(self.bar_weight, self.unit, target_unit)?;
        let rounding = convert_weight(self.rounding, self.unit, target_unit)?;
        let plates = self
            .plates
            .iter()
            .map(|&plate| convert_weight(plate, self.unit, target_unit))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(from = %self.unit, to = %target_unit, "reprojected preferences");

        Ok(WeightPreferences {
            unit: target_unit,
            bar_weight,
            rounding,
            plates,
        })
    }
}

impl Default for WeightPreferences {
    fn default() -> Self {
        WeightPreferences::default_kg()
    }
}
