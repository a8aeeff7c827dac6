use serde::Serialize;

use crate::{calc_error::CalcError, preferences::WeightPreferences};

/// The nearest achievable total assuming unlimited plates of the smallest
/// denomination, together with the granularity that produced it. Unlike the
/// solver this may round up past the target.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearestTotal {
    pub total: f64,
    pub delta: f64,
    /// None when the plate set is empty and only the bar can be loaded.
    pub step_side: Option<f64>,
    pub step_total: Option<f64>,
}

/// Snaps `target_total` to the nearest loadable total: the per-side remainder
/// rounds to a multiple of the smallest plate, so the result moves in steps
/// of twice that plate.
///
/// # Errors
/// `InvalidWeight` for a negative or non-finite target, plus whatever
/// `WeightPreferences::validate` reports.
///
pub fn nearest_loadable_total(
    target_total: f64,
    prefs: &WeightPreferences,
) -> Result<NearestTotal, CalcError> {
    if !target_total.is_finite() || target_total < 0.0 {
        return Err(CalcError::InvalidWeight(target_total));
    }

    prefs.validate()?;

    let step_side = prefs.plates.iter().copied().fold(f64::INFINITY, f64::min);

    if !step_side.is_finite() {
        let total = round_tenth(prefs.bar_weight);
        return Ok(NearestTotal {
            total,
            delta: (total - target_total).abs(),
            step_side: None,
            step_total: None,
        });
    }

    let side_target = ((target_total - prefs.bar_weight) / 2.0).max(0.0);
    let rounded_side = ((side_target / step_side).round() * step_side).max(0.0);
    let total = round_tenth(prefs.bar_weight + 2.0 * rounded_side);

    Ok(NearestTotal {
        total,
        delta: (total - target_total).abs(),
        step_side: Some(step_side),
        step_total: Some(2.0 * step_side),
    })
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
