use serde::Serialize;

use crate::{
    calc_error::CalcError, loadout::PlateLoadout, preferences::WeightPreferences,
    rounding::round_to_increment, solver::solve,
};

pub const DEFAULT_FROM_PERCENT: f64 = 125.0;
pub const DEFAULT_TO_PERCENT: f64 = 40.0;
pub const DEFAULT_STEP_PERCENT: f64 = 5.0;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PercentRow {
    pub percent: f64,
    /// The raw percentage of the max, before rounding.
    pub target: f64,
    pub loadout: PlateLoadout,
}

/// Builds a warmup/overload table: one solved loadout per percentage of
/// `max_weight`, sweeping from `from_percent` down to `to_percent`. Rows
/// whose target falls below the bar weight degrade to a bar-only loadout
/// rather than failing, since a percentage sweep legitimately passes under
/// the bar.
///
/// # Errors
/// `InvalidWeight` for a negative or non-finite max, `InvalidIncrement` for a
/// non-positive step, and any solver error other than `TargetBelowBar`.
///
pub fn percentage_table(
    max_weight: f64,
    prefs: &WeightPreferences,
    from_percent: f64,
    to_percent: f64,
    step_percent: f64,
) -> Result<Vec<PercentRow>, CalcError> {
    if !max_weight.is_finite() || max_weight < 0.0 {
        return Err(CalcError::InvalidWeight(max_weight));
    }

    if !step_percent.is_finite() || step_percent <= 0.0 {
        return Err(CalcError::InvalidIncrement(step_percent));
    }

    let mut rows = Vec::new();
    let mut percent = from_percent;

    while percent >= to_percent {
        let target = max_weight * percent / 100.0;
        let loadout = match solve(target, prefs) {
            Err(CalcError::TargetBelowBar { .. }) => PlateLoadout::bar_only(
                prefs.bar_weight,
                round_to_increment(target, prefs.rounding)?,
                prefs.unit,
            ),
            other => other?,
        };

        rows.push(PercentRow {
            percent,
            target,
            loadout,
        });
        percent -= step_percent;
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweeps_from_high_to_low() {
        let prefs = WeightPreferences::default_kg();
        let rows = percentage_table(
            100.0,
            &prefs,
            DEFAULT_FROM_PERCENT,
            DEFAULT_TO_PERCENT,
            DEFAULT_STEP_PERCENT,
        )
        .unwrap();

        assert_eq!(rows.len(), 18);
        assert_eq!(rows[0].percent, 125.0);
        assert_eq!(rows[rows.len() - 1].percent, 40.0);
        assert!(rows.windows(2).all(|pair| pair[0].percent > pair[1].percent));
    }

    #[test]
    fn the_full_row_matches_a_direct_solve() {
        let prefs = WeightPreferences::default_kg();
        let rows = percentage_table(100.0, &prefs, 125.0, 40.0, 5.0).unwrap();

        let full = rows.iter().find(|row| row.percent == 100.0).unwrap();
        assert_eq!(full.loadout, solve(100.0, &prefs).unwrap());
    }

    #[test]
    fn below_bar_rows_degrade_to_the_bare_bar() {
        let prefs = WeightPreferences::default_kg();
        let rows = percentage_table(30.0, &prefs, 100.0, 40.0, 5.0).unwrap();

        let low = rows.iter().find(|row| row.percent == 40.0).unwrap();
        assert!(low.loadout.is_bar_only());
        assert_eq!(low.loadout.total_weight, 20.0);
        // Bar-only under the target leaves a positive delta, like the
        // original calculator displayed.
        assert!(low.loadout.delta() > 0.0);
    }

    #[test]
    fn rejects_a_non_positive_step() {
        let prefs = WeightPreferences::default_kg();
        let result = percentage_table(100.0, &prefs, 125.0, 40.0, 0.0);
        assert!(matches!(result, Err(CalcError::InvalidIncrement(_))));
    }
}
