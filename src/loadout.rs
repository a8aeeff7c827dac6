use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::unit::Unit;

/// A solved symmetric loadout. `per_side` is sorted descending and
/// `total_weight = bar_weight + 2 * sum(per_side)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlateLoadout {
    pub per_side: Vec<f64>,
    pub bar_weight: f64,
    pub total_weight: f64,
    /// The requested target after snapping to the rounding increment.
    pub target_weight: f64,
    pub unit: Unit,
}

impl PlateLoadout {
    #[must_use]
    pub(crate) fn bar_only(bar_weight: f64, target_weight: f64, unit: Unit) -> Self {
        PlateLoadout {
            per_side: Vec::new(),
            bar_weight,
            total_weight: bar_weight,
            target_weight,
            unit,
        }
    }

    #[must_use]
    pub fn per_side_total(&self) -> f64 {
        self.per_side.iter().sum()
    }

    /// Achieved minus target; zero when the target is reached exactly.
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.total_weight - self.target_weight
    }

    #[must_use]
    pub fn is_bar_only(&self) -> bool {
        self.per_side.is_empty()
    }
}

impl Display for PlateLoadout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}: {} {} bar + {:?} per side",
            self.total_weight, self.unit, self.bar_weight, self.unit, self.per_side
        )
    }
}
