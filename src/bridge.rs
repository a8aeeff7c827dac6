use crate::calc_error::CalcError;
use crate::loadout::PlateLoadout;
use crate::preferences::WeightPreferences;
use crate::solver::solve;
use crate::unit::{Unit, Weight};

#[swift_bridge::bridge]
mod ffi {
    extern "Rust" {
        type Unit;
        type Weight;
        type WeightPreferences;
        type PlateLoadout;
        type CalcError;

        #[swift_bridge(associated_to = Unit)]
        fn kilogram() -> Unit;
        #[swift_bridge(associated_to = Unit)]
        fn pound() -> Unit;

        #[swift_bridge(init)]
        fn new(value: f64, unit: Unit) -> Weight;
        fn convert_to(self: &Weight, unit: Unit) -> Result<Weight, CalcError>;
        fn value(self: &Weight) -> f64;
        fn unit(self: &Weight) -> Unit;

        #[swift_bridge(init)]
        fn new(unit: Unit, bar_weight: f64, rounding: f64, plates: Vec<f64>) -> WeightPreferences;
        fn reproject(
            self: &WeightPreferences,
            target_unit: Unit,
        ) -> Result<WeightPreferences, CalcError>;

        fn solve(target_weight: f64, prefs: &WeightPreferences) -> Result<PlateLoadout, CalcError>;

        fn plates_per_side(self: &PlateLoadout) -> Vec<f64>;
        fn achieved_total(self: &PlateLoadout) -> f64;
        fn rounded_target(self: &PlateLoadout) -> f64;
    }
}

impl Unit {
    fn kilogram() -> Self {
        Unit::Kilogram
    }

    fn pound() -> Self {
        Unit::Pound
    }
}

impl PlateLoadout {
    fn plates_per_side(&self) -> Vec<f64> {
        self.per_side.clone()
    }

    fn achieved_total(&self) -> f64 {
        self.total_weight
    }

    fn rounded_target(&self) -> f64 {
        self.target_weight
    }
}
