use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Unrecognized weight unit {0:?}. Expected \"kg\" or \"lb\".")]
    InvalidUnit(String),
    #[error("Invalid weight {0}. Weights must be finite and non-negative.")]
    InvalidWeight(f64),
    #[error("Invalid rounding increment {0}. Increments must be finite and positive.")]
    InvalidIncrement(f64),
    #[error("Cannot load {target} onto a {bar} bar.")]
    TargetBelowBar { target: f64, bar: f64 },
}
