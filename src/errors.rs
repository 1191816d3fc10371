use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImpactError {
    #[error("Baseline consumption series was invalid: {0}")]
    InvalidBaseline(#[from] SeriesError),
    #[error("Modifier '{name}' had an invalid value: {reason}")]
    InvalidModifier { name: String, reason: String },
    #[error("Modifier {modifier} would give a consumption multiplier of {multiplier} for {month}, which is outside the range 0 to 1")]
    ModifierOutOfRange {
        modifier: String,
        month: String,
        multiplier: f64,
    },
    #[error("Impact configuration was invalid: {0}")]
    InvalidConfig(String),
}

impl ImpactError {
    pub(crate) fn invalid_modifier(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidModifier {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// An error representing a monthly series that cannot stand for a calendar year.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SeriesError {
    #[error("Expected exactly 12 monthly values but got {0}")]
    WrongLength(usize),
    #[error("Value for month index {index} was not a finite number ({value})")]
    NonFinite { index: usize, value: f64 },
}

#[derive(Debug, Error)]
pub enum ConsumptionFileError {
    #[error("Could not read consumption file: {0}")]
    Csv(#[from] csv::Error),
    #[error("Row {row} was for month '{found}' but {expected} was expected")]
    MonthOutOfOrder {
        row: usize,
        found: String,
        expected: String,
    },
    #[error(transparent)]
    Series(#[from] SeriesError),
}
