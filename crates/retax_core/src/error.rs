use std::fmt;

/// Errors raised when scenario inputs cannot support a valid computation.
///
/// These are blocking validation failures: the caller must surface them and
/// withhold the result set rather than clamping the offending input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputError {
    /// Land value meets or exceeds total value, leaving no depreciable basis
    NonPositiveBuildingValue { total_value: f64, land_value: f64 },
    /// Recovery period must be a positive number of years
    NonPositiveDepreciationPeriod(f64),
    /// At least one year must be modeled
    ZeroModelingYears,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NonPositiveBuildingValue {
                total_value,
                land_value,
            } => {
                write!(
                    f,
                    "building value must be positive (total {total_value} minus land {land_value})"
                )
            }
            InputError::NonPositiveDepreciationPeriod(years) => {
                write!(f, "depreciation period must be positive, got {years}")
            }
            InputError::ZeroModelingYears => {
                write!(f, "modeling period must cover at least one year")
            }
        }
    }
}

impl std::error::Error for InputError {}

pub type Result<T> = std::result::Result<T, InputError>;
