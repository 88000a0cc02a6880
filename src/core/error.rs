use thiserror::Error;

use super::validation::ValidationReport;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("invalid parameters: {0}")]
    Invalid(ValidationReport),

    #[error("unknown calculator `{0}`")]
    UnknownCalculator(String),
}

pub type CalcResult<T> = std::result::Result<T, CalcError>;
