//! User-facing errors raised by a derivation cycle.
//!
//! Every variant is recoverable: the `Display` text is what the form shows
//! above the inputs.

use thiserror::Error;

use super::fields::Field;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("{0} must be a number")]
    NotANumber(Field),
    #[error(transparent)]
    OutOfRange(#[from] RangeViolation),
    #[error("Enter any two values to calculate the others")]
    InsufficientInputs,
    #[error("Cannot compute with the provided values")]
    Unsolvable,
}

/// Domain bound broken by an otherwise numeric input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RangeViolation {
    #[error("Price must be greater than zero")]
    PriceNotPositive,
    #[error("Cost cannot be negative")]
    NegativeCost,
    #[error("Margin must be greater than zero")]
    MarginNotPositive,
    #[error("Margin must be less than 100")]
    MarginNotBelowHundred,
}

impl RangeViolation {
    pub fn field(&self) -> Field {
        match self {
            RangeViolation::PriceNotPositive => Field::Price,
            RangeViolation::NegativeCost => Field::Cost,
            RangeViolation::MarginNotPositive | RangeViolation::MarginNotBelowHundred => {
                Field::Margin
            }
        }
    }
}

impl CalcError {
    /// The field the message is about, when there is a single one.
    pub fn field(&self) -> Option<Field> {
        match self {
            CalcError::NotANumber(field) => Some(*field),
            CalcError::OutOfRange(violation) => Some(violation.field()),
            CalcError::InsufficientInputs | CalcError::Unsolvable => None,
        }
    }
}
