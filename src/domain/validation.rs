//! Input checks run before any value is derived.

use super::{
    error::{CalcError, RangeViolation},
    fields::{Field, Fields},
    parse::{parse_input, ParsedValue},
};

/// Numeric value per field; `None` for blank inputs.
pub type FilledValues = Fields<Option<f64>>;

/// Parses all four inputs and applies the checks in their fixed order.
///
/// Only the first failing check is reported. On success every filled field
/// holds a finite number within its bounds and at least two fields are filled.
pub fn validate(raw: &Fields<String>) -> Result<FilledValues, CalcError> {
    let parsed = raw.map(|_, text| parse_input(text));

    if let Some(field) = Field::PRIORITY
        .into_iter()
        .find(|field| *parsed.get(*field) == ParsedValue::Invalid)
    {
        return Err(CalcError::NotANumber(field));
    }

    let values = parsed.map(|_, value| value.number());
    check_ranges(&values)?;

    let filled = values.iter().filter(|(_, value)| value.is_some()).count();
    if filled < 2 {
        return Err(CalcError::InsufficientInputs);
    }

    Ok(values)
}

fn check_ranges(values: &FilledValues) -> Result<(), RangeViolation> {
    if values.price.is_some_and(|price| price <= 0.0) {
        return Err(RangeViolation::PriceNotPositive);
    }
    if values.cost.is_some_and(|cost| cost < 0.0) {
        return Err(RangeViolation::NegativeCost);
    }
    if let Some(margin) = values.margin {
        if margin <= 0.0 {
            return Err(RangeViolation::MarginNotPositive);
        }
        if margin >= 100.0 {
            return Err(RangeViolation::MarginNotBelowHundred);
        }
    }
    Ok(())
}
