//! Margin calculator logic: parsing, validation, solving and formatting.

pub mod app_state;
pub mod engine;
pub mod error;
pub mod fields;
pub mod format;
pub mod history;
pub mod parse;
pub mod solver;
pub mod sources;
pub mod validation;

pub use app_state::CalculatorState;
pub use engine::{
    derive, DerivationCache, DerivationKey, DerivationOutcome, DisplayResult, RawInputs,
};
pub use error::{CalcError, RangeViolation};
pub use fields::{Field, Fields};
pub use format::format_value;
pub use history::{RecentSet, SourceHistory};
pub use parse::{parse_input, ParsedValue};
pub use solver::DerivedValues;
pub use sources::{select_sources, PairKind, SourcePair};
