//! Derivation engine for the margin calculator.
//!
//! Given any two of cost, price, profit and margin, [`domain::derive`] works
//! out the other two and returns the strings the form should show.

pub mod domain;
pub mod util;
