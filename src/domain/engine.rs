//! One derivation cycle: raw inputs and edit history in, display strings out.

use std::collections::VecDeque;

use serde::Serialize;

use super::{
    error::CalcError,
    fields::{Field, Fields},
    format::format_value,
    history::SourceHistory,
    solver::{has_nan, solve, DerivedValues},
    sources::{select_sources, SourcePair},
    validation::validate,
};

/// Verbatim text of each input box.
pub type RawInputs = Fields<String>;

/// What the form renders after a cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DisplayResult {
    pub cost: String,
    pub price: String,
    pub profit: String,
    pub margin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DisplayResult {
    fn from_fields(values: Fields<String>, error: Option<&CalcError>) -> Self {
        let Fields {
            cost,
            price,
            profit,
            margin,
        } = values;
        Self {
            cost,
            price,
            profit,
            margin,
            error: error.map(ToString::to_string),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Cost => &self.cost,
            Field::Price => &self.price,
            Field::Profit => &self.profit,
            Field::Margin => &self.margin,
        }
    }
}

/// Full result of a cycle, including the numbers behind the display strings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DerivationOutcome {
    pub display: DisplayResult,
    pub error: Option<CalcError>,
    pub sources: Option<SourcePair>,
    pub derived: Option<DerivedValues>,
}

impl DerivationOutcome {
    fn rejected(raw: &RawInputs, error: CalcError) -> Self {
        tracing::debug!(%error, "derivation rejected");
        Self {
            display: DisplayResult::from_fields(raw.clone(), Some(&error)),
            error: Some(error),
            sources: None,
            derived: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Runs one cycle. Never panics on user input; failures come back as
/// an outcome whose display echoes the raw text.
pub fn derive(raw: &RawInputs, history: &SourceHistory) -> DerivationOutcome {
    let values = match validate(raw) {
        Ok(values) => values,
        Err(error) => return DerivationOutcome::rejected(raw, error),
    };

    let Some(sources) = select_sources(history, &values) else {
        return DerivationOutcome::rejected(raw, CalcError::InsufficientInputs);
    };
    tracing::debug!(
        first = %sources.first(),
        second = %sources.second(),
        "selected source fields"
    );

    let derived = match solve(sources, &values) {
        Some(derived) if !has_nan(&derived) => derived,
        _ => return DerivationOutcome::rejected(raw, CalcError::Unsolvable),
    };

    let display = compose_display(raw, sources, &derived);
    DerivationOutcome {
        display: DisplayResult::from_fields(display, None),
        error: None,
        sources: Some(sources),
        derived: Some(derived),
    }
}

/// Source fields keep the user's text; the rest show formatted values, or the
/// raw text when the value cannot be shown.
fn compose_display(raw: &RawInputs, sources: SourcePair, derived: &DerivedValues) -> Fields<String> {
    raw.map(|field, text| {
        if sources.contains(field) {
            return text.clone();
        }
        format_value(*derived.get(field)).unwrap_or_else(|| text.clone())
    })
}

/// The five values a cycle depends on.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DerivationKey {
    pub inputs: RawInputs,
    pub history: SourceHistory,
}

const DEFAULT_CACHE_CAPACITY: usize = 32;

/// Small most-recently-used cache of cycle outcomes.
#[derive(Clone, Debug)]
pub struct DerivationCache {
    entries: VecDeque<(DerivationKey, DerivationOutcome)>,
    capacity: usize,
}

impl Default for DerivationCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }
}

impl DerivationCache {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn derive(&mut self, raw: &RawInputs, history: &SourceHistory) -> DerivationOutcome {
        let position = self
            .entries
            .iter()
            .position(|(key, _)| key.inputs == *raw && key.history == *history);

        if let Some(entry) = position.and_then(|index| self.entries.remove(index)) {
            tracing::trace!("derivation cache hit");
            let outcome = entry.1.clone();
            self.entries.push_front(entry);
            return outcome;
        }

        let outcome = derive(raw, history);
        let key = DerivationKey {
            inputs: raw.clone(),
            history: history.clone(),
        };
        self.entries.push_front((key, outcome.clone()));
        self.entries.truncate(self.capacity);
        outcome
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn inputs(pairs: &[(Field, &str)]) -> RawInputs {
        let mut raw = RawInputs::default();
        for (field, text) in pairs {
            *raw.get_mut(*field) = text.to_string();
        }
        raw
    }

    /// History as if `edits` were typed in order (last edit ends up first).
    fn edited(edits: &[Field]) -> SourceHistory {
        let mut history = SourceHistory::default();
        for field in edits {
            history.push_front(*field);
        }
        history
    }

    #[test]
    fn cost_and_price_derive_profit_and_margin() {
        let outcome = derive(
            &inputs(&[(Field::Cost, "60"), (Field::Price, "100")]),
            &edited(&[Field::Cost, Field::Price]),
        );
        assert_eq!(outcome.display.profit, "40.00");
        assert_eq!(outcome.display.margin, "40.00");
        assert_eq!(outcome.display.cost, "60");
        assert_eq!(outcome.display.price, "100");
        assert_eq!(outcome.display.error, None);
        assert!(outcome.is_ok());
    }

    #[test]
    fn zero_price_reports_range_error() {
        let raw = inputs(&[(Field::Price, "0")]);
        let outcome = derive(&raw, &edited(&[Field::Price]));
        assert_eq!(
            outcome.display.error.as_deref(),
            Some("Price must be greater than zero")
        );
        assert_eq!(outcome.display.price, "0");
        assert_eq!(outcome.derived, None);
    }

    #[test]
    fn single_value_asks_for_another() {
        let outcome = derive(&inputs(&[(Field::Cost, "10")]), &edited(&[Field::Cost]));
        assert_eq!(outcome.error, Some(CalcError::InsufficientInputs));
        assert_eq!(
            outcome.display.error.as_deref(),
            Some("Enter any two values to calculate the others")
        );
    }

    #[test]
    fn full_margin_is_rejected_before_solving() {
        let outcome = derive(
            &inputs(&[(Field::Cost, "100"), (Field::Margin, "100")]),
            &edited(&[Field::Cost, Field::Margin]),
        );
        assert_eq!(
            outcome.display.error.as_deref(),
            Some("Margin must be less than 100")
        );
    }

    #[test]
    fn zero_derived_price_cannot_be_computed() {
        let raw = inputs(&[(Field::Cost, "10"), (Field::Profit, "-10")]);
        let outcome = derive(&raw, &edited(&[Field::Cost, Field::Profit]));
        assert_eq!(outcome.error, Some(CalcError::Unsolvable));
        assert_eq!(
            outcome.display.error.as_deref(),
            Some("Cannot compute with the provided values")
        );
        assert_eq!(outcome.display.cost, "10");
        assert_eq!(outcome.display.profit, "-10");
        assert_eq!(outcome.display.price, "");
        assert_eq!(outcome.display.margin, "");
    }

    #[test]
    fn profit_and_margin_derive_price_and_cost() {
        let outcome = derive(
            &inputs(&[(Field::Profit, "25"), (Field::Margin, "20")]),
            &edited(&[Field::Profit, Field::Margin]),
        );
        assert_eq!(outcome.display.price, "125.00");
        assert_eq!(outcome.display.cost, "100.00");
    }

    #[test]
    fn third_edit_evicts_the_oldest_source() {
        let mut raw = RawInputs::default();
        let mut history = SourceHistory::default();
        for (field, text) in [(Field::Cost, "60"), (Field::Price, "100"), (Field::Profit, "30")] {
            *raw.get_mut(field) = text.to_string();
            history.push_front(field);
        }
        assert_eq!(history.as_slice(), &[Field::Profit, Field::Price]);

        let outcome = derive(&raw, &history);
        // Cost still holds stale text but is no longer a source.
        assert_eq!(outcome.display.cost, "70.00");
        assert_eq!(outcome.display.margin, "30.00");
        let sources = outcome.sources.expect("sources");
        assert!(!sources.contains(Field::Margin));
        assert!(!sources.contains(Field::Cost));
    }

    #[test]
    fn source_text_is_echoed_verbatim() {
        let outcome = derive(
            &inputs(&[(Field::Price, " 100.50 "), (Field::Cost, "0.5")]),
            &edited(&[Field::Price, Field::Cost]),
        );
        assert_eq!(outcome.display.price, " 100.50 ");
        assert_eq!(outcome.display.cost, "0.5");
        assert_eq!(outcome.display.profit, "100.00");
        assert_eq!(outcome.display.margin, "99.50");
    }

    #[test]
    fn huge_results_switch_to_exponent_form() {
        let outcome = derive(
            &inputs(&[(Field::Price, "2e21"), (Field::Cost, "5e20")]),
            &edited(&[Field::Price, Field::Cost]),
        );
        assert_eq!(outcome.display.error, None);
        assert_eq!(outcome.display.profit, "1.5e+21");
        assert_eq!(outcome.display.margin, "75.00");
    }

    #[test]
    fn sub_unit_values_use_significant_digits() {
        let outcome = derive(
            &inputs(&[(Field::Price, "1.5"), (Field::Cost, "1.2")]),
            &edited(&[Field::Price, Field::Cost]),
        );
        assert_eq!(outcome.display.profit, "0.300");
        assert_eq!(outcome.display.margin, "20.00");
    }

    #[test]
    fn losses_show_negative_margin() {
        let outcome = derive(
            &inputs(&[(Field::Price, "50"), (Field::Cost, "80")]),
            &edited(&[Field::Cost, Field::Price]),
        );
        assert_eq!(outcome.display.profit, "-30.00");
        assert_eq!(outcome.display.margin, "-60.00");
    }

    #[test]
    fn infinite_result_falls_back_to_raw_text() {
        let raw = inputs(&[
            (Field::Cost, "1e308"),
            (Field::Margin, "99.9"),
            (Field::Price, "stale"),
        ]);
        let outcome = derive(&raw, &edited(&[Field::Cost, Field::Margin]));
        // "stale" is not a number, so validation stops the cycle first.
        assert_eq!(outcome.error, Some(CalcError::NotANumber(Field::Price)));

        let raw = inputs(&[(Field::Cost, "1e308"), (Field::Margin, "99.9"), (Field::Price, "")]);
        let outcome = derive(&raw, &edited(&[Field::Cost, Field::Margin]));
        assert!(outcome.is_ok());
        assert_eq!(outcome.display.price, "");
        assert_eq!(outcome.display.profit, "");
    }

    #[test]
    fn stale_third_field_is_overwritten_by_derived_value() {
        let outcome = derive(
            &inputs(&[(Field::Cost, "60"), (Field::Price, "100"), (Field::Margin, "12")]),
            &edited(&[Field::Price, Field::Cost]),
        );
        assert_eq!(outcome.display.margin, "40.00");
    }

    #[rstest]
    #[case(Field::Price, "100", Field::Cost, "60")]
    #[case(Field::Price, "80", Field::Profit, "20")]
    #[case(Field::Price, "250", Field::Margin, "12.5")]
    #[case(Field::Cost, "12.34", Field::Profit, "5.66")]
    #[case(Field::Cost, "75", Field::Margin, "25")]
    #[case(Field::Profit, "3", Field::Margin, "60")]
    fn solving_from_derived_pairs_reproduces_sources(
        #[case] a: Field,
        #[case] a_text: &str,
        #[case] b: Field,
        #[case] b_text: &str,
    ) {
        let first = derive(&inputs(&[(a, a_text), (b, b_text)]), &edited(&[a, b]));
        let solved = first.derived.expect("first pass solves");
        let expected_a: f64 = a_text.parse().expect("number");
        let expected_b: f64 = b_text.parse().expect("number");

        for c in Field::DISPLAY_ORDER {
            for d in Field::DISPLAY_ORDER {
                if c == d {
                    continue;
                }
                let raw = RawInputs::from_fn(|field| {
                    if field == c || field == d {
                        solved.get(field).to_string()
                    } else {
                        String::new()
                    }
                });
                let second = derive(&raw, &edited(&[c, d]));
                let values = second.derived.expect("second pass solves");
                assert!((values.get(a) - expected_a).abs() < 1e-6, "{c}/{d} -> {a}");
                assert!((values.get(b) - expected_b).abs() < 1e-6, "{c}/{d} -> {b}");
            }
        }
    }

    #[test]
    fn displayed_strings_fed_back_stay_stable() {
        let history = edited(&[Field::Cost, Field::Margin]);
        let first = derive(&inputs(&[(Field::Cost, "33"), (Field::Margin, "17")]), &history);

        let echoed = RawInputs::from_fn(|field| first.display.get(field).to_string());
        let second = derive(&echoed, &history);
        assert_eq!(second.display, first.display);

        let a = first.derived.expect("first");
        let b = second.derived.expect("second");
        assert!((a.price - b.price).abs() < 0.005);
        assert!((a.profit - b.profit).abs() < 0.005);
    }

    #[test]
    fn valid_outcomes_respect_domain_bounds() {
        for (price, cost) in [("10", "2"), ("99.99", "45"), ("1", "0.999")] {
            let outcome = derive(
                &inputs(&[(Field::Price, price), (Field::Cost, cost)]),
                &edited(&[Field::Price, Field::Cost]),
            );
            let values = outcome.derived.expect("solved");
            assert!(values.price > 0.0);
            assert!(values.cost >= 0.0);
            assert!(values.margin >= 0.0 && values.margin < 100.0);
        }
    }

    #[test]
    fn display_result_serializes_to_boundary_record() {
        let outcome = derive(
            &inputs(&[(Field::Cost, "60"), (Field::Price, "100")]),
            &edited(&[Field::Cost, Field::Price]),
        );
        let json = serde_json::to_value(&outcome.display).expect("serializes");
        assert_eq!(
            json,
            serde_json::json!({
                "cost": "60",
                "price": "100",
                "profit": "40.00",
                "margin": "40.00"
            })
        );

        let failed = derive(&inputs(&[(Field::Cost, "x")]), &edited(&[Field::Cost]));
        let json = serde_json::to_value(&failed.display).expect("serializes");
        assert_eq!(json["error"], "Cost must be a number");
    }

    #[test]
    fn cache_returns_stored_outcome_for_same_inputs() {
        let mut cache = DerivationCache::with_capacity(2);
        let raw = inputs(&[(Field::Cost, "60"), (Field::Price, "100")]);
        let history = edited(&[Field::Cost, Field::Price]);

        let first = cache.derive(&raw, &history);
        let second = cache.derive(&raw, &history);
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);

        let reordered = edited(&[Field::Price, Field::Cost]);
        cache.derive(&raw, &reordered);
        assert_eq!(cache.len(), 2);

        cache.derive(&inputs(&[(Field::Cost, "1")]), &history);
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }
}
