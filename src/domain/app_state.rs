use super::{
    engine::{DerivationCache, DerivationOutcome, RawInputs},
    fields::Field,
    history::SourceHistory,
};

/// Everything the calculator form keeps between edits.
#[derive(Clone, Debug, Default)]
pub struct CalculatorState {
    inputs: RawInputs,
    history: SourceHistory,
    outcome: DerivationOutcome,
    cache: DerivationCache,
}

impl CalculatorState {
    pub fn new() -> Self {
        let mut state = Self::default();
        state.refresh();
        state
    }

    /// Records the new text for `field`, marks it as the latest edit and
    /// recomputes the outcome.
    pub fn edit(&mut self, field: Field, text: impl Into<String>) {
        *self.inputs.get_mut(field) = text.into();
        self.history.push_front(field);
        self.refresh();
    }

    pub fn inputs(&self) -> &RawInputs {
        &self.inputs
    }

    pub fn history(&self) -> &SourceHistory {
        &self.history
    }

    pub fn outcome(&self) -> &DerivationOutcome {
        &self.outcome
    }

    fn refresh(&mut self) {
        self.outcome = self.cache.derive(&self.inputs, &self.history);
    }
}
