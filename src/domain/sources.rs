//! Picks which two filled fields are treated as given for a cycle.

use super::{
    fields::Field,
    history::SourceHistory,
    validation::FilledValues,
};

/// The six unordered field combinations the solver knows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PairKind {
    PriceCost,
    PriceProfit,
    PriceMargin,
    CostProfit,
    CostMargin,
    ProfitMargin,
}

impl PairKind {
    pub fn of(a: Field, b: Field) -> Option<Self> {
        use Field::*;

        let kind = match (a, b) {
            (Price, Cost) | (Cost, Price) => PairKind::PriceCost,
            (Price, Profit) | (Profit, Price) => PairKind::PriceProfit,
            (Price, Margin) | (Margin, Price) => PairKind::PriceMargin,
            (Cost, Profit) | (Profit, Cost) => PairKind::CostProfit,
            (Cost, Margin) | (Margin, Cost) => PairKind::CostMargin,
            (Profit, Margin) | (Margin, Profit) => PairKind::ProfitMargin,
            _ => return None,
        };
        Some(kind)
    }
}

/// Two distinct fields, in the order they were chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SourcePair {
    fields: [Field; 2],
    kind: PairKind,
}

impl SourcePair {
    pub fn new(first: Field, second: Field) -> Option<Self> {
        PairKind::of(first, second).map(|kind| Self {
            fields: [first, second],
            kind,
        })
    }

    pub fn first(&self) -> Field {
        self.fields[0]
    }

    pub fn second(&self) -> Field {
        self.fields[1]
    }

    pub fn kind(&self) -> PairKind {
        self.kind
    }

    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }
}

/// Prefers the two most recent edits that are still filled; otherwise the
/// first two filled fields in [`Field::PRIORITY`] order.
pub fn select_sources(history: &SourceHistory, values: &FilledValues) -> Option<SourcePair> {
    let is_filled = |field: &Field| values.get(*field).is_some();

    let recent: Vec<Field> = history.iter().copied().filter(is_filled).take(2).collect();
    let chosen = if recent.len() >= 2 {
        recent
    } else {
        Field::PRIORITY
            .into_iter()
            .filter(is_filled)
            .take(2)
            .collect()
    };

    match chosen.as_slice() {
        [first, second] => SourcePair::new(*first, *second),
        _ => None,
    }
}
