//! Closed-form rules deriving the two missing quantities from two known ones.

use super::{
    fields::Fields,
    sources::{PairKind, SourcePair},
    validation::FilledValues,
};

/// All four quantities after solving. A NaN entry means the rule hit a
/// degenerate division.
pub type DerivedValues = Fields<f64>;

/// Division that yields NaN instead of infinities for a zero or non-finite operand.
pub fn safe_divide(numerator: f64, denominator: f64) -> f64 {
    if !numerator.is_finite() || !denominator.is_finite() || denominator == 0.0 {
        return f64::NAN;
    }
    numerator / denominator
}

/// Returns `None` if either source field has no value.
pub fn solve(pair: SourcePair, values: &FilledValues) -> Option<DerivedValues> {
    let derived = match pair.kind() {
        PairKind::PriceCost => {
            let (price, cost) = (values.price?, values.cost?);
            let profit = price - cost;
            Fields {
                cost,
                price,
                profit,
                margin: safe_divide(profit, price) * 100.0,
            }
        }
        PairKind::PriceProfit => {
            let (price, profit) = (values.price?, values.profit?);
            Fields {
                cost: price - profit,
                price,
                profit,
                margin: safe_divide(profit, price) * 100.0,
            }
        }
        PairKind::PriceMargin => {
            let (price, margin) = (values.price?, values.margin?);
            let profit = safe_divide(price * margin, 100.0);
            Fields {
                cost: price - profit,
                price,
                profit,
                margin,
            }
        }
        PairKind::CostProfit => {
            let (cost, profit) = (values.cost?, values.profit?);
            let price = cost + profit;
            Fields {
                cost,
                price,
                profit,
                margin: safe_divide(profit, price) * 100.0,
            }
        }
        PairKind::CostMargin => {
            let (cost, margin) = (values.cost?, values.margin?);
            let price = safe_divide(cost, 1.0 - margin / 100.0);
            Fields {
                cost,
                price,
                profit: price - cost,
                margin,
            }
        }
        PairKind::ProfitMargin => {
            let (profit, margin) = (values.profit?, values.margin?);
            let price = safe_divide(profit, margin / 100.0);
            Fields {
                cost: price - profit,
                price,
                profit,
                margin,
            }
        }
    };

    Some(derived)
}

pub fn has_nan(values: &DerivedValues) -> bool {
    values.iter().any(|(_, value)| value.is_nan())
}
