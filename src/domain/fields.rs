//! The four calculator quantities and a record keyed by them.

use std::fmt;

/// One of the four quantities the calculator relates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Cost,
    Price,
    Profit,
    Margin,
}

impl Field {
    /// Order the fields are laid out in the form.
    pub const DISPLAY_ORDER: [Field; 4] = [Field::Cost, Field::Price, Field::Profit, Field::Margin];

    /// Fallback order used when the edit history cannot name two filled fields.
    /// Also the order in which "must be a number" errors are reported.
    pub const PRIORITY: [Field; 4] = [Field::Price, Field::Cost, Field::Profit, Field::Margin];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Cost => "Cost",
            Field::Price => "Price",
            Field::Profit => "Profit",
            Field::Margin => "Margin",
        }
    }

    /// Stable lowercase identifier, used for element ids.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Cost => "cost",
            Field::Price => "price",
            Field::Profit => "profit",
            Field::Margin => "margin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Margin => "Margin (%)",
            other => other.name(),
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Cost => "Enter cost amount",
            Field::Price => "Enter selling price",
            Field::Profit => "Enter profit amount",
            Field::Margin => "Enter margin percentage",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One value per calculator field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fields<T> {
    pub cost: T,
    pub price: T,
    pub profit: T,
    pub margin: T,
}

impl<T> Fields<T> {
    pub fn from_fn(mut f: impl FnMut(Field) -> T) -> Self {
        Self {
            cost: f(Field::Cost),
            price: f(Field::Price),
            profit: f(Field::Profit),
            margin: f(Field::Margin),
        }
    }

    pub fn get(&self, field: Field) -> &T {
        match field {
            Field::Cost => &self.cost,
            Field::Price => &self.price,
            Field::Profit => &self.profit,
            Field::Margin => &self.margin,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut T {
        match field {
            Field::Cost => &mut self.cost,
            Field::Price => &mut self.price,
            Field::Profit => &mut self.profit,
            Field::Margin => &mut self.margin,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(Field, &T) -> U) -> Fields<U> {
        Fields::from_fn(|field| f(field, self.get(field)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &T)> {
        Field::DISPLAY_ORDER
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }
}
