// ABOUTME: Defines the Item struct representing one named, quantified entry in the grocery list.
// ABOUTME: Items carry no identity; list order is the only ordering and duplicate names are allowed.

use serde::{Deserialize, Serialize};

/// One entry in the grocery list. The wire shape is exactly
/// `{"name": string, "amount": integer}`; any extra field is a decode error.
/// Amounts are not range-checked, so negative values pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Item {
    pub name: String,
    pub amount: i64,
}

impl Item {
    /// Create a new Item with the given name and amount.
    pub fn new(name: impl Into<String>, amount: i64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}
