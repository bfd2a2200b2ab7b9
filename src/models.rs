//! Bill Models
//!
//! Line items and total arithmetic for the billing form.

use serde::{Deserialize, Serialize};

/// Weight unit of a line item. Rates are always quoted per kilogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Kg,
    G,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Kg => "kg",
            Unit::G => "g",
        }
    }

    /// Parse a unit label. Unknown labels are rejected so a stray select
    /// value can never reach the store.
    pub fn parse(s: &str) -> Option<Unit> {
        match s {
            "kg" => Some(Unit::Kg),
            "g" => Some(Unit::G),
            _ => None,
        }
    }
}

/// One editable row of the bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Display serial number, assigned once at creation.
    pub id: u32,
    /// Free text item name.
    pub item: String,
    /// Amount in the row's unit.
    pub quantity: f64,
    pub unit: Unit,
    /// Price per kilogram.
    pub rate: f64,
}

/// A single field change on one row.
#[derive(Debug, Clone, PartialEq)]
pub enum LineItemEdit {
    Item(String),
    Quantity(f64),
    Unit(Unit),
    Rate(f64),
}

impl LineItem {
    /// Blank row with the given serial number.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            item: String::new(),
            quantity: 0.0,
            unit: Unit::Kg,
            rate: 0.0,
        }
    }

    /// Replace exactly one field, leaving the rest untouched.
    pub fn apply(&mut self, edit: LineItemEdit) {
        match edit {
            LineItemEdit::Item(item) => self.item = item,
            LineItemEdit::Quantity(quantity) => self.quantity = quantity,
            LineItemEdit::Unit(unit) => self.unit = unit,
            LineItemEdit::Rate(rate) => self.rate = rate,
        }
    }

    /// Row total. Rates are per kilogram, so gram quantities scale down.
    pub fn total(&self) -> f64 {
        match self.unit {
            Unit::Kg => self.quantity * self.rate,
            Unit::G => (self.quantity / 1000.0) * self.rate,
        }
    }
}

/// Grand total over all rows, recomputed in full on every change. Bills
/// stay small enough that incremental bookkeeping would buy nothing.
pub fn grand_total(rows: &[LineItem]) -> f64 {
    rows.iter().map(LineItem::total).sum()
}
