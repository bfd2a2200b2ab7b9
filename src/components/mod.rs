//! UI Components
//!
//! Reusable Leptos components.

mod bill_actions;
mod bill_table;
mod line_item_row;

pub use bill_actions::BillActions;
pub use bill_table::BillTable;
pub use line_item_row::LineItemRow;
