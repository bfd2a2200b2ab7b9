//! Bill Form State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::{LineItem, LineItemEdit};

/// Billing form state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BillState {
    /// All rows of the current bill, in entry order. Rows are only ever
    /// appended, so an index handed to the table stays valid.
    pub rows: Vec<LineItem>,
}

impl BillState {
    /// A fresh bill starts with one blank row ready for typing.
    pub fn new() -> Self {
        Self {
            rows: vec![LineItem::new(1)],
        }
    }
}

/// Type alias for the store
pub type BillStore = Store<BillState>;

/// Get the bill store from context
pub fn use_bill_store() -> BillStore {
    expect_context::<BillStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Append a blank row. Serial numbers follow entry order, so the next one
/// is simply the new row count.
pub fn store_add_row(store: &BillStore) {
    let rows_field = store.rows();
    let mut rows = rows_field.write();
    let id = rows.len() as u32 + 1;
    rows.push(LineItem::new(id));
}

/// Apply a field edit to the row at `index`. Out of range indices are a
/// no-op; the table only hands out live indices.
pub fn store_edit_row(store: &BillStore, index: usize, edit: LineItemEdit) {
    store.rows().write().iter_mut()
        .nth(index)
        .map(|row| row.apply(edit));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{grand_total, Unit};

    fn make_store() -> BillStore {
        Store::new(BillState::new())
    }

    #[test]
    fn test_fresh_bill_has_one_blank_row() {
        let state = BillState::new();
        assert_eq!(state.rows.len(), 1);
        assert_eq!(state.rows[0].id, 1);
        assert_eq!(state.rows[0].item, "");
        assert_eq!(state.rows[0].total(), 0.0);
    }

    #[test]
    fn test_add_row_appends_with_next_serial() {
        let store = make_store();
        store_add_row(&store);
        store_add_row(&store);
        let rows = store.rows().get_untracked();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].id, 2);
        assert_eq!(rows[2].id, 3);
        assert_eq!(rows[2].item, "");
        assert_eq!(rows[2].unit, Unit::Kg);
    }

    #[test]
    fn test_edit_touches_only_the_target_row() {
        let store = make_store();
        store_add_row(&store);
        store_edit_row(&store, 0, LineItemEdit::Item("Apples".to_string()));
        store_edit_row(&store, 1, LineItemEdit::Rate(42.0));
        let rows = store.rows().get_untracked();
        assert_eq!(rows[0].item, "Apples");
        assert_eq!(rows[0].rate, 0.0);
        assert_eq!(rows[1].item, "");
        assert_eq!(rows[1].rate, 42.0);
    }

    #[test]
    fn test_edit_out_of_range_is_a_noop() {
        let store = make_store();
        let before = store.rows().get_untracked();
        store_edit_row(&store, 5, LineItemEdit::Rate(9.0));
        assert_eq!(store.rows().get_untracked(), before);
    }

    #[test]
    fn test_totals_track_an_edit_sequence() {
        let store = make_store();
        store_edit_row(&store, 0, LineItemEdit::Item("Apples".to_string()));
        store_edit_row(&store, 0, LineItemEdit::Quantity(2.0));
        store_edit_row(&store, 0, LineItemEdit::Rate(10.0));
        assert_eq!(grand_total(&store.rows().get_untracked()), 20.0);

        store_add_row(&store);
        store_edit_row(&store, 1, LineItemEdit::Quantity(500.0));
        store_edit_row(&store, 1, LineItemEdit::Unit(Unit::G));
        store_edit_row(&store, 1, LineItemEdit::Rate(10.0));
        assert_eq!(grand_total(&store.rows().get_untracked()), 25.0);

        store_edit_row(&store, 0, LineItemEdit::Quantity(3.0));
        assert_eq!(grand_total(&store.rows().get_untracked()), 35.0);
    }
}
