//! Line Item Row Component
//!
//! One editable bill row: item name, quantity, unit select, rate per kg
//! and the computed row total.

use leptos::prelude::*;
use crate::models::{LineItemEdit, Unit};
use crate::store::{store_add_row, store_edit_row, use_bill_store, BillStateStoreFields};

/// One editable bill row. `index` stays valid for the row's whole life
/// because rows are never removed or reordered.
#[component]
pub fn LineItemRow(index: usize) -> impl IntoView {
    let store = use_bill_store();

    let serial = move || {
        store.rows().read().get(index).map(|row| row.id).unwrap_or_default()
    };
    let item = move || {
        store.rows().read().get(index).map(|row| row.item.clone()).unwrap_or_default()
    };
    let quantity = move || {
        store.rows().read().get(index).map(|row| row.quantity).unwrap_or_default()
    };
    let unit = move || {
        store.rows().read().get(index).map(|row| row.unit).unwrap_or_default()
    };
    let rate = move || {
        store.rows().read().get(index).map(|row| row.rate).unwrap_or_default()
    };
    let row_total = move || {
        store.rows().read().get(index).map(|row| row.total()).unwrap_or_default()
    };

    // Enter in any input appends a fresh row, for keyboard-only entry. The
    // numeric handlers commit the in-flight value first; Enter would
    // otherwise leave it waiting for a blur that never comes.
    let on_item_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            store_add_row(&store);
        }
    };
    let on_quantity_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            let value: f64 = event_target_value(&ev).parse().unwrap_or(0.0);
            store_edit_row(&store, index, LineItemEdit::Quantity(value));
            store_add_row(&store);
        }
    };
    let on_rate_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            let value: f64 = event_target_value(&ev).parse().unwrap_or(0.0);
            store_edit_row(&store, index, LineItemEdit::Rate(value));
            store_add_row(&store);
        }
    };

    view! {
        <tr class="line-item-row">
            <td class="serial">{serial}</td>
            <td>
                <input
                    type="text"
                    class="item-input"
                    prop:value=item
                    on:input=move |ev| {
                        store_edit_row(&store, index, LineItemEdit::Item(event_target_value(&ev)));
                    }
                    on:keydown=on_item_keydown
                />
            </td>
            <td>
                <input
                    type="number"
                    class="quantity-input"
                    step="any"
                    prop:value=move || quantity().to_string()
                    on:change=move |ev| {
                        let value: f64 = event_target_value(&ev).parse().unwrap_or(0.0);
                        store_edit_row(&store, index, LineItemEdit::Quantity(value));
                    }
                    on:keydown=on_quantity_keydown
                />
            </td>
            <td>
                <select
                    class="unit-select"
                    prop:value=move || unit().as_str().to_string()
                    on:change=move |ev| {
                        if let Some(unit) = Unit::parse(&event_target_value(&ev)) {
                            store_edit_row(&store, index, LineItemEdit::Unit(unit));
                        }
                    }
                >
                    <option value="kg">"kg"</option>
                    <option value="g">"g"</option>
                </select>
            </td>
            <td>
                <input
                    type="number"
                    class="rate-input"
                    step="any"
                    prop:value=move || rate().to_string()
                    on:change=move |ev| {
                        let value: f64 = event_target_value(&ev).parse().unwrap_or(0.0);
                        store_edit_row(&store, index, LineItemEdit::Rate(value));
                    }
                    on:keydown=on_rate_keydown
                />
            </td>
            <td class="row-total">{move || format!("{:.2}", row_total())}</td>
        </tr>
    }
}
