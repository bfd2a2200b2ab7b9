//! Bill Table Component
//!
//! The editable bill: column headers, one LineItemRow per store row and
//! the grand total footer.

use leptos::prelude::*;
use crate::components::LineItemRow;
use crate::models::grand_total;
use crate::store::{use_bill_store, BillStateStoreFields};

/// Bill table component
#[component]
pub fn BillTable() -> impl IntoView {
    let store = use_bill_store();

    // Full recompute on every change; bills stay a handful of rows.
    let total = Memo::new(move |_| grand_total(&store.rows().read()));

    view! {
        <table class="bill-table">
            <thead>
                <tr>
                    <th>"S.no."</th>
                    <th>"Items"</th>
                    <th>"Quantity"</th>
                    <th>"Unit"</th>
                    <th>"Rate per kg"</th>
                    <th>"Total"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each={move || store.rows().get().into_iter().enumerate().collect::<Vec<_>>()}
                    key=|(_, row)| row.id
                    children={move |(index, _)| view! { <LineItemRow index=index /> }}
                />
            </tbody>
            <tfoot>
                <tr>
                    <td colspan="5" class="grand-total-label">"Grand Total:"</td>
                    <td class="grand-total-value">{move || format!("{:.2}", total.get())}</td>
                </tr>
            </tfoot>
        </table>
    }
}
