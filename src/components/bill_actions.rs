//! Bill Actions Component
//!
//! Download and Add Row buttons under the bill sheet.

use leptos::prelude::*;
use crate::config::use_bill_config;
use crate::export::export_bill;
use crate::store::{store_add_row, use_bill_store, BillStateStoreFields};

/// Bill action buttons component
#[component]
pub fn BillActions(stamped_at: ReadSignal<String>) -> impl IntoView {
    let store = use_bill_store();
    let config = use_bill_config();

    // Capture whatever the sheet shows at the moment of the click.
    let on_download = move |_| {
        let rows = store.rows().get_untracked();
        export_bill(&config, &stamped_at.get_untracked(), &rows);
    };

    view! {
        <div class="bill-actions">
            <button class="download-btn" on:click=on_download>"Download"</button>
            <button class="add-row-btn" on:click=move |_| store_add_row(&store)>"Add Row"</button>
        </div>
    }
}
