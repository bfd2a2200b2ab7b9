//! WeighBill Frontend App
//!
//! Single screen billing form: bill sheet with title, live clock and the
//! editable table, action buttons underneath.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::clock::use_bill_clock;
use crate::components::{BillActions, BillTable};
use crate::config::{use_bill_config, BillConfig};
use crate::store::BillState;

#[component]
pub fn App() -> impl IntoView {
    // Provide state and config to all children
    provide_context(Store::new(BillState::new()));
    provide_context(BillConfig::default());

    let config = use_bill_config();
    let stamped_at = use_bill_clock();

    web_sys::console::log_1(&"[APP] bill form ready".into());

    view! {
        <div class="bill-app">
            // The sheet is what the PDF export reproduces
            <section class="bill-sheet">
                <h4 class="bill-clock">{move || stamped_at.get()}</h4>
                <h2 class="bill-title">{config.shop_name.clone()}</h2>
                <BillTable />
            </section>

            <BillActions stamped_at=stamped_at />
        </div>
    }
}
