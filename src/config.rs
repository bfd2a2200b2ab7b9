//! Bill Configuration
//!
//! Static presentation settings provided via Leptos Context API.

use leptos::prelude::*;

/// Presentation settings for the bill sheet and its PDF export.
#[derive(Clone, Debug, PartialEq)]
pub struct BillConfig {
    /// Shop name shown above the table and on every PDF page.
    pub shop_name: String,
    /// Stem of the download file name; the export appends the local date.
    pub pdf_file_stem: String,
}

impl Default for BillConfig {
    fn default() -> Self {
        Self {
            shop_name: "WeighBill".to_string(),
            pdf_file_stem: "weighbill".to_string(),
        }
    }
}

/// Get the bill config from context, falling back to defaults when the
/// mounting code provided none.
pub fn use_bill_config() -> BillConfig {
    use_context::<BillConfig>().unwrap_or_default()
}
