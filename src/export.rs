//! Bill Export
//!
//! Snapshots the rendered bill, renders it through `bill-pdf` and hands the
//! bytes to the browser as a file download.

use bill_pdf::{render_pdf, BillDocument, BillRow};
use chrono::Local;
use gloo_timers::callback::Timeout;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::config::BillConfig;
use crate::models::{grand_total, LineItem};

/// How long the object URL stays alive after the click. The browser only
/// needs it until the download starts reading the blob.
const REVOKE_DELAY_MS: u32 = 1_000;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Pdf(#[from] bill_pdf::BillPdfError),
    #[error("browser download failed: {0}")]
    Download(String),
}

impl ExportError {
    fn download(context: &str, value: JsValue) -> Self {
        let detail = value.as_string().unwrap_or_else(|| format!("{:?}", value));
        ExportError::Download(format!("{}: {}", context, detail))
    }
}

/// Snapshot the rendered view into the PDF payload. Totals are computed
/// here so the PDF prints exactly what the table showed.
pub fn snapshot_bill(config: &BillConfig, stamped_at: &str, rows: &[LineItem]) -> BillDocument {
    BillDocument {
        title: config.shop_name.clone(),
        stamped_at: stamped_at.to_string(),
        rows: rows
            .iter()
            .map(|row| BillRow {
                serial: row.id,
                item: row.item.clone(),
                quantity: row.quantity,
                unit: row.unit.as_str().to_string(),
                rate: row.rate,
                total: row.total(),
            })
            .collect(),
        grand_total: grand_total(rows),
    }
}

/// Render the current bill to a PDF and trigger a browser download. Fire
/// and forget: failures land on the console, the form stays untouched.
pub fn export_bill(config: &BillConfig, stamped_at: &str, rows: &[LineItem]) {
    let bill = snapshot_bill(config, stamped_at, rows);
    let filename = format!(
        "{}-{}.pdf",
        config.pdf_file_stem,
        Local::now().format("%Y-%m-%d")
    );
    web_sys::console::log_1(
        &format!("[EXPORT] rendering {} rows to {}", bill.rows.len(), filename).into(),
    );
    let result = render_pdf(&bill)
        .map_err(ExportError::from)
        .and_then(|bytes| download_bytes(&bytes, &filename));
    if let Err(err) = result {
        web_sys::console::error_1(&format!("[EXPORT] {}", err).into());
    }
}

/// Hand finished PDF bytes to the browser as a named download.
fn download_bytes(bytes: &[u8], filename: &str) -> Result<(), ExportError> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes).into());
    let props = BlobPropertyBag::new();
    props.set_type("application/pdf");
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &props)
        .map_err(|err| ExportError::download("blob", err))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|err| ExportError::download("object url", err))?;

    let document = web_sys::window()
        .and_then(|win| win.document())
        .ok_or_else(|| ExportError::Download("no document".to_string()))?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|err| ExportError::download("create anchor", err))?
        .dyn_into()
        .map_err(|_| ExportError::Download("anchor cast failed".to_string()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    let body = document
        .body()
        .ok_or_else(|| ExportError::Download("no body".to_string()))?;
    body.append_child(&anchor)
        .map_err(|err| ExportError::download("append anchor", err))?;
    anchor.click();
    let _ = body.remove_child(&anchor);

    Timeout::new(REVOKE_DELAY_MS, move || {
        let _ = Url::revoke_object_url(&url);
    })
    .forget();
    Ok(())
}
