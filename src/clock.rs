//! Live Bill Clock
//!
//! One second wall clock ticker, scoped to the mounting component.

use std::time::Duration;

use chrono::{DateTime, Local, TimeZone};
use leptos::leptos_dom::helpers::set_interval_with_handle;
use leptos::prelude::*;

/// Format an instant the way the bill header shows it: short weekday and
/// month, 12 hour clock with seconds.
pub fn format_bill_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%a, %b %-d, %Y, %-I:%M:%S %p").to_string()
}

/// Ticking timestamp signal. The interval starts when the calling component
/// mounts and is cleared again on unmount, so no callback outlives the view.
pub fn use_bill_clock() -> ReadSignal<String> {
    let (stamp, set_stamp) = signal(format_bill_timestamp(&Local::now()));
    match set_interval_with_handle(
        move || set_stamp.set(format_bill_timestamp(&Local::now())),
        Duration::from_secs(1),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => web_sys::console::error_1(&err),
    }
    stamp
}
