//! Panic hook that puts the terminal back before the panic is reported.

use std::panic::{self, PanicHookInfo};

use super::setup::emergency_restore;

/// Chain a terminal-restoring hook in front of the current panic hook.
///
/// Call after `color_eyre::install()` so the eyre report is printed on a
/// usable terminal. The panic is also written to the log file, since
/// whatever was on screen is gone once the alternate screen closes.
pub fn setup_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        log_panic(info);
        emergency_restore();
        previous(info);
    }));
}

fn log_panic(info: &PanicHookInfo<'_>) {
    let location = info
        .location()
        .map(|l| format!("{}:{}", l.file(), l.line()))
        .unwrap_or_else(|| "unknown".to_string());
    tracing::error!(%location, "panic: {}", panic_message(info));
}

fn panic_message(info: &PanicHookInfo<'_>) -> String {
    let payload = info.payload();
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
