//! Browser logging.
//!
//! Routes `tracing` events to the browser console and installs the panic
//! hook. Safe to call more than once.

use std::sync::Once;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

static INIT: Once = Once::new();

const LOG_LEVEL_KEY: &str = "proyectalia_log_level";

pub fn init() {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(MakeWebConsoleWriter::new())
            .without_time(); // no std::time in wasm

        tracing_subscriber::registry()
            .with(stored_level().unwrap_or(default_level()))
            .with(fmt_layer)
            .init();
    });
}

fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    }
}

/// `localStorage.proyectalia_log_level` overrides the level, e.g. "info".
fn stored_level() -> Option<LevelFilter> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let level = storage.get_item(LOG_LEVEL_KEY).ok()??;
    level.trim().parse().ok()
}
