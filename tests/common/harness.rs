//! Shared setup for integration tests.
//!
//! Routes the engine's log callback into `tracing` so refused edits and
//! vetoed moves show up in test output (`cargo test -- --nocapture`).

use opentui_textarea::{KeyEvent, Keymap, LogLevel, TextArea, set_log_callback};
use std::sync::Once;

/// Install a `tracing` subscriber and forward engine logs to it.
pub fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
        set_log_callback(|level, message| match level {
            LogLevel::Debug => tracing::debug!(target: "textarea", "{message}"),
            LogLevel::Info => tracing::info!(target: "textarea", "{message}"),
            LogLevel::Warn => tracing::warn!(target: "textarea", "{message}"),
            LogLevel::Error => tracing::error!(target: "textarea", "{message}"),
        });
    });
}

/// Parse a space-separated list of chords, e.g. `"ctrl+a alt+f x"`.
pub fn keys(specs: &str) -> Vec<KeyEvent> {
    specs
        .split_whitespace()
        .map(|spec| spec.parse().unwrap_or_else(|e| panic!("bad key spec {spec:?}: {e}")))
        .collect()
}

/// Feed `events` through `keymap`, returning the final area.
pub fn press(keymap: &Keymap, area: TextArea, events: impl IntoIterator<Item = KeyEvent>) -> TextArea {
    events
        .into_iter()
        .fold(area, |area, event| keymap.dispatch(event, &area).0)
}

/// Type `text` as unmodified key presses.
pub fn type_text(keymap: &Keymap, area: TextArea, text: &str) -> TextArea {
    press(
        keymap,
        area,
        text.chars().map(|ch| match ch {
            '\n' => KeyEvent::key(opentui_textarea::KeyCode::Enter),
            ' ' => KeyEvent::key(opentui_textarea::KeyCode::Space),
            ch => KeyEvent::char(ch),
        }),
    )
}
