//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Once;

use keychord::{ShortcutEngine, ShortcutsConfig};

static INIT: Once = Once::new();

/// Initialize tracing output for test runs (respects RUST_LOG)
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// The sample shortcut table shipped at the repository root
pub fn sample_config() -> ShortcutsConfig {
    keychord::parse_shortcuts_json(include_str!("../../shortcuts.json"))
        .expect("sample shortcuts.json should parse")
}

/// Register a counting handler and return the counter
pub fn count_invocations(engine: &mut ShortcutEngine, action: &str) -> Rc<Cell<u32>> {
    let count = Rc::new(Cell::new(0));
    let clone = Rc::clone(&count);
    engine.register_handler(action, move || clone.set(clone.get() + 1));
    count
}
