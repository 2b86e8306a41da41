//! keychord - declarative keyboard shortcut resolution and dispatch
//!
//! This crate turns a declarative table of keyboard shortcuts into a live
//! input-dispatch engine: given the active contexts, the current runtime
//! conditions and a map of action handlers, it consumes raw key events and
//! invokes the right handler - including two-step prefix chords (`g` then
//! `p`), modifier combos (`ctrl+k`) and conditional enablement that can
//! change at any time without re-wiring listeners.
//!
//! # Architecture
//!
//! ```text
//! ShortcutsConfig ─┬─ expand_context() ─ categorize() ─┐
//!                  │                                   │
//! KeyEvent ────────┴──── ShortcutEngine::handle_key_down() → KeyAction
//! ```
//!
//! # Example
//!
//! ```
//! use keychord::{KeyEvent, ShortcutEngine, ShortcutEntry, ShortcutsConfig};
//!
//! let mut config = ShortcutsConfig::new();
//! config.insert_context("facility", vec![ShortcutEntry::new("g p", "goToPatients")]);
//!
//! let mut engine = ShortcutEngine::new(&config, &["facility:patient"]);
//! engine.register_handler("goToPatients", || println!("navigating"));
//!
//! let armed = engine.handle_key_down(&KeyEvent::key("g"));
//! assert!(armed.suppress_default());
//! let resolved = engine.handle_key_down(&KeyEvent::key("p"));
//! assert!(resolved.stop_propagation());
//! ```

pub mod combo;
pub mod condition;
pub mod config;
pub mod context;
pub mod debounce;
pub mod display;
pub mod engine;
pub mod shortcut;
pub mod table;
pub mod types;

// Re-export commonly used types
pub use combo::matches_key_combo;
pub use condition::{evaluate_condition, ConditionValue, Conditions, EvalError};
pub use config::{load_shortcuts_file, parse_shortcuts_json, parse_shortcuts_yaml, ConfigError};
pub use context::{expand_context, expand_context_with};
pub use debounce::{debounced, debounced_with};
pub use display::{format_shortcut, Platform};
pub use engine::{KeyAction, ShortcutEngine, CHORD_TIMEOUT};
pub use shortcut::{ShortcutEntry, ShortcutsConfig};
pub use table::{categorize, CategorizedShortcuts};
pub use types::{KeyEvent, Modifiers};
