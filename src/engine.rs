//! The shortcut dispatch engine
//!
//! One [`ShortcutEngine`] instance per consuming surface. The host forwards
//! key-down, key-up and window-blur events; the engine resolves them
//! against the categorized shortcut table and invokes registered handlers.
//! All mutable state (the table, the armed chord, the alt flag) lives on
//! the instance, so independent engines never interfere.
//!
//! ```text
//! KeyEvent → ShortcutEngine::handle_key_down() → KeyAction → handler
//! ```

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::combo::matches_key_combo;
use crate::condition::{evaluate_condition, Conditions};
use crate::context::expand_context;
use crate::shortcut::{ShortcutEntry, ShortcutsConfig};
use crate::table::{categorize, CategorizedShortcuts};
use crate::types::KeyEvent;

/// How long an armed chord prefix waits for its suffix
pub const CHORD_TIMEOUT: Duration = Duration::from_millis(2000);

/// A registered action handler
pub type Handler = Box<dyn FnMut()>;

/// Result of handling a key-down event.
///
/// The host uses this to decide whether to suppress the event's default
/// action and stop its propagation; unmatched keys must keep their normal
/// behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// A shortcut resolved; its handler (if registered) has run
    Dispatched { action: String },
    /// The key armed a chord prefix; awaiting the suffix
    ChordArmed { prefix: String },
    /// An armed chord consumed the key without matching a suffix
    ChordBroken,
    /// Nothing consumed the event
    NoMatch,
}

impl KeyAction {
    /// Whether the host should suppress the event's default action
    pub fn suppress_default(&self) -> bool {
        matches!(self, KeyAction::Dispatched { .. } | KeyAction::ChordArmed { .. })
    }

    /// Whether the host should stop the event from propagating
    pub fn stop_propagation(&self) -> bool {
        matches!(self, KeyAction::Dispatched { .. })
    }
}

struct ArmedChord {
    prefix: String,
    deadline: Instant,
}

/// The top-level dispatch engine
pub struct ShortcutEngine {
    /// Merged entries for the expanded contexts, in declaration order
    shortcuts: Vec<ShortcutEntry>,
    conditions: Conditions,
    handlers: HashMap<String, Handler>,
    active_sub_context: Option<String>,
    ignore_input_fields: bool,
    table: CategorizedShortcuts,
    armed: Option<ArmedChord>,
    alt_pressed: bool,
    chord_timeout: Duration,
}

impl ShortcutEngine {
    /// Create an engine for the given active contexts.
    ///
    /// Each context string is expanded (see [`expand_context`]) and the
    /// matching configuration lists are merged in order; a context listed
    /// later can override an earlier context's binding for the same key.
    pub fn new(config: &ShortcutsConfig, contexts: &[&str]) -> Self {
        let mut names: Vec<String> = Vec::new();
        for context in contexts {
            for name in expand_context(context) {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }

        let mut engine = Self {
            shortcuts: config.collect(&names),
            conditions: Conditions::default(),
            handlers: HashMap::new(),
            active_sub_context: None,
            ignore_input_fields: false,
            table: CategorizedShortcuts::default(),
            armed: None,
            alt_pressed: false,
            chord_timeout: CHORD_TIMEOUT,
        };
        engine.rebuild();
        engine
    }

    /// Override the chord timeout (mainly for tests)
    pub fn with_chord_timeout(mut self, timeout: Duration) -> Self {
        self.chord_timeout = timeout;
        self
    }

    /// Replace the condition set and recategorize
    pub fn set_conditions(&mut self, conditions: Conditions) {
        self.conditions = conditions;
        self.rebuild();
    }

    /// Change the active sub-context and recategorize
    pub fn set_active_sub_context(&mut self, sub_context: Option<&str>) {
        self.active_sub_context = sub_context.map(str::to_string);
        self.rebuild();
    }

    /// Allow shortcuts to fire even when typing in an editable field
    pub fn set_ignore_input_fields(&mut self, ignore: bool) {
        self.ignore_input_fields = ignore;
    }

    /// Bind a handler to an action name
    pub fn register_handler(&mut self, action: impl Into<String>, handler: impl FnMut() + 'static) {
        self.handlers.insert(action.into(), Box::new(handler));
    }

    fn rebuild(&mut self) {
        self.table = categorize(
            &self.shortcuts,
            &self.conditions,
            self.active_sub_context.as_deref(),
        );
    }

    /// The merged entries that are currently enabled, for display in a
    /// help overlay. Filtered by condition only; sub-context gating
    /// applies to dispatch, not here.
    pub fn enabled_shortcuts(&self) -> Vec<&ShortcutEntry> {
        self.shortcuts
            .iter()
            .filter(|entry| evaluate_condition(&entry.when, &self.conditions))
            .collect()
    }

    /// The currently armed chord prefix, if any.
    ///
    /// Reads as `None` once the chord deadline passes, even before the
    /// next key event performs the actual disarm.
    pub fn armed_prefix(&self) -> Option<&str> {
        self.armed
            .as_ref()
            .filter(|armed| Instant::now() < armed.deadline)
            .map(|armed| armed.prefix.as_str())
    }

    /// Whether the alt/option key is currently held, for UI affordances
    pub fn alt_pressed(&self) -> bool {
        self.alt_pressed
    }

    /// Drop any armed chord prefix
    pub fn reset_chord(&mut self) {
        self.armed = None;
    }

    /// Handle a key-down event.
    ///
    /// Resolution order: modifier combos first (they win even while a
    /// chord is armed, and leave it armed), then suffix resolution for an
    /// armed chord, then chord arming, then direct keys.
    pub fn handle_key_down(&mut self, event: &KeyEvent) -> KeyAction {
        self.alt_pressed = event.mods.alt();

        // An expired chord reads as idle; drop it before resolving.
        if let Some(armed) = &self.armed {
            if Instant::now() >= armed.deadline {
                debug!(prefix = %armed.prefix, "chord timed out");
                self.armed = None;
            }
        }

        // Typing in an input field keeps its normal behavior unless a
        // ctrl/meta combo is involved or the caller opted out.
        if event.from_editable
            && !event.mods.ctrl()
            && !event.mods.meta()
            && !self.ignore_input_fields
        {
            return KeyAction::NoMatch;
        }

        let key = event.key.to_lowercase();

        // Scanned backwards so the later-merged binding wins when
        // distinct combos match the same event.
        let combo_match = self
            .table
            .modified
            .iter()
            .rev()
            .find(|(combo, _)| matches_key_combo(combo, event))
            .map(|(_, entry)| entry.action.clone());
        if let Some(action) = combo_match {
            trace!(key = %key, mods = %event.mods, action = %action, "modifier combo matched");
            self.invoke(&action);
            return KeyAction::Dispatched { action };
        }

        if let Some(armed) = self.armed.take() {
            let resolved = self
                .table
                .prefix_groups
                .get(&armed.prefix)
                .and_then(|group| group.get(&key))
                .map(|entry| entry.action.clone());

            return match resolved {
                Some(action) => {
                    debug!(prefix = %armed.prefix, suffix = %key, action = %action, "chord resolved");
                    self.invoke(&action);
                    KeyAction::Dispatched { action }
                }
                None => {
                    debug!(prefix = %armed.prefix, suffix = %key, "chord broken");
                    KeyAction::ChordBroken
                }
            };
        }

        if event.mods.is_empty() {
            if self.table.prefix_groups.contains_key(&key) {
                debug!(prefix = %key, "chord armed");
                self.armed = Some(ArmedChord {
                    prefix: key.clone(),
                    deadline: Instant::now() + self.chord_timeout,
                });
                return KeyAction::ChordArmed { prefix: key };
            }

            if let Some(entry) = self.table.direct.get(&key) {
                let action = entry.action.clone();
                trace!(key = %key, action = %action, "direct shortcut matched");
                self.invoke(&action);
                return KeyAction::Dispatched { action };
            }
        }

        KeyAction::NoMatch
    }

    /// Handle a key-up event: only the alt flag is tracked
    pub fn handle_key_up(&mut self, event: &KeyEvent) {
        self.alt_pressed = event.mods.alt();
    }

    /// Handle the window losing focus.
    ///
    /// Clears the alt flag so it cannot stick; a pending chord is left
    /// armed and expires through its own deadline.
    pub fn handle_window_blur(&mut self) {
        self.alt_pressed = false;
    }

    fn invoke(&mut self, action: &str) {
        match self.handlers.get_mut(action) {
            Some(handler) => handler(),
            None => trace!(action, "no handler registered"),
        }
    }
}
