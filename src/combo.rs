//! Matching modifier-combo strings against raw key events

use crate::types::{KeyEvent, Modifiers};

/// Shifted symbols produced by the digit row on a US layout
fn shifted_digit(digit: char) -> Option<char> {
    match digit {
        '1' => Some('!'),
        '2' => Some('@'),
        '3' => Some('#'),
        '4' => Some('$'),
        '5' => Some('%'),
        '6' => Some('^'),
        '7' => Some('&'),
        '8' => Some('*'),
        '9' => Some('('),
        '0' => Some(')'),
        _ => None,
    }
}

/// Check whether a key event satisfies a combo string like `"ctrl+shift+k"`.
///
/// The last `+`-separated token is the base key; the rest are modifier
/// names (`shift`, `ctrl`, `cmd`/`meta`, `alt`), order-insensitive.
/// Unknown modifier names are ignored. Matching requires case-insensitive
/// equality on the base key and exact equality of the full modifier set:
/// an extra held modifier not named in the combo is a non-match.
///
/// When shift is required and the base key is a decimal digit, the
/// expected key is translated to the shifted symbol first, since that is
/// what the host reports for e.g. shift+1 (`"!"`).
pub fn matches_key_combo(combo: &str, event: &KeyEvent) -> bool {
    let parts: Vec<&str> = combo.split('+').collect();
    let Some((&base, modifier_names)) = parts.split_last() else {
        return false;
    };

    let mut required = Modifiers::NONE;
    for name in modifier_names {
        match name.to_ascii_lowercase().as_str() {
            "shift" => required = required | Modifiers::SHIFT,
            "ctrl" => required = required | Modifiers::CTRL,
            "cmd" | "meta" => required = required | Modifiers::META,
            "alt" => required = required | Modifiers::ALT,
            _ => {}
        }
    }

    let mut expected = base.to_lowercase();
    if required.shift() {
        let mut chars = expected.chars();
        if let (Some(digit), None) = (chars.next(), chars.next()) {
            if let Some(symbol) = shifted_digit(digit) {
                expected = symbol.to_string();
            }
        }
    }

    event.key.to_lowercase() == expected && event.mods == required
}
