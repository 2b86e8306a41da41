//! Human-readable formatting of shortcut key strings
//!
//! Pure helpers consumed by help overlays and tooltips. Platform glyph
//! selection is injected via [`Platform`] rather than sniffed ad hoc, so
//! formatting stays deterministic and testable; the host computes the
//! platform once at startup.

/// Platform capabilities that affect glyph selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    /// Apple-class device: use ⌘ and ⌥ instead of CTRL and ALT
    pub apple: bool,
}

impl Platform {
    pub const fn new(apple: bool) -> Self {
        Self { apple }
    }

    /// Classify a device from its reported user-agent string and
    /// touch capability
    pub fn from_user_agent(user_agent: &str, has_touch: bool) -> Self {
        let ua = user_agent.to_lowercase();
        let apple = ["iphone", "ipad", "ipod", "mac"]
            .iter()
            .any(|marker| ua.contains(marker))
            || (user_agent.contains("Mac") && has_touch);
        Self { apple }
    }
}

/// Render a shortcut key string as a human-presentable label.
///
/// Modifier combos become glyph sequences (`"ctrl+k"` → `"⌘ + K"` on Apple
/// devices, `"CTRL + K"` elsewhere), prefix chords become uppercased token
/// sequences (`"g p"` → `"G + P"`), and named keys map to their symbols.
pub fn format_shortcut(key: &str, platform: &Platform) -> String {
    if key.contains('+') {
        key.split('+')
            .map(|part| format_combo_part(part, platform))
            .collect::<Vec<_>>()
            .join(" + ")
    } else if key.contains(' ') {
        key.split(' ')
            .map(str::to_uppercase)
            .collect::<Vec<_>>()
            .join(" + ")
    } else {
        format_single_key(key)
    }
}

fn format_combo_part(part: &str, platform: &Platform) -> String {
    match part.to_lowercase().as_str() {
        "ctrl" | "cmd" | "meta" => {
            if platform.apple {
                "⌘".to_string()
            } else {
                "CTRL".to_string()
            }
        }
        "shift" => "⇧".to_string(),
        "alt" => {
            if platform.apple {
                "⌥".to_string()
            } else {
                "ALT".to_string()
            }
        }
        _ => part.to_uppercase(),
    }
}

fn format_single_key(key: &str) -> String {
    match key.to_lowercase().as_str() {
        "arrowup" => "↑".to_string(),
        "arrowdown" => "↓".to_string(),
        "arrowleft" => "←".to_string(),
        "arrowright" => "→".to_string(),
        "escape" => "ESC".to_string(),
        _ => key.to_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const APPLE: Platform = Platform::new(true);
    const OTHER: Platform = Platform::new(false);

    #[test]
    fn test_combo_glyphs() {
        assert_eq!(format_shortcut("ctrl+k", &APPLE), "⌘ + K");
        assert_eq!(format_shortcut("ctrl+k", &OTHER), "CTRL + K");
        assert_eq!(format_shortcut("cmd+shift+p", &APPLE), "⌘ + ⇧ + P");
        assert_eq!(format_shortcut("alt+f", &OTHER), "ALT + F");
        assert_eq!(format_shortcut("alt+f", &APPLE), "⌥ + F");
    }

    #[test]
    fn test_chord_formatting() {
        assert_eq!(format_shortcut("g p", &OTHER), "G + P");
    }

    #[test]
    fn test_single_keys() {
        assert_eq!(format_shortcut("a", &OTHER), "A");
        assert_eq!(format_shortcut("escape", &OTHER), "ESC");
        assert_eq!(format_shortcut("arrowDown", &OTHER), "↓");
        assert_eq!(format_shortcut("arrowLeft", &OTHER), "←");
        assert_eq!(format_shortcut("arrowUp", &OTHER), "↑");
        assert_eq!(format_shortcut("arrowRight", &OTHER), "→");
    }

    #[test]
    fn test_platform_from_user_agent() {
        let mac = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)";
        assert!(Platform::from_user_agent(mac, false).apple);

        let iphone = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)";
        assert!(Platform::from_user_agent(iphone, true).apple);

        let windows = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";
        assert!(!Platform::from_user_agent(windows, false).apple);
    }
}
