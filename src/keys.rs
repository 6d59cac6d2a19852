// Keyboard shortcuts, kept free of web-sys so host tests can include it.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Restart,
    TogglePause,
    /// Rebuild the engine in the other render mode.
    SwitchMode,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "r" | "R" => Some(KeyAction::Restart),
        " " | "Spacebar" => Some(KeyAction::TogglePause),
        "m" | "M" => Some(KeyAction::SwitchMode),
        _ => None,
    }
}

/// Whether the browser default should be suppressed (space scrolls the page).
#[inline]
pub fn prevents_default(action: KeyAction) -> bool {
    matches!(action, KeyAction::TogglePause)
}
