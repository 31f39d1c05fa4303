//! Keyboard shortcuts and the clamped steps they apply.

/// A key press as seen by the global listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    /// `KeyboardEvent.key`, e.g. `"ArrowUp"` or `"n"`
    pub key: String,
    /// `KeyboardEvent.code`, e.g. `"Space"`
    pub code: String,
    /// Focus sits in an `<input>` or `<textarea>`
    pub focus_in_text_input: bool,
}

impl KeyInput {
    pub fn new(key: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            code: code.into(),
            focus_in_text_input: false,
        }
    }

    pub fn typing(mut self) -> Self {
        self.focus_in_text_input = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    TogglePlayback,
    SeekForward,
    SeekBackward,
    VolumeUp,
    VolumeDown,
    NextTrack,
    PreviousTrack,
}

impl Shortcut {
    pub fn from_key(input: &KeyInput) -> Option<Self> {
        if input.focus_in_text_input {
            return None;
        }
        if input.code == "Space" {
            return Some(Self::TogglePlayback);
        }
        match input.key.as_str() {
            "ArrowRight" => Some(Self::SeekForward),
            "ArrowLeft" => Some(Self::SeekBackward),
            "ArrowUp" => Some(Self::VolumeUp),
            "ArrowDown" => Some(Self::VolumeDown),
            key if key.eq_ignore_ascii_case("n") => Some(Self::NextTrack),
            key if key.eq_ignore_ascii_case("p") => Some(Self::PreviousTrack),
            _ => None,
        }
    }

    /// Space would otherwise scroll the page.
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::TogglePlayback)
    }
}

pub fn is_text_input_tag(tag_name: &str) -> bool {
    tag_name.eq_ignore_ascii_case("input") || tag_name.eq_ignore_ascii_case("textarea")
}

/// Move the playback position by `delta` seconds within `[0, duration]`.
/// An unknown (non-finite) or zero duration leaves the upper end open.
pub fn step_seek(current: f64, duration: f64, delta: f64) -> f64 {
    let current = if current.is_finite() { current } else { 0.0 };
    let upper = if duration.is_finite() && duration > 0.0 {
        duration
    } else {
        f64::INFINITY
    };
    (current + delta).clamp(0.0, upper)
}

/// Move the volume by `delta` within `[0, 1]`.
pub fn step_volume(current: f64, delta: f64) -> f64 {
    let current = if current.is_finite() { current } else { 0.0 };
    (current + delta).clamp(0.0, 1.0)
}
