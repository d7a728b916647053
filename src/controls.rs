use crate::playback::PlaybackState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleGlyph {
    Music,
    Pause,
}

impl ToggleGlyph {
    pub fn symbol(self) -> &'static str {
        match self {
            ToggleGlyph::Music => "\u{266B}",
            ToggleGlyph::Pause => "\u{275A}\u{275A}",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ToggleGlyph::Music => "Play music",
            ToggleGlyph::Pause => "Pause music",
        }
    }
}

/// What the music button and error notice should display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlsView {
    pub glyph: ToggleGlyph,
    pub pressed: bool,
    pub pending: bool,
    pub show_error: bool,
}

pub fn controls_view(state: &PlaybackState) -> ControlsView {
    let playing = state.is_playing();
    ControlsView {
        glyph: if playing {
            ToggleGlyph::Pause
        } else {
            ToggleGlyph::Music
        },
        pressed: playing,
        pending: state.pending().is_some(),
        show_error: state.has_error(),
    }
}
