// Host-side tests for the controls projection of playback state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod playback {
    include!("../src/playback.rs");
}
mod controls {
    include!("../src/controls.rs");
}

use controls::*;
use playback::*;

fn start_play(state: &mut PlaybackState) -> PlayTicket {
    match state.toggle() {
        ToggleAction::Play(t) => t,
        ToggleAction::Pause => panic!("expected play"),
    }
}

#[test]
fn idle_shows_music_glyph_without_notice() {
    let view = controls_view(&PlaybackState::new());
    assert_eq!(view.glyph, ToggleGlyph::Music);
    assert!(!view.pressed);
    assert!(!view.pending);
    assert!(!view.show_error);
}

#[test]
fn pending_request_keeps_music_glyph() {
    let mut state = PlaybackState::new();
    start_play(&mut state);
    let view = controls_view(&state);
    assert_eq!(view.glyph, ToggleGlyph::Music);
    assert!(view.pending);
    assert!(!view.pressed);
}

#[test]
fn playing_shows_pause_glyph() {
    let mut state = PlaybackState::new();
    let t = start_play(&mut state);
    state.resolve(t, &Ok(()));
    let view = controls_view(&state);
    assert_eq!(view.glyph, ToggleGlyph::Pause);
    assert!(view.pressed);
    assert!(!view.pending);
}

#[test]
fn failure_shows_notice() {
    let mut state = PlaybackState::new();
    let t = start_play(&mut state);
    state.resolve(t, &Err(PlaybackError::from_media_code(2)));
    let view = controls_view(&state);
    assert!(view.show_error);
    assert_eq!(view.glyph, ToggleGlyph::Music);
}

#[test]
fn glyphs_have_distinct_symbols_and_labels() {
    assert_ne!(ToggleGlyph::Music.symbol(), ToggleGlyph::Pause.symbol());
    assert_eq!(ToggleGlyph::Music.label(), "Play music");
    assert_eq!(ToggleGlyph::Pause.label(), "Pause music");
}
