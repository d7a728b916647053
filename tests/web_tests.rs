// Browser tests for the DOM side: particle field teardown, audio release,
// stale play outcomes and the page mount cycle.
// Run with `wasm-pack test --headless --firefox` (or --chrome).

#![cfg(target_arch = "wasm32")]

use greeting_web::audio::AudioPlayer;
use greeting_web::constants::{AUDIO_ERROR_ID, MUSIC_TOGGLE_ID, PARTICLE_COUNT, PARTICLE_ROOT_ATTR};
use greeting_web::field::ParticleField;
use greeting_web::overlay;
use greeting_web::playback::{settle_play, PlaybackState, Resolution, ToggleAction};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys as web;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web::Document {
    web::window().unwrap().document().unwrap()
}

fn body() -> web::Element {
    document().body().unwrap().into()
}

fn count(selector: &str) -> u32 {
    document().query_selector_all(selector).unwrap().length()
}

fn add_controls() -> (web::Element, web::Element) {
    let doc = document();
    let button = doc.create_element("button").unwrap();
    button.set_id(MUSIC_TOGGLE_ID);
    let notice = doc.create_element("div").unwrap();
    notice.set_id(AUDIO_ERROR_ID);
    body().append_child(&button).unwrap();
    body().append_child(&notice).unwrap();
    (button, notice)
}

#[wasm_bindgen_test]
fn field_cycles_keep_at_most_one_style() {
    for _ in 0..3 {
        let field = ParticleField::mount(&document(), &body()).unwrap();
        assert_eq!(count("[data-particle-field]"), 1);
        assert_eq!(count("[data-particle-field] style"), 1);
        assert_eq!(
            count("[data-particle-field] div"),
            PARTICLE_COUNT as u32
        );
        drop(field);
        assert_eq!(count("[data-particle-field]"), 0);
        assert_eq!(count("[data-particle-field] style"), 0);
    }
}

#[wasm_bindgen_test]
fn release_empties_audio_source() {
    let player = AudioPlayer::new("/missing-song.mp3", Rc::new(|_: &PlaybackState| {})).unwrap();
    assert!(!player.src().is_empty());

    player.release();
    assert_eq!(player.src(), "");
    assert!(!player.state().is_playing());

    // released players ignore further toggles
    player.toggle();
    assert!(player.state().is_idle());
    player.release();
    assert_eq!(player.src(), "");
}

#[wasm_bindgen_test]
fn stale_success_keeps_newer_request_pending() {
    let element = web::HtmlAudioElement::new().unwrap();
    let state = RefCell::new(PlaybackState::new());
    let ToggleAction::Play(first) = state.borrow_mut().toggle() else {
        panic!("expected play");
    };
    assert_eq!(state.borrow_mut().toggle(), ToggleAction::Pause);
    let ToggleAction::Play(second) = state.borrow_mut().toggle() else {
        panic!("expected play");
    };

    assert_eq!(
        settle_play(&element, &state, first, &Ok(())),
        Resolution::Stale
    );
    assert_eq!(state.borrow().pending(), Some(second));
    assert!(!state.borrow().has_error());
}

#[wasm_bindgen_test]
fn notice_visibility_keeps_host_inline_style() {
    let el = document().create_element("div").unwrap();
    let html: &web::HtmlElement = el.dyn_ref().unwrap();
    html.style().set_property("right", "4px").unwrap();

    overlay::hide(&el);
    assert_eq!(html.style().get_property_value("display").unwrap(), "none");
    assert_eq!(html.style().get_property_value("right").unwrap(), "4px");

    overlay::show(&el);
    assert_eq!(html.style().get_property_value("display").unwrap(), "");
    assert_eq!(html.style().get_property_value("right").unwrap(), "4px");
}

// One test owns the page-level lifecycle, which is process-global.
#[wasm_bindgen_test]
fn page_mount_cycles_and_missing_particle_root() {
    let (button, notice) = add_controls();
    let body_el = body();
    body_el.set_attribute(PARTICLE_ROOT_ATTR, "no-such-root").unwrap();

    for _ in 0..3 {
        greeting_web::mount_page().unwrap();
        greeting_web::mount_page().unwrap();
        assert_eq!(count("[data-particle-field]"), 1);
        assert_eq!(count("[data-particle-field] style"), 1);
        assert_eq!(
            document()
                .query_selector("[data-particle-field]")
                .unwrap()
                .unwrap()
                .parent_element()
                .unwrap(),
            body_el
        );
        assert_eq!(button.get_attribute("aria-pressed").as_deref(), Some("false"));

        assert!(greeting_web::unmount_page());
        assert!(!greeting_web::unmount_page());
        assert_eq!(count("[data-particle-field]"), 0);
    }

    body_el.remove_attribute(PARTICLE_ROOT_ATTR).unwrap();
    button.remove();
    notice.remove();
}
