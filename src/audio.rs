use crate::dom;
use crate::playback::{
    settle_play, MediaControl, PlayTicket, PlaybackError, PlaybackState, Resolution, ToggleAction,
};
use anyhow::anyhow;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub type StateObserver = Rc<dyn Fn(&PlaybackState)>;

/// Owns the page's looping audio element and its play/pause state.
pub struct AudioPlayer {
    element: web::HtmlAudioElement,
    state: Rc<RefCell<PlaybackState>>,
    on_change: StateObserver,
    listeners: RefCell<Vec<dom::Listener>>,
    released: Cell<bool>,
}

impl AudioPlayer {
    pub fn new(src: &str, on_change: StateObserver) -> anyhow::Result<Self> {
        let element = web::HtmlAudioElement::new_with_src(src)
            .map_err(|e| anyhow!("HtmlAudioElement error: {:?}", e))?;
        element.set_loop(true);
        let state = Rc::new(RefCell::new(PlaybackState::new()));

        let on_error = {
            let element = element.clone();
            let state = state.clone();
            let on_change = on_change.clone();
            move || {
                let code = element.error().map(|e| e.code()).unwrap_or(0);
                log::error!("[audio] {}", PlaybackError::from_media_code(code));
                state.borrow_mut().media_failed();
                on_change(&state.borrow());
            }
        };
        let listeners = vec![
            dom::Listener::new(&element, "error", on_error)?,
            dom::Listener::new(&element, "canplaythrough", || {
                log::info!("[audio] can play through");
            })?,
        ];

        log::info!("[audio] created for {}", src);
        Ok(Self {
            element,
            state,
            on_change,
            listeners: RefCell::new(listeners),
            released: Cell::new(false),
        })
    }

    #[inline]
    pub fn src(&self) -> String {
        self.element.src()
    }

    #[inline]
    pub fn state(&self) -> PlaybackState {
        self.state.borrow().clone()
    }

    pub fn toggle(&self) {
        if self.released.get() {
            return;
        }
        let action = self.state.borrow_mut().toggle();
        match action {
            ToggleAction::Pause => {
                self.element.pause_media();
                log::info!("[audio] paused");
            }
            ToggleAction::Play(ticket) => self.request_play(ticket),
        }
        (self.on_change)(&self.state.borrow());
    }

    fn request_play(&self, ticket: PlayTicket) {
        let started = Instant::now();
        let promise: js_sys::Promise = match self.element.play() {
            Ok(p) => p,
            Err(e) => {
                settle(
                    &self.element,
                    &self.state,
                    &self.on_change,
                    ticket,
                    Err(classify_play_error(&e)),
                    started,
                );
                return;
            }
        };
        let element = self.element.clone();
        let state = self.state.clone();
        let on_change = self.on_change.clone();
        spawn_local(async move {
            let outcome = JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| classify_play_error(&e));
            settle(&element, &state, &on_change, ticket, outcome, started);
        });
    }

    /// Stop playback and drop the media resource. Safe to call more than once.
    pub fn release(&self) {
        if self.released.replace(true) {
            return;
        }
        // Detach first: clearing the source can fire `error` in some browsers.
        self.listeners.borrow_mut().clear();
        _ = self.element.pause();
        _ = self.element.remove_attribute("src");
        self.element.load();
        self.state.borrow_mut().release();
        log::info!("[audio] released");
    }
}

impl Drop for AudioPlayer {
    fn drop(&mut self) {
        self.release();
    }
}

impl MediaControl for web::HtmlAudioElement {
    fn pause_media(&self) {
        if let Err(e) = self.pause() {
            log::warn!("[audio] pause error: {:?}", e);
        }
    }
}

fn settle(
    element: &web::HtmlAudioElement,
    state: &RefCell<PlaybackState>,
    on_change: &StateObserver,
    ticket: PlayTicket,
    outcome: Result<(), PlaybackError>,
    started: Instant,
) {
    if settle_play(element, state, ticket, &outcome) == Resolution::Stale {
        return;
    }
    match &outcome {
        Ok(()) => log::info!(
            "[audio] playing ({} ms to start)",
            started.elapsed().as_millis()
        ),
        Err(e) => log::error!("[audio] {}", e),
    }
    on_change(&state.borrow());
}

fn classify_play_error(err: &JsValue) -> PlaybackError {
    match err.dyn_ref::<web::DomException>() {
        Some(ex) => PlaybackError::from_dom_exception(&ex.name(), &ex.message()),
        None => PlaybackError::Other(format!("{:?}", err)),
    }
}
