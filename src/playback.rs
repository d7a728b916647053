use std::cell::RefCell;
use thiserror::Error;

/// Why a play request (or the media element itself) failed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("playback blocked by the browser: {0}")]
    Blocked(String),
    #[error("audio source not supported: {0}")]
    Unsupported(String),
    #[error("play request aborted: {0}")]
    Aborted(String),
    #[error("media error {code} ({})", media_code_name(*.code))]
    Media { code: u16 },
    #[error("play failed: {0}")]
    Other(String),
}

impl PlaybackError {
    /// Classify a rejected `play()` promise by its DOMException name.
    pub fn from_dom_exception(name: &str, message: &str) -> Self {
        match name {
            "NotAllowedError" => Self::Blocked(message.to_string()),
            "NotSupportedError" => Self::Unsupported(message.to_string()),
            "AbortError" => Self::Aborted(message.to_string()),
            _ => Self::Other(format!("{}: {}", name, message)),
        }
    }

    #[inline]
    pub fn from_media_code(code: u16) -> Self {
        Self::Media { code }
    }
}

// MediaError.code values
pub fn media_code_name(code: u16) -> &'static str {
    match code {
        1 => "aborted",
        2 => "network",
        3 => "decode",
        4 => "source not supported",
        _ => "unknown",
    }
}

/// Identity of one outstanding play request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlayTicket(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    /// Call `play()` and report the outcome back with this ticket.
    Play(PlayTicket),
    /// Pause now; state already reflects it.
    Pause,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// The ticket was superseded by a pause or teardown; outcome ignored.
    Stale,
}

/// Play/pause state for the page's single audio element.
///
/// `playing` only becomes true once a play request succeeds. A toggle while a
/// request is in flight counts as pause intent, and the request's eventual
/// outcome is discarded.
#[derive(Clone, Debug, Default)]
pub struct PlaybackState {
    playing: bool,
    error: bool,
    pending: Option<PlayTicket>,
    next_ticket: u64,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[inline]
    pub fn has_error(&self) -> bool {
        self.error
    }

    #[inline]
    pub fn pending(&self) -> Option<PlayTicket> {
        self.pending
    }

    /// Neither playing nor waiting on a play request.
    #[inline]
    pub fn is_idle(&self) -> bool {
        !self.playing && self.pending.is_none()
    }

    pub fn toggle(&mut self) -> ToggleAction {
        if self.playing || self.pending.is_some() {
            self.playing = false;
            self.pending = None;
            return ToggleAction::Pause;
        }
        self.next_ticket = self.next_ticket.wrapping_add(1);
        let ticket = PlayTicket(self.next_ticket);
        self.pending = Some(ticket);
        ToggleAction::Play(ticket)
    }

    pub fn resolve(
        &mut self,
        ticket: PlayTicket,
        outcome: &Result<(), PlaybackError>,
    ) -> Resolution {
        if self.pending != Some(ticket) {
            return Resolution::Stale;
        }
        self.pending = None;
        match outcome {
            Ok(()) => {
                self.playing = true;
                self.error = false;
            }
            Err(_) => {
                self.playing = false;
                self.error = true;
            }
        }
        Resolution::Applied
    }

    /// The element reported an error outside of a play request.
    pub fn media_failed(&mut self) {
        self.playing = false;
        self.error = true;
        self.pending = None;
    }

    pub fn release(&mut self) {
        self.playing = false;
        self.pending = None;
    }
}

/// The one thing a settled play request may do to the media element.
pub trait MediaControl {
    fn pause_media(&self);
}

/// Record a play outcome against `state`.
///
/// A stale success means the element started after the user paused, so it is
/// paused again, but only while nothing newer is pending or playing; pausing
/// under a newer request would abort it.
pub fn settle_play<M: MediaControl + ?Sized>(
    media: &M,
    state: &RefCell<PlaybackState>,
    ticket: PlayTicket,
    outcome: &Result<(), PlaybackError>,
) -> Resolution {
    let resolution = state.borrow_mut().resolve(ticket, outcome);
    if resolution == Resolution::Stale {
        let idle = state.borrow().is_idle();
        match outcome {
            Ok(()) if idle => {
                media.pause_media();
                log::info!("[audio] discarded stale play {:?}", ticket);
            }
            Ok(()) => log::debug!("[audio] stale play {:?} superseded", ticket),
            Err(e) => log::debug!("[audio] stale play {:?} failed: {}", ticket, e),
        }
    }
    resolution
}
