//! Playback engine seam.
//!
//! The engine owns decode and timing; the controller only requests
//! transitions and reads back state.

use futures_util::future::{self, LocalBoxFuture};
use futures_util::FutureExt;

use crate::error::{PlayerError, Result};

/// Asynchronous outcome of a play request. Browsers reject it when autoplay
/// policy blocks playback or the source cannot be decoded.
pub type PlayRequest = LocalBoxFuture<'static, Result<()>>;

/// Media element capability consumed by the controller.
pub trait PlaybackEngine {
    /// Point the engine at a new source. Playback position resets.
    fn load(&mut self, source: &str);
    /// Drop the current source and stop any network activity for it.
    fn unload(&mut self);
    fn play(&mut self) -> PlayRequest;
    fn pause(&mut self);
    fn paused(&self) -> bool;
    /// Seconds; may be `NaN` before a source is loaded.
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, seconds: f64);
    /// Seconds; `NaN` until metadata arrives, `inf` for unbounded streams.
    fn duration(&self) -> f64;
    fn volume(&self) -> f64;
    fn set_volume(&mut self, volume: f64);
}

/// Identifies the track load a play request was issued under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayTicket(pub(crate) u64);

/// A play request still in flight.
#[must_use = "a pending play has to be settled to reconcile the play/pause control"]
pub struct PendingPlay {
    ticket: PlayTicket,
    request: PlayRequest,
}

impl PendingPlay {
    pub(crate) fn new(ticket: PlayTicket, request: PlayRequest) -> Self {
        Self { ticket, request }
    }

    pub fn ticket(&self) -> PlayTicket {
        self.ticket
    }

    /// Wait for the engine to accept or reject the request.
    pub async fn settle(self) -> PlaySettlement {
        PlaySettlement {
            ticket: self.ticket,
            result: self.request.await,
        }
    }
}

impl std::fmt::Debug for PendingPlay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingPlay")
            .field("ticket", &self.ticket)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub struct PlaySettlement {
    pub ticket: PlayTicket,
    pub result: Result<()>,
}

/// Engine used where no media element exists (desktop shell, host builds).
/// It keeps position and volume so the widget stays consistent, and rejects
/// every play request.
#[derive(Debug, Clone)]
pub struct DetachedEngine {
    source: Option<String>,
    current_time: f64,
    volume: f64,
}

impl DetachedEngine {
    pub fn new() -> Self {
        Self {
            source: None,
            current_time: 0.0,
            volume: 1.0,
        }
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

impl Default for DetachedEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackEngine for DetachedEngine {
    fn load(&mut self, source: &str) {
        self.source = Some(source.to_string());
        self.current_time = 0.0;
    }

    fn unload(&mut self) {
        self.source = None;
        self.current_time = 0.0;
    }

    fn play(&mut self) -> PlayRequest {
        future::ready(Err(PlayerError::Unsupported("audio playback"))).boxed_local()
    }

    fn pause(&mut self) {}

    fn paused(&self) -> bool {
        true
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.current_time = seconds;
    }

    fn duration(&self) -> f64 {
        f64::NAN
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
    }
}
