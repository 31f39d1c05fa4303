//! Fakes shared by the controller integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use futures_util::future::{self, FutureExt};
use melodeck::catalog::{Catalog, Track};
use melodeck::db::{MemoryPreferences, PreferenceStore};
use melodeck::player::{
    PlayAffordance, PlayRequest, PlaybackEngine, PlayerConfig, PlayerController, PlayerSurface,
    PlaylistRow, SurfaceState,
};
use melodeck::{PlayerError, Result};

/// Observable state behind a [`FakeEngine`]; tests keep a handle to it.
#[derive(Debug)]
pub struct EngineState {
    pub source: Option<String>,
    pub paused: bool,
    pub current_time: f64,
    pub duration: f64,
    pub volume: f64,
    /// Reject play requests the way an autoplay policy would
    pub block_play: bool,
    pub play_calls: usize,
    pub pause_calls: usize,
    pub unloads: usize,
    pub loads: Vec<String>,
    pub seeks: Vec<f64>,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            source: None,
            paused: true,
            current_time: 0.0,
            duration: f64::NAN,
            volume: 1.0,
            block_play: false,
            play_calls: 0,
            pause_calls: 0,
            unloads: 0,
            loads: Vec::new(),
            seeks: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeEngine {
    pub state: Rc<RefCell<EngineState>>,
}

impl PlaybackEngine for FakeEngine {
    fn load(&mut self, source: &str) {
        let mut state = self.state.borrow_mut();
        state.source = Some(source.to_string());
        state.loads.push(source.to_string());
        state.paused = true;
        state.current_time = 0.0;
        state.duration = f64::NAN;
    }

    fn unload(&mut self) {
        let mut state = self.state.borrow_mut();
        state.source = None;
        state.unloads += 1;
        state.paused = true;
        state.current_time = 0.0;
    }

    fn play(&mut self) -> PlayRequest {
        let mut state = self.state.borrow_mut();
        state.play_calls += 1;
        if state.block_play {
            future::ready(Err(PlayerError::PlayRejected("NotAllowedError".into()))).boxed_local()
        } else {
            state.paused = false;
            future::ready(Ok(())).boxed_local()
        }
    }

    fn pause(&mut self) {
        let mut state = self.state.borrow_mut();
        state.pause_calls += 1;
        state.paused = true;
    }

    fn paused(&self) -> bool {
        self.state.borrow().paused
    }

    fn current_time(&self) -> f64 {
        self.state.borrow().current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        let mut state = self.state.borrow_mut();
        state.current_time = seconds;
        state.seeks.push(seconds);
    }

    fn duration(&self) -> f64 {
        self.state.borrow().duration
    }

    fn volume(&self) -> f64 {
        self.state.borrow().volume
    }

    fn set_volume(&mut self, volume: f64) {
        self.state.borrow_mut().volume = volume;
    }
}

/// Surface that keeps the rendered state plus a count of affordance updates.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub state: SurfaceState,
    pub affordance_updates: usize,
    pub elapsed_history: Vec<String>,
}

impl PlayerSurface for RecordingSurface {
    fn show_track(&mut self, track: &Track) {
        self.state.show_track(track);
    }

    fn set_elapsed_label(&mut self, text: String) {
        self.elapsed_history.push(text.clone());
        self.state.set_elapsed_label(text);
    }

    fn set_total_label(&mut self, text: String) {
        self.state.set_total_label(text);
    }

    fn set_seek_value(&mut self, seconds: f64) {
        self.state.set_seek_value(seconds);
    }

    fn set_seek_max(&mut self, seconds: f64) {
        self.state.set_seek_max(seconds);
    }

    fn set_volume_value(&mut self, volume: f64) {
        self.state.set_volume_value(volume);
    }

    fn set_active_row(&mut self, index: usize) {
        self.state.set_active_row(index);
    }

    fn set_play_affordance(&mut self, affordance: PlayAffordance) {
        self.affordance_updates += 1;
        self.state.set_play_affordance(affordance);
    }

    fn set_rows(&mut self, rows: Vec<PlaylistRow>) {
        self.state.set_rows(rows);
    }

    fn set_row_duration(&mut self, index: usize, text: String) {
        self.state.set_row_duration(index, text);
    }

    fn set_autoplay_checked(&mut self, checked: bool) {
        self.state.set_autoplay_checked(checked);
    }
}

/// Store whose writes always fail.
#[derive(Debug, Default)]
pub struct ReadOnlyPreferences {
    pub inner: MemoryPreferences,
}

impl PreferenceStore for ReadOnlyPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
        Err(PlayerError::Storage("QuotaExceededError".into()))
    }
}

pub type TestController<P = MemoryPreferences> = PlayerController<FakeEngine, RecordingSurface, P>;

pub fn catalog(len: usize) -> Catalog {
    let tracks = (0..len)
        .map(|i| {
            Track::new(
                format!("Track {i}"),
                format!("Artist {i}"),
                format!("https://cdn.test/{i}.mp3"),
                format!("https://cdn.test/{i}.jpg"),
            )
        })
        .collect();
    Catalog::new(tracks).expect("non-empty catalog")
}

pub fn controller_with<P: PreferenceStore>(
    len: usize,
    prefs: P,
) -> (TestController<P>, Rc<RefCell<EngineState>>) {
    let engine = FakeEngine::default();
    let handle = engine.state.clone();
    let controller = PlayerController::new(
        catalog(len),
        engine,
        RecordingSurface::default(),
        prefs,
        PlayerConfig::default(),
    );
    (controller, handle)
}

/// A started controller over `len` tracks with no stored preference.
pub fn started(len: usize) -> (TestController, Rc<RefCell<EngineState>>) {
    let (mut controller, handle) = controller_with(len, MemoryPreferences::new());
    controller.start();
    (controller, handle)
}

/// Drive a pending play to completion and hand it back to the controller.
pub fn settle<P: PreferenceStore>(
    controller: &mut TestController<P>,
    pending: Option<melodeck::player::PendingPlay>,
) {
    if let Some(pending) = pending {
        let settlement = pending
            .settle()
            .now_or_never()
            .expect("fake play requests resolve immediately");
        controller.on_play_settled(settlement);
    }
}
