//! Player controller: keeps the engine's loaded source, the surface and the
//! persisted autoplay flag in step with the current track.

use tracing::{debug, info, warn};

use super::config::PlayerConfig;
use super::engine::{PendingPlay, PlaySettlement, PlayTicket, PlaybackEngine};
use super::shortcuts::{step_seek, step_volume, KeyInput, Shortcut};
use super::surface::{PlayAffordance, PlayerSurface, PlaylistRow};
use crate::catalog::Catalog;
use crate::db::{load_flag, save_flag, PreferenceStore};
use crate::utils::format_time;

/// A playlist row whose duration should be probed in the background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRequest {
    pub index: usize,
    pub source: String,
}

/// Result of a key press the controller acted on.
#[derive(Debug)]
pub struct HandledShortcut {
    pub shortcut: Shortcut,
    pub pending: Option<PendingPlay>,
}

pub struct PlayerController<E, S, P> {
    catalog: Catalog,
    engine: E,
    surface: S,
    prefs: P,
    config: PlayerConfig,
    current_index: usize,
    seeking: bool,
    autoplay: bool,
    // Bumped on every load; play settlements from older loads are dropped.
    generation: u64,
}

impl<E, S, P> PlayerController<E, S, P>
where
    E: PlaybackEngine,
    S: PlayerSurface,
    P: PreferenceStore,
{
    pub fn new(catalog: Catalog, engine: E, surface: S, prefs: P, config: PlayerConfig) -> Self {
        Self {
            catalog,
            engine,
            surface,
            prefs,
            config,
            current_index: 0,
            seeking: false,
            autoplay: false,
            generation: 0,
        }
    }

    /// Restore the autoplay preference, apply the initial volume, build the
    /// playlist and load the first track without playing it.
    pub fn start(&mut self) -> Vec<ProbeRequest> {
        self.autoplay = load_flag(&self.prefs, &self.config.autoplay_key);
        self.surface.set_autoplay_checked(self.autoplay);

        let volume = step_volume(self.config.initial_volume, 0.0);
        self.engine.set_volume(volume);
        self.surface.set_volume_value(volume);

        let probes = self.render_playlist();
        self.show_track(self.current_index);
        self.refresh_affordance();
        probes
    }

    pub fn render_playlist(&mut self) -> Vec<ProbeRequest> {
        let rows = self
            .catalog
            .iter()
            .map(|(index, track)| PlaylistRow::new(index, track))
            .collect();
        self.surface.set_rows(rows);
        self.surface.set_active_row(self.current_index);

        self.catalog
            .iter()
            .map(|(index, track)| ProbeRequest {
                index,
                source: track.audio_source.clone(),
            })
            .collect()
    }

    pub fn on_duration_probed(&mut self, index: usize, duration: f64) {
        if index < self.catalog.len() {
            self.surface.set_row_duration(index, format_time(duration));
        }
    }

    /// Make `index` the current track. With `auto_play` the returned request
    /// must be settled through [`Self::on_play_settled`].
    pub fn load_track(&mut self, index: usize, auto_play: bool) -> Option<PendingPlay> {
        if !self.show_track(index) {
            return None;
        }
        if auto_play {
            Some(self.request_play())
        } else {
            self.refresh_affordance();
            None
        }
    }

    fn show_track(&mut self, index: usize) -> bool {
        let Some(track) = self.catalog.get(index) else {
            debug!(index, "ignoring load of track outside the catalog");
            return false;
        };

        self.current_index = index;
        self.generation += 1;
        self.engine.load(&track.audio_source);
        self.surface.show_track(track);
        self.surface.set_seek_value(0.0);
        self.surface.set_elapsed_label(format_time(0.0));
        self.surface.set_total_label(format_time(0.0));
        self.surface.set_active_row(index);
        info!(index, title = %track.title, "loaded track");
        true
    }

    pub fn toggle_play_pause(&mut self) -> Option<PendingPlay> {
        let pending = if self.engine.paused() {
            Some(self.request_play())
        } else {
            self.engine.pause();
            None
        };
        self.refresh_affordance();
        pending
    }

    pub fn play_next(&mut self) -> Option<PendingPlay> {
        let index = self.catalog.next_index(self.current_index);
        self.load_track(index, true)
    }

    pub fn play_previous(&mut self) -> Option<PendingPlay> {
        let index = self.catalog.previous_index(self.current_index);
        self.load_track(index, true)
    }

    /// Playlist row click: pauses the current track if it is playing,
    /// otherwise starts the clicked one.
    pub fn select_row(&mut self, index: usize) -> Option<PendingPlay> {
        if index == self.current_index && !self.engine.paused() {
            self.toggle_play_pause()
        } else {
            self.load_track(index, true)
        }
    }

    /// Apply the outcome of a play request. Rejections are expected (autoplay
    /// policy) and only reset the button.
    pub fn on_play_settled(&mut self, settlement: PlaySettlement) {
        if settlement.ticket != self.ticket() {
            debug!(ticket = ?settlement.ticket, "dropping play settlement from an earlier load");
            return;
        }
        if let Err(err) = settlement.result {
            debug!(%err, "play request rejected");
        }
        self.refresh_affordance();
    }

    pub fn on_time_update(&mut self) {
        let now = self.engine.current_time();
        if !self.seeking {
            self.surface
                .set_seek_value(if now.is_finite() { now } else { 0.0 });
        }
        self.surface.set_elapsed_label(format_time(now));
    }

    pub fn on_loaded_metadata(&mut self) {
        let duration = self.engine.duration();
        self.surface.set_total_label(format_time(duration));
        self.surface
            .set_seek_max(if duration.is_finite() { duration } else { 0.0 });
    }

    pub fn on_ended(&mut self) -> Option<PendingPlay> {
        if self.autoplay {
            self.play_next()
        } else {
            self.refresh_affordance();
            None
        }
    }

    /// Slider drag in progress: preview the position without seeking.
    pub fn on_seek_input(&mut self, seconds: f64) {
        self.seeking = true;
        self.surface.set_elapsed_label(format_time(seconds));
    }

    /// Slider released: commit the position to the engine.
    pub fn on_seek_commit(&mut self, seconds: f64) {
        if seconds.is_finite() {
            self.engine.set_current_time(seconds);
        }
        self.seeking = false;
    }

    pub fn on_volume_input(&mut self, volume: f64) {
        if !volume.is_finite() {
            return;
        }
        let volume = volume.clamp(0.0, 1.0);
        self.engine.set_volume(volume);
        self.surface.set_volume_value(volume);
    }

    pub fn set_autoplay(&mut self, enabled: bool) {
        self.autoplay = enabled;
        self.surface.set_autoplay_checked(enabled);
        if let Err(err) = save_flag(&mut self.prefs, &self.config.autoplay_key, enabled) {
            warn!(%err, "failed to persist autoplay preference");
        }
    }

    /// Stop playback and drop the loaded source when the widget goes away.
    /// Play requests still in flight settle as stale.
    pub fn release(&mut self) {
        self.engine.pause();
        self.engine.unload();
        self.generation += 1;
        self.seeking = false;
        info!(index = self.current_index, "player released");
    }

    pub fn on_key_shortcut(&mut self, input: &KeyInput) -> Option<HandledShortcut> {
        let shortcut = Shortcut::from_key(input)?;
        debug!(?shortcut, "keyboard shortcut");
        let pending = self.apply_shortcut(shortcut);
        Some(HandledShortcut { shortcut, pending })
    }

    fn apply_shortcut(&mut self, shortcut: Shortcut) -> Option<PendingPlay> {
        match shortcut {
            Shortcut::TogglePlayback => self.toggle_play_pause(),
            Shortcut::SeekForward => {
                self.seek_by(self.config.seek_step_secs);
                None
            }
            Shortcut::SeekBackward => {
                self.seek_by(-self.config.seek_step_secs);
                None
            }
            Shortcut::VolumeUp => {
                self.volume_by(self.config.volume_step);
                None
            }
            Shortcut::VolumeDown => {
                self.volume_by(-self.config.volume_step);
                None
            }
            Shortcut::NextTrack => self.play_next(),
            Shortcut::PreviousTrack => self.play_previous(),
        }
    }

    fn seek_by(&mut self, delta: f64) {
        let target = step_seek(self.engine.current_time(), self.engine.duration(), delta);
        self.engine.set_current_time(target);
    }

    fn volume_by(&mut self, delta: f64) {
        let volume = step_volume(self.engine.volume(), delta);
        self.engine.set_volume(volume);
        self.surface.set_volume_value(volume);
    }

    fn request_play(&mut self) -> PendingPlay {
        PendingPlay::new(self.ticket(), self.engine.play())
    }

    fn refresh_affordance(&mut self) {
        self.surface
            .set_play_affordance(PlayAffordance::for_paused(self.engine.paused()));
    }

    fn ticket(&self) -> PlayTicket {
        PlayTicket(self.generation)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_seeking(&self) -> bool {
        self.seeking
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn preferences(&self) -> &P {
        &self.prefs
    }
}
