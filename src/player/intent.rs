//! Events flowing into the controller from the widget and the media element.

use super::controller::PlayerController;
use super::engine::{PendingPlay, PlaybackEngine};
use super::surface::PlayerSurface;
use crate::db::PreferenceStore;

#[derive(Debug, Clone, PartialEq)]
pub enum PlayerIntent {
    // User controls
    TogglePlayback,
    Previous,
    Next,
    SelectRow(usize),
    SeekInput(f64),
    SeekCommit(f64),
    VolumeInput(f64),
    SetAutoplay(bool),

    // Media element lifecycle
    TimeUpdate,
    LoadedMetadata,
    Ended,
    DurationProbed { index: usize, duration: f64 },
}

impl<E, S, P> PlayerController<E, S, P>
where
    E: PlaybackEngine,
    S: PlayerSurface,
    P: PreferenceStore,
{
    /// Route an intent to its handler. A returned play request must be
    /// settled through [`PlayerController::on_play_settled`].
    pub fn dispatch(&mut self, intent: PlayerIntent) -> Option<PendingPlay> {
        match intent {
            PlayerIntent::TogglePlayback => self.toggle_play_pause(),
            PlayerIntent::Previous => self.play_previous(),
            PlayerIntent::Next => self.play_next(),
            PlayerIntent::SelectRow(index) => self.select_row(index),
            PlayerIntent::SeekInput(seconds) => {
                self.on_seek_input(seconds);
                None
            }
            PlayerIntent::SeekCommit(seconds) => {
                self.on_seek_commit(seconds);
                None
            }
            PlayerIntent::VolumeInput(volume) => {
                self.on_volume_input(volume);
                None
            }
            PlayerIntent::SetAutoplay(enabled) => {
                self.set_autoplay(enabled);
                None
            }
            PlayerIntent::TimeUpdate => {
                self.on_time_update();
                None
            }
            PlayerIntent::LoadedMetadata => {
                self.on_loaded_metadata();
                None
            }
            PlayerIntent::Ended => self.on_ended(),
            PlayerIntent::DurationProbed { index, duration } => {
                self.on_duration_probed(index, duration);
                None
            }
        }
    }
}
