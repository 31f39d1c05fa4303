//! UI surface seam and the plain state the widget renders from.

use crate::catalog::Track;
use crate::utils::{format_time, UNKNOWN_DURATION};

/// What the play/pause button offers to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayAffordance {
    #[default]
    Play,
    Pause,
}

impl PlayAffordance {
    pub fn for_paused(paused: bool) -> Self {
        if paused {
            Self::Play
        } else {
            Self::Pause
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Play => "▶",
            Self::Pause => "⏸",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Play => "Play",
            Self::Pause => "Pause",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistRow {
    pub index: usize,
    pub title: String,
    pub artist: String,
    pub cover_image: String,
    pub duration_label: String,
}

impl PlaylistRow {
    pub fn new(index: usize, track: &Track) -> Self {
        Self {
            index,
            title: track.title.clone(),
            artist: track.artist.clone(),
            cover_image: track.cover_image.clone(),
            duration_label: UNKNOWN_DURATION.to_string(),
        }
    }
}

/// Sink for everything the controller displays.
pub trait PlayerSurface {
    fn show_track(&mut self, track: &Track);
    fn set_elapsed_label(&mut self, text: String);
    fn set_total_label(&mut self, text: String);
    fn set_seek_value(&mut self, seconds: f64);
    fn set_seek_max(&mut self, seconds: f64);
    fn set_volume_value(&mut self, volume: f64);
    fn set_active_row(&mut self, index: usize);
    fn set_play_affordance(&mut self, affordance: PlayAffordance);
    fn set_rows(&mut self, rows: Vec<PlaylistRow>);
    fn set_row_duration(&mut self, index: usize, text: String);
    fn set_autoplay_checked(&mut self, checked: bool);
}

/// Renderable snapshot of the widget.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceState {
    pub title: String,
    pub artist: String,
    pub cover_image: String,
    pub elapsed_label: String,
    pub total_label: String,
    pub seek_value: f64,
    pub seek_max: f64,
    pub volume: f64,
    pub active_row: Option<usize>,
    pub affordance: PlayAffordance,
    pub rows: Vec<PlaylistRow>,
    pub autoplay_checked: bool,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            title: String::new(),
            artist: String::new(),
            cover_image: String::new(),
            elapsed_label: format_time(0.0),
            total_label: format_time(0.0),
            seek_value: 0.0,
            seek_max: 0.0,
            volume: 1.0,
            active_row: None,
            affordance: PlayAffordance::Play,
            rows: Vec::new(),
            autoplay_checked: false,
        }
    }
}

impl PlayerSurface for SurfaceState {
    fn show_track(&mut self, track: &Track) {
        self.title = track.title.clone();
        self.artist = track.artist.clone();
        self.cover_image = track.cover_image.clone();
    }

    fn set_elapsed_label(&mut self, text: String) {
        self.elapsed_label = text;
    }

    fn set_total_label(&mut self, text: String) {
        self.total_label = text;
    }

    fn set_seek_value(&mut self, seconds: f64) {
        self.seek_value = seconds;
    }

    fn set_seek_max(&mut self, seconds: f64) {
        self.seek_max = seconds;
    }

    fn set_volume_value(&mut self, volume: f64) {
        self.volume = volume;
    }

    fn set_active_row(&mut self, index: usize) {
        self.active_row = Some(index);
    }

    fn set_play_affordance(&mut self, affordance: PlayAffordance) {
        self.affordance = affordance;
    }

    fn set_rows(&mut self, rows: Vec<PlaylistRow>) {
        self.rows = rows;
    }

    fn set_row_duration(&mut self, index: usize, text: String) {
        if let Some(row) = self.rows.iter_mut().find(|row| row.index == index) {
            row.duration_label = text;
        }
    }

    fn set_autoplay_checked(&mut self, checked: bool) {
        self.autoplay_checked = checked;
    }
}
