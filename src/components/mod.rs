//! The components module contains all shared components for our app.

mod app;
pub mod audio_manager;
mod icons;
mod player;
mod playlist;

pub use app::*;
pub use icons::*;
pub use player::*;
pub use playlist::*;
