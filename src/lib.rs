//! Melodeck - a playlist music player widget.
//!
//! The [`player`] module holds the controller and the traits it is wired
//! through ([`player::PlaybackEngine`], [`player::PlayerSurface`],
//! [`db::PreferenceStore`]). [`components`] mounts it as a Dioxus widget backed
//! by an `<audio>` element and `localStorage` in the browser.

pub mod catalog;
pub mod components;
pub mod db;
pub mod error;
pub mod player;
pub mod utils;

pub use catalog::{Catalog, Track};
pub use error::{PlayerError, Result};
