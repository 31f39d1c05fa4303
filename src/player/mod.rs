//! Player core: the controller and the seams it talks through.
//!
//! Nothing in this module touches the DOM. The browser engine and the Dioxus
//! widget live in `components`; tests drive the controller with fakes.

mod config;
mod controller;
mod engine;
mod intent;
mod shortcuts;
mod surface;

pub use config::{PlayerConfig, AUTOPLAY_KEY};
pub use controller::{HandledShortcut, PlayerController, ProbeRequest};
pub use engine::{
    DetachedEngine, PendingPlay, PlayRequest, PlaySettlement, PlayTicket, PlaybackEngine,
};
pub use intent::PlayerIntent;
pub use shortcuts::{is_text_input_tag, step_seek, step_volume, KeyInput, Shortcut};
pub use surface::{PlayAffordance, PlayerSurface, PlaylistRow, SurfaceState};
