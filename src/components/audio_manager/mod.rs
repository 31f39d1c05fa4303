//! Audio Manager - owns the platform playback engine and binds its events to
//! the widget's controller outside of the component render cycle.

mod bindings;
#[cfg(target_arch = "wasm32")]
mod web_engine;

pub use bindings::{bind_widget, settle_in_background, spawn_duration_probes, WidgetBindings};
#[cfg(target_arch = "wasm32")]
pub use web_engine::WebAudioEngine;

use crate::db::PlatformPreferences;
use crate::error::Result;
use crate::player::{PlayerController, SurfaceState};

#[cfg(target_arch = "wasm32")]
pub type PlatformEngine = WebAudioEngine;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformEngine = crate::player::DetachedEngine;

/// Controller type held by each mounted widget.
pub type WidgetController = PlayerController<PlatformEngine, SurfaceState, PlatformPreferences>;

#[cfg(target_arch = "wasm32")]
pub fn create_engine() -> Result<PlatformEngine> {
    WebAudioEngine::new()
}

/// Only the browser has an `<audio>` element to drive; elsewhere the widget
/// renders its unavailable notice.
#[cfg(not(target_arch = "wasm32"))]
pub fn create_engine() -> Result<PlatformEngine> {
    Err(crate::error::PlayerError::Unsupported("audio playback"))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::error::PlayerError;

    #[test]
    fn host_build_has_no_engine() {
        let err = create_engine().expect_err("no media element off the browser");
        assert!(matches!(err, PlayerError::Unsupported(_)));
        assert_eq!(err.to_string(), "audio playback is not available on this target");
    }
}
