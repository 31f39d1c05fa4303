// Browser playback engine backed by a detached <audio> element.
use futures_util::future::{self, FutureExt};
use tracing::warn;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

use crate::error::{PlayerError, Result};
use crate::player::{PlayRequest, PlaybackEngine};

/// One `<audio>` element per widget. It is never attached to the document;
/// the page only ever sees the widget's own controls.
#[derive(Debug, Clone)]
pub struct WebAudioEngine {
    audio: HtmlAudioElement,
}

impl WebAudioEngine {
    pub fn new() -> Result<Self> {
        let audio = HtmlAudioElement::new().map_err(|e| PlayerError::Engine(describe(&e)))?;
        // Keep preload light so we stream instead of buffering entire files
        audio.set_preload("metadata");
        Ok(Self { audio })
    }

    pub fn element(&self) -> &HtmlAudioElement {
        &self.audio
    }
}

impl PlaybackEngine for WebAudioEngine {
    fn load(&mut self, source: &str) {
        self.audio.set_src(source);
    }

    fn unload(&mut self) {
        self.pause();
        if let Err(e) = self.audio.remove_attribute("src") {
            warn!(error = %describe(&e), "could not clear audio source");
        }
        self.audio.load();
    }

    fn play(&mut self) -> PlayRequest {
        match self.audio.play() {
            Ok(promise) => async move {
                JsFuture::from(promise)
                    .await
                    .map(|_| ())
                    .map_err(|e| PlayerError::PlayRejected(describe(&e)))
            }
            .boxed_local(),
            Err(e) => future::ready(Err(PlayerError::PlayRejected(describe(&e)))).boxed_local(),
        }
    }

    fn pause(&mut self) {
        if let Err(e) = self.audio.pause() {
            warn!(error = %describe(&e), "audio element refused to pause");
        }
    }

    fn paused(&self) -> bool {
        self.audio.paused()
    }

    fn current_time(&self) -> f64 {
        self.audio.current_time()
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.audio.set_current_time(seconds);
    }

    fn duration(&self) -> f64 {
        self.audio.duration()
    }

    fn volume(&self) -> f64 {
        self.audio.volume()
    }

    fn set_volume(&mut self, volume: f64) {
        self.audio.set_volume(volume.clamp(0.0, 1.0));
    }
}

/// DOMException messages are the useful part of a rejected play promise.
pub(crate) fn describe(value: &JsValue) -> String {
    if let Some(message) = value.as_string() {
        return message;
    }
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
