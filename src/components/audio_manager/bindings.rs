// Wiring between the media element / document and the controller signal.
use dioxus::prelude::*;

use crate::player::{PendingPlay, ProbeRequest};

use super::WidgetController;

#[cfg(target_arch = "wasm32")]
use crate::player::{is_text_input_tag, KeyInput, PlayerIntent};
#[cfg(target_arch = "wasm32")]
use super::web_engine::describe;
#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, Document, HtmlAudioElement, KeyboardEvent};

/// Settle a play request on the component's task scope. Call from event
/// handlers rendered by the widget.
pub fn settle_in_background(mut controller: Signal<WidgetController>, pending: Option<PendingPlay>) {
    let Some(pending) = pending else {
        return;
    };
    spawn(async move {
        let settlement = pending.settle().await;
        if let Ok(mut player) = controller.try_write() {
            player.on_play_settled(settlement);
        }
    });
}

/// Listeners a mounted widget holds on its audio element and the document.
/// Dropping the value detaches all of them.
#[derive(Default)]
pub struct WidgetBindings {
    #[cfg(target_arch = "wasm32")]
    audio: Option<HtmlAudioElement>,
    #[cfg(target_arch = "wasm32")]
    media: Vec<Closure<dyn FnMut()>>,
    #[cfg(target_arch = "wasm32")]
    keydown: Option<(Document, Closure<dyn FnMut(KeyboardEvent)>)>,
}

#[cfg(target_arch = "wasm32")]
impl Drop for WidgetBindings {
    fn drop(&mut self) {
        if let Some(audio) = self.audio.take() {
            audio.set_ontimeupdate(None);
            audio.set_onloadedmetadata(None);
            audio.set_onended(None);
        }
        self.media.clear();

        if let Some((document, callback)) = self.keydown.take() {
            if let Err(e) = document
                .remove_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
            {
                tracing::warn!(error = %describe(&e), "could not detach keyboard shortcuts");
            }
        }
    }
}

/// Attach the media element events and the document-wide shortcuts. Hold the
/// result for as long as the widget is mounted.
#[cfg(target_arch = "wasm32")]
pub fn bind_widget(controller: Signal<WidgetController>) -> WidgetBindings {
    let runtime = Runtime::current();
    let mut bindings = WidgetBindings::default();
    bind_media_events(&mut bindings, runtime.clone(), controller);
    bind_keyboard(&mut bindings, runtime, controller);
    bindings
}

#[cfg(not(target_arch = "wasm32"))]
pub fn bind_widget(_controller: Signal<WidgetController>) -> WidgetBindings {
    WidgetBindings::default()
}

/// Settle a play request raised from a raw DOM callback, where no component
/// scope is active.
#[cfg(target_arch = "wasm32")]
fn settle_detached(
    runtime: Rc<Runtime>,
    mut controller: Signal<WidgetController>,
    pending: Option<PendingPlay>,
) {
    let Some(pending) = pending else {
        return;
    };
    wasm_bindgen_futures::spawn_local(async move {
        let settlement = pending.settle().await;
        let _guard = RuntimeGuard::new(runtime);
        if let Ok(mut player) = controller.try_write() {
            player.on_play_settled(settlement);
        }
    });
}

#[cfg(target_arch = "wasm32")]
fn media_callback(
    runtime: Rc<Runtime>,
    mut controller: Signal<WidgetController>,
    intent: PlayerIntent,
) -> Closure<dyn FnMut()> {
    Closure::wrap(Box::new(move || {
        let _guard = RuntimeGuard::new(runtime.clone());
        let Ok(mut player) = controller.try_write() else {
            return;
        };
        let pending = player.dispatch(intent.clone());
        drop(player);
        settle_detached(runtime.clone(), controller, pending);
    }) as Box<dyn FnMut()>)
}

/// Forward `timeupdate`, `loadedmetadata` and `ended` from the widget's
/// audio element.
#[cfg(target_arch = "wasm32")]
fn bind_media_events(
    bindings: &mut WidgetBindings,
    runtime: Rc<Runtime>,
    controller: Signal<WidgetController>,
) {
    let audio = controller.peek().engine().element().clone();

    let time_closure = media_callback(runtime.clone(), controller, PlayerIntent::TimeUpdate);
    audio.set_ontimeupdate(Some(time_closure.as_ref().unchecked_ref()));

    let meta_closure = media_callback(runtime.clone(), controller, PlayerIntent::LoadedMetadata);
    audio.set_onloadedmetadata(Some(meta_closure.as_ref().unchecked_ref()));

    let end_closure = media_callback(runtime, controller, PlayerIntent::Ended);
    audio.set_onended(Some(end_closure.as_ref().unchecked_ref()));

    bindings.audio = Some(audio);
    bindings.media = vec![time_closure, meta_closure, end_closure];
}

/// Document-wide shortcuts. Keys typed into text fields are left alone.
#[cfg(target_arch = "wasm32")]
fn bind_keyboard(
    bindings: &mut WidgetBindings,
    runtime: Rc<Runtime>,
    mut controller: Signal<WidgetController>,
) {
    let Some(document) = window().and_then(|w| w.document()) else {
        tracing::warn!("no document; keyboard shortcuts disabled");
        return;
    };

    let key_cb = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        let _guard = RuntimeGuard::new(runtime.clone());
        let focus_in_text_input = window()
            .and_then(|w| w.document())
            .and_then(|d| d.active_element())
            .map(|el| is_text_input_tag(&el.tag_name()))
            .unwrap_or(false);
        let input = KeyInput {
            key: event.key(),
            code: event.code(),
            focus_in_text_input,
        };

        let Ok(mut player) = controller.try_write() else {
            return;
        };
        let Some(handled) = player.on_key_shortcut(&input) else {
            return;
        };
        drop(player);
        if handled.shortcut.prevents_default() {
            event.prevent_default();
        }
        settle_detached(runtime.clone(), controller, handled.pending);
    }) as Box<dyn FnMut(KeyboardEvent)>);

    match document.add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref()) {
        Ok(()) => bindings.keydown = Some((document, key_cb)),
        Err(e) => {
            tracing::warn!(error = %describe(&e), "could not attach keyboard shortcuts");
        }
    }
}

/// Read each row's duration with a throwaway metadata-only audio element.
/// The element drops its source as soon as the duration is known.
#[cfg(target_arch = "wasm32")]
pub fn spawn_duration_probes(mut controller: Signal<WidgetController>, probes: Vec<ProbeRequest>) {
    let runtime = Runtime::current();

    for probe in probes {
        let audio = match HtmlAudioElement::new() {
            Ok(audio) => audio,
            Err(_) => {
                tracing::warn!(index = probe.index, "could not create duration probe");
                continue;
            }
        };
        audio.set_preload("metadata");

        let element = audio.clone();
        let runtime = runtime.clone();
        let index = probe.index;
        let on_metadata = Closure::once(move || {
            let _guard = RuntimeGuard::new(runtime);
            // The widget may have been unmounted while metadata loaded
            if let Ok(mut player) = controller.try_write() {
                player.on_duration_probed(index, element.duration());
            }
            element.set_onloadedmetadata(None);
            if let Err(e) = element.remove_attribute("src") {
                tracing::debug!(index, error = %describe(&e), "duration probe kept its source");
            }
            element.load();
        });
        audio.set_onloadedmetadata(Some(on_metadata.as_ref().unchecked_ref()));
        // Runs once, then the element lets go of it
        on_metadata.forget();

        audio.set_src(&probe.source);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_duration_probes(_controller: Signal<WidgetController>, probes: Vec<ProbeRequest>) {
    tracing::debug!(count = probes.len(), "duration probes need a browser; rows keep placeholders");
}
