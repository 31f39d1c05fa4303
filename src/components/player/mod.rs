use crate::catalog::Catalog;
use crate::components::audio_manager::{
    bind_widget, create_engine, settle_in_background, spawn_duration_probes, WidgetBindings,
    WidgetController,
};
use crate::components::Playlist;
use crate::db::PlatformPreferences;
use crate::player::{PlayerConfig, PlayerController, PlayerIntent, SurfaceState};
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

mod controls;

use controls::{AutoplayToggle, NextButton, PlayPauseButton, PrevButton, VolumeSlider};

/// Dispatch an intent from a widget event handler and settle any play request
/// it raised.
pub fn send_intent(mut controller: Signal<WidgetController>, intent: PlayerIntent) {
    let pending = controller.write().dispatch(intent);
    settle_in_background(controller, pending);
}

/// Self-contained player bound to its own audio element. Several can be
/// mounted on one page.
#[component]
pub fn MusicPlayer(catalog: Catalog, #[props(default)] config: PlayerConfig) -> Element {
    let controller = use_hook(move || {
        create_engine()
            .map(|engine| {
                Signal::new(PlayerController::new(
                    catalog,
                    engine,
                    SurfaceState::default(),
                    PlatformPreferences::default(),
                    config,
                ))
            })
            .map_err(|err| {
                tracing::warn!(%err, "player unavailable");
                err.to_string()
            })
    });

    match controller {
        Ok(controller) => rsx! {
            PlayerWidget { controller }
        },
        Err(message) => rsx! {
            div { class: "player-error", "Player unavailable: {message}" }
        },
    }
}

#[component]
fn PlayerWidget(mut controller: Signal<WidgetController>) -> Element {
    let bindings = use_hook(|| Rc::new(RefCell::new(None::<WidgetBindings>)));

    // One-time wiring once the widget is mounted
    let mounted = bindings.clone();
    use_effect(move || {
        let probes = controller.write().start();
        spawn_duration_probes(controller, probes);
        *mounted.borrow_mut() = Some(bind_widget(controller));
    });

    // Detach listeners and stop the off-page element before the controller goes away
    use_drop(move || {
        bindings.borrow_mut().take();
        if let Ok(mut player) = controller.try_write() {
            player.release();
        }
    });

    let state = controller.read().surface().clone();

    let on_seek_input = move |e: Event<FormData>| {
        if let Ok(seconds) = e.value().parse::<f64>() {
            send_intent(controller, PlayerIntent::SeekInput(seconds));
        }
    };

    let on_seek_commit = move |e: Event<FormData>| {
        if let Ok(seconds) = e.value().parse::<f64>() {
            send_intent(controller, PlayerIntent::SeekCommit(seconds));
        }
    };

    rsx! {
        section { class: "player",
            div { class: "now-playing",
                img {
                    id: "cover",
                    class: "cover",
                    src: "{state.cover_image}",
                    alt: "Cover",
                }
                div { class: "track-info",
                    h2 { id: "title", class: "title", "{state.title}" }
                    p { id: "artist", class: "artist", "{state.artist}" }
                }
            }

            div { class: "progress",
                span { id: "currentTime", class: "time", "{state.elapsed_label}" }
                input {
                    id: "progress",
                    r#type: "range",
                    min: "0",
                    max: "{state.seek_max}",
                    step: "0.1",
                    value: "{state.seek_value}",
                    oninput: on_seek_input,
                    onchange: on_seek_commit,
                }
                span { id: "totalDuration", class: "time", "{state.total_label}" }
            }

            div { class: "controls",
                PrevButton { controller }
                PlayPauseButton { controller, affordance: state.affordance }
                NextButton { controller }
            }

            div { class: "options",
                VolumeSlider { controller, volume: state.volume }
                AutoplayToggle { controller, checked: state.autoplay_checked }
            }

            Playlist {
                controller,
                rows: state.rows.clone(),
                active_row: state.active_row,
            }
        }
    }
}
