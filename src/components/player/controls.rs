use crate::components::audio_manager::WidgetController;
use crate::components::{affordance_icon, send_intent, Icon};
use crate::player::{PlayAffordance, PlayerIntent};
use dioxus::prelude::*;

/// Play/Pause button
#[component]
pub(super) fn PlayPauseButton(
    controller: Signal<WidgetController>,
    affordance: PlayAffordance,
) -> Element {
    rsx! {
        button {
            id: "play-pause-btn",
            r#type: "button",
            class: "control control-primary",
            aria_label: affordance.label(),
            title: affordance.glyph(),
            onclick: move |_| send_intent(controller, PlayerIntent::TogglePlayback),
            Icon {
                name: affordance_icon(affordance).to_string(),
                class: "icon".to_string(),
            }
        }
    }
}

#[component]
pub(super) fn PrevButton(controller: Signal<WidgetController>) -> Element {
    rsx! {
        button {
            id: "prev-btn",
            r#type: "button",
            class: "control",
            aria_label: "Previous track",
            onclick: move |_| send_intent(controller, PlayerIntent::Previous),
            Icon { name: "prev".to_string(), class: "icon".to_string() }
        }
    }
}

#[component]
pub(super) fn NextButton(controller: Signal<WidgetController>) -> Element {
    rsx! {
        button {
            id: "next-btn",
            r#type: "button",
            class: "control",
            aria_label: "Next track",
            onclick: move |_| send_intent(controller, PlayerIntent::Next),
            Icon { name: "next".to_string(), class: "icon".to_string() }
        }
    }
}

/// Volume slider, 0.0 to 1.0
#[component]
pub(super) fn VolumeSlider(controller: Signal<WidgetController>, volume: f64) -> Element {
    let on_volume_change = move |e: Event<FormData>| {
        if let Ok(val) = e.value().parse::<f64>() {
            send_intent(controller, PlayerIntent::VolumeInput(val));
        }
    };

    rsx! {
        label { class: "volume",
            Icon { name: "volume".to_string(), class: "icon icon-small".to_string() }
            input {
                id: "volume",
                r#type: "range",
                min: "0",
                max: "1",
                step: "0.01",
                value: "{volume}",
                oninput: on_volume_change,
            }
        }
    }
}

/// Autoplay checkbox; every change is persisted by the controller.
#[component]
pub(super) fn AutoplayToggle(controller: Signal<WidgetController>, checked: bool) -> Element {
    rsx! {
        label { class: "autoplay",
            input {
                id: "autoplay-toggle",
                r#type: "checkbox",
                checked,
                onchange: move |e: Event<FormData>| {
                    send_intent(controller, PlayerIntent::SetAutoplay(e.checked()));
                },
            }
            span { "Autoplay next" }
        }
    }
}
