use crate::components::audio_manager::WidgetController;
use crate::components::send_intent;
use crate::player::{PlayerIntent, PlaylistRow};
use dioxus::prelude::*;

/// Catalog listing; clicking a row plays it, or pauses it if it is the
/// track already playing.
#[component]
pub fn Playlist(
    controller: Signal<WidgetController>,
    rows: Vec<PlaylistRow>,
    active_row: Option<usize>,
) -> Element {
    rsx! {
        ul { id: "playlist", class: "playlist",
            {
                rows.into_iter()
                    .map(|row| {
                        let index = row.index;
                        rsx! {
                            PlaylistItem {
                                key: "{index}",
                                controller,
                                active: active_row == Some(index),
                                row,
                            }
                        }
                    })
            }
        }
    }
}

#[component]
fn PlaylistItem(controller: Signal<WidgetController>, row: PlaylistRow, active: bool) -> Element {
    let index = row.index;

    rsx! {
        li {
            class: if active { "playlist-item active" } else { "playlist-item" },
            "data-index": "{index}",
            onclick: move |_| send_intent(controller, PlayerIntent::SelectRow(index)),
            img {
                class: "thumb",
                src: "{row.cover_image}",
                alt: "Cover",
                loading: "lazy",
            }
            div {
                p { class: "item-title", "{row.title}" }
                p { class: "item-artist", "{row.artist}" }
            }
            div { id: "dur-{index}", class: "item-duration", "{row.duration_label}" }
        }
    }
}
