use crate::catalog::Catalog;
use crate::components::MusicPlayer;
use dioxus::prelude::*;

const PLAYER_CSS: Asset = asset!("/assets/styling/player.css");

#[component]
pub fn App() -> Element {
    let catalog = use_hook(Catalog::embedded);

    rsx! {
        document::Title { "Melodeck" }
        document::Meta { name: "theme-color", content: "#a38449" }
        document::Stylesheet { href: PLAYER_CSS }

        main { class: "app-shell",
            MusicPlayer { catalog }
        }
    }
}
