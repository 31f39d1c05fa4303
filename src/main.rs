use melodeck::components::App;

fn main() {
    dioxus::launch(App);
}
