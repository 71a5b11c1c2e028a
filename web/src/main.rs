use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::views::Home;

fn main() {
    dioxus::logger::init(Level::INFO).expect("logger initialized once");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Home {}
    }
}
