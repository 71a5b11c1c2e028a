use dioxus::prelude::*;

use crate::components::context::use_page;
use crate::core::scroll;
use crate::t;

/// Floating control that appears past the scroll threshold.
#[component]
pub fn BackToTop() -> Element {
    let page = use_page();
    let visible = scroll::back_to_top_visible(*page.scroll_y.read());
    let label = t!(page.locale(), "back-to-top-label");
    let class = if visible { "back-to-top show" } else { "back-to-top" };

    rsx! {
        button {
            r#type: "button",
            id: "backToTop",
            class: "{class}",
            aria_label: "{label}",
            title: "{label}",
            onclick: move |_| page.scroll_to_top(),
            "↑"
        }
    }
}
