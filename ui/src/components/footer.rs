use dioxus::prelude::*;

use crate::components::context::use_page;

#[component]
pub fn Footer() -> Element {
    let page = use_page();
    let bindings = page.bindings.read();

    rsx! {
        footer { class: "footer",
            div { class: "container",
                p { "data-i18n": "footer-rights", {bindings.text("footer-rights").to_string()} }
            }
        }
    }
}
