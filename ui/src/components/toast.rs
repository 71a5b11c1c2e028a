use dioxus::prelude::*;

use crate::components::context::use_page;

/// Renders the live notifications. Each one slides in from the right edge.
#[component]
pub fn ToastHost() -> Element {
    let page = use_page();
    let toasts = page.toasts.read();

    rsx! {
        for toast in toasts.iter() {
            div {
                key: "{toast.id}",
                class: "{toast.class()}",
                role: "status",
                style: "{toast.style()}",
                "{toast.message}"
            }
        }
    }
}
