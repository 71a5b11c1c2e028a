use dioxus::prelude::*;

use crate::components::context::use_page;

#[component]
pub fn Hero() -> Element {
    let page = use_page();
    let bindings = page.bindings.read();

    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero-content",
                h1 { class: "hero-title", "data-i18n": "hero-title",
                    {bindings.text("hero-title").to_string()}
                }
                p { class: "hero-subtitle", "data-i18n": "hero-subtitle",
                    {bindings.text("hero-subtitle").to_string()}
                }
                button {
                    r#type: "button",
                    class: "cta-button",
                    "data-i18n": "cta-button",
                    onclick: move |_| page.scroll_to_element("portfolio".to_string()),
                    {bindings.text("cta-button").to_string()}
                }
            }
        }
    }
}
