use dioxus::prelude::*;

use crate::components::context::use_page;
use crate::core::visibility::{self, REVEAL_CLASS};
use crate::views::page::PROJECTS;

#[component]
pub fn Portfolio() -> Element {
    let page = use_page();
    let bindings = page.bindings.read();

    rsx! {
        section { id: "portfolio", class: "portfolio",
            div { class: "container",
                h2 { class: "section-title", "data-i18n": "portfolio-title",
                    {bindings.text("portfolio-title").to_string()}
                }
                div { class: "portfolio-grid",
                    for index in 0..PROJECTS.len() {
                        PortfolioItem { key: "{index}", index }
                    }
                }
            }
        }
    }
}

/// One project card. Reveals with a stagger by position; its image loads lazily.
#[component]
fn PortfolioItem(index: usize) -> Element {
    let page = use_page();
    let project = &PROJECTS[index];
    let bindings = page.bindings.read();

    let (class, style) = if page.revealed.read().has_fired(project.id) {
        (
            format!("portfolio-item {REVEAL_CLASS}"),
            visibility::stagger_style(index),
        )
    } else {
        ("portfolio-item".to_string(), String::new())
    };
    let image = project.image;
    let loaded = page.loaded_images.read().has_fired(image.id);

    rsx! {
        div { id: project.id, class: "{class}", style: "{style}",
            div { class: "portfolio-image",
                img {
                    id: image.id,
                    class: "{image.class(loaded)}",
                    "loading": "lazy",
                    src: image.current_src(loaded),
                    "data-src": image.data_src.unwrap_or_default(),
                    alt: "{bindings.text(project.title)}",
                }
            }
            div { class: "portfolio-content",
                h3 { "data-i18n": project.title, {bindings.text(project.title).to_string()} }
                p { "data-i18n": project.description, {bindings.text(project.description).to_string()} }
                div { class: "portfolio-tags",
                    for tag in project.tags {
                        span { key: "{tag}", class: "tag", "{tag}" }
                    }
                }
            }
        }
    }
}
