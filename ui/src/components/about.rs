use dioxus::prelude::*;

use crate::components::context::use_page;
use crate::core::effects::SkillHover;
use crate::core::visibility::REVEAL_CLASS;
use crate::views::page::{SKILLS, TIMELINE};

const CONTENT_ID: &str = "about-content";

#[component]
pub fn About() -> Element {
    let page = use_page();
    let bindings = page.bindings.read();
    let revealed = if page.revealed.read().has_fired(CONTENT_ID) {
        REVEAL_CLASS
    } else {
        ""
    };

    rsx! {
        section { id: "about", class: "about",
            div { class: "container",
                h2 { class: "section-title", "data-i18n": "about-title",
                    {bindings.text("about-title").to_string()}
                }
                div { id: CONTENT_ID, class: "about-content {revealed}",
                    div { class: "about-text",
                        p { "data-i18n": "about-desc", {bindings.text("about-desc").to_string()} }

                        h3 { "data-i18n": "skills-title", {bindings.text("skills-title").to_string()} }
                        ul { class: "skills-list",
                            for skill in SKILLS {
                                SkillItem { key: "{skill}", name: *skill }
                            }
                        }

                        h3 { "data-i18n": "timeline-title", {bindings.text("timeline-title").to_string()} }
                        ul { class: "timeline",
                            for entry in TIMELINE {
                                li {
                                    key: "{entry}",
                                    class: "timeline-item",
                                    "data-i18n": *entry,
                                    dangerous_inner_html: "{bindings.text(entry)}",
                                }
                            }
                        }

                        div { class: "achievement",
                            h3 { "data-i18n": "achievement-title",
                                {bindings.text("achievement-title").to_string()}
                            }
                            span { class: "badge", "data-i18n": "achievement-badge",
                                {bindings.text("achievement-badge").to_string()}
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Skills list entry with its own hover state.
#[component]
fn SkillItem(name: &'static str) -> Element {
    let mut hover = use_signal(SkillHover::default);
    let style = hover.read().inline();

    rsx! {
        li {
            style: "{style}",
            onmouseenter: move |_| hover.write().enter(),
            onmouseleave: move |_| hover.write().leave(),
            "{name}"
        }
    }
}
