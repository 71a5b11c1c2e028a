use dioxus::prelude::*;
use tracing::info;

use crate::components::context::use_page;
use crate::core::nav::NavbarStyle;
use crate::i18n::{self, Locale};
use crate::t;
use crate::views::page::NAV_LINKS;

/// Fixed site navbar: brand, mobile toggle, section links, locale and theme switches.
///
/// The background is restyled from the throttled scroll offset; link clicks
/// close the mobile menu and smooth-scroll to their section.
#[component]
pub fn SiteNavbar() -> Element {
    let page = use_page();
    let mut menu = page.menu;
    let mut theme = page.theme;

    let bindings = page.bindings.read();
    let locale = bindings.active();
    let menu_state = *menu.read();
    let style = NavbarStyle::for_offset(*page.scroll_y.read());
    let mode = theme.read().applied();
    let tooltip = i18n::message(locale, mode.tooltip_key());
    let toggle_label = t!(locale, "nav-toggle-label");

    rsx! {
        nav { class: "navbar", style: "{style.inline()}",
            div { class: "nav-container",
                a { class: "nav-logo", href: "#home", "Portfolio" }

                ul {
                    class: "nav-menu {menu_state.active_class()}",
                    style: "{menu_state.menu_style()}",
                    for link in NAV_LINKS {
                        li { class: "nav-item",
                            a {
                                id: link.id,
                                class: "nav-link",
                                href: "#{link.target}",
                                "data-i18n": link.id,
                                onclick: move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    menu.write().close();
                                    page.scroll_to_element(link.target.to_string());
                                },
                                {bindings.text(link.id).to_string()}
                            }
                        }
                    }
                }

                div { class: "nav-actions",
                    div { class: "lang-switch",
                        for option in Locale::ALL {
                            button {
                                r#type: "button",
                                id: option.selector_id(),
                                class: "lang-btn {bindings.selector_class(option)}",
                                onclick: move |_| page.set_language(option),
                                "{option.selector_label()}"
                            }
                        }
                    }
                    button {
                        r#type: "button",
                        id: "theme-toggle",
                        class: "theme-toggle",
                        title: "{tooltip}",
                        onclick: move |_| {
                            let next = theme.write().toggle();
                            info!(mode = next.as_str(), "theme toggled");
                        },
                        "{mode.glyph()}"
                    }
                    button {
                        r#type: "button",
                        class: "nav-toggle {menu_state.active_class()}",
                        aria_label: "{toggle_label}",
                        onclick: move |_| menu.write().toggle(),
                        span { class: "bar" }
                        span { class: "bar" }
                        span { class: "bar" }
                    }
                }
            }
        }
    }
}
