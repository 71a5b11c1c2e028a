use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{debug, error, info, warn};

use crate::components::{
    use_page_provider, About, BackToTop, Contact, Footer, Hero, PageContext, Portfolio,
    SiteNavbar, ToastHost,
};
use crate::core::bridge::{self, WindowListener};
use crate::core::platform::Platform;
use crate::core::scroll::{Offer, ScrollThrottle};
use crate::core::timing;
use crate::core::visibility::{
    LAZY_SELECTOR, REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD,
};
use crate::t;

/// The whole single-page site. Owns the page state and the window listeners.
#[component]
pub fn Home() -> Element {
    let page = use_page_provider();

    use_effect(move || {
        spawn(track_scroll(page));
        spawn(close_menu_on_escape(page));
        spawn(log_page_errors());
        spawn(reveal_sections(page));
        spawn(load_images(page));
        // Untracked: the effect must run once, not on every language switch.
        let locale = page.bindings.peek().active();
        bridge::set_document_lang(locale.tag());
        info!(%locale, platform = ?Platform::current(), "site initialized");
        info!("{}", t!(locale, "console-welcome"));
        info!("{}", t!(locale, "console-invite"));
    });

    let root_class = page.theme.read().applied().root_class();

    #[cfg(debug_assertions)]
    debug!(root_class, "home render");

    rsx! {
        div { class: "site-root {root_class}",
            SiteNavbar {}
            main {
                Hero {}
                About {}
                Portfolio {}
                Contact {}
            }
            Footer {}
            BackToTop {}
            ToastHost {}
        }
    }
}

async fn track_scroll(page: PageContext) {
    let mut scroll_y = page.scroll_y;
    let throttle = Rc::new(RefCell::new(ScrollThrottle::default()));
    let mut listener = WindowListener::scroll();
    while let Ok(y) = listener.next::<f64>().await {
        let offer = throttle.borrow_mut().offer(timing::now_ms(), y);
        match offer {
            Offer::Apply(y) => scroll_y.set(y),
            Offer::ScheduleFlush(delay) => {
                let throttle = Rc::clone(&throttle);
                spawn(async move {
                    timing::sleep_ms(delay).await;
                    let flushed = throttle.borrow_mut().flush(timing::now_ms());
                    if let Some(y) = flushed {
                        scroll_y.set(y);
                    }
                });
            }
            Offer::Held => {}
        }
    }
}

async fn close_menu_on_escape(page: PageContext) {
    let mut menu = page.menu;
    let mut listener = WindowListener::escape_key();
    while let Ok(key) = listener.next::<String>().await {
        if menu.write().handle_key(&key) {
            debug!("menu closed by keyboard");
        }
    }
}

async fn log_page_errors() {
    let mut listener = WindowListener::errors();
    while let Ok(message) = listener.next::<String>().await {
        error!(%message, "page error");
    }
}

async fn reveal_sections(page: PageContext) {
    let mut revealed = page.revealed;
    let mut listener =
        match WindowListener::visibility(REVEAL_SELECTOR, REVEAL_THRESHOLD, REVEAL_ROOT_MARGIN) {
            Ok(listener) => listener,
            Err(err) => {
                warn!("reveal observer unavailable: {err}");
                return;
            }
        };
    while let Ok(id) = listener.next::<String>().await {
        if revealed.write().fire(&id) {
            debug!(%id, "section revealed");
        }
    }
}

async fn load_images(page: PageContext) {
    let mut loaded = page.loaded_images;
    let mut listener = match WindowListener::visibility(LAZY_SELECTOR, 0.0, "0px") {
        Ok(listener) => listener,
        Err(err) => {
            warn!("lazy image observer unavailable: {err}");
            return;
        }
    };
    while let Ok(id) = listener.next::<String>().await {
        if loaded.write().fire(&id) {
            debug!(%id, "image loaded");
        }
    }
}
