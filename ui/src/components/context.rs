use dioxus::prelude::*;
use tracing::{debug, info};

use crate::core::animation::{self, AnimationSlot, BackToTop, Frame, SmoothScroll};
use crate::core::bindings::BindingRegistry;
use crate::core::form::ContactForm;
use crate::core::nav::NavMenu;
use crate::core::theme::ThemeController;
use crate::core::toast::{self, ToastSeverity, ToastStack};
use crate::core::visibility::OneShot;
use crate::core::{bridge, platform, storage, timing};
use crate::i18n::{self, Locale};
use crate::views::page::PAGE_BINDINGS;

/// Page-wide state shared by every section. Signals are `Copy`, so the whole
/// bundle is passed around by value.
#[derive(Clone, Copy)]
pub struct PageContext {
    pub bindings: Signal<BindingRegistry>,
    pub theme: Signal<ThemeController>,
    pub menu: Signal<NavMenu>,
    pub scroll_y: Signal<f64>,
    pub revealed: Signal<OneShot>,
    pub loaded_images: Signal<OneShot>,
    pub toasts: Signal<ToastStack>,
    pub form: Signal<ContactForm>,
    pub animation: Signal<AnimationSlot>,
}

/// Build the page state and provide it to descendants.
pub fn use_page_provider() -> PageContext {
    let bindings = use_signal(|| {
        BindingRegistry::build(PAGE_BINDINGS, Locale::default(), i18n::catalog())
    });
    let theme = use_signal(|| {
        ThemeController::initialize(storage::default_store(), platform::prefers_dark)
    });
    let menu = use_signal(NavMenu::default);
    let scroll_y = use_signal(|| 0.0);
    let revealed = use_signal(OneShot::default);
    let loaded_images = use_signal(OneShot::default);
    let toasts = use_signal(ToastStack::default);
    let form = use_signal(ContactForm::default);
    let animation = use_signal(AnimationSlot::default);

    use_context_provider(|| PageContext {
        bindings,
        theme,
        menu,
        scroll_y,
        revealed,
        loaded_images,
        toasts,
        form,
        animation,
    })
}

pub fn use_page() -> PageContext {
    use_context::<PageContext>()
}

impl PageContext {
    pub fn locale(&self) -> Locale {
        self.bindings.read().active()
    }

    pub fn set_language(&self, locale: Locale) {
        let mut bindings = self.bindings;
        let changed = bindings.write().set_language(locale, i18n::catalog());
        bridge::set_document_lang(locale.tag());
        info!(%locale, changed, "language switched");
    }

    /// Show a toast and drive it through its lifecycle.
    pub fn notify(&self, message: String, severity: ToastSeverity) {
        let mut toasts = self.toasts;
        let id = toasts.write().show(message, severity, timing::now_ms());
        debug!(id, severity = severity.as_str(), "toast shown");
        spawn(async move {
            for step in toast::PHASE_STEPS_MS {
                timing::sleep_ms(step).await;
                toasts.write().refresh(timing::now_ms());
            }
            // The lifecycle is over even if the clock disagrees.
            toasts.write().dismiss(id);
        });
    }

    /// Cosine-eased scroll to the top; supersedes any running scroll animation.
    pub fn scroll_to_top(&self) {
        let mut slot = self.animation;
        let token = slot.write().begin();
        spawn(async move {
            let start = bridge::scroll_y().await.unwrap_or_default();
            let mut anim = BackToTop::new(start);
            loop {
                timing::sleep_ms(animation::BACK_TO_TOP_STEP_MS).await;
                if !slot.peek().is_current(token) {
                    debug!("back-to-top superseded");
                    break;
                }
                let observed = match bridge::scroll_y().await {
                    Ok(y) => y,
                    Err(err) => {
                        debug!("back-to-top aborted: {err}");
                        break;
                    }
                };
                match anim.tick(observed) {
                    Frame::Continue(y) => bridge::scroll_to(y),
                    Frame::Settle(y) => {
                        bridge::scroll_to(y);
                        break;
                    }
                    Frame::Stop => break,
                }
            }
        });
    }

    /// Quad-eased scroll to the element with `id` (minus the fixed header).
    /// Missing targets are ignored.
    pub fn scroll_to_element(&self, id: String) {
        let mut slot = self.animation;
        let token = slot.write().begin();
        spawn(async move {
            let Ok(Some(top)) = bridge::offset_top(&id).await else {
                debug!(%id, "smooth scroll target missing");
                return;
            };
            let start = bridge::scroll_y().await.unwrap_or_default();
            let mut anim = SmoothScroll::to_element(start, top);
            loop {
                if !slot.peek().is_current(token) {
                    debug!(%id, "smooth scroll superseded");
                    break;
                }
                match anim.tick(timing::now_ms()) {
                    Frame::Continue(y) => bridge::scroll_to(y),
                    Frame::Settle(y) => {
                        bridge::scroll_to(y);
                        break;
                    }
                    Frame::Stop => break,
                }
                timing::sleep_ms(animation::FRAME_MS).await;
            }
        });
    }
}
