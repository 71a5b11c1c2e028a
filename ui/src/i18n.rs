//! Internationalization (i18n) support for `folio-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (asset loading into a `FluentLanguageLoader`)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/folio-ui.ftl   (reference set checked by `fl!`)
//!   zh-CN/folio-ui.ftl   (authored page language)
//! ```
//!
//! The site ships exactly two locales and switches between them at runtime.
//! Unlike a classic fallback chain, every locale gets its *own* loader whose
//! fallback is itself, so a key missing from one locale is reported as
//! missing instead of silently resolving to the other language. The binding
//! registry relies on that to leave content untouched for missing keys.
//!
//! Usage:
//! ```ignore
//! use ui::i18n::Locale;
//! let label = ui::t!(Locale::En, "nav-home");
//! ```
use std::fmt;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use tracing::warn;
use unic_langid::LanguageIdentifier;

use crate::core::bindings::Dictionary;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!(Locale::Zh, "nav-home")
///     t!(registry.active(), "form-submit")
///
/// Expands to `fl!` against the loader of the given locale, so message IDs
/// are checked at compile time against the reference (en-US) file.
#[macro_export]
macro_rules! t {
    ($locale:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::catalog().loader($locale), $key)
    };
}

/// Fluent "domain" (matches the crate / the FTL filename in every locale).
const DOMAIN: &str = "folio-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// The two locales the site is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Authored page language.
    #[default]
    Zh,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Zh, Locale::En];

    /// Short tag used by the selector controls (`zh` / `en`).
    pub fn tag(self) -> &'static str {
        match self {
            Locale::Zh => "zh",
            Locale::En => "en",
        }
    }

    /// Folder name of the embedded Fluent resources.
    pub fn folder(self) -> &'static str {
        match self {
            Locale::Zh => "zh-CN",
            Locale::En => "en-US",
        }
    }

    /// Id of the selector control that activates this locale.
    pub fn selector_id(self) -> &'static str {
        match self {
            Locale::Zh => "lang-zh",
            Locale::En => "lang-en",
        }
    }

    /// Short label rendered on the selector control.
    pub fn selector_label(self) -> &'static str {
        match self {
            Locale::Zh => "中文",
            Locale::En => "EN",
        }
    }

    pub fn langid(self) -> LanguageIdentifier {
        self.folder()
            .parse()
            .expect("locale folder names are valid language identifiers")
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One isolated loader per locale.
pub struct Catalog {
    zh: FluentLanguageLoader,
    en: FluentLanguageLoader,
}

impl Catalog {
    fn load() -> Self {
        Self {
            zh: load_locale(Locale::Zh),
            en: load_locale(Locale::En),
        }
    }

    pub fn loader(&self, locale: Locale) -> &FluentLanguageLoader {
        match locale {
            Locale::Zh => &self.zh,
            Locale::En => &self.en,
        }
    }
}

impl Dictionary for Catalog {
    fn lookup(&self, locale: Locale, key: &str) -> Option<String> {
        let loader = self.loader(locale);
        loader.has(key).then(|| loader.get(key))
    }
}

static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::load);

/// Global, immutable locale dictionary.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

fn load_locale(locale: Locale) -> FluentLanguageLoader {
    let lang = locale.langid();
    let loader = FluentLanguageLoader::new(DOMAIN, lang.clone());
    if let Err(err) = i18n_embed::select(&loader, &Localizations, &[lang]) {
        warn!(%locale, "failed loading locale resources ({err}); lookups will miss");
    }
    loader
}

/// Lookup for keys only known at runtime (validation messages, tooltips).
/// Falls back to the key itself so a gap is visible rather than blank.
pub fn message(locale: Locale, key: &str) -> String {
    catalog()
        .lookup(locale, key)
        .unwrap_or_else(|| key.to_string())
}

/// List available (embedded) locale folders.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}
