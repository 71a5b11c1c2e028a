//! Locale binding registry.
//!
//! Every localized element on the page is declared once as a [`Binding`]
//! (element id, dictionary key, binding kind). The registry is built from
//! that table at page construction and keeps the value each element is
//! currently displaying; switching language walks the registry instead of
//! querying the DOM.
//!
//! Rules:
//! - a text binding on a form control is never rewritten (controls keep
//!   whatever the user typed);
//! - a key missing from the target locale leaves the current value untouched;
//! - exactly one locale is active at a time.

use tracing::debug;

use crate::i18n::Locale;

/// Source of localized strings.
pub trait Dictionary {
    fn lookup(&self, locale: Locale, key: &str) -> Option<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingKind {
    /// Replaces the element's content (may contain simple markup).
    Text,
    /// Replaces the element's `placeholder` attribute.
    Placeholder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Content,
    /// `input` / `textarea`: text bindings are skipped.
    FormControl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub element: &'static str,
    pub key: &'static str,
    pub kind: BindingKind,
    pub element_kind: ElementKind,
}

impl Binding {
    pub const fn text(element: &'static str, key: &'static str) -> Self {
        Self {
            element,
            key,
            kind: BindingKind::Text,
            element_kind: ElementKind::Content,
        }
    }

    pub const fn placeholder(element: &'static str, key: &'static str) -> Self {
        Self {
            element,
            key,
            kind: BindingKind::Placeholder,
            element_kind: ElementKind::FormControl,
        }
    }

    /// Text binding declared on a form control (kept for markup parity, never applied).
    pub const fn control_text(element: &'static str, key: &'static str) -> Self {
        Self {
            element,
            key,
            kind: BindingKind::Text,
            element_kind: ElementKind::FormControl,
        }
    }

    fn applies(&self) -> bool {
        !(self.kind == BindingKind::Text && self.element_kind == ElementKind::FormControl)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct BoundValue {
    binding: Binding,
    value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BindingRegistry {
    entries: Vec<BoundValue>,
    active: Locale,
}

impl BindingRegistry {
    /// Build the registry with the content the page is authored in.
    pub fn build(bindings: &[Binding], authored: Locale, dict: &impl Dictionary) -> Self {
        let entries = bindings
            .iter()
            .map(|binding| BoundValue {
                binding: *binding,
                value: if binding.applies() {
                    dict.lookup(authored, binding.key).unwrap_or_default()
                } else {
                    String::new()
                },
            })
            .collect();
        Self {
            entries,
            active: authored,
        }
    }

    /// Rewrite every applicable binding from `locale`. Returns how many values changed.
    pub fn set_language(&mut self, locale: Locale, dict: &impl Dictionary) -> usize {
        let mut changed = 0;
        for entry in self.entries.iter_mut() {
            if !entry.binding.applies() {
                continue;
            }
            match dict.lookup(locale, entry.binding.key) {
                Some(value) => {
                    if entry.value != value {
                        entry.value = value;
                        changed += 1;
                    }
                }
                None => debug!(key = entry.binding.key, %locale, "missing key; content kept"),
            }
        }
        self.active = locale;
        changed
    }

    pub fn active(&self) -> Locale {
        self.active
    }

    /// `"active"` for the selector of the current locale, empty otherwise.
    pub fn selector_class(&self, locale: Locale) -> &'static str {
        if self.active == locale {
            "active"
        } else {
            ""
        }
    }

    /// Current content of a text-bound element (empty if unknown).
    pub fn text(&self, element: &str) -> &str {
        self.value(element, BindingKind::Text)
    }

    /// Current placeholder of a placeholder-bound element (empty if unknown).
    pub fn placeholder(&self, element: &str) -> &str {
        self.value(element, BindingKind::Placeholder)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn value(&self, element: &str, kind: BindingKind) -> &str {
        self.entries
            .iter()
            .find(|entry| entry.binding.element == element && entry.binding.kind == kind)
            .map(|entry| entry.value.as_str())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MapDictionary(HashMap<(Locale, &'static str), &'static str>);

    impl MapDictionary {
        fn new(entries: &[(Locale, &'static str, &'static str)]) -> Self {
            Self(
                entries
                    .iter()
                    .map(|(locale, key, value)| ((*locale, *key), *value))
                    .collect(),
            )
        }
    }

    impl Dictionary for MapDictionary {
        fn lookup(&self, locale: Locale, key: &str) -> Option<String> {
            self.0
                .iter()
                .find(|((l, k), _)| *l == locale && *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    const BINDINGS: &[Binding] = &[
        Binding::text("title", "hero-title"),
        Binding::text("only-zh", "zh-only"),
        Binding::placeholder("name-input", "name-placeholder"),
        Binding::control_text("message-input", "hero-title"),
    ];

    fn dictionary() -> MapDictionary {
        MapDictionary::new(&[
            (Locale::Zh, "hero-title", "欢迎"),
            (Locale::En, "hero-title", "Welcome"),
            (Locale::Zh, "zh-only", "仅中文"),
            (Locale::Zh, "name-placeholder", "姓名"),
            (Locale::En, "name-placeholder", "Name"),
        ])
    }

    #[test]
    fn build_uses_authored_locale() {
        let registry = BindingRegistry::build(BINDINGS, Locale::Zh, &dictionary());
        assert_eq!(registry.text("title"), "欢迎");
        assert_eq!(registry.placeholder("name-input"), "姓名");
        assert_eq!(registry.active(), Locale::Zh);
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn switch_rewrites_text_and_placeholders() {
        let dict = dictionary();
        let mut registry = BindingRegistry::build(BINDINGS, Locale::Zh, &dict);
        let changed = registry.set_language(Locale::En, &dict);
        assert_eq!(changed, 2);
        assert_eq!(registry.text("title"), "Welcome");
        assert_eq!(registry.placeholder("name-input"), "Name");
    }

    #[test]
    fn missing_key_leaves_content_untouched() {
        let dict = dictionary();
        let mut registry = BindingRegistry::build(BINDINGS, Locale::Zh, &dict);
        registry.set_language(Locale::En, &dict);
        assert_eq!(registry.text("only-zh"), "仅中文");
    }

    #[test]
    fn form_control_text_bindings_are_skipped() {
        let dict = dictionary();
        let mut registry = BindingRegistry::build(BINDINGS, Locale::Zh, &dict);
        registry.set_language(Locale::En, &dict);
        assert_eq!(registry.text("message-input"), "");
    }

    #[test]
    fn round_trip_restores_original_content() {
        let dict = dictionary();
        let original = BindingRegistry::build(BINDINGS, Locale::Zh, &dict);
        let mut registry = original.clone();
        registry.set_language(Locale::En, &dict);
        registry.set_language(Locale::Zh, &dict);
        assert_eq!(registry, original);
    }

    #[test]
    fn exactly_one_selector_is_active() {
        let dict = dictionary();
        let mut registry = BindingRegistry::build(BINDINGS, Locale::Zh, &dict);
        registry.set_language(Locale::En, &dict);
        let active: Vec<_> = Locale::ALL
            .into_iter()
            .filter(|l| registry.selector_class(*l) == "active")
            .collect();
        assert_eq!(active, vec![Locale::En]);
    }

    #[test]
    fn unknown_elements_read_as_empty() {
        let registry = BindingRegistry::build(BINDINGS, Locale::Zh, &dictionary());
        assert_eq!(registry.text("nope"), "");
        assert_eq!(registry.placeholder("title"), "");
    }
}
