//! One-shot visibility reactions: entrance reveals and deferred images.

use std::collections::HashSet;

/// Fraction of an element that must be visible to count as revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Shrinks the viewport's bottom edge so reveals start slightly before it.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
/// Elements that animate in.
pub const REVEAL_SELECTOR: &str = ".portfolio-item, .about-content, .contact-content";
/// Class gained on reveal.
pub const REVEAL_CLASS: &str = "animate-in";
/// Delay added per position within the portfolio grid, in seconds.
pub const STAGGER_STEP_SECS: f64 = 0.2;

/// Images whose source is deferred until they intersect.
pub const LAZY_SELECTOR: &str = "img[loading=\"lazy\"]";
pub const LAZY_CLASS: &str = "lazy";

/// Remembers which ids have fired. Each id fires at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OneShot {
    fired: HashSet<String>,
}

impl OneShot {
    /// Returns true only the first time `id` is seen.
    pub fn fire(&mut self, id: &str) -> bool {
        if self.fired.contains(id) {
            return false;
        }
        self.fired.insert(id.to_string())
    }

    pub fn has_fired(&self, id: &str) -> bool {
        self.fired.contains(id)
    }

    pub fn len(&self) -> usize {
        self.fired.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fired.is_empty()
    }
}

/// `animation-delay` for the item at `index` within its parent.
pub fn stagger_delay(index: usize) -> f64 {
    index as f64 * STAGGER_STEP_SECS
}

pub fn stagger_style(index: usize) -> String {
    // Rounded to keep 0.6000000000000001 out of the markup.
    let delay = (stagger_delay(index) * 1000.0).round() / 1000.0;
    format!("animation-delay: {delay}s;")
}

/// A deferred image: the placeholder `src` until loaded, then `data-src`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LazyImage {
    pub id: &'static str,
    pub src: &'static str,
    pub data_src: Option<&'static str>,
}

impl LazyImage {
    pub fn current_src(&self, loaded: bool) -> &'static str {
        if loaded {
            self.data_src.unwrap_or(self.src)
        } else {
            self.src
        }
    }

    pub fn class(&self, loaded: bool) -> &'static str {
        if loaded {
            ""
        } else {
            LAZY_CLASS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_id() {
        let mut seen = OneShot::default();
        assert!(seen.fire("about"));
        assert!(!seen.fire("about"));
        assert!(seen.fire("contact"));
        assert_eq!(seen.len(), 2);
        assert!(seen.has_fired("about"));
        assert!(!seen.has_fired("portfolio-1"));
    }

    #[test]
    fn stagger_cascades_by_index() {
        assert_eq!(stagger_delay(0), 0.0);
        assert!((stagger_delay(2) - 0.4).abs() < 1e-9);
        assert_eq!(stagger_style(3), "animation-delay: 0.6s;");
    }

    #[test]
    fn lazy_image_swaps_source_once_loaded() {
        let image = LazyImage {
            id: "shot",
            src: "placeholder.svg",
            data_src: Some("real.jpg"),
        };
        assert_eq!(image.current_src(false), "placeholder.svg");
        assert_eq!(image.class(false), LAZY_CLASS);
        assert_eq!(image.current_src(true), "real.jpg");
        assert_eq!(image.class(true), "");
    }

    #[test]
    fn lazy_image_without_staging_value_keeps_source() {
        let image = LazyImage {
            id: "plain",
            src: "plain.jpg",
            data_src: None,
        };
        assert_eq!(image.current_src(true), "plain.jpg");
    }
}
