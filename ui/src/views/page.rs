//! Fixed page structure: localized bindings, navigation targets, skills and
//! portfolio entries.

use crate::core::bindings::Binding;
use crate::core::validation::Field;
use crate::core::visibility::LazyImage;

/// Every localized element on the page, in document order.
pub const PAGE_BINDINGS: &[Binding] = &[
    Binding::text("nav-home", "nav-home"),
    Binding::text("nav-about", "nav-about"),
    Binding::text("nav-portfolio", "nav-portfolio"),
    Binding::text("nav-contact", "nav-contact"),
    Binding::text("hero-title", "hero-title"),
    Binding::text("hero-subtitle", "hero-subtitle"),
    Binding::text("cta-button", "cta-button"),
    Binding::text("about-title", "about-title"),
    Binding::text("about-desc", "about-desc"),
    Binding::text("skills-title", "skills-title"),
    Binding::text("timeline-title", "timeline-title"),
    Binding::text("timeline-1", "timeline-1"),
    Binding::text("timeline-2", "timeline-2"),
    Binding::text("timeline-3", "timeline-3"),
    Binding::text("timeline-4", "timeline-4"),
    Binding::text("achievement-title", "achievement-title"),
    Binding::text("achievement-badge", "achievement-badge"),
    Binding::text("portfolio-title", "portfolio-title"),
    Binding::text("project1-title", "project1-title"),
    Binding::text("project1-desc", "project1-desc"),
    Binding::text("project2-title", "project2-title"),
    Binding::text("project2-desc", "project2-desc"),
    Binding::text("project3-title", "project3-title"),
    Binding::text("project3-desc", "project3-desc"),
    Binding::text("contact-title", "contact-title"),
    Binding::text("contact-info-title", "contact-info-title"),
    Binding::text("contact-email-label", "contact-email-label"),
    Binding::text("contact-location-label", "contact-location-label"),
    Binding::text("contact-location", "contact-location"),
    Binding::text("form-name-label", "form-name-label"),
    Binding::placeholder("contact-name", "form-name-placeholder"),
    Binding::text("form-email-label", "form-email-label"),
    Binding::placeholder("contact-email", "form-email-placeholder"),
    Binding::text("form-message-label", "form-message-label"),
    Binding::placeholder("contact-message", "form-message-placeholder"),
    Binding::text("form-submit", "form-submit"),
    Binding::text("footer-rights", "footer-rights"),
];

pub struct NavLink {
    /// Element id of the link (also its binding id).
    pub id: &'static str,
    /// Section the link scrolls to.
    pub target: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        id: "nav-home",
        target: "home",
    },
    NavLink {
        id: "nav-about",
        target: "about",
    },
    NavLink {
        id: "nav-portfolio",
        target: "portfolio",
    },
    NavLink {
        id: "nav-contact",
        target: "contact",
    },
];

pub const SKILLS: &[&str] = &[
    "Figma",
    "Sketch",
    "Adobe XD",
    "Photoshop",
    "Illustrator",
    "HTML / CSS",
];

pub const TIMELINE: &[&str] = &["timeline-1", "timeline-2", "timeline-3", "timeline-4"];

pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub image: LazyImage,
}

const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 4 3'%3E%3Crect width='4' height='3' fill='%23e1e8ed'/%3E%3C/svg%3E";

pub const PROJECTS: &[Project] = &[
    Project {
        id: "project-1",
        title: "project1-title",
        description: "project1-desc",
        tags: &["React", "TypeScript", "CSS3"],
        image: LazyImage {
            id: "project-1-image",
            src: PLACEHOLDER_IMAGE,
            data_src: Some("images/project-1.jpg"),
        },
    },
    Project {
        id: "project-2",
        title: "project2-title",
        description: "project2-desc",
        tags: &["Vue.js", "Node.js", "MongoDB"],
        image: LazyImage {
            id: "project-2-image",
            src: PLACEHOLDER_IMAGE,
            data_src: Some("images/project-2.jpg"),
        },
    },
    Project {
        id: "project-3",
        title: "project3-title",
        description: "project3-desc",
        tags: &["JavaScript", "Weather API", "PWA"],
        image: LazyImage {
            id: "project-3-image",
            src: PLACEHOLDER_IMAGE,
            data_src: Some("images/project-3.jpg"),
        },
    },
];

/// Form field → (label binding id, control id / placeholder binding id).
pub fn field_ids(field: Field) -> (&'static str, &'static str) {
    match field {
        Field::Name => ("form-name-label", "contact-name"),
        Field::Email => ("form-email-label", "contact-email"),
        Field::Message => ("form-message-label", "contact-message"),
    }
}
