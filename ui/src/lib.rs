//! Shared UI crate for Folio. Page behavior engines and the Dioxus sections
//! that drive them live here; the launchers only add a stylesheet.

use dioxus::prelude::*;

pub mod components;
pub mod core;
pub mod i18n;
pub mod views;


/// Shared site theme (also embedded by the desktop launcher).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
