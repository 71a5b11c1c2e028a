//! Platform-agnostic behavior engines plus the thin platform glue they need.

pub mod animation;
pub mod bindings;
pub mod bridge;
pub mod effects;
pub mod form;
pub mod nav;
pub mod platform;
pub mod scroll;
pub mod storage;
pub mod theme;
pub mod timing;
pub mod toast;
pub mod validation;
pub mod visibility;
