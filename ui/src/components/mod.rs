//! Page sections. Every section reads the shared [`context::PageContext`].

pub mod context;

mod about;
mod back_to_top;
mod contact;
mod footer;
mod hero;
mod navbar;
mod portfolio;
mod toast;

pub use about::About;
pub use back_to_top::BackToTop;
pub use contact::Contact;
pub use context::{use_page, use_page_provider, PageContext};
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::SiteNavbar;
pub use portfolio::Portfolio;
pub use toast::ToastHost;
