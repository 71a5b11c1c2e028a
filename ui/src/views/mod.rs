mod home;
pub mod page;

pub use home::Home;
