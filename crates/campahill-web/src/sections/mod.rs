//! Page Sections
//!
//! Each content section renders inside a container whose id is its
//! [`campahill_core::SectionId`] string, which is how the navigator finds it.

mod about;
mod contact;
mod hero;
mod nav;
mod products;

pub use about::About;
pub use contact::Contact;
pub use hero::Hero;
pub use nav::NavBar;
pub use products::Products;
