//! Application pages
//!
//! - Landing page (home)
//! - Login page
//! - Not found page

mod landing;
mod login;
mod not_found;

pub use landing::LandingPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
