pub mod auth;
pub mod browser;
pub mod feature_card;
pub mod footer;
pub mod icon;
pub mod navbar;
pub mod pages;
pub mod visibility;

pub use feature_card::FeatureCard;
pub use footer::Footer;
pub use icon::{Icon, icons};
pub use navbar::Navbar;
