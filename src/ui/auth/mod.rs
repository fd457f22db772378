//! Authentication UI module

mod login_form;

pub use login_form::{LoginForm, navigate_to_signup};
