//! Login page component
//!
//! Standalone page hosting the login form under its own header.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::core::LoginCredentials;
use crate::ui::auth::{LoginForm, navigate_to_signup};

/// Header links on the login page; they are placeholders
const LOGIN_NAV_LINKS: [&str; 4] = ["Home", "Issues", "Services", "About"];

/// Login page component
///
/// Both callbacks are optional. Without them the page acknowledges the
/// action in-page.
#[component]
pub fn LoginPage(
    #[prop(default = None)] on_login: Option<Callback<LoginCredentials>>,
    #[prop(default = None)] on_navigate_to_signup: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <Title text="Log in - CityConnect" />

        <div class="login-container">
            <nav class="login-nav">
                <div class="nav-brand">
                    <div class="brand-icon">"🏢"</div>
                    <span class="brand-name">"CityConnect"</span>
                </div>
                <div class="nav-menu">
                    {LOGIN_NAV_LINKS
                        .iter()
                        .map(|&label| view! { <a href="#" class="nav-link">{label}</a> })
                        .collect_view()}
                    <button
                        class="signup-btn"
                        on:click=move |_| navigate_to_signup(on_navigate_to_signup)
                    >
                        "Sign Up"
                    </button>
                </div>
            </nav>

            <div class="login-content">
                <div class="login-form-container">
                    <div class="login-header">
                        <h1 class="login-title">"Welcome Back"</h1>
                        <p class="login-subtitle">"Log in to your CityConnect account."</p>
                    </div>

                    <LoginForm on_login=on_login on_navigate_to_signup=on_navigate_to_signup />
                </div>
            </div>
        </div>
    }
}
