//! Login form component
//!
//! Email/password form backed by [`LoginFormState`]. Submission goes through a
//! simulated authentication call; the pending call is cancelled if the form is
//! unmounted before it resolves.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::login::{FORGOT_PASSWORD_ACK, LOGIN_SUCCESS_ACK, SIGNUP_ACK};
use crate::core::{
    LoginCredentials, LoginError, LoginField, LoginFormState, PendingLogin,
    SimulatedAuthenticator, SubmitAttempt, SubmitOutcome, start_login,
};
use crate::ui::browser::acknowledge;

/// Run the sign-up callback, or acknowledge in-page when there is none
pub fn navigate_to_signup(on_navigate_to_signup: Option<Callback<()>>) {
    match on_navigate_to_signup {
        Some(callback) => callback.run(()),
        None => acknowledge(SIGNUP_ACK),
    }
}

/// Login form component
#[component]
pub fn LoginForm(
    /// Called with the submitted credentials after a successful login
    #[prop(default = None)]
    on_login: Option<Callback<LoginCredentials>>,
    /// Called when the user asks to sign up instead
    #[prop(default = None)]
    on_navigate_to_signup: Option<Callback<()>>,
) -> impl IntoView {
    let form = RwSignal::new(LoginFormState::default());
    let pending = StoredValue::new(None::<PendingLogin>);

    on_cleanup(move || {
        let _ = pending.try_update_value(|pending| pending.take().map(PendingLogin::cancel));
    });

    let is_loading = Memo::new(move |_| form.with(LoginFormState::is_loading));
    let email_error = Memo::new(move |_| {
        form.with(|f| f.error(LoginField::Email).map(str::to_string))
    });
    let password_error = Memo::new(move |_| {
        form.with(|f| f.error(LoginField::Password).map(str::to_string))
    });
    let submit_error = Memo::new(move |_| {
        form.with(|f| f.error(LoginField::Submit).map(str::to_string))
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(SubmitAttempt::Accepted(credentials)) = form.try_update(LoginFormState::begin_submit)
        else {
            return;
        };

        leptos::logging::log!("Login attempt: {}", credentials.email);

        let (task, handle) = start_login(SimulatedAuthenticator::default(), credentials);
        pending.set_value(Some(handle));

        spawn_local(async move {
            let result = task.await;
            if result == Err(LoginError::Cancelled) {
                return;
            }

            // Form may be gone by now
            let Some(outcome) = form.try_update(|f| f.complete(result)) else {
                return;
            };
            let _ = pending.try_set_value(None);

            match outcome {
                SubmitOutcome::Succeeded(credentials) => match on_login {
                    Some(callback) => callback.run(credentials),
                    None => acknowledge(LOGIN_SUCCESS_ACK),
                },
                SubmitOutcome::Failed => {
                    leptos::logging::warn!("Login failed");
                }
                SubmitOutcome::Cancelled => {}
            }
        });
    };

    view! {
        <form class="login-form" on:submit=on_submit>
            // Email field
            <div class="form-group">
                <label for="email" class="form-label">"Email"</label>
                <input
                    type="email"
                    id="email"
                    name="email"
                    class="form-input"
                    class:error=move || email_error.get().is_some()
                    placeholder="you@example.com"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| {
                        form.update(|f| f.edit(LoginField::Email, event_target_value(&ev)));
                    }
                    disabled=move || is_loading.get()
                />
                {move || {
                    email_error.get().map(|error| {
                        view! { <span class="error-message">{error}</span> }
                    })
                }}
            </div>

            // Password field
            <div class="form-group">
                <div class="password-label-row">
                    <label for="password" class="form-label">"Password"</label>
                    <button
                        type="button"
                        class="forgot-password-link"
                        on:click=move |_| acknowledge(FORGOT_PASSWORD_ACK)
                    >
                        "Forgot Password?"
                    </button>
                </div>
                <input
                    type="password"
                    id="password"
                    name="password"
                    class="form-input"
                    class:error=move || password_error.get().is_some()
                    placeholder="••••••"
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| {
                        form.update(|f| f.edit(LoginField::Password, event_target_value(&ev)));
                    }
                    disabled=move || is_loading.get()
                />
                {move || {
                    password_error.get().map(|error| {
                        view! { <span class="error-message">{error}</span> }
                    })
                }}
            </div>

            {move || {
                submit_error.get().map(|error| {
                    view! { <div class="submit-error">{error}</div> }
                })
            }}

            <button
                type="submit"
                class="login-button"
                class:loading=move || is_loading.get()
                disabled=move || is_loading.get()
            >
                {move || if is_loading.get() { "Logging in..." } else { "Login" }}
            </button>

            <div class="signup-prompt">
                <span>"Don't have an account? "</span>
                <button
                    type="button"
                    class="signup-link"
                    on:click=move |_| navigate_to_signup(on_navigate_to_signup)
                >
                    "Sign Up"
                </button>
            </div>
        </form>
    }
}
