//! Login form validation and submission
//!
//! [`LoginFormState`] is the form's state machine:
//!
//! ```text
//! Idle --submit--> (validate) --errors--> Invalid
//!                      |
//!                      `--ok--> Submitting --Ok--> Idle (success callback)
//!                                    |
//!                                    `--Err--> Idle (submit error shown)
//! ```
//!
//! The remote call is simulated by [`SimulatedAuthenticator`]. [`start_login`]
//! wraps any [`Authenticator`] in an abortable task so a form that goes away
//! mid-submission can cancel it instead of writing into dead state.

use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::time::Duration;

use futures::future::{AbortHandle, Aborted, abortable};
use serde::{Deserialize, Serialize};

/// Minimum password length, counted in UTF-16 code units like the browser does
pub const MIN_PASSWORD_LEN: usize = 6;

/// Latency of the simulated authentication call
pub const SIMULATED_LOGIN_DELAY: Duration = Duration::from_millis(1000);

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const SUBMIT_FAILED: &str = "Login failed. Please try again.";

pub const LOGIN_SUCCESS_ACK: &str = "Login successful!";
pub const FORGOT_PASSWORD_ACK: &str = "Forgot password functionality would be implemented here";
pub const SIGNUP_ACK: &str = "Sign up functionality would be implemented here";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Login failed. Please try again.")]
    SubmissionFailed,
    #[error("login was cancelled before it completed")]
    Cancelled,
}

/// Form field an error message is attached to
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LoginField {
    Email,
    Password,
    /// Form-level submission error
    Submit,
}

/// Field → message mapping
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<LoginField, String>);

impl FormErrors {
    pub fn get(&self, field: LoginField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: LoginField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn clear_field(&mut self, field: LoginField) {
        self.0.remove(&field);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LoginField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Loose `local@domain.tld` check: some non-space text, `@`, non-space text,
/// `.`, non-space text, anywhere in the input.
pub fn looks_like_email(value: &str) -> bool {
    let chars: Vec<char> = value.chars().collect();

    for (at, &c) in chars.iter().enumerate() {
        if c != '@' || at == 0 || chars[at - 1].is_whitespace() {
            continue;
        }

        // Walk the contiguous non-space run after '@' looking for a dot that
        // has at least one character on each side.
        let mut i = at + 1;
        while i < chars.len() && !chars[i].is_whitespace() {
            let dot_has_domain = i > at + 1;
            let dot_has_tld = chars.get(i + 1).is_some_and(|next| !next.is_whitespace());
            if chars[i] == '.' && dot_has_domain && dot_has_tld {
                return true;
            }
            i += 1;
        }
    }

    false
}

/// Check every rule and collect the violations
pub fn validate(email: &str, password: &str) -> FormErrors {
    let mut errors = FormErrors::default();

    if email.trim().is_empty() {
        errors.insert(LoginField::Email, EMAIL_REQUIRED);
    } else if !looks_like_email(email) {
        errors.insert(LoginField::Email, EMAIL_INVALID);
    }

    if password.is_empty() {
        errors.insert(LoginField::Password, PASSWORD_REQUIRED);
    } else if password.encode_utf16().count() < MIN_PASSWORD_LEN {
        errors.insert(LoginField::Password, PASSWORD_TOO_SHORT);
    }

    errors
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    /// Last submit failed validation; messages are shown
    Invalid,
    /// Simulated call in flight; inputs are disabled
    Submitting,
}

/// What a submit click turned into
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Validation failed, nothing was sent
    Rejected,
    /// Validation passed; send these credentials
    Accepted(LoginCredentials),
    /// A submission is already in flight
    Busy,
}

/// How an accepted submission ended
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded(LoginCredentials),
    Failed,
    Cancelled,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFormState {
    pub email: String,
    pub password: String,
    pub errors: FormErrors,
    pub phase: LoginPhase,
}

impl LoginFormState {
    pub fn is_loading(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }

    pub fn error(&self, field: LoginField) -> Option<&str> {
        self.errors.get(field)
    }

    /// Update a field and clear that field's error only
    pub fn edit(&mut self, field: LoginField, value: impl Into<String>) {
        match field {
            LoginField::Email => self.email = value.into(),
            LoginField::Password => self.password = value.into(),
            LoginField::Submit => return,
        }
        self.errors.clear_field(field);
    }

    pub fn credentials(&self) -> LoginCredentials {
        LoginCredentials {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }

    /// Validate and, if clean, enter `Submitting`
    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.is_loading() {
            return SubmitAttempt::Busy;
        }

        let errors = validate(&self.email, &self.password);
        if !errors.is_empty() {
            self.errors = errors;
            self.phase = LoginPhase::Invalid;
            return SubmitAttempt::Rejected;
        }

        self.errors.clear();
        self.phase = LoginPhase::Submitting;
        SubmitAttempt::Accepted(self.credentials())
    }

    /// Apply the result of the simulated call and return to `Idle`
    pub fn complete(&mut self, result: Result<LoginCredentials, LoginError>) -> SubmitOutcome {
        self.phase = LoginPhase::Idle;
        match result {
            Ok(credentials) => SubmitOutcome::Succeeded(credentials),
            Err(LoginError::SubmissionFailed) => {
                self.errors.insert(LoginField::Submit, SUBMIT_FAILED);
                SubmitOutcome::Failed
            }
            Err(LoginError::Cancelled) => SubmitOutcome::Cancelled,
        }
    }
}

/// Backend that checks credentials
pub trait Authenticator {
    fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> impl Future<Output = Result<(), LoginError>>;
}

/// Stand-in backend: waits a fixed delay and accepts everything
#[derive(Clone, Copy, Debug)]
pub struct SimulatedAuthenticator {
    pub delay: Duration,
}

impl Default for SimulatedAuthenticator {
    fn default() -> Self {
        Self {
            delay: SIMULATED_LOGIN_DELAY,
        }
    }
}

impl Authenticator for SimulatedAuthenticator {
    async fn authenticate(&self, _credentials: &LoginCredentials) -> Result<(), LoginError> {
        simulated_latency(self.delay).await;
        Ok(())
    }
}

#[cfg(not(feature = "ssr"))]
async fn simulated_latency(delay: Duration) {
    gloo_timers::future::sleep(delay).await;
}

#[cfg(feature = "ssr")]
async fn simulated_latency(delay: Duration) {
    tokio::time::sleep(delay).await;
}

/// Handle to an in-flight login. Dropping it cancels the call.
#[derive(Debug)]
pub struct PendingLogin {
    handle: AbortHandle,
}

impl PendingLogin {
    pub fn cancel(self) {
        // Drop does the work
    }

    pub fn is_cancelled(&self) -> bool {
        self.handle.is_aborted()
    }
}

impl Drop for PendingLogin {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Start an authentication call that can be cancelled through the returned [`PendingLogin`].
///
/// The task resolves to the submitted credentials on success and to
/// [`LoginError::Cancelled`] if the handle was dropped first.
pub fn start_login<A>(
    authenticator: A,
    credentials: LoginCredentials,
) -> (
    impl Future<Output = Result<LoginCredentials, LoginError>> + 'static,
    PendingLogin,
)
where
    A: Authenticator + 'static,
{
    let call = async move {
        authenticator.authenticate(&credentials).await?;
        Ok::<_, LoginError>(credentials)
    };
    let (call, handle) = abortable(call);

    let task = async move {
        call.await
            .unwrap_or_else(|Aborted| Err(LoginError::Cancelled))
    };

    (task, PendingLogin { handle })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn form(email: &str, password: &str) -> LoginFormState {
        LoginFormState {
            email: email.to_string(),
            password: password.to_string(),
            ..Default::default()
        }
    }

    #[derive(Clone, Default)]
    struct CountingAuthenticator {
        calls: Rc<Cell<u32>>,
    }

    impl Authenticator for CountingAuthenticator {
        async fn authenticate(&self, _credentials: &LoginCredentials) -> Result<(), LoginError> {
            self.calls.set(self.calls.get() + 1);
            simulated_latency(SIMULATED_LOGIN_DELAY).await;
            Ok(())
        }
    }

    struct FailingAuthenticator;

    impl Authenticator for FailingAuthenticator {
        async fn authenticate(&self, _credentials: &LoginCredentials) -> Result<(), LoginError> {
            Err(LoginError::SubmissionFailed)
        }
    }

    // ========================================================================
    // Validation
    // ========================================================================

    #[test]
    fn test_email_shapes() {
        assert!(looks_like_email("user@example.com"));
        assert!(looks_like_email("a@b.c"));
        assert!(looks_like_email("first.last@sub.domain.org"));
        assert!(looks_like_email("  padded@example.com  "));

        assert!(!looks_like_email("not-an-email"));
        assert!(!looks_like_email("user@example"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("user@.com"));
        assert!(!looks_like_email("user@example."));
        assert!(!looks_like_email("user @example.com"));
        assert!(!looks_like_email("user@exa mple.com"));
    }

    #[test]
    fn test_invalid_email_and_short_password() {
        let errors = validate("not-an-email", "abc");

        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.get(LoginField::Email),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            errors.get(LoginField::Password),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn test_required_fields() {
        let errors = validate("   ", "");
        assert_eq!(errors.get(LoginField::Email), Some(EMAIL_REQUIRED));
        assert_eq!(errors.get(LoginField::Password), Some(PASSWORD_REQUIRED));
    }

    #[test]
    fn test_valid_credentials_have_no_errors() {
        assert!(validate("user@example.com", "validpass").is_empty());
        assert!(validate("user@example.com", "123456").is_empty());
    }

    #[test]
    fn test_password_length_counts_utf16_units() {
        // one astral character is two UTF-16 units
        assert!(validate("user@example.com", "ab😀cd").is_empty());
        assert!(validate("user@example.com", "abcd😀").is_empty());
        assert_eq!(
            validate("user@example.com", "abcd\u{e9}").get(LoginField::Password),
            Some(PASSWORD_TOO_SHORT)
        );
    }

    // ========================================================================
    // State machine
    // ========================================================================

    #[test]
    fn test_rejected_submit_sets_errors_and_sends_nothing() {
        let mut state = form("not-an-email", "abc");

        assert_eq!(state.begin_submit(), SubmitAttempt::Rejected);
        assert_eq!(state.phase, LoginPhase::Invalid);
        assert!(!state.is_loading());
        assert_eq!(state.error(LoginField::Email), Some(EMAIL_INVALID));
        assert_eq!(state.error(LoginField::Password), Some(PASSWORD_TOO_SHORT));
    }

    #[test]
    fn test_editing_email_clears_only_email_error() {
        let mut state = form("not-an-email", "abc");
        state.begin_submit();

        state.edit(LoginField::Email, "user@example.com");

        assert_eq!(state.error(LoginField::Email), None);
        assert_eq!(state.error(LoginField::Password), Some(PASSWORD_TOO_SHORT));
        assert_eq!(state.email, "user@example.com");
    }

    #[test]
    fn test_editing_password_clears_only_password_error() {
        let mut state = form("", "abc");
        state.begin_submit();

        state.edit(LoginField::Password, "abcdef");

        assert_eq!(state.error(LoginField::Password), None);
        assert_eq!(state.error(LoginField::Email), Some(EMAIL_REQUIRED));
    }

    #[test]
    fn test_accepted_submit_enters_submitting_and_clears_errors() {
        let mut state = form("user@example.com", "validpass");
        state.errors.insert(LoginField::Submit, SUBMIT_FAILED);

        let attempt = state.begin_submit();

        assert_eq!(
            attempt,
            SubmitAttempt::Accepted(LoginCredentials {
                email: "user@example.com".into(),
                password: "validpass".into(),
            })
        );
        assert!(state.is_loading());
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_second_submit_while_loading_is_busy() {
        let mut state = form("user@example.com", "validpass");
        state.begin_submit();
        assert_eq!(state.begin_submit(), SubmitAttempt::Busy);
        assert!(state.is_loading());
    }

    #[test]
    fn test_failed_submit_returns_to_idle_with_message() {
        let mut state = form("user@example.com", "validpass");
        state.begin_submit();

        let outcome = state.complete(Err(LoginError::SubmissionFailed));

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(state.phase, LoginPhase::Idle);
        assert_eq!(state.error(LoginField::Submit), Some(SUBMIT_FAILED));

        // form stays editable and can be resubmitted right away
        assert!(matches!(state.begin_submit(), SubmitAttempt::Accepted(_)));
        assert_eq!(state.error(LoginField::Submit), None);
    }

    #[test]
    fn test_submit_field_cannot_be_edited() {
        let mut state = form("a", "b");
        state.errors.insert(LoginField::Submit, SUBMIT_FAILED);
        state.edit(LoginField::Submit, "ignored");
        assert_eq!(state.error(LoginField::Submit), Some(SUBMIT_FAILED));
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let credentials = LoginCredentials {
            email: "user@example.com".into(),
            password: "hunter22".into(),
        };
        let printed = format!("{credentials:?}");
        assert!(printed.contains("user@example.com"));
        assert!(!printed.contains("hunter22"));
    }

    #[test]
    fn test_login_error_messages() {
        assert_eq!(LoginError::SubmissionFailed.to_string(), SUBMIT_FAILED);
    }

    // ========================================================================
    // Submission driver
    // ========================================================================

    #[tokio::test(start_paused = true)]
    async fn test_successful_login_after_simulated_delay() {
        let mut state = form("user@example.com", "validpass");
        let SubmitAttempt::Accepted(credentials) = state.begin_submit() else {
            panic!("valid form should be accepted");
        };
        assert!(state.is_loading());

        let started = tokio::time::Instant::now();
        let (task, _pending) = start_login(SimulatedAuthenticator::default(), credentials);
        let result = task.await;

        assert!(started.elapsed() >= SIMULATED_LOGIN_DELAY);

        let SubmitOutcome::Succeeded(credentials) = state.complete(result) else {
            panic!("simulated login should succeed");
        };
        assert_eq!(credentials.email, "user@example.com");
        assert!(!state.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_authenticator_called_once_per_submission() {
        let authenticator = CountingAuthenticator::default();
        let calls = authenticator.calls.clone();

        let mut state = form("user@example.com", "validpass");
        let SubmitAttempt::Accepted(credentials) = state.begin_submit() else {
            panic!("valid form should be accepted");
        };
        let (task, _pending) = start_login(authenticator, credentials);
        assert!(task.await.is_ok());
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failing_authenticator_yields_failure() {
        let credentials = form("user@example.com", "validpass").credentials();
        let (task, _pending) = start_login(FailingAuthenticator, credentials);
        assert_eq!(task.await, Err(LoginError::SubmissionFailed));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_pending_login_cancels_call() {
        let authenticator = CountingAuthenticator::default();
        let calls = authenticator.calls.clone();
        let credentials = form("user@example.com", "validpass").credentials();

        let (task, pending) = start_login(authenticator, credentials);
        drop(pending);

        assert_eq!(task.await, Err(LoginError::Cancelled));
        assert_eq!(calls.get(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_mid_flight() {
        let credentials = form("user@example.com", "validpass").credentials();
        let (task, pending) = start_login(SimulatedAuthenticator::default(), credentials);

        let mut task = Box::pin(task);
        // poll once so the simulated call is suspended on its timer
        assert!(futures::poll!(task.as_mut()).is_pending());

        assert!(!pending.is_cancelled());
        pending.cancel();

        assert_eq!(task.await, Err(LoginError::Cancelled));
    }

    #[test]
    fn test_cancelled_outcome_leaves_no_error() {
        let mut state = form("user@example.com", "validpass");
        state.begin_submit();
        assert_eq!(
            state.complete(Err(LoginError::Cancelled)),
            SubmitOutcome::Cancelled
        );
        assert!(state.errors.is_empty());
        assert_eq!(state.phase, LoginPhase::Idle);
    }
}
