//! Platform-independent state and decision logic for the CityTrack pages

#[cfg(feature = "ssr")]
pub mod config;
pub mod login;
pub mod menu;
pub mod navigation;
pub mod search;
pub mod viewport;
pub mod visibility;

pub use login::{
    Authenticator, FormErrors, LoginCredentials, LoginError, LoginField, LoginFormState,
    LoginPhase, PendingLogin, SimulatedAuthenticator, SubmitAttempt, SubmitOutcome, start_login,
    validate,
};
pub use menu::{ClickTarget, MOBILE_BREAKPOINT_PX, MenuState};
pub use navigation::{
    PRIMARY_NAV, Section, SectionScroller, navigate_from_shell, scroll_to_section,
};
pub use search::SearchQuery;
pub use viewport::{LayoutSnapshot, VH_PROPERTY, ViewportMetrics, sync_layout};
pub use visibility::{ObserverOptions, TriggerPhase, VisibilityTrigger};
