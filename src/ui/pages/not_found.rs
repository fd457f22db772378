//! Not found page component

use leptos::prelude::*;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1 class="not-found-code">"404"</h1>
            <h2 class="not-found-title">"Page Not Found"</h2>
            <p class="not-found-description">
                "The page you're looking for doesn't exist or has been moved."
            </p>
            <A href="/" attr:class="action-button primary">
                "Back to CityTrack"
            </A>
        </div>
    }
}
