use leptos::html::Div;
use leptos::prelude::*;

use super::icon::Icon;
use super::visibility::use_visibility_trigger;

/// Card in the "How CityTrack Works" grid that fades in when scrolled into view
#[component]
pub fn FeatureCard(
    /// Icon name (see [`crate::ui::icons`])
    icon: &'static str,
    /// Color class for the icon badge (e.g. "icon-blue")
    icon_class: &'static str,
    title: &'static str,
    description: &'static str,
    /// Reveal delay after the card enters the viewport
    #[prop(default = 0)]
    delay: u32,
) -> impl IntoView {
    let card_ref = NodeRef::<Div>::new();
    let is_visible = use_visibility_trigger(card_ref, delay);

    view! {
        <div node_ref=card_ref class="feature-card" class:visible=move || is_visible.get()>
            <div class=format!("feature-icon {}", icon_class)>
                <Icon name=icon class="icon-32" />
            </div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </div>
    }
}
