use leptos::prelude::*;

/// SVG icon served from `/icons/{name}.svg`
#[component]
pub fn Icon(
    /// Icon name, without the .svg extension
    name: &'static str,
    /// CSS classes used for sizing
    #[prop(default = "icon-20")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable="false"
        />
    }
}

/// Icon names shipped in `public/icons`
pub mod icons {
    pub const SEARCH: &str = "search";
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
    pub const MAP_PIN: &str = "map-pin";
    pub const TRENDING_UP: &str = "trending-up";
    pub const BELL: &str = "bell";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const FACEBOOK: &str = "facebook";
    pub const TWITTER: &str = "twitter";
    pub const INSTAGRAM: &str = "instagram";
    pub const LINKEDIN: &str = "linkedin";
}
