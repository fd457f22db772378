//! Top navigation bar with the collapsible mobile menu
//!
//! The navbar owns the page's [`MenuState`] wiring:
//! - toggle button opens/closes the mobile panel
//! - any navigation closes it
//! - a global click outside the panel and the toggle closes it
//! - a resize past the mobile breakpoint closes it and republishes `--vh`

use leptos::html::{Button, Div};
use leptos::prelude::*;

use super::browser::{DocumentScroller, acknowledge};
use super::icon::{Icon, icons};
use crate::core::search::REPORT_ISSUE_ACK;
use crate::core::{MenuState, PRIMARY_NAV, Section, navigate_from_shell};

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Scroll to a section from the page shell and collapse the mobile menu
pub fn shell_navigate(menu: RwSignal<MenuState>, section: Section) {
    menu.update(|state| {
        navigate_from_shell(&DocumentScroller, section.id(), state);
    });
}

/// Sync the layout once on mount and again on every window resize.
///
/// No debouncing: every resize event runs a full sync.
pub fn use_responsive_layout(menu: RwSignal<MenuState>) {
    #[cfg(not(feature = "ssr"))]
    {
        use super::browser::BrowserViewport;
        use crate::core::sync_layout;
        use leptos::ev::resize;

        let sync = move || {
            let mut state = menu.get_untracked();
            if sync_layout(&BrowserViewport, &mut state).closed_menu {
                menu.set(state);
            }
        };

        // Set initial value
        Effect::new(move |_| sync());

        let handle_resize = window_event_listener(resize, move |_| sync());
        on_cleanup(move || handle_resize.remove());
    }
    #[cfg(feature = "ssr")]
    {
        let _ = menu;
    }
}

/// Close the menu on clicks that land outside both the panel and its toggle.
///
/// The listener stays registered while the menu is closed.
pub fn use_outside_click_dismissal(
    menu: RwSignal<MenuState>,
    panel_ref: NodeRef<Div>,
    toggle_ref: NodeRef<Button>,
) {
    #[cfg(not(feature = "ssr"))]
    {
        use super::browser::contains_target;
        use crate::core::ClickTarget;
        use leptos::ev::click;

        let handle_click = window_event_listener(click, move |ev| {
            if !menu.with_untracked(|state| state.is_open) {
                return;
            }

            let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            let panel = panel_ref.get_untracked();
            let toggle = toggle_ref.get_untracked();

            let click_target = ClickTarget {
                inside_panel: contains_target(
                    panel.as_ref().map(|el| el.unchecked_ref::<web_sys::Node>()),
                    target.as_ref(),
                ),
                inside_toggle: contains_target(
                    toggle.as_ref().map(|el| el.unchecked_ref::<web_sys::Node>()),
                    target.as_ref(),
                ),
            };

            if menu.with_untracked(|state| state.should_dismiss(click_target)) {
                menu.update(MenuState::close);
            }
        });

        on_cleanup(move || handle_click.remove());
    }
    #[cfg(feature = "ssr")]
    {
        let _ = (menu, panel_ref, toggle_ref);
    }
}

#[component]
pub fn Navbar(menu: RwSignal<MenuState>) -> impl IntoView {
    let panel_ref = NodeRef::<Div>::new();
    let toggle_ref = NodeRef::<Button>::new();

    use_responsive_layout(menu);
    use_outside_click_dismissal(menu, panel_ref, toggle_ref);

    let is_open = Memo::new(move |_| menu.with(|state| state.is_open));

    view! {
        <nav class="navbar">
            <div class="logo-container">
                <div class="logo-icon">"🏢"</div>
                <span class="logo-text">"CityTrack"</span>
            </div>

            // Desktop navigation
            <ul class="nav-links">
                {PRIMARY_NAV
                    .iter()
                    .map(|&section| {
                        view! {
                            <li>
                                <button
                                    class="nav-button"
                                    on:click=move |_| shell_navigate(menu, section)
                                >
                                    {section.label()}
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <div class="nav-right">
                <Icon name=icons::SEARCH class="search-icon" />
                <button class="report-button" on:click=move |_| acknowledge(REPORT_ISSUE_ACK)>
                    "Report Issue"
                </button>
                <div class="profile-avatar">"👤"</div>

                <button
                    node_ref=toggle_ref
                    class="mobile-menu-button"
                    class:active=move || is_open.get()
                    on:click=move |_| menu.update(MenuState::toggle)
                    aria-label="Toggle mobile menu"
                    aria-expanded=move || is_open.get().to_string()
                >
                    {move || {
                        if is_open.get() {
                            view! { <Icon name=icons::X /> }
                        } else {
                            view! { <Icon name=icons::MENU /> }
                        }
                    }}
                </button>
            </div>

            <Show when=move || is_open.get()>
                <div node_ref=panel_ref class="mobile-nav">
                    <ul class="mobile-nav-list">
                        {PRIMARY_NAV
                            .iter()
                            .map(|&section| {
                                view! {
                                    <li class="mobile-nav-item">
                                        <button
                                            class="mobile-nav-button"
                                            on:click=move |_| shell_navigate(menu, section)
                                        >
                                            {section.label()}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </Show>
        </nav>
    }
}
