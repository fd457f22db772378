use chrono::Datelike;
use leptos::prelude::*;

use super::browser::DocumentScroller;
use super::icon::{Icon, icons};
use crate::core::{PRIMARY_NAV, scroll_to_section};

/// Social profile link: (aria label, icon)
const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("Facebook", icons::FACEBOOK),
    ("Twitter", icons::TWITTER),
    ("Instagram", icons::INSTAGRAM),
    ("LinkedIn", icons::LINKEDIN),
];

/// Page footer with quick links and social icons.
///
/// Quick links only scroll; they leave the mobile menu alone.
#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="footer">
            <div class="footer-container">
                <div class="footer-content">
                    <div class="footer-section">
                        <h3 class="footer-title">"CityTrack"</h3>
                        <p>"Your real-time guide to civic issues and resolutions in your community."</p>
                    </div>

                    <div class="footer-section">
                        <h3 class="footer-title">"Quick Links"</h3>
                        <ul class="footer-links">
                            {PRIMARY_NAV
                                .iter()
                                .map(|&section| {
                                    view! {
                                        <li>
                                            <button on:click=move |_| {
                                                scroll_to_section(&DocumentScroller, section.id());
                                            }>
                                                {section.label()}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div class="footer-section">
                        <h3 class="footer-title">"Follow Us"</h3>
                        <div class="social-icons">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|&(label, icon)| {
                                    view! {
                                        <a href="#" aria-label=label class="social-icon">
                                            <Icon name=icon />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{format!("© {} CityTrack. All Rights Reserved.", year)}</p>
                </div>
            </div>
        </footer>
    }
}
