//! CityTrack landing page
//!
//! - navbar with mobile menu
//! - hero section with area/category search and quick actions
//! - "How CityTrack Works" feature grid with scroll-reveal cards
//! - footer

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::search::is_submit_key;
use crate::core::{MenuState, SearchQuery, Section};
use crate::ui::browser::acknowledge;
use crate::ui::feature_card::FeatureCard;
use crate::ui::footer::Footer;
use crate::ui::icon::{Icon, icons};
use crate::ui::navbar::{Navbar, shell_navigate};

#[component]
pub fn LandingPage() -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());

    view! {
        <Title text="CityTrack - Track Your City's Issues in Real-Time" />
        <Meta
            name="description"
            content="Stay informed about the progress of civic issues in your community. From potholes to public safety, we keep you updated."
        />

        <div class="app-container">
            <Navbar menu=menu />
            <HeroSection menu=menu />
            <HowItWorksSection />
            <Footer />
        </div>
    }
}

#[component]
fn HeroSection(menu: RwSignal<MenuState>) -> impl IntoView {
    let query = RwSignal::new(SearchQuery::default());

    let run_search = move || {
        if let Some(message) = query.with_untracked(SearchQuery::submit) {
            acknowledge(&message);
        }
    };

    view! {
        <section id=Section::Home.id() class="hero-section">
            <div class="hero-content">
                <h1 class="hero-title">"Track Your City's Issues in Real-Time"</h1>
                <p class="hero-description">
                    "Stay informed about the progress of civic issues in your community. From potholes to public safety, we keep you updated."
                </p>

                <div class="search-container">
                    <input
                        type="text"
                        class="search-input"
                        placeholder="Search by area or category (e.g., 'Downtown', 'potholes')"
                        prop:value=move || query.with(|q| q.text.clone())
                        on:input=move |ev| query.update(|q| q.set_text(event_target_value(&ev)))
                        on:keypress=move |ev| {
                            if is_submit_key(&ev.key()) {
                                run_search();
                            }
                        }
                    />
                    <button class="search-button" on:click=move |_| run_search()>
                        "Search"
                    </button>
                </div>

                <div class="action-buttons">
                    <button
                        class="action-button primary"
                        on:click=move |_| shell_navigate(menu, Section::Map)
                    >
                        <Icon name=icons::MAP_PIN />
                        <span>"View Map"</span>
                    </button>
                    <button
                        class="action-button secondary"
                        on:click=move |_| shell_navigate(menu, Section::Progress)
                    >
                        <Icon name=icons::TRENDING_UP />
                        <span>"Check Progress"</span>
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn HowItWorksSection() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="how-it-works-section">
            <div class="section-container">
                <h2 class="section-title">"How CityTrack Works"</h2>
                <p class="section-description">
                    "Our platform simplifies civic engagement by providing real-time tracking of issues, from reporting to resolution."
                </p>

                <div class="features-grid">
                    <FeatureCard
                        icon=icons::CHECK_CIRCLE
                        icon_class="icon-blue"
                        title="Report Issues"
                        description="Easily report issues with detailed descriptions and location data."
                        delay=0
                    />
                    <FeatureCard
                        icon=icons::TRENDING_UP
                        icon_class="icon-amber"
                        title="Track Progress"
                        description="Follow the progress of reported issues with regular updates and status changes."
                        delay=200
                    />
                    <FeatureCard
                        icon=icons::BELL
                        icon_class="icon-red"
                        title="Stay Informed"
                        description="Receive notifications and updates on issues affecting your community."
                        delay=400
                    />
                </div>
            </div>
        </section>
    }
}
