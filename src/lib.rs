//! CityTrack - civic issue tracking landing page
//!
//! Server-rendered with Leptos and hydrated in the browser. The `core` module
//! holds the page state machines; `ui` binds them to the DOM.

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
