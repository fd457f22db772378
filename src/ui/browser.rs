//! DOM-backed implementations of the core traits
//!
//! On the server these are inert: there is no viewport, no document to scroll
//! and nobody to show an alert to.

#[cfg(not(feature = "ssr"))]
use leptos::prelude::{document, window};
#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

use crate::core::{SectionScroller, ViewportMetrics};

/// The browser window as a [`ViewportMetrics`] source
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserViewport;

impl ViewportMetrics for BrowserViewport {
    fn width(&self) -> f64 {
        #[cfg(not(feature = "ssr"))]
        {
            window()
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or_default()
        }
        #[cfg(feature = "ssr")]
        {
            0.0
        }
    }

    fn height(&self) -> f64 {
        #[cfg(not(feature = "ssr"))]
        {
            window()
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or_default()
        }
        #[cfg(feature = "ssr")]
        {
            0.0
        }
    }

    fn publish_unit_height(&self, css_value: &str) {
        #[cfg(not(feature = "ssr"))]
        {
            use crate::core::VH_PROPERTY;

            if let Some(root) = document()
                .document_element()
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            {
                let _ = root.style().set_property(VH_PROPERTY, css_value);
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = css_value;
        }
    }
}

/// The current document as a [`SectionScroller`]
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentScroller;

impl SectionScroller for DocumentScroller {
    fn scroll_into_view(&self, id: &str) -> bool {
        #[cfg(not(feature = "ssr"))]
        {
            use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

            let Some(element) = document().get_element_by_id(id) else {
                return false;
            };

            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        #[cfg(feature = "ssr")]
        {
            let _ = id;
            false
        }
    }
}

/// Show a placeholder acknowledgment for an action that has no backend
pub fn acknowledge(message: &str) {
    #[cfg(not(feature = "ssr"))]
    {
        leptos::logging::log!("{}", message);
        let _ = window().alert_with_message(message);
    }
    #[cfg(feature = "ssr")]
    {
        let _ = message;
    }
}

/// Whether `target` is `container` or one of its descendants
#[cfg(not(feature = "ssr"))]
pub fn contains_target(container: Option<&web_sys::Node>, target: Option<&web_sys::Node>) -> bool {
    match (container, target) {
        (Some(container), Some(target)) => container.contains(Some(target)),
        _ => false,
    }
}
