//! Viewport metrics and responsive layout sync
//!
//! Mobile browsers change `innerHeight` as their chrome slides in and out, so
//! `100vh` overshoots the visible area. The page publishes one percent of the
//! real viewport height as the `--vh` custom property and the stylesheet sizes
//! full-height sections with `calc(var(--vh, 1vh) * 100)`.
//!
//! Access to the viewport goes through [`ViewportMetrics`] so the sync logic can
//! run against a fake in tests and against the DOM in the browser.

use super::menu::MenuState;

/// CSS custom property holding one percent of the viewport height
pub const VH_PROPERTY: &str = "--vh";

/// Source of viewport dimensions and sink for the published unit height
pub trait ViewportMetrics {
    /// Viewport width in CSS pixels
    fn width(&self) -> f64;

    /// Viewport height in CSS pixels
    fn height(&self) -> f64;

    /// Publish the `--vh` value (already formatted, e.g. `"8.12px"`)
    fn publish_unit_height(&self, css_value: &str);
}

/// Result of one layout sync
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutSnapshot {
    pub width: f64,
    /// One percent of the viewport height, in pixels
    pub unit_height: f64,
    /// Whether this sync closed an open menu
    pub closed_menu: bool,
}

/// One percent of `height`
pub fn unit_height(height: f64) -> f64 {
    height * 0.01
}

/// Format a unit height as a CSS length
pub fn unit_height_css(unit: f64) -> String {
    format!("{unit}px")
}

/// Run one resize pass: collapse the menu past the breakpoint and republish `--vh`.
///
/// Called once on mount and then on every resize event.
pub fn sync_layout<V>(viewport: &V, menu: &mut MenuState) -> LayoutSnapshot
where
    V: ViewportMetrics + ?Sized,
{
    let width = viewport.width();
    let closed_menu = menu.apply_viewport_width(width);

    let unit = unit_height(viewport.height());
    viewport.publish_unit_height(&unit_height_css(unit));

    LayoutSnapshot {
        width,
        unit_height: unit,
        closed_menu,
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FakeViewport;
    use super::*;

    #[test]
    fn test_unit_height_is_one_percent() {
        assert_eq!(unit_height(800.0), 8.0);
        assert_eq!(unit_height(0.0), 0.0);
    }

    #[test]
    fn test_unit_height_css_format() {
        assert_eq!(unit_height_css(8.0), "8px");
        assert_eq!(unit_height_css(6.5), "6.5px");
    }

    #[test]
    fn test_sync_publishes_vh() {
        let viewport = FakeViewport::new(375.0, 650.0);
        let mut menu = MenuState::default();

        let snapshot = sync_layout(&viewport, &mut menu);

        assert_eq!(snapshot.unit_height, 6.5);
        assert_eq!(viewport.last_published().as_deref(), Some("6.5px"));
    }

    #[test]
    fn test_sync_on_desktop_closes_menu() {
        let viewport = FakeViewport::new(1280.0, 800.0);
        let mut menu = MenuState { is_open: true };

        let snapshot = sync_layout(&viewport, &mut menu);

        assert!(snapshot.closed_menu);
        assert!(!menu.is_open);
    }

    #[test]
    fn test_sync_on_mobile_keeps_menu() {
        let viewport = FakeViewport::new(414.0, 896.0);
        let mut menu = MenuState { is_open: true };

        let snapshot = sync_layout(&viewport, &mut menu);

        assert!(!snapshot.closed_menu);
        assert!(menu.is_open);
    }

    #[test]
    fn test_every_resize_republishes() {
        let viewport = FakeViewport::new(400.0, 700.0);
        let mut menu = MenuState::default();

        sync_layout(&viewport, &mut menu);
        viewport.resize(400.0, 600.0);
        sync_layout(&viewport, &mut menu);
        viewport.resize(400.0, 600.0);
        sync_layout(&viewport, &mut menu);

        assert_eq!(
            *viewport.published.borrow(),
            vec!["7px".to_string(), "6px".to_string(), "6px".to_string()]
        );
    }
}
