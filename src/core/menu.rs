//! Mobile menu state
//!
//! The navbar owns a single [`MenuState`]. It is toggled by the menu button,
//! closed by navigation, by clicks landing outside the menu, and by any layout
//! sync whose viewport is wider than [`MOBILE_BREAKPOINT_PX`].

/// Widest viewport (in CSS pixels) that still uses the mobile layout
pub const MOBILE_BREAKPOINT_PX: f64 = 767.0;

/// Open/closed state of the mobile navigation panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub is_open: bool,
}

/// Where a document click landed relative to the menu
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickTarget {
    /// Inside the mobile navigation panel subtree
    pub inside_panel: bool,
    /// Inside the menu toggle button subtree
    pub inside_toggle: bool,
}

impl ClickTarget {
    pub fn outside() -> Self {
        Self::default()
    }

    pub fn is_outside(&self) -> bool {
        !self.inside_panel && !self.inside_toggle
    }
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Whether a click at `target` should dismiss the menu
    pub fn should_dismiss(&self, target: ClickTarget) -> bool {
        self.is_open && target.is_outside()
    }

    /// Close the menu if the click landed outside both the panel and the toggle.
    ///
    /// Returns `true` when the state changed.
    pub fn dismiss_on_click(&mut self, target: ClickTarget) -> bool {
        if self.should_dismiss(target) {
            self.close();
            true
        } else {
            false
        }
    }

    /// Collapse the menu when the viewport is past the mobile breakpoint.
    ///
    /// Returns `true` when the state changed.
    pub fn apply_viewport_width(&mut self, width: f64) -> bool {
        if is_desktop_width(width) && self.is_open {
            self.close();
            true
        } else {
            false
        }
    }
}

pub fn is_desktop_width(width: f64) -> bool {
    width > MOBILE_BREAKPOINT_PX
}
