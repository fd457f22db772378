//! In-page section navigation

use super::menu::MenuState;

/// Sections the navigation can target
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Issues,
    Map,
    About,
    Progress,
}

impl Section {
    /// Element id the section is rendered with
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Issues => "issues",
            Section::Map => "map",
            Section::About => "about",
            Section::Progress => "progress",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Issues => "Issues",
            Section::Map => "Map",
            Section::About => "About",
            Section::Progress => "Progress",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "home" => Some(Section::Home),
            "issues" => Some(Section::Issues),
            "map" => Some(Section::Map),
            "about" => Some(Section::About),
            "progress" => Some(Section::Progress),
            _ => None,
        }
    }
}

/// Links shown in the navbar, the mobile menu and the footer
pub const PRIMARY_NAV: [Section; 4] = [Section::Home, Section::Issues, Section::Map, Section::About];

/// Something that can bring an element into view by id
pub trait SectionScroller {
    /// Smooth-scroll the element with `id` to the top of the viewport.
    ///
    /// Returns `false` if no such element exists.
    fn scroll_into_view(&self, id: &str) -> bool;
}

/// Scroll to a section. A missing section is a silent no-op.
pub fn scroll_to_section<S>(scroller: &S, id: &str) -> bool
where
    S: SectionScroller + ?Sized,
{
    scroller.scroll_into_view(id)
}

/// Navigation from the page shell: scroll, then collapse the mobile menu.
pub fn navigate_from_shell<S>(scroller: &S, id: &str, menu: &mut MenuState) -> bool
where
    S: SectionScroller + ?Sized,
{
    let found = scroll_to_section(scroller, id);
    menu.close();
    found
}


#[cfg(test)]
mod tests {
    use super::testing::FakeDocument;
    use super::*;

    #[test]
    fn test_section_ids_round_trip() {
        for section in [
            Section::Home,
            Section::Issues,
            Section::Map,
            Section::About,
            Section::Progress,
        ] {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("pricing"), None);
    }

    #[test]
    fn test_primary_nav_order() {
        let labels: Vec<_> = PRIMARY_NAV.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Home", "Issues", "Map", "About"]);
    }

    #[test]
    fn test_scroll_to_existing_section() {
        let doc = FakeDocument::with_ids(&["home", "about"]);
        assert!(scroll_to_section(&doc, "about"));
        assert_eq!(*doc.scrolled.borrow(), vec!["about".to_string()]);
    }

    #[test]
    fn test_scroll_to_missing_section_is_noop() {
        let doc = FakeDocument::with_ids(&["home", "about"]);
        assert!(!scroll_to_section(&doc, "map"));
        assert!(!scroll_to_section(&doc, ""));
        assert!(doc.scrolled.borrow().is_empty());
    }

    #[test]
    fn test_shell_navigation_closes_menu() {
        let doc = FakeDocument::with_ids(&["home"]);
        let mut menu = MenuState { is_open: true };

        assert!(navigate_from_shell(&doc, "home", &mut menu));
        assert!(!menu.is_open);
    }

    #[test]
    fn test_shell_navigation_to_missing_section_still_closes_menu() {
        let doc = FakeDocument::with_ids(&["home"]);
        let mut menu = MenuState { is_open: true };

        assert!(!navigate_from_shell(&doc, "issues", &mut menu));
        assert!(!menu.is_open);
        assert!(doc.scrolled.borrow().is_empty());
    }
}
