//! Hero search box and report action

/// Acknowledgment shown by the "Report Issue" button
pub const REPORT_ISSUE_ACK: &str = "Report Issue functionality would open here";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
}

impl SearchQuery {
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Acknowledgment for the current query, or `None` when it is blank
    pub fn submit(&self) -> Option<String> {
        if self.text.trim().is_empty() {
            None
        } else {
            Some(format!("Searching for: {}", self.text))
        }
    }
}

/// Whether a keypress should run the search
pub fn is_submit_key(key: &str) -> bool {
    key == "Enter"
}
