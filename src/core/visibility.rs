//! Scroll-reveal trigger for feature cards
//!
//! Each card owns a [`VisibilityTrigger`]. The browser binding feeds it
//! intersection events and timer expiries; the trigger decides when to arm the
//! reveal timer and when the card becomes visible. The transition to visible is
//! one-way: once a card has been revealed it stays revealed for its lifetime.
//!
//! ```text
//! Watching --intersect--> Scheduled --timer--> Visible
//!     \                       |
//!      `------release---------'--> Released
//! ```

/// Fraction of the card that must be inside the viewport
pub const INTERSECTION_THRESHOLD: f64 = 0.1;

/// Shrinks the bottom of the viewport so cards reveal slightly before the edge
pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Observer configuration shared by all feature cards
#[derive(Clone, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: INTERSECTION_THRESHOLD,
            root_margin: ROOT_MARGIN,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TriggerPhase {
    /// Observer attached, card not seen yet
    #[default]
    Watching,
    /// Card intersected, reveal timer armed
    Scheduled,
    /// Card revealed
    Visible,
    /// Owner torn down before the reveal
    Released,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibilityTrigger {
    delay_ms: u32,
    phase: TriggerPhase,
}

impl VisibilityTrigger {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            phase: TriggerPhase::Watching,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    pub fn phase(&self) -> TriggerPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase == TriggerPhase::Visible
    }

    /// Whether the intersection observer still has work to do
    pub fn is_watching(&self) -> bool {
        self.phase == TriggerPhase::Watching
    }

    /// Feed an intersection entry.
    ///
    /// Returns the delay to arm the reveal timer with on the first intersecting
    /// entry, `None` otherwise. After `Some`, the observer can be disconnected.
    pub fn on_intersection(&mut self, is_intersecting: bool) -> Option<u32> {
        if is_intersecting && self.phase == TriggerPhase::Watching {
            self.phase = TriggerPhase::Scheduled;
            Some(self.delay_ms)
        } else {
            None
        }
    }

    /// The reveal timer fired. Returns `true` if the card just became visible.
    pub fn on_timer_elapsed(&mut self) -> bool {
        if self.phase == TriggerPhase::Scheduled {
            self.phase = TriggerPhase::Visible;
            true
        } else {
            false
        }
    }

    /// Owner is being torn down. A pending reveal is dropped; a revealed card stays revealed.
    pub fn release(&mut self) {
        if self.phase != TriggerPhase::Visible {
            self.phase = TriggerPhase::Released;
        }
    }
}
