// Scroll-driven page state: navbar style, reveal-on-scroll, and which
// section's nav link is highlighted.

pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;
pub const REVEAL_TRIGGER_RATIO: f64 = 0.85;
pub const SECTION_LEAD: f64 = 200.0;

pub fn navbar_scrolled(offset_y: f64) -> bool {
    offset_y > NAVBAR_SCROLL_THRESHOLD
}

/// Tracks which `.reveal` elements have been revealed. Once revealed an
/// element stays revealed.
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        RevealTracker {
            revealed: vec![false; count],
        }
    }

    /// `tops` are the elements' viewport-relative top edges, in the same
    /// order every call. Returns the indices newly revealed by this check.
    pub fn check(&mut self, viewport_height: f64, tops: &[f64]) -> Vec<usize> {
        if tops.len() > self.revealed.len() {
            self.revealed.resize(tops.len(), false);
        }
        let trigger = viewport_height * REVEAL_TRIGGER_RATIO;
        let mut newly = Vec::new();
        for (i, &top) in tops.iter().enumerate() {
            if !self.revealed[i] && top < trigger {
                self.revealed[i] = true;
                newly.push(i);
            }
        }
        newly
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
}

/// The last section (in document order) whose top, less a fixed lead, has
/// been scrolled past.
pub fn active_section(offset_y: f64, sections: &[Section]) -> Option<&str> {
    sections
        .iter()
        .filter(|s| offset_y >= s.top - SECTION_LEAD)
        .last()
        .map(|s| s.id.as_str())
}
