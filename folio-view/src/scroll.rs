//! Scroll position state for the fixed header.
//!
//! The header swaps its style the moment the page is scrolled away from the
//! top. The tracker is a plain comparison re-evaluated on every scroll
//! notification; no debouncing, no hysteresis, no memory of prior offsets.

/// Vertical offset (CSS pixels) at or below which the page counts as at-top.
/// The comparison is inclusive, matching the visibility threshold convention.
pub const TOP_OFFSET_LIMIT: f64 = 10.0;

#[derive(Debug, Clone)]
pub struct ScrollTracker {
    at_top: bool,
}

impl ScrollTracker {
    /// A fresh page has not been scrolled.
    pub fn new() -> Self {
        ScrollTracker { at_top: true }
    }

    pub fn is_at_top(&self) -> bool {
        self.at_top
    }

    /// Records the current vertical offset. Returns `true` when the at-top
    /// flag flipped, so callers only re-render on actual changes.
    pub fn record(&mut self, offset: f64) -> bool {
        let at_top = offset <= TOP_OFFSET_LIMIT;
        let flipped = at_top != self.at_top;
        self.at_top = at_top;
        if flipped {
            tracing::trace!(offset, at_top, "scroll state flipped");
        }
        flipped
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        ScrollTracker::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_top() {
        assert!(ScrollTracker::new().is_at_top());
    }

    #[test]
    fn test_offset_sequence() {
        let mut tracker = ScrollTracker::new();
        let offsets = [0.0, 5.0, 15.0, 8.0, 0.0];
        let expected = [true, true, false, true, true];

        for (offset, expected) in offsets.iter().zip(expected) {
            tracker.record(*offset);
            assert_eq!(
                tracker.is_at_top(),
                expected,
                "offset {} should give at_top = {}",
                offset,
                expected
            );
        }
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let mut tracker = ScrollTracker::new();
        tracker.record(TOP_OFFSET_LIMIT);
        assert!(tracker.is_at_top());

        tracker.record(TOP_OFFSET_LIMIT + 0.1);
        assert!(!tracker.is_at_top());
    }

    #[test]
    fn test_reports_flips_only() {
        let mut tracker = ScrollTracker::new();
        assert!(!tracker.record(0.0)); // already at top
        assert!(!tracker.record(5.0));
        assert!(tracker.record(15.0)); // flipped down
        assert!(!tracker.record(200.0));
        assert!(tracker.record(3.0)); // flipped back
    }

    #[test]
    fn test_no_hysteresis() {
        let mut tracker = ScrollTracker::new();
        for _ in 0..3 {
            tracker.record(11.0);
            assert!(!tracker.is_at_top());
            tracker.record(9.0);
            assert!(tracker.is_at_top());
        }
    }

    #[test]
    fn test_negative_offset_counts_as_top() {
        // Rubber-band scrolling can report offsets below zero.
        let mut tracker = ScrollTracker::new();
        tracker.record(150.0);
        tracker.record(-4.0);
        assert!(tracker.is_at_top());
    }
}
