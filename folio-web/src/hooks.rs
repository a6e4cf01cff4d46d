//! Reactive hooks bridging the platform facilities to component state.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use folio_view::scroll::ScrollTracker;
use folio_view::section::SectionId;
use folio_view::visibility::{IntersectionThreshold, Observation, RevealLatch};

use crate::platform::{self, IntersectionSubscription, ScrollSubscription};

/// One-shot visibility signal for a section's region.
///
/// False until the region is first sufficiently visible in the viewport,
/// then true for the rest of the instance's life. If the region never
/// mounts, the signal stays false and the section simply never animates in.
pub fn use_on_screen(section: SectionId, threshold: IntersectionThreshold) -> Signal<bool> {
    let mut visible = use_signal(|| false);
    let subscription: Rc<RefCell<Option<IntersectionSubscription>>> =
        use_hook(|| Rc::new(RefCell::new(None)));

    use_effect({
        let subscription = Rc::clone(&subscription);
        move || {
            // Tear down before re-subscribing; effect re-runs must never
            // stack observers on the same region.
            subscription.borrow_mut().take();

            let Some(region) = platform::region_by_anchor(section.anchor()) else {
                tracing::warn!(
                    anchor = section.anchor(),
                    "region not found; section stays hidden"
                );
                return;
            };

            let mut latch = RevealLatch::new(threshold);
            let observed = IntersectionSubscription::observe(&region, threshold, move |sample| {
                match latch.record(sample) {
                    Observation::Latched => {
                        visible.set(true);
                        true
                    }
                    Observation::AlreadyVisible => true,
                    Observation::StillHidden => false,
                }
            });

            match observed {
                Ok(active) => *subscription.borrow_mut() = Some(active),
                Err(err) => tracing::warn!(
                    anchor = section.anchor(),
                    ?err,
                    "intersection facility unavailable; section stays hidden"
                ),
            }
        }
    });

    use_drop({
        let subscription = Rc::clone(&subscription);
        // Idempotent with the latch's own disconnect: whichever runs first
        // wins, and nothing is delivered to the unmounted component.
        move || {
            subscription.borrow_mut().take();
        }
    });

    visible
}

/// Whether the page is scrolled to the top, re-evaluated on every scroll
/// notification.
pub fn use_at_top() -> Signal<bool> {
    let mut at_top = use_signal(|| true);
    let subscription: Rc<RefCell<Option<ScrollSubscription>>> =
        use_hook(|| Rc::new(RefCell::new(None)));

    use_effect({
        let subscription = Rc::clone(&subscription);
        move || {
            subscription.borrow_mut().take();

            let mut tracker = ScrollTracker::new();
            // A reload can restore a mid-page position before any scroll
            // event fires, so seed from the current offset.
            if let Some(offset) = platform::scroll_offset() {
                if tracker.record(offset) {
                    at_top.set(tracker.is_at_top());
                }
            }

            match ScrollSubscription::listen(move |offset| {
                if tracker.record(offset) {
                    at_top.set(tracker.is_at_top());
                }
            }) {
                Ok(active) => *subscription.borrow_mut() = Some(active),
                Err(err) => tracing::warn!(
                    ?err,
                    "scroll facility unavailable; header keeps its at-top style"
                ),
            }
        }
    });

    use_drop({
        let subscription = Rc::clone(&subscription);
        move || {
            subscription.borrow_mut().take();
        }
    });

    at_top
}
