use serde::Serialize;
use thiserror::Error;

/// Fraction of a region that must be visible before it counts as on screen.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

#[derive(Error, Debug)]
pub enum ThresholdError {
    #[error("ThresholdError: threshold must be a finite number")]
    NotFinite,
    #[error("ThresholdError: threshold must be within [0, 1], got {0}")]
    OutOfRange(f64),
}

/// Minimum visible fraction of a region required to count as "visible".
///
/// The comparison is inclusive on both mechanisms of the site: a region is
/// visible at `ratio >= threshold`, and the page is at-top at `offset <= 10`.
/// Serializes as the bare fraction; construction always goes through [`new`]
/// so the range check cannot be skipped.
///
/// [`new`]: IntersectionThreshold::new
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntersectionThreshold(f64);

impl IntersectionThreshold {
    pub fn new(fraction: f64) -> Result<Self, ThresholdError> {
        if !fraction.is_finite() {
            return Err(ThresholdError::NotFinite);
        }
        if !(0.0..=1.0).contains(&fraction) {
            return Err(ThresholdError::OutOfRange(fraction));
        }
        Ok(IntersectionThreshold(fraction))
    }

    pub fn fraction(&self) -> f64 {
        self.0
    }
}

impl Default for IntersectionThreshold {
    fn default() -> Self {
        IntersectionThreshold(DEFAULT_THRESHOLD)
    }
}

/// One viewport-intersection notification for an observed region, mirroring
/// the fields the platform reports per entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    /// Visible fraction of the region, in `[0, 1]`.
    pub ratio: f64,
    /// Whether the region intersects the viewport at all. The platform
    /// delivers an initial notification with `false` for off-screen regions,
    /// so a zero threshold must not latch on it.
    pub intersecting: bool,
}

impl IntersectionSample {
    pub fn new(ratio: f64, intersecting: bool) -> Self {
        IntersectionSample { ratio, intersecting }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RevealPhase {
    Hidden,
    Visible,
}

/// Outcome of feeding one sample to a [`RevealLatch`].
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// Threshold not yet satisfied; keep observing.
    StillHidden,
    /// First sufficient intersection. The caller must deregister interest in
    /// the region now; the latch will never transition again.
    Latched,
    /// The latch already fired; the notification has no effect.
    AlreadyVisible,
}

/// One-shot visibility latch for a single observed region.
///
/// Two states, one legal transition: `Hidden -> Visible` on the first sample
/// that satisfies the threshold. There is no path back, so "once visible,
/// always visible" holds structurally. Each rendered section owns its own
/// latch; nothing is shared between regions.
#[derive(Debug, Clone)]
pub struct RevealLatch {
    phase: RevealPhase,
    threshold: IntersectionThreshold,
}

impl RevealLatch {
    pub fn new(threshold: IntersectionThreshold) -> Self {
        RevealLatch {
            phase: RevealPhase::Hidden,
            threshold,
        }
    }

    pub fn threshold(&self) -> IntersectionThreshold {
        self.threshold
    }

    pub fn is_visible(&self) -> bool {
        self.phase == RevealPhase::Visible
    }

    /// Feeds one intersection notification to the latch.
    ///
    /// Returns [`Observation::Latched`] exactly once, on the first sample
    /// with `intersecting` set and `ratio` at or above the threshold. Callers
    /// are expected to stop observing the region in that arm, which bounds
    /// the mechanism to O(1) wake-ups per region.
    pub fn record(&mut self, sample: IntersectionSample) -> Observation {
        match self.phase {
            RevealPhase::Visible => Observation::AlreadyVisible,
            RevealPhase::Hidden
                if sample.intersecting && sample.ratio >= self.threshold.fraction() =>
            {
                self.phase = RevealPhase::Visible;
                tracing::debug!(ratio = sample.ratio, "region became visible");
                Observation::Latched
            }
            RevealPhase::Hidden => Observation::StillHidden,
        }
    }
}

impl Default for RevealLatch {
    fn default() -> Self {
        RevealLatch::new(IntersectionThreshold::default())
    }
}
