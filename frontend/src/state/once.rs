/// Browsers can report a ratio a hair under the configured threshold.
const RATIO_EPSILON: f64 = 1e-3;

/// A visibility trigger that fires at most once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OneShot {
    fired: bool,
}

impl OneShot {
    /// Returns true for the first report that is intersecting with at least
    /// `threshold` of the element visible.
    pub fn offer(&mut self, intersecting: bool, ratio: f64, threshold: f64) -> bool {
        if self.fired || !intersecting || ratio + RATIO_EPSILON < threshold {
            return false;
        }
        self.fired = true;
        true
    }
}
