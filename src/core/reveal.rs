/// One-shot visibility bookkeeping for fade-in elements, keyed by index.
///
/// An element is revealed the first time it reports an intersection and
/// never again, whatever the observer reports afterwards.
#[derive(Clone, Debug)]
pub struct RevealTracker {
    threshold: f64,
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(count: usize, threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            revealed: vec![false; count],
        }
    }

    /// Visibility ratio the observer should report crossings at.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    /// Returns `true` exactly once per element: on its first intersection.
    /// Unknown indices are ignored.
    pub fn on_intersection(&mut self, index: usize, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        match self.revealed.get_mut(index) {
            Some(seen) if !*seen => {
                *seen = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Elements still waiting for their first intersection.
    pub fn pending(&self) -> usize {
        self.revealed.iter().filter(|r| !**r).count()
    }
}
