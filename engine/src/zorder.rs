/// Draw orders at or below this value are reserved for background and
/// static artifacts; shape allocations always land above it.
pub const ZORDER_BASE: i64 = 10;

/// When any live draw order passes this, everything above the base is halved
pub const RENORMALIZE_THRESHOLD: i64 = 500;

/// Hands out strictly increasing draw-order values so the most recently
/// updated shape renders on top, with periodic halving to keep the counter
/// bounded across a long-running process.
pub struct ZOrderAllocator {
    base: i64,
    counter: i64,
}

impl ZOrderAllocator {
    pub fn new(base: i64) -> Self {
        Self {
            base,
            counter: base,
        }
    }

    /// Increment and return the counter; always above the reserved base
    pub fn next(&mut self) -> i64 {
        self.counter += 1;
        self.counter
    }

    /// If any current draw order exceeds `threshold`, halve every value
    /// above the reserved base (and the internal counter) in place.
    /// Relative order is preserved: `a < b` before implies `a' <= b'`
    /// after. Values at or below the base are never touched. The counter
    /// clamps to the base so later allocations still land above it.
    ///
    /// Returns whether a renormalization happened.
    pub fn maybe_renormalize(&mut self, zorders: &mut [&mut i64], threshold: i64) -> bool {
        if !zorders.iter().any(|z| **z > threshold) {
            return false;
        }
        for z in zorders {
            if **z > self.base {
                **z /= 2;
            }
        }
        self.counter = (self.counter / 2).max(self.base);
        true
    }
}
