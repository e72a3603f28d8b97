use thiserror::Error;

/// Errors that can occur constructing an InstanceRing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    /// A ring with no slots cannot track any history
    #[error("InstanceRing requires a capacity of at least 1")]
    InvalidCapacity,
}

/// Bounded rotating index generator. Hands out up to `capacity` instance
/// indices for successive samples of one key, so the most recent positions
/// can be rendered as a fading history without asking the transport layer
/// for its resource limits on every sample.
pub struct InstanceRing {
    capacity: usize,
    cursor: usize,
}

impl InstanceRing {
    pub fn new(capacity: usize) -> Result<Self, RingError> {
        if capacity == 0 {
            return Err(RingError::InvalidCapacity);
        }
        Ok(Self {
            capacity,
            cursor: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the current index and advances the cursor
    pub fn next(&mut self) -> usize {
        let at = self.cursor;
        self.cursor = (self.cursor + 1) % self.capacity;
        at
    }

    /// The index most recently returned by `next`, without advancing.
    /// Peeked before `next` it names the instance whose bold edge should be
    /// demoted in favor of the incoming one.
    pub fn previous_index(&self) -> usize {
        (self.cursor + self.capacity - 1) % self.capacity
    }
}
