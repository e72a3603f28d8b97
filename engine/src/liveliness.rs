use std::collections::{HashMap, HashSet};
use std::fmt;

use log::{debug, warn};

use crate::types::InstanceKey;

/// Opaque identity of a remote publisher, as supplied by the transport.
/// The engine never controls a producer's lifetime; it only reacts to
/// state-change notifications naming one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ProducerHandle(String);

impl ProducerHandle {
    pub fn new(identity: impl Into<String>) -> Self {
        Self(identity.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProducerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of registering a sample with the tracker
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// Key is alive and tracked (first sample or routine update)
    Tracked,
    /// Key had been marked gone; the caller must drop its gone-mark
    /// artifacts and resume normal updates
    ClearedGone,
}

/// Maps remote-producer identity to the instance keys it has contributed
/// samples for, and drives the per-key Alive → Gone → Alive transitions.
///
/// A key that has never received a sample does not exist here: absence
/// means "no data yet", not a third state.
pub struct LivelinessTracker {
    owned_keys: HashMap<ProducerHandle, HashSet<InstanceKey>>,
    gone_keys: HashSet<InstanceKey>,
}

impl LivelinessTracker {
    pub fn new() -> Self {
        Self {
            owned_keys: HashMap::new(),
            gone_keys: HashSet::new(),
        }
    }

    /// Idempotently record that `producer` contributed a sample for `key`.
    /// A gone key transitions back to alive on any valid sample, whichever
    /// producer sent it.
    pub fn register_sample(&mut self, producer: &ProducerHandle, key: InstanceKey) -> RegisterOutcome {
        self.owned_keys
            .entry(producer.clone())
            .or_default()
            .insert(key);
        if self.gone_keys.remove(&key) {
            debug!("{key} back alive via {producer}");
            RegisterOutcome::ClearedGone
        } else {
            RegisterOutcome::Tracked
        }
    }

    /// Mark every key owned by `producer` gone and return them; the caller
    /// produces the gone-mark artifact per key. A producer with no
    /// registered keys is a no-op: it can legitimately go away before ever
    /// publishing a valid sample.
    pub fn mark_producer_gone(&mut self, producer: &ProducerHandle) -> Vec<InstanceKey> {
        let Some(keys) = self.owned_keys.get(producer) else {
            warn!("liveliness lost for unknown producer {producer}");
            return Vec::new();
        };
        let mut gone: Vec<InstanceKey> = keys.iter().copied().collect();
        gone.sort_by_key(|key| key.to_string());
        for key in &gone {
            self.gone_keys.insert(*key);
        }
        gone
    }

    /// A producer reappearing is only observed indirectly through new
    /// samples (see `register_sample`); there is no immediate action here.
    pub fn mark_producer_alive(&mut self, producer: &ProducerHandle) {
        debug!("liveliness regained for {producer}");
    }

    pub fn is_gone(&self, key: &InstanceKey) -> bool {
        self.gone_keys.contains(key)
    }

    /// Keys this producer has contributed samples for
    pub fn keys_of(&self, producer: &ProducerHandle) -> Option<&HashSet<InstanceKey>> {
        self.owned_keys.get(producer)
    }

    pub fn producer_count(&self) -> usize {
        self.owned_keys.len()
    }
}

impl Default for LivelinessTracker {
    fn default() -> Self {
        Self::new()
    }
}
