use std::collections::hash_map::Entry;
use std::collections::HashMap;

use log::{debug, info, warn};

use crate::artifact::{ArtifactGeometry, ArtifactId, PolygonArtifact};
use crate::config::{EngineConfig, PublishSpec};
use crate::error::EngineError;
use crate::geometry;
use crate::instance_ring::InstanceRing;
use crate::liveliness::{LivelinessTracker, RegisterOutcome};
use crate::sample::{LivelinessEvent, ShapeSample};
use crate::slot::InstanceSlot;
use crate::style::{ArtifactStyle, THIN_EDGE_LINE_WIDTH};
use crate::types::{FillKind, InstanceKey};
use crate::zorder::{ZOrderAllocator, RENORMALIZE_THRESHOLD, ZORDER_BASE};

/// Per-key counts of received and published samples, for diagnostics
#[derive(Debug, Default)]
pub struct SampleCounters {
    reads: HashMap<InstanceKey, u64>,
    writes: HashMap<InstanceKey, u64>,
}

impl SampleCounters {
    pub fn reads(&self, key: &InstanceKey) -> u64 {
        self.reads.get(key).copied().unwrap_or(0)
    }

    pub fn writes(&self, key: &InstanceKey) -> u64 {
        self.writes.get(key).copied().unwrap_or(0)
    }
}

/// The source-frame sample a publish tick hands back for the external
/// writer: Y flipped back to the transport convention, size restored to the
/// full top-to-bottom extent.
#[derive(Clone, Debug, PartialEq)]
pub struct PublishedSample {
    pub key: InstanceKey,
    pub x: i32,
    pub y: i32,
    pub size: i32,
    pub angle: f32,
    pub fill: FillKind,
    pub sequence: u64,
}

/// Publisher-side motion bookkeeping for one key. The deltas change sign as
/// the shape reflects off walls; the slot holds the pose itself.
struct PublishState {
    delta_xy: (i32, i32),
    delta_angle: f32,
    shapesize: i32,
    fill: FillKind,
}

/// Façade composing ring, geometry, liveliness and z-order handling.
/// Invoked once per externally-delivered sample or animation tick; every
/// call is a synchronous, non-reentrant step with no internal locking.
pub struct InstanceStateEngine {
    config: EngineConfig,
    rings: HashMap<InstanceKey, InstanceRing>,
    slots: HashMap<InstanceKey, InstanceSlot>,
    liveliness: LivelinessTracker,
    zorder: ZOrderAllocator,
    artifacts: HashMap<ArtifactId, PolygonArtifact>,
    publications: HashMap<InstanceKey, PublishState>,
    counters: SampleCounters,
}

impl InstanceStateEngine {
    /// Fails with `InvalidCapacity` when the configured history depth is 0;
    /// that is fatal rather than silently defaulted.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        InstanceRing::new(config.history_depth)?;
        Ok(Self {
            config,
            rings: HashMap::new(),
            slots: HashMap::new(),
            liveliness: LivelinessTracker::new(),
            zorder: ZOrderAllocator::new(ZORDER_BASE),
            artifacts: HashMap::new(),
            publications: HashMap::new(),
            counters: SampleCounters::default(),
        })
    }

    /// Register a key this engine will publish. The first `publish_tick`
    /// for the key emits the spec's starting pose unmoved.
    pub fn add_publication(&mut self, key: InstanceKey, spec: PublishSpec) {
        info!("publishing {key}: {spec:?}");
        let start = (spec.start_xy.0, geometry::flip_y(spec.start_xy.1, self.config.limit_xy.1));
        let mut slot = InstanceSlot::new(key.kind, 0, start, spec.shapesize, Some(spec.angle), spec.fill);
        slot.set_z_order(self.zorder.next());
        self.slots.insert(key, slot);
        self.publications.insert(
            key,
            PublishState {
                delta_xy: spec.delta_xy,
                delta_angle: spec.delta_angle,
                shapesize: spec.shapesize,
                fill: spec.fill,
            },
        );
    }

    pub fn publication_keys(&self) -> impl Iterator<Item = &InstanceKey> {
        self.publications.keys()
    }

    /// Apply one valid subscriber sample: resolve the ring index, update
    /// the slot, restyle the history edges, and refresh liveliness
    /// bookkeeping for the sending producer.
    pub fn handle_sample(&mut self, sample: &ShapeSample) -> Result<(), EngineError> {
        if !sample.valid {
            // callers filter these upstream; never feed the pipeline
            warn!("dropping invalid sample for {}", sample.key);
            return Ok(());
        }
        let key = sample.key;
        *self.counters.reads.entry(key).or_insert(0) += 1;

        if self.liveliness.register_sample(&sample.producer, key) == RegisterOutcome::ClearedGone {
            info!("{key} is back; clearing gone mark");
            self.artifacts.remove(&ArtifactId::Gone { key });
            if let Some(slot) = self.slots.get_mut(&key) {
                slot.set_gone(false);
            }
        }

        let center = (
            sample.x,
            geometry::flip_y(sample.y, self.config.limit_xy.1),
        );
        let fill = sample.fill_kind.map_or(FillKind::Solid, FillKind::from_wire);

        let ring = match self.rings.entry(key) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(InstanceRing::new(self.config.history_depth)?),
        };
        let previous_index = ring.previous_index();
        let index = ring.next();

        let z_order = self.zorder.next();
        let slot = self
            .slots
            .entry(key)
            .and_modify(|slot| {
                if sample.sequence < slot.sequence() {
                    debug!(
                        "stale sequence for {key}: {} < {}",
                        sample.sequence,
                        slot.sequence()
                    );
                }
                slot.update(sample.sequence, center, sample.size, sample.angle, fill);
            })
            .or_insert_with(|| {
                InstanceSlot::new(key.kind, sample.sequence, center, sample.size, sample.angle, fill)
            });
        slot.set_z_order(z_order);

        let geometry =
            geometry::shape_geometry(key.kind, center, slot.half_extent(), slot.angle_degrees());
        let style = ArtifactStyle::shape(key.color, fill, false, z_order);
        debug!("sample {key} seq={} -> instance {index} z={z_order}", sample.sequence);
        self.artifacts
            .insert(ArtifactId::Instance { key, index }, PolygonArtifact { geometry, style });

        // history depth of 1 keeps its single bold edge
        if previous_index != index {
            if let Some(previous) = self
                .artifacts
                .get_mut(&ArtifactId::Instance { key, index: previous_index })
            {
                previous.style.line_width = THIN_EDGE_LINE_WIDTH;
            }
        }
        Ok(())
    }

    /// Advance one published key by a tick: wall-bounce the center, store
    /// the reflected deltas back, advance the angle, and emit the
    /// source-frame sample for the external writer.
    pub fn publish_tick(&mut self, key: &InstanceKey) -> Result<PublishedSample, EngineError> {
        let limit = self.config.limit_xy;
        let state = self
            .publications
            .get_mut(key)
            .ok_or(EngineError::UnknownPublication { key: *key })?;
        let slot = self
            .slots
            .get_mut(key)
            .ok_or(EngineError::UnknownPublication { key: *key })?;
        *self.counters.writes.entry(*key).or_insert(0) += 1;
        let sequence = self.counters.writes.get(key).copied().unwrap_or(0);
        let first_tick = sequence == 1;

        if !first_tick {
            let (center, delta) =
                geometry::bounce(slot.center(), slot.half_extent(), state.delta_xy, limit);
            state.delta_xy = delta;
            slot.set_center(center);
            let angle = slot.angle_degrees().unwrap_or(0.0) + state.delta_angle;
            slot.set_angle(Some(angle));
        }
        let z_order = self.zorder.next();
        slot.set_z_order(z_order);

        let geometry = geometry::shape_geometry(
            key.kind,
            slot.center(),
            slot.half_extent(),
            slot.angle_degrees(),
        );
        let style = ArtifactStyle::shape(key.color, state.fill, true, z_order);
        let published = PublishedSample {
            key: *key,
            x: slot.center().0,
            y: geometry::flip_y(slot.center().1, limit.1),
            size: state.shapesize,
            angle: slot.angle_degrees().unwrap_or(0.0),
            fill: state.fill,
            sequence,
        };
        debug!("publish {key} seq={sequence} center={:?} z={z_order}", slot.center());
        self.artifacts
            .insert(ArtifactId::Instance { key: *key, index: 0 }, PolygonArtifact { geometry, style });

        self.renormalize_zorders();
        Ok(published)
    }

    /// React to a transport liveliness notification. A lost producer's
    /// keys are flagged gone and each gets an "X" polyline overlaying the
    /// shape's last known pose, one draw order above it.
    pub fn handle_liveliness(&mut self, event: &LivelinessEvent) {
        match event {
            LivelinessEvent::Lost(producer) => {
                let gone_keys = self.liveliness.mark_producer_gone(producer);
                for key in gone_keys {
                    self.mark_gone(key);
                }
            }
            LivelinessEvent::Changed(producer) => {
                self.liveliness.mark_producer_alive(producer);
            }
        }
    }

    fn mark_gone(&mut self, key: InstanceKey) {
        let Some(slot) = self.slots.get_mut(&key) else {
            warn!("gone key {key} has no slot");
            return;
        };
        slot.set_gone(true);
        let shape = geometry::shape_geometry(
            key.kind,
            slot.center(),
            slot.half_extent(),
            slot.angle_degrees(),
        );
        let points = geometry::gone_mark_endpoints(&shape);
        let style = ArtifactStyle::gone_mark(key.color, slot.fill(), slot.z_order());
        info!("marking {key} gone");
        self.artifacts.insert(
            ArtifactId::Gone { key },
            PolygonArtifact {
                geometry: ArtifactGeometry::Polyline { points },
                style,
            },
        );
    }

    fn renormalize_zorders(&mut self) {
        let mut zorders: Vec<&mut i64> = self
            .artifacts
            .values_mut()
            .map(|artifact| &mut artifact.style.z_order)
            .chain(self.slots.values_mut().map(InstanceSlot::z_order_mut))
            .collect();
        if self.zorder.maybe_renormalize(&mut zorders, RENORMALIZE_THRESHOLD) {
            debug!("renormalized draw orders past {RENORMALIZE_THRESHOLD}");
        }
    }

    /// The renderable artifacts, replaced/inserted on every invocation.
    /// The renderer draws them; it is never queried by the engine.
    pub fn artifacts(&self) -> &HashMap<ArtifactId, PolygonArtifact> {
        &self.artifacts
    }

    pub fn slot(&self, key: &InstanceKey) -> Option<&InstanceSlot> {
        self.slots.get(key)
    }

    pub fn liveliness(&self) -> &LivelinessTracker {
        &self.liveliness
    }

    pub fn counters(&self) -> &SampleCounters {
        &self.counters
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
