//! # Shapes Engine
//! Core state engine for the moving-shapes pub/sub demo: converts positional
//! samples into renderable polygons, keeps a bounded per-key instance
//! history, computes publisher wall-bounce motion, and tracks remote
//! producer liveliness.
//!
//! The transport, the renderer, and CLI/config parsing are external
//! collaborators: samples and liveliness events come in, polygon artifacts
//! go out, and nothing in here suspends or spawns.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod artifact;
mod config;
mod engine;
mod error;
mod geometry;
mod instance_ring;
mod liveliness;
mod sample;
mod slot;
mod style;
mod types;
mod zorder;

pub use artifact::{ArtifactGeometry, ArtifactId, PolygonArtifact};
pub use config::{EngineConfig, FilterRegion, PublishSpec};
pub use engine::{InstanceStateEngine, PublishedSample, SampleCounters};
pub use error::EngineError;
pub use geometry::{
    bounce, bounce_axis, flip_y, gone_mark_endpoints, rotate_about, shape_geometry,
    square_vertices, triangle_vertices,
};
pub use instance_ring::{InstanceRing, RingError};
pub use liveliness::{LivelinessTracker, ProducerHandle, RegisterOutcome};
pub use sample::{LivelinessEvent, ShapeSample};
pub use slot::InstanceSlot;
pub use style::{
    face_and_edge_colors, ArtifactStyle, THIN_EDGE_LINE_WIDTH, WIDE_EDGE_LINE_WIDTH,
};
pub use types::{Color, FillKind, InstanceKey, ShapeKind, ShapeKindError};
pub use zorder::{ZOrderAllocator, RENORMALIZE_THRESHOLD, ZORDER_BASE};
