use crate::style::ArtifactStyle;
use crate::types::InstanceKey;

/// Identifies one renderable artifact. An instance stream owns one artifact
/// per history index, plus at most one gone mark while its producer is lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArtifactId {
    Instance { key: InstanceKey, index: usize },
    Gone { key: InstanceKey },
}

impl ArtifactId {
    pub fn key(&self) -> InstanceKey {
        match self {
            ArtifactId::Instance { key, .. } | ArtifactId::Gone { key } => *key,
        }
    }
}

/// Render-frame geometry handed to the external renderer
#[derive(Clone, Debug, PartialEq)]
pub enum ArtifactGeometry {
    /// Circles are center + radius; the renderer owns tessellation
    Circle { center: (f64, f64), radius: f64 },
    /// Closed polygon through the listed vertices
    Polygon { vertices: Vec<(f64, f64)> },
    /// Open polyline, used for the gone mark
    Polyline { points: Vec<(f64, f64)> },
}

/// One renderable polygon: geometry plus style. Replaced or inserted into
/// the artifact map on every engine invocation; the engine does not own it
/// past emission.
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonArtifact {
    pub geometry: ArtifactGeometry,
    pub style: ArtifactStyle,
}
