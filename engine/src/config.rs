use crate::types::FillKind;

/// Read-only construction surface for the engine, fed by the external
/// config/CLI collaborator.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Bounded history depth per key, sourced from the transport's
    /// configured resource limit
    pub history_depth: usize,
    /// Inclusive per-axis bounds of the frame; the Y limit doubles as the
    /// frame height for the coordinate transform
    pub limit_xy: (i32, i32),
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_depth: 1,
            limit_xy: (240, 270),
        }
    }
}

/// Motion spec for one published key: starting pose plus per-tick deltas.
/// Position and deltas are in the source frame.
#[derive(Clone, Debug)]
pub struct PublishSpec {
    pub start_xy: (i32, i32),
    pub delta_xy: (i32, i32),
    pub shapesize: i32,
    pub fill: FillKind,
    pub angle: f32,
    pub delta_angle: f32,
}

impl Default for PublishSpec {
    fn default() -> Self {
        Self {
            start_xy: (50, 50),
            delta_xy: (5, 5),
            shapesize: 30,
            fill: FillKind::Solid,
            angle: 0.0,
            delta_angle: 2.0,
        }
    }
}

/// A content-filter region given as (top-left, bottom-right) corner pair.
/// Only the geometric anchor and extents are computed here; compiling the
/// filter expression belongs to the transport collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterRegion {
    pub top_left: (i32, i32),
    pub bottom_right: (i32, i32),
}

impl FilterRegion {
    pub fn new(top_left: (i32, i32), bottom_right: (i32, i32)) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Anchor of the filter rectangle: the minimum corner
    pub fn anchor(&self) -> (i32, i32) {
        (
            self.top_left.0.min(self.bottom_right.0),
            self.top_left.1.min(self.bottom_right.1),
        )
    }

    /// Extents of the filter rectangle as (height, width)
    pub fn extents(&self) -> (i32, i32) {
        (
            (self.top_left.1 - self.bottom_right.1).abs(),
            (self.top_left.0 - self.bottom_right.0).abs(),
        )
    }
}
