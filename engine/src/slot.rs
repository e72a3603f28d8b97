use crate::types::{FillKind, ShapeKind};

/// One shape's normalized geometric and visual state. Created on the first
/// sample (subscriber) or first publish tick (publisher) for its key,
/// mutated in place afterwards, and removed only by gone-cleanup.
pub struct InstanceSlot {
    kind: ShapeKind,
    sequence: u64,
    center: (i32, i32),
    half_extent: i32,
    angle_degrees: Option<f32>,
    fill: FillKind,
    gone: bool,
    z_order: i64,
}

impl InstanceSlot {
    /// `center` is in the render frame (bottom-left origin, Y up);
    /// `half_extent` is `floor(size / 2)`, clamped non-negative.
    pub(crate) fn new(
        kind: ShapeKind,
        sequence: u64,
        center: (i32, i32),
        size: i32,
        angle_degrees: Option<f32>,
        fill: FillKind,
    ) -> Self {
        Self {
            kind,
            sequence,
            center,
            half_extent: (size / 2).max(0),
            angle_degrees,
            fill,
            gone: false,
            z_order: 0,
        }
    }

    /// The kind never changes after construction
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Reception/publish order. Recorded for staleness diagnostics only;
    /// it does not order application.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn center(&self) -> (i32, i32) {
        self.center
    }

    pub fn half_extent(&self) -> i32 {
        self.half_extent
    }

    pub fn angle_degrees(&self) -> Option<f32> {
        self.angle_degrees
    }

    pub fn fill(&self) -> FillKind {
        self.fill
    }

    pub fn is_gone(&self) -> bool {
        self.gone
    }

    pub fn z_order(&self) -> i64 {
        self.z_order
    }

    pub(crate) fn update(
        &mut self,
        sequence: u64,
        center: (i32, i32),
        size: i32,
        angle_degrees: Option<f32>,
        fill: FillKind,
    ) {
        self.sequence = sequence;
        self.center = center;
        self.half_extent = (size / 2).max(0);
        self.angle_degrees = angle_degrees;
        self.fill = fill;
    }

    pub(crate) fn set_center(&mut self, center: (i32, i32)) {
        self.center = center;
    }

    pub(crate) fn set_angle(&mut self, angle_degrees: Option<f32>) {
        self.angle_degrees = angle_degrees;
    }

    pub(crate) fn set_gone(&mut self, gone: bool) {
        self.gone = gone;
    }

    pub(crate) fn set_z_order(&mut self, z_order: i64) {
        self.z_order = z_order;
    }

    pub(crate) fn z_order_mut(&mut self) -> &mut i64 {
        &mut self.z_order
    }
}
