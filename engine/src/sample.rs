use crate::liveliness::ProducerHandle;
use crate::types::InstanceKey;

/// One positional sample as delivered by the transport collaborator.
/// Coordinates are in the source frame (origin top-left, Y down); `size` is
/// the full top-to-bottom extent.
#[derive(Clone, Debug)]
pub struct ShapeSample {
    pub key: InstanceKey,
    pub x: i32,
    pub y: i32,
    pub size: i32,
    pub angle: Option<f32>,
    pub fill_kind: Option<u8>,
    pub producer: ProducerHandle,
    pub sequence: u64,
    /// False for metadata-only samples; the caller filters those out
    /// before the engine sees them
    pub valid: bool,
}

/// Out-of-band liveliness notification from the transport
#[derive(Clone, Debug)]
pub enum LivelinessEvent {
    Lost(ProducerHandle),
    Changed(ProducerHandle),
}
