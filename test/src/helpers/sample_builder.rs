use shapes_engine::{
    Color, EngineConfig, InstanceKey, InstanceStateEngine, ProducerHandle, ShapeKind, ShapeSample,
};

/// Engine over the stock 240x270 frame with the given history depth
pub fn engine_with_depth(history_depth: usize) -> InstanceStateEngine {
    InstanceStateEngine::new(EngineConfig {
        history_depth,
        ..EngineConfig::default()
    })
    .unwrap()
}

/// A valid sample with stock size and no extended attributes
pub fn sample(kind: ShapeKind, color: Color, producer: &str, sequence: u64) -> ShapeSample {
    sample_at(kind, color, (100, 100), producer, sequence)
}

pub fn sample_at(
    kind: ShapeKind,
    color: Color,
    xy: (i32, i32),
    producer: &str,
    sequence: u64,
) -> ShapeSample {
    SampleBuilder::new(kind, color).at(xy).sequence(sequence).producer(producer).build()
}

/// Builder for samples that need extended attributes
pub struct SampleBuilder {
    key: InstanceKey,
    xy: (i32, i32),
    size: i32,
    angle: Option<f32>,
    fill_kind: Option<u8>,
    producer: String,
    sequence: u64,
    valid: bool,
}

impl SampleBuilder {
    pub fn new(kind: ShapeKind, color: Color) -> Self {
        Self {
            key: InstanceKey::new(kind, color),
            xy: (100, 100),
            size: 30,
            angle: None,
            fill_kind: None,
            producer: "producer-1".to_string(),
            sequence: 1,
            valid: true,
        }
    }

    pub fn at(mut self, xy: (i32, i32)) -> Self {
        self.xy = xy;
        self
    }

    pub fn size(mut self, size: i32) -> Self {
        self.size = size;
        self
    }

    pub fn angle(mut self, angle: f32) -> Self {
        self.angle = Some(angle);
        self
    }

    pub fn fill_kind(mut self, fill_kind: u8) -> Self {
        self.fill_kind = Some(fill_kind);
        self
    }

    pub fn producer(mut self, producer: &str) -> Self {
        self.producer = producer.to_string();
        self
    }

    pub fn sequence(mut self, sequence: u64) -> Self {
        self.sequence = sequence;
        self
    }

    pub fn invalid(mut self) -> Self {
        self.valid = false;
        self
    }

    pub fn build(self) -> ShapeSample {
        ShapeSample {
            key: self.key,
            x: self.xy.0,
            y: self.xy.1,
            size: self.size,
            angle: self.angle,
            fill_kind: self.fill_kind,
            producer: ProducerHandle::new(self.producer),
            sequence: self.sequence,
            valid: self.valid,
        }
    }
}
