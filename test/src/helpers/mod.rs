pub mod sample_builder;

pub use sample_builder::{engine_with_depth, sample, sample_at, SampleBuilder};
