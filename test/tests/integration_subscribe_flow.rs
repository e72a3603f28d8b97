/// End-to-end subscriber flow: ring indices, slot updates, history edge
/// styling and z-ordering across a stream of samples for one key

use shapes_engine::{
    ArtifactId, Color, InstanceKey, ShapeKind, THIN_EDGE_LINE_WIDTH, WIDE_EDGE_LINE_WIDTH,
};
use shapes_test::{engine_with_depth, sample_at, SampleBuilder};

fn square_red() -> InstanceKey {
    InstanceKey::new(ShapeKind::Square, Color::Red)
}

#[test]
fn first_sample_creates_a_bold_instance() {
    let mut engine = engine_with_depth(3);
    let key = square_red();

    engine
        .handle_sample(&sample_at(key.kind, key.color, (100, 100), "pub-A", 1))
        .unwrap();

    let artifact = engine
        .artifacts()
        .get(&ArtifactId::Instance { key, index: 0 })
        .expect("first sample must produce instance 0");
    assert_eq!(artifact.style.line_width, WIDE_EDGE_LINE_WIDTH);

    // center lands in the render frame: y flipped against the 270 limit
    let slot = engine.slot(&key).unwrap();
    assert_eq!(slot.center(), (100, 170));
    assert_eq!(slot.half_extent(), 15);
    assert_eq!(slot.sequence(), 1);
}

#[test]
fn history_rotates_and_demotes_the_previous_edge() {
    let mut engine = engine_with_depth(3);
    let key = square_red();

    for seq in 1..=4 {
        let x = 100 + i32::try_from(seq).unwrap() * 5;
        engine
            .handle_sample(&sample_at(key.kind, key.color, (x, 100), "pub-A", seq))
            .unwrap();
    }

    // 4 samples over depth 3: indices 0,1,2 then wrap to 0
    let ids: Vec<ArtifactId> = (0..3)
        .map(|index| ArtifactId::Instance { key, index })
        .collect();
    for id in &ids {
        assert!(engine.artifacts().contains_key(id));
    }

    // the wrapped index 0 is newest and bold; index 2 was demoted
    let newest = engine.artifacts().get(&ids[0]).unwrap();
    let demoted = engine.artifacts().get(&ids[2]).unwrap();
    assert_eq!(newest.style.line_width, WIDE_EDGE_LINE_WIDTH);
    assert_eq!(demoted.style.line_width, THIN_EDGE_LINE_WIDTH);

    // newer samples draw above older ones
    assert!(newest.style.z_order > demoted.style.z_order);

    assert_eq!(engine.counters().reads(&key), 4);
}

#[test]
fn depth_one_keeps_its_single_bold_edge() {
    let mut engine = engine_with_depth(1);
    let key = square_red();

    for seq in 1..=3 {
        engine
            .handle_sample(&sample_at(key.kind, key.color, (100, 100), "pub-A", seq))
            .unwrap();
    }

    let artifact = engine
        .artifacts()
        .get(&ArtifactId::Instance { key, index: 0 })
        .unwrap();
    assert_eq!(artifact.style.line_width, WIDE_EDGE_LINE_WIDTH);
    assert_eq!(engine.artifacts().len(), 1);
}

#[test]
fn invalid_samples_never_reach_the_pipeline() {
    let mut engine = engine_with_depth(3);
    let key = square_red();

    engine
        .handle_sample(
            &SampleBuilder::new(key.kind, key.color)
                .invalid()
                .build(),
        )
        .unwrap();

    assert!(engine.artifacts().is_empty());
    assert_eq!(engine.counters().reads(&key), 0);
}

#[test]
fn extended_attributes_flow_into_the_artifact() {
    let mut engine = engine_with_depth(1);
    let key = InstanceKey::new(ShapeKind::Triangle, Color::Yellow);

    engine
        .handle_sample(
            &SampleBuilder::new(key.kind, key.color)
                .at((50, 50))
                .size(40)
                .angle(90.0)
                .fill_kind(2)
                .build(),
        )
        .unwrap();

    let artifact = engine
        .artifacts()
        .get(&ArtifactId::Instance { key, index: 0 })
        .unwrap();
    assert_eq!(artifact.style.hatch, Some("--"));
    // hatched: white face, base color on the edge
    assert_eq!(artifact.style.face_color, Color::White.rgb_code());
    assert_eq!(artifact.style.edge_color, Color::Yellow.rgb_code());

    let slot = engine.slot(&key).unwrap();
    assert_eq!(slot.angle_degrees(), Some(90.0));
    assert_eq!(slot.half_extent(), 20);
}

#[test]
fn independent_keys_keep_independent_histories() {
    let mut engine = engine_with_depth(2);
    let red = square_red();
    let blue = InstanceKey::new(ShapeKind::Square, Color::Blue);

    engine
        .handle_sample(&sample_at(red.kind, red.color, (10, 10), "pub-A", 1))
        .unwrap();
    engine
        .handle_sample(&sample_at(blue.kind, blue.color, (20, 20), "pub-B", 1))
        .unwrap();
    engine
        .handle_sample(&sample_at(red.kind, red.color, (30, 30), "pub-A", 2))
        .unwrap();

    assert!(engine
        .artifacts()
        .contains_key(&ArtifactId::Instance { key: red, index: 1 }));
    // blue only ever consumed index 0
    assert!(engine
        .artifacts()
        .contains_key(&ArtifactId::Instance { key: blue, index: 0 }));
    assert!(!engine
        .artifacts()
        .contains_key(&ArtifactId::Instance { key: blue, index: 1 }));
}
