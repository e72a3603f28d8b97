/// End-to-end publisher flow: first-tick emission, wall bounces with delta
/// write-back, angle advance, and z-order renormalization over a long run

use shapes_engine::{
    ArtifactId, Color, EngineError, FillKind, InstanceKey, PublishSpec, ShapeKind,
    RENORMALIZE_THRESHOLD, THIN_EDGE_LINE_WIDTH, ZORDER_BASE,
};
use shapes_test::engine_with_depth;

fn square_red() -> InstanceKey {
    InstanceKey::new(ShapeKind::Square, Color::Red)
}

fn fast_spec() -> PublishSpec {
    PublishSpec {
        start_xy: (50, 50),
        delta_xy: (250, 0),
        shapesize: 30,
        fill: FillKind::Solid,
        angle: 0.0,
        delta_angle: 2.0,
    }
}

#[test]
fn first_tick_emits_the_starting_pose_unmoved() {
    let mut engine = engine_with_depth(1);
    let key = square_red();
    engine.add_publication(key, fast_spec());

    let published = engine.publish_tick(&key).unwrap();

    assert_eq!((published.x, published.y), (50, 50));
    assert_eq!(published.size, 30);
    assert_eq!(published.angle, 0.0);
    assert_eq!(published.sequence, 1);

    let artifact = engine
        .artifacts()
        .get(&ArtifactId::Instance { key, index: 0 })
        .unwrap();
    // publishers render thin with the neutral outline
    assert_eq!(artifact.style.line_width, THIN_EDGE_LINE_WIDTH);
    assert_eq!(artifact.style.edge_color, Color::White.rgb_code());
}

#[test]
fn oversized_step_bounces_off_the_far_wall() {
    let mut engine = engine_with_depth(1);
    let key = square_red();
    engine.add_publication(key, fast_spec());

    engine.publish_tick(&key).unwrap();
    let second = engine.publish_tick(&key).unwrap();

    // 50 + 250 + 30 > 240, so the center snaps to 240 - 30
    assert_eq!(second.x, 210);
    assert_eq!(second.y, 50);
    assert_eq!(second.angle, 2.0);

    // the stored delta was negated: next tick heads back and hits the
    // near wall (210 - 250 - 30 < 0)
    let third = engine.publish_tick(&key).unwrap();
    assert_eq!(third.x, 30);
    assert_eq!(third.angle, 4.0);
}

#[test]
fn publish_tick_requires_a_registered_spec() {
    let mut engine = engine_with_depth(1);
    let key = square_red();

    let result = engine.publish_tick(&key);

    assert!(matches!(
        result,
        Err(EngineError::UnknownPublication { key: k }) if k == key
    ));
}

#[test]
fn long_runs_renormalize_draw_orders() {
    let mut engine = engine_with_depth(1);
    let key = square_red();
    engine.add_publication(
        key,
        PublishSpec {
            delta_xy: (5, 5),
            ..PublishSpec::default()
        },
    );

    for _ in 0..2000 {
        engine.publish_tick(&key).unwrap();
    }

    for artifact in engine.artifacts().values() {
        assert!(artifact.style.z_order <= RENORMALIZE_THRESHOLD);
        assert!(artifact.style.z_order > ZORDER_BASE);
    }
    assert_eq!(engine.counters().writes(&key), 2000);
}

#[test]
fn motion_never_leaves_the_frame() {
    let mut engine = engine_with_depth(1);
    let key = square_red();
    engine.add_publication(
        key,
        PublishSpec {
            start_xy: (50, 50),
            delta_xy: (7, 11),
            shapesize: 30,
            ..PublishSpec::default()
        },
    );

    for _ in 0..500 {
        let published = engine.publish_tick(&key).unwrap();
        let (x, y) = (published.x, published.y);
        assert!((15..=225).contains(&x), "x out of range: {x}");
        assert!((15..=255).contains(&y), "y out of range: {y}");
    }
}
