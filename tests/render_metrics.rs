use metrics_util::debugging::{DebugValue, DebuggingRecorder, Snapshotter};
use serde_json::json;

use advertorial::application::generator::{Angle, Archetype, ProductInput, generate};
use advertorial::application::render::{RenderOptions, render_block};
use advertorial::domain::block::Block;
use advertorial::domain::id::BlockIdGenerator;

fn counter_value(snapshotter: &Snapshotter, name: &str) -> u64 {
    snapshotter
        .snapshot()
        .into_vec()
        .into_iter()
        .filter(|(key, _, _, _)| key.key().name() == name)
        .map(|(_, _, _, value)| match value {
            DebugValue::Counter(count) => count,
            other => panic!("{name} is not a counter: {other:?}"),
        })
        .sum()
}

#[test]
fn generation_counts_emitted_blocks() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    let emitted = metrics::with_local_recorder(&recorder, || {
        let ids = BlockIdGenerator::new();
        let input = ProductInput {
            title: "Glow Serum".into(),
            description: "A brightening serum.".into(),
        };
        generate(&input, Archetype::Minimal, Angle::Pain, &ids).len() as u64
    });

    assert_eq!(
        counter_value(&snapshotter, "advertorial_blocks_generated_total"),
        emitted
    );
}

#[test]
fn unknown_blocks_are_counted_as_dropped() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();

    metrics::with_local_recorder(&recorder, || {
        let bogus: Block = serde_json::from_value(json!({
            "id": "x1", "type": "hologram"
        }))
        .expect("deserialize");
        let html = render_block(&bogus, &RenderOptions::default());
        assert!(html.is_empty());
    });

    assert_eq!(
        counter_value(&snapshotter, "advertorial_blocks_dropped_total"),
        1
    );
}
