//! Inference benchmark: encoded vector → forest probability, by ensemble size.

use botwatch::features::ScrollEncoder;
use botwatch::model::{Forest, ModelBundle, Node, Tree, BUNDLE_SCHEMA_VERSION};
use botwatch::EncodedFeatureVector;
use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn stump(feature: usize, threshold: f64, left_bot: u32, right_bot: u32) -> Tree {
    Tree {
        nodes: vec![
            Node::Split {
                feature,
                threshold,
                left: 1,
                right: 2,
            },
            Node::Leaf {
                bot: left_bot,
                total: 50,
            },
            Node::Leaf {
                bot: right_bot,
                total: 50,
            },
        ],
    }
}

fn bundle_with_trees(n: usize) -> ModelBundle {
    let trees = (0..n)
        .map(|i| {
            let bot = (i % 50) as u32;
            stump(i % 7, (i % 10) as f64, bot, 50 - bot)
        })
        .collect();
    ModelBundle {
        schema_version: BUNDLE_SCHEMA_VERSION,
        model_type: "RandomForestClassifier".to_string(),
        version: "bench".to_string(),
        trained_at: Utc::now(),
        threshold: 0.5,
        encoder: ScrollEncoder::fit(["minimal", "none", "normal", "rapid"]),
        forest: Forest { trees },
    }
}

fn encoded() -> EncodedFeatureVector {
    EncodedFeatureVector {
        mouse_movement: 1.0,
        typing_speed: 900.0,
        click_pattern: 0.2,
        time_spent: 3.0,
        scroll_behavior_code: 1,
        captcha_success: 0,
        form_fill_time: 2.0,
    }
}

fn bench_predict_probability(c: &mut Criterion) {
    let bundle = bundle_with_trees(100);
    let features = encoded();

    c.bench_function("predict_probability_100_trees", |b| {
        b.iter(|| bundle.predict_probability(black_box(&features)))
    });
}

fn bench_predict_by_forest_size(c: &mut Criterion) {
    let features = encoded();
    let mut g = c.benchmark_group("predict_by_forest_size");
    for n in [10, 50, 100, 200] {
        let bundle = bundle_with_trees(n);
        g.bench_function(format!("trees_{}", n).as_str(), |b| {
            b.iter(|| bundle.predict_probability(black_box(&features)))
        });
    }
    g.finish();
}

criterion_group!(benches, bench_predict_probability, bench_predict_by_forest_size);
criterion_main!(benches);
