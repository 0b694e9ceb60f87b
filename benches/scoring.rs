//! End-to-end scoring benchmark: raw features → validation → encoding →
//! forest → risk evaluation, with and without the session write.

use botwatch::features::ScrollEncoder;
use botwatch::model::{Forest, ModelBundle, Node, Tree, BUNDLE_SCHEMA_VERSION};
use botwatch::service::PredictionService;
use botwatch::session::SessionStore;
use botwatch::FeatureVector;
use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;

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

fn bench_bundle() -> ModelBundle {
    let trees = (0..100)
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

fn features() -> FeatureVector {
    FeatureVector {
        mouse_movement: 1.0,
        typing_speed: 900.0,
        click_pattern: 0.2,
        time_spent: 3.0,
        scroll_behavior: "none".to_string(),
        captcha_success: 0,
        form_fill_time: 2.0,
    }
}

fn bench_stateless_predict(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let service = PredictionService::new(
        Some(Arc::new(bench_bundle())),
        SessionStore::new(dir.path()),
    );
    let input = features();

    c.bench_function("service_predict", |b| {
        b.iter(|| service.predict(black_box(&input)).unwrap())
    });
}

fn bench_session_predict(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let service = PredictionService::new(
        Some(Arc::new(bench_bundle())),
        SessionStore::new(dir.path()),
    );
    let input = features();

    // Includes the session mint and the durable write.
    c.bench_function("service_predict_session", |b| {
        b.iter(|| service.predict_session(black_box(&input)).unwrap())
    });
}

criterion_group!(benches, bench_stateless_predict, bench_session_predict);
criterion_main!(benches);
