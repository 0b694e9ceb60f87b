//! Shared fixtures: a small deterministic forest bundle and feature vectors
//! with known outcomes.

#![allow(dead_code)]

use botwatch::features::ScrollEncoder;
use botwatch::model::{Forest, ModelBundle, Node, Tree, BUNDLE_SCHEMA_VERSION};
use botwatch::FeatureVector;
use chrono::Utc;

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

/// Three-stump ensemble over captcha_success, mouse_movement and
/// typing_speed. bot_features() scores 2.6/3, human_features() 0.4/3.
pub fn test_bundle() -> ModelBundle {
    ModelBundle {
        schema_version: BUNDLE_SCHEMA_VERSION,
        model_type: "RandomForestClassifier".to_string(),
        version: "test-1".to_string(),
        trained_at: Utc::now(),
        threshold: 0.5,
        encoder: ScrollEncoder::fit(["minimal", "none", "normal", "rapid"]),
        forest: Forest {
            trees: vec![
                stump(5, 0.5, 45, 5),   // failed captcha looks bot-like
                stump(0, 2.5, 40, 10),  // low mouse movement looks bot-like
                stump(1, 800.0, 5, 45), // fast typing looks bot-like
            ],
        },
    }
}

pub fn bot_features() -> FeatureVector {
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

pub fn human_features() -> FeatureVector {
    FeatureVector {
        mouse_movement: 8.0,
        typing_speed: 240.0,
        click_pattern: 0.8,
        time_spent: 120.0,
        scroll_behavior: "normal".to_string(),
        captcha_success: 1,
        form_fill_time: 35.0,
    }
}
