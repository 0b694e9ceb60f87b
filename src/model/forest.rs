//! Random-forest evaluation over the fixed seven-column feature layout.

use crate::features::{EncodedFeatureVector, FEATURE_COUNT};
use serde::{Deserialize, Serialize};

/// One node of a decision tree, stored flat by index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// Internal split: go left when the column value is <= threshold.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Leaf: training-sample class counts.
    Leaf { bot: u32, total: u32 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

impl Tree {
    /// Fraction of bot samples in the leaf this vector lands in.
    /// Node indices are validated at bundle load, so traversal cannot
    /// go out of range or cycle.
    fn bot_fraction(&self, columns: &[f64; FEATURE_COUNT]) -> f64 {
        let mut idx = 0usize;
        loop {
            match &self.nodes[idx] {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if columns[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
                Node::Leaf { bot, total } => {
                    return if *total == 0 {
                        0.0
                    } else {
                        f64::from(*bot) / f64::from(*total)
                    };
                }
            }
        }
    }

    /// Structural check: split features in range, child indices in range and
    /// strictly forward (so evaluation always terminates at a leaf), and leaf
    /// counts that keep the bot fraction inside [0, 1].
    pub(crate) fn validate(&self, tree_index: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err(format!("tree {tree_index} has no nodes"));
        }
        for (i, node) in self.nodes.iter().enumerate() {
            match node {
                Node::Split {
                    feature,
                    left,
                    right,
                    ..
                } => {
                    if *feature >= FEATURE_COUNT {
                        return Err(format!(
                            "tree {tree_index} node {i}: feature index {feature} out of range"
                        ));
                    }
                    if *left <= i
                        || *right <= i
                        || *left >= self.nodes.len()
                        || *right >= self.nodes.len()
                    {
                        return Err(format!(
                            "tree {tree_index} node {i}: child index out of range"
                        ));
                    }
                }
                Node::Leaf { bot, total } => {
                    if *total == 0 || *bot > *total {
                        return Err(format!(
                            "tree {tree_index} node {i}: leaf counts {bot}/{total} invalid"
                        ));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Trained ensemble: bot probability is the mean of per-tree leaf fractions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forest {
    pub trees: Vec<Tree>,
}

impl Forest {
    /// Probability mass assigned to the bot class, in [0, 1].
    pub fn predict_probability(&self, features: &EncodedFeatureVector) -> f64 {
        if self.trees.is_empty() {
            return 0.0;
        }
        let columns = features.to_columns();
        let sum: f64 = self.trees.iter().map(|t| t.bot_fraction(&columns)).sum();
        sum / self.trees.len() as f64
    }
}
