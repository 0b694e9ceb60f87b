//! Pretrained ensemble classifier: native evaluation of a serialized
//! random forest, co-versioned with its scroll-behavior encoder.

mod bundle;
mod forest;

pub use bundle::{BundleError, ModelBundle, BUNDLE_SCHEMA_VERSION};
pub use forest::{Forest, Node, Tree};
