//! Engine layer graph
//!
//! The layer graph is the engine-side scene graph the UI renders through.
//! Every root and element owns one layer; a layer carries a translation
//! relative to its parent and a visibility flag, and can be given a custom
//! hit test through [`HitTester`].
//!
//! ```text
//! scene root layer
//!   ├── root layer (hit tester: Root)
//!   │     ├── element layer
//!   │     └── group layer
//!   │           └── element layer
//!   └── root layer
//! ```

mod layer_graph;

pub use layer_graph::{HitTester, Layer, LayerGraph, SceneError};
