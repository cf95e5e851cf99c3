//! Layer graph storage, coordinate transforms and hit traversal

use crate::foundation::collections::{LayerId, SlotMap};
use crate::foundation::math::{Point2, Vec2};

/// Layer graph errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// The layer handle is stale or was never created
    #[error("Unknown layer: {0:?}")]
    UnknownLayer(LayerId),

    /// The scene root layer cannot be removed
    #[error("The scene root layer cannot be removed")]
    RootLayer,
}

/// A node of the layer graph
#[derive(Debug, Clone)]
pub struct Layer {
    parent: Option<LayerId>,
    children: Vec<LayerId>,
    translation: Vec2,
    visible: bool,
}

impl Layer {
    fn new(parent: Option<LayerId>) -> Self {
        Self {
            parent,
            children: Vec::new(),
            translation: Vec2::zeros(),
            visible: true,
        }
    }

    /// Parent layer, `None` for the scene root
    pub fn parent(&self) -> Option<LayerId> {
        self.parent
    }

    /// Child layers in back-to-front order
    pub fn children(&self) -> &[LayerId] {
        &self.children
    }

    /// Translation relative to the parent layer
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Whether this layer (and thus its subtree) is drawn and hit tested
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Custom hit test installed for a layer
///
/// When a layer has a hit tester, the tester alone decides whether the layer
/// is hit; the default traversal of its children is skipped.
pub trait HitTester {
    /// Return `Some(id)` if `point`, in `layer`'s local coordinates, hits it
    fn hit_test(&self, layer: &Layer, id: LayerId, point: Point2) -> Option<LayerId>;
}

/// Engine scene graph of translated layers
#[derive(Debug)]
pub struct LayerGraph {
    layers: SlotMap<LayerId, Layer>,
    root: LayerId,
}

impl LayerGraph {
    /// Create a graph containing only the scene root layer
    pub fn new() -> Self {
        let mut layers = SlotMap::with_key();
        let root = layers.insert(Layer::new(None));
        Self { layers, root }
    }

    /// The scene root layer, positioned at the screen origin
    pub fn root(&self) -> LayerId {
        self.root
    }

    /// Number of layers including the scene root
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether the graph holds only the scene root
    pub fn is_empty(&self) -> bool {
        self.layers.len() <= 1
    }

    /// Get a layer by id
    pub fn get(&self, id: LayerId) -> Option<&Layer> {
        self.layers.get(id)
    }

    /// Check if a layer exists
    pub fn contains(&self, id: LayerId) -> bool {
        self.layers.contains_key(id)
    }

    /// Create a new layer on top of `parent`'s existing children
    pub fn create_layer(&mut self, parent: LayerId) -> Result<LayerId, SceneError> {
        if !self.layers.contains_key(parent) {
            return Err(SceneError::UnknownLayer(parent));
        }
        let id = self.layers.insert(Layer::new(Some(parent)));
        self.layers[parent].children.push(id);
        Ok(id)
    }

    /// Remove a layer and its whole subtree
    pub fn remove(&mut self, id: LayerId) -> Result<(), SceneError> {
        if id == self.root {
            return Err(SceneError::RootLayer);
        }
        let layer = self.layers.remove(id).ok_or(SceneError::UnknownLayer(id))?;
        if let Some(parent) = layer.parent.and_then(|parent| self.layers.get_mut(parent)) {
            parent.children.retain(|child| *child != id);
        }

        let mut pending = layer.children;
        while let Some(child) = pending.pop() {
            if let Some(removed) = self.layers.remove(child) {
                pending.extend(removed.children);
            }
        }
        Ok(())
    }

    /// Set a layer's translation relative to its parent
    pub fn set_translation(&mut self, id: LayerId, x: f32, y: f32) -> Result<(), SceneError> {
        let layer = self.layers.get_mut(id).ok_or(SceneError::UnknownLayer(id))?;
        layer.translation = Vec2::new(x, y);
        Ok(())
    }

    /// Translation of a layer relative to its parent
    pub fn translation(&self, id: LayerId) -> Option<Vec2> {
        self.layers.get(id).map(Layer::translation)
    }

    /// Show or hide a layer
    pub fn set_visible(&mut self, id: LayerId, visible: bool) -> Result<(), SceneError> {
        let layer = self.layers.get_mut(id).ok_or(SceneError::UnknownLayer(id))?;
        layer.visible = visible;
        Ok(())
    }

    /// Whether a layer is visible; unknown layers are not
    pub fn is_visible(&self, id: LayerId) -> bool {
        self.layers.get(id).is_some_and(Layer::is_visible)
    }

    /// Iterate a layer and its ancestors up to the scene root
    pub fn ancestors(&self, id: LayerId) -> impl Iterator<Item = LayerId> + '_ {
        std::iter::successors(self.layers.contains_key(id).then_some(id), move |current| {
            self.layers.get(*current).and_then(Layer::parent)
        })
    }

    /// Sum of translations from the screen origin down to `id`
    pub fn screen_offset(&self, id: LayerId) -> Option<Vec2> {
        if !self.layers.contains_key(id) {
            return None;
        }
        Some(
            self.ancestors(id)
                .filter_map(|layer| self.translation(layer))
                .fold(Vec2::zeros(), |offset, translation| offset + translation),
        )
    }

    /// Convert a screen-space point into `id`'s local coordinate space
    ///
    /// Every ancestor translation is composed, so the result is correct at any
    /// nesting depth and reflects the hierarchy as it is at call time.
    pub fn screen_to_layer(&self, id: LayerId, screen: Point2) -> Option<Point2> {
        self.screen_offset(id).map(|offset| screen - offset)
    }

    /// Find the layer under a screen point
    ///
    /// `testers` supplies the custom hit tester installed for a layer, if any.
    /// Children are tried front to back and invisible layers are skipped along
    /// with their subtrees. A layer without a tester is never hit itself.
    pub fn hit_test<'a, F>(&self, screen: Point2, testers: F) -> Option<LayerId>
    where
        F: Fn(LayerId) -> Option<&'a dyn HitTester>,
    {
        self.hit_layer(self.root, screen, &testers)
    }

    fn hit_layer<'a, F>(&self, id: LayerId, point: Point2, testers: &F) -> Option<LayerId>
    where
        F: Fn(LayerId) -> Option<&'a dyn HitTester>,
    {
        let layer = self.layers.get(id)?;
        if !layer.visible {
            return None;
        }
        let local = point - layer.translation;
        if let Some(tester) = testers(id) {
            return tester.hit_test(layer, id, local);
        }
        layer
            .children
            .iter()
            .rev()
            .find_map(|child| self.hit_layer(*child, local, testers))
    }
}

impl Default for LayerGraph {
    fn default() -> Self {
        Self::new()
    }
}
