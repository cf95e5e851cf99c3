//! Elements: the widgets and groups that live inside a root
//!
//! Every element owns a layer in the interface's layer graph, parented to the
//! layer of its group (or of its root), so positions compose through the
//! graph. The [`Elements`] arena owns the nodes; roots and groups refer to
//! their children by [`ElementId`].

use std::any::Any;
use std::fmt;

use bitflags::bitflags;

use crate::foundation::collections::{ElementId, LayerId, RootId, SlotMap};
use crate::foundation::math::{Dimension, Point2};
use crate::input::collision::point_in_bounds;
use crate::input::{PointerEvent, PointerPhase};
use crate::scene::{LayerGraph, SceneError};
use crate::ui::focus::FocusHost;
use crate::ui::layout::{Layout, Placement};

bitflags! {
    /// Element state flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ElementFlags: u8 {
        /// Accepts pointer input
        const ENABLED = 1 << 0;
        /// Takes part in hit testing
        const INTERACTIVE = 1 << 1;
        /// Layout is up to date
        const VALID = 1 << 2;
    }
}

/// What a widget sees while handling an event
pub struct WidgetContext<'a> {
    /// Element the widget is mounted as
    pub element: ElementId,
    /// Root the element belongs to
    pub root: RootId,
    /// Current laid-out size of the element
    pub size: Dimension,
    /// Focus of the owning interface
    pub focus: &'a mut dyn FocusHost,
}

impl WidgetContext<'_> {
    /// Whether an element-local point lies inside the element
    pub fn contains(&self, local: Point2) -> bool {
        point_in_bounds(local, self.size)
    }
}

/// Leaf element behaviour
///
/// Pointer callbacks receive the event and the point in the element's own
/// coordinate space. All callbacks default to doing nothing.
pub trait Widget: Any {
    /// Preferred size under the given hints (0 = unconstrained)
    fn preferred_size(&self, hint_width: f32, hint_height: f32) -> Dimension;

    /// Whether the widget wants pointer input at all
    fn interactive(&self) -> bool {
        true
    }

    /// A gesture started on this widget
    fn on_pointer_start(&mut self, _cx: &mut WidgetContext<'_>, _event: &PointerEvent, _local: Point2) {}

    /// The gesture this widget owns moved
    fn on_pointer_drag(&mut self, _cx: &mut WidgetContext<'_>, _event: &PointerEvent, _local: Point2) {}

    /// The gesture this widget owns was released
    fn on_pointer_end(&mut self, _cx: &mut WidgetContext<'_>, _event: &PointerEvent, _local: Point2) {}

    /// The gesture this widget owns was aborted
    fn on_pointer_cancel(&mut self, _cx: &mut WidgetContext<'_>, _event: &PointerEvent, _local: Point2) {}

    /// Downcasting support
    fn as_any(&self) -> &dyn Any;

    /// Downcasting support
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Leaf widget or layout group
pub enum ElementKind {
    /// A widget with no children
    Leaf(Box<dyn Widget>),
    /// A container laying out its children
    Group(Box<dyn Layout>),
}

/// A node of the element tree
pub struct Element {
    layer: LayerId,
    parent: Option<ElementId>,
    root: RootId,
    children: Vec<ElementId>,
    size: Dimension,
    flags: ElementFlags,
    kind: ElementKind,
}

impl Element {
    pub(crate) fn new(layer: LayerId, parent: Option<ElementId>, root: RootId, kind: ElementKind) -> Self {
        let mut flags = ElementFlags::ENABLED;
        let interactive = match &kind {
            ElementKind::Leaf(widget) => widget.interactive(),
            ElementKind::Group(_) => false,
        };
        flags.set(ElementFlags::INTERACTIVE, interactive);
        Self {
            layer,
            parent,
            root,
            children: Vec::new(),
            size: Dimension::ZERO,
            flags,
            kind,
        }
    }

    /// Layer this element draws into
    pub fn layer(&self) -> LayerId {
        self.layer
    }

    /// Enclosing group, `None` when directly under the root
    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    /// Owning root
    pub fn root(&self) -> RootId {
        self.root
    }

    /// Child elements (always empty for leaves)
    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    /// Laid-out size
    pub fn size(&self) -> Dimension {
        self.size
    }

    /// State flags
    pub fn flags(&self) -> ElementFlags {
        self.flags
    }

    /// Whether this element is a group
    pub fn is_group(&self) -> bool {
        matches!(self.kind, ElementKind::Group(_))
    }

    /// Element kind
    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    /// Whether the element can be a gesture target itself
    fn hits_self(&self) -> bool {
        self.flags.contains(ElementFlags::INTERACTIVE | ElementFlags::ENABLED)
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<ElementId> {
        &mut self.children
    }

    pub(crate) fn set_flag(&mut self, flag: ElementFlags, value: bool) {
        self.flags.set(flag, value);
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("layer", &self.layer)
            .field("parent", &self.parent)
            .field("root", &self.root)
            .field("children", &self.children)
            .field("size", &self.size)
            .field("flags", &self.flags)
            .field("group", &self.is_group())
            .finish()
    }
}

/// Arena of all elements of an interface
#[derive(Default)]
pub struct Elements {
    nodes: SlotMap<ElementId, Element>,
}

impl Elements {
    /// Create an empty arena
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live elements
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up an element
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.nodes.get(id)
    }

    /// Whether `id` is live
    pub fn contains(&self, id: ElementId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Root owning an element
    pub fn root_of(&self, id: ElementId) -> Option<RootId> {
        self.nodes.get(id).map(Element::root)
    }

    /// Borrow the widget of a leaf as a concrete type
    pub fn widget<T: Widget>(&self, id: ElementId) -> Option<&T> {
        match &self.nodes.get(id)?.kind {
            ElementKind::Leaf(widget) => widget.as_any().downcast_ref::<T>(),
            ElementKind::Group(_) => None,
        }
    }

    /// Mutably borrow the widget of a leaf as a concrete type
    pub fn widget_mut<T: Widget>(&mut self, id: ElementId) -> Option<&mut T> {
        match &mut self.nodes.get_mut(id)?.kind {
            ElementKind::Leaf(widget) => widget.as_any_mut().downcast_mut::<T>(),
            ElementKind::Group(_) => None,
        }
    }

    /// Preferred size of an element under the given hints
    pub fn preferred_size(&self, id: ElementId, layers: &LayerGraph, hint_width: f32, hint_height: f32) -> Dimension {
        let Some(element) = self.nodes.get(id) else {
            return Dimension::ZERO;
        };
        match &element.kind {
            ElementKind::Leaf(widget) => widget.preferred_size(hint_width, hint_height),
            ElementKind::Group(layout) => layout.compute_size(self, layers, &element.children, hint_width, hint_height),
        }
    }

    /// Find the frontmost interactive element under `point`
    ///
    /// `point` is in the space that contains `children` (a root or group).
    /// Returns the element together with the point in its own space.
    pub fn hit_test(&self, layers: &LayerGraph, children: &[ElementId], point: Point2) -> Option<(ElementId, Point2)> {
        children
            .iter()
            .rev()
            .find_map(|child| self.hit_element(layers, *child, point))
    }

    fn hit_element(&self, layers: &LayerGraph, id: ElementId, point: Point2) -> Option<(ElementId, Point2)> {
        let element = self.nodes.get(id)?;
        let layer = layers.get(element.layer)?;
        if !layer.is_visible() {
            return None;
        }
        let local = point - layer.translation();
        if !point_in_bounds(local, element.size) {
            return None;
        }
        if let Some(hit) = self.hit_test(layers, &element.children, local) {
            return Some(hit);
        }
        element.hits_self().then_some((id, local))
    }

    /// Convert a screen point into an element's space
    pub fn to_local(&self, id: ElementId, layers: &LayerGraph, screen: Point2) -> Option<Point2> {
        let element = self.nodes.get(id)?;
        layers.screen_to_layer(element.layer, screen)
    }

    /// Hand an event to a leaf widget; returns `false` if `id` is gone
    pub(crate) fn dispatch(
        &mut self,
        id: ElementId,
        focus: &mut dyn FocusHost,
        event: &PointerEvent,
        local: Point2,
    ) -> bool {
        let Some(element) = self.nodes.get_mut(id) else {
            return false;
        };
        let mut cx = WidgetContext {
            element: id,
            root: element.root,
            size: element.size,
            focus,
        };
        if let ElementKind::Leaf(widget) = &mut element.kind {
            match event.phase {
                PointerPhase::Start => widget.on_pointer_start(&mut cx, event, local),
                PointerPhase::Drag => widget.on_pointer_drag(&mut cx, event, local),
                PointerPhase::End => widget.on_pointer_end(&mut cx, event, local),
                PointerPhase::Cancel => widget.on_pointer_cancel(&mut cx, event, local),
            }
        }
        true
    }

    pub(crate) fn insert(&mut self, element: Element) -> ElementId {
        self.nodes.insert(element)
    }

    pub(crate) fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.nodes.get_mut(id)
    }

    /// Remove an element and its descendants, returning every removed id
    ///
    /// The parent's child list and the layers are left to the caller.
    pub(crate) fn remove_subtree(&mut self, id: ElementId) -> Vec<ElementId> {
        let mut removed = Vec::new();
        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            if let Some(element) = self.nodes.remove(next) {
                pending.extend(element.children);
                removed.push(next);
            }
        }
        removed
    }

    /// Mark an element and its enclosing groups as needing layout
    pub(crate) fn invalidate(&mut self, id: ElementId) -> Option<RootId> {
        let mut current = Some(id);
        let mut root = None;
        while let Some(next) = current {
            let element = self.nodes.get_mut(next)?;
            element.flags.remove(ElementFlags::VALID);
            root = Some(element.root);
            current = element.parent;
        }
        root
    }

    /// Move and resize children as a layout decided
    pub(crate) fn apply_placements(&mut self, layers: &mut LayerGraph, placements: &[Placement]) -> Result<(), SceneError> {
        for placement in placements {
            let Some(element) = self.nodes.get_mut(placement.element) else {
                continue;
            };
            let origin = placement.bounds.origin();
            layers.set_translation(element.layer, origin.x, origin.y)?;
            let size = placement.bounds.size();
            if element.size != size {
                element.size = size;
                element.flags.remove(ElementFlags::VALID);
            }
        }
        Ok(())
    }

    /// Lay out an element's subtree if it is invalid
    pub(crate) fn validate(&mut self, id: ElementId, layers: &mut LayerGraph) -> Result<(), SceneError> {
        let Some(element) = self.nodes.get(id) else {
            return Ok(());
        };
        let children = element.children.clone();
        if !element.flags.contains(ElementFlags::VALID) {
            if let ElementKind::Group(layout) = &element.kind {
                let placements = layout.lay_out(self, layers, &children, element.size.width, element.size.height);
                self.apply_placements(layers, &placements)?;
            }
        }
        for child in children {
            self.validate(child, layers)?;
        }
        if let Some(element) = self.nodes.get_mut(id) {
            element.flags.insert(ElementFlags::VALID);
        }
        Ok(())
    }
}

impl fmt::Debug for Elements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.nodes.iter()).finish()
    }
}
