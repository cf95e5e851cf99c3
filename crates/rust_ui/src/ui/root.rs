//! Top-level container of an interface
//!
//! A root is a sized, translatable surface mounted as a layer in the layer
//! graph. It owns a layout for its children, a stylesheet, and the pointer
//! gesture state: one pointer listener per root, which picks the element
//! under a gesture's start point and routes every later event of that
//! gesture to it.

use std::fmt;

use crate::foundation::collections::{ElementId, LayerId, RootId};
use crate::foundation::math::{Dimension, Point2, Vec2};
use crate::input::collision::point_in_bounds;
use crate::input::{PointerEvent, PointerListener, Registration};
use crate::scene::{HitTester, Layer, LayerGraph, SceneError};
use crate::ui::element::Elements;
use crate::ui::focus::FocusHost;
use crate::ui::interface::InterfaceId;
use crate::ui::layout::Layout;
use crate::ui::style::Stylesheet;

/// Pointer gesture state of a root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    /// No gesture in progress
    #[default]
    Idle,
    /// A gesture started on the given element and is routed to it
    Tracking(ElementId),
}

/// Borrowed interface state a root needs while handling pointer events
pub struct DispatchContext<'a> {
    /// Layer graph for coordinate conversion
    pub layers: &'a LayerGraph,
    /// Element arena holding the gesture targets
    pub elements: &'a mut Elements,
    /// Focus of the owning interface
    pub focus: &'a mut dyn FocusHost,
}

/// Top-level container
pub struct Root {
    id: RootId,
    interface: InterfaceId,
    layer: LayerId,
    children: Vec<ElementId>,
    size: Dimension,
    valid: bool,
    layout: Box<dyn Layout>,
    stylesheet: Stylesheet,
    gesture: GestureState,
    registration: Option<Registration>,
}

impl Root {
    pub(crate) fn new(
        id: RootId,
        interface: InterfaceId,
        layer: LayerId,
        layout: Box<dyn Layout>,
        stylesheet: Stylesheet,
    ) -> Self {
        Self {
            id,
            interface,
            layer,
            children: Vec::new(),
            size: Dimension::ZERO,
            valid: false,
            layout,
            stylesheet,
            gesture: GestureState::Idle,
            registration: None,
        }
    }

    /// Handle of this root
    pub fn id(&self) -> RootId {
        self.id
    }

    /// The root enclosing this container, which is the root itself
    pub fn root(&self) -> RootId {
        self.id
    }

    /// Interface that created this root
    pub fn interface(&self) -> InterfaceId {
        self.interface
    }

    /// Layer the root is mounted as
    pub fn layer(&self) -> LayerId {
        self.layer
    }

    /// Direct children in back-to-front order
    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    /// Current size
    pub fn size(&self) -> Dimension {
        self.size
    }

    /// Whether the last layout is still up to date
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Stylesheet applied to the root's elements
    pub fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    /// Replace the stylesheet
    pub fn set_stylesheet(&mut self, stylesheet: Stylesheet) {
        self.stylesheet = stylesheet;
        self.invalidate();
    }

    /// Current gesture state
    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    /// Element receiving the current gesture, if any
    pub fn active_target(&self) -> Option<ElementId> {
        match self.gesture {
            GestureState::Idle => None,
            GestureState::Tracking(target) => Some(target),
        }
    }

    /// Whether the root's layer is visible
    pub fn is_visible(&self, layers: &LayerGraph) -> bool {
        layers.is_visible(self.layer)
    }

    /// Whether a root-local point lies inside `[0,0]x[width,height]`, edges included
    pub fn contains(&self, point: Point2) -> bool {
        point_in_bounds(point, self.size)
    }

    /// Hit test a root-local point against the root itself
    pub fn hits(&self, layers: &LayerGraph, point: Point2) -> bool {
        self.is_visible(layers) && self.contains(point)
    }

    /// Size the layout would like under the given hints (0 = unconstrained)
    pub fn preferred_size(&self, elements: &Elements, layers: &LayerGraph, hint_width: f32, hint_height: f32) -> Dimension {
        self.layout.compute_size(elements, layers, &self.children, hint_width, hint_height)
    }

    /// Set the size and mark the layout invalid
    ///
    /// Returns `self` for chaining.
    pub fn set_size(&mut self, width: f32, height: f32) -> &mut Self {
        log::debug!("Root {:?} resized to {}x{}", self.id, width, height);
        self.size = Dimension::new(width, height);
        self.invalidate();
        self
    }

    /// Mark the layout as needing another pass
    pub fn invalidate(&mut self) {
        self.valid = false;
    }

    /// Frontmost interactive element under a root-local point
    pub fn find_target(&self, elements: &Elements, layers: &LayerGraph, point: Point2) -> Option<(ElementId, Point2)> {
        elements.hit_test(layers, &self.children, point)
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<ElementId> {
        &mut self.children
    }

    pub(crate) fn set_registration(&mut self, registration: Registration) {
        self.registration = Some(registration);
    }

    pub(crate) fn take_registration(&mut self) -> Option<Registration> {
        self.registration.take()
    }

    /// Lay out the children if needed, then validate each subtree
    pub(crate) fn validate(&mut self, elements: &mut Elements, layers: &mut LayerGraph) -> Result<(), SceneError> {
        if !self.valid {
            let placements = self.layout.lay_out(elements, layers, &self.children, self.size.width, self.size.height);
            elements.apply_placements(layers, &placements)?;
        }
        for child in &self.children {
            elements.validate(*child, layers)?;
        }
        self.valid = true;
        Ok(())
    }

    /// Route a later event of the gesture to the active target
    fn forward(&self, cx: &mut DispatchContext<'_>, event: &PointerEvent) {
        let Some(target) = self.active_target() else {
            log::trace!("Root {:?} dropped {:?} with no active target", self.id, event.phase);
            return;
        };
        let Some(local) = cx.elements.to_local(target, cx.layers, event.screen) else {
            log::debug!("Root {:?} target {:?} is gone, dropping {:?}", self.id, target, event.phase);
            return;
        };
        cx.elements.dispatch(target, cx.focus, event, local);
    }

    fn finish(&mut self) {
        if let GestureState::Tracking(target) = self.gesture {
            log::trace!("Root {:?} released {:?}", self.id, target);
        }
        self.gesture = GestureState::Idle;
    }
}

impl HitTester for Root {
    fn hit_test(&self, layer: &Layer, id: LayerId, point: Point2) -> Option<LayerId> {
        (layer.is_visible() && self.contains(point)).then_some(id)
    }
}

impl<'a> PointerListener<DispatchContext<'a>> for Root {
    fn on_pointer_start(&mut self, cx: &mut DispatchContext<'a>, event: &PointerEvent) {
        cx.focus.clear_focus();

        let Some((target, local)) = self.find_target(cx.elements, cx.layers, event.local) else {
            log::trace!("Root {:?} start at {:?} hit no element", self.id, event.local);
            self.gesture = GestureState::Idle;
            return;
        };

        log::trace!("Root {:?} tracking {:?} from {:?}", self.id, target, local);
        self.gesture = GestureState::Tracking(target);
        cx.elements.dispatch(target, cx.focus, event, local);
    }

    fn on_pointer_drag(&mut self, cx: &mut DispatchContext<'a>, event: &PointerEvent) {
        self.forward(cx, event);
    }

    fn on_pointer_end(&mut self, cx: &mut DispatchContext<'a>, event: &PointerEvent) {
        self.forward(cx, event);
        self.finish();
    }

    fn on_pointer_cancel(&mut self, cx: &mut DispatchContext<'a>, event: &PointerEvent) {
        self.forward(cx, event);
        self.finish();
    }
}

impl fmt::Debug for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Root")
            .field("id", &self.id)
            .field("interface", &self.interface)
            .field("layer", &self.layer)
            .field("children", &self.children)
            .field("size", &self.size)
            .field("valid", &self.valid)
            .field("stylesheet", &self.stylesheet.name())
            .field("gesture", &self.gesture)
            .finish_non_exhaustive()
    }
}

/// Mutable view of a root with the interface state sizing needs
///
/// Obtained from [`Interface::root_mut`](crate::ui::Interface::root_mut).
/// Sizing calls chain:
///
/// ```ignore
/// interface.root_mut(id)?.pack_to_width(200.0).set_translation(40.0, 0.0);
/// ```
pub struct RootMut<'a> {
    pub(crate) root: &'a mut Root,
    pub(crate) elements: &'a mut Elements,
    pub(crate) layers: &'a mut LayerGraph,
}

impl RootMut<'_> {
    /// Shared view of the root
    pub fn root(&self) -> &Root {
        &*self.root
    }

    /// Handle of the root
    pub fn id(&self) -> RootId {
        self.root.id
    }

    /// Current size
    pub fn size(&self) -> Dimension {
        self.root.size
    }

    /// Translation of the root layer
    pub fn translation(&self) -> Vec2 {
        self.layers.translation(self.root.layer).unwrap_or_else(Vec2::zeros)
    }

    /// Preferred size under the given hints
    pub fn preferred_size(&self, hint_width: f32, hint_height: f32) -> Dimension {
        self.root.preferred_size(self.elements, self.layers, hint_width, hint_height)
    }

    /// Size to the unconstrained preferred size
    ///
    /// Packing does not run layout; that waits for the next validation pass.
    pub fn pack(&mut self) -> &mut Self {
        let preferred = self.preferred_size(0.0, 0.0);
        self.set_size(preferred.width, preferred.height)
    }

    /// Set the width as given and take the preferred height for it
    pub fn pack_to_width(&mut self, width: f32) -> &mut Self {
        let preferred = self.preferred_size(width, 0.0);
        self.set_size(width, preferred.height)
    }

    /// Set the height as given and take the preferred width for it
    pub fn pack_to_height(&mut self, height: f32) -> &mut Self {
        let preferred = self.preferred_size(0.0, height);
        self.set_size(preferred.width, height)
    }

    /// Set the size explicitly
    pub fn set_size(&mut self, width: f32, height: f32) -> &mut Self {
        self.root.set_size(width, height);
        self
    }

    /// Move the root layer
    pub fn set_translation(&mut self, x: f32, y: f32) -> &mut Self {
        if let Err(err) = self.layers.set_translation(self.root.layer, x, y) {
            log::warn!("Root {:?} could not move: {}", self.root.id, err);
        }
        self
    }

    /// Move and resize the root in one call
    pub fn set_bounds(&mut self, x: f32, y: f32, width: f32, height: f32) -> &mut Self {
        self.set_translation(x, y).set_size(width, height)
    }

    /// Show or hide the root; a hidden root is never hit
    pub fn set_visible(&mut self, visible: bool) -> &mut Self {
        if let Err(err) = self.layers.set_visible(self.root.layer, visible) {
            log::warn!("Root {:?} could not change visibility: {}", self.root.id, err);
        }
        self
    }

    /// Replace the stylesheet
    pub fn set_stylesheet(&mut self, stylesheet: Stylesheet) -> &mut Self {
        self.root.set_stylesheet(stylesheet);
        self
    }

    /// Run layout for the root and every invalid element beneath it
    pub fn validate(&mut self) -> Result<(), SceneError> {
        self.root.validate(self.elements, self.layers)
    }
}
