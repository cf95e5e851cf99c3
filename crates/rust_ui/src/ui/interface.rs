//! Interface: owner of roots, elements, focus and pointer routing
//!
//! The interface is the single place that holds the layer graph, the pointer
//! source and every root. Roots register as pointer listeners on their own
//! layer when created; engine pointer events go through
//! [`Interface::pointer_start`] and friends, which hit test the graph and
//! forward the resulting delivery to the capturing root.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::core::config::{InterfaceConfig, RootConfig, RootSizing, WidgetConfig};
use crate::foundation::collections::{ElementId, LayerId, RootId, SlotMap};
use crate::input::{Delivery, PointerListener, PointerPhase, PointerSource};
use crate::scene::{HitTester, LayerGraph};
use crate::ui::element::{Element, ElementFlags, ElementKind, Elements, Widget};
use crate::ui::error::UiError;
use crate::ui::focus::{FocusHost, FocusManager};
use crate::ui::layout::Layout;
use crate::ui::root::{DispatchContext, Root, RootMut};
use crate::ui::style::Stylesheet;
use crate::ui::widgets::{Button, Label};

static NEXT_INTERFACE_ID: AtomicU64 = AtomicU64::new(0);

/// Unique identifier of an interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InterfaceId(pub u64);

/// Where a new element is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent {
    /// Directly under a root
    Root(RootId),
    /// Inside a group element
    Element(ElementId),
}

impl From<RootId> for Parent {
    fn from(id: RootId) -> Self {
        Self::Root(id)
    }
}

impl From<ElementId> for Parent {
    fn from(id: ElementId) -> Self {
        Self::Element(id)
    }
}

/// Retained-mode UI interface
#[derive(Debug)]
pub struct Interface {
    id: InterfaceId,
    layers: LayerGraph,
    pointer: PointerSource<RootId>,
    roots: SlotMap<RootId, Root>,
    root_layers: HashMap<LayerId, RootId>,
    elements: Elements,
    focus: FocusManager,
}

impl Interface {
    /// Create an empty interface
    pub fn new() -> Self {
        let id = InterfaceId(NEXT_INTERFACE_ID.fetch_add(1, Ordering::Relaxed));
        log::debug!("Created interface {:?}", id);
        Self {
            id,
            layers: LayerGraph::new(),
            pointer: PointerSource::new(),
            roots: SlotMap::with_key(),
            root_layers: HashMap::new(),
            elements: Elements::new(),
            focus: FocusManager::new(),
        }
    }

    /// Build an interface and its roots from configuration
    ///
    /// Returns the interface and the created roots in configuration order.
    pub fn from_config(config: &InterfaceConfig) -> Result<(Self, Vec<RootId>), UiError> {
        let mut interface = Self::new();
        let roots = config
            .roots
            .iter()
            .map(|root| interface.build_root(root, &config.stylesheet))
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("Interface {:?} built with {} roots", interface.id, roots.len());
        Ok((interface, roots))
    }

    /// Create, populate, size and lay out one configured root
    pub fn build_root(&mut self, config: &RootConfig, stylesheet: &Stylesheet) -> Result<RootId, UiError> {
        let stylesheet = config.stylesheet.clone().unwrap_or_else(|| stylesheet.clone());
        let id = self.create_root_boxed(config.layout.build(), stylesheet)?;

        for widget in &config.widgets {
            match widget {
                WidgetConfig::Button { label, size, focus_on_press } => {
                    self.add_widget(id, Button::new(label.clone(), *size).with_focus_on_press(*focus_on_press))?
                }
                WidgetConfig::Label { text, size } => self.add_widget(id, Label::new(text.clone(), *size))?,
            };
        }

        let [x, y] = config.position;
        let mut root = self.root_mut(id)?;
        match config.sizing {
            RootSizing::Pack => root.pack(),
            RootSizing::PackToWidth { width } => root.pack_to_width(width),
            RootSizing::PackToHeight { height } => root.pack_to_height(height),
            RootSizing::Fixed { width, height } => root.set_size(width, height),
        };
        root.set_translation(x, y).set_visible(config.visible);
        root.validate()?;

        log::info!("Root '{}' ready at ({}, {}) with size {:?}", config.name, x, y, root.size());
        Ok(id)
    }

    /// Identifier of this interface
    pub fn id(&self) -> InterfaceId {
        self.id
    }

    /// Layer graph holding every root and element layer
    pub fn layers(&self) -> &LayerGraph {
        &self.layers
    }

    /// Mutable layer graph access
    pub fn layers_mut(&mut self) -> &mut LayerGraph {
        &mut self.layers
    }

    /// Pointer dispatcher the roots are registered with
    pub fn pointer(&self) -> &PointerSource<RootId> {
        &self.pointer
    }

    /// Element arena
    pub fn elements(&self) -> &Elements {
        &self.elements
    }

    /// Create an empty root mounted on the scene root layer
    ///
    /// The root starts at size 0x0; size it through [`Interface::root_mut`].
    pub fn create_root(&mut self, layout: impl Layout + 'static, stylesheet: Stylesheet) -> Result<RootId, UiError> {
        self.create_root_boxed(Box::new(layout), stylesheet)
    }

    fn create_root_boxed(&mut self, layout: Box<dyn Layout>, stylesheet: Stylesheet) -> Result<RootId, UiError> {
        let layer = self.layers.create_layer(self.layers.root())?;
        let interface = self.id;
        let id = self
            .roots
            .insert_with_key(|id| Root::new(id, interface, layer, layout, stylesheet));

        let registration = self.pointer.add_listener(layer, id);
        if let Some(root) = self.roots.get_mut(id) {
            root.set_registration(registration);
        }
        self.root_layers.insert(layer, id);

        log::debug!("Created root {:?} on layer {:?}", id, layer);
        Ok(id)
    }

    /// Look up a root
    pub fn root(&self, id: RootId) -> Option<&Root> {
        self.roots.get(id)
    }

    /// Mutable view of a root for sizing and layout
    pub fn root_mut(&mut self, id: RootId) -> Result<RootMut<'_>, UiError> {
        let root = self.roots.get_mut(id).ok_or(UiError::UnknownRoot(id))?;
        Ok(RootMut {
            root,
            elements: &mut self.elements,
            layers: &mut self.layers,
        })
    }

    /// All roots
    pub fn roots(&self) -> impl Iterator<Item = (RootId, &Root)> {
        self.roots.iter()
    }

    /// Number of live roots
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    /// Tear a root down
    ///
    /// Unregistering from the pointer source cancels a gesture the root is
    /// tracking, so its target sees a cancel before the root disappears.
    /// Elements, layers and focus held by the root are released.
    pub fn dispose_root(&mut self, id: RootId) -> Result<(), UiError> {
        let mut root = self.roots.remove(id).ok_or(UiError::UnknownRoot(id))?;

        if let Some(registration) = root.take_registration() {
            if let Some(cancel) = self.pointer.remove_listener(registration, &self.layers) {
                log::debug!("Root {:?} disposed mid-gesture, cancelling", id);
                let mut cx = DispatchContext {
                    layers: &self.layers,
                    elements: &mut self.elements,
                    focus: &mut self.focus,
                };
                root.on_pointer(&mut cx, &cancel.event);
            }
        }

        let removed: Vec<ElementId> = root
            .children()
            .iter()
            .flat_map(|child| self.elements.remove_subtree(*child))
            .collect();
        self.focus.forget(&removed);

        self.root_layers.remove(&root.layer());
        self.layers.remove(root.layer())?;

        log::info!("Disposed root {:?} ({} elements)", id, removed.len());
        Ok(())
    }

    /// Add a widget under a root or group
    pub fn add_widget(&mut self, parent: impl Into<Parent>, widget: impl Widget) -> Result<ElementId, UiError> {
        self.attach(parent.into(), ElementKind::Leaf(Box::new(widget)))
    }

    /// Add a layout group under a root or group
    pub fn add_group(&mut self, parent: impl Into<Parent>, layout: impl Layout + 'static) -> Result<ElementId, UiError> {
        self.attach(parent.into(), ElementKind::Group(Box::new(layout)))
    }

    fn attach(&mut self, parent: Parent, kind: ElementKind) -> Result<ElementId, UiError> {
        let (parent_layer, root, parent_element) = match parent {
            Parent::Root(root) => {
                let layer = self.roots.get(root).ok_or(UiError::UnknownRoot(root))?.layer();
                (layer, root, None)
            }
            Parent::Element(group) => {
                let element = self.elements.get(group).ok_or(UiError::UnknownElement(group))?;
                if !element.is_group() {
                    return Err(UiError::NotAGroup(group));
                }
                (element.layer(), element.root(), Some(group))
            }
        };

        let layer = self.layers.create_layer(parent_layer)?;
        let id = self.elements.insert(Element::new(layer, parent_element, root, kind));
        match parent_element {
            Some(group) => {
                if let Some(element) = self.elements.get_mut(group) {
                    element.children_mut().push(id);
                }
            }
            None => {
                if let Some(root) = self.roots.get_mut(root) {
                    root.children_mut().push(id);
                }
            }
        }
        self.invalidate(parent);

        log::trace!("Attached {:?} under {:?}", id, parent);
        Ok(id)
    }

    /// Remove an element and its subtree
    ///
    /// A gesture targeting a removed element keeps its root in TRACKING
    /// until it ends; later events for it are dropped.
    pub fn remove_element(&mut self, id: ElementId) -> Result<(), UiError> {
        let element = self.elements.get(id).ok_or(UiError::UnknownElement(id))?;
        let (layer, parent, root) = (element.layer(), element.parent(), element.root());

        let removed = self.elements.remove_subtree(id);
        let parent = match parent {
            Some(group) => {
                if let Some(element) = self.elements.get_mut(group) {
                    element.children_mut().retain(|child| *child != id);
                }
                Parent::Element(group)
            }
            None => {
                if let Some(root) = self.roots.get_mut(root) {
                    root.children_mut().retain(|child| *child != id);
                }
                Parent::Root(root)
            }
        };
        self.invalidate(parent);
        self.layers.remove(layer)?;
        self.focus.forget(&removed);

        log::debug!("Removed {:?} ({} elements)", id, removed.len());
        Ok(())
    }

    /// Move an element within its parent
    ///
    /// Layouts other than [`AbsoluteLayout`](crate::ui::layout::AbsoluteLayout)
    /// overwrite the position on the next validation.
    pub fn set_position(&mut self, id: ElementId, x: f32, y: f32) -> Result<(), UiError> {
        let element = self.elements.get(id).ok_or(UiError::UnknownElement(id))?;
        self.layers.set_translation(element.layer(), x, y)?;
        Ok(())
    }

    /// Show or hide an element; hidden elements are skipped by layout and hit testing
    pub fn set_visible(&mut self, id: ElementId, visible: bool) -> Result<(), UiError> {
        let element = self.elements.get(id).ok_or(UiError::UnknownElement(id))?;
        let parent = element.parent().map_or(Parent::Root(element.root()), Parent::Element);
        self.layers.set_visible(element.layer(), visible)?;
        self.invalidate(parent);
        Ok(())
    }

    /// Let an element take part in hit testing or not
    pub fn set_interactive(&mut self, id: ElementId, interactive: bool) -> Result<(), UiError> {
        self.set_flag(id, ElementFlags::INTERACTIVE, interactive)
    }

    /// Enable or disable an element; disabled elements are not hit
    pub fn set_enabled(&mut self, id: ElementId, enabled: bool) -> Result<(), UiError> {
        self.set_flag(id, ElementFlags::ENABLED, enabled)
    }

    fn set_flag(&mut self, id: ElementId, flag: ElementFlags, value: bool) -> Result<(), UiError> {
        let element = self.elements.get_mut(id).ok_or(UiError::UnknownElement(id))?;
        element.set_flag(flag, value);
        Ok(())
    }

    /// Look up an element
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Borrow a leaf's widget as a concrete type
    pub fn widget<T: Widget>(&self, id: ElementId) -> Option<&T> {
        self.elements.widget(id)
    }

    /// Mutably borrow a leaf's widget as a concrete type
    pub fn widget_mut<T: Widget>(&mut self, id: ElementId) -> Option<&mut T> {
        self.elements.widget_mut(id)
    }

    /// Root owning an element
    pub fn root_of(&self, id: ElementId) -> Option<RootId> {
        self.elements.root_of(id)
    }

    /// Currently focused element
    pub fn focused(&self) -> Option<ElementId> {
        self.focus.focused()
    }

    /// Give focus to an element
    pub fn request_focus(&mut self, id: ElementId) -> Result<(), UiError> {
        if !self.elements.contains(id) {
            return Err(UiError::UnknownElement(id));
        }
        self.focus.request_focus(id);
        Ok(())
    }

    /// Drop focus
    pub fn clear_focus(&mut self) {
        self.focus.clear_focus();
    }

    /// Run layout for every root
    pub fn validate(&mut self) -> Result<(), UiError> {
        for (_, root) in &mut self.roots {
            root.validate(&mut self.elements, &mut self.layers)?;
        }
        Ok(())
    }

    /// Begin a gesture at a screen position
    ///
    /// A gesture still in progress is cancelled first.
    pub fn pointer_start(&mut self, x: f32, y: f32, time: f64) {
        if self.pointer.is_capturing() {
            log::warn!("Pointer start during an active gesture, cancelling it");
            self.pointer_cancel(x, y, time);
        }

        let roots = &self.roots;
        let root_layers = &self.root_layers;
        let delivery = self.pointer.start(&self.layers, x, y, time, |layer| {
            root_layers
                .get(&layer)
                .and_then(|id| roots.get(*id))
                .map(|root| root as &dyn HitTester)
        });
        self.deliver(delivery);
    }

    /// Move the pointer
    pub fn pointer_drag(&mut self, x: f32, y: f32, time: f64) {
        let delivery = self.pointer.drag(&self.layers, x, y, time);
        self.deliver(delivery);
    }

    /// Release the pointer
    pub fn pointer_end(&mut self, x: f32, y: f32, time: f64) {
        let delivery = self.pointer.end(&self.layers, x, y, time);
        self.deliver(delivery);
    }

    /// Abort the current gesture
    pub fn pointer_cancel(&mut self, x: f32, y: f32, time: f64) {
        let delivery = self.pointer.cancel(&self.layers, x, y, time);
        self.deliver(delivery);
    }

    /// Feed a pointer event by phase
    pub fn dispatch_pointer(&mut self, phase: PointerPhase, x: f32, y: f32, time: f64) {
        match phase {
            PointerPhase::Start => self.pointer_start(x, y, time),
            PointerPhase::Drag => self.pointer_drag(x, y, time),
            PointerPhase::End => self.pointer_end(x, y, time),
            PointerPhase::Cancel => self.pointer_cancel(x, y, time),
        }
    }

    fn deliver(&mut self, delivery: Option<Delivery<RootId>>) {
        let Some(delivery) = delivery else {
            return;
        };
        let Some(root) = self.roots.get_mut(delivery.listener) else {
            log::warn!("Pointer delivery for unknown root {:?}", delivery.listener);
            return;
        };
        let mut cx = DispatchContext {
            layers: &self.layers,
            elements: &mut self.elements,
            focus: &mut self.focus,
        };
        root.on_pointer(&mut cx, &delivery.event);
    }

    fn invalidate(&mut self, parent: Parent) {
        let root = match parent {
            Parent::Root(root) => Some(root),
            Parent::Element(group) => self.elements.invalidate(group),
        };
        if let Some(root) = root.and_then(|root| self.roots.get_mut(root)) {
            root.invalidate();
        }
    }
}

impl Default for Interface {
    fn default() -> Self {
        Self::new()
    }
}
