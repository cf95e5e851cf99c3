//! Pointer events, listeners and the engine pointer source
//!
//! The pointer source follows a single-pointer model: a start event is hit
//! tested against the layer graph and captured by the listener registered on
//! the hit layer (or its nearest registered ancestor). Drag, end and cancel
//! events go to that listener until the gesture finishes, wherever the
//! pointer moves in the meantime.

use crate::foundation::collections::{LayerId, ListenerId, SlotMap};
use crate::foundation::math::Point2;
use crate::scene::{HitTester, LayerGraph};

/// Phase of a pointer gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// Pointer pressed
    Start,
    /// Pointer moved while pressed
    Drag,
    /// Pointer released
    End,
    /// Gesture aborted by the engine or by listener teardown
    Cancel,
}

/// A pointer event as delivered to a listener
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Gesture phase
    pub phase: PointerPhase,
    /// Position in screen coordinates
    pub screen: Point2,
    /// Position in the receiving listener's layer coordinates
    pub local: Point2,
    /// Timestamp in seconds
    pub time: f64,
}

impl PointerEvent {
    /// Create an event whose local position equals its screen position
    pub fn new(phase: PointerPhase, x: f32, y: f32, time: f64) -> Self {
        let screen = Point2::new(x, y);
        Self { phase, screen, local: screen, time }
    }

    /// Same event with a different local position
    pub fn with_local(mut self, local: Point2) -> Self {
        self.local = local;
        self
    }

    /// Screen x coordinate
    pub fn x(&self) -> f32 {
        self.screen.x
    }

    /// Screen y coordinate
    pub fn y(&self) -> f32 {
        self.screen.y
    }

    /// Listener-local x coordinate
    pub fn local_x(&self) -> f32 {
        self.local.x
    }

    /// Listener-local y coordinate
    pub fn local_y(&self) -> f32 {
        self.local.y
    }
}

/// Capability interface for receiving pointer gestures
///
/// `C` is whatever context the owner of the listener hands in at delivery
/// time; the UI passes its dispatch context.
pub trait PointerListener<C: ?Sized> {
    /// A gesture started on this listener's layer
    fn on_pointer_start(&mut self, cx: &mut C, event: &PointerEvent);

    /// The captured pointer moved
    fn on_pointer_drag(&mut self, cx: &mut C, event: &PointerEvent);

    /// The captured pointer was released
    fn on_pointer_end(&mut self, cx: &mut C, event: &PointerEvent);

    /// The captured gesture was aborted
    fn on_pointer_cancel(&mut self, _cx: &mut C, _event: &PointerEvent) {}

    /// Route an event to the callback matching its phase
    fn on_pointer(&mut self, cx: &mut C, event: &PointerEvent) {
        match event.phase {
            PointerPhase::Start => self.on_pointer_start(cx, event),
            PointerPhase::Drag => self.on_pointer_drag(cx, event),
            PointerPhase::End => self.on_pointer_end(cx, event),
            PointerPhase::Cancel => self.on_pointer_cancel(cx, event),
        }
    }
}

/// Proof of a listener registration
///
/// Not `Clone`: handing it back to [`PointerSource::remove_listener`] is the
/// only way to release the registration.
#[derive(Debug, PartialEq, Eq)]
pub struct Registration {
    id: ListenerId,
    layer: LayerId,
}

impl Registration {
    /// Layer the listener is bound to
    pub fn layer(&self) -> LayerId {
        self.layer
    }
}

/// An event routed to the listener identified by `listener`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Delivery<K> {
    /// Key the listener was registered with
    pub listener: K,
    /// Event with `local` expressed in the listener's layer space
    pub event: PointerEvent,
}

#[derive(Debug)]
struct ListenerEntry<K> {
    layer: LayerId,
    key: K,
}

/// Active capture of the single pointer
#[derive(Debug, Clone, Copy)]
struct Capture {
    listener: ListenerId,
    last_screen: Point2,
    last_time: f64,
}

/// Engine pointer dispatcher
///
/// Listeners are registered against layers and identified by a caller-chosen
/// key `K`; deliveries name the key and the caller invokes the listener.
#[derive(Debug)]
pub struct PointerSource<K> {
    listeners: SlotMap<ListenerId, ListenerEntry<K>>,
    capture: Option<Capture>,
}

impl<K: Copy> PointerSource<K> {
    /// Create a source with no listeners
    pub fn new() -> Self {
        Self {
            listeners: SlotMap::with_key(),
            capture: None,
        }
    }

    /// Register a listener for events that hit `layer` or its descendants
    pub fn add_listener(&mut self, layer: LayerId, key: K) -> Registration {
        let id = self.listeners.insert(ListenerEntry { layer, key });
        log::debug!("Pointer listener {:?} registered on layer {:?}", id, layer);
        Registration { id, layer }
    }

    /// Release a registration
    ///
    /// If the listener holds the current capture, the gesture is aborted and
    /// the returned cancel delivery must be handed to it.
    pub fn remove_listener(&mut self, registration: Registration, layers: &LayerGraph) -> Option<Delivery<K>> {
        let entry = self.listeners.remove(registration.id)?;
        log::debug!("Pointer listener {:?} unregistered", registration.id);
        let capture = self.capture.filter(|capture| capture.listener == registration.id)?;
        self.capture = None;
        Some(Self::deliver(&entry, layers, PointerPhase::Cancel, capture.last_screen, capture.last_time))
    }

    /// Number of live registrations
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Whether a gesture is currently captured
    pub fn is_capturing(&self) -> bool {
        self.capture.is_some()
    }

    /// Key of the listener holding the capture
    pub fn captured(&self) -> Option<K> {
        self.capture
            .and_then(|capture| self.listeners.get(capture.listener))
            .map(|entry| entry.key)
    }

    /// Begin a gesture at a screen position
    ///
    /// The layer graph is hit tested with the supplied custom hit testers; the
    /// first registered listener found walking up from the hit layer captures
    /// the gesture.
    pub fn start<'a, F>(&mut self, layers: &LayerGraph, x: f32, y: f32, time: f64, testers: F) -> Option<Delivery<K>>
    where
        F: Fn(LayerId) -> Option<&'a dyn HitTester>,
    {
        let screen = Point2::new(x, y);
        if let Some(stale) = self.capture.take() {
            log::warn!("Pointer start while listener {:?} holds a capture; dropping it", stale.listener);
        }

        let Some(hit) = layers.hit_test(screen, testers) else {
            log::trace!("Pointer start at ({}, {}) hit no layer", x, y);
            return None;
        };
        let (listener, entry) = layers
            .ancestors(hit)
            .find_map(|layer| self.listeners.iter().find(|(_, entry)| entry.layer == layer))?;

        self.capture = Some(Capture { listener, last_screen: screen, last_time: time });
        Some(Self::deliver(entry, layers, PointerPhase::Start, screen, time))
    }

    /// Move the captured pointer
    pub fn drag(&mut self, layers: &LayerGraph, x: f32, y: f32, time: f64) -> Option<Delivery<K>> {
        self.continue_capture(layers, PointerPhase::Drag, Point2::new(x, y), time, false)
    }

    /// Release the captured pointer
    pub fn end(&mut self, layers: &LayerGraph, x: f32, y: f32, time: f64) -> Option<Delivery<K>> {
        self.continue_capture(layers, PointerPhase::End, Point2::new(x, y), time, true)
    }

    /// Abort the captured gesture
    pub fn cancel(&mut self, layers: &LayerGraph, x: f32, y: f32, time: f64) -> Option<Delivery<K>> {
        self.continue_capture(layers, PointerPhase::Cancel, Point2::new(x, y), time, true)
    }

    fn continue_capture(
        &mut self,
        layers: &LayerGraph,
        phase: PointerPhase,
        screen: Point2,
        time: f64,
        finish: bool,
    ) -> Option<Delivery<K>> {
        let capture = self.capture.as_mut()?;
        capture.last_screen = screen;
        capture.last_time = time;
        let listener = capture.listener;
        if finish {
            self.capture = None;
        }

        let Some(entry) = self.listeners.get(listener) else {
            self.capture = None;
            return None;
        };
        Some(Self::deliver(entry, layers, phase, screen, time))
    }

    fn deliver(entry: &ListenerEntry<K>, layers: &LayerGraph, phase: PointerPhase, screen: Point2, time: f64) -> Delivery<K> {
        let local = layers.screen_to_layer(entry.layer, screen).unwrap_or(screen);
        Delivery {
            listener: entry.key,
            event: PointerEvent { phase, screen, local, time },
        }
    }
}

impl<K: Copy> Default for PointerSource<K> {
    fn default() -> Self {
        Self::new()
    }
}
