//! Interface scenarios: sizing, gesture dispatch and lifecycle

mod root_dispatch;

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use crate::foundation::collections::RootId;
use crate::foundation::math::{Dimension, Point2};
use crate::input::{PointerEvent, PointerPhase};
use crate::ui::element::{Widget, WidgetContext};
use crate::ui::interface::Interface;
use crate::ui::layout::AbsoluteLayout;
use crate::ui::style::Stylesheet;

/// Events a [`Recorder`] saw, with the element-local point
type EventLog = Rc<RefCell<Vec<(PointerPhase, Point2)>>>;

/// Widget that records every pointer callback
struct Recorder {
    size: Dimension,
    log: EventLog,
}

impl Recorder {
    fn new(width: f32, height: f32) -> (Self, EventLog) {
        let log = EventLog::default();
        (Self { size: Dimension::new(width, height), log: Rc::clone(&log) }, log)
    }

    fn record(&self, event: &PointerEvent, local: Point2) {
        self.log.borrow_mut().push((event.phase, local));
    }
}

impl Widget for Recorder {
    fn preferred_size(&self, _hint_width: f32, _hint_height: f32) -> Dimension {
        self.size
    }

    fn on_pointer_start(&mut self, _cx: &mut WidgetContext<'_>, event: &PointerEvent, local: Point2) {
        self.record(event, local);
    }

    fn on_pointer_drag(&mut self, _cx: &mut WidgetContext<'_>, event: &PointerEvent, local: Point2) {
        self.record(event, local);
    }

    fn on_pointer_end(&mut self, _cx: &mut WidgetContext<'_>, event: &PointerEvent, local: Point2) {
        self.record(event, local);
    }

    fn on_pointer_cancel(&mut self, _cx: &mut WidgetContext<'_>, event: &PointerEvent, local: Point2) {
        self.record(event, local);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Phases recorded so far
fn phases(log: &EventLog) -> Vec<PointerPhase> {
    log.borrow().iter().map(|(phase, _)| *phase).collect()
}

/// Absolute-layout root with explicit bounds
fn absolute_root(interface: &mut Interface, x: f32, y: f32, width: f32, height: f32) -> RootId {
    let root = interface.create_root(AbsoluteLayout, Stylesheet::default()).unwrap();
    interface.root_mut(root).unwrap().set_bounds(x, y, width, height);
    root
}
