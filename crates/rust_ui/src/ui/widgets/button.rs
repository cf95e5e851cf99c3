//! Clickable button

use std::any::Any;

use crate::foundation::math::{Dimension, Point2};
use crate::input::PointerEvent;
use crate::ui::element::{Widget, WidgetContext};

/// Button that counts clicks
///
/// A click is a gesture that starts on the button and ends inside it.
/// Dragging out disarms the button; dragging back in re-arms it.
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    label: String,
    size: Dimension,
    focus_on_press: bool,
    pressed: bool,
    armed: bool,
    clicks: u32,
    last_local: Option<Point2>,
}

impl Button {
    /// Create a button with a fixed preferred size
    pub fn new(label: impl Into<String>, size: Dimension) -> Self {
        Self {
            label: label.into(),
            size,
            focus_on_press: false,
            pressed: false,
            armed: false,
            clicks: 0,
            last_local: None,
        }
    }

    /// Take focus when a gesture starts on the button
    pub fn with_focus_on_press(mut self, focus_on_press: bool) -> Self {
        self.focus_on_press = focus_on_press;
        self
    }

    /// Button text
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether a gesture that started here is in progress
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Whether releasing now would click
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Completed clicks
    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    /// Last pointer position seen, in button space
    pub fn last_local(&self) -> Option<Point2> {
        self.last_local
    }
}

impl Widget for Button {
    fn preferred_size(&self, _hint_width: f32, _hint_height: f32) -> Dimension {
        self.size
    }

    fn on_pointer_start(&mut self, cx: &mut WidgetContext<'_>, _event: &PointerEvent, local: Point2) {
        self.pressed = true;
        self.armed = cx.contains(local);
        self.last_local = Some(local);
        if self.focus_on_press {
            cx.focus.request_focus(cx.element);
        }
    }

    fn on_pointer_drag(&mut self, cx: &mut WidgetContext<'_>, _event: &PointerEvent, local: Point2) {
        self.armed = self.pressed && cx.contains(local);
        self.last_local = Some(local);
    }

    fn on_pointer_end(&mut self, cx: &mut WidgetContext<'_>, _event: &PointerEvent, local: Point2) {
        self.last_local = Some(local);
        if self.pressed && cx.contains(local) {
            self.clicks += 1;
            log::debug!("Button '{}' clicked ({} total)", self.label, self.clicks);
        }
        self.pressed = false;
        self.armed = false;
    }

    fn on_pointer_cancel(&mut self, _cx: &mut WidgetContext<'_>, _event: &PointerEvent, _local: Point2) {
        self.pressed = false;
        self.armed = false;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
