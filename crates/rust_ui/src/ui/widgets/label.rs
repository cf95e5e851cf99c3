//! Static text

use std::any::Any;

use crate::foundation::math::Dimension;
use crate::ui::element::Widget;

/// Non-interactive text; pointer input passes through it
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    text: String,
    size: Dimension,
}

impl Label {
    /// Create a label with a fixed preferred size
    pub fn new(text: impl Into<String>, size: Dimension) -> Self {
        Self { text: text.into(), size }
    }

    /// Displayed text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Widget for Label {
    fn preferred_size(&self, _hint_width: f32, _hint_height: f32) -> Dimension {
        self.size
    }

    fn interactive(&self) -> bool {
        false
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
