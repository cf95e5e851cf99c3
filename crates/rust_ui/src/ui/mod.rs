//! UI System Module
//!
//! Retained-mode interface built on the layer graph.
//!
//! Architecture:
//! - Interface: owns roots, elements, focus and the pointer source
//! - Root: sized top-level container and per-root gesture state machine
//! - element/: widget trait, element flags and the element arena
//! - layout/: axis and absolute layout strategies
//! - widgets/: stock Button and Label

pub mod element;
pub mod error;
pub mod focus;
pub mod interface;
pub mod layout;
pub mod root;
pub mod style;
pub mod widgets;

#[cfg(test)]
mod tests;

pub use element::{Element, ElementFlags, ElementKind, Elements, Widget, WidgetContext};
pub use error::UiError;
pub use focus::{FocusHost, FocusManager};
pub use interface::{Interface, InterfaceId, Parent};
pub use layout::{AbsoluteLayout, Axis, AxisLayout, Layout, Placement};
pub use root::{DispatchContext, GestureState, Root, RootMut};
pub use style::{StyleValue, Stylesheet};
pub use widgets::{Button, Label};
