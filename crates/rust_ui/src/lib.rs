//! # Rust UI
//!
//! Retained-mode user interface roots for the engine's layer graph.
//!
//! ## Features
//!
//! - **Roots**: sized, translatable top-level containers with pluggable layouts
//! - **Pointer Gestures**: per-root IDLE/TRACKING state machine that routes a
//!   whole gesture to the element it started on
//! - **Layer Graph**: translated layers with custom hit testers
//! - **Configuration**: interfaces described in TOML or RON
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rust_ui::prelude::*;
//!
//! fn main() -> Result<(), UiError> {
//!     let mut interface = Interface::new();
//!     let root = interface.create_root(AxisLayout::vertical(), Stylesheet::default())?;
//!     let button = interface.add_widget(root, Button::new("Fire", Dimension::new(80.0, 30.0)))?;
//!
//!     interface.root_mut(root)?.pack().set_translation(100.0, 50.0);
//!     interface.validate()?;
//!
//!     interface.pointer_start(110.0, 60.0, 0.0);
//!     interface.pointer_end(110.0, 60.0, 0.1);
//!     assert_eq!(interface.widget::<Button>(button).map(Button::clicks), Some(1));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod core;
pub mod foundation;
pub mod input;
pub mod scene;
pub mod ui;

/// Common imports for UI users
pub mod prelude {
    pub use crate::{
        core::{Config, ConfigFormat, InterfaceConfig, RootConfig, RootSizing},
        foundation::{
            collections::{ElementId, RootId},
            math::{Dimension, Point2, Rect, Vec2},
        },
        input::{PointerEvent, PointerPhase},
        ui::{
            AbsoluteLayout, Axis, AxisLayout, Button, GestureState, Interface, Label, Stylesheet,
            UiError, Widget, WidgetContext,
        },
    };
}
