//! Pointer input
//!
//! The engine side of pointer handling: events tagged with screen and
//! listener-local coordinates, a listener capability trait, and the
//! [`PointerSource`] that hit tests the layer graph and captures a gesture
//! for the listener it started on.

pub mod collision;
pub mod pointer;

pub use pointer::{
    Delivery,
    PointerEvent,
    PointerListener,
    PointerPhase,
    PointerSource,
    Registration,
};
