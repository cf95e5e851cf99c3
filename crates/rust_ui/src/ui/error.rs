//! Interface errors

use crate::config::ConfigError;
use crate::foundation::collections::{ElementId, RootId};
use crate::scene::SceneError;

/// Errors returned by [`Interface`](crate::ui::Interface) operations
#[derive(thiserror::Error, Debug)]
pub enum UiError {
    /// The root handle is stale or belongs to another interface
    #[error("Unknown root: {0:?}")]
    UnknownRoot(RootId),

    /// The element handle is stale
    #[error("Unknown element: {0:?}")]
    UnknownElement(ElementId),

    /// Children can only be added to groups
    #[error("Element {0:?} is not a group")]
    NotAGroup(ElementId),

    /// Layer graph failure
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
