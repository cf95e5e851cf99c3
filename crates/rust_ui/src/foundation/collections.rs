//! Stable handles for the UI arenas

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Handle to a layer in the engine layer graph
    pub struct LayerId;

    /// Handle to an element in the element arena
    pub struct ElementId;

    /// Handle to a root owned by an interface
    pub struct RootId;

    /// Handle to a pointer listener registration
    pub struct ListenerId;
}
