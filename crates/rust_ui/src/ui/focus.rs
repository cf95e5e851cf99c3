//! Keyboard/widget focus shared by every root of an interface

use crate::foundation::collections::ElementId;

/// Focus operations available to roots and widgets during dispatch
pub trait FocusHost {
    /// Drop the current focus, if any
    fn clear_focus(&mut self);

    /// Give focus to an element
    fn request_focus(&mut self, element: ElementId);

    /// Currently focused element
    fn focused(&self) -> Option<ElementId>;
}

/// Single focus slot across all roots of an interface
#[derive(Debug, Default)]
pub struct FocusManager {
    focused: Option<ElementId>,
}

impl FocusManager {
    /// Create a manager with nothing focused
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget focus if it belongs to one of the removed elements
    pub(crate) fn forget(&mut self, removed: &[ElementId]) {
        if self.focused.is_some_and(|focused| removed.contains(&focused)) {
            log::debug!("Focused element {:?} removed, clearing focus", self.focused);
            self.focused = None;
        }
    }
}

impl FocusHost for FocusManager {
    fn clear_focus(&mut self) {
        if let Some(previous) = self.focused.take() {
            log::trace!("Focus cleared (was {:?})", previous);
        }
    }

    fn request_focus(&mut self, element: ElementId) {
        log::trace!("Focus requested by {:?}", element);
        self.focused = Some(element);
    }

    fn focused(&self) -> Option<ElementId> {
        self.focused
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn test_request_and_clear() {
        let mut ids: SlotMap<ElementId, ()> = SlotMap::with_key();
        let a = ids.insert(());

        let mut focus = FocusManager::new();
        focus.request_focus(a);
        assert_eq!(focus.focused(), Some(a));

        focus.clear_focus();
        assert_eq!(focus.focused(), None);
    }

    #[test]
    fn test_forget_removed_element() {
        let mut ids: SlotMap<ElementId, ()> = SlotMap::with_key();
        let a = ids.insert(());
        let b = ids.insert(());

        let mut focus = FocusManager::new();
        focus.request_focus(a);
        focus.forget(&[b]);
        assert_eq!(focus.focused(), Some(a));

        focus.forget(&[a, b]);
        assert_eq!(focus.focused(), None);
    }
}
