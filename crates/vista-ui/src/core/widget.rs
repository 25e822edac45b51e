//! Ownership of embedded widgets rendered outside the navigation bar's tree.
//!
//! # Design
//! - The bar only holds an opaque handle; the widget's internals stay private.
//! - Release is idempotent and safe before anything was acquired.

/// Handle to a widget mounted into a host element.
pub trait MountedWidget {
    /// Tear the widget down. Consumes the handle.
    fn destroy(self: Box<Self>);
}

/// Slot owning at most one mounted widget.
#[derive(Default)]
pub struct WidgetSlot {
    handle: Option<Box<dyn MountedWidget>>,
}

impl WidgetSlot {
    /// Empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a freshly mounted widget, destroying any previous one.
    pub fn acquire(&mut self, widget: Box<dyn MountedWidget>) {
        self.release();
        self.handle = Some(widget);
    }

    /// Destroy the held widget, if any.
    pub fn release(&mut self) {
        if let Some(widget) = self.handle.take() {
            widget.destroy();
            tracing::debug!("embedded widget released");
        }
    }

    /// Whether a widget is currently held.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for WidgetSlot {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for WidgetSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetSlot")
            .field("mounted", &self.is_mounted())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Probe(Rc<Cell<u32>>);

    impl MountedWidget for Probe {
        fn destroy(self: Box<Self>) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn release_before_acquire_is_harmless() {
        let mut slot = WidgetSlot::new();
        slot.release();
        slot.release();
        assert!(!slot.is_mounted());
    }

    #[test]
    fn release_destroys_exactly_once() {
        let destroyed = Rc::new(Cell::new(0));
        let mut slot = WidgetSlot::new();
        slot.acquire(Box::new(Probe(Rc::clone(&destroyed))));
        assert!(slot.is_mounted());
        slot.release();
        slot.release();
        drop(slot);
        assert_eq!(destroyed.get(), 1);
    }

    #[test]
    fn reacquire_and_drop_destroy_previous_handles() {
        let destroyed = Rc::new(Cell::new(0));
        {
            let mut slot = WidgetSlot::new();
            slot.acquire(Box::new(Probe(Rc::clone(&destroyed))));
            slot.acquire(Box::new(Probe(Rc::clone(&destroyed))));
            assert_eq!(destroyed.get(), 1);
        }
        assert_eq!(destroyed.get(), 2);
    }
}
