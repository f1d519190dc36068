//! Value-change events and listener bookkeeping.
//!
//! The slider republishes position changes of its underlying range widget as
//! typed value-change events. Fan-out is synchronous: every registered
//! listener runs to completion before the mutating call returns. Iteration
//! order is not part of the contract.

use crate::widget::WidgetId;

/// A value-change notification.
///
/// Borrowing the value keeps fan-out allocation-free; a listener that needs
/// to keep the value clones it.
#[derive(Debug, Clone, Copy)]
pub struct SliderEvent<'a, T> {
    /// The widget that changed.
    pub source: WidgetId,
    /// The value at the new position.
    pub current_value: &'a T,
}

/// Opaque handle identifying a registered listener.
///
/// Callbacks are not comparable, so removal goes through the handle returned
/// at registration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Boxed listener callback.
pub type BoxedListener<T> = Box<dyn FnMut(&SliderEvent<'_, T>)>;

/// Registry of value-change listeners.
///
/// Each registration gets a fresh [`ListenerId`], so a listener is invoked
/// exactly once per change event by construction.
pub struct Listeners<T> {
    /// Registered callbacks, in registration order.
    entries: Vec<(ListenerId, BoxedListener<T>)>,
    /// ID counter for generating unique handles.
    next_id: u64,
}

impl<T> Listeners<T> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Registers a callback and returns its removal handle.
    pub fn add(&mut self, listener: impl FnMut(&SliderEvent<'_, T>) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Removes a previously registered callback.
    ///
    /// Returns `false` if the handle is unknown; removal is idempotent.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    /// Invokes every registered callback with the event, synchronously.
    pub fn notify(&mut self, event: &SliderEvent<'_, T>) {
        for (_, listener) in &mut self.entries {
            listener(event);
        }
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no listeners are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Listeners<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn event<'a>(value: &'a &'static str) -> SliderEvent<'a, &'static str> {
        SliderEvent {
            source: WidgetId::new(7),
            current_value: value,
        }
    }

    #[test]
    fn test_each_listener_invoked_once() {
        let mut listeners: Listeners<&str> = Listeners::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        for tag in ["a", "b"] {
            let seen = Rc::clone(&seen);
            listeners.add(move |e| seen.borrow_mut().push((tag, *e.current_value)));
        }

        listeners.notify(&event(&"blue"));

        assert_eq!(*seen.borrow(), vec![("a", "blue"), ("b", "blue")]);
    }

    #[test]
    fn test_removed_listener_not_invoked() {
        let mut listeners: Listeners<&str> = Listeners::new();
        let count = Rc::new(RefCell::new(0));

        let kept = {
            let count = Rc::clone(&count);
            listeners.add(move |_| *count.borrow_mut() += 1)
        };
        let removed = {
            let count = Rc::clone(&count);
            listeners.add(move |_| *count.borrow_mut() += 100)
        };

        assert!(listeners.remove(removed));
        listeners.notify(&event(&"red"));

        assert_eq!(*count.borrow(), 1);
        assert!(listeners.remove(kept));
        assert!(listeners.is_empty());
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut listeners: Listeners<&str> = Listeners::new();
        let id = listeners.add(|_| {});
        assert!(listeners.remove(id));

        // Second removal of the same handle
        assert!(!listeners.remove(id));
        assert_eq!(listeners.len(), 0);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut listeners: Listeners<&str> = Listeners::new();
        let a = listeners.add(|_| {});
        let b = listeners.add(|_| {});

        assert_ne!(a, b);
    }
}
