//! Single-handler callback slots.
//!
//! Each notification channel of the place page holds exactly one handler:
//! setting a new one replaces the old, clearing leaves the channel as a
//! no-op. This is deliberately not a subscriber list; the page has a single
//! owner and the owner decides who listens.

/// A replaceable, single-handler callback slot.
///
/// # Examples
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use placepage_core::Slot;
///
/// let hits = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&hits);
/// let mut slot: Slot<u32> = Slot::default();
/// slot.set(move |n| counter.set(counter.get() + n));
///
/// slot.emit(2);
/// slot.clear();
/// slot.emit(40);
/// assert_eq!(hits.get(), 2);
/// ```
pub struct Slot<A = ()> {
    handler: Option<Box<dyn FnMut(A)>>,
}

impl<A> Default for Slot<A> {
    fn default() -> Self {
        Self { handler: None }
    }
}

impl<A> Slot<A> {
    /// Install `handler`, replacing any previous one.
    pub fn set(&mut self, handler: impl FnMut(A) + 'static) {
        self.handler = Some(Box::new(handler));
    }

    /// Remove the handler; subsequent emits are no-ops.
    pub fn clear(&mut self) {
        self.handler = None;
    }

    /// True when a handler is installed.
    pub fn is_set(&self) -> bool {
        self.handler.is_some()
    }

    /// Invoke the handler, if any, with `args`.
    pub fn emit(&mut self, args: A) {
        if let Some(handler) = self.handler.as_mut() {
            handler(args);
        }
    }
}

impl<A> std::fmt::Debug for Slot<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slot").field("set", &self.is_set()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn emit_without_handler_is_noop() {
        let mut slot: Slot<()> = Slot::default();
        slot.emit(());
        assert!(!slot.is_set());
    }

    #[test]
    fn set_replaces_previous_handler() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let mut slot: Slot<()> = Slot::default();

        let counter = Rc::clone(&first);
        slot.set(move |()| counter.set(counter.get() + 1));
        let counter = Rc::clone(&second);
        slot.set(move |()| counter.set(counter.get() + 1));

        slot.emit(());
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn clear_disables_emission() {
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let mut slot: Slot<()> = Slot::default();
        slot.set(move |()| counter.set(counter.get() + 1));
        slot.clear();
        slot.emit(());
        assert_eq!(hits.get(), 0);
    }
}
