use tracing::debug;

/// A subscriber to an [`Event`] stream.
///
/// Anything with a single `handle` method can listen; closures taking the
/// event argument by reference qualify through the blanket impl below.
pub trait Listener<A> {
    fn handle(&mut self, arg: &A);
}

impl<A, F> Listener<A> for F
where
    F: FnMut(&A),
{
    fn handle(&mut self, arg: &A) {
        self(arg)
    }
}

/// Handle returned by [`Event::add`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// An owned list of listeners notified synchronously, in subscription order.
pub struct Event<A> {
    listeners: Vec<(ListenerId, Box<dyn Listener<A>>)>,
    next_id: u64,
}

impl<A> Event<A> {
    pub fn new() -> Self {
        Event {
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn add(&mut self, listener: Box<dyn Listener<A>>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        debug!("Subscribed listener {:?} ({} total)", id, self.listeners.len());
        id
    }

    pub fn remove(&mut self, id: ListenerId) -> Option<Box<dyn Listener<A>>> {
        let index = self.listeners.iter().position(|(other, _)| *other == id)?;
        let (_, listener) = self.listeners.remove(index);
        debug!("Unsubscribed listener {:?}", id);
        Some(listener)
    }

    pub fn notify(&mut self, arg: &A) {
        for (_, listener) in self.listeners.iter_mut() {
            listener.handle(arg);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<A> Default for Event<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn notifies_listeners_in_subscription_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut event = Event::<u32>::new();

        let first = Rc::clone(&seen);
        event.add(Box::new(move |value: &u32| first.borrow_mut().push(("first", *value))));
        let second = Rc::clone(&seen);
        event.add(Box::new(move |value: &u32| second.borrow_mut().push(("second", *value))));

        event.notify(&7);

        assert_eq!(*seen.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn removed_listener_is_no_longer_notified() {
        let count = Rc::new(RefCell::new(0));
        let mut event = Event::<()>::new();

        let counter = Rc::clone(&count);
        let id = event.add(Box::new(move |_: &()| *counter.borrow_mut() += 1));
        event.notify(&());
        assert!(event.remove(id).is_some());
        event.notify(&());

        assert_eq!(*count.borrow(), 1);
        assert!(event.is_empty());
        assert!(event.remove(id).is_none());
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut event = Event::<()>::new();
        let a = event.add(Box::new(|_: &()| {}));
        event.remove(a);
        let b = event.add(Box::new(|_: &()| {}));
        assert_ne!(a, b);
        assert_eq!(event.len(), 1);
    }
}
