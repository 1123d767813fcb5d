//! Ordered collection that notifies subscribers on change.

use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};

/// Handle returned by [`ObservableList::subscribe`].
pub type SubscriptionId = u64;

/// Change delivered to observers after the list was mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListChange {
    Appended { index: usize },
    Cleared { removed: usize },
}

type Observer<T> = Box<dyn FnMut(ListChange, &[T]) + Send>;

/// Process-local ordered list with subscription semantics.
///
/// Observers run synchronously on the mutating thread, in subscription order,
/// and see the list contents after the change.
pub struct ObservableList<T> {
    items: Vec<T>,
    observers: BTreeMap<SubscriptionId, Observer<T>>,
    next_subscription: SubscriptionId,
}

impl<T> Default for ObservableList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            observers: BTreeMap::new(),
            next_subscription: 0,
        }
    }
}

impl<T> ObservableList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Appends one item and returns its index.
    pub fn push(&mut self, item: T) -> usize {
        let index = self.items.len();
        self.items.push(item);
        self.notify(ListChange::Appended { index });
        index
    }

    /// Removes all items and returns how many were removed.
    ///
    /// Observers are not notified when the list was already empty.
    pub fn clear(&mut self) -> usize {
        let removed = self.items.len();
        if removed == 0 {
            return 0;
        }
        self.items.clear();
        self.notify(ListChange::Cleared { removed });
        removed
    }

    /// Registers an observer and returns its handle.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(ListChange, &[T]) + Send + 'static,
    {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.observers.insert(id, Box::new(observer));
        id
    }

    /// Removes an observer. Returns `false` for unknown handles.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(&id).is_some()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify(&mut self, change: ListChange) {
        let items = self.items.as_slice();
        for observer in self.observers.values_mut() {
            observer(change, items);
        }
    }
}

impl<T: Debug> Debug for ObservableList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservableList")
            .field("items", &self.items)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{ListChange, ObservableList};
    use std::sync::{Arc, Mutex};

    #[test]
    fn observers_see_appends_in_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut list = ObservableList::new();
        list.subscribe(move |change, items: &[u32]| {
            sink.lock().unwrap().push((change, items.len()));
        });

        list.push(7);
        list.push(9);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                (ListChange::Appended { index: 0 }, 1),
                (ListChange::Appended { index: 1 }, 2),
            ]
        );
    }

    #[test]
    fn unsubscribed_observer_is_not_called() {
        let calls = Arc::new(Mutex::new(0_u32));
        let sink = Arc::clone(&calls);
        let mut list = ObservableList::new();
        let id = list.subscribe(move |_, _: &[u32]| *sink.lock().unwrap() += 1);

        assert!(list.unsubscribe(id));
        assert!(!list.unsubscribe(id));
        list.push(1);

        assert_eq!(*calls.lock().unwrap(), 0);
        assert_eq!(list.observer_count(), 0);
    }

    #[test]
    fn clear_on_empty_list_is_silent() {
        let calls = Arc::new(Mutex::new(0_u32));
        let sink = Arc::clone(&calls);
        let mut list: ObservableList<u32> = ObservableList::new();
        list.subscribe(move |_, _| *sink.lock().unwrap() += 1);

        assert_eq!(list.clear(), 0);
        assert_eq!(*calls.lock().unwrap(), 0);
    }
}
