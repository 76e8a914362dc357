use alloc::vec::Vec;
use core::borrow::Borrow;

use super::order_index::{OrderIndex, Position};

/// The shared storage behind a `SortedMap` and all of its views.
///
/// `values[i]` belongs to the key at position `i` of `index`. Every method
/// that moves a key moves its value with it.
pub(crate) struct RawSortedMap<K, V> {
    /// Keys in ascending order. A key is in the map iff it is in here.
    index: OrderIndex<K>,
    /// The backing store: values, parallel to `index`.
    values: Vec<V>,
}

impl<K, V> RawSortedMap<K, V> {
    /// Creates new, empty storage.
    pub(crate) const fn new() -> Self {
        Self {
            index: OrderIndex::new(),
            values: Vec::new(),
        }
    }

    /// Creates new storage with room for `capacity` entries.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            index: OrderIndex::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of entries.
    pub(crate) const fn len(&self) -> usize {
        self.index.len()
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.values.capacity()
    }

    /// Smallest key, regardless of any view bounds.
    pub(crate) fn first_key(&self) -> Option<&K> {
        self.index.first()
    }

    /// Largest key, regardless of any view bounds.
    pub(crate) fn last_key(&self) -> Option<&K> {
        self.index.last()
    }

    /// All entries in ascending key order.
    pub(crate) fn entries(&self) -> impl DoubleEndedIterator<Item = (&K, &V)> {
        self.index.keys().iter().zip(&self.values)
    }
}

impl<K: Ord, V> RawSortedMap<K, V> {
    /// Returns a reference to the value stored under `key`.
    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match self.index.search(key) {
            Position::Found(at) => self.values.get(at),
            Position::Vacant(_) => None,
        }
    }

    pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        matches!(self.index.search(key), Position::Found(_))
    }

    /// Inserts a key-value pair.
    /// Returns the old value if the key was already present.
    ///
    /// # Panics
    ///
    /// Panics if the order index and the backing store have drifted apart.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.assert_in_step("insert");
        match self.index.search(&key) {
            Position::Found(at) => Some(core::mem::replace(&mut self.values[at], value)),
            Position::Vacant(at) => {
                self.index.insert_at(at, key);
                self.values.insert(at, value);
                tracing::trace!(operation = "insert", len = self.len(), "new key added to storage");
                None
            }
        }
    }

    /// Removes `key`, returning its value if it was present.
    ///
    /// # Panics
    ///
    /// Panics if the order index and the backing store have drifted apart.
    /// That is corruption and there is nothing sensible to recover.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.assert_in_step("remove");
        let Position::Found(at) = self.index.search(key) else {
            return None;
        };

        self.index.remove_at(at);
        Some(self.values.remove(at))
    }

    fn assert_in_step(&self, operation: &str) {
        assert_eq!(
            self.index.len(),
            self.values.len(),
            "`RawSortedMap::{operation}()` - order index out of sync with backing store!"
        );
    }
}
