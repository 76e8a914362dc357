use alloc::vec::Vec;
use core::borrow::Borrow;

/// Outcome of a binary search over the order index.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Position {
    /// The key is present at this index.
    Found(usize),
    /// The key is absent; inserting at this index keeps the index sorted.
    Vacant(usize),
}

/// Strictly increasing sequence of the keys in the map.
///
/// A key's position here is also the position of its value in the backing
/// store, so every insert and removal must be mirrored there.
pub(crate) struct OrderIndex<K> {
    keys: Vec<K>,
}

impl<K> OrderIndex<K> {
    pub(crate) const fn new() -> Self {
        Self { keys: Vec::new() }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.keys.len()
    }

    pub(crate) fn first(&self) -> Option<&K> {
        self.keys.first()
    }

    pub(crate) fn last(&self) -> Option<&K> {
        self.keys.last()
    }

    pub(crate) fn keys(&self) -> &[K] {
        &self.keys
    }

    #[inline]
    pub(crate) fn search<Q>(&self, key: &Q) -> Position
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match self.keys.binary_search_by(|k| k.borrow().cmp(key)) {
            Ok(at) => Position::Found(at),
            Err(at) => Position::Vacant(at),
        }
    }

    /// Inserts `key` at `at`, which must come from [`Position::Vacant`].
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the key would not land strictly between its
    /// neighbours.
    pub(crate) fn insert_at(&mut self, at: usize, key: K)
    where
        K: Ord,
    {
        debug_assert!(
            at.checked_sub(1).is_none_or(|before| self.keys[before] < key)
                && self.keys.get(at).is_none_or(|after| key < *after),
            "`OrderIndex::insert_at()` - `at` is not the insertion point for `key`!"
        );
        self.keys.insert(at, key);
    }

    /// Removes the key at `at`, which must come from [`Position::Found`].
    pub(crate) fn remove_at(&mut self, at: usize) -> K {
        self.keys.remove(at)
    }
}
