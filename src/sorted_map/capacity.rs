use core::cell::RefCell;

use super::SortedMap;
use crate::raw::RawSortedMap;

impl<K, V> SortedMap<K, V> {
    /// Creates an empty, unbounded map with storage for at least `capacity`
    /// entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortedmap::SortedMap;
    ///
    /// let map: SortedMap<i32, i32> = SortedMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_raw(RawSortedMap::with_capacity(capacity))
    }

    /// Returns the capacity of the shared storage.
    ///
    /// Every view reports the capacity of the storage it shares.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortedmap::SortedMap;
    ///
    /// let map = SortedMap::with_capacity(8);
    /// map.put(1, 'a');
    /// let view = map.head_map(4).unwrap();
    /// assert_eq!(view.capacity(), map.capacity());
    /// ```
    #[must_use]
    pub fn capacity(&self) -> usize {
        RefCell::borrow(&self.raw).capacity()
    }
}
