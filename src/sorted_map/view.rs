use alloc::rc::Rc;
use core::cell::RefCell;

use super::SortedMap;
use super::bounds::Bounds;
use crate::ViewError;

impl<K: Ord, V> SortedMap<K, V> {
    /// Returns a view of the keys in `from..=to`, sharing this map's storage.
    ///
    /// The request must lie inside this handle's own bounds. Returns `None`
    /// if it does not, if `from > to`, or if this handle is unbounded on
    /// either side while the storage has no entries.
    ///
    /// The upper end is inclusive.
    ///
    /// A side of this handle with no bound covers any key, including keys
    /// beyond the smallest or largest one stored: over keys `1..=5` an
    /// unbounded map accepts `sub_map(0, 9)`. The stored keys are never
    /// consulted, only whether there are any. A map that tracked its
    /// current extremes as bounds would refuse that request instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortedmap::SortedMap;
    ///
    /// let map = SortedMap::from([(1, "a"), (2, "b"), (3, "c"), (4, "d"), (5, "e")]);
    /// let sub = map.sub_map(2, 4).unwrap();
    /// assert_eq!(sub.get(&4), Some("d"));
    /// assert_eq!(sub.get(&5), None);
    ///
    /// // Open sides reach past the stored keys.
    /// let wide = map.sub_map(0, 9).unwrap();
    /// assert_eq!(wide.get(&5), Some("e"));
    ///
    /// // Views can only narrow.
    /// assert!(sub.sub_map(3, 4).is_some());
    /// assert!(sub.sub_map(1, 4).is_none());
    ///
    /// let empty: SortedMap<i32, &str> = SortedMap::new();
    /// assert!(empty.sub_map(2, 4).is_none());
    /// ```
    #[must_use]
    pub fn sub_map(&self, from: K, to: K) -> Option<Self> {
        self.try_sub_map(from, to).ok()
    }

    /// Like [`sub_map`](Self::sub_map), reporting why the view was refused.
    ///
    /// # Errors
    ///
    /// - [`ViewError::InvertedRange`] if `from > to`.
    /// - [`ViewError::LowerBoundNotCovered`] if `from` is below this handle's lower bound.
    /// - [`ViewError::UpperBoundNotCovered`] if `to` is above this handle's upper bound.
    /// - [`ViewError::EmptyStorage`] if this handle is open on either side and
    ///   the storage has no entries.
    ///
    /// A request past the stored keys on an open side is not an error; see
    /// [`sub_map`](Self::sub_map).
    pub fn try_sub_map(&self, from: K, to: K) -> Result<Self, ViewError> {
        let checked = if from > to {
            Err(ViewError::InvertedRange)
        } else if self.bounds.first().is_some_and(|first| from < *first) {
            Err(ViewError::LowerBoundNotCovered)
        } else if self.bounds.last().is_some_and(|last| *last < to) {
            Err(ViewError::UpperBoundNotCovered)
        } else if self.bounds.is_open() && RefCell::borrow(&self.raw).is_empty() {
            Err(ViewError::EmptyStorage)
        } else {
            Ok(Bounds::new(Some(from), Some(to)))
        };
        self.derive("sub_map", checked)
    }

    /// Returns a view of the keys `<= to`, sharing this map's storage.
    ///
    /// The new view has no lower bound, even if this handle has one.
    /// Returns `None` if `to` is below this handle's lower bound, or if this
    /// handle has no lower bound while the storage has no entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortedmap::SortedMap;
    ///
    /// let map = SortedMap::from([(1, "a"), (2, "b"), (3, "c")]);
    /// let head = map.head_map(2).unwrap();
    /// head.put(1, "z");
    /// assert_eq!(map.get(&1), Some("z"));
    /// assert_eq!(head.get(&3), None);
    /// ```
    #[must_use]
    pub fn head_map(&self, to: K) -> Option<Self> {
        self.try_head_map(to).ok()
    }

    /// Like [`head_map`](Self::head_map), reporting why the view was refused.
    ///
    /// # Errors
    ///
    /// - [`ViewError::LowerBoundNotCovered`] if `to` is below this handle's lower bound.
    /// - [`ViewError::EmptyStorage`] if this handle has no lower bound and the
    ///   storage has no entries.
    pub fn try_head_map(&self, to: K) -> Result<Self, ViewError> {
        let checked = match self.bounds.first() {
            Some(first) if to < *first => Err(ViewError::LowerBoundNotCovered),
            None if RefCell::borrow(&self.raw).is_empty() => Err(ViewError::EmptyStorage),
            _ => Ok(Bounds::new(None, Some(to))),
        };
        self.derive("head_map", checked)
    }

    /// Returns a view of the keys `>= from`, sharing this map's storage.
    ///
    /// The new view has no upper bound, even if this handle has one.
    /// Returns `None` if `from` is above this handle's upper bound, or if
    /// this handle has no upper bound while the storage has no entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortedmap::SortedMap;
    ///
    /// let map = SortedMap::from([(1, "a"), (2, "b"), (3, "c")]);
    /// let tail = map.tail_map(2).unwrap();
    /// assert_eq!(tail.get(&1), None);
    /// assert_eq!(tail.remove(&3), "c");
    /// assert_eq!(map.get(&3), None);
    /// ```
    #[must_use]
    pub fn tail_map(&self, from: K) -> Option<Self> {
        self.try_tail_map(from).ok()
    }

    /// Like [`tail_map`](Self::tail_map), reporting why the view was refused.
    ///
    /// # Errors
    ///
    /// - [`ViewError::UpperBoundNotCovered`] if `from` is above this handle's upper bound.
    /// - [`ViewError::EmptyStorage`] if this handle has no upper bound and the
    ///   storage has no entries.
    pub fn try_tail_map(&self, from: K) -> Result<Self, ViewError> {
        let checked = match self.bounds.last() {
            Some(last) if *last < from => Err(ViewError::UpperBoundNotCovered),
            None if RefCell::borrow(&self.raw).is_empty() => Err(ViewError::EmptyStorage),
            _ => Ok(Bounds::new(Some(from), None)),
        };
        self.derive("tail_map", checked)
    }

    fn derive(&self, operation: &'static str, bounds: Result<Bounds<K>, ViewError>) -> Result<Self, ViewError> {
        match bounds {
            Ok(bounds) => {
                tracing::trace!(operation, "view created");
                Ok(SortedMap {
                    raw: Rc::clone(&self.raw),
                    bounds,
                    is_view: true,
                })
            }
            Err(error) => {
                tracing::debug!(operation, %error, "view rejected");
                Err(error)
            }
        }
    }
}
