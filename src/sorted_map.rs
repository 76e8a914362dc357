use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

use crate::ViewError;
use crate::raw::RawSortedMap;

mod bounds;
mod capacity;
mod view;

use bounds::Bounds;

/// A sorted map whose range views share storage with it.
///
/// A `SortedMap` is a handle: it points at storage holding the entries in
/// ascending key order, plus an optional inclusive lower bound and optional
/// inclusive upper bound. [`SortedMap::new`] creates fresh storage and an
/// unbounded handle. [`sub_map`], [`head_map`] and [`tail_map`] create new
/// handles over the *same* storage with narrower bounds, so an entry put
/// through any handle is immediately visible through every other handle
/// whose bounds contain its key.
///
/// Keys outside a handle's bounds are invisible to it: [`get`] reports them
/// absent and [`put`]/[`remove`] leave them alone.
///
/// Handles mutate through `&self`. The storage lives as long as the
/// longest-lived handle; dropping a view never drops entries.
///
/// # Examples
///
/// ```
/// use sortedmap::SortedMap;
///
/// let map = SortedMap::new();
/// for (key, value) in [(1, "a"), (2, "b"), (3, "c"), (4, "d"), (5, "e")] {
///     map.put(key, value);
/// }
///
/// let middle = map.sub_map(2, 4).unwrap();
/// middle.put(2, "z");
///
/// // The write went through to the shared storage.
/// assert_eq!(map.get(&2), Some("z"));
///
/// // Keys outside the window are hidden from the view, not from the map.
/// assert_eq!(middle.get(&5), None);
/// assert_eq!(map.get(&5), Some("e"));
/// ```
///
/// # Empty-value sentinel
///
/// [`put`] and [`remove`] return `V::default()` when there was no entry, so
/// a stored default value cannot be told apart from a missing one. Use
/// [`insert`] and [`take`], which return `Option<V>`, when that matters.
///
/// [`sub_map`]: SortedMap::sub_map
/// [`head_map`]: SortedMap::head_map
/// [`tail_map`]: SortedMap::tail_map
/// [`get`]: SortedMap::get
/// [`put`]: SortedMap::put
/// [`remove`]: SortedMap::remove
/// [`insert`]: SortedMap::insert
/// [`take`]: SortedMap::take
pub struct SortedMap<K, V> {
    raw: Rc<RefCell<RawSortedMap<K, V>>>,
    bounds: Bounds<K>,
    /// `true` for handles made by `sub_map`, `head_map` or `tail_map`.
    is_view: bool,
}

impl<K, V> SortedMap<K, V> {
    /// Makes a new, empty, unbounded `SortedMap`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortedmap::SortedMap;
    ///
    /// let map: SortedMap<i32, &str> = SortedMap::new();
    /// assert!(map.is_empty());
    /// assert_eq!(map.first_key(), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::from_raw(RawSortedMap::new())
    }

    fn from_raw(raw: RawSortedMap<K, V>) -> Self {
        SortedMap {
            raw: Rc::new(RefCell::new(raw)),
            bounds: Bounds::unbounded(),
            is_view: false,
        }
    }

    /// Returns `true` if both handles read and write the same storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortedmap::SortedMap;
    ///
    /// let map = SortedMap::from([(1, 'a'), (9, 'b')]);
    /// let tail = map.tail_map(5).unwrap();
    /// assert!(tail.shares_storage_with(&map));
    /// assert!(!tail.shares_storage_with(&SortedMap::new()));
    /// ```
    #[must_use]
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.raw, &other.raw)
    }
}

impl<K: Ord, V> SortedMap<K, V> {
    /// Returns a copy of the value for `key`, or `None` if the key is
    /// absent or outside this handle's bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortedmap::SortedMap;
    ///
    /// let map = SortedMap::from([(1, "a"), (2, "b"), (3, "c")]);
    /// assert_eq!(map.get(&2), Some("b"));
    /// assert_eq!(map.get(&4), None);
    ///
    /// let head = map.head_map(2).unwrap();
    /// assert_eq!(head.get(&3), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: core::borrow::Borrow<Q>,
        Q: ?Sized + Ord,
        V: Clone,
    {
        if !self.bounds.contains(key) {
            return None;
        }
        RefCell::borrow(&self.raw).get(key).cloned()
    }

    /// Returns `true` if `key` is present and inside this handle's bounds.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: core::borrow::Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.bounds.contains(key) && RefCell::borrow(&self.raw).contains_key(key)
    }

    /// Stores `value` under `key` and returns the value it replaced.
    ///
    /// Returns `V::default()` if there was no previous entry, or if `key`
    /// is outside this handle's bounds (in which case nothing is stored).
    ///
    /// # Examples
    ///
    /// ```
    /// use sortedmap::SortedMap;
    ///
    /// let map = SortedMap::new();
    /// assert_eq!(map.put(1, String::from("foo")), "");
    /// assert_eq!(map.put(1, String::from("bar")), "foo");
    /// assert_eq!(map.get(&1).as_deref(), Some("bar"));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) comparisons, O(n) moves when the key is new.
    pub fn put(&self, key: K, value: V) -> V
    where
        V: Default,
    {
        match self.try_insert(key, value) {
            Ok(previous) => previous.unwrap_or_default(),
            Err(_) => V::default(),
        }
    }

    /// Stores `value` under `key`, returning the previous value if any.
    ///
    /// A key outside this handle's bounds is dropped along with `value` and
    /// `None` is returned; [`try_insert`](Self::try_insert) reports that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortedmap::SortedMap;
    ///
    /// let map = SortedMap::new();
    /// assert_eq!(map.insert(37, 0), None);
    /// assert_eq!(map.insert(37, 1), Some(0));
    /// ```
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.try_insert(key, value).ok().flatten()
    }

    /// Stores `value` under `key`, failing if `key` is outside this handle's
    /// bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::KeyOutOfRange`] if `key` is not inside the
    /// bounds. The storage is untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortedmap::{SortedMap, ViewError};
    ///
    /// let map = SortedMap::from([(1, 'a'), (5, 'e')]);
    /// let head = map.head_map(3).unwrap();
    /// assert_eq!(head.try_insert(2, 'b'), Ok(None));
    /// assert_eq!(head.try_insert(4, 'd'), Err(ViewError::KeyOutOfRange));
    /// assert_eq!(map.get(&4), None);
    /// ```
    pub fn try_insert(&self, key: K, value: V) -> Result<Option<V>, ViewError> {
        if !self.bounds.contains(&key) {
            tracing::debug!(operation = "insert", error = %ViewError::KeyOutOfRange, "mutation ignored");
            return Err(ViewError::KeyOutOfRange);
        }
        Ok(RefCell::borrow_mut(&self.raw).insert(key, value))
    }

    /// Removes `key` and returns its value, or `V::default()` if the key is
    /// absent or outside this handle's bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortedmap::SortedMap;
    ///
    /// let map = SortedMap::from([(1, "foo"), (2, "bar")]);
    /// assert_eq!(map.remove(&2), "bar");
    /// assert_eq!(map.remove(&2), "");
    /// assert_eq!(map.get(&2), None);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the shared storage is found to be corrupt.
    pub fn remove<Q>(&self, key: &Q) -> V
    where
        K: core::borrow::Borrow<Q>,
        Q: ?Sized + Ord,
        V: Default,
    {
        self.take(key).unwrap_or_default()
    }

    /// Removes `key` and returns its value, or `None` if the key is absent
    /// or outside this handle's bounds.
    ///
    /// # Panics
    ///
    /// Panics if the shared storage is found to be corrupt.
    pub fn take<Q>(&self, key: &Q) -> Option<V>
    where
        K: core::borrow::Borrow<Q>,
        Q: ?Sized + Ord,
    {
        if !self.bounds.contains(key) {
            tracing::debug!(operation = "remove", error = %ViewError::KeyOutOfRange, "mutation ignored");
            return None;
        }
        RefCell::borrow_mut(&self.raw).remove(key)
    }

    /// Returns `true` if the storage has no entries, or if this handle's
    /// bounds describe an empty window (`last <= first`).
    ///
    /// This looks only at the bounds, not at which keys fall inside them.
    /// In particular a window with `first == last` is empty even when that
    /// key is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortedmap::SortedMap;
    ///
    /// let map = SortedMap::from([(1, ()), (2, ()), (3, ())]);
    /// assert!(!map.is_empty());
    /// assert!(!map.sub_map(1, 2).unwrap().is_empty());
    /// assert!(map.sub_map(2, 2).unwrap().is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        RefCell::borrow(&self.raw).is_empty() || self.bounds.is_degenerate()
    }
}

impl<K: Ord + Clone, V> SortedMap<K, V> {
    /// Returns the lowest key this handle can see.
    ///
    /// A view reports its lower bound as-is, whether or not a key equal to
    /// it is present, and `None` if it has no lower bound (a
    /// [`head_map`](Self::head_map)). An unbounded map reports the smallest
    /// key in storage, or `None` when the storage is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortedmap::SortedMap;
    ///
    /// let map = SortedMap::from([(3, "c"), (2, "b"), (1, "a")]);
    /// assert_eq!(map.first_key(), Some(1));
    /// assert_eq!(map.tail_map(0).unwrap().first_key(), Some(0));
    /// assert_eq!(map.head_map(2).unwrap().first_key(), None);
    /// ```
    #[must_use]
    pub fn first_key(&self) -> Option<K> {
        match self.bounds.first() {
            Some(first) => Some(first.clone()),
            None if self.is_view => None,
            None => RefCell::borrow(&self.raw).first_key().cloned(),
        }
    }

    /// Returns the highest key this handle can see.
    ///
    /// A view reports its upper bound, and `None` if it has none (a
    /// [`tail_map`](Self::tail_map)). An unbounded map reports the largest
    /// key in storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortedmap::SortedMap;
    ///
    /// let map = SortedMap::from([(3, "c"), (2, "b"), (1, "a")]);
    /// assert_eq!(map.last_key(), Some(3));
    /// assert_eq!(map.head_map(2).unwrap().last_key(), Some(2));
    /// assert_eq!(map.tail_map(2).unwrap().last_key(), None);
    /// ```
    #[must_use]
    pub fn last_key(&self) -> Option<K> {
        match self.bounds.last() {
            Some(last) => Some(last.clone()),
            None if self.is_view => None,
            None => RefCell::borrow(&self.raw).last_key().cloned(),
        }
    }

    /// The inclusive lower bound of this handle, `None` if open.
    #[must_use]
    pub fn lower_bound(&self) -> Option<K> {
        self.bounds.first().cloned()
    }

    /// The inclusive upper bound of this handle, `None` if open.
    #[must_use]
    pub fn upper_bound(&self) -> Option<K> {
        self.bounds.last().cloned()
    }
}

impl<K, V> Default for SortedMap<K, V> {
    /// Creates an empty, unbounded `SortedMap`.
    fn default() -> SortedMap<K, V> {
        SortedMap::new()
    }
}

impl<K: Ord + fmt::Debug, V: fmt::Debug> fmt::Debug for SortedMap<K, V> {
    /// Shows the entries visible through this handle.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = RefCell::borrow(&self.raw);
        f.debug_map().entries(raw.entries().filter(|(key, _)| self.bounds.contains(*key))).finish()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SortedMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> SortedMap<K, V> {
        let mut raw = RawSortedMap::new();
        for (key, value) in iter {
            raw.insert(key, value);
        }
        SortedMap::from_raw(raw)
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for SortedMap<K, V> {
    /// Converts a `[(K, V); N]` into a `SortedMap<K, V>`.
    ///
    /// If any entries in the array have equal keys, all but one of the
    /// corresponding values are dropped.
    ///
    /// ```
    /// use sortedmap::SortedMap;
    ///
    /// let map1 = SortedMap::from([(1, 2), (3, 4)]);
    /// let map2: SortedMap<_, _> = [(1, 2), (3, 4)].into();
    /// assert_eq!(map1.get(&3), map2.get(&3));
    /// ```
    fn from(arr: [(K, V); N]) -> Self {
        SortedMap::from_iter(arr)
    }
}
