use core::borrow::Borrow;

/// The key window of one handle. Both ends are inclusive; `None` is open.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Bounds<K> {
    first: Option<K>,
    last: Option<K>,
}

impl<K> Bounds<K> {
    pub(crate) const fn unbounded() -> Self {
        Self { first: None, last: None }
    }

    pub(crate) const fn new(first: Option<K>, last: Option<K>) -> Self {
        Self { first, last }
    }

    pub(crate) const fn first(&self) -> Option<&K> {
        self.first.as_ref()
    }

    pub(crate) const fn last(&self) -> Option<&K> {
        self.last.as_ref()
    }

    /// True if either end is open.
    pub(crate) const fn is_open(&self) -> bool {
        self.first.is_none() || self.last.is_none()
    }
}

impl<K: Ord> Bounds<K> {
    /// `first <= key <= last`, skipping whichever end is open.
    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let above_first = self.first.as_ref().is_none_or(|first| {
            let first: &Q = first.borrow();
            first <= key
        });
        let below_last = self.last.as_ref().is_none_or(|last| {
            let last: &Q = last.borrow();
            key <= last
        });
        above_first && below_last
    }

    /// Both ends set and `last <= first`.
    ///
    /// A window with `first == last` counts as degenerate even though a key
    /// equal to both would pass [`contains`](Self::contains).
    pub(crate) fn is_degenerate(&self) -> bool {
        matches!((&self.first, &self.last), (Some(first), Some(last)) if last <= first)
    }
}
