mod std_impls;

/// An ordered, iterable sequence of elements with a known element type.
///
/// The element type is recovered from the container type alone through the
/// `Item` associated type, so callers of the [`traverse`](crate::traverse)
/// combinators never write it out. Iteration order is the container's own
/// natural order; implementations must not reorder or buffer.
///
/// # Example
///
/// ```
/// use braid_core::Sequence;
///
/// fn total<S: Sequence<Item = i32>>(seq: &S) -> i32 {
///     seq.iter().sum()
/// }
///
/// assert_eq!(total(&vec![1, 2, 3]), 6);
/// ```
pub trait Sequence {
    /// The element type, uniquely determined by the container type.
    type Item;

    /// Visits the elements in the container's natural order.
    fn iter(&self) -> impl Iterator<Item = &Self::Item>;

    /// The number of elements currently held.
    fn len(&self) -> usize;

    /// Whether the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-place, order-preserving removal of elements that fail a keep test.
///
/// This is the compaction seam behind [`traverse::remove`] and
/// [`traverse::remove_if`]: one left-to-right pass that drops rejected
/// elements while preserving the relative order of survivors. No live
/// iterator is held across a removal, so the erase-while-iterating hazard of
/// cursor-based designs cannot arise.
///
/// [`traverse::remove`]: crate::traverse::remove
/// [`traverse::remove_if`]: crate::traverse::remove_if
pub trait Retain: Sequence {
    /// Keeps exactly the elements for which `keep` returns `true`.
    fn retain_where<F>(&mut self, keep: F)
    where
        F: FnMut(&Self::Item) -> bool;
}

/// Removal from the front, for queue- and list-shaped containers.
///
/// Deliberately not implemented for `Vec` or associative containers: the
/// [`traverse::pop`](crate::traverse::pop) combinator is a head-removal
/// operation, and a container without a cheap, well-defined front simply
/// does not satisfy this shape — at compile time.
pub trait PopFront: Sequence {
    /// Removes and returns the first element, or `None` when empty.
    fn pop_front(&mut self) -> Option<Self::Item>;
}
