//! Traversal combinators over any [`Sequence`]-shaped container.
//!
//! Every combinator walks the container's natural iteration order and
//! borrows it only for the duration of the call. The read-only combinators
//! take `&seq`, so a visitor cannot mutate the container it is walking — the
//! borrow checker rejects it. The mutating ones ([`remove`], [`remove_if`],
//! [`pop`]) take `&mut seq` and document exactly what they change.
//!
//! Visitor and predicate parameter types are recovered from the container's
//! element type; the caller writes plain closures and never names `T`.

use crate::callable::{IndexedVisitor, Predicate, Visitor};
use crate::sequence::{PopFront, Retain, Sequence};

/// Visits every element once, in the container's natural order.
///
/// The combinator itself performs no mutation; any side effect belongs to
/// the visitor.
///
/// # Example
///
/// ```
/// use braid_core::traverse;
///
/// let words = vec!["spin", "weave"];
/// let mut lengths = Vec::new();
///
/// traverse::each(&words, |word: &&str| lengths.push(word.len()));
///
/// assert_eq!(lengths, vec![4, 5]);
/// ```
pub fn each<S, V>(seq: &S, mut visitor: V)
where
    S: Sequence,
    V: Visitor<S::Item>,
{
    for item in seq.iter() {
        visitor.visit(item);
    }
}

/// Visits every element with its zero-based position, in natural order.
///
/// # Example
///
/// ```
/// use braid_core::traverse;
///
/// let letters = vec!['a', 'b', 'c'];
/// let mut indexed = Vec::new();
///
/// traverse::each_indexed(&letters, |ch: &char, i: usize| indexed.push((i, *ch)));
///
/// assert_eq!(indexed, vec![(0, 'a'), (1, 'b'), (2, 'c')]);
/// ```
pub fn each_indexed<S, V>(seq: &S, mut visitor: V)
where
    S: Sequence,
    V: IndexedVisitor<S::Item>,
{
    for (index, item) in seq.iter().enumerate() {
        visitor.visit(item, index);
    }
}

/// Returns `true` on the first element satisfying `predicate`, visiting no
/// element beyond it.
///
/// Returns `false` when no element matches or the container is empty. This
/// is a short-circuiting "does any element satisfy" search.
///
/// # Example
///
/// ```
/// use braid_core::traverse;
///
/// let readings = vec![12, 48, 3];
///
/// assert!(traverse::until(&readings, |r: &i32| *r > 40));
/// assert!(!traverse::until(&readings, |r: &i32| *r > 100));
/// ```
pub fn until<S, P>(seq: &S, mut predicate: P) -> bool
where
    S: Sequence,
    P: Predicate<S::Item>,
{
    for item in seq.iter() {
        if predicate.test(item) {
            return true;
        }
    }

    false
}

/// Removes every element equal to `target`, preserving the relative order of
/// the survivors.
///
/// Equality is the element type's own `PartialEq`; an element type without
/// one fails to compile. Calling this again once no element equals `target`
/// is a no-op.
///
/// # Example
///
/// ```
/// use braid_core::traverse;
///
/// let mut tags = vec!["x", "y", "x", "z"];
/// traverse::remove(&mut tags, &"x");
///
/// assert_eq!(tags, vec!["y", "z"]);
/// ```
pub fn remove<S>(seq: &mut S, target: &S::Item)
where
    S: Retain,
    S::Item: PartialEq,
{
    seq.retain_where(|item| item != target);
}

/// Removes every element for which `predicate` returns `true`, preserving
/// the relative order of the survivors.
///
/// # Example
///
/// ```
/// use braid_core::traverse;
///
/// let mut numbers = vec![1, 2, 3, 4];
/// traverse::remove_if(&mut numbers, |n: &i32| n % 2 == 0);
///
/// assert_eq!(numbers, vec![1, 3]);
/// ```
pub fn remove_if<S, P>(seq: &mut S, mut predicate: P)
where
    S: Retain,
    P: Predicate<S::Item>,
{
    seq.retain_where(|item| !predicate.test(item));
}

/// Returns the first element satisfying `predicate`, by value, or `None`
/// when no element matches or the container is empty.
///
/// Read-only: the container is untouched.
///
/// # Example
///
/// ```
/// use braid_core::traverse;
///
/// let names = vec!["ada", "grace", "edsger"];
///
/// assert_eq!(
///     traverse::find(&names, |n: &&str| n.len() > 3),
///     Some("grace"),
/// );
/// assert_eq!(traverse::find(&names, |n: &&str| n.is_empty()), None);
/// ```
pub fn find<S, P>(seq: &S, mut predicate: P) -> Option<S::Item>
where
    S: Sequence,
    S::Item: Clone,
    P: Predicate<S::Item>,
{
    for item in seq.iter() {
        if predicate.test(item) {
            return Some(item.clone());
        }
    }

    None
}

/// Removes and returns the first element, or `None` when the container is
/// empty (which leaves it unchanged).
///
/// Requires a container with a well-defined front ([`PopFront`]); asking
/// this of a vector or an associative container is a compile error.
///
/// # Example
///
/// ```
/// use std::collections::VecDeque;
/// use braid_core::traverse;
///
/// let mut queue: VecDeque<i32> = [10, 20].into_iter().collect();
///
/// assert_eq!(traverse::pop(&mut queue), Some(10));
/// assert_eq!(traverse::pop(&mut queue), Some(20));
/// assert_eq!(traverse::pop(&mut queue), None);
/// ```
pub fn pop<S>(seq: &mut S) -> Option<S::Item>
where
    S: PopFront,
{
    seq.pop_front()
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, LinkedList, VecDeque};

    use super::*;

    #[test]
    fn each_visits_every_element_once_in_order() {
        let items = vec![10, 20, 30];
        let mut seen = Vec::new();

        each(&items, |n: &i32| seen.push(*n));

        assert_eq!(seen, vec![10, 20, 30]);
    }

    #[test]
    fn each_on_an_empty_container_never_calls_the_visitor() {
        let items: Vec<i32> = Vec::new();
        let mut calls = 0;

        each(&items, |_: &i32| calls += 1);

        assert_eq!(calls, 0);
    }

    #[test]
    fn each_indexed_passes_consecutive_indices_from_zero() {
        let items: LinkedList<char> = ['p', 'q', 'r'].into_iter().collect();
        let mut indices = Vec::new();

        each_indexed(&items, |_: &char, i: usize| indices.push(i));

        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn until_reports_whether_any_element_matches() {
        let items = vec![1, 3, 5, 6];

        assert!(until(&items, |n: &i32| n % 2 == 0));
        assert!(!until(&items, |n: &i32| *n > 10));
    }

    #[test]
    fn until_is_false_on_an_empty_container() {
        let items: VecDeque<i32> = VecDeque::new();

        assert!(!until(&items, |_: &i32| true));
    }

    #[test]
    fn until_short_circuits_at_the_first_match() {
        let items = vec![4, 8, 15, 16, 23];
        let mut evaluations = 0;

        let matched = until(&items, |n: &i32| {
            evaluations += 1;
            *n == 15
        });

        assert!(matched);
        assert_eq!(evaluations, 3);
    }

    #[test]
    fn remove_drops_all_equal_elements_and_keeps_order() {
        let mut items = vec!['x', 'y', 'x', 'z'];

        remove(&mut items, &'x');

        assert_eq!(items, vec!['y', 'z']);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut items = vec![5, 1, 5, 9];

        remove(&mut items, &5);
        remove(&mut items, &5);

        assert_eq!(items, vec![1, 9]);
    }

    #[test]
    fn remove_leaves_non_matching_containers_alone() {
        let mut items: LinkedList<i32> = [1, 2, 3].into_iter().collect();

        remove(&mut items, &99);

        assert_eq!(items.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn remove_if_drops_exactly_the_matching_elements() {
        let mut items = vec![1, 2, 3, 4];

        remove_if(&mut items, |n: &i32| n % 2 == 0);

        assert_eq!(items, vec![1, 3]);
    }

    #[test]
    fn remove_if_works_on_ordered_sets() {
        let mut items: BTreeSet<i32> = (1..=6).collect();

        remove_if(&mut items, |n: &i32| *n < 4);

        assert_eq!(items.into_iter().collect::<Vec<_>>(), vec![4, 5, 6]);
    }

    #[test]
    fn find_returns_the_earliest_match() {
        let items = vec![9, 14, 21, 28];

        assert_eq!(find(&items, |n: &i32| n % 7 == 0), Some(14));
    }

    #[test]
    fn find_is_none_when_nothing_matches_or_container_is_empty() {
        let items = vec![1, 2, 3];
        let empty: Vec<i32> = Vec::new();

        assert_eq!(find(&items, |n: &i32| *n > 50), None);
        assert_eq!(find(&empty, |_: &i32| true), None);
    }

    #[test]
    fn find_does_not_mutate_the_container() {
        let items = vec![1, 2, 3];

        find(&items, |n: &i32| *n == 2);

        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn pop_returns_the_head_and_shifts_the_rest_forward() {
        let mut queue: VecDeque<&str> = ["a", "b", "c"].into_iter().collect();

        assert_eq!(pop(&mut queue), Some("a"));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.front(), Some(&"b"));
    }

    #[test]
    fn pop_on_an_empty_container_is_none_and_changes_nothing() {
        let mut list: LinkedList<u8> = LinkedList::new();

        assert_eq!(pop(&mut list), None);
        assert!(list.is_empty());
    }

    #[test]
    fn find_then_remove_deletes_at_least_the_found_element() {
        let mut items = vec![2, 7, 4, 7];
        let is_lucky = |n: &i32| *n == 7;

        let found = find(&items, is_lucky);
        remove_if(&mut items, is_lucky);

        assert_eq!(found, Some(7));
        assert!(!until(&items, is_lucky));
        assert_eq!(items, vec![2, 4]);
    }

    #[test]
    fn visitors_defined_as_types_also_traverse() {
        struct Sum<'a>(&'a mut i64);

        impl Visitor<i64> for Sum<'_> {
            fn visit(&mut self, item: &i64) {
                *self.0 += item;
            }
        }

        let items: VecDeque<i64> = [3, 4, 5].into_iter().collect();
        let mut total = 0;

        each(&items, Sum(&mut total));

        assert_eq!(total, 12);
    }
}
