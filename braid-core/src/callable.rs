//! Visitor and predicate shapes for the traversal combinators.
//!
//! Blanket implementations bridge ordinary closures into these traits, so a
//! call site like `each(&items, |item| ...)` type-checks the closure's
//! parameter against the container's extracted element type. A mismatch is a
//! compile error; there is no runtime check to fail.

/// A callable that observes one element per call.
pub trait Visitor<T> {
    /// Visits a single element.
    fn visit(&mut self, item: &T);
}

impl<T, F> Visitor<T> for F
where
    F: FnMut(&T),
{
    fn visit(&mut self, item: &T) {
        self(item);
    }
}

/// A callable that observes one element and its zero-based position.
pub trait IndexedVisitor<T> {
    /// Visits a single element at `index`.
    fn visit(&mut self, item: &T, index: usize);
}

impl<T, F> IndexedVisitor<T> for F
where
    F: FnMut(&T, usize),
{
    fn visit(&mut self, item: &T, index: usize) {
        self(item, index);
    }
}

/// A callable that decides whether an element matches.
pub trait Predicate<T> {
    /// Tests a single element.
    fn test(&mut self, item: &T) -> bool;
}

impl<T, F> Predicate<T> for F
where
    F: FnMut(&T) -> bool,
{
    fn test(&mut self, item: &T) -> bool {
        self(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A visitor implemented by hand rather than through the closure bridge.
    struct Collector {
        seen: Vec<i32>,
    }

    impl Visitor<i32> for Collector {
        fn visit(&mut self, item: &i32) {
            self.seen.push(*item);
        }
    }

    #[test]
    fn hand_written_visitors_work_alongside_closures() {
        let mut collector = Collector { seen: Vec::new() };
        collector.visit(&7);
        collector.visit(&9);

        assert_eq!(collector.seen, vec![7, 9]);
    }

    #[test]
    fn closures_become_visitors() {
        let mut doubled = Vec::new();
        let mut visitor = |n: &i32| doubled.push(n * 2);

        visitor.visit(&4);
        visitor.visit(&5);
        drop(visitor);

        assert_eq!(doubled, vec![8, 10]);
    }

    #[test]
    fn closures_become_predicates() {
        let mut is_short = |word: &&str| word.len() < 4;

        assert!(is_short.test(&"cat"));
        assert!(!is_short.test(&"ferret"));
    }

    #[test]
    fn indexed_visitors_receive_positions() {
        let mut pairs: Vec<(usize, &'static str)> = Vec::new();
        let mut visitor = |label: &&'static str, index: usize| pairs.push((index, *label));

        visitor.visit(&"first", 0);
        visitor.visit(&"second", 1);
        drop(visitor);

        assert_eq!(pairs, vec![(0, "first"), (1, "second")]);
    }
}
