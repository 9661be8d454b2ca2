//! Shape implementations for the standard library's ordered containers.
//!
//! Maps are absent on purpose: their elements are key-value pairs that are
//! not stored as pairs, so an element-by-reference iterator cannot exist.
//! They still participate in type extraction through
//! [`TypeParam`](crate::extract::TypeParam).

use std::collections::{BTreeSet, LinkedList, VecDeque};
use std::mem;

use super::{PopFront, Retain, Sequence};

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_slice().iter()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T> Retain for Vec<T> {
    fn retain_where<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.retain(keep);
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn iter(&self) -> impl Iterator<Item = &T> {
        VecDeque::iter(self)
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

impl<T> Retain for VecDeque<T> {
    fn retain_where<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.retain(keep);
    }
}

impl<T> PopFront for VecDeque<T> {
    fn pop_front(&mut self) -> Option<T> {
        VecDeque::pop_front(self)
    }
}

impl<T> Sequence for LinkedList<T> {
    type Item = T;

    fn iter(&self) -> impl Iterator<Item = &T> {
        LinkedList::iter(self)
    }

    fn len(&self) -> usize {
        LinkedList::len(self)
    }
}

impl<T> Retain for LinkedList<T> {
    // `LinkedList` has no stable retain, so this is a rebuild filter: drain
    // the old list and push back the keepers, preserving relative order.
    fn retain_where<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        let drained = mem::take(self);

        for item in drained {
            if keep(&item) {
                self.push_back(item);
            }
        }
    }
}

impl<T> PopFront for LinkedList<T> {
    fn pop_front(&mut self) -> Option<T> {
        LinkedList::pop_front(self)
    }
}

impl<T> Sequence for BTreeSet<T> {
    type Item = T;

    fn iter(&self) -> impl Iterator<Item = &T> {
        BTreeSet::iter(self)
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }
}

impl<T: Ord> Retain for BTreeSet<T> {
    fn retain_where<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.retain(keep);
    }
}
