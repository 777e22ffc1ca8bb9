use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::mem;

use super::{DoublyLinkedList, Inner, Link, ListState};

use ListState::*;

// All three iterators hold both ends of the unvisited chain plus its length, with the length as
// the authority on exhaustion. This keeps the two ends from walking past each other when a caller
// mixes next and next_back, and it leaves no live node doubling as an end marker: a finished
// iterator just returns None forever.

/// A borrowing iterator over a [`DoublyLinkedList`], created by [`DoublyLinkedList::iter`].
pub struct Iter<'a, T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _phantom: PhantomData<&'a T>,
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        match &self.state {
            Empty => Iter {
                head: None,
                tail: None,
                len: 0,
                _phantom: PhantomData,
            },
            Full(Inner { head, tail, len }) => Iter {
                head: Some(*head),
                tail: Some(*tail),
                len: len.get(),
                _phantom: PhantomData,
            },
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 { return None; }
        let ptr = self.head?;
        self.len -= 1;
        self.head = *ptr.next();
        Some(ptr.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 { return None; }
        let ptr = self.tail?;
        self.len -= 1;
        self.tail = *ptr.prev();
        Some(ptr.value())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// A mutably borrowing iterator over a [`DoublyLinkedList`], created by
/// [`DoublyLinkedList::iter_mut`].
pub struct IterMut<'a, T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> IntoIterator for &'a mut DoublyLinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        match &self.state {
            Empty => IterMut {
                head: None,
                tail: None,
                len: 0,
                _phantom: PhantomData,
            },
            Full(Inner { head, tail, len }) => IterMut {
                head: Some(*head),
                tail: Some(*tail),
                len: len.get(),
                _phantom: PhantomData,
            },
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 { return None; }
        let mut ptr = self.head?;
        self.len -= 1;
        self.head = *ptr.next();
        Some(ptr.value_mut())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 { return None; }
        let mut ptr = self.tail?;
        self.len -= 1;
        self.tail = *ptr.prev();
        Some(ptr.value_mut())
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// An owning iterator over a [`DoublyLinkedList`]. Each step moves the value out of its node and
/// frees the allocation; dropping the iterator frees whatever remains unvisited.
pub struct IntoIter<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _phantom: PhantomData<T>,
}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        // Ownership of the nodes transfers to the iterator; the list is left empty so its own
        // destructor has nothing to free.
        match mem::take(&mut self.state) {
            Empty => IntoIter {
                head: None,
                tail: None,
                len: 0,
                _phantom: PhantomData,
            },
            Full(Inner { head, tail, len }) => IntoIter {
                head: Some(head),
                tail: Some(tail),
                len: len.get(),
                _phantom: PhantomData,
            },
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 { return None; }
        let ptr = self.head?;
        self.len -= 1;

        // Use a box to move the value and clean up.
        let node = ptr.take_node();
        if self.len == 0 {
            // The last node is gone, so both end handles are dangling.
            self.head = None;
            self.tail = None;
        } else {
            self.head = node.next;
        }
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 { return None; }
        let ptr = self.tail?;
        self.len -= 1;

        let node = ptr.take_node();
        if self.len == 0 {
            self.head = None;
            self.tail = None;
        } else {
            self.tail = node.prev;
        }
        Some(node.value)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        while self.next().is_some() {}
    }
}
