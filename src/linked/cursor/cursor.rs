use std::marker::PhantomData;
use std::mem;

use derive_more::IsVariant;

use super::{State, StateMut};
use crate::linked::list::{DoublyLinkedList, Inner, ListState, Node, NodeRef};
use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// A type for bi-directional traversal and mutation of [`DoublyLinkedList`]s. See
/// [`DoublyLinkedList::cursor_front`] and [`DoublyLinkedList::cursor_back`] to create one.
///
/// The cursor takes ownership of the list, so no structural edit can invalidate it; the list is
/// returned by [`Cursor::list`]. Either side of the chain holds a 'ghost' position
/// ([`State::Head`] before the first node, [`State::Tail`] after the last) which is distinct from
/// every live node, and
/// moves saturate at the ghosts rather than wrapping or clamping on a real element.
pub struct Cursor<T> {
    pub(crate) state: CursorState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(IsVariant)]
pub(crate) enum CursorState<T> {
    Empty,
    Full(CursorInner<T>),
}

use CursorState::*;

// Derived like this rather than with the macro, which would put a needless Default bound on T.
impl<T> Default for CursorState<T> {
    fn default() -> Self {
        Empty
    }
}

pub(crate) struct CursorInner<T> {
    pub list: Inner<T>,
    pub pos: CursorPos<T>,
}

#[derive(IsVariant)]
pub(crate) enum CursorPos<T> {
    Head,
    Tail,
    Ptr {
        ptr: NodeRef<T>,
        index: usize,
    },
}

use CursorPos::*;

impl<T> Cursor<T> {
    /// Consumes the cursor, returning the list it was traversing.
    pub fn list(mut self) -> DoublyLinkedList<T> {
        DoublyLinkedList {
            state: match mem::take(&mut self.state) {
                Empty => ListState::Empty,
                Full(CursorInner { list, .. }) => ListState::Full(list),
            },
            _phantom: PhantomData,
        }
    }

    /// Returns the number of elements in the underlying list.
    pub const fn len(&self) -> usize {
        match &self.state {
            Empty => 0,
            Full(CursorInner { list, .. }) => list.len.get(),
        }
    }

    /// Returns true if the underlying list contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns the index of the element the cursor is pointing to, or [`None`] from a ghost
    /// position.
    pub const fn index(&self) -> Option<usize> {
        match &self.state {
            Empty => None,
            Full(CursorInner { pos, .. }) => match pos {
                Head | Tail => None,
                Ptr { index, .. } => Some(*index),
            },
        }
    }

    /// Returns true if the cursor is in the ghost position before the first element.
    pub const fn is_head(&self) -> bool {
        match &self.state {
            Empty => false,
            Full(CursorInner { pos, .. }) => pos.is_head(),
        }
    }

    /// Returns true if the cursor is in the ghost position after the last element.
    pub const fn is_tail(&self) -> bool {
        match &self.state {
            Empty => false,
            Full(CursorInner { pos, .. }) => pos.is_tail(),
        }
    }

    /// Describes the position of the cursor, borrowing the value it points to if there is one.
    pub fn state(&self) -> State<'_, T> {
        match &self.state {
            Empty => State::Empty,
            Full(CursorInner { pos, .. }) => match pos {
                Head => State::Head,
                Tail => State::Tail,
                Ptr { ptr, .. } => State::Node(ptr.value()),
            },
        }
    }

    /// Describes the position of the cursor, mutably borrowing the value it points to if there is
    /// one.
    pub fn state_mut(&mut self) -> StateMut<'_, T> {
        match &mut self.state {
            Empty => StateMut::Empty,
            Full(CursorInner { pos, .. }) => match pos {
                Head => StateMut::Head,
                Tail => StateMut::Tail,
                Ptr { ptr, .. } => StateMut::Node(ptr.value_mut()),
            },
        }
    }

    /// Returns a reference to the current element, or [`None`] from a ghost position.
    pub fn read(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(CursorInner { pos, .. }) => match pos {
                Ptr { ptr, .. } => Some(ptr.value()),
                _ => None,
            },
        }
    }

    /// Returns a mutable reference to the current element, or [`None`] from a ghost position.
    pub fn read_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            Empty => None,
            Full(CursorInner { pos, .. }) => match pos {
                Ptr { ptr, .. } => Some(ptr.value_mut()),
                _ => None,
            },
        }
    }

    /// Returns a reference to the element after the cursor without moving, or [`None`] if nothing
    /// follows.
    pub fn read_next(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(CursorInner { list, pos }) => match pos {
                Head => Some(list.head.value()),
                Tail => None,
                Ptr { ptr, .. } => match ptr.next() {
                    Some(next_node) => Some(next_node.value()),
                    None => None,
                },
            },
        }
    }

    /// Returns a reference to the element before the cursor without moving, or [`None`] if nothing
    /// precedes it.
    pub fn read_prev(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(CursorInner { list, pos }) => match pos {
                Head => None,
                Tail => Some(list.tail.value()),
                Ptr { ptr, .. } => match ptr.prev() {
                    Some(prev_node) => Some(prev_node.value()),
                    None => None,
                },
            },
        }
    }

    /// Moves the cursor one step towards the back. From the last element this lands on the
    /// [`State::Tail`] ghost; from the ghost it stays put.
    pub fn move_next(&mut self) -> &mut Self {
        match &mut self.state {
            Empty => (),
            Full(CursorInner { list, pos }) => match pos {
                Head => *pos = Ptr {
                    ptr: list.head,
                    index: 0,
                },
                Tail => (),
                Ptr { ptr, index } => match ptr.next() {
                    Some(next_node) => *pos = Ptr {
                        ptr: *next_node,
                        index: *index + 1,
                    },
                    None => *pos = Tail,
                },
            },
        }
        self
    }

    /// Moves the cursor one step towards the front. From the first element this lands on the
    /// [`State::Head`] ghost; from the ghost it stays put.
    pub fn move_prev(&mut self) -> &mut Self {
        match &mut self.state {
            Empty => (),
            Full(CursorInner { list, pos }) => match pos {
                Head => (),
                Tail => *pos = Ptr {
                    ptr: list.tail,
                    index: list.last_index(),
                },
                Ptr { ptr, index } => match ptr.prev() {
                    Some(prev_node) => *pos = Ptr {
                        ptr: *prev_node,
                        index: *index - 1,
                    },
                    None => *pos = Head,
                },
            },
        }
        self
    }

    /// Repositions the cursor onto the element at `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    pub fn move_to(&mut self, index: usize) -> &mut Self {
        self.try_move_to(index).throw()
    }

    /// Repositions the cursor onto the element at `index`, walking from whichever end is closer.
    pub fn try_move_to(&mut self, index: usize) -> Result<&mut Self, IndexOutOfBounds> {
        match &mut self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(inner) => {
                let len = inner.list.len.get();
                if index >= len {
                    return Err(IndexOutOfBounds { index, len });
                }
                inner.pos = Ptr {
                    ptr: inner.list.seek(index),
                    index,
                };
                Ok(self)
            },
        }
    }

    /// Inserts an element directly after the cursor without moving it. On a ghost position this
    /// becomes a push at the matching end of the list.
    pub fn push_next(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = CursorState::single(value, Head),
            Full(CursorInner { list, pos }) => match pos {
                Head => list.push_front(value),
                Tail => list.push_back(value),
                Ptr { ptr, .. } => {
                    list.len = list.len.checked_add(1).ok_or(CapacityOverflow).throw();

                    let node = NodeRef::from_node(Node {
                        value,
                        prev: Some(*ptr),
                        next: *ptr.next(),
                    });

                    match ptr.next_mut() {
                        Some(second_next) => *second_next.prev_mut() = Some(node),
                        None => list.tail = node,
                    }
                    *ptr.next_mut() = Some(node);
                },
            },
        }
    }

    /// Inserts an element directly before the cursor without moving it (so the current element's
    /// index grows by one). On a ghost position this becomes a push at the matching end.
    pub fn push_prev(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = CursorState::single(value, Tail),
            Full(CursorInner { list, pos }) => match pos {
                Head => list.push_front(value),
                Tail => list.push_back(value),
                Ptr { ptr, index } => {
                    list.len = list.len.checked_add(1).ok_or(CapacityOverflow).throw();

                    let node = NodeRef::from_node(Node {
                        value,
                        prev: *ptr.prev(),
                        next: Some(*ptr),
                    });

                    match ptr.prev_mut() {
                        Some(second_prev) => *second_prev.next_mut() = Some(node),
                        None => list.head = node,
                    }
                    *ptr.prev_mut() = Some(node);
                    *index += 1;
                },
            },
        }
    }

    /// Removes and returns the element directly after the cursor, or [`None`] if nothing follows.
    pub fn pop_next(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(CursorInner { list, pos }) => match pos {
                Head => {
                    let node = list.head.take_node();
                    match node.next {
                        Some(next_node) => {
                            *next_node.prev_mut() = None;
                            list.head = next_node;
                            // SAFETY: We've removed 1 node from a list known to hold at least two:
                            // node and next_node.
                            list.len = unsafe { list.len.checked_sub(1).unwrap_unchecked() };
                        },
                        None => self.state = Empty,
                    }
                    Some(node.value)
                },
                Tail => None,
                Ptr { ptr, .. } => match ptr.next_mut() {
                    Some(next_ptr) => {
                        let next_node = next_ptr.take_node();
                        match next_node.next {
                            Some(second_next) => {
                                *second_next.prev_mut() = Some(*ptr);
                                *ptr.next_mut() = Some(second_next);
                            },
                            None => {
                                list.tail = *ptr;
                                *ptr.next_mut() = None;
                            },
                        }
                        // SAFETY: We've removed 1 node from a list known to hold at least two,
                        // pointed to by ptr and next_ptr.
                        list.len = unsafe { list.len.checked_sub(1).unwrap_unchecked() };
                        Some(next_node.value)
                    },
                    // The cursor is on the last node, so there is nothing after it, despite the
                    // list not being empty.
                    None => None,
                },
            },
        }
    }

    /// Removes and returns the element directly before the cursor, or [`None`] if nothing
    /// precedes it. The current element's index shrinks by one.
    pub fn pop_prev(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(CursorInner { list, pos }) => match pos {
                Head => None,
                Tail => {
                    let node = list.tail.take_node();
                    match node.prev {
                        Some(prev_node) => {
                            *prev_node.next_mut() = None;
                            list.tail = prev_node;
                            // SAFETY: We've removed 1 node from a list known to hold at least two:
                            // node and prev_node.
                            list.len = unsafe { list.len.checked_sub(1).unwrap_unchecked() };
                        },
                        None => self.state = Empty,
                    }
                    Some(node.value)
                },
                Ptr { ptr, index } => match ptr.prev_mut() {
                    Some(prev_ptr) => {
                        let prev_node = prev_ptr.take_node();
                        match prev_node.prev {
                            Some(second_prev) => {
                                *second_prev.next_mut() = Some(*ptr);
                                *ptr.prev_mut() = Some(second_prev);
                            },
                            None => {
                                list.head = *ptr;
                                *ptr.prev_mut() = None;
                            },
                        }
                        // SAFETY: We've removed 1 node from a list known to hold at least two,
                        // pointed to by ptr and prev_ptr.
                        list.len = unsafe { list.len.checked_sub(1).unwrap_unchecked() };
                        *index -= 1;
                        Some(prev_node.value)
                    },
                    // The cursor is on the first node, so there is nothing before it, despite the
                    // list not being empty.
                    None => None,
                },
            },
        }
    }
}

impl<T> CursorState<T> {
    pub(crate) fn single(value: T, pos: CursorPos<T>) -> CursorState<T> {
        Full(CursorInner {
            list: Inner::wrap_one(value),
            pos,
        })
    }
}

impl<T> Drop for Cursor<T> {
    fn drop(&mut self) {
        if let Full(CursorInner { list, .. }) = &self.state {
            let mut curr = Some(list.head);
            while let Some(ptr) = curr {
                curr = *ptr.next();
                // SAFETY: Each node is visited exactly once and never touched again.
                unsafe { ptr.drop_node(); }
            }
        }
    }
}
