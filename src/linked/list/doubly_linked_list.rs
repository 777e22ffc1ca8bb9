use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};

use derive_more::IsVariant;

use super::{Iter, IterMut, Length, Node, NodeRef, ONE};
use crate::linked::cursor::{Cursor, CursorInner, CursorPos, CursorState};
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds, ListError, Underflow};
use crate::util::result::ResultExtension;

/// A list with links in both directions. See also: [`Cursor`] for bi-directional traversal and
/// mutation at a position.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DoublyLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `is_in_range` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `emplace_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `insert` | `O(min(i, n-i))` |
/// | `remove` | `O(min(i, n-i))` |
/// | `replace` | `O(min(i, n-i))` |
/// | `append` | `O(1)` |
/// | `contains` | `O(n)` |
///
/// As a general note, modern computer architecture isn't kind to linked lists, (or more
/// importantly, favours contiguous collections) because all `O(i)` or `O(n)` operations will
/// consist primarily of cache misses. For this reason, `Vec` should be preferred for most
/// applications unless DoublyLinkedList and the accompanying [`Cursor`] type's `O(1)` methods are
/// being heavily utilized.
#[derive(PartialEq, Eq, Hash)]
pub struct DoublyLinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(PartialEq, Eq, Hash, IsVariant)]
pub(crate) enum ListState<T> {
    Empty,
    Full(Inner<T>),
}

// Derived like this rather than with the macro, which would put a needless Default bound on T.
impl<T> Default for ListState<T> {
    fn default() -> Self {
        Empty
    }
}

use ListState::*;

pub(crate) struct Inner<T> {
    pub len: Length,
    pub head: NodeRef<T>,
    pub tail: NodeRef<T>,
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new DoublyLinkedList with no elements.
    pub const fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of elements in the list.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the list contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns true if `index` refers to an element of the list, i.e. it lies in `0..len`.
    pub const fn is_in_range(&self, index: usize) -> bool {
        index < self.len()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(Inner { head, .. }) => Some(head.value()),
        }
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(Inner { mut head, .. }) => Some(head.value_mut()),
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(Inner { tail, .. }) => Some(tail.value()),
        }
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(Inner { mut tail, .. }) => Some(tail.value_mut()),
        }
    }

    /// Adds the provided element to the front of the list.
    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(inner) => inner.push_front(value),
        }
    }

    /// Adds the provided element to the back of the list.
    pub fn push_back(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(inner) => inner.push_back(value),
        }
    }

    /// Constructs an element at the front of the list from the provided arguments, usually
    /// supplied as a tuple. The closest Rust gets to in-place construction from an argument set is
    /// a [`From`] conversion, so the element type chooses which bundles it accepts.
    pub fn emplace_front<A>(&mut self, args: A)
    where
        T: From<A>,
    {
        self.push_front(T::from(args));
    }

    /// Constructs an element at the back of the list from the provided arguments, usually supplied
    /// as a tuple. See [`DoublyLinkedList::emplace_front`].
    pub fn emplace_back<A>(&mut self, args: A)
    where
        T: From<A>,
    {
        self.push_back(T::from(args));
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(Inner { len, head, .. }) => {
                let node = head.take_node();

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: Previous length is greater than 1, so the first element is
                        // followed by at least one more.
                        let new_head = unsafe { node.next.unwrap_unchecked() };
                        *head = new_head;
                        *new_head.prev_mut() = None;
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(Inner { len, tail, .. }) => {
                let node = tail.take_node();

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: Previous length is greater than 1, so the last element is
                        // preceded by at least one more.
                        let new_tail = unsafe { node.prev.unwrap_unchecked() };
                        *tail = new_tail;
                        *new_tail.next_mut() = None;
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Removes the first element from the list and returns it, reporting an [`Underflow`] when the
    /// list is empty.
    pub fn try_pop_front(&mut self) -> Result<T, Underflow> {
        self.pop_front().ok_or(Underflow)
    }

    /// Removes the last element from the list and returns it, reporting an [`Underflow`] when the
    /// list is empty.
    pub fn try_pop_back(&mut self) -> Result<T, Underflow> {
        self.pop_back().ok_or(Underflow)
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value())
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value_mut())
    }

    /// Inserts an element so that it occupies the provided `index`, shifting everything after it
    /// one place towards the back. `index == len` appends.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the list.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Non-panicking version of [`DoublyLinkedList::insert`].
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index == 0 {
            self.push_front(value);
            return Ok(());
        }
        if index == self.len() {
            self.push_back(value);
            return Ok(());
        }

        let inner = self.checked_inner_for_index_mut(index)?;
        let prev_node = inner.seek(index - 1);

        inner.len = inner.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodeRef::from_node(Node {
            value,
            prev: Some(prev_node),
            next: *prev_node.next(),
        });

        // SAFETY: We aren't adding at the front or back, so the node before the given index has a
        // successor.
        unsafe { *prev_node.next().unwrap_unchecked().prev_mut() = Some(node); }
        *prev_node.next_mut() = Some(node);

        Ok(())
    }

    /// Removes the element at the provided `index` and returns it, shifting everything after it
    /// one place towards the front.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Non-panicking version of [`DoublyLinkedList::remove`].
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let inner = self.checked_inner_for_index_mut(index)?;

        if index == 0 {
            // SAFETY: The bounds check above guarantees the list isn't empty.
            return Ok(unsafe { self.pop_front().unwrap_unchecked() });
        }
        if index == inner.last_index() {
            // SAFETY: The bounds check above guarantees the list isn't empty.
            return Ok(unsafe { self.pop_back().unwrap_unchecked() });
        }

        let node = inner.seek(index).take_node();

        // SAFETY: The index is neither 0 nor the last, so the node has neighbours on both sides.
        unsafe {
            *node.prev.unwrap_unchecked().next_mut() = node.next;
            *node.next.unwrap_unchecked().prev_mut() = node.prev;
        }
        // SAFETY: An interior index means the length was at least 3.
        inner.len = unsafe { inner.len.checked_sub(1).unwrap_unchecked() };

        Ok(node.value)
    }

    /// Swaps the element at the provided `index` for `new_value`, returning the old element.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the list.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.try_replace(index, new_value).throw()
    }

    /// Non-panicking version of [`DoublyLinkedList::replace`].
    pub fn try_replace(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(
            self.checked_seek(index)?.value_mut(),
            new_value,
        ))
    }

    /// Moves every element of `other` to the back of this list in `O(1)`, leaving `other`'s nodes
    /// in place but re-owned.
    pub fn append(&mut self, other: DoublyLinkedList<T>) {
        // The nodes change hands here, so other mustn't run its destructor.
        let mut other = mem::ManuallyDrop::new(other);

        match &mut self.state {
            Empty => *self = DoublyLinkedList {
                state: mem::take(&mut other.state),
                _phantom: PhantomData,
            },
            Full(self_inner) => match &other.state {
                Empty => {},
                Full(other_inner) => {
                    self_inner.len = self_inner.len
                        .checked_add(other_inner.len.get())
                        .ok_or(CapacityOverflow).throw();

                    *self_inner.tail.next_mut() = Some(other_inner.head);
                    *other_inner.head.prev_mut() = Some(self_inner.tail);
                    self_inner.tail = other_inner.tail;
                },
            },
        }
    }

    /// Converts the list into a [`Cursor`] positioned on the first element, or in the ghost
    /// position of an empty list.
    pub fn cursor_front(mut self) -> Cursor<T> {
        Cursor {
            state: match mem::take(&mut self.state) {
                Empty => CursorState::Empty,
                Full(inner) => CursorState::Full(CursorInner {
                    pos: CursorPos::Ptr {
                        ptr: inner.head,
                        index: 0,
                    },
                    list: inner,
                }),
            },
            _phantom: PhantomData,
        }
    }

    /// Converts the list into a [`Cursor`] positioned on the last element, or in the ghost
    /// position of an empty list.
    pub fn cursor_back(mut self) -> Cursor<T> {
        Cursor {
            state: match mem::take(&mut self.state) {
                Empty => CursorState::Empty,
                Full(inner) => CursorState::Full(CursorInner {
                    pos: CursorPos::Ptr {
                        ptr: inner.tail,
                        index: inner.last_index(),
                    },
                    list: inner,
                }),
            },
            _phantom: PhantomData,
        }
    }

    /// Returns an iterator of mutable references, front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator of references, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: Eq> DoublyLinkedList<T> {
    /// Returns the index of the first element equal to `item`, if one exists.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        for (index, element) in self.iter().enumerate() {
            if element == item { return Some(index); }
        }
        None
    }

    /// Returns true if any element of the list is equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        for i in self.iter() {
            if i == item { return true; }
        }
        false
    }
}

impl<T> DoublyLinkedList<T> {
    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodeRef<T>, IndexOutOfBounds> {
        Ok(self.checked_inner_for_index(index)?.seek(index))
    }

    pub(crate) const fn checked_inner_for_index(
        &self,
        index: usize,
    ) -> Result<&Inner<T>, IndexOutOfBounds> {
        match &self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(inner) => {
                let len = inner.len.get();
                if index < len {
                    Ok(inner)
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }

    pub(crate) const fn checked_inner_for_index_mut(
        &mut self,
        index: usize,
    ) -> Result<&mut Inner<T>, IndexOutOfBounds> {
        match &mut self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(inner) => {
                let len = inner.len.get();
                if index < len {
                    Ok(inner)
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }

    /// Walks the list in both directions, asserting that every pair of neighbouring nodes point at
    /// each other and that the forward walk ends at the tail.
    #[cfg(test)]
    #[allow(clippy::unwrap_used)]
    pub(crate) fn verify_double_links(&self) {
        match self.state {
            Empty => {},
            Full(Inner { head, tail, len }) => {
                assert!(head.prev().is_none());
                assert!(tail.next().is_none());

                let mut count = 1;
                let mut curr = head;
                while let Some(next) = curr.next() {
                    // UNWRAP: This needs to panic if prev is None.
                    assert!(next.prev().unwrap() == curr);
                    curr = *next;
                    count += 1;
                }
                assert!(tail == curr);
                assert_eq!(len.get(), count);
            },
        }
    }
}

impl<T> Inner<T> {
    /// Finds the node at `index`, walking from whichever end is closer. Indices in the lower half
    /// are reached from the head, everything else from the tail.
    pub fn seek(&self, index: usize) -> NodeRef<T> {
        if index < self.len.get() / 2 {
            self.seek_fwd(index, self.head)
        } else {
            self.seek_bwd(self.last_index() - index, self.tail)
        }
    }

    #[allow(clippy::unwrap_used)]
    pub fn seek_fwd(&self, count: usize, mut node: NodeRef<T>) -> NodeRef<T> {
        for _ in 0..count {
            // UNWRAP: The caller only requests walks within the chain.
            node = node.next().unwrap();
        }
        node
    }

    #[allow(clippy::unwrap_used)]
    pub fn seek_bwd(&self, count: usize, mut node: NodeRef<T>) -> NodeRef<T> {
        for _ in 0..count {
            // UNWRAP: The caller only requests walks within the chain.
            node = node.prev().unwrap();
        }
        node
    }

    pub fn push_front(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodeRef::from_node(Node {
            value,
            prev: None,
            next: Some(self.head),
        });

        *self.head.prev_mut() = Some(node);
        self.head = node;
    }

    pub fn push_back(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodeRef::from_node(Node {
            value,
            prev: Some(self.tail),
            next: None,
        });

        *self.tail.next_mut() = Some(node);
        self.tail = node;
    }

    pub fn wrap_one(value: T) -> Inner<T> {
        let node = NodeRef::from_node(Node::unlinked(value));

        Inner {
            len: ONE,
            head: node,
            tail: node,
        }
    }

    pub const fn last_index(&self) -> usize {
        self.len.get() - 1
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(Inner::wrap_one(value))
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(Inner { len, .. }) => len.get(),
        }
    }
}

impl<T> Index<usize> for DoublyLinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for DoublyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter.into_iter() {
            self.push_back(item);
        }
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        match self.state {
            Empty => {},
            Full(Inner { head, .. }) => {
                let mut curr = Some(head);
                while let Some(ptr) = curr {
                    curr = *ptr.next();
                    // SAFETY: Each node is visited exactly once and never touched again.
                    unsafe { ptr.drop_node(); }
                }
            },
        }
    }
}

impl<T: PartialEq> PartialEq for Inner<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len { return false; }
        let mut node_a = self.head;
        let mut node_b = other.head;

        loop {
            if node_a.value() != node_b.value() {
                break false;
            }
            match (node_a.next(), node_b.next()) {
                (Some(next_a), Some(next_b)) => {
                    node_a = *next_a;
                    node_b = *next_b;
                },
                // Both sides have the same length, so if they aren't both Some, they are both None.
                _ => break true,
            }
        }
    }
}

impl<T: Eq> Eq for Inner<T> {}

impl<T: Hash> Hash for Inner<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        let mut node = self.head;

        loop {
            node.value().hash(state);
            match node.next() {
                Some(next) => node = *next,
                None => break,
            }
        }

        // Terminate variable length hashing sequence.
        0xFF.hash(state);
    }
}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Debug> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vec<String>>()
                .join(") -> (")
        )
    }
}
