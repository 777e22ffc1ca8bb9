use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodeRef<T>>;

// NOTE: Nodes are allocated and freed through Box rather than alloc directly, because Box has the
// special property that dereferencing it allows a value to be moved out of the heap.

/// A copyable handle to a heap-allocated [`Node`]. Only the forward chain of handles is ever used
/// to free nodes; back-links exist solely for traversal.
#[derive(Debug)]
pub(crate) struct NodeRef<T>(pub NonNull<Node<T>>);

impl<T> NodeRef<T> {
    pub fn value<'a>(&self) -> &'a T {
        // SAFETY: The pointee is owned by the list and outlives this handle.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn value_mut<'a>(&mut self) -> &'a mut T {
        // SAFETY: The pointee is owned by the list and outlives this handle.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn prev<'a>(&self) -> &'a Link<T> {
        // SAFETY: The pointee is owned by the list and outlives this handle.
        unsafe { &(*self.0.as_ptr()).prev }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn prev_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: The pointee is owned by the list and outlives this handle.
        unsafe { &mut (*self.0.as_ptr()).prev }
    }

    pub fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: The pointee is owned by the list and outlives this handle.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: The pointee is owned by the list and outlives this handle.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    pub fn from_node(node: Node<T>) -> NodeRef<T> {
        NodeRef(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Moves the node back out of the heap, freeing the allocation. Every other copy of this
    /// handle is left dangling, so the caller must unlink them before dereferencing again.
    pub fn take_node(self) -> Node<T> {
        // SAFETY: The pointer was created by from_node and the list reclaims each node exactly
        // once.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    /// Frees the node without moving the value out first.
    ///
    /// # Safety
    /// The caller must ensure that no copy of this handle is dereferenced or freed afterwards.
    pub unsafe fn drop_node(self) {
        // SAFETY: The pointer was created by from_node and per the safety contract, this is the
        // last use of it.
        drop(unsafe { Box::from_raw(self.0.as_ptr()) });
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<T> {}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}

impl<T> Node<T> {
    pub const fn unlinked(value: T) -> Node<T> {
        Node {
            value,
            prev: None,
            next: None,
        }
    }
}
