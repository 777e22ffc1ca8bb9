//! A generic doubly-linked list, written from the pointers up.
//!
//! # Purpose
//! This crate is a single data-structure exercise: [`DoublyLinkedList`] owns a chain of
//! heap-allocated nodes and provides `O(1)` insertion and removal at both ends, indexed access
//! which walks from whichever end is closer, and bi-directional iteration. The accompanying
//! [`Cursor`] type takes ownership of a list for traversal and mutation at a position, with ghost
//! positions either side of the chain standing in for a past-the-end sentinel.
//!
//! # Method
//! Ownership of nodes flows strictly head-to-tail: each node's forward link is the owning one and
//! back-links exist only so traversal can run both ways. The list's state is an enum over Empty
//! and Full, with the Full variant carrying a `NonZero` length, so the "head and tail are null
//! exactly when the count is zero" invariant is a matter of representation rather than discipline.
//!
//! # Error Handling
//! When this crate employs errors via [`Result`]s, it does so in a method that is strongly typed,
//! using enums for static dispatch rather than dynamic, with structs (often ZSTs) that implement
//! [`Error`](std::error::Error). Indexing out of `0..len` reports
//! [`IndexOutOfBounds`](linked::list::IndexOutOfBounds); popping from an empty list reports
//! [`Underflow`](linked::list::Underflow) through the `try_pop` methods. The panicking variants
//! panic with the same messages.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod linked;

pub(crate) mod util;

#[doc(inline)]
pub use linked::{Cursor, DoublyLinkedList};
