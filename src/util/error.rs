use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// The error produced when indexing a list outside of the range `0..len`.
#[derive(Debug, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for list with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// The error produced when popping from a list with no elements.
#[derive(Debug, PartialEq, Eq)]
pub struct Underflow;

impl Display for Underflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to pop from an empty list!")
    }
}

impl Error for Underflow {}

/// The error produced when a list would exceed [`usize::MAX`] elements.
#[derive(Debug, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// A union of every error the list can produce, for callers that want to handle them through a
/// single type. Each variant only exposes the ability to describe itself via [`Display`] and
/// [`Error`].
#[derive(Debug, Display, Error, From, TryInto, IsVariant, PartialEq, Eq)]
pub enum ListError {
    IndexOutOfBounds(IndexOutOfBounds),
    Underflow(Underflow),
    CapacityOverflow(CapacityOverflow),
}
