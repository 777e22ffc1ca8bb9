/// A borrowed view of where a [`Cursor`](super::Cursor) currently sits. Produced by
/// [`Cursor::state`](super::Cursor::state).
#[derive(Debug, PartialEq, Eq)]
pub enum State<'a, T> {
    /// The underlying list has no elements, so there is nowhere to sit.
    Empty,
    /// The ghost position before the first element.
    Head,
    /// The ghost position after the last element.
    Tail,
    /// A live element of the list, whose value is borrowed here.
    Node(&'a T),
}

/// The mutable counterpart of [`State`], produced by
/// [`Cursor::state_mut`](super::Cursor::state_mut).
#[derive(Debug, PartialEq, Eq)]
pub enum StateMut<'a, T> {
    /// The underlying list has no elements, so there is nowhere to sit.
    Empty,
    /// The ghost position before the first element.
    Head,
    /// The ghost position after the last element.
    Tail,
    /// A live element of the list, whose value is mutably borrowed here.
    Node(&'a mut T),
}
