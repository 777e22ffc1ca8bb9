#![cfg(test)]

use std::iter;

use super::*;
use crate::linked::DoublyLinkedList;
use crate::util::alloc::CountedDrop;
use crate::util::error::IndexOutOfBounds;
use crate::util::panic::assert_panics;

#[test]
fn test_navigation() {
    let list: DoublyLinkedList<u32> = (0..3).collect();
    let mut cursor = list.cursor_front();

    assert_eq!(cursor.read(), Some(&0));
    assert_eq!(cursor.index(), Some(0));

    cursor.move_next().move_next();
    assert_eq!(cursor.read(), Some(&2));
    assert_eq!(cursor.index(), Some(2));

    cursor.move_next();
    assert!(
        cursor.is_tail(),
        "Moving past the last element should land on the ghost, not a node."
    );
    assert_eq!(cursor.read(), None);
    assert_eq!(cursor.index(), None);

    cursor.move_next();
    assert!(
        cursor.is_tail(),
        "Moving next from the tail ghost should saturate."
    );

    cursor.move_prev();
    assert_eq!(
        cursor.read(),
        Some(&2),
        "Moving back from the tail ghost should reach the last element."
    );

    cursor.move_prev().move_prev().move_prev();
    assert!(cursor.is_head());
    cursor.move_prev();
    assert!(
        cursor.is_head(),
        "Moving prev from the head ghost should saturate."
    );
}

#[test]
fn test_cursor_back() {
    let list: DoublyLinkedList<u32> = (0..4).collect();
    let mut cursor = list.cursor_back();

    assert_eq!(cursor.read(), Some(&3));
    assert_eq!(cursor.index(), Some(3));

    let mut collected = Vec::new();
    while let Some(value) = cursor.read() {
        collected.push(*value);
        cursor.move_prev();
    }
    assert_eq!(
        collected,
        [3, 2, 1, 0],
        "Walking prev from the back should visit everything in reverse."
    );
}

#[test]
fn test_empty_cursor() {
    let mut cursor = DoublyLinkedList::<u32>::new().cursor_front();

    assert!(cursor.is_empty());
    assert_eq!(cursor.len(), 0);
    assert_eq!(cursor.read(), None);
    assert_eq!(cursor.state(), State::Empty);
    assert!(!cursor.is_head());
    assert!(!cursor.is_tail());

    cursor.move_next();
    assert_eq!(cursor.state(), State::Empty, "An empty cursor has nowhere to go.");

    cursor.push_next(5);
    assert_eq!(cursor.len(), 1);
    assert_eq!(cursor.read_next(), Some(&5));
    assert!(cursor.is_head(), "Pushing into an empty cursor should leave it on a ghost.");
}

#[test]
fn test_state() {
    let list: DoublyLinkedList<u32> = (0..2).collect();
    let mut cursor = list.cursor_front();

    assert_eq!(cursor.state(), State::Node(&0));

    if let StateMut::Node(value) = cursor.state_mut() {
        *value = 10;
    }
    assert_eq!(cursor.read(), Some(&10));

    cursor.move_prev();
    assert_eq!(cursor.state(), State::Head);
    cursor.move_next().move_next().move_next();
    assert_eq!(cursor.state(), State::Tail);
}

#[test]
fn test_reads_around_position() {
    let list: DoublyLinkedList<u32> = (0..3).collect();
    let mut cursor = list.cursor_front();
    cursor.move_next();

    assert_eq!(cursor.read_prev(), Some(&0));
    assert_eq!(cursor.read(), Some(&1));
    assert_eq!(cursor.read_next(), Some(&2));

    cursor.move_prev();
    assert_eq!(cursor.read_prev(), None, "Nothing precedes the first element.");
    cursor.move_prev();
    assert_eq!(
        cursor.read_next(),
        Some(&0),
        "From the head ghost, the next element is the front."
    );
}

#[test]
fn test_move_to() {
    let list: DoublyLinkedList<u32> = (0..10).collect();
    let mut cursor = list.cursor_front();

    // Both targets resolve through the near-end seek heuristic.
    assert_eq!(cursor.move_to(8).read(), Some(&8));
    assert_eq!(cursor.index(), Some(8));
    assert_eq!(cursor.move_to(1).read(), Some(&1));

    assert!(matches!(
        cursor.try_move_to(10),
        Err(IndexOutOfBounds { index: 10, len: 10 })
    ));
    assert_eq!(
        cursor.read(),
        Some(&1),
        "A failed move should leave the cursor where it was."
    );

    assert_panics!(
        {
            DoublyLinkedList::<u32>::new().cursor_front().move_to(0);
        },
        "move_to should panic on an empty cursor."
    );
}

#[test]
fn test_push_at_position() {
    let list: DoublyLinkedList<u32> = (0..3).collect();
    let mut cursor = list.cursor_front();
    cursor.move_next();

    cursor.push_next(10);
    assert_eq!(cursor.read(), Some(&1), "push_next shouldn't move the cursor.");
    assert_eq!(cursor.index(), Some(1));

    cursor.push_prev(20);
    assert_eq!(cursor.read(), Some(&1), "push_prev shouldn't move the cursor.");
    assert_eq!(
        cursor.index(),
        Some(2),
        "An element added before the cursor shifts its index up."
    );

    let list = cursor.list();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 20, 1, 10, 2]);
    list.verify_double_links();
}

#[test]
fn test_push_at_ends() {
    let list: DoublyLinkedList<u32> = (1..2).collect();
    let mut cursor = list.cursor_front();

    cursor.move_prev();
    cursor.push_next(0);
    cursor.move_next();
    assert_eq!(cursor.read(), Some(&0), "push_next at the head ghost should push front.");

    cursor.move_next().move_next().move_next();
    assert!(cursor.is_tail());
    cursor.push_prev(2);

    let list = cursor.list();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2]);
    list.verify_double_links();
}

#[test]
fn test_pop_at_position() {
    let list: DoublyLinkedList<u32> = (0..5).collect();
    let mut cursor = list.cursor_front();
    cursor.move_to(2);

    assert_eq!(cursor.pop_next(), Some(3));
    assert_eq!(cursor.pop_prev(), Some(1));
    assert_eq!(cursor.read(), Some(&2), "Popping neighbours shouldn't move the cursor.");
    assert_eq!(
        cursor.index(),
        Some(1),
        "An element removed before the cursor shifts its index down."
    );

    let list = cursor.list();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 2, 4]);
    list.verify_double_links();
}

#[test]
fn test_pop_at_ends() {
    let list: DoublyLinkedList<u32> = (0..2).collect();
    let mut cursor = list.cursor_back();

    assert_eq!(
        cursor.pop_next(),
        None,
        "Nothing follows the last element, despite the list not being empty."
    );

    cursor.move_next();
    assert!(cursor.is_tail());
    assert_eq!(cursor.pop_prev(), Some(1), "pop_prev at the tail ghost should pop the back.");
    assert_eq!(cursor.pop_prev(), Some(0));
    assert_eq!(cursor.pop_prev(), None);
    assert!(
        cursor.is_empty(),
        "Removing the last element should empty the cursor."
    );
}

#[test]
fn test_pop_next_from_head_to_empty() {
    let list: DoublyLinkedList<u32> = (0..1).collect();
    let mut cursor = list.cursor_front();
    cursor.move_prev();

    assert_eq!(cursor.pop_next(), Some(0));
    assert_eq!(cursor.state(), State::Empty);
    assert_eq!(cursor.pop_next(), None);
}

#[test]
fn test_list_round_trip() {
    let list: DoublyLinkedList<u32> = (0..5).collect();
    let cursor = list.cursor_front();

    let list = cursor.list();
    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        [0, 1, 2, 3, 4],
        "Converting to a cursor and back should preserve the elements."
    );
}

#[test]
fn test_cursor_drop_frees_every_node() {
    let counter = CountedDrop::new();
    let list: DoublyLinkedList<CountedDrop> =
        iter::repeat_with(|| counter.clone()).take(4).collect();

    let cursor = list.cursor_front();
    drop(cursor);
    assert_eq!(
        counter.count(),
        4,
        "Dropping a cursor without converting back should free every node."
    );
}
