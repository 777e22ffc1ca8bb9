use std::fmt::{self, Display, Formatter};

use dlist::DoublyLinkedList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Vertex {
    x: i32,
    y: i32,
}

impl From<(i32, i32)> for Vertex {
    fn from((x, y): (i32, i32)) -> Vertex {
        Vertex { x, y }
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(X: {}, Y: {})", self.x, self.y)
    }
}

fn main() {
    let mut list = DoublyLinkedList::<Vertex>::new();
    list.push_back(Vertex { x: 1, y: 1 });
    list.push_back(Vertex { x: 2, y: 2 });
    list.push_front(Vertex { x: 0, y: 0 });
    list.emplace_back((3, 3));

    for vertex in list.iter() {
        print!("{vertex}, ");
    }
    println!();

    for i in 0..list.len() {
        print!("{}, ", list[i]);
    }
    println!();

    list.pop_back();
    list.pop_front();

    for i in 0..list.len() {
        print!("{}, ", list[i]);
    }
    println!();

    println!("Done!");
}
