use std::cell::Cell;
use std::rc::Rc;

/// A test double which counts how many times its clones have been dropped, allowing tests to
/// assert that a collection frees exactly as many values as it holds.
#[derive(Debug, Clone)]
pub struct CountedDrop(Rc<Cell<usize>>);

impl CountedDrop {
    pub fn new() -> CountedDrop {
        CountedDrop(Rc::new(Cell::new(0)))
    }

    /// The number of clones dropped so far. Reading through a clone that is still alive, the
    /// original included, doesn't contribute to the count.
    pub fn count(&self) -> usize {
        self.0.get()
    }
}

impl Default for CountedDrop {
    fn default() -> Self {
        CountedDrop::new()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
