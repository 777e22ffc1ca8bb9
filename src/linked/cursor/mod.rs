mod cursor;
mod state;

mod tests;

pub use cursor::*;
pub use state::*;
