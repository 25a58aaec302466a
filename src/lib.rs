mod error;
mod linked_list;
mod stack;

pub mod search;
pub mod sort;

pub use error::{ListError, Result};
pub use linked_list::{IntoIter, Iter, LinkedList};
pub use stack::Stack;
