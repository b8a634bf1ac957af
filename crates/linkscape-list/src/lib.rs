//! Linkscape List - The singly linked list behind the visualizer
//!
//! An ordered chain of owned nodes supporting append, delete-by-value, clear
//! and lazy traversal. Nothing in here knows about rendering; the scene crate
//! only ever reads the list through [`LinkedList::values`].

mod error;
mod list;
mod value;

pub use error::ListError;
pub use list::{LinkedList, Values};
pub use value::NodeValue;
