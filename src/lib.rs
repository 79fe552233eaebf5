pub mod error;
pub mod heap;

#[cfg(test)]
mod testing;

pub use error::{HeapError, Result};
pub use heap::{OrdComparator, PriorityHeap};
