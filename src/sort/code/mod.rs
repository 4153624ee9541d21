//! Sorting implementations.
//!
//! Each function sorts its slice ascending, in place.

mod bubble;
mod counting;
mod merge;
mod quick;

pub use bubble::bubble_sort;
pub use counting::counting_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
