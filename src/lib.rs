//! Classical algorithms and data structures: comparison sorts, a resizable
//! array with an amortized growth policy, and a couple of search routines.
//!
//! ```
//! use algo_ladder::container::DynamicArray;
//! use algo_ladder::utils::merge_sort;
//! use algo_ladder::search::binary_search;
//!
//! let mut arr = DynamicArray::with_capacity(2).unwrap();
//! arr.append(3);
//! arr.append(1);
//! arr.append(2);
//! assert_eq!(arr.capacity(), 4);
//!
//! let items: Vec<i32> = arr.iter().copied().collect();
//! let sorted = merge_sort(&items);
//! assert_eq!(binary_search(&sorted, &2), Some(1));
//! ```

#[macro_use]
mod macros;

pub mod container;
pub mod error;
pub mod search;
pub mod utils;

#[cfg(test)]
mod random;

pub use container::DynamicArray;
pub use error::ContainerError;
