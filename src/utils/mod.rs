//! Comparison sorts.
//!
//! Every algorithm comes in two flavours: a worker driven by a `less`
//! predicate (`a` goes strictly before `b`) and a convenience function for
//! `PartialOrd` elements which sorts a copy and leaves the input alone.

mod bubblesort;
mod insertionsort;
mod mergesort;
mod quicksort;

pub use self::bubblesort::{bubble_sort, bubblesort};
pub use self::insertionsort::{insertion_sort, insertionsort};
pub use self::mergesort::{merge_sort, mergesort};
pub use self::quicksort::{quick_sort, quicksort};

/// Checks that no element goes strictly before its predecessor.
pub fn is_sorted_by<T, F: Fn(&T, &T) -> bool>(myslice: &[T], less: F) -> bool {
    myslice.windows(2).all(|pair| !less(&pair[1], &pair[0]))
}
