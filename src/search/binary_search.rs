use std::cmp::Ordering;

/// Bisection over an ascending slice. Returns the position of some element
/// equal to `target`; with duplicates any of them may be reported.
///
/// # Examples
///
/// ```
/// use algo_ladder::search::binary_search;
///
/// let numbers = [1, 3, 5, 7, 9, 11, 13];
/// assert_eq!(binary_search(&numbers, &7), Some(3));
/// assert_eq!(binary_search(&numbers, &10), None);
/// ```
pub fn binary_search<T: PartialOrd>(sorted: &[T], target: &T) -> Option<usize> {
    // half-open [low, high) keeps the bounds in usize without an underflow at zero
    let mut low = 0;
    let mut high = sorted.len();
    while low < high {
        let mid = low + (high - low) / 2;
        match sorted[mid].partial_cmp(target) {
            Some(Ordering::Equal) => return Some(mid),
            Some(Ordering::Less) => low = mid + 1,
            Some(Ordering::Greater) | None => high = mid,
        }
    }

    None
}
