use std::iter::Peekable;
use std::vec::IntoIter;

fn merge<T, F: Fn(&T, &T) -> bool>(left: Vec<T>, right: Vec<T>, less: &F) -> Vec<T> {
    let mut ret = Vec::with_capacity(left.len() + right.len());
    let mut left: Peekable<IntoIter<T>> = left.into_iter().peekable();
    let mut right: Peekable<IntoIter<T>> = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            // ties go to the left run to keep the sort stable
            (Some(l), Some(r)) => !less(r, l),
            _ => break,
        };

        let next = if take_left { left.next() } else { right.next() };
        ret.extend(next);
    }

    ret.extend(left);
    ret.extend(right);
    ret
}

fn _mergesort<T: Clone, F: Fn(&T, &T) -> bool>(myslice: &[T], less: &F) -> Vec<T> {
    let len = myslice.len();
    if len < 2 {
        return myslice.to_vec();
    }

    let mid = len / 2;
    let left = _mergesort(&myslice[..mid], less);
    let right = _mergesort(&myslice[mid..], less);
    merge(left, right, less)
}

pub fn mergesort<T: Clone, F: Fn(&T, &T) -> bool>(myslice: &[T], less: F) -> Vec<T> {
    _mergesort(myslice, &less)
}

pub fn merge_sort<T: PartialOrd + Clone>(items: &[T]) -> Vec<T> {
    let _span = tracing::trace_span!("merge_sort", len = items.len()).entered();
    mergesort(items, |a, b| a < b)
}
