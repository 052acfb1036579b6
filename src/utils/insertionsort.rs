pub fn insertionsort<T, F: Fn(&T, &T) -> bool>(myslice: &mut [T], less: F) {
    let len = myslice.len();
    for i in 1 .. len {
        let mut j = i;
        // the prefix is sorted, so stop at the first element not greater than the key
        while j > 0 && less(&myslice[j], &myslice[j - 1]) {
            myslice.swap(j, j - 1);
            j -= 1;
        }
    }
}

pub fn insertion_sort<T: PartialOrd + Clone>(items: &[T]) -> Vec<T> {
    let _span = tracing::trace_span!("insertion_sort", len = items.len()).entered();
    let mut ret = items.to_vec();
    insertionsort(&mut ret, |a, b| a < b);
    ret
}
