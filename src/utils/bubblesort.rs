/// Exchange sort with early exit. A pass without swaps means the slice is
/// sorted, so already sorted input costs a single pass.
pub fn bubblesort<T, F: Fn(&T, &T) -> bool>(myslice: &mut [T], less: F) {
    let len = myslice.len();
    for pass in 0 .. len {
        let mut swapped = false;
        for j in 1 .. len - pass {
            if less(&myslice[j], &myslice[j - 1]) {
                myslice.swap(j, j - 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }
}

pub fn bubble_sort<T: PartialOrd + Clone>(items: &[T]) -> Vec<T> {
    let _span = tracing::trace_span!("bubble_sort", len = items.len()).entered();
    let mut ret = items.to_vec();
    bubblesort(&mut ret, |a, b| a < b);
    ret
}
