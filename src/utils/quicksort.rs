use super::insertionsort::insertionsort;

fn median_of_three<T: Clone, F: Fn(&T, &T) -> bool>(myslice: &[T], less: &F) -> T {
    let len = myslice.len();
    let mut candidates = [
        myslice[0].clone(),
        myslice[len / 2].clone(),
        myslice[len - 1].clone(),
    ];
    insertionsort(&mut candidates, less);
    let [_, median, _] = candidates;
    median
}

enum Segment<T> {
    Unsorted(Vec<T>),
    Settled(Vec<T>),
}

// Segments live on a heap stack instead of the call stack, so inputs that
// defeat the pivot cost quadratic time but never exhaust the thread stack.
fn actual_quicksort<T: Clone, F: Fn(&T, &T) -> bool>(myslice: &[T], less: &F) -> Vec<T> {
    let mut ret = Vec::with_capacity(myslice.len());
    let mut pending = vec![Segment::Unsorted(myslice.to_vec())];
    while let Some(segment) = pending.pop() {
        let mut items = match segment {
            Segment::Settled(items) => items,
            Segment::Unsorted(items) if items.len() < 2 => items,
            Segment::Unsorted(items) => {
                let pivot = median_of_three(&items, less);
                let mut lt = Vec::new();
                let mut eq = Vec::new();
                let mut gt = Vec::new();
                for item in items {
                    if less(&item, &pivot) {
                        lt.push(item);
                    } else if less(&pivot, &item) {
                        gt.push(item);
                    } else {
                        eq.push(item);
                    }
                }

                // popped in output order: less, equal, greater
                pending.push(Segment::Unsorted(gt));
                pending.push(Segment::Settled(eq));
                pending.push(Segment::Unsorted(lt));
                continue;
            }
        };

        ret.append(&mut items);
    }

    ret
}

/// Three-way quicksort with a median-of-three pivot. Elements equivalent to
/// the pivot are settled in one step and never recursed into.
pub fn quicksort<T: Clone, F: Fn(&T, &T) -> bool>(myslice: &[T], less: F) -> Vec<T> {
    actual_quicksort(myslice, &less)
}

pub fn quick_sort<T: PartialOrd + Clone>(items: &[T]) -> Vec<T> {
    let _span = tracing::trace_span!("quick_sort", len = items.len()).entered();
    quicksort(items, |a, b| a < b)
}
