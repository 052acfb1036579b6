use algo_ladder::utils::{
    bubble_sort, bubblesort, insertion_sort, insertionsort, is_sorted_by, merge_sort, mergesort,
    quick_sort,
};
use proptest::prelude::*;

type Sort = fn(&[i32]) -> Vec<i32>;

const SORTS: [(&str, Sort); 4] = [
    ("bubble", bubble_sort::<i32>),
    ("insertion", insertion_sort::<i32>),
    ("merge", merge_sort::<i32>),
    ("quick", quick_sort::<i32>),
];

fn bubble_by(v: &[(i8, usize)]) -> Vec<(i8, usize)> {
    let mut ret = v.to_vec();
    bubblesort(&mut ret, |x, y| x.0 < y.0);
    ret
}

fn insertion_by(v: &[(i8, usize)]) -> Vec<(i8, usize)> {
    let mut ret = v.to_vec();
    insertionsort(&mut ret, |x, y| x.0 < y.0);
    ret
}

fn merge_by(v: &[(i8, usize)]) -> Vec<(i8, usize)> {
    mergesort(v, |x, y| x.0 < y.0)
}

fn tagged(keys: Vec<i8>) -> Vec<(i8, usize)> {
    keys.into_iter().enumerate().map(|(i, k)| (k, i)).collect()
}

#[test]
fn reverse_and_sorted_inputs() {
    let ascending: Vec<i32> = (0 .. 200).collect();
    let descending: Vec<i32> = (0 .. 200).rev().collect();
    for (name, sort) in SORTS.iter() {
        assert_eq!(sort(&ascending), ascending, "{}", name);
        assert_eq!(sort(&descending), ascending, "{}", name);
    }
}

proptest! {
    #[test]
    fn sorts_permute_into_order(v in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut expected = v.clone();
        expected.sort();
        for (name, sort) in SORTS.iter() {
            let sorted = sort(&v);
            prop_assert!(is_sorted_by(&sorted, |a, b| a < b), "{} left disorder", name);
            prop_assert_eq!(&sorted, &expected, "{} changed the multiset", name);
        }
    }

    #[test]
    fn sorts_are_idempotent(v in prop::collection::vec(-20i32..20, 0..100)) {
        for (name, sort) in SORTS.iter() {
            let once = sort(&v);
            prop_assert_eq!(sort(&once), once, "{}", name);
        }
    }

    #[test]
    fn input_is_left_alone(v in prop::collection::vec(any::<i32>(), 0..50)) {
        let copy = v.clone();
        for (_, sort) in SORTS.iter() {
            let _ = sort(&v);
            prop_assert_eq!(&v, &copy);
        }
    }

    #[test]
    fn stable_sorts_keep_equal_keys_in_order(keys in prop::collection::vec(-4i8..4, 0..120)) {
        let v = tagged(keys);
        let mut expected = v.clone();
        expected.sort_by_key(|x| x.0);

        prop_assert_eq!(bubble_by(&v), expected.clone());
        prop_assert_eq!(insertion_by(&v), expected.clone());
        prop_assert_eq!(merge_by(&v), expected);
    }
}
