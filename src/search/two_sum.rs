use std::collections::HashMap;
use std::hash::Hash;

/// Values whose partner towards a target sum can be computed exactly.
pub trait Complement: Copy + Eq + Hash {
    /// `target - self`, or `None` when it is not representable.
    fn complement(self, target: Self) -> Option<Self>;
}

impl_complement!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Finds two positions whose values add up to `target` in a single pass.
///
/// Every value remembers the first position it was seen at. The pair that
/// is completed first while scanning wins, earlier position first.
///
/// # Examples
///
/// ```
/// use algo_ladder::search::two_sum;
///
/// assert_eq!(two_sum(&[2, 7, 11, 15], 9), Some((0, 1)));
/// assert_eq!(two_sum(&[2, 7, 11, 15], 100), None);
/// ```
pub fn two_sum<T: Complement>(items: &[T], target: T) -> Option<(usize, usize)> {
    let mut seen: HashMap<T, usize> = HashMap::with_capacity(items.len());
    for (i, &item) in items.iter().enumerate() {
        let earlier = item.complement(target).and_then(|wanted| seen.get(&wanted));
        if let Some(&j) = earlier {
            return Some((j, i));
        }

        seen.entry(item).or_insert(i);
    }

    None
}
