use std::fmt;

use super::{DEFAULT_CAPACITY, GROWTH_FACTOR, SHRINK_DIVISOR, SHRINK_FACTOR};
use crate::error::{ContainerError, Result};


/// Resizable array with amortized O(1) append.
///
/// The backing buffer doubles when an append or insert finds it full and
/// halves as soon as a removal leaves it a quarter full. Slots past `len()`
/// are always empty.
///
/// # Examples
///
/// ```
/// use algo_ladder::DynamicArray;
///
/// let mut arr = DynamicArray::with_capacity(2).unwrap();
/// arr.append(1);
/// arr.append(2);
/// arr.append(3);
/// assert_eq!(arr.len(), 3);
/// assert_eq!(arr.capacity(), 4);
/// assert_eq!(arr.pop_at(-1), Ok(3));
/// ```
#[derive(Clone)]
pub struct DynamicArray<T> {
    storage: Box<[Option<T>]>,
    size: usize,
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    (0 .. capacity).map(|_| None).collect()
}

impl<T> DynamicArray<T> {
    pub fn new() -> Self {
        Self {
            storage: empty_slots(DEFAULT_CAPACITY),
            size: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            tracing::trace!(error = %ContainerError::ZeroCapacity, "rejected capacity");
            return Err(ContainerError::ZeroCapacity);
        }

        Ok(Self {
            storage: empty_slots(capacity),
            size: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    pub fn iter(&self) -> impl Iterator<Item=&T> {
        self.storage[.. self.size].iter().filter_map(Option::as_ref)
    }

    fn out_of_bounds(&self, index: isize) -> ContainerError {
        let error = ContainerError::OutOfBounds { index, len: self.size };
        tracing::trace!(%error, "rejected index");
        error
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.size {
            Ok(())
        } else {
            Err(self.out_of_bounds(index as isize))
        }
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        // slots below `size` are always `Some`, the error arm is unreachable
        debug_assert!(self.storage[index].is_some(), "live slot {} is empty", index);
        self.storage[index].as_ref().ok_or_else(|| self.out_of_bounds(index as isize))
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.check_index(index)?;
        self.storage[index] = Some(value);
        Ok(())
    }

    pub fn append(&mut self, value: T) {
        if self.size == self.capacity() {
            self.resize(GROWTH_FACTOR * self.capacity());
        }

        self.storage[self.size] = Some(value);
        self.size += 1;
    }

    /// Places `value` at `index` shifting the tail right. `index == len()`
    /// appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.size {
            return Err(self.out_of_bounds(index as isize));
        }

        if self.size == self.capacity() {
            self.resize(GROWTH_FACTOR * self.capacity());
        }

        // the slot at `size` is empty, rotating it down to `index` shifts the tail right
        self.storage[index ..= self.size].rotate_right(1);
        self.storage[index] = Some(value);
        self.size += 1;
        Ok(())
    }

    /// Removes the first element equal to `value`.
    pub fn remove(&mut self, value: &T) -> Result<T>
    where
        T: PartialEq,
    {
        let position = self.iter().position(|x| x == value);
        match position {
            Some(index) => self.pop_at(index as isize),
            None => {
                tracing::trace!(error = %ContainerError::NotFound, "rejected remove");
                Err(ContainerError::NotFound)
            }
        }
    }

    pub fn pop(&mut self) -> Result<T> {
        self.pop_at(-1)
    }

    /// Removes the element at `index`, negative indices count from the end.
    pub fn pop_at(&mut self, index: isize) -> Result<T> {
        if self.size == 0 {
            tracing::trace!(error = %ContainerError::EmptyContainer, "rejected pop");
            return Err(ContainerError::EmptyContainer);
        }

        let resolved = if index < 0 { self.size as isize + index } else { index };
        if resolved < 0 || resolved as usize >= self.size {
            return Err(self.out_of_bounds(index));
        }

        let resolved = resolved as usize;
        let value = self.storage[resolved].take();
        debug_assert!(value.is_some(), "live slot {} is empty", resolved);
        // the emptied slot travels to the end of the live range, which clears the old last slot
        self.storage[resolved .. self.size].rotate_left(1);
        self.size -= 1;

        if self.size > 0 && self.size == self.capacity() / SHRINK_DIVISOR {
            self.resize(self.capacity() / SHRINK_FACTOR);
        }

        // only reachable if a live slot was empty, see the assertion above
        value.ok_or_else(|| self.out_of_bounds(index))
    }

    fn resize(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.size);
        tracing::debug!(
            from = self.capacity(),
            to = new_capacity,
            len = self.size,
            "{}", if new_capacity > self.capacity() { "growing" } else { "shrinking" }
        );

        let mut storage = empty_slots(new_capacity);
        for (slot, value) in storage.iter_mut().zip(self.storage[.. self.size].iter_mut()) {
            *slot = value.take();
        }

        self.storage = storage;
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item=T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> Self {
        let mut ret = Self::new();
        ret.extend(iter);
        ret
    }
}
