mod dynamic_array;

pub use dynamic_array::DynamicArray;

/// Capacity of an array built without an explicit one.
pub const DEFAULT_CAPACITY: usize = 10;
/// A full array grows to this many times its capacity.
pub const GROWTH_FACTOR: usize = 2;
/// An array shrinks once its length drops to `capacity / SHRINK_DIVISOR`.
pub const SHRINK_DIVISOR: usize = 4;
/// A shrinking array keeps `capacity / SHRINK_FACTOR` slots.
pub const SHRINK_FACTOR: usize = 2;
