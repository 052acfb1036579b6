mod binary_search;
mod two_sum;

pub use self::binary_search::binary_search;
pub use self::two_sum::{two_sum, Complement};
