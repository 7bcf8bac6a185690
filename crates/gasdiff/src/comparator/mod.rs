mod gas_comparator;

pub use gas_comparator::*;
