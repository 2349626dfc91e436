mod ordered_bucket;

pub use ordered_bucket::*;
