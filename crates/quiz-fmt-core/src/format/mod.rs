pub mod criteria;
pub mod quoting;
