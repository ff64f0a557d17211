pub mod batch;
pub mod convert;
pub mod distance;
pub mod notation;
pub mod units;
