//! Individual inputs to the adjusted decay rate.

pub mod category;
pub mod importance;
pub mod inactivity;
pub mod usage;
