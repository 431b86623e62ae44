//! Constant values grouped by algorithm family

pub mod symmetric;
