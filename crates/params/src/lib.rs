//! Constant values for tokencrypt cryptographic operations
//!
//! This crate holds the sizes and names shared by the primitive and
//! symmetric layers.

#![no_std]

pub mod utils;
