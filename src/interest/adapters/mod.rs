//! Adapter implementations of the interest ports.

pub mod memory;
