//! Caption layout: greedy word wrap and parley-based shaping/measurement.

pub mod shape;
pub mod wrap;
