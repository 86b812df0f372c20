// src/review/mod.rs

pub mod normalize;
pub mod summary;
pub mod tally;
