// src/process/mod.rs
pub mod extract;

pub use extract::extract_and_remove;
