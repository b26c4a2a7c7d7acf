//! Fetch the FARS national CSV archives year by year and unpack them.

pub mod archive;
pub mod config;
pub mod driver;
pub mod fetch;
pub mod process;
