//! User configuration persisted as JSON in the home directory.

pub mod config;
