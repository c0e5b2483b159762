pub mod catalog;
pub mod config;
pub mod signup;
pub mod tracing;
