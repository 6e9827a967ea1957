pub mod error;
pub mod patch;
pub mod types;
