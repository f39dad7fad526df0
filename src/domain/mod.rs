//! Core domain types and logic.

pub mod price;
pub mod indicator;
pub mod signal;
pub mod report;
pub mod synthetic;
pub mod config_validation;
pub mod error;
