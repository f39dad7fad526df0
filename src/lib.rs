//! sigengine: technical indicator and trading signal engine.
//!
//! Hexagonal architecture: pure indicator math in [`domain`], port traits in
//! [`ports`], concrete implementations (CSV, INI, reports) in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
