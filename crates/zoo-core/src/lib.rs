//! Core types for the enclosure ecosystem simulator: living beings, reference data,
//! configuration and errors.

pub mod being;
pub mod config;
pub mod error;
pub mod types;

pub use being::*;
pub use config::*;
pub use error::{Error, Result};
pub use types::*;
