//! Enclosure simulation engine.
//!
//! This crate holds the population of an enclosure, advances it one day at a
//! time, and reports on or persists its state.

pub mod enclosure;
pub mod report;
pub mod repository;
pub mod simulation;

pub use enclosure::Enclosure;
pub use report::{report_state, Census, Report};
pub use repository::{load_enclosure, save_enclosure};
pub use simulation::{remove_dead, DayOutcome, Simulation};
