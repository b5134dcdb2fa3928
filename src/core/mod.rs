//! Core data structures: observation sequences and posterior draw tables.

pub mod draws;
pub mod observations;

pub use draws::{DrawTable, ParameterDraws};
pub use observations::ObservationSequence;
