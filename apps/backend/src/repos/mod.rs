//! Ports to external collaborators.

pub mod players;

pub use players::{PlayerRecord, PlayerStore};
