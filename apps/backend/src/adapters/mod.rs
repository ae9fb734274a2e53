//! Concrete implementations of the ports in `repos`.

pub mod players_mem;

pub use players_mem::InMemoryPlayerStore;
