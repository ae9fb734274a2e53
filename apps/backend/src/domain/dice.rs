//! Die sampling behind a trait so match logic stays deterministic in tests.

use std::fmt;

use rand::Rng;

use crate::domain::rules::DIE_FACES;

/// Source of die outcomes. Implementations must yield values in 1..=6.
pub trait DieRoller: fmt::Debug {
    fn roll(&mut self) -> u8;
}

/// Production roller: samples the thread-local OS-seeded generator.
///
/// The seed is process-local and never derived from client input.
#[derive(Debug, Default)]
pub struct ThreadDie;

impl DieRoller for ThreadDie {
    fn roll(&mut self) -> u8 {
        rand::rng().random_range(DIE_FACES)
    }
}
