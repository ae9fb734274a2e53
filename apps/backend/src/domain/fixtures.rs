use std::collections::VecDeque;

use crate::domain::dice::DieRoller;

/// Deterministic die for fixtures and tests: yields scripted values in order.
///
/// Panics when exhausted; fixtures are expected to script exactly the
/// rolls a scenario consumes.
#[derive(Debug, Clone)]
pub struct ScriptedDie {
    values: VecDeque<u8>,
}

impl ScriptedDie {
    pub fn new(values: impl IntoIterator<Item = u8>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl DieRoller for ScriptedDie {
    fn roll(&mut self) -> u8 {
        #[allow(clippy::expect_used)]
        self.values.pop_front().expect("scripted die exhausted")
    }
}
