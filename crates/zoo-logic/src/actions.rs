//! Daily action points.
//!
//! The daily cap grows with the collection: a base allowance, one point per
//! animal and one per two exhibits, up to a hard ceiling. A larger cap takes
//! effect at the next reset; a smaller one trims today's remaining points.

use serde::{Deserialize, Serialize};

use crate::constants::game;
use crate::error::ZooError;

/// Cap for a zoo of the given size.
pub fn max_action_points(base: u32, ceiling: u32, animals: usize, exhibits: usize) -> u32 {
    let raw = base as usize + animals + exhibits / 2;
    raw.min(ceiling as usize) as u32
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionBudget {
    base: u32,
    ceiling: u32,
    max: u32,
    remaining: u32,
    /// What the points were spent on today, in order.
    log: Vec<String>,
}

impl Default for ActionBudget {
    fn default() -> Self {
        Self::new(game::BASE_ACTION_POINTS, game::MAX_ACTION_POINTS)
    }
}

impl ActionBudget {
    pub fn new(base: u32, ceiling: u32) -> Self {
        let max = base.min(ceiling);
        Self {
            base,
            ceiling,
            max,
            remaining: max,
            log: Vec::new(),
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn used(&self) -> u32 {
        self.max.saturating_sub(self.remaining)
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn ensure_available(&self) -> Result<(), ZooError> {
        if self.remaining == 0 {
            return Err(ZooError::NoActionPoints);
        }
        Ok(())
    }

    /// Spend one point and record what it was for.
    pub fn use_point(&mut self, description: impl Into<String>) -> Result<(), ZooError> {
        self.ensure_available()?;
        self.remaining -= 1;
        self.log.push(description.into());
        Ok(())
    }

    pub fn recompute_max(&mut self, animals: usize, exhibits: usize) {
        self.max = max_action_points(self.base, self.ceiling, animals, exhibits);
        self.remaining = self.remaining.min(self.max);
    }

    /// Start of a new day: full points, empty log.
    pub fn reset(&mut self) {
        self.remaining = self.max;
        self.log.clear();
    }
}
