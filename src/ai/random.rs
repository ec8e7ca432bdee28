use crate::error::SelectError;
use crate::game::Board;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::Agent;

/// An agent that selects uniformly at random from non-full columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic agent for reproducible games and tests.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick a non-full column. Fails instead of retrying when there is none.
    pub fn pick(&mut self, board: &Board) -> Result<usize, SelectError> {
        let columns = board.legal_columns();
        if columns.is_empty() {
            return Err(SelectError::NoLegalMove);
        }
        let idx = self.rng.random_range(0..columns.len());
        Ok(columns[idx])
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_column(&mut self, board: &mut Board) -> Result<usize, SelectError> {
        self.pick(board)
    }

    fn name(&self) -> &str {
        "Random"
    }
}
