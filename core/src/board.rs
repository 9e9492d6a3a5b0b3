use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::*;

/// Player-visible state of a single case.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseState {
    #[default]
    Closed,
    /// Held by the player until the end of the game.
    Chosen,
    /// Revealed and removed from play.
    Opened,
}

impl CaseState {
    /// Whether the case still counts towards the remaining pool.
    pub const fn is_in_play(self) -> bool {
        matches!(self, Self::Closed | Self::Chosen)
    }
}

/// One dealt game: the value hidden in each case and what has happened to it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    values: Vec<Cash>,
    cases: Vec<CaseState>,
}

impl Board {
    /// Board with `values[i]` in case `i`, every case closed.
    pub(crate) fn new(values: Vec<Cash>) -> Self {
        let cases = vec![CaseState::Closed; values.len()];
        Self { values, cases }
    }

    pub fn size(&self) -> usize {
        self.values.len()
    }

    pub fn validate_index(&self, index: CaseIndex) -> Result<CaseIndex> {
        if index < self.size() {
            Ok(index)
        } else {
            Err(GameError::InvalidCase(index))
        }
    }

    pub fn state(&self, index: CaseIndex) -> CaseState {
        self.cases[index]
    }

    pub fn iter_in_play(&self) -> impl Iterator<Item = (CaseIndex, Cash)> + '_ {
        self.cases
            .iter()
            .zip(&self.values)
            .enumerate()
            .filter(|(_, (state, _))| state.is_in_play())
            .map(|(index, (_, &value))| (index, value))
    }

    /// Largest value among cases still in play.
    pub fn max_in_play(&self) -> Cash {
        self.iter_in_play()
            .map(|(_, value)| value)
            .fold(0.0, Cash::max)
    }

    pub(crate) fn mark_chosen(&mut self, index: CaseIndex) {
        debug_assert_eq!(self.cases[index], CaseState::Closed);
        self.cases[index] = CaseState::Chosen;
    }

    pub(crate) fn mark_opened(&mut self, index: CaseIndex) -> Cash {
        debug_assert_eq!(self.cases[index], CaseState::Closed);
        self.cases[index] = CaseState::Opened;
        self.values[index]
    }
}

impl Index<CaseIndex> for Board {
    type Output = Cash;

    fn index(&self, index: CaseIndex) -> &Self::Output {
        &self.values[index]
    }
}
