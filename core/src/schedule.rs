use serde::{Deserialize, Serialize};

use crate::*;

/// Stages at which the banker makes an offer.
///
/// Stage 0 is the choice of the held case, every reveal and every offer
/// decision adds one. Reveals are front-loaded: a staircase of shrinking
/// batches `k, k-1, .., 1` is followed by single-case rounds until all but two
/// cases have been opened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    board_size: usize,
    thresholds: Vec<Stage>,
}

impl Schedule {
    pub fn for_board(board_size: usize) -> Self {
        let reveals = board_size.saturating_sub(2);
        let height = staircase_height(reveals);
        let extra = reveals - triangular(height);

        let mut thresholds: Vec<Stage> = Vec::with_capacity(height + extra);
        let mut batch = height;
        for _ in 0..height + extra {
            let next = match thresholds.last() {
                None => batch as Stage,
                Some(&prev) if batch > 0 => prev + batch as Stage + 1,
                Some(&prev) => prev + 2,
            };
            thresholds.push(next);
            batch = batch.saturating_sub(1);
        }

        log::trace!("schedule for {board_size} cases: {thresholds:?}");
        Self {
            board_size,
            thresholds,
        }
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn thresholds(&self) -> &[Stage] {
        &self.thresholds
    }

    /// Number of offers in a game that is played to the end.
    pub fn rounds(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    pub fn is_offer_stage(&self, stage: Stage) -> bool {
        self.thresholds.binary_search(&stage).is_ok()
    }

    /// Stage at which only the held case and one other remain.
    pub fn final_stage(&self) -> Stage {
        (self.board_size + self.thresholds.len()).saturating_sub(2) as Stage
    }

    /// Cases revealed before each offer.
    pub fn batches(&self) -> Vec<usize> {
        let mut prev = None;
        self.thresholds
            .iter()
            .map(|&threshold| {
                let batch = match prev {
                    None => threshold,
                    Some(prev) => threshold - prev - 1,
                };
                prev = Some(threshold);
                batch as usize
            })
            .collect()
    }

    /// Cases still to open before the next offer, if one is coming.
    pub fn cases_until_offer(&self, stage: Stage) -> Option<Stage> {
        self.thresholds
            .iter()
            .find(|&&threshold| stage < threshold)
            .map(|&threshold| threshold - stage)
    }
}

/// Largest `k` with `k * (k + 1) / 2 <= reveals`.
pub fn staircase_height(reveals: usize) -> usize {
    // k(k+1)/2 <= m  <=>  2k+1 <= isqrt(8m+1)
    ((8 * reveals + 1).isqrt() - 1) / 2
}

const fn triangular(n: usize) -> usize {
    n * (n + 1) / 2
}
