use super::*;

/// Deals the configured values into the cases as a uniformly random permutation.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: &BoardConfig) -> Board {
        use rand::prelude::*;

        let mut values = config.values().to_vec();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        values.shuffle(&mut rng);

        log::trace!("dealt {} cases from seed {}", values.len(), self.seed);
        Board::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> BoardConfig {
        BoardConfig::new((1..=10).map(f64::from).collect()).unwrap()
    }

    #[test]
    fn same_seed_deals_same_board() {
        let a = RandomBoardGenerator::new(7).generate(&config());
        let b = RandomBoardGenerator::new(7).generate(&config());

        assert_eq!(a, b);
    }

    #[test]
    fn deal_is_a_permutation_of_the_values() {
        let board = RandomBoardGenerator::new(42).generate(&config());

        let mut dealt: Vec<Cash> = (0..board.size()).map(|i| board[i]).collect();
        dealt.sort_by(Cash::total_cmp);
        assert_eq!(dealt, config().values());
    }

    #[test]
    fn different_seeds_shuffle_differently() {
        let boards: Vec<Vec<Cash>> = (0..8)
            .map(|seed| {
                let board = RandomBoardGenerator::new(seed).generate(&config());
                (0..board.size()).map(|i| board[i]).collect()
            })
            .collect();

        assert!(boards.iter().any(|b| b != &boards[0]));
    }
}
