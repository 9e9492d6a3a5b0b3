use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No case held yet.
    Selecting,
    Revealing,
    OfferPending,
    /// Only the held case and one other remain.
    FinalChoice,
    Settled,
}

impl GamePhase {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Settled)
    }
}

/// How a round was settled.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    Deal { offer: Cash },
    FinalCase { taken: CaseIndex, other: CaseIndex },
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub earnings: Cash,
    pub possible_earnings: Cash,
    pub total_earnings: Cash,
    pub total_possible_earnings: Cash,
}

/// A configured value together with whether its case has been opened.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueSlot {
    pub value: Cash,
    pub eliminated: bool,
}

/// Single-player game session: the current board plus totals across rounds.
///
/// Construction deals the first board. `start_new_game` replaces the board and
/// the per-round state while keeping the running totals.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: BoardConfig,
    schedule: Schedule,
    rng: SmallRng,
    board: Board,
    chosen: Option<CaseIndex>,
    stage: Option<Stage>,
    remaining_total: Cash,
    remaining_count: usize,
    outcome: Option<Outcome>,
    declined_offers: Vec<Cash>,
    earnings: Cash,
    possible_earnings: Cash,
    total_earnings: Cash,
    total_possible_earnings: Cash,
    totals_seeded: bool,
    rounds_settled: u32,
}

impl GameEngine {
    pub fn new(config: BoardConfig, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = RandomBoardGenerator::new(rng.random()).generate(&config);
        Self::with_board(config, rng, board)
    }

    /// Engine whose first game has `values[i]` in case `i`. Later games are
    /// shuffled from the same values.
    pub fn with_assignment(values: Vec<Cash>, seed: u64) -> Result<Self, ConfigError> {
        let config = BoardConfig::new(values.clone())?;
        let board = Board::new(values);
        Ok(Self::with_board(config, SmallRng::seed_from_u64(seed), board))
    }

    fn with_board(config: BoardConfig, rng: SmallRng, board: Board) -> Self {
        let schedule = Schedule::for_board(config.size());
        let mut engine = Self {
            remaining_total: config.total(),
            remaining_count: config.size(),
            config,
            schedule,
            rng,
            board,
            chosen: None,
            stage: None,
            outcome: None,
            declined_offers: Vec::new(),
            earnings: 0.0,
            possible_earnings: 0.0,
            total_earnings: 0.0,
            total_possible_earnings: 0.0,
            totals_seeded: false,
            rounds_settled: 0,
        };
        engine.log_start();
        engine
    }

    pub fn start_new_game(&mut self) {
        let seed = self.rng.random();
        self.board = RandomBoardGenerator::new(seed).generate(&self.config);
        self.chosen = None;
        self.stage = None;
        self.remaining_total = self.config.total();
        self.remaining_count = self.config.size();
        self.outcome = None;
        self.declined_offers.clear();
        self.earnings = 0.0;
        self.possible_earnings = 0.0;
        self.log_start();
    }

    /// Adds totals from earlier sessions. Allowed once, before any round is settled.
    pub fn seed_totals(&mut self, prior: PriorTotals) -> Result<()> {
        if self.totals_seeded {
            return Err(GameError::TotalsAlreadySeeded);
        }
        if self.rounds_settled > 0 {
            return Err(GameError::RoundAlreadySettled);
        }
        self.total_earnings += prior.earnings;
        self.total_possible_earnings += prior.possible_earnings;
        self.totals_seeded = true;
        log::debug!("seeded totals: {prior:?}");
        Ok(())
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn phase(&self) -> GamePhase {
        if self.outcome.is_some() {
            return GamePhase::Settled;
        }
        match self.stage {
            None => GamePhase::Selecting,
            Some(stage) if stage == self.schedule.final_stage() => GamePhase::FinalChoice,
            Some(stage) if self.schedule.is_offer_stage(stage) => GamePhase::OfferPending,
            Some(_) => GamePhase::Revealing,
        }
    }

    /// Player actions taken so far, `None` until a case is chosen.
    pub fn stage_counter(&self) -> Option<Stage> {
        self.stage
    }

    pub fn chosen_case(&self) -> Option<CaseIndex> {
        self.chosen
    }

    pub fn remaining_total(&self) -> Cash {
        self.remaining_total
    }

    pub fn remaining_count(&self) -> usize {
        self.remaining_count
    }

    pub fn is_done(&self) -> bool {
        self.phase().is_finished()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_offer_pending(&self) -> bool {
        matches!(self.phase(), GamePhase::OfferPending)
    }

    pub fn is_at_final_choice(&self) -> bool {
        matches!(self.phase(), GamePhase::FinalChoice)
    }

    pub fn case_state(&self, index: CaseIndex) -> Result<CaseState> {
        let index = self.board.validate_index(index)?;
        Ok(self.board.state(index))
    }

    /// Value of a case the player is allowed to see: opened cases, and every
    /// case once the round is settled.
    pub fn case_value(&self, index: CaseIndex) -> Option<Cash> {
        let index = self.board.validate_index(index).ok()?;
        let visible = self.is_done() || self.board.state(index) == CaseState::Opened;
        visible.then(|| self.board[index])
    }

    /// The case the held case can be swapped for at the final choice.
    pub fn final_alternative(&self) -> Option<CaseIndex> {
        if !self.is_at_final_choice() {
            return None;
        }
        self.board
            .iter_in_play()
            .map(|(index, _)| index)
            .find(|&index| Some(index) != self.chosen)
    }

    /// Cases to open before the next offer, `None` outside of a reveal round.
    pub fn cases_to_open(&self) -> Option<Stage> {
        match (self.phase(), self.stage) {
            (GamePhase::Revealing, Some(stage)) => self.schedule.cases_until_offer(stage),
            _ => None,
        }
    }

    pub fn current_offer(&self) -> Cash {
        banker_offer(
            self.remaining_total,
            self.remaining_count,
            self.board.max_in_play(),
        )
    }

    /// Offers turned down so far this game, oldest first.
    pub fn declined_offers(&self) -> &[Cash] {
        &self.declined_offers
    }

    /// Configured values in ascending order, flagged once their case is opened.
    pub fn value_board(&self) -> Vec<ValueSlot> {
        let mut opened: Vec<Cash> = (0..self.board.size())
            .filter(|&index| self.board.state(index) == CaseState::Opened)
            .map(|index| self.board[index])
            .collect();
        opened.sort_by(Cash::total_cmp);

        let mut opened = opened.into_iter().peekable();
        self.config
            .values()
            .iter()
            .map(|&value| {
                let eliminated = opened.next_if_eq(&value).is_some();
                ValueSlot { value, eliminated }
            })
            .collect()
    }

    pub fn statistics(&self) -> Statistics {
        Statistics {
            earnings: self.earnings,
            possible_earnings: self.possible_earnings,
            total_earnings: self.total_earnings,
            total_possible_earnings: self.total_possible_earnings,
        }
    }

    pub fn instruction(&self) -> Instruction {
        match self.phase() {
            GamePhase::Selecting => Instruction::ChooseCase,
            GamePhase::Revealing => Instruction::OpenCases(
                self.cases_to_open()
                    .unwrap_or(self.remaining_count.saturating_sub(2) as Stage),
            ),
            GamePhase::OfferPending => Instruction::DealOrNoDeal,
            GamePhase::FinalChoice => Instruction::FinalChoice,
            GamePhase::Settled => match self.outcome {
                Some(Outcome::FinalCase { other, .. }) => Instruction::FinalCaseTaken {
                    other: self.board[other],
                },
                _ => Instruction::DealTaken {
                    held: self.chosen.map_or(0.0, |chosen| self.board[chosen]),
                },
            },
        }
    }

    pub fn choose_case(&mut self, index: CaseIndex) -> Result<()> {
        let index = self.board.validate_index(index)?;
        self.check_not_finished()?;
        if self.chosen.is_some() {
            return Err(GameError::CaseAlreadyChosen);
        }

        self.board.mark_chosen(index);
        self.chosen = Some(index);
        self.advance();
        log::debug!("case {index} chosen, phase {:?}", self.phase());
        Ok(())
    }

    /// Reveals a case and removes its value from play.
    pub fn open_case(&mut self, index: CaseIndex) -> Result<Cash> {
        let index = self.board.validate_index(index)?;
        match self.phase() {
            GamePhase::Revealing => {}
            GamePhase::Selecting => return Err(GameError::NoCaseChosen),
            GamePhase::OfferPending | GamePhase::FinalChoice => {
                return Err(GameError::NotRevealing);
            }
            GamePhase::Settled => return Err(GameError::AlreadyEnded),
        }
        match self.board.state(index) {
            CaseState::Closed => {}
            CaseState::Chosen => return Err(GameError::HeldCase(index)),
            CaseState::Opened => return Err(GameError::CaseAlreadyOpened(index)),
        }

        let value = self.board.mark_opened(index);
        self.remaining_total = self.board.iter_in_play().map(|(_, cash)| cash).sum();
        self.remaining_count -= 1;
        self.advance();
        log::debug!(
            "case {index} opened with {value}, {} cases left holding {}",
            self.remaining_count,
            self.remaining_total
        );
        Ok(value)
    }

    /// Banks the current offer, ending the round.
    pub fn accept_offer(&mut self) -> Result<Cash> {
        self.check_offer_pending()?;
        let chosen = self.chosen.ok_or(GameError::NoCaseChosen)?;

        let offer = self.current_offer();
        let possible = offer.max(self.board[chosen]);
        self.advance();
        self.settle(offer, possible, Outcome::Deal { offer });
        Ok(offer)
    }

    pub fn decline_offer(&mut self) -> Result<()> {
        self.check_offer_pending()?;

        let offer = self.current_offer();
        self.declined_offers.push(offer);
        self.advance();
        log::debug!("offer {offer} declined, phase {:?}", self.phase());
        Ok(())
    }

    /// Takes either the held case or the other remaining case, ending the round.
    pub fn choose_final_case(&mut self, index: CaseIndex) -> Result<Cash> {
        let index = self.board.validate_index(index)?;
        match self.phase() {
            GamePhase::FinalChoice => {}
            GamePhase::Settled => return Err(GameError::AlreadyEnded),
            _ => return Err(GameError::NotAtFinalChoice),
        }
        let (Some(held), Some(alternative)) = (self.chosen, self.final_alternative()) else {
            return Err(GameError::NotAtFinalChoice);
        };
        let other = if index == held {
            alternative
        } else if index == alternative {
            held
        } else {
            return Err(GameError::NotFinalCandidate(index));
        };

        let earnings = self.board[index];
        let possible = earnings.max(self.board[other]);
        self.advance();
        self.settle(earnings, possible, Outcome::FinalCase { taken: index, other });
        Ok(earnings)
    }

    fn settle(&mut self, earnings: Cash, possible: Cash, outcome: Outcome) {
        self.earnings = earnings;
        self.possible_earnings = possible;
        self.total_earnings += earnings;
        self.total_possible_earnings += possible;
        self.outcome = Some(outcome);
        self.rounds_settled += 1;
        log::debug!("round settled by {outcome:?}: earned {earnings}, could have earned {possible}");
    }

    fn advance(&mut self) {
        self.stage = Some(self.stage.map_or(0, |stage| stage + 1));
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.is_done() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }

    fn check_offer_pending(&self) -> Result<()> {
        match self.phase() {
            GamePhase::OfferPending => Ok(()),
            GamePhase::Settled => Err(GameError::AlreadyEnded),
            _ => Err(GameError::NoOfferPending),
        }
    }

    fn log_start(&self) {
        log::debug!(
            "new game with {} cases, offers at stages {:?}",
            self.board.size(),
            self.schedule.thresholds()
        );
    }
}
