use anyhow::Result;
use briefcase_core::{CaseState, CashDisplay, GameEngine, GameError, GamePhase};
use std::io::{BufRead, Write};

use crate::command::Command;

const HELP: &str = "\
Commands:
  <number>   choose, open or take the case with that number
  deal       accept the banker's offer
  no deal    decline the banker's offer
  offer      show the current offer
  board      show the cases and the values still in play
  stats      show this round's and the running statistics
  restart    deal a new game
  quit       leave, printing the running totals";

/// Line-oriented terminal front end driving a [`GameEngine`].
pub struct Session<R, W> {
    engine: GameEngine,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(engine: GameEngine, input: R, output: W) -> Self {
        Self {
            engine,
            input,
            output,
        }
    }

    /// Reads commands until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        self.show_board()?;
        self.prompt()?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    writeln!(self.output, "{err}")?;
                    continue;
                }
            };
            if command == Command::Quit {
                break;
            }

            match self.apply(command) {
                Ok(()) => {}
                Err(err) => match err.downcast_ref::<GameError>() {
                    Some(rejected) => {
                        log::warn!("rejected {command:?}: {rejected}");
                        writeln!(self.output, "Not allowed: {}", describe(rejected))?;
                    }
                    None => return Err(err),
                },
            }
            self.prompt()?;
        }
        Ok(())
    }

    /// Prints the running totals for the next launch.
    pub fn report(&mut self, json: bool) -> Result<()> {
        let stats = self.engine.statistics();
        if json {
            writeln!(self.output, "{}", serde_json::to_string(&stats)?)?;
        } else {
            writeln!(self.output, "{}", stats.total_earnings)?;
            writeln!(self.output, "{}", stats.total_possible_earnings)?;
        }
        Ok(())
    }

    fn apply(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Case(number) => self.pick_case(number - 1)?,
            Command::Deal => {
                let offer = self.engine.accept_offer()?;
                writeln!(self.output, "Deal! You take ${}.", CashDisplay(offer))?;
            }
            Command::NoDeal => self.engine.decline_offer()?,
            Command::Offer => {
                if self.engine.is_offer_pending() {
                    let offer = self.engine.current_offer();
                    writeln!(self.output, "Banker's Offer: ${}", CashDisplay(offer))?;
                } else {
                    writeln!(self.output, "Banker's Offer: No Offer")?;
                }
            }
            Command::Board => self.show_board()?,
            Command::Stats => self.show_stats()?,
            Command::Restart => {
                self.engine.start_new_game();
                self.show_board()?;
            }
            Command::Help => writeln!(self.output, "{HELP}")?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn pick_case(&mut self, index: usize) -> Result<()> {
        match self.engine.phase() {
            GamePhase::Selecting => {
                self.engine.choose_case(index)?;
                writeln!(self.output, "You hold case {}.", index + 1)?;
            }
            GamePhase::FinalChoice => {
                let value = self.engine.choose_final_case(index)?;
                writeln!(self.output, "Case {} had ${}.", index + 1, CashDisplay(value))?;
            }
            _ => {
                let value = self.engine.open_case(index)?;
                writeln!(self.output, "Case {} had ${}.", index + 1, CashDisplay(value))?;
            }
        }
        Ok(())
    }

    fn prompt(&mut self) -> Result<()> {
        if self.engine.is_offer_pending() {
            let offer = self.engine.current_offer();
            writeln!(self.output, "Banker's Offer: ${}", CashDisplay(offer))?;
        }
        writeln!(self.output, "{}", self.engine.instruction())?;
        if self.engine.is_done() {
            self.show_stats()?;
        }
        self.output.flush()?;
        Ok(())
    }

    fn show_board(&mut self) -> Result<()> {
        let cases: Vec<String> = (0..self.engine.size())
            .map(|index| match self.engine.case_state(index) {
                Ok(CaseState::Chosen) => format!("[{}]", index + 1),
                Ok(CaseState::Opened) => "--".to_owned(),
                _ => (index + 1).to_string(),
            })
            .collect();
        writeln!(self.output, "Cases: {}", cases.join(" "))?;

        let values: Vec<String> = self
            .engine
            .value_board()
            .into_iter()
            .filter(|slot| !slot.eliminated)
            .map(|slot| format!("${}", CashDisplay(slot.value)))
            .collect();
        writeln!(self.output, "In play: {}", values.join(" "))?;

        let declined = self.engine.declined_offers();
        if !declined.is_empty() {
            let offers: Vec<String> = declined
                .iter()
                .map(|&offer| format!("${}", CashDisplay(offer)))
                .collect();
            writeln!(self.output, "Previous Offers: {}", offers.join(" "))?;
        }
        Ok(())
    }

    fn show_stats(&mut self) -> Result<()> {
        let stats = self.engine.statistics();
        writeln!(
            self.output,
            "Current Statistics: Earnings: ${} Possible Earnings: ${}",
            CashDisplay(stats.earnings),
            CashDisplay(stats.possible_earnings)
        )?;
        writeln!(
            self.output,
            "Total Statistics: Earnings: ${} Possible Earnings: ${}",
            CashDisplay(stats.total_earnings),
            CashDisplay(stats.total_possible_earnings)
        )?;
        Ok(())
    }

    #[cfg(test)]
    fn engine(&self) -> &GameEngine {
        &self.engine
    }
}

/// Rejection message using case numbers as printed on the board.
fn describe(err: &GameError) -> String {
    match *err {
        GameError::InvalidCase(index) => format!("There is no case {}", index + 1),
        GameError::HeldCase(index) => format!("Case {} is the case you hold", index + 1),
        GameError::CaseAlreadyOpened(index) => format!("Case {} is already open", index + 1),
        GameError::NotFinalCandidate(index) => {
            format!("Case {} is not one of the last two cases", index + 1)
        }
        other => other.to_string(),
    }
}
