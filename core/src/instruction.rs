use serde::{Deserialize, Serialize};
use std::fmt;

use crate::*;

/// What the player is expected to do next, or how the game ended.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Instruction {
    ChooseCase,
    OpenCases(Stage),
    DealOrNoDeal,
    FinalChoice,
    /// The offer was accepted, revealing what the held case contained.
    DealTaken { held: Cash },
    /// The final pick was made, revealing what the other case contained.
    FinalCaseTaken { other: Cash },
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Instruction::*;

        match *self {
            ChooseCase => f.write_str("Choose a briefcase to keep to the end."),
            OpenCases(1) => f.write_str("Take 1 case."),
            OpenCases(n) => write!(f, "Take {n} cases."),
            DealOrNoDeal => f.write_str("Deal or No Deal?"),
            FinalChoice => f.write_str("Which case will you choose? Your case or the final case?"),
            DealTaken { held } => write!(f, "The chosen briefcase had ${}.", CashDisplay(held)),
            FinalCaseTaken { other } => {
                write!(f, "The other briefcase had ${}.", CashDisplay(other))
            }
        }
    }
}
