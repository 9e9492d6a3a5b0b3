use anyhow::{Error, anyhow};
use std::str::FromStr;

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Case number as printed on the board, starting at 1.
    Case(usize),
    Deal,
    NoDeal,
    Offer,
    Board,
    Stats,
    Restart,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim().to_ascii_lowercase();
        if let Ok(number) = line.parse::<usize>() {
            return match number {
                0 => Err(anyhow!("cases are numbered from 1")),
                n => Ok(Self::Case(n)),
            };
        }

        Ok(match line.as_str() {
            "deal" | "d" => Self::Deal,
            "no deal" | "nodeal" | "n" => Self::NoDeal,
            "offer" | "o" => Self::Offer,
            "board" | "b" => Self::Board,
            "stats" | "s" => Self::Stats,
            "restart" | "r" => Self::Restart,
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            other => return Err(anyhow!("unknown command {other:?}, try \"help\"")),
        })
    }
}
