//! Game engine for a single-player "Deal or No Deal" game.
//!
//! Cash values are shuffled into numbered cases, the player holds one and
//! reveals the others in rounds fixed by a [`Schedule`]. After each round the
//! banker makes an offer (see [`banker_offer`]) that the player may bank or
//! decline. [`GameEngine`] owns the board and enforces which moves are legal;
//! rendering is left to whatever drives it.

pub use board::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use instruction::*;
pub use offer::*;
pub use schedule::*;
pub use types::*;

mod board;
mod config;
mod engine;
mod error;
mod generator;
mod instruction;
mod offer;
mod schedule;
mod types;
