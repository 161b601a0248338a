//! Commonly used types and utilities for ease of import.

pub use crate::{
    AttackOutcome, Board, CellView, GameConfig, MatchController, MatchStatus, Orientation,
    Player, PlayerSlot, RandomPlacement, RandomTargeting, ShipKind, Step,
};

#[cfg(feature = "std")]
pub use crate::console::{render_board, ConsoleInput};
