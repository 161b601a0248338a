//! Common types: attack outcomes, player slots and the error taxonomy.

use alloc::string::String;
use core::fmt;

use crate::ship::ShipKind;

/// Result of a resolved attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// No ship on the attacked cell.
    Miss,
    /// Struck a ship that still has undamaged segments.
    Hit,
    /// Struck the last undamaged segment of a ship, carrying its kind.
    Sunk(ShipKind),
}

impl AttackOutcome {
    /// `Hit` and `Sunk` both let the attacker shoot again.
    pub fn is_hit(self) -> bool {
        !matches!(self, AttackOutcome::Miss)
    }
}

/// One of the two seats in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    pub fn opponent(self) -> Self {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }

    pub fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }
}

impl fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerSlot::One => f.write_str("player 1"),
            PlayerSlot::Two => f.write_str("player 2"),
        }
    }
}

/// The interactive input source has no more answers to give.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("input source closed")]
pub struct InputClosed;

/// Errors returned when placing ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("ship placement is out of bounds")]
    OutOfBounds,
    #[error("ship placement overlaps another ship")]
    Overlap,
    #[error("{kind} (length {}) does not fit on a {board_size}x{board_size} board", .kind.length())]
    ShipTooLarge { kind: ShipKind, board_size: usize },
    #[error("no free position left for {0}")]
    PlacementExhausted(ShipKind),
    #[error("ship is already placed")]
    AlreadyPlaced,
    #[error("no ship with index {0} in the fleet")]
    UnknownShip(usize),
    #[error(transparent)]
    InputClosed(#[from] InputClosed),
}

/// Errors returned when attacking a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AttackError {
    /// Coordinates beyond `i64::MAX` are reported as `i64::MAX`.
    #[error("attack at ({x}, {y}) is out of bounds")]
    OutOfBounds { x: i64, y: i64 },
    #[error("cell ({x}, {y}) was already attacked")]
    AlreadyAttacked { x: usize, y: usize },
    #[error("every cell has already been targeted")]
    NoTargetsLeft,
    #[error(transparent)]
    InputClosed(#[from] InputClosed),
}

/// Invalid host-supplied configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("unknown ship kind `{0}`")]
    UnknownShipKind(String),
    #[error("board size must be positive, got {0}")]
    InvalidBoardSize(i64),
    #[error("invalid ship count `{0}`")]
    InvalidCount(String),
    #[error("malformed fleet entry `{0}`, expected kind=count")]
    MalformedFleet(String),
    #[error("fleet has no ships")]
    EmptyFleet,
    #[error("fleet needs {cells} cells but the board only has {capacity}")]
    FleetTooLarge { cells: usize, capacity: usize },
}

/// Failures detected before the first shot is fired.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("fleet rejected: {0}")]
    Fleet(PlacementError),
    #[error("{player} could not place their fleet: {source}")]
    Placement {
        player: PlayerSlot,
        #[source]
        source: PlacementError,
    },
}

/// Errors surfaced by the match controller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("match setup has not completed")]
    NotStarted,
    #[error("match is already over")]
    Finished,
    #[error("match has already started")]
    AlreadyStarted,
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error("attack by {player} failed: {source}")]
    Attack {
        player: PlayerSlot,
        #[source]
        source: AttackError,
    },
}
