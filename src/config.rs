//! Host-supplied game configuration: board size and fleet composition.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::common::{ConfigurationError, PlacementError, SetupError};
use crate::fleet::Fleet;
use crate::ship::ShipKind;

pub const DEFAULT_BOARD_SIZE: usize = 10;

/// Submarines, Destroyers, Cruisers, Carriers.
pub const DEFAULT_FLEET: [usize; 4] = [4, 3, 2, 1];

/// Number of ships requested per kind, stored in [`ShipKind::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetComposition {
    counts: [usize; 4],
}

impl FleetComposition {
    /// A composition with no ships.
    pub const fn empty() -> Self {
        Self { counts: [0; 4] }
    }

    pub const fn from_counts(counts: [usize; 4]) -> Self {
        Self { counts }
    }

    /// Builder-style setter for one kind.
    pub fn with(mut self, kind: ShipKind, count: usize) -> Self {
        self.counts[kind.index()] = count;
        self
    }

    pub fn count(&self, kind: ShipKind) -> usize {
        self.counts[kind.index()]
    }

    /// Kinds with their counts, in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (ShipKind, usize)> + '_ {
        ShipKind::ALL.into_iter().map(|kind| (kind, self.count(kind)))
    }

    /// Saturates at `usize::MAX`.
    pub fn total_ships(&self) -> usize {
        self.counts.iter().fold(0, |acc, &n| acc.saturating_add(n))
    }

    /// Saturates at `usize::MAX`.
    pub fn total_cells(&self) -> usize {
        self.iter()
            .fold(0, |acc, (kind, n)| acc.saturating_add(kind.length().saturating_mul(n)))
    }

    /// Longest kind with a non-zero count.
    pub fn largest_kind(&self) -> Option<ShipKind> {
        self.iter().filter(|&(_, n)| n > 0).map(|(k, _)| k).last()
    }
}

impl Default for FleetComposition {
    fn default() -> Self {
        Self::from_counts(DEFAULT_FLEET)
    }
}

/// Parses `kind=count` pairs separated by commas, e.g. `submarine=2,carrier=1`.
/// Kinds may be given by name or by length; omitted kinds get zero ships and
/// repeated kinds add up.
impl FromStr for FleetComposition {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut composition = Self::empty();
        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (name, count) = entry
                .split_once('=')
                .ok_or_else(|| ConfigurationError::MalformedFleet(entry.to_string()))?;
            let name = name.trim();
            let kind = ShipKind::from_name(name)
                .or_else(|| name.parse().ok().and_then(ShipKind::from_length))
                .ok_or_else(|| ConfigurationError::UnknownShipKind(name.to_string()))?;
            let count: usize = count
                .trim()
                .parse()
                .map_err(|_| ConfigurationError::InvalidCount(count.trim().to_string()))?;
            let slot = &mut composition.counts[kind.index()];
            *slot = slot
                .checked_add(count)
                .ok_or_else(|| ConfigurationError::InvalidCount(entry.to_string()))?;
        }
        if composition.total_ships() == 0 {
            return Err(ConfigurationError::EmptyFleet);
        }
        Ok(composition)
    }
}

impl fmt::Display for FleetComposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (kind, count) in self.iter().filter(|&(_, n)| n > 0) {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{}={}", kind.name().to_ascii_lowercase(), count)?;
            first = false;
        }
        Ok(())
    }
}

/// Board size and fleet shared by both players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub board_size: usize,
    pub fleet: FleetComposition,
}

impl GameConfig {
    pub fn new(board_size: usize, fleet: FleetComposition) -> Self {
        Self { board_size, fleet }
    }

    /// Build from unchecked host input. Rejects non-positive sizes and bad fleet text.
    pub fn from_raw(board_size: i64, fleet: &str) -> Result<Self, ConfigurationError> {
        let size = usize::try_from(board_size)
            .ok()
            .filter(|&n| n > 0)
            .ok_or(ConfigurationError::InvalidBoardSize(board_size))?;
        Ok(Self::new(size, fleet.parse()?))
    }

    /// Check everything that can be checked before any board or fleet exists.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.board_size == 0 {
            return Err(ConfigurationError::InvalidBoardSize(0).into());
        }
        if self.fleet.total_ships() == 0 {
            return Err(ConfigurationError::EmptyFleet.into());
        }
        if let Some(kind) = self.fleet.largest_kind().filter(|k| k.length() > self.board_size) {
            return Err(SetupError::Fleet(PlacementError::ShipTooLarge {
                kind,
                board_size: self.board_size,
            }));
        }
        let capacity = self.board_size.saturating_mul(self.board_size);
        let cells = self.fleet.total_cells();
        if cells > capacity {
            return Err(ConfigurationError::FleetTooLarge {
                cells,
                capacity,
            }
            .into());
        }
        Ok(())
    }

    pub fn build_fleet(&self) -> Fleet {
        Fleet::build(&self.fleet)
    }

    /// Human readable summary used by the console host.
    pub fn describe(&self) -> String {
        alloc::format!(
            "{}x{} board, fleet: {}",
            self.board_size, self.board_size, self.fleet
        )
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE, FleetComposition::default())
    }
}
