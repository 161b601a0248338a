//! Ship placement strategies: uniform random with bounded retries, and interactive.

use alloc::collections::BTreeSet;
use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;

use log::{debug, trace, warn};
use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::common::PlacementError;
use crate::input::InputSource;
use crate::ship::{Orientation, ShipId};

/// Orientations tried per ship before giving up.
pub const ORIENTATION_ATTEMPTS: usize = 2;

/// Origin samples drawn per orientation attempt.
pub const MAX_ORIGIN_SAMPLES: usize = 10_000;

/// Finds a valid placement for ships of a board's fleet.
pub trait PlacementStrategy {
    /// Place ship `ship` of `board`'s fleet, or report why it cannot be placed.
    fn place_ship(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        ship: ShipId,
    ) -> Result<(), PlacementError>;

    /// Place every ship not yet on the board, in fleet order. Stops at the first failure.
    fn place_fleet(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), PlacementError> {
        let pending: Vec<ShipId> = board.unplaced_ships().collect();
        for id in pending {
            self.place_ship(rng, board, id)?;
        }
        Ok(())
    }
}

/// Picks one orientation at random, then samples distinct in-bounds origins until
/// one is free. Falls back to the other orientation once, then gives up.
#[derive(Debug, Clone)]
pub struct RandomPlacement {
    max_samples: usize,
}

impl RandomPlacement {
    pub fn new() -> Self {
        Self::with_max_samples(MAX_ORIGIN_SAMPLES)
    }

    pub fn with_max_samples(max_samples: usize) -> Self {
        Self { max_samples }
    }
}

impl Default for RandomPlacement {
    fn default() -> Self {
        Self::new()
    }
}

impl PlacementStrategy for RandomPlacement {
    fn place_ship(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        ship: ShipId,
    ) -> Result<(), PlacementError> {
        let target = board.ship(ship).ok_or(PlacementError::UnknownShip(ship))?;
        if target.is_placed() {
            return Err(PlacementError::AlreadyPlaced);
        }
        let (kind, len, size) = (target.kind(), target.length(), board.size());
        if len > size {
            return Err(PlacementError::ShipTooLarge {
                kind,
                board_size: size,
            });
        }

        let mut orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        for _ in 0..ORIENTATION_ATTEMPTS {
            // Origins are drawn so the whole ship always lies on the board.
            let (max_x, max_y) = match orientation {
                Orientation::Horizontal => (size - len, size - 1),
                Orientation::Vertical => (size - 1, size - len),
            };
            let candidates = (max_x + 1) * (max_y + 1);
            let mut tried = BTreeSet::new();
            let mut samples = 0;
            while samples < self.max_samples && tried.len() < candidates {
                samples += 1;
                let origin = (rng.random_range(0..=max_x), rng.random_range(0..=max_y));
                if !tried.insert(origin) {
                    continue;
                }
                match board.place(ship, origin.0, origin.1, orientation) {
                    Ok(()) => return Ok(()),
                    Err(PlacementError::Overlap) => {
                        trace!("{} at {:?} {:?} overlaps", kind, origin, orientation)
                    }
                    Err(e) => return Err(e),
                }
            }
            debug!(
                "{} found no room {:?} after {} samples",
                kind, orientation, samples
            );
            orientation = orientation.flipped();
        }
        warn!("giving up placing {} on a {}x{} board", kind, size, size);
        Err(PlacementError::PlacementExhausted(kind))
    }
}

/// Asks the player for coordinates and orientation until the board accepts them.
/// Only a closed input source or a fatal error ends the loop without success.
pub struct InteractivePlacement<I> {
    input: I,
}

impl<I: InputSource> InteractivePlacement<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn into_inner(self) -> I {
        self.input
    }
}

impl<I: InputSource> PlacementStrategy for InteractivePlacement<I> {
    fn place_ship(
        &mut self,
        _rng: &mut SmallRng,
        board: &mut Board,
        ship: ShipId,
    ) -> Result<(), PlacementError> {
        let kind = board
            .ship(ship)
            .ok_or(PlacementError::UnknownShip(ship))?
            .kind();
        self.input
            .notify(&format!("Placing {} (length {})", kind, kind.length()));
        loop {
            let x = self.input.request_int("x: ")?;
            let y = self.input.request_int("y: ")?;
            let orientation = self.input.request_orientation("orientation: ")?;
            let result = match board.coord_from_signed(x, y) {
                Some((x, y)) => board.place(ship, x, y, orientation),
                None => Err(PlacementError::OutOfBounds),
            };
            match result {
                Ok(()) => return Ok(()),
                Err(e @ (PlacementError::OutOfBounds | PlacementError::Overlap)) => {
                    self.input.notify(&e.to_string())
                }
                Err(e) => return Err(e),
            }
        }
    }
}
