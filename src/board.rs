//! Game board: an N×N grid of cells owning the fleet placed on it.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use log::debug;

use crate::common::{AttackError, AttackOutcome, ConfigurationError, PlacementError};
use crate::fleet::Fleet;
use crate::ship::{Coord, Orientation, Placement, Ship, ShipId};

/// One grid cell. `ship` is an index into the board's fleet and is set at most once;
/// `hit` only ever goes from false to true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    ship: Option<ShipId>,
    hit: bool,
}

impl Cell {
    pub fn ship(&self) -> Option<ShipId> {
        self.ship
    }

    pub fn is_hit(&self) -> bool {
        self.hit
    }
}

/// What a renderer may show for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    /// Not attacked, and either empty or its ship is hidden.
    Empty,
    /// Not attacked, occupied, board not hidden.
    Ship,
    /// Attacked, no ship.
    Miss,
    /// Attacked, ship struck.
    Hit,
}

pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    fleet: Fleet,
    hidden: bool,
    attacks: usize,
}

impl Board {
    /// Create an empty hidden board with no fleet.
    pub fn new(size: usize) -> Result<Self, ConfigurationError> {
        Self::with_fleet(size, Fleet::default())
    }

    /// Create an empty hidden board that will hold `fleet`. Ships start unplaced.
    pub fn with_fleet(size: usize, fleet: Fleet) -> Result<Self, ConfigurationError> {
        if size == 0 {
            return Err(ConfigurationError::InvalidBoardSize(0));
        }
        Ok(Board {
            size,
            cells: vec![Cell::default(); size * size],
            fleet,
            hidden: true,
            attacks: 0,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Hidden boards do not reveal unhit ships through [`Board::cell_view`].
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.fleet.get(id)
    }

    /// Ids of ships not yet on the grid, in fleet order.
    pub fn unplaced_ships(&self) -> impl Iterator<Item = ShipId> + '_ {
        self.fleet
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_placed())
            .map(|(i, _)| i)
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.size && y < self.size).then(|| y * self.size + x)
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Convert signed user input to an in-bounds coordinate.
    pub fn coord_from_signed(&self, x: i64, y: i64) -> Option<Coord> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        self.index(x, y).map(|_| (x, y))
    }

    pub fn ship_at(&self, x: usize, y: usize) -> Option<ShipId> {
        self.cell(x, y).and_then(Cell::ship)
    }

    pub fn is_attacked(&self, x: usize, y: usize) -> bool {
        self.cell(x, y).is_some_and(Cell::is_hit)
    }

    /// Number of attacks resolved against this board.
    pub fn attacks_made(&self) -> usize {
        self.attacks
    }

    pub fn all_sunk(&self) -> bool {
        self.fleet.all_destroyed()
    }

    pub fn remaining_ships(&self) -> usize {
        self.fleet.remaining()
    }

    /// Validate placing ship `id` at `(x, y)` without touching the board.
    pub fn can_place(
        &self,
        id: ShipId,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> Result<(), PlacementError> {
        let ship = self.fleet.get(id).ok_or(PlacementError::UnknownShip(id))?;
        if ship.is_placed() {
            return Err(PlacementError::AlreadyPlaced);
        }
        let len = ship.length();
        if len > self.size {
            return Err(PlacementError::ShipTooLarge {
                kind: ship.kind(),
                board_size: self.size,
            });
        }
        let (along, across) = match orientation {
            Orientation::Horizontal => (x, y),
            Orientation::Vertical => (y, x),
        };
        if along > self.size - len || across >= self.size {
            return Err(PlacementError::OutOfBounds);
        }
        let origin = (x, y);
        if (0..len)
            .map(|i| orientation.step(origin, i))
            .any(|(cx, cy)| self.ship_at(cx, cy).is_some())
        {
            return Err(PlacementError::Overlap);
        }
        Ok(())
    }

    /// Place ship `id` with its first cell at `(x, y)`. Nothing changes on failure.
    pub fn place(
        &mut self,
        id: ShipId,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> Result<(), PlacementError> {
        self.can_place(id, x, y, orientation)?;
        let placement = Placement::new(x, y, orientation);
        let ship = self
            .fleet
            .get_mut(id)
            .ok_or(PlacementError::UnknownShip(id))?;
        ship.set_placement(placement);
        let kind = ship.kind();
        for i in 0..kind.length() {
            let (cx, cy) = orientation.step(placement.origin, i);
            let idx = cy * self.size + cx;
            self.cells[idx].ship = Some(id);
        }
        debug!("placed {} #{} at ({}, {}) {:?}", kind, id, x, y, orientation);
        Ok(())
    }

    /// Attack `(x, y)`: mark it hit and report what was struck.
    pub fn resolve_attack(&mut self, x: usize, y: usize) -> Result<AttackOutcome, AttackError> {
        let idx = self.index(x, y).ok_or(AttackError::OutOfBounds {
            x: i64::try_from(x).unwrap_or(i64::MAX),
            y: i64::try_from(y).unwrap_or(i64::MAX),
        })?;
        let cell = &mut self.cells[idx];
        if cell.hit {
            return Err(AttackError::AlreadyAttacked { x, y });
        }
        cell.hit = true;
        self.attacks += 1;

        let occupant = cell.ship;
        let Some(ship) = occupant.and_then(|id| self.fleet.get_mut(id)) else {
            debug!("attack at ({}, {}): miss", x, y);
            return Ok(AttackOutcome::Miss);
        };
        match ship.offset_of(x, y) {
            Some(offset) => ship.mark_hit(offset),
            None => debug_assert!(false, "cell ({x}, {y}) points at a ship that does not cover it"),
        }
        let outcome = if ship.is_destroyed() {
            AttackOutcome::Sunk(ship.kind())
        } else {
            AttackOutcome::Hit
        };
        debug!("attack at ({}, {}): {:?}", x, y, outcome);
        Ok(outcome)
    }

    /// Display state of `(x, y)`, or `None` when out of bounds.
    pub fn cell_view(&self, x: usize, y: usize) -> Option<CellView> {
        let cell = self.cell(x, y)?;
        Some(match (cell.hit, cell.ship.is_some()) {
            (true, true) => CellView::Hit,
            (true, false) => CellView::Miss,
            (false, true) if !self.hidden => CellView::Ship,
            (false, _) => CellView::Empty,
        })
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {},\n  hidden: {},\n  attacks: {},\n  fleet: {:?}\n}}",
            self.size, self.hidden, self.attacks, self.fleet
        )
    }
}
