//! Fleet factory: expands a requested composition into freshly built ships.

use alloc::vec::Vec;
use core::ops;

use crate::common::PlacementError;
use crate::config::FleetComposition;
use crate::ship::{Ship, ShipId, ShipKind};

/// Build a single unplaced ship of `kind`.
pub fn create(kind: ShipKind) -> Ship {
    Ship::new(kind)
}

/// Ordered collection of ships owned by one player. Cells refer to ships by
/// their index in this sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// Expand `composition` into ships, kinds in enumeration order and each kind
    /// repeated by its requested count.
    pub fn build(composition: &FleetComposition) -> Self {
        let ships = composition
            .iter()
            .flat_map(|(kind, count)| (0..count).map(move |_| create(kind)))
            .collect();
        Self { ships }
    }

    /// Reject the fleet if any ship is longer than the board is wide.
    pub fn check_fits(&self, board_size: usize) -> Result<(), PlacementError> {
        match self.ships.iter().find(|s| s.length() > board_size) {
            Some(ship) => Err(PlacementError::ShipTooLarge {
                kind: ship.kind(),
                board_size,
            }),
            None => Ok(()),
        }
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    pub fn get(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: ShipId) -> Option<&mut Ship> {
        self.ships.get_mut(id)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Ship> {
        self.ships.iter()
    }

    /// Total number of cells the fleet covers once placed.
    pub fn total_cells(&self) -> usize {
        self.ships.iter().map(Ship::length).sum()
    }

    /// A player has lost once every ship is destroyed.
    pub fn all_destroyed(&self) -> bool {
        self.ships.iter().all(Ship::is_destroyed)
    }

    pub fn remaining(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_destroyed()).count()
    }
}

impl FromIterator<Ship> for Fleet {
    fn from_iter<I: IntoIterator<Item = Ship>>(iter: I) -> Self {
        Self {
            ships: iter.into_iter().collect(),
        }
    }
}

impl ops::Index<ShipId> for Fleet {
    type Output = Ship;

    fn index(&self, id: ShipId) -> &Self::Output {
        &self.ships[id]
    }
}

impl<'a> IntoIterator for &'a Fleet {
    type Item = &'a Ship;
    type IntoIter = core::slice::Iter<'a, Ship>;

    fn into_iter(self) -> Self::IntoIter {
        self.ships.iter()
    }
}
