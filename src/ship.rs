//! Ship kinds, orientation and per-segment damage tracking.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

/// Grid coordinate as `(x, y)`: `x` is the column, `y` the row.
pub type Coord = (usize, usize);

/// Index of a ship inside its owning fleet.
pub type ShipId = usize;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The other axis.
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Coordinate of the segment `offset` cells away from `origin`.
    pub fn step(self, origin: Coord, offset: usize) -> Coord {
        match self {
            Orientation::Horizontal => (origin.0 + offset, origin.1),
            Orientation::Vertical => (origin.0, origin.1 + offset),
        }
    }
}

/// The four fixed ship kinds. The discriminant is the ship's length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    Submarine = 1,
    Destroyer = 2,
    Cruiser = 3,
    Carrier = 4,
}

impl ShipKind {
    /// All kinds in enumeration order, which is also fleet build order.
    pub const ALL: [ShipKind; 4] = [
        ShipKind::Submarine,
        ShipKind::Destroyer,
        ShipKind::Cruiser,
        ShipKind::Carrier,
    ];

    /// Number of cells a ship of this kind occupies.
    pub const fn length(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Submarine => "Submarine",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Cruiser => "Cruiser",
            ShipKind::Carrier => "Carrier",
        }
    }

    /// Position of this kind in [`ShipKind::ALL`].
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// Case-insensitive lookup by name. Returns `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn from_length(length: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.length() == length)
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a ship sits: its first cell and the axis it extends along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub origin: Coord,
    pub orientation: Orientation,
}

impl Placement {
    pub fn new(x: usize, y: usize, orientation: Orientation) -> Self {
        Self {
            origin: (x, y),
            orientation,
        }
    }
}

/// A ship with its kind, its placement once committed, and one damage flag per segment.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    kind: ShipKind,
    placement: Option<Placement>,
    damage: Vec<bool>,
}

impl Ship {
    /// Create an unplaced, undamaged ship.
    pub fn new(kind: ShipKind) -> Self {
        Self {
            kind,
            placement: None,
            damage: vec![false; kind.length()],
        }
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn length(&self) -> usize {
        self.kind.length()
    }

    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    pub fn origin(&self) -> Option<Coord> {
        self.placement.map(|p| p.origin)
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.placement.map(|p| p.orientation)
    }

    /// Damage flags indexed by offset from the origin.
    pub fn damage(&self) -> &[bool] {
        &self.damage
    }

    pub fn hits_taken(&self) -> usize {
        self.damage.iter().filter(|&&d| d).count()
    }

    /// A ship is destroyed once every segment has been hit.
    pub fn is_destroyed(&self) -> bool {
        self.damage.iter().all(|&d| d)
    }

    /// Cells covered by the ship. Empty while unplaced.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let len = if self.placement.is_some() {
            self.length()
        } else {
            0
        };
        (0..len).filter_map(move |i| self.placement.map(|p| p.orientation.step(p.origin, i)))
    }

    /// Damage index of `(x, y)`: its offset from the origin along the ship's axis.
    /// Returns `None` when the ship is unplaced or does not cover the cell.
    pub fn offset_of(&self, x: usize, y: usize) -> Option<usize> {
        let Placement {
            origin: (ox, oy),
            orientation,
        } = self.placement?;
        let (along, across, fixed) = match orientation {
            Orientation::Horizontal => (x.checked_sub(ox)?, y, oy),
            Orientation::Vertical => (y.checked_sub(oy)?, x, ox),
        };
        (across == fixed && along < self.length()).then_some(along)
    }

    /// Record the placement. Only the board commits placements, and only once.
    pub(crate) fn set_placement(&mut self, placement: Placement) {
        debug_assert!(self.placement.is_none(), "ship placed twice");
        self.placement = Some(placement);
    }

    /// Mark segment `index` as hit. Damage never reverts.
    pub(crate) fn mark_hit(&mut self, index: usize) {
        if let Some(segment) = self.damage.get_mut(index) {
            *segment = true;
        }
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ kind: {}, placement: {:?}, hits: {}/{} }}",
            self.kind,
            self.placement,
            self.hits_taken(),
            self.length(),
        )
    }
}
