//! Targeting strategies: uniform random without repeats, and interactive.

use alloc::collections::BTreeSet;
use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;

use log::trace;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::common::{AttackError, AttackOutcome};
use crate::input::InputSource;
use crate::ship::Coord;

/// Rejection sampling is used while at least `1 / COMPLEMENT_RATIO` of the grid is
/// untried; below that the untried cells are listed and one is drawn directly.
const COMPLEMENT_RATIO: usize = 4;

/// Chooses cells on an opponent board.
pub trait TargetingStrategy {
    /// Pick the next cell to attack on `opponent`.
    fn select_target(&mut self, rng: &mut SmallRng, opponent: &Board)
        -> Result<Coord, AttackError>;

    /// The opponent board rejected `target`. Return `true` to select again.
    fn retry_after(&mut self, _target: Coord, _error: &AttackError) -> bool {
        false
    }

    /// Feedback for a resolved attack.
    fn handle_attack_result(&mut self, _target: Coord, _outcome: AttackOutcome) {}
}

/// Uniform choice among cells this attacker has not selected before.
///
/// The memory only saves wasted attacks; the board's own hit flags remain the
/// authority on whether a cell can be attacked.
#[derive(Debug, Clone, Default)]
pub struct RandomTargeting {
    tried: BTreeSet<Coord>,
}

impl RandomTargeting {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cells selected so far.
    pub fn tried(&self) -> &BTreeSet<Coord> {
        &self.tried
    }
}

impl TargetingStrategy for RandomTargeting {
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        opponent: &Board,
    ) -> Result<Coord, AttackError> {
        let size = opponent.size();
        let total = size * size;
        let untried = total.saturating_sub(self.tried.len());
        if untried == 0 {
            return Err(AttackError::NoTargetsLeft);
        }

        let target = if untried * COMPLEMENT_RATIO >= total {
            loop {
                let cell = (rng.random_range(0..size), rng.random_range(0..size));
                if !self.tried.contains(&cell) {
                    break cell;
                }
                trace!("resampling {:?}", cell);
            }
        } else {
            let open: Vec<Coord> = (0..size)
                .flat_map(|y| (0..size).map(move |x| (x, y)))
                .filter(|cell| !self.tried.contains(cell))
                .collect();
            if open.is_empty() {
                return Err(AttackError::NoTargetsLeft);
            }
            open[rng.random_range(0..open.len())]
        };
        self.tried.insert(target);
        Ok(target)
    }

    fn retry_after(&mut self, _target: Coord, error: &AttackError) -> bool {
        matches!(error, AttackError::AlreadyAttacked { .. })
    }
}

/// Asks the player for a cell, re-asking whenever the board rejects it.
pub struct InteractiveTargeting<I> {
    input: I,
}

impl<I: InputSource> InteractiveTargeting<I> {
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

impl<I: InputSource> TargetingStrategy for InteractiveTargeting<I> {
    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        opponent: &Board,
    ) -> Result<Coord, AttackError> {
        loop {
            let x = self.input.request_int("x: ")?;
            let y = self.input.request_int("y: ")?;
            match opponent.coord_from_signed(x, y) {
                Some(cell) => return Ok(cell),
                None => self
                    .input
                    .notify(&AttackError::OutOfBounds { x, y }.to_string()),
            }
        }
    }

    fn retry_after(&mut self, _target: Coord, error: &AttackError) -> bool {
        match error {
            AttackError::OutOfBounds { .. } | AttackError::AlreadyAttacked { .. } => {
                self.input.notify(&error.to_string());
                true
            }
            _ => false,
        }
    }

    fn handle_attack_result(&mut self, (x, y): Coord, outcome: AttackOutcome) {
        let message = match outcome {
            AttackOutcome::Miss => format!("({}, {}): miss", x, y),
            AttackOutcome::Hit => format!("({}, {}): hit!", x, y),
            AttackOutcome::Sunk(kind) => format!("({}, {}): {} sunk!", x, y, kind),
        };
        self.input.notify(&message);
    }
}
