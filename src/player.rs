//! A player binds a board (and the fleet on it) to placement and targeting strategies.

use alloc::boxed::Box;
use alloc::string::String;

use log::debug;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{AttackError, AttackOutcome, PlacementError};
use crate::placement::{PlacementStrategy, RandomPlacement};
use crate::targeting::{RandomTargeting, TargetingStrategy};

pub struct Player {
    name: String,
    board: Board,
    placement: Box<dyn PlacementStrategy>,
    targeting: Box<dyn TargetingStrategy>,
    shots_fired: usize,
}

impl Player {
    pub fn new(
        name: impl Into<String>,
        board: Board,
        placement: Box<dyn PlacementStrategy>,
        targeting: Box<dyn TargetingStrategy>,
    ) -> Self {
        Self {
            name: name.into(),
            board,
            placement,
            targeting,
            shots_fired: 0,
        }
    }

    /// A player using random placement and random non-repeating targeting.
    pub fn computer(name: impl Into<String>, board: Board) -> Self {
        Self::new(
            name,
            board,
            Box::new(RandomPlacement::new()),
            Box::new(RandomTargeting::new()),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Attacks resolved against opponents, rejected ones excluded.
    pub fn shots_fired(&self) -> usize {
        self.shots_fired
    }

    /// Lost once every ship in the fleet is destroyed.
    pub fn has_lost(&self) -> bool {
        self.board.all_sunk()
    }

    /// Place every ship of the fleet that is not on the board yet.
    pub fn place(&mut self, rng: &mut SmallRng) -> Result<(), PlacementError> {
        self.board.fleet().check_fits(self.board.size())?;
        self.placement.place_fleet(rng, &mut self.board)?;
        debug!("{} placed {} ships", self.name, self.board.fleet().len());
        Ok(())
    }

    /// Fire one shot at `opponent`. Rejected targets are retried when the
    /// targeting strategy asks for it.
    pub fn attack(
        &mut self,
        rng: &mut SmallRng,
        opponent: &mut Player,
    ) -> Result<AttackOutcome, AttackError> {
        loop {
            let (x, y) = self.targeting.select_target(rng, &opponent.board)?;
            match opponent.board.resolve_attack(x, y) {
                Ok(outcome) => {
                    self.shots_fired += 1;
                    self.targeting.handle_attack_result((x, y), outcome);
                    return Ok(outcome);
                }
                Err(e) if self.targeting.retry_after((x, y), &e) => continue,
                Err(e) => return Err(e),
            }
        }
    }
}
