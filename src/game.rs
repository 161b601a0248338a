//! Match controller: setup, the "again on hit" turn rule and the win check.

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::{
    AttackOutcome, ConfigurationError, MatchError, PlayerSlot, SetupError,
};
use crate::player::Player;

/// Current status of a match. Exactly one holds at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchStatus {
    InProgress,
    Player1Won,
    Player2Won,
}

impl MatchStatus {
    pub fn won_by(slot: PlayerSlot) -> Self {
        match slot {
            PlayerSlot::One => MatchStatus::Player1Won,
            PlayerSlot::Two => MatchStatus::Player2Won,
        }
    }

    pub fn winner(self) -> Option<PlayerSlot> {
        match self {
            MatchStatus::InProgress => None,
            MatchStatus::Player1Won => Some(PlayerSlot::One),
            MatchStatus::Player2Won => Some(PlayerSlot::Two),
        }
    }

    pub fn is_over(self) -> bool {
        self != MatchStatus::InProgress
    }
}

/// What a single attack did to the flow of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Hit or sunk a ship; the same player shoots again.
    TurnContinues(AttackOutcome),
    /// Missed; the other player now attacks.
    TurnSwapped,
    /// The winning shot. No further attacks are possible.
    MatchEnded(PlayerSlot),
}

/// Summary of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchResult {
    pub winner: PlayerSlot,
    /// Resolved attacks fired by player 1 and player 2.
    pub shots: [usize; 2],
    /// Completed turns, the winning one included.
    pub turns: usize,
}

pub struct MatchController {
    players: [Player; 2],
    rng: SmallRng,
    status: MatchStatus,
    attacker: Option<PlayerSlot>,
    turns: usize,
}

impl MatchController {
    pub fn new(first: Player, second: Player, rng: SmallRng) -> Self {
        Self {
            players: [first, second],
            rng,
            status: MatchStatus::InProgress,
            attacker: None,
            turns: 0,
        }
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Player holding the turn, or `None` before setup.
    pub fn attacker(&self) -> Option<PlayerSlot> {
        self.attacker
    }

    pub fn player(&self, slot: PlayerSlot) -> &Player {
        &self.players[slot.index()]
    }

    pub fn player_mut(&mut self, slot: PlayerSlot) -> &mut Player {
        &mut self.players[slot.index()]
    }

    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Place both fleets and pick the first attacker uniformly at random.
    pub fn setup(&mut self) -> Result<PlayerSlot, MatchError> {
        if self.attacker.is_some() {
            return Err(MatchError::AlreadyStarted);
        }
        let first = if self.rng.random() {
            PlayerSlot::One
        } else {
            PlayerSlot::Two
        };
        self.start_with(first)?;
        Ok(first)
    }

    /// Place both fleets and give the first turn to `first`.
    ///
    /// Every fleet is checked against its board before either board is touched;
    /// fleets are then placed player 1 first. Fails with `AlreadyStarted` once the
    /// first attacker has been chosen.
    pub fn start_with(&mut self, first: PlayerSlot) -> Result<(), MatchError> {
        if self.attacker.is_some() {
            return Err(MatchError::AlreadyStarted);
        }
        for slot in [PlayerSlot::One, PlayerSlot::Two] {
            let board = self.players[slot.index()].board();
            if board.fleet().is_empty() {
                return Err(SetupError::from(ConfigurationError::EmptyFleet).into());
            }
            board
                .fleet()
                .check_fits(board.size())
                .map_err(|source| SetupError::Placement { player: slot, source })?;
        }
        for slot in [PlayerSlot::One, PlayerSlot::Two] {
            self.players[slot.index()]
                .place(&mut self.rng)
                .map_err(|source| SetupError::Placement { player: slot, source })?;
        }
        info!(
            "match started: {} vs {}, {} opens",
            self.players[0].name(),
            self.players[1].name(),
            first
        );
        self.attacker = Some(first);
        Ok(())
    }

    /// Resolve exactly one attack by the player holding the turn.
    pub fn advance_one_attack(&mut self) -> Result<Step, MatchError> {
        let attacker = self.attacker.ok_or(MatchError::NotStarted)?;
        if self.status.is_over() {
            return Err(MatchError::Finished);
        }
        let [one, two] = &mut self.players;
        let (active, defender) = match attacker {
            PlayerSlot::One => (one, two),
            PlayerSlot::Two => (two, one),
        };
        let outcome = active
            .attack(&mut self.rng, defender)
            .map_err(|source| MatchError::Attack {
                player: attacker,
                source,
            })?;
        debug!("{} -> {:?}", attacker, outcome);

        let step = match outcome {
            AttackOutcome::Miss => {
                self.turns += 1;
                self.attacker = Some(attacker.opponent());
                Step::TurnSwapped
            }
            AttackOutcome::Sunk(_) if defender.has_lost() => {
                self.turns += 1;
                self.status = MatchStatus::won_by(attacker);
                info!("{} ({}) wins after {} turns", attacker, active.name(), self.turns);
                Step::MatchEnded(attacker)
            }
            AttackOutcome::Hit | AttackOutcome::Sunk(_) => Step::TurnContinues(outcome),
        };
        Ok(step)
    }

    /// Set up if needed, then play until one fleet is destroyed.
    pub fn run(&mut self) -> Result<MatchResult, MatchError> {
        if self.attacker.is_none() {
            self.setup()?;
        }
        loop {
            if let Some(result) = self.result() {
                return Ok(result);
            }
            self.advance_one_attack()?;
        }
    }

    /// Final summary once the match is over.
    pub fn result(&self) -> Option<MatchResult> {
        let winner = self.status.winner()?;
        Some(MatchResult {
            winner,
            shots: [
                self.players[0].shots_fired(),
                self.players[1].shots_fired(),
            ],
            turns: self.turns,
        })
    }
}
