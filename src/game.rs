//! Turn orchestration.
//!
//! A thin state machine over the core's query API: pulls tiles from the
//! supply, enumerates placement actions, resolves follower options per
//! pending action (computed once and cached, since the board cannot change
//! between the query and the application of the same pending turn), and
//! applies the chosen action.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::board::{Board, FollowerError, PlacementError, PlayerId, TileKind};
use crate::movegen::{legal_placements, valid_followers, FollowerOption, Placement};
use crate::supply::TileStack;

/// Followers each player starts with.
pub const FOLLOWER_SUPPLY: u8 = 8;

/// Errors raised when applying a turn. Every variant is a caller contract
/// violation: choices must come from the enumerated actions and their
/// computed options.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TurnError {
    #[error("no pending turn to play")]
    NoPendingTurn,

    #[error("placement index {0} is out of range")]
    UnknownPlacement(usize),

    #[error("follower option was not offered for this placement")]
    FollowerNotOffered,

    #[error("player has no followers left to deploy")]
    SupplyExhausted,

    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error(transparent)]
    Follower(#[from] FollowerError),
}

/// A participant, tracked by seat order.
#[derive(Debug, Clone)]
pub struct Player {
    pub id: PlayerId,
    /// Followers remaining in hand.
    pub supply: u8,
}

/// One placement choice of the pending turn, with lazily cached follower
/// options.
#[derive(Debug, Clone)]
pub struct PlaceTileAction {
    pub placement: Placement,
    options: Option<Vec<FollowerOption>>,
}

/// The pending turn: who plays, which tile, and the legal actions.
#[derive(Debug, Clone)]
pub struct Turn {
    pub player: PlayerId,
    pub tile: TileKind,
    pub actions: Vec<PlaceTileAction>,
}

/// A full game: board, supply, players, and the pending turn.
#[derive(Debug)]
pub struct Game {
    board: Board,
    stack: TileStack,
    players: Vec<Player>,
    active: usize,
    turn: Option<Turn>,
}

impl Game {
    /// Starts a game for `players` seats (at least one). Seed 0 shuffles
    /// from entropy; any other seed replays identically.
    pub fn new(players: usize, seed: u64) -> Game {
        assert!(players > 0, "a game needs at least one player");
        let mut rng = if seed != 0 {
            SmallRng::seed_from_u64(seed)
        } else {
            SmallRng::from_entropy()
        };
        let mut game = Game {
            board: Board::new(),
            stack: TileStack::new(&mut rng),
            players: (0..players)
                .map(|seat| Player {
                    id: PlayerId(seat as u8),
                    supply: FOLLOWER_SUPPLY,
                })
                .collect(),
            active: 0,
            turn: None,
        };
        game.init_turn();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The pending turn, or `None` once the supply ran out.
    pub fn turn(&self) -> Option<&Turn> {
        self.turn.as_ref()
    }

    /// Tiles discarded as unplayable so far.
    pub fn discarded(&self) -> &[TileKind] {
        self.stack.discarded()
    }

    /// The game ends when no playable tile remains.
    pub fn over(&self) -> bool {
        self.turn.is_none()
    }

    /// Pulls tiles until one has a legal placement, discarding the rest,
    /// and sets up the pending turn. Clears the turn when the stack runs
    /// dry.
    fn init_turn(&mut self) {
        while let Some(kind) = self.stack.pull() {
            let placements = legal_placements(&self.board, kind);
            if placements.is_empty() {
                self.stack.discard(kind);
                continue;
            }
            let actions = placements
                .into_iter()
                .map(|placement| PlaceTileAction {
                    placement,
                    options: None,
                })
                .collect();
            self.turn = Some(Turn {
                player: self.players[self.active].id,
                tile: kind,
                actions,
            });
            return;
        }
        self.turn = None;
    }

    /// The follower options for one pending action, computed on first use
    /// and cached for the lifetime of the pending turn.
    pub fn follower_options(&mut self, action: usize) -> Result<&[FollowerOption], TurnError> {
        let turn = self.turn.as_mut().ok_or(TurnError::NoPendingTurn)?;
        let tile = turn.tile;
        let act = turn
            .actions
            .get_mut(action)
            .ok_or(TurnError::UnknownPlacement(action))?;
        if act.options.is_none() {
            let p = act.placement;
            act.options = Some(valid_followers(&self.board, tile, p.x, p.y, p.rotation));
        }
        Ok(act.options.as_deref().unwrap_or_default())
    }

    /// Applies the chosen action: places the tile, deploys the follower if
    /// requested, and advances to the next player's turn.
    pub fn play(
        &mut self,
        action: usize,
        follower: Option<FollowerOption>,
    ) -> Result<(), TurnError> {
        if let Some(option) = follower {
            if !self.follower_options(action)?.contains(&option) {
                return Err(TurnError::FollowerNotOffered);
            }
            if self.players[self.active].supply == 0 {
                return Err(TurnError::SupplyExhausted);
            }
        }

        let turn = self.turn.as_ref().ok_or(TurnError::NoPendingTurn)?;
        let act = turn
            .actions
            .get(action)
            .ok_or(TurnError::UnknownPlacement(action))?;
        let Placement { x, y, rotation } = act.placement;
        let kind = turn.tile;
        let player = turn.player;

        self.board.place_tile(kind, x, y, rotation)?;
        if let Some(option) = follower {
            if let Some(tile) = self.board.get_mut(x, y) {
                tile.add_follower(option.deploy(player))?;
            }
            self.players[self.active].supply -= 1;
        }

        self.turn = None;
        self.active = (self.active + 1) % self.players.len();
        self.init_turn();
        Ok(())
    }
}
