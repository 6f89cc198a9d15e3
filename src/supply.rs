//! The tile supply.
//!
//! Populates the draw stack from the catalog multiplicities (72 tiles in
//! the base distribution) and shuffles it with a caller-provided RNG so
//! games replay identically under the same seed. The starting tile's copy
//! is withheld because it opens the board.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::board::{TileKind, ALL_KINDS, STARTING_KIND};

/// The shuffled stack of tiles left to draw, plus the discard pile for
/// tiles that had no legal placement when drawn.
#[derive(Debug, Clone)]
pub struct TileStack {
    tiles: Vec<TileKind>,
    discarded: Vec<TileKind>,
}

impl TileStack {
    /// Builds and shuffles the full base-game stack.
    pub fn new(rng: &mut SmallRng) -> TileStack {
        let mut tiles = Vec::with_capacity(71);
        for kind in ALL_KINDS {
            let mut count = kind.info().count;
            // One copy of the starting kind is already on the board.
            if kind == STARTING_KIND {
                count -= 1;
            }
            for _ in 0..count {
                tiles.push(kind);
            }
        }
        tiles.shuffle(rng);
        TileStack {
            tiles,
            discarded: Vec::new(),
        }
    }

    /// Draws the top tile, or `None` once the stack is exhausted.
    pub fn pull(&mut self) -> Option<TileKind> {
        self.tiles.pop()
    }

    /// Removes an unplayable tile from the game.
    pub fn discard(&mut self, kind: TileKind) {
        self.discarded.push(kind);
    }

    /// Tiles left to draw.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles discarded as unplayable, in discard order.
    pub fn discarded(&self) -> &[TileKind] {
        &self.discarded
    }
}
