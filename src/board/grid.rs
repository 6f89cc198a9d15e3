//! The sparse board grid.
//!
//! Maps integer coordinates to placed tiles. The grid only grows: tiles are
//! never removed or moved once placed, and the origin holds the starting
//! tile before any turn is taken.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use super::border::{Direction, ALL_DIRECTIONS};
use super::tile::{Tile, TileKind, STARTING_KIND};

/// Errors raised by `Board::place_tile`. Every variant is a caller contract
/// violation: placement inputs must come from `legal_placements`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("cell ({0}, {1}) is already occupied")]
    CellOccupied(i32, i32),

    #[error("cell ({0}, {1}) touches no placed tile")]
    NoNeighbor(i32, i32),

    #[error("{} edge does not match the neighboring tile", .0.letter())]
    BorderMismatch(Direction),
}

/// Sparse map of placed tiles.
#[derive(Debug, Clone, Default)]
pub struct Board {
    cells: HashMap<(i32, i32), Tile>,
}

impl Board {
    /// Creates a board with the starting tile at the origin.
    pub fn new() -> Board {
        let mut board = Board::empty();
        board.cells.insert((0, 0), Tile::new(STARTING_KIND, 0));
        board
    }

    /// Creates a board with no tiles. The first tile placed on it is exempt
    /// from the neighbor requirement, mirroring the starting tile.
    pub fn empty() -> Board {
        Board {
            cells: HashMap::new(),
        }
    }

    /// The tile at `(x, y)`, if any.
    pub fn get(&self, x: i32, y: i32) -> Option<&Tile> {
        self.cells.get(&(x, y))
    }

    /// Mutable access to the tile at `(x, y)`, for follower deployment.
    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Tile> {
        self.cells.get_mut(&(x, y))
    }

    /// The tile adjacent to `(x, y)` in the given direction, if any.
    pub fn neighbor(&self, x: i32, y: i32, direction: Direction) -> Option<&Tile> {
        let (dx, dy) = direction.offset();
        self.get(x + dx, y + dy)
    }

    /// The number of placed tiles.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over placed tiles and their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = ((i32, i32), &Tile)> {
        self.cells.iter().map(|(&coord, tile)| (coord, tile))
    }

    /// Empty cells adjacent to at least one placed tile, in deterministic
    /// order. Candidate placements grow outward from the occupied region;
    /// the unbounded plane is never scanned.
    pub fn frontier(&self) -> Vec<(i32, i32)> {
        let mut seen: HashSet<(i32, i32)> = HashSet::new();
        let mut cells = Vec::new();
        for &(x, y) in self.cells.keys() {
            for dir in ALL_DIRECTIONS {
                let (dx, dy) = dir.offset();
                let cell = (x + dx, y + dy);
                if !self.cells.contains_key(&cell) && seen.insert(cell) {
                    cells.push(cell);
                }
            }
        }
        cells.sort_unstable();
        cells
    }

    /// Fixes the tile's rotation and inserts it -- the sole mutator of the
    /// grid. Inputs must have been approved by `legal_placements`; anything
    /// else is rejected as a contract violation, never silently corrected.
    pub fn place_tile(
        &mut self,
        kind: TileKind,
        x: i32,
        y: i32,
        rotation: u8,
    ) -> Result<(), PlacementError> {
        if self.cells.contains_key(&(x, y)) {
            return Err(PlacementError::CellOccupied(x, y));
        }
        let mut occupied_neighbors = 0;
        for dir in ALL_DIRECTIONS {
            if let Some(neighbor) = self.neighbor(x, y, dir) {
                occupied_neighbors += 1;
                if kind.border(dir, rotation) != neighbor.border(dir.opposite()) {
                    return Err(PlacementError::BorderMismatch(dir));
                }
            }
        }
        if occupied_neighbors == 0 && !self.cells.is_empty() {
            return Err(PlacementError::NoNeighbor(x, y));
        }
        self.cells.insert((x, y), Tile::new(kind, rotation));
        Ok(())
    }
}
