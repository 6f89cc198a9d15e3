//! Tile-placement validation and enumeration.

use crate::board::{Board, TileKind, ALL_DIRECTIONS};

/// A legal `(x, y, rotation)` triple for some tile kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub rotation: u8,
}

/// Returns whether the kind may be placed at `(x, y)` under `rotation`.
///
/// The cell must be empty and adjacent to at least one placed tile, and
/// every occupied neighbor's facing edge must carry the same terrain as the
/// candidate's edge facing it.
pub fn can_place_tile(board: &Board, kind: TileKind, x: i32, y: i32, rotation: u8) -> bool {
    if board.get(x, y).is_some() {
        return false;
    }
    let mut occupied_neighbors = 0;
    for dir in ALL_DIRECTIONS {
        if let Some(neighbor) = board.neighbor(x, y, dir) {
            occupied_neighbors += 1;
            if kind.border(dir, rotation) != neighbor.border(dir.opposite()) {
                return false;
            }
        }
    }
    occupied_neighbors > 0
}

/// Enumerates every legal placement of the kind against the board.
///
/// Candidate cells come from the frontier (empty cells touching occupied
/// territory); each of the four rotations is checked independently, so a
/// symmetric kind may legally repeat a cell under several rotations. The
/// options are distinct and not deduplicated.
pub fn legal_placements(board: &Board, kind: TileKind) -> Vec<Placement> {
    let mut placements = Vec::new();
    for (x, y) in board.frontier() {
        for rotation in 0..4 {
            if can_place_tile(board, kind, x, y, rotation) {
                placements.push(Placement { x, y, rotation });
            }
        }
    }
    placements
}
