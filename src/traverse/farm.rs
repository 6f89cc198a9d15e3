//! Farm-region occupancy.

use std::collections::HashSet;

use crate::board::{Board, ClaimPosition, FarmBorder, Role};

/// Returns whether the farm region reachable from `(x, y)` through the
/// given border already carries a farmer.
///
/// Adjacency follows specific farm borders rather than whole edges: each
/// hop finds, on the occupied neighbor, the border whose segments line up
/// with the current one across the shared edge, and continues from there.
/// A farmer claims the region when the connected border on its tile
/// contains the farmer's recorded segment.
pub fn farm_occupied(board: &Board, x: i32, y: i32, border: &FarmBorder) -> bool {
    let mut visited: HashSet<(i32, i32)> = HashSet::new();
    visited.insert((x, y));

    let mut worklist: Vec<((i32, i32), FarmBorder)> = Vec::new();
    push_connected(board, x, y, border, &visited, &mut worklist);

    while let Some(((cx, cy), current)) = worklist.pop() {
        if !visited.insert((cx, cy)) {
            continue;
        }
        let tile = match board.get(cx, cy) {
            Some(tile) => tile,
            None => continue,
        };
        if let Some(follower) = tile.follower() {
            if follower.role == Role::Farmer {
                if let ClaimPosition::Segment(segment) = follower.position {
                    if current.contains(segment) {
                        return true;
                    }
                }
            }
        }
        push_connected(board, cx, cy, &current, &visited, &mut worklist);
    }
    false
}

/// Pushes, for every direction the border touches, the border it lines up
/// with on the occupied neighbor in that direction. Visited neighbors are
/// skipped, which also covers the edge the traversal arrived through.
fn push_connected(
    board: &Board,
    x: i32,
    y: i32,
    border: &FarmBorder,
    visited: &HashSet<(i32, i32)>,
    worklist: &mut Vec<((i32, i32), FarmBorder)>,
) {
    for dir in border.directions() {
        let (dx, dy) = dir.offset();
        let cell = (x + dx, y + dy);
        if visited.contains(&cell) {
            continue;
        }
        let neighbor = match board.get(cell.0, cell.1) {
            Some(tile) => tile,
            None => continue,
        };
        if let Some(matched) = neighbor
            .farm_connections()
            .into_iter()
            .find(|candidate| border.connects_to(dir, candidate))
        {
            worklist.push((cell, matched));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Follower, PlayerId, Segment, TileKind};

    fn farmer(segment: Segment) -> Follower {
        Follower {
            role: Role::Farmer,
            player: PlayerId(0),
            position: ClaimPosition::Segment(segment),
        }
    }

    /// The starting tile's southern field, shared across a road edge.
    #[test]
    fn farmer_claims_the_field_across_a_road_edge() {
        let mut board = Board::new();
        board.place_tile(TileKind::Crfr, 1, 0, 0).unwrap();
        // Farmer in the starting tile's southern field.
        if let Some(tile) = board.get_mut(0, 0) {
            tile.add_follower(farmer(Segment::EastBottom)).unwrap();
        }

        // The southern field of a tile placed further east connects under
        // the road.
        let candidate = TileKind::Crfr.farm_connections(0);
        let south_field = candidate
            .iter()
            .find(|b| b.contains(Segment::SouthRight))
            .unwrap();
        assert!(farm_occupied(&board, 2, 0, south_field));

        // The sliver north of the road is a different region.
        let north_sliver = candidate
            .iter()
            .find(|b| b.contains(Segment::EastTop))
            .unwrap();
        assert!(!farm_occupied(&board, 2, 0, north_sliver));
    }

    #[test]
    fn passageway_joins_fields_behind_split_cities() {
        let mut board = Board::empty();
        board.place_tile(TileKind::Ffff, 0, 0, 0).unwrap();
        board.place_tile(TileKind::CfcfSplit, 1, 0, 0).unwrap();
        board.place_tile(TileKind::Ffff, 2, 0, 0).unwrap();
        if let Some(tile) = board.get_mut(0, 0) {
            tile.add_follower(farmer(Segment::NorthRight)).unwrap();
        }

        // A field adjoining the far side reaches the farmer through the
        // passageway between the unconnected cities.
        let candidate = TileKind::Ffff.farm_connections(0);
        assert!(farm_occupied(&board, 3, 0, &candidate[0]));
    }

    #[test]
    fn separate_fields_on_one_tile_stay_separate() {
        let mut board = Board::empty();
        board.place_tile(TileKind::Ffff, 0, 0, 0).unwrap();
        // A connected city band: its east and west fields never meet.
        board.place_tile(TileKind::Cfcf, 1, 0, 0).unwrap();
        board.place_tile(TileKind::Ffff, 2, 0, 0).unwrap();
        if let Some(tile) = board.get_mut(0, 0) {
            tile.add_follower(farmer(Segment::NorthRight)).unwrap();
        }

        let candidate = TileKind::Ffff.farm_connections(0);
        assert!(!farm_occupied(&board, 3, 0, &candidate[0]));
    }

    #[test]
    fn field_ring_terminates() {
        // Four cloister-field tiles in a square; the field is one region
        // reachable around either side.
        let mut board = Board::empty();
        board.place_tile(TileKind::Ffff, 0, 0, 0).unwrap();
        board.place_tile(TileKind::Ffff, 1, 0, 0).unwrap();
        board.place_tile(TileKind::Ffff, 1, 1, 0).unwrap();
        board.place_tile(TileKind::Ffff, 0, 1, 0).unwrap();

        let candidate = TileKind::Ffff.farm_connections(0);
        assert!(!farm_occupied(&board, -1, 0, &candidate[0]));

        if let Some(tile) = board.get_mut(1, 1) {
            tile.add_follower(farmer(Segment::SouthLeft)).unwrap();
        }
        assert!(farm_occupied(&board, -1, 0, &candidate[0]));
    }
}
