//! City-region occupancy.

use std::collections::HashSet;

use crate::board::{Board, ClaimPosition, Direction, Role, Terrain, ALL_DIRECTIONS};

/// Returns whether the city region reachable from `(x, y)` through the
/// given directions already carries a knight.
///
/// A tile whose cities are internally connected branches into all of its
/// city edges and is claimed by any knight on it. A tile with unconnected
/// cities acts as a barrier: only the city area at the entry edge belongs
/// to the region, and only a knight recorded on that edge claims it.
pub fn city_occupied(board: &Board, x: i32, y: i32, directions: &[Direction]) -> bool {
    let mut visited: HashSet<(i32, i32)> = HashSet::new();
    visited.insert((x, y));

    let mut worklist: Vec<((i32, i32), Direction)> = Vec::new();
    for &dir in directions {
        let (dx, dy) = dir.offset();
        let cell = (x + dx, y + dy);
        if board.get(cell.0, cell.1).is_some() {
            worklist.push((cell, dir.opposite()));
        }
    }

    while let Some(((cx, cy), entry)) = worklist.pop() {
        if !visited.insert((cx, cy)) {
            continue;
        }
        let tile = match board.get(cx, cy) {
            Some(tile) => tile,
            None => continue,
        };
        if tile.cities_connected() {
            if matches!(tile.follower(), Some(f) if f.role == Role::Knight) {
                return true;
            }
            for dir in ALL_DIRECTIONS {
                if dir == entry || tile.border(dir) != Terrain::City {
                    continue;
                }
                let (dx, dy) = dir.offset();
                let next = (cx + dx, cy + dy);
                if !visited.contains(&next) && board.get(next.0, next.1).is_some() {
                    worklist.push((next, dir.opposite()));
                }
            }
        } else {
            // The city area here is just the entered edge; propagation stops.
            let claimed = matches!(
                tile.follower(),
                Some(f) if f.role == Role::Knight && f.position == ClaimPosition::Edge(entry)
            );
            if claimed {
                return true;
            }
        }
    }
    false
}
