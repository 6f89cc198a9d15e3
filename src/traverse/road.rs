//! Road-region occupancy.

use std::collections::HashSet;

use crate::board::{Board, Direction, Role, Terrain, ALL_DIRECTIONS};

/// Returns whether the road network reachable from `(x, y)` through the
/// given directions already carries a thief.
///
/// Roads propagate uniformly through every road edge of a visited tile;
/// an intersection does not split the region. Worklist entries pair a cell
/// with the edge it was entered through, so traversal never immediately
/// doubles back; the visited set catches longer cycles.
pub fn road_occupied(board: &Board, x: i32, y: i32, directions: &[Direction]) -> bool {
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

    while let Some(((cx, cy), entered)) = worklist.pop() {
        if !visited.insert((cx, cy)) {
            continue;
        }
        let tile = match board.get(cx, cy) {
            Some(tile) => tile,
            None => continue,
        };
        if matches!(tile.follower(), Some(f) if f.role == Role::Thief) {
            return true;
        }
        for dir in ALL_DIRECTIONS {
            if dir == entered || tile.border(dir) != Terrain::Road {
                continue;
            }
            let (dx, dy) = dir.offset();
            let next = (cx + dx, cy + dy);
            if !visited.contains(&next) && board.get(next.0, next.1).is_some() {
                worklist.push((next, dir.opposite()));
            }
        }
    }
    false
}
