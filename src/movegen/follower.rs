//! Follower-placement resolution.
//!
//! Composes the border model, farm geometry, and region traversal into the
//! authoritative set of legal follower options for a candidate placement.
//! Followers enter the game only through this set.

use crate::board::{
    Board, ClaimPosition, Direction, Follower, PlayerId, Role, Segment, Terrain, TileKind,
};
use crate::traverse::{city_occupied, farm_occupied, road_occupied};

/// One legal follower deployment for a candidate placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowerOption {
    /// A monk in the tile's cloister.
    Monk,
    /// A thief on the road leaving through `direction`.
    Thief { direction: Direction },
    /// A knight in the city at `direction`.
    Knight { direction: Direction },
    /// A farmer in the field holding `segment`.
    Farmer { segment: Segment },
}

impl FollowerOption {
    /// The follower this option deploys for the given player.
    pub fn deploy(self, player: PlayerId) -> Follower {
        match self {
            FollowerOption::Monk => Follower {
                role: Role::Monk,
                player,
                position: ClaimPosition::Tile,
            },
            FollowerOption::Thief { direction } => Follower {
                role: Role::Thief,
                player,
                position: ClaimPosition::Edge(direction),
            },
            FollowerOption::Knight { direction } => Follower {
                role: Role::Knight,
                player,
                position: ClaimPosition::Edge(direction),
            },
            FollowerOption::Farmer { segment } => Follower {
                role: Role::Farmer,
                player,
                position: ClaimPosition::Segment(segment),
            },
        }
    }
}

/// Computes every legal follower option for placing `kind` at `(x, y)`
/// under `rotation`.
///
/// The placement is hypothetical: the board is read, never written, and the
/// coordinates must come from `legal_placements` for the answer to be
/// meaningful.
pub fn valid_followers(
    board: &Board,
    kind: TileKind,
    x: i32,
    y: i32,
    rotation: u8,
) -> Vec<FollowerOption> {
    let mut options = Vec::new();

    // Cloisters are never shared: always exactly one monk option.
    if kind.has_cloister() {
        options.push(FollowerOption::Monk);
    }

    let roads = kind.edges_with(Terrain::Road, rotation);
    if roads.len() > 2 {
        // At an intersection each incident road segment may host its own
        // claim, so every direction is offered and gated independently.
        for &dir in &roads {
            if !road_occupied(board, x, y, &[dir]) {
                options.push(FollowerOption::Thief { direction: dir });
            }
        }
    } else if !roads.is_empty() {
        // A road through a non-intersection tile is one region no matter
        // which direction gets recorded.
        if !road_occupied(board, x, y, &roads) {
            options.push(FollowerOption::Thief { direction: roads[0] });
        }
    }

    let cities = kind.edges_with(Terrain::City, rotation);
    if kind.cities_connected() {
        if let Some(&first) = cities.first() {
            if !city_occupied(board, x, y, &cities) {
                options.push(FollowerOption::Knight { direction: first });
            }
        }
    } else {
        // Unconnected city stubs are independent regions.
        for &dir in &cities {
            if !city_occupied(board, x, y, &[dir]) {
                options.push(FollowerOption::Knight { direction: dir });
            }
        }
    }

    for border in kind.farm_connections(rotation) {
        if let Some(segment) = border.representative() {
            if !farm_occupied(board, x, y, &border) {
                options.push(FollowerOption::Farmer { segment });
            }
        }
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monk_count(options: &[FollowerOption]) -> usize {
        options
            .iter()
            .filter(|o| matches!(o, FollowerOption::Monk))
            .count()
    }

    fn thieves(options: &[FollowerOption]) -> Vec<Direction> {
        options
            .iter()
            .filter_map(|o| match o {
                FollowerOption::Thief { direction } => Some(*direction),
                _ => None,
            })
            .collect()
    }

    fn knights(options: &[FollowerOption]) -> Vec<Direction> {
        options
            .iter()
            .filter_map(|o| match o {
                FollowerOption::Knight { direction } => Some(*direction),
                _ => None,
            })
            .collect()
    }

    fn farmers(options: &[FollowerOption]) -> Vec<Segment> {
        options
            .iter()
            .filter_map(|o| match o {
                FollowerOption::Farmer { segment } => Some(*segment),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn cloister_always_offers_one_monk() {
        let board = Board::new();
        // ffff south of the starting tile's field edge.
        let options = valid_followers(&board, TileKind::Ffff, 0, -1, 0);
        assert_eq!(monk_count(&options), 1);
    }

    #[test]
    fn straight_road_offers_one_representative_thief() {
        let board = Board::new();
        let options = valid_followers(&board, TileKind::Frfr, 1, 0, 0);
        assert_eq!(thieves(&options), vec![Direction::East]);
    }

    #[test]
    fn crossroads_offer_one_thief_per_open_arm() {
        let mut board = Board::new();
        board.place_tile(TileKind::Frfr, 1, 0, 0).unwrap();
        if let Some(tile) = board.get_mut(1, 0) {
            tile.add_follower(
                FollowerOption::Thief {
                    direction: Direction::East,
                }
                .deploy(PlayerId(0)),
            )
            .unwrap();
        }
        // A four-way crossroads east of the thief: the west arm joins the
        // occupied road, the other three stay open.
        let options = valid_followers(&board, TileKind::Rrrr, 2, 0, 0);
        assert_eq!(
            thieves(&options),
            vec![Direction::North, Direction::East, Direction::South]
        );
    }

    #[test]
    fn occupied_road_yields_no_thief() {
        let mut board = Board::new();
        board.place_tile(TileKind::Frfr, 1, 0, 0).unwrap();
        if let Some(tile) = board.get_mut(1, 0) {
            tile.add_follower(
                FollowerOption::Thief {
                    direction: Direction::East,
                }
                .deploy(PlayerId(0)),
            )
            .unwrap();
        }
        let options = valid_followers(&board, TileKind::Frfr, 2, 0, 0);
        assert!(thieves(&options).is_empty());
    }

    #[test]
    fn connected_cities_offer_a_single_knight() {
        let board = Board::new();
        // ccff rotated twice joins the starting tile's city from above.
        let options = valid_followers(&board, TileKind::Ccff, 0, 1, 2);
        assert_eq!(knights(&options), vec![Direction::South]);
    }

    #[test]
    fn split_cities_offer_independent_knights() {
        let mut board = Board::empty();
        board.place_tile(TileKind::Cfcf, 0, 1, 0).unwrap();
        let options = valid_followers(&board, TileKind::CcffSplit, 0, 0, 0);
        assert_eq!(knights(&options), vec![Direction::North, Direction::East]);
    }

    #[test]
    fn fields_gate_per_region() {
        let mut board = Board::new();
        board.place_tile(TileKind::Crfr, 1, 0, 0).unwrap();
        // Farmer in the starting tile's southern field.
        if let Some(tile) = board.get_mut(0, 0) {
            tile.add_follower(
                FollowerOption::Farmer {
                    segment: Segment::EastBottom,
                }
                .deploy(PlayerId(0)),
            )
            .unwrap();
        }
        // Another road tile further east: its southern field is occupied,
        // the two slivers north of the road are not.
        let options = valid_followers(&board, TileKind::Crfr, 2, 0, 0);
        assert_eq!(
            farmers(&options),
            vec![Segment::EastTop, Segment::WestTop]
        );
    }
}
