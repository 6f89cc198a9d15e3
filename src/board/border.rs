//! Edge terrains and the four cardinal directions.
//!
//! Every tile presents one terrain to each of the four absolute directions.
//! Rotation never mutates a tile's base geometry; it only re-maps which base
//! edge faces which direction.

/// The terrain carried by one tile edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Terrain {
    City,
    Farm,
    Road,
}

impl Terrain {
    /// Returns the single-character abbreviation used in kind names.
    pub const fn letter(self) -> char {
        match self {
            Terrain::City => 'c',
            Terrain::Farm => 'f',
            Terrain::Road => 'r',
        }
    }
}

/// An absolute direction on the board, clockwise from north.
///
/// The `#[repr(u8)]` discriminant doubles as the index into a tile's border
/// array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

/// All directions in clockwise order.
pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

impl Direction {
    /// The direction facing back at this one.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Grid offset of the neighboring cell in this direction. North is +y.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    /// Returns the single-character abbreviation.
    pub const fn letter(self) -> char {
        match self {
            Direction::North => 'n',
            Direction::East => 'e',
            Direction::South => 's',
            Direction::West => 'w',
        }
    }
}

/// Returns the terrain facing each absolute direction after `rotation`
/// clockwise quarter-turns of a tile with the given base borders.
///
/// A tile rotated once shows its base north edge to the east, so the edge
/// facing direction `d` is `base[(d + 4 - rotation) % 4]`. Out-of-range
/// rotations are normalized mod 4, never rejected.
pub fn rotated_borders(base: [Terrain; 4], rotation: u8) -> [Terrain; 4] {
    let r = (rotation % 4) as usize;
    let mut borders = base;
    for (d, slot) in borders.iter_mut().enumerate() {
        *slot = base[(d + 4 - r) % 4];
    }
    borders
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: [Terrain; 4] = [Terrain::City, Terrain::Road, Terrain::Farm, Terrain::Road];

    #[test]
    fn opposite_is_involution() {
        for dir in ALL_DIRECTIONS {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn offsets_cancel_with_opposite() {
        for dir in ALL_DIRECTIONS {
            let (dx, dy) = dir.offset();
            let (ox, oy) = dir.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn one_turn_moves_north_edge_to_east() {
        let rotated = rotated_borders(BASE, 1);
        assert_eq!(rotated[Direction::East as usize], BASE[0]);
        assert_eq!(rotated[Direction::South as usize], BASE[1]);
        assert_eq!(rotated[Direction::West as usize], BASE[2]);
        assert_eq!(rotated[Direction::North as usize], BASE[3]);
    }

    #[test]
    fn four_turns_are_identity() {
        for r in 0..4 {
            let mut borders = BASE;
            for _ in 0..4 {
                borders = rotated_borders(borders, r);
            }
            assert_eq!(borders, rotated_borders(BASE, 0), "rotation {r}");
        }
    }

    #[test]
    fn rotations_compose_additively() {
        for r1 in 0..4u8 {
            for r2 in 0..4u8 {
                let stepwise = rotated_borders(rotated_borders(BASE, r1), r2);
                assert_eq!(stepwise, rotated_borders(BASE, r1 + r2));
            }
        }
    }

    #[test]
    fn out_of_range_rotation_is_normalized() {
        assert_eq!(rotated_borders(BASE, 5), rotated_borders(BASE, 1));
        assert_eq!(rotated_borders(BASE, 8), rotated_borders(BASE, 0));
    }
}
