//! Half-edge perimeter segments.
//!
//! Farm regions are addressed at half-edge resolution: each of the four
//! edges bisects into two segments, giving eight positions clockwise around
//! the perimeter. Discriminants are half-unit ticks, so a quarter-turn adds
//! two ticks and segment arithmetic stays integral (the rulebook-style
//! fractional positions 0.0-3.5 are ticks halved).

use super::border::Direction;

/// The number of half-edge segments on a tile perimeter.
pub const SEGMENT_COUNT: usize = 8;

/// One bisected edge half, clockwise from the right half of the north edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Segment {
    NorthRight = 0,
    EastTop = 1,
    EastBottom = 2,
    SouthRight = 3,
    SouthLeft = 4,
    WestBottom = 5,
    WestTop = 6,
    NorthLeft = 7,
}

/// All segments in clockwise perimeter order.
pub const ALL_SEGMENTS: [Segment; SEGMENT_COUNT] = [
    Segment::NorthRight,
    Segment::EastTop,
    Segment::EastBottom,
    Segment::SouthRight,
    Segment::SouthLeft,
    Segment::WestBottom,
    Segment::WestTop,
    Segment::NorthLeft,
];

impl Segment {
    /// Builds a segment from a half-unit tick, wrapping around the perimeter.
    pub const fn from_tick(tick: u8) -> Segment {
        match tick % 8 {
            0 => Segment::NorthRight,
            1 => Segment::EastTop,
            2 => Segment::EastBottom,
            3 => Segment::SouthRight,
            4 => Segment::SouthLeft,
            5 => Segment::WestBottom,
            6 => Segment::WestTop,
            _ => Segment::NorthLeft,
        }
    }

    /// The half-unit tick of this segment.
    pub const fn tick(self) -> u8 {
        self as u8
    }

    /// The edge this segment lies on.
    pub const fn direction(self) -> Direction {
        match self {
            Segment::NorthRight | Segment::NorthLeft => Direction::North,
            Segment::EastTop | Segment::EastBottom => Direction::East,
            Segment::SouthRight | Segment::SouthLeft => Direction::South,
            Segment::WestBottom | Segment::WestTop => Direction::West,
        }
    }

    /// The segment this one touches on the geometrically adjacent tile.
    ///
    /// Opposite edge, same physical half: the left half of one tile's edge
    /// meets the right half of the neighbor's facing edge. Applying this
    /// twice returns the original segment.
    pub const fn facing(self) -> Segment {
        match self {
            Segment::NorthRight => Segment::SouthRight,
            Segment::SouthRight => Segment::NorthRight,
            Segment::NorthLeft => Segment::SouthLeft,
            Segment::SouthLeft => Segment::NorthLeft,
            Segment::EastTop => Segment::WestTop,
            Segment::WestTop => Segment::EastTop,
            Segment::EastBottom => Segment::WestBottom,
            Segment::WestBottom => Segment::EastBottom,
        }
    }

    /// This segment after `rotation` clockwise quarter-turns.
    pub const fn rotated(self, rotation: u8) -> Segment {
        Segment::from_tick(self.tick() + 2 * (rotation % 4))
    }

    /// Fractional perimeter position in edge units, for display.
    pub fn units(self) -> f32 {
        self.tick() as f32 / 2.0
    }
}
