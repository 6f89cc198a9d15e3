//! Followers: the tokens players deploy to claim regions.

use super::border::Direction;
use super::segment::Segment;

/// Identifies a player by seat order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(pub u8);

/// The role a deployed follower plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Stands on roads.
    Thief,
    /// Occupies a cloister.
    Monk,
    /// Stands in cities.
    Knight,
    /// Lies in fields.
    Farmer,
}

impl Role {
    /// Returns the lowercase display name.
    pub const fn name(self) -> &'static str {
        match self {
            Role::Thief => "thief",
            Role::Monk => "monk",
            Role::Knight => "knight",
            Role::Farmer => "farmer",
        }
    }
}

/// Where on a tile's geometry a follower's claim sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimPosition {
    /// Monks claim the whole tile.
    Tile,
    /// Thieves and knights record the edge their claim faces.
    Edge(Direction),
    /// Farmers record a representative perimeter segment of their region.
    Segment(Segment),
}

/// A follower deployed to a tile.
///
/// Built from a validated `FollowerOption`; callers never assemble one from
/// scratch during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Follower {
    pub role: Role,
    pub player: PlayerId,
    pub position: ClaimPosition,
}
