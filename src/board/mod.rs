//! Board representation and tile geometry.
//!
//! Contains the core data structures for edge terrains, perimeter segments,
//! farm borders, tile kinds, followers, and the sparse grid.

pub mod border;
pub mod farm;
pub mod follower;
pub mod grid;
pub mod segment;
pub mod tile;

pub use border::{rotated_borders, Direction, Terrain, ALL_DIRECTIONS};
pub use farm::{FarmBorder, SegmentSet};
pub use follower::{ClaimPosition, Follower, PlayerId, Role};
pub use grid::{Board, PlacementError};
pub use segment::{Segment, ALL_SEGMENTS, SEGMENT_COUNT};
pub use tile::{
    FarmSpan, FollowerError, KindInfo, Tile, TileKind, ALL_KINDS, KIND_COUNT, KIND_INFO,
    STARTING_KIND,
};
