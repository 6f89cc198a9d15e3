//! Legal-move generation.
//!
//! Enumerates legal tile placements against the current board and, for a
//! candidate placement, the legal follower deployments.

pub mod follower;
pub mod placement;

pub use follower::{valid_followers, FollowerOption};
pub use placement::{can_place_tile, legal_placements, Placement};
