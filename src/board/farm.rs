//! Farm-region border geometry.
//!
//! A farm region touches the tile perimeter on a set of half-edge segments.
//! Most regions are a single contiguous arc ("area"); a tile whose two city
//! edges are unconnected additionally produces a "passageway" -- two disjoint
//! arcs that count as one logical border for adjacency purposes.

use log::warn;

use super::border::{Direction, ALL_DIRECTIONS};
use super::segment::{Segment, ALL_SEGMENTS};

/// A set of perimeter segments, stored as a bitmask over the eight ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SegmentSet(u8);

impl SegmentSet {
    /// The empty set.
    pub const EMPTY: SegmentSet = SegmentSet(0);

    /// Builds the arc `[start, end)` in half-unit ticks, rotated by
    /// `rotation` clockwise quarter-turns and wrapping around the perimeter.
    /// Requires `start < end`.
    ///
    /// Spans longer than the full perimeter are clipped to eight ticks and
    /// reported: they indicate an authoring error in the tile catalog, not a
    /// runtime player action.
    pub fn arc(start: u8, end: u8, rotation: u8) -> SegmentSet {
        let shift = 2 * (rotation % 4);
        let start = start + shift;
        let mut end = end + shift;
        if end - start > 8 {
            warn!("farm arc [{start}, {end}) spans more than the tile perimeter; clipping");
            end = start + 8;
        }
        let mut bits = 0u8;
        for tick in start..end {
            bits |= 1 << (tick % 8);
        }
        SegmentSet(bits)
    }

    /// Whether the set holds the given segment.
    pub const fn contains(self, segment: Segment) -> bool {
        self.0 & (1 << segment.tick()) != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The union of two sets.
    pub const fn union(self, other: SegmentSet) -> SegmentSet {
        SegmentSet(self.0 | other.0)
    }

    /// Iterates the segments in clockwise perimeter order.
    pub fn iter(self) -> impl Iterator<Item = Segment> {
        ALL_SEGMENTS.into_iter().filter(move |s| self.contains(*s))
    }

    /// The lowest-tick segment in the set, if any.
    pub fn first(self) -> Option<Segment> {
        self.iter().next()
    }
}

/// An inter-tile border of one farm region.
///
/// Owned by the tile it describes and recomputed from the tile's kind and
/// rotation whenever geometry is needed; never persisted as mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FarmBorder {
    /// A contiguous arc of perimeter segments.
    Area(SegmentSet),
    /// Two arcs disjoint on the tile, joined behind a pair of unconnected
    /// city edges, treated as one logical border.
    Passageway(SegmentSet, SegmentSet),
}

impl FarmBorder {
    /// Every segment the border touches.
    pub fn segments(&self) -> SegmentSet {
        match *self {
            FarmBorder::Area(segments) => segments,
            FarmBorder::Passageway(a, b) => a.union(b),
        }
    }

    /// Whether a follower sub-position lies within this border.
    pub fn contains(&self, segment: Segment) -> bool {
        self.segments().contains(segment)
    }

    /// The directions whose edges carry at least one of this border's
    /// segments; traversal only needs to consider those neighbors.
    pub fn directions(&self) -> Vec<Direction> {
        let segments = self.segments();
        ALL_DIRECTIONS
            .into_iter()
            .filter(|&dir| segments.iter().any(|s| s.direction() == dir))
            .collect()
    }

    /// A fixed representative segment, recorded as a farmer's position.
    pub fn representative(&self) -> Option<Segment> {
        self.segments().first()
    }

    /// Whether this border lines up, across the shared edge in `direction`,
    /// with `other` on the geometrically adjacent tile.
    pub fn connects_to(&self, direction: Direction, other: &FarmBorder) -> bool {
        self.segments()
            .iter()
            .any(|s| s.direction() == direction && other.contains(s.facing()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arc_enumerates_half_ticks() {
        let set = SegmentSet::arc(2, 6, 0);
        let segments: Vec<Segment> = set.iter().collect();
        assert_eq!(
            segments,
            vec![
                Segment::EastBottom,
                Segment::SouthRight,
                Segment::SouthLeft,
                Segment::WestBottom,
            ]
        );
    }

    #[test]
    fn arc_wraps_around_the_perimeter() {
        let set = SegmentSet::arc(6, 10, 0);
        assert!(set.contains(Segment::WestTop));
        assert!(set.contains(Segment::NorthLeft));
        assert!(set.contains(Segment::NorthRight));
        assert!(set.contains(Segment::EastTop));
        assert!(!set.contains(Segment::EastBottom));
    }

    #[test]
    fn rotation_distributes_over_span_construction() {
        for start in 0..8u8 {
            for len in 1..=8u8 {
                for rotation in 0..4u8 {
                    let rotated = SegmentSet::arc(start, start + len, rotation);
                    let shifted =
                        SegmentSet::arc(start + 2 * rotation, start + len + 2 * rotation, 0);
                    assert_eq!(rotated, shifted, "arc [{start}, {}) r{rotation}", start + len);
                }
            }
        }
    }

    #[test]
    fn overlong_arc_is_clipped_to_full_perimeter() {
        let clipped = SegmentSet::arc(1, 12, 0);
        assert_eq!(clipped, SegmentSet::arc(0, 8, 0));
    }

    #[test]
    fn representative_is_lowest_tick() {
        let border = FarmBorder::Area(SegmentSet::arc(3, 5, 0));
        assert_eq!(border.representative(), Some(Segment::SouthRight));
        assert_eq!(FarmBorder::Area(SegmentSet::EMPTY).representative(), None);
    }

    #[test]
    fn directions_cover_touched_edges_only() {
        let border = FarmBorder::Area(SegmentSet::arc(2, 6, 0));
        assert_eq!(
            border.directions(),
            vec![Direction::East, Direction::South, Direction::West]
        );
    }

    #[test]
    fn passageway_unions_both_arcs() {
        let border = FarmBorder::Passageway(SegmentSet::arc(1, 3, 0), SegmentSet::arc(5, 7, 0));
        assert!(border.contains(Segment::EastTop));
        assert!(border.contains(Segment::WestTop));
        assert!(!border.contains(Segment::NorthRight));
        assert_eq!(border.directions(), vec![Direction::East, Direction::West]);
    }

    #[test]
    fn facing_areas_connect() {
        // East edge of one tile against the west edge of its eastern neighbor.
        let east = FarmBorder::Area(SegmentSet::arc(1, 3, 0));
        let west = FarmBorder::Area(SegmentSet::arc(5, 7, 0));
        assert!(east.connects_to(Direction::East, &west));
        assert!(west.connects_to(Direction::West, &east));
    }

    #[test]
    fn connection_requires_the_shared_edge() {
        // Both borders touch farm segments, but not across the queried edge.
        let south = FarmBorder::Area(SegmentSet::arc(3, 5, 0));
        let west = FarmBorder::Area(SegmentSet::arc(5, 7, 0));
        assert!(!south.connects_to(Direction::East, &west));
    }

    #[test]
    fn half_edges_connect_independently() {
        // A road splits each facing edge; only the matching halves touch.
        let east_top = FarmBorder::Area(SegmentSet::arc(1, 2, 0));
        let west_top = FarmBorder::Area(SegmentSet::arc(6, 7, 0));
        let west_bottom = FarmBorder::Area(SegmentSet::arc(5, 6, 0));
        assert!(east_top.connects_to(Direction::East, &west_top));
        assert!(!east_top.connects_to(Direction::East, &west_bottom));
    }
}
