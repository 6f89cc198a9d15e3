//! Tile kinds, the fixed catalog, and placed-tile values.
//!
//! The 24 kinds of the base distribution are data-driven: a `#[repr(u8)]`
//! enum indexes a compile-time table holding each kind's base borders,
//! cloister / city-connectivity / pennant flags, supply multiplicity, and
//! farm-region arcs. Kind names spell the clockwise border letters from
//! north; `P` marks a pennant variant and `Split` a variant whose two city
//! edges are not connected inside the tile.

use thiserror::Error;

use super::border::{rotated_borders, Direction, Terrain, ALL_DIRECTIONS};
use super::farm::{FarmBorder, SegmentSet};
use super::follower::Follower;

/// The number of tile kinds in the base distribution.
pub const KIND_COUNT: usize = 24;

/// A tile kind in the base distribution.
///
/// The `#[repr(u8)]` attribute enables use as an index into `KIND_INFO`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TileKind {
    Cccc = 0,
    Cccf = 1,
    CccfP = 2,
    Cccr = 3,
    CccrP = 4,
    Ccff = 5,
    CcffP = 6,
    CcffSplit = 7,
    Ccrr = 8,
    CcrrP = 9,
    Cfcf = 10,
    CfcfP = 11,
    CfcfSplit = 12,
    Cfff = 13,
    Cfrr = 14,
    Crfr = 15,
    Crrf = 16,
    Crrr = 17,
    Ffff = 18,
    Fffr = 19,
    Ffrr = 20,
    Frfr = 21,
    Frrr = 22,
    Rrrr = 23,
}

/// All kind variants in index order.
pub const ALL_KINDS: [TileKind; KIND_COUNT] = [
    TileKind::Cccc,
    TileKind::Cccf,
    TileKind::CccfP,
    TileKind::Cccr,
    TileKind::CccrP,
    TileKind::Ccff,
    TileKind::CcffP,
    TileKind::CcffSplit,
    TileKind::Ccrr,
    TileKind::CcrrP,
    TileKind::Cfcf,
    TileKind::CfcfP,
    TileKind::CfcfSplit,
    TileKind::Cfff,
    TileKind::Cfrr,
    TileKind::Crfr,
    TileKind::Crrf,
    TileKind::Crrr,
    TileKind::Ffff,
    TileKind::Fffr,
    TileKind::Ffrr,
    TileKind::Frfr,
    TileKind::Frrr,
    TileKind::Rrrr,
];

/// The kind placed at the origin before the first turn.
pub const STARTING_KIND: TileKind = TileKind::Crfr;

/// One farm region's perimeter arcs, in unrotated half-unit ticks.
#[derive(Debug, Clone, Copy)]
pub enum FarmSpan {
    /// A single contiguous arc `[start, end)`.
    Arc(u8, u8),
    /// Two arcs joined through a passageway between unconnected city edges.
    Dual(u8, u8, u8, u8),
}

/// Static description of one tile kind.
#[derive(Debug)]
pub struct KindInfo {
    /// Base edge terrains, clockwise from north.
    pub borders: [Terrain; 4],
    /// Whether a cloister occupies the tile.
    pub cloister: bool,
    /// Whether the tile's city edges form one connected city area.
    pub cities_connected: bool,
    /// Whether the city carries a pennant (scoring data, unused here).
    pub pennant: bool,
    /// Copies in the supply, starting tile included.
    pub count: u8,
    /// Farm regions touching the perimeter.
    pub farms: &'static [FarmSpan],
}

/// Shorthand constructors for catalog entries (used only in table
/// construction).
const fn entry(
    borders: [Terrain; 4],
    cloister: bool,
    cities_connected: bool,
    pennant: bool,
    count: u8,
    farms: &'static [FarmSpan],
) -> KindInfo {
    KindInfo {
        borders,
        cloister,
        cities_connected,
        pennant,
        count,
        farms,
    }
}
const fn plain(borders: [Terrain; 4], count: u8, farms: &'static [FarmSpan]) -> KindInfo {
    entry(borders, false, true, false, count, farms)
}
const fn pennant(borders: [Terrain; 4], count: u8, farms: &'static [FarmSpan]) -> KindInfo {
    entry(borders, false, true, true, count, farms)
}
const fn split(borders: [Terrain; 4], count: u8, farms: &'static [FarmSpan]) -> KindInfo {
    entry(borders, false, false, false, count, farms)
}
const fn cloister(borders: [Terrain; 4], count: u8, farms: &'static [FarmSpan]) -> KindInfo {
    entry(borders, true, true, false, count, farms)
}

/// Shorthand terrain aliases.
const C: Terrain = Terrain::City;
const F: Terrain = Terrain::Farm;
const R: Terrain = Terrain::Road;

use FarmSpan::{Arc, Dual};

/// The complete kind catalog, indexed by `TileKind` discriminant.
///
/// Farm arcs are in half-unit ticks: the north edge spans ticks 7 and 0,
/// east 1-2, south 3-4, west 5-6. Roads bisect the edges they leave
/// through, so each roadside field gets its own arc; a field wrapping
/// behind a dead-end road (fffr) covers the full perimeter.
pub static KIND_INFO: [KindInfo; KIND_COUNT] = [
    // cccc: one city on all four edges.
    plain([C, C, C, C], 1, &[]),
    // cccf: city on three edges, field on the west.
    plain([C, C, C, F], 3, &[Arc(5, 7)]),
    pennant([C, C, C, F], 1, &[Arc(5, 7)]),
    // cccr: a road dead-ends at the city gate, splitting the west field.
    plain([C, C, C, R], 1, &[Arc(5, 6), Arc(6, 7)]),
    pennant([C, C, C, R], 2, &[Arc(5, 6), Arc(6, 7)]),
    // ccff: city across the north-east corner, field on the rest.
    plain([C, C, F, F], 3, &[Arc(3, 7)]),
    pennant([C, C, F, F], 2, &[Arc(3, 7)]),
    // ccff with two separate city stubs; the field is unchanged.
    split([C, C, F, F], 2, &[Arc(3, 7)]),
    // ccrr: corner city, road curving south-west past it.
    plain([C, C, R, R], 3, &[Arc(3, 4), Arc(4, 6), Arc(6, 7)]),
    pennant([C, C, R, R], 2, &[Arc(3, 4), Arc(4, 6), Arc(6, 7)]),
    // cfcf: a city band north-south separating the east and west fields.
    plain([C, F, C, F], 1, &[Arc(1, 3), Arc(5, 7)]),
    pennant([C, F, C, F], 2, &[Arc(1, 3), Arc(5, 7)]),
    // cfcf with unconnected city stubs: the fields join between them.
    split([C, F, C, F], 3, &[Dual(1, 3, 5, 7)]),
    // cfff: city cap on the north, one field everywhere else.
    plain([C, F, F, F], 5, &[Arc(1, 7)]),
    // cfrr: road curving south-west below the city.
    plain([C, F, R, R], 3, &[Arc(1, 4), Arc(4, 6), Arc(6, 7)]),
    // crfr: the starting tile; a road runs east-west under the city.
    plain([C, R, F, R], 4, &[Arc(1, 2), Arc(2, 6), Arc(6, 7)]),
    // crrf: road curving east-south below the city.
    plain([C, R, R, F], 3, &[Arc(1, 2), Arc(2, 4), Arc(4, 7)]),
    // crrr: three-way crossroads below the city.
    plain([C, R, R, R], 3, &[Arc(1, 2), Arc(2, 4), Arc(4, 6), Arc(6, 7)]),
    // ffff: cloister in an undivided field.
    cloister([F, F, F, F], 4, &[Arc(0, 8)]),
    // fffr: cloister with a dead-end road from the west; the field wraps
    // around the road end.
    cloister([F, F, F, R], 2, &[Arc(6, 14)]),
    // ffrr: road curving south-west through open fields.
    plain([F, F, R, R], 9, &[Arc(4, 6), Arc(6, 12)]),
    // frfr: straight east-west road.
    plain([F, R, F, R], 8, &[Arc(2, 6), Arc(6, 10)]),
    // frrr: three-way crossroads.
    plain([F, R, R, R], 4, &[Arc(2, 4), Arc(4, 6), Arc(6, 10)]),
    // rrrr: four-way crossroads, one field per corner.
    plain([R, R, R, R], 1, &[Arc(0, 2), Arc(2, 4), Arc(4, 6), Arc(6, 8)]),
];

impl TileKind {
    /// The catalog entry for this kind.
    pub fn info(self) -> &'static KindInfo {
        &KIND_INFO[self as usize]
    }

    /// Returns the lowercase kind name.
    pub const fn name(self) -> &'static str {
        match self {
            TileKind::Cccc => "cccc",
            TileKind::Cccf => "cccf",
            TileKind::CccfP => "cccfp",
            TileKind::Cccr => "cccr",
            TileKind::CccrP => "cccrp",
            TileKind::Ccff => "ccff",
            TileKind::CcffP => "ccffp",
            TileKind::CcffSplit => "ccffsplit",
            TileKind::Ccrr => "ccrr",
            TileKind::CcrrP => "ccrrp",
            TileKind::Cfcf => "cfcf",
            TileKind::CfcfP => "cfcfp",
            TileKind::CfcfSplit => "cfcfsplit",
            TileKind::Cfff => "cfff",
            TileKind::Cfrr => "cfrr",
            TileKind::Crfr => "crfr",
            TileKind::Crrf => "crrf",
            TileKind::Crrr => "crrr",
            TileKind::Ffff => "ffff",
            TileKind::Fffr => "fffr",
            TileKind::Ffrr => "ffrr",
            TileKind::Frfr => "frfr",
            TileKind::Frrr => "frrr",
            TileKind::Rrrr => "rrrr",
        }
    }

    /// The unrotated edge terrains, clockwise from north.
    pub fn base_borders(self) -> [Terrain; 4] {
        self.info().borders
    }

    /// The terrain facing each absolute direction after `rotation`
    /// clockwise quarter-turns.
    pub fn borders(self, rotation: u8) -> [Terrain; 4] {
        rotated_borders(self.base_borders(), rotation)
    }

    /// The terrain facing one absolute direction under `rotation`.
    pub fn border(self, direction: Direction, rotation: u8) -> Terrain {
        self.borders(rotation)[direction as usize]
    }

    /// The directions whose edges carry the given terrain under `rotation`.
    pub fn edges_with(self, terrain: Terrain, rotation: u8) -> Vec<Direction> {
        let borders = self.borders(rotation);
        ALL_DIRECTIONS
            .into_iter()
            .filter(|&dir| borders[dir as usize] == terrain)
            .collect()
    }

    /// Whether a cloister occupies the tile.
    pub fn has_cloister(self) -> bool {
        self.info().cloister
    }

    /// Whether the tile's city edges form one connected city area.
    pub fn cities_connected(self) -> bool {
        self.info().cities_connected
    }

    /// Whether the city carries a pennant.
    pub fn has_pennant(self) -> bool {
        self.info().pennant
    }

    /// Every distinct farm region touching the perimeter, rotated into
    /// absolute position.
    pub fn farm_connections(self, rotation: u8) -> Vec<FarmBorder> {
        self.info()
            .farms
            .iter()
            .map(|span| match *span {
                Arc(start, end) => FarmBorder::Area(SegmentSet::arc(start, end, rotation)),
                Dual(s1, e1, s2, e2) => FarmBorder::Passageway(
                    SegmentSet::arc(s1, e1, rotation),
                    SegmentSet::arc(s2, e2, rotation),
                ),
            })
            .collect()
    }
}

/// Errors raised when stationing a follower.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FollowerError {
    #[error("tile already carries a follower")]
    TileOccupied,
}

/// A tile fixed on the board: kind, rotation, and at most one follower.
///
/// Base geometry is immutable; the rotation is fixed when the tile is
/// placed and every geometric read accounts for it.
#[derive(Debug, Clone)]
pub struct Tile {
    kind: TileKind,
    rotation: u8,
    follower: Option<Follower>,
}

impl Tile {
    /// Creates a placed tile. Rotation is normalized mod 4.
    pub fn new(kind: TileKind, rotation: u8) -> Tile {
        Tile {
            kind,
            rotation: rotation % 4,
            follower: None,
        }
    }

    pub fn kind(&self) -> TileKind {
        self.kind
    }

    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    /// The terrain facing one absolute direction.
    pub fn border(&self, direction: Direction) -> Terrain {
        self.kind.border(direction, self.rotation)
    }

    /// The terrains facing the four absolute directions.
    pub fn borders(&self) -> [Terrain; 4] {
        self.kind.borders(self.rotation)
    }

    /// The tile's farm borders in absolute position.
    pub fn farm_connections(&self) -> Vec<FarmBorder> {
        self.kind.farm_connections(self.rotation)
    }

    pub fn cities_connected(&self) -> bool {
        self.kind.cities_connected()
    }

    pub fn has_cloister(&self) -> bool {
        self.kind.has_cloister()
    }

    /// The follower stationed here, if any.
    pub fn follower(&self) -> Option<&Follower> {
        self.follower.as_ref()
    }

    /// Stations a follower on this tile. At most one follower may occupy a
    /// tile; a second assignment is a caller contract violation.
    pub fn add_follower(&mut self, follower: Follower) -> Result<(), FollowerError> {
        if self.follower.is_some() {
            return Err(FollowerError::TileOccupied);
        }
        self.follower = Some(follower);
        Ok(())
    }
}
