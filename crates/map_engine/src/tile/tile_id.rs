//! Quadtree tile coordinates

use std::fmt;

/// Address of a tile: zoom level plus column and row
///
/// Rows count from the north edge of the map (XYZ scheme).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId {
    /// Column
    pub x: u32,
    /// Row
    pub y: u32,
    /// Zoom level
    pub z: u8,
}

impl TileId {
    /// Deepest zoom level whose indices fit in `u32`
    pub const MAX_ZOOM: u8 = 31;

    /// Create a tile coordinate
    pub const fn new(x: u32, y: u32, z: u8) -> Self {
        Self { x, y, z }
    }

    /// Whether the indices address a tile that exists at this zoom
    pub fn is_valid(&self) -> bool {
        self.z <= Self::MAX_ZOOM && u64::from(self.x) < (1u64 << self.z) && u64::from(self.y) < (1u64 << self.z)
    }

    /// Tile one zoom level up that contains this one
    pub fn parent(&self) -> Option<Self> {
        (self.z > 0).then(|| Self::new(self.x >> 1, self.y >> 1, self.z - 1))
    }

    /// One of the four tiles one zoom level down, `index` in `0..4`
    ///
    /// Bit 0 of `index` selects the column, bit 1 the row. `None` at
    /// [`Self::MAX_ZOOM`], where child indices no longer fit.
    pub fn child(&self, index: u8) -> Option<Self> {
        debug_assert!(index < 4, "child index out of range: {index}");
        (self.z < Self::MAX_ZOOM).then(|| {
            Self::new(
                (self.x << 1) | u32::from(index & 1),
                (self.y << 1) | u32::from((index >> 1) & 1),
                self.z + 1,
            )
        })
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}
