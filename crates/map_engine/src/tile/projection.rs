//! Map projection collaborator
//!
//! Tiles only ask a projection where they sit in projected space.

use std::fmt;

use super::tile_id::TileId;
use crate::foundation::math::DVec2;

/// Axis-aligned extent of a tile in projected units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileBounds {
    /// South-west corner
    pub min: DVec2,
    /// North-east corner
    pub max: DVec2,
}

impl TileBounds {
    /// Side length along x
    pub fn width(&self) -> f64 {
        (self.max.x - self.min.x).abs()
    }

    /// Centre point
    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }
}

/// Projection from the globe to a flat, metre-based plane
pub trait MapProjection: fmt::Debug + Send + Sync {
    /// Extent of `tile` in projected units
    fn tile_bounds(&self, tile: TileId) -> TileBounds;
}

/// Spherical (web) mercator with square tiles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MercatorProjection {
    tile_size: u32,
}

impl MercatorProjection {
    /// WGS84 equatorial radius in metres
    pub const EARTH_RADIUS: f64 = 6_378_137.0;

    /// Half the equatorial circumference; projected x and y lie in `[-H, H]`
    pub const HALF_CIRCUMFERENCE: f64 = std::f64::consts::PI * Self::EARTH_RADIUS;

    /// Create a projection for tiles of `tile_size` pixels
    pub fn new(tile_size: u32) -> Self {
        Self { tile_size }
    }

    /// Tile edge in pixels
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Metres per pixel at `zoom`
    pub fn resolution(&self, zoom: u8) -> f64 {
        2.0 * Self::HALF_CIRCUMFERENCE / f64::from(self.tile_size) / 2f64.powi(i32::from(zoom))
    }

    /// Convert pixel coordinates at `zoom` (origin top-left) to metres
    pub fn pixels_to_meters(&self, pixels: DVec2, zoom: u8) -> DVec2 {
        let res = self.resolution(zoom);
        DVec2::new(pixels.x * res - Self::HALF_CIRCUMFERENCE, Self::HALF_CIRCUMFERENCE - pixels.y * res)
    }
}

impl Default for MercatorProjection {
    fn default() -> Self {
        Self::new(256)
    }
}

impl MapProjection for MercatorProjection {
    fn tile_bounds(&self, tile: TileId) -> TileBounds {
        let size = f64::from(self.tile_size);
        let north_west = self.pixels_to_meters(DVec2::new(f64::from(tile.x) * size, f64::from(tile.y) * size), tile.z);
        let south_east =
            self.pixels_to_meters(DVec2::new((f64::from(tile.x) + 1.0) * size, (f64::from(tile.y) + 1.0) * size), tile.z);

        TileBounds {
            min: DVec2::new(north_west.x, south_east.y),
            max: DVec2::new(south_east.x, north_west.y),
        }
    }
}
