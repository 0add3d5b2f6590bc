//! Map tiles: quadtree identity, projected placement and per-style geometry

pub mod map_tile;
pub mod projection;
pub mod tile_id;

pub use map_tile::MapTile;
pub use projection::{MapProjection, MercatorProjection, TileBounds};
pub use tile_id::TileId;
