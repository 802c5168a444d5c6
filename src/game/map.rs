//! Map and tile types.

use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;
use crate::game::Crop;
use crate::geometry::Bounds;

/// A coordinate on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// X coordinate (column).
    pub x: u16,
    /// Y coordinate (row).
    pub y: u16,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Sort key that orders coordinates row by row.
    #[must_use]
    #[inline]
    pub const fn row_major_key(self) -> (u16, u16) {
        (self.y, self.x)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Type of terrain on a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileType {
    /// Market tile - seeds can be bought and harvests sold here.
    GreenGrocer,
    /// Grass - walkable, nothing grows.
    #[default]
    Grass,
    /// Arid ground - walkable, nothing grows.
    Arid,
    /// Plain soil - plantable.
    Soil,
    /// Outer fertility band - plantable.
    FBandOuter,
    /// Middle fertility band - plantable.
    FBandMid,
    /// Inner fertility band - plantable, best growth.
    FBandInner,
}

impl TileType {
    /// Check if seeds may be planted on this terrain.
    #[must_use]
    pub const fn is_plantable(self) -> bool {
        matches!(
            self,
            TileType::Soil | TileType::FBandOuter | TileType::FBandMid | TileType::FBandInner
        )
    }

    /// Check if this is a market tile.
    #[must_use]
    pub const fn is_market(self) -> bool {
        matches!(self, TileType::GreenGrocer)
    }
}

/// Transient effects placed on a tile by game items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldEffects {
    /// Rain totem nearby (faster growth).
    pub rain_totem: bool,
    /// Fertility idol nearby (doubled crop value).
    pub fertility_idol: bool,
    /// Scarecrow nearby (only its owner may harvest).
    pub scarecrow: bool,
}

/// A single tile on the map.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Tile {
    /// Type of terrain.
    pub tile_type: TileType,
    /// Crop currently growing here ([`Crop::NONE`] if empty).
    #[serde(default)]
    pub crop: Crop,
    /// Active field effects.
    #[serde(default)]
    pub effects: FieldEffects,
}

impl Tile {
    /// Create an empty tile with the given terrain.
    #[must_use]
    pub const fn new(tile_type: TileType) -> Self {
        Self {
            tile_type,
            crop: Crop::NONE,
            effects: FieldEffects {
                rain_totem: false,
                fertility_idol: false,
                scarecrow: false,
            },
        }
    }

    /// Create a tile of the given terrain holding a crop.
    #[must_use]
    pub const fn with_crop(tile_type: TileType, crop: Crop) -> Self {
        let mut tile = Self::new(tile_type);
        tile.crop = crop;
        tile
    }

    /// Create a market tile.
    #[must_use]
    pub const fn market() -> Self {
        Self::new(TileType::GreenGrocer)
    }

    /// Create an empty soil tile.
    #[must_use]
    pub const fn soil() -> Self {
        Self::new(TileType::Soil)
    }
}

/// The game map.
#[derive(Debug, Clone, PartialEq)]
pub struct Map {
    /// Width of the map in tiles.
    width: u16,
    /// Height of the map in tiles.
    height: u16,
    /// Tiles stored in row-major order.
    tiles: Vec<Tile>,
}

impl Map {
    /// Build a map from row-major tiles.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the tile count is not
    /// `width * height`.
    pub fn new(width: u16, height: u16, tiles: Vec<Tile>) -> Result<Self, SnapshotError> {
        if width == 0 || height == 0 {
            return Err(SnapshotError::ZeroSize);
        }

        let expected = usize::from(width) * usize::from(height);
        if tiles.len() != expected {
            return Err(SnapshotError::TileCount {
                expected,
                actual: tiles.len(),
            });
        }

        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    /// Create a map where every tile is a copy of `tile`.
    ///
    /// Returns `None` if width or height is zero.
    #[must_use]
    pub fn filled(width: u16, height: u16, tile: Tile) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }

        let size = usize::from(width) * usize::from(height);
        Some(Self {
            width,
            height,
            tiles: vec![tile; size],
        })
    }

    /// Get the width of the map.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the height of the map.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Board dimensions as [`Bounds`].
    #[must_use]
    pub const fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }

    /// Get a reference to the raw tiles slice in row-major order.
    #[must_use]
    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Check if a coordinate is within the map bounds.
    #[must_use]
    pub const fn in_bounds(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// Convert a coordinate to an index into the tiles array.
    #[must_use]
    fn coord_to_index(&self, coord: Coord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(usize::from(coord.y) * usize::from(self.width) + usize::from(coord.x))
        } else {
            None
        }
    }

    /// Get a reference to the tile at the given coordinate.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<&Tile> {
        self.coord_to_index(coord).map(|idx| &self.tiles[idx])
    }

    /// Set the tile at the given coordinate.
    ///
    /// Returns `false` if the coordinate is out of bounds.
    pub fn set(&mut self, coord: Coord, tile: Tile) -> bool {
        if let Some(idx) = self.coord_to_index(coord) {
            self.tiles[idx] = tile;
            true
        } else {
            false
        }
    }

    /// Iterate over all coordinates and tiles in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Tile)> {
        let width = usize::from(self.width);
        self.tiles.iter().enumerate().map(move |(idx, tile)| {
            // Both quotients are bounded by u16 dimensions.
            #[allow(clippy::cast_possible_truncation)]
            let coord = Coord::new((idx % width) as u16, (idx / width) as u16);
            (coord, tile)
        })
    }

    /// Check if the tile at `coord` is a market tile.
    #[must_use]
    pub fn is_market(&self, coord: Coord) -> bool {
        self.get(coord).is_some_and(|tile| tile.tile_type.is_market())
    }

    /// Iterate over the coordinates of all market tiles.
    pub fn market_tiles(&self) -> impl Iterator<Item = Coord> + '_ {
        self.iter()
            .filter(|(_, tile)| tile.tile_type.is_market())
            .map(|(coord, _)| coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::CropKind;

    #[test]
    fn test_map_creation() {
        let map = Map::filled(10, 10, Tile::soil()).unwrap();
        assert_eq!(map.width(), 10);
        assert_eq!(map.height(), 10);
        assert_eq!(map.tiles().len(), 100);
    }

    #[test]
    fn test_map_zero_size() {
        assert!(Map::filled(0, 10, Tile::soil()).is_none());
        assert_eq!(Map::new(10, 0, Vec::new()), Err(SnapshotError::ZeroSize));
    }

    #[test]
    fn test_map_tile_count_checked() {
        let err = Map::new(3, 3, vec![Tile::soil(); 8]).unwrap_err();
        assert_eq!(
            err,
            SnapshotError::TileCount {
                expected: 9,
                actual: 8
            }
        );
    }

    #[test]
    fn test_map_get_set() {
        let mut map = Map::filled(10, 10, Tile::soil()).unwrap();
        let coord = Coord::new(5, 5);

        assert_eq!(map.get(coord).unwrap().tile_type, TileType::Soil);

        let crop = Crop::new(CropKind::Corn, 0, 10.0);
        assert!(map.set(coord, Tile::with_crop(TileType::FBandInner, crop)));
        let tile = map.get(coord).unwrap();
        assert_eq!(tile.tile_type, TileType::FBandInner);
        assert_eq!(tile.crop, crop);

        assert!(!map.set(Coord::new(10, 0), Tile::soil()));
    }

    #[test]
    fn test_map_bounds() {
        let map = Map::filled(10, 10, Tile::soil()).unwrap();
        assert!(map.in_bounds(Coord::new(0, 0)));
        assert!(map.in_bounds(Coord::new(9, 9)));
        assert!(!map.in_bounds(Coord::new(10, 0)));
        assert!(!map.in_bounds(Coord::new(0, 10)));
    }

    #[test]
    fn test_iter_is_row_major() {
        let map = Map::filled(3, 2, Tile::soil()).unwrap();
        let coords: Vec<_> = map.iter().map(|(c, _)| c).collect();
        assert_eq!(coords[0], Coord::new(0, 0));
        assert_eq!(coords[2], Coord::new(2, 0));
        assert_eq!(coords[3], Coord::new(0, 1));
    }

    #[test]
    fn test_market_tiles() {
        let mut map = Map::filled(5, 5, Tile::soil()).unwrap();
        map.set(Coord::new(2, 0), Tile::market());
        map.set(Coord::new(3, 0), Tile::market());

        let markets: Vec<_> = map.market_tiles().collect();
        assert_eq!(markets, vec![Coord::new(2, 0), Coord::new(3, 0)]);
        assert!(map.is_market(Coord::new(2, 0)));
        assert!(!map.is_market(Coord::new(2, 1)));
    }

    #[test]
    fn test_tile_type_plantable() {
        assert!(TileType::Soil.is_plantable());
        assert!(TileType::FBandMid.is_plantable());
        assert!(!TileType::GreenGrocer.is_plantable());
        assert!(!TileType::Grass.is_plantable());
    }

    #[test]
    fn test_tile_json_defaults() {
        let tile: Tile = serde_json::from_str(r#"{"tile_type":"f_band_outer"}"#).unwrap();
        assert_eq!(tile.tile_type, TileType::FBandOuter);
        assert!(tile.crop.is_none());
        assert!(!tile.effects.scarecrow);
    }
}
