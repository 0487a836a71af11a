//! Web Mercator math for the location picker.
//!
//! DESIGN
//! ======
//! The map pane is a fixed-size grid of OpenStreetMap raster tiles around a
//! center coordinate. All geometry lives here as pure functions over world
//! pixel coordinates (256 * 2^zoom per axis), so click-to-coordinate and
//! marker placement are testable without a DOM.

use std::f64::consts::PI;

#[cfg(test)]
#[path = "mercator_test.rs"]
mod tests;

pub const TILE_SIZE: f64 = 256.0;

/// Latitude limit of the square Web Mercator projection.
const MAX_LATITUDE: f64 = 85.051_128_78;

fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * f64::from(1_u32 << zoom)
}

/// Project a coordinate to world pixel space at the given zoom.
#[must_use]
pub fn project(lat: f64, lng: f64, zoom: u8) -> (f64, f64) {
    let n = world_size(zoom);
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let lat_rad = lat.to_radians();

    let x = (lng + 180.0) / 360.0 * n;
    let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0 * n;
    (x, y)
}

/// Inverse of [`project`]: world pixels back to `(lat, lng)`.
#[must_use]
pub fn unproject(x: f64, y: f64, zoom: u8) -> (f64, f64) {
    let n = world_size(zoom);
    let lng = x / n * 360.0 - 180.0;
    let lat = (PI * (1.0 - 2.0 * y / n)).sinh().atan().to_degrees();
    (lat, lng)
}

/// Coordinate under a click at `(offset_x, offset_y)` within a pane of
/// `width` x `height` pixels centered on `center`.
#[must_use]
pub fn coord_at_offset(
    center: (f64, f64),
    zoom: u8,
    width: f64,
    height: f64,
    offset_x: f64,
    offset_y: f64,
) -> (f64, f64) {
    let (cx, cy) = project(center.0, center.1, zoom);
    unproject(cx - width / 2.0 + offset_x, cy - height / 2.0 + offset_y, zoom)
}

/// Pixel offset of `coord` within the pane, for marker placement.
/// May fall outside `[0, width] x [0, height]` if the coord is off-pane.
#[must_use]
pub fn offset_of_coord(center: (f64, f64), zoom: u8, width: f64, height: f64, coord: (f64, f64)) -> (f64, f64) {
    let (cx, cy) = project(center.0, center.1, zoom);
    let (px, py) = project(coord.0, coord.1, zoom);
    (px - cx + width / 2.0, py - cy + height / 2.0)
}

/// One raster tile positioned within the pane.
#[derive(Clone, Debug, PartialEq)]
pub struct TilePlacement {
    pub url: String,
    /// CSS offset of the tile's top-left corner within the pane.
    pub left: f64,
    pub top: f64,
}

/// Tiles needed to cover a `width` x `height` pane centered on `center`.
/// Horizontal tile indices wrap around the antimeridian; vertical indices
/// outside the world are skipped.
#[must_use]
pub fn visible_tiles(center: (f64, f64), zoom: u8, width: f64, height: f64) -> Vec<TilePlacement> {
    let tiles_per_axis = 1_i64 << zoom;
    let (cx, cy) = project(center.0, center.1, zoom);
    let pane_left = cx - width / 2.0;
    let pane_top = cy - height / 2.0;

    #[allow(clippy::cast_possible_truncation)]
    let first_col = (pane_left / TILE_SIZE).floor() as i64;
    #[allow(clippy::cast_possible_truncation)]
    let last_col = ((pane_left + width) / TILE_SIZE).ceil() as i64 - 1;
    #[allow(clippy::cast_possible_truncation)]
    let first_row = (pane_top / TILE_SIZE).floor() as i64;
    #[allow(clippy::cast_possible_truncation)]
    let last_row = ((pane_top + height) / TILE_SIZE).ceil() as i64 - 1;

    let mut tiles = Vec::new();
    for row in first_row..=last_row {
        if row < 0 || row >= tiles_per_axis {
            continue;
        }
        for col in first_col..=last_col {
            let wrapped_col = col.rem_euclid(tiles_per_axis);
            #[allow(clippy::cast_precision_loss)]
            let left = col as f64 * TILE_SIZE - pane_left;
            #[allow(clippy::cast_precision_loss)]
            let top = row as f64 * TILE_SIZE - pane_top;
            tiles.push(TilePlacement {
                url: format!("https://tile.openstreetmap.org/{zoom}/{wrapped_col}/{row}.png"),
                left,
                top,
            });
        }
    }
    tiles
}
