use super::*;

const EPS: f64 = 1e-9;

#[test]
fn origin_projects_to_world_center() {
    let (x, y) = project(0.0, 0.0, 0);
    assert!((x - 128.0).abs() < EPS);
    assert!((y - 128.0).abs() < EPS);
}

#[test]
fn project_unproject_roundtrips() {
    let (lat, lng) = (-26.230_264, -49.406_802);
    let (x, y) = project(lat, lng, 15);
    let (lat_back, lng_back) = unproject(x, y, 15);
    assert!((lat - lat_back).abs() < 1e-9, "lat {lat} != {lat_back}");
    assert!((lng - lng_back).abs() < 1e-9, "lng {lng} != {lng_back}");
}

#[test]
fn project_clamps_polar_latitudes() {
    let (_, y_north) = project(89.9, 0.0, 3);
    let (_, y_limit) = project(85.051_128_78, 0.0, 3);
    assert!((y_north - y_limit).abs() < EPS);
}

#[test]
fn click_at_pane_center_is_the_center_coordinate() {
    let center = (-26.230_264, -49.406_802);
    let (lat, lng) = coord_at_offset(center, 15, 640.0, 360.0, 320.0, 180.0);
    assert!((lat - center.0).abs() < 1e-9);
    assert!((lng - center.1).abs() < 1e-9);
}

#[test]
fn click_right_of_center_moves_east() {
    let center = (-26.230_264, -49.406_802);
    let (_, lng) = coord_at_offset(center, 15, 640.0, 360.0, 420.0, 180.0);
    assert!(lng > center.1);
}

#[test]
fn marker_offset_inverts_click_position() {
    let center = (-26.230_264, -49.406_802);
    let clicked = coord_at_offset(center, 15, 640.0, 360.0, 101.0, 42.0);
    let (x, y) = offset_of_coord(center, 15, 640.0, 360.0, clicked);
    assert!((x - 101.0).abs() < 1e-6);
    assert!((y - 42.0).abs() < 1e-6);
}

#[test]
fn visible_tiles_cover_the_pane() {
    let center = (-26.230_264, -49.406_802);
    let tiles = visible_tiles(center, 15, 640.0, 360.0);

    // 640px needs at least 3 tile columns, 360px at least 2 rows.
    assert!(tiles.len() >= 6, "got {} tiles", tiles.len());
    for tile in &tiles {
        assert!(tile.left > -TILE_SIZE && tile.left < 640.0);
        assert!(tile.top > -TILE_SIZE && tile.top < 360.0);
        assert!(tile.url.starts_with("https://tile.openstreetmap.org/15/"));
    }
}

#[test]
fn visible_tiles_skips_rows_outside_the_world() {
    // Zoom 0 has a single 256px tile; a taller pane must not invent rows.
    let tiles = visible_tiles((0.0, 0.0), 0, 256.0, 1024.0);
    assert_eq!(tiles.len(), 1);
    assert_eq!(tiles[0].url, "https://tile.openstreetmap.org/0/0/0.png");
}
