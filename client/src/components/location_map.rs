//! Location picker over OpenStreetMap raster tiles.
//!
//! DESIGN
//! ======
//! A fixed-size pane of tiles around a fixed center; a click is converted
//! back to `(lat, lng)` via the Web Mercator math in `util::mercator` and
//! replaces the current marker — last click wins. Tiles and the marker are
//! `pointer-events: none` so click offsets are always relative to the pane.

use leptos::prelude::*;

use crate::state::registration::RegistrationState;
use crate::util::mercator;

pub const MAP_WIDTH: f64 = 640.0;
pub const MAP_HEIGHT: f64 = 360.0;
const MAP_ZOOM: u8 = 15;

/// Initial map center, matching the original app's neighborhood.
const DEFAULT_CENTER: (f64, f64) = (-26.230_264, -49.406_802);

/// Map pane with a single position marker driven by clicks.
#[component]
pub fn LocationMap(registration: RwSignal<RegistrationState>) -> impl IntoView {
    let tiles = mercator::visible_tiles(DEFAULT_CENTER, MAP_ZOOM, MAP_WIDTH, MAP_HEIGHT);

    let on_click = move |ev: leptos::ev::MouseEvent| {
        let (lat, lng) = mercator::coord_at_offset(
            DEFAULT_CENTER,
            MAP_ZOOM,
            MAP_WIDTH,
            MAP_HEIGHT,
            f64::from(ev.offset_x()),
            f64::from(ev.offset_y()),
        );
        registration.update(|reg| reg.select_position(lat, lng));
    };

    let marker_style = move || {
        registration.get().position.map(|position| {
            let (x, y) = mercator::offset_of_coord(DEFAULT_CENTER, MAP_ZOOM, MAP_WIDTH, MAP_HEIGHT, position);
            format!("left: {x}px; top: {y}px; pointer-events: none;")
        })
    };

    view! {
        <div
            class="location-map"
            style=format!("position: relative; overflow: hidden; width: {MAP_WIDTH}px; height: {MAP_HEIGHT}px;")
            on:click=on_click
        >
            {tiles
                .into_iter()
                .map(|tile| {
                    view! {
                        <img
                            class="location-map__tile"
                            src=tile.url
                            draggable="false"
                            style=format!(
                                "position: absolute; left: {}px; top: {}px; pointer-events: none;",
                                tile.left,
                                tile.top,
                            )
                        />
                    }
                })
                .collect_view()}
            <Show when=move || marker_style().is_some()>
                <div class="location-map__marker" style=move || marker_style().unwrap_or_default()></div>
            </Show>
            <span class="location-map__attribution" style="pointer-events: none;">
                "© OpenStreetMap contributors"
            </span>
        </div>
    }
}
