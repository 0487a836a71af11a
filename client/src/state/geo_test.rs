use super::*;

fn cities(names: &[&str]) -> Vec<CityInfo> {
    names.iter().map(|name| CityInfo { name: (*name).to_owned() }).collect()
}

#[test]
fn selecting_a_state_repopulates_the_city_options() {
    let mut geo = GeoState::default();

    geo.begin_cities_fetch("SC");
    geo.finish_cities_fetch("SC", Ok(cities(&["Joinville", "Blumenau"])));
    assert_eq!(geo.cities.len(), 2);

    geo.begin_cities_fetch("SP");
    assert!(geo.cities.is_empty(), "old state's cities must clear immediately");
    geo.finish_cities_fetch("SP", Ok(cities(&["Campinas"])));
    assert_eq!(geo.cities[0].name, "Campinas");
}

#[test]
fn stale_city_response_is_dropped() {
    let mut geo = GeoState::default();

    geo.begin_cities_fetch("SC");
    geo.begin_cities_fetch("SP");

    // The SC response lands after SP was selected.
    geo.finish_cities_fetch("SC", Ok(cities(&["Joinville"])));
    assert!(geo.cities.is_empty());
    assert!(geo.loading_cities);

    geo.finish_cities_fetch("SP", Ok(cities(&["Campinas"])));
    assert_eq!(geo.cities[0].name, "Campinas");
    assert!(!geo.loading_cities);
}

#[test]
fn failed_city_fetch_sets_error_and_stops_loading() {
    let mut geo = GeoState::default();
    geo.begin_cities_fetch("SC");
    geo.finish_cities_fetch("SC", Err("cities request failed: 502".to_owned()));
    assert!(!geo.loading_cities);
    assert_eq!(geo.error.as_deref(), Some("cities request failed: 502"));
}
