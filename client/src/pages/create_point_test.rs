use super::*;

fn complete_state() -> RegistrationState {
    let mut registration = RegistrationState::default();
    registration.select_uf("SC".to_owned());
    registration.select_city("São Bento do Sul".to_owned());
    registration.select_position(-26.230_264, -49.406_802);
    registration.toggle_item(1);
    registration.toggle_item(6);
    registration
}

#[test]
fn failed_city_fetch_becomes_a_visible_notice() {
    let mut geo = GeoState::default();
    geo.begin_cities_fetch("SC");
    geo.finish_cities_fetch("SC", Err("cities request failed: 502".to_owned()));

    let notice = cities_failure_message(&geo).expect("failure must be surfaced");
    assert!(notice.starts_with("Não foi possível carregar as cidades"));
    assert!(notice.contains("cities request failed: 502"));
}

#[test]
fn no_city_notice_after_a_successful_fetch() {
    let mut geo = GeoState::default();
    geo.begin_cities_fetch("SC");
    geo.finish_cities_fetch(
        "SC",
        Ok(vec![shared::CityInfo { name: "Joinville".to_owned() }]),
    );
    assert_eq!(cities_failure_message(&geo), None);

    // Re-selecting a state clears any earlier failure.
    geo.error = Some("cities request failed: 502".to_owned());
    geo.begin_cities_fetch("SP");
    assert_eq!(cities_failure_message(&geo), None);
}

#[test]
fn build_submission_carries_current_form_values() {
    let payload = build_submission("  Mercado Central  ", "contato@mercado.example", "+55 47 99999-0000", &complete_state())
        .expect("complete form should build");

    assert_eq!(payload.name, "Mercado Central");
    assert_eq!(payload.email, "contato@mercado.example");
    assert_eq!(payload.uf, "SC");
    assert_eq!(payload.city, "São Bento do Sul");
    assert_eq!(payload.latitude, -26.230_264);
    assert_eq!(payload.longitude, -49.406_802);
    assert_eq!(payload.items, vec![1, 6]);
}

#[test]
fn build_submission_requires_a_name() {
    assert_eq!(
        build_submission("   ", "a@b.com", "47 9999", &complete_state()),
        Err("Informe o nome da entidade.")
    );
}

#[test]
fn build_submission_requires_a_plausible_email() {
    for email in ["", "sem-arroba", "@host", "user@"] {
        assert_eq!(
            build_submission("Mercado", email, "47 9999", &complete_state()),
            Err("Informe um e-mail válido."),
            "email {email:?} should be rejected"
        );
    }
}

#[test]
fn build_submission_requires_a_map_position() {
    let mut registration = complete_state();
    registration.position = None;
    assert_eq!(
        build_submission("Mercado", "a@b.com", "47 9999", &registration),
        Err("Selecione o endereço no mapa.")
    );
}

#[test]
fn build_submission_requires_state_city_and_items() {
    let mut registration = complete_state();
    registration.select_uf(String::new());
    assert_eq!(
        build_submission("Mercado", "a@b.com", "47 9999", &registration),
        Err("Selecione uma UF.")
    );

    let mut registration = complete_state();
    registration.city.clear();
    assert_eq!(
        build_submission("Mercado", "a@b.com", "47 9999", &registration),
        Err("Selecione uma cidade.")
    );

    let mut registration = complete_state();
    registration.selected_items.clear();
    assert_eq!(
        build_submission("Mercado", "a@b.com", "47 9999", &registration),
        Err("Selecione pelo menos um ítem de coleta.")
    );
}
