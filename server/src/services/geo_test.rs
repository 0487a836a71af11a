use super::*;

#[test]
fn states_from_ibge_sorts_by_name_and_keeps_sigla() {
    let raw: Vec<IbgeState> = serde_json::from_str(
        r#"[
            {"id": 42, "sigla": "SC", "nome": "Santa Catarina", "regiao": {"id": 4, "sigla": "S", "nome": "Sul"}},
            {"id": 12, "sigla": "AC", "nome": "Acre", "regiao": {"id": 1, "sigla": "N", "nome": "Norte"}},
            {"id": 29, "sigla": "BA", "nome": "Bahia", "regiao": {"id": 2, "sigla": "NE", "nome": "Nordeste"}}
        ]"#,
    )
    .expect("sample IBGE payload should parse");

    let states = states_from_ibge(raw);
    let names: Vec<&str> = states.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Acre", "Bahia", "Santa Catarina"]);
    assert_eq!(states[2].uf, "SC");
}

#[test]
fn cities_from_ibge_keeps_order_and_names() {
    let raw: Vec<IbgeCity> = serde_json::from_str(
        r#"[
            {"id": 4215802, "nome": "São Bento do Sul", "microrregiao": null},
            {"id": 4209102, "nome": "Joinville"}
        ]"#,
    )
    .expect("sample IBGE payload should parse");

    let cities = cities_from_ibge(raw);
    assert_eq!(cities.len(), 2);
    assert_eq!(cities[0].name, "São Bento do Sul");
    assert_eq!(cities[1].name, "Joinville");
}

#[tokio::test]
async fn cities_are_cached_per_uf() {
    let client = GeoClient::new("http://localhost:9/ibge");
    {
        let mut cache = client.cache.write().await;
        cache
            .cities
            .insert("SC".to_owned(), vec![CityInfo { name: "Joinville".to_owned() }]);
    }

    // Base URL points nowhere reachable, so a hit proves the cache answered.
    let cities = client.cities("SC").await.expect("cached UF should not hit upstream");
    assert_eq!(cities.len(), 1);
    assert!(client.cities("SP").await.is_err());
}

#[test]
fn new_trims_trailing_slash_from_base_url() {
    let client = GeoClient::new("https://example.test/localidades/");
    assert_eq!(client.base_url, "https://example.test/localidades");
}
