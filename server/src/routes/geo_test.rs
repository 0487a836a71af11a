use super::*;

#[test]
fn normalize_uf_uppercases_two_letter_codes() {
    assert_eq!(normalize_uf("sc"), Some("SC".to_owned()));
    assert_eq!(normalize_uf(" SP "), Some("SP".to_owned()));
}

#[test]
fn normalize_uf_rejects_wrong_lengths_and_digits() {
    assert_eq!(normalize_uf(""), None);
    assert_eq!(normalize_uf("S"), None);
    assert_eq!(normalize_uf("SCC"), None);
    assert_eq!(normalize_uf("S1"), None);
}

#[test]
fn geo_errors_map_to_bad_gateway() {
    assert_eq!(
        geo_error_to_status(GeoError::Upstream("503".to_owned())),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(
        geo_error_to_status(GeoError::Decode("unexpected body".to_owned())),
        StatusCode::BAD_GATEWAY
    );
}
