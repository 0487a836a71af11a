use super::*;

#[test]
fn pool_size_defaults_when_unset() {
    assert_eq!(parse_max_connections(None), 5);
}

#[test]
fn pool_size_reads_a_valid_override() {
    assert_eq!(parse_max_connections(Some("12")), 12);
    assert_eq!(parse_max_connections(Some(" 12 ")), 12);
}

#[test]
fn pool_size_rejects_junk_and_zero() {
    assert_eq!(parse_max_connections(Some("many")), 5);
    assert_eq!(parse_max_connections(Some("")), 5);
    assert_eq!(parse_max_connections(Some("0")), 5);
    assert_eq!(parse_max_connections(Some("-3")), 5);
}
