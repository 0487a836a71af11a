use super::*;

#[test]
fn parse_items_filter_splits_and_parses() {
    assert_eq!(parse_items_filter("1,2,6"), vec![1, 2, 6]);
}

#[test]
fn parse_items_filter_trims_whitespace() {
    assert_eq!(parse_items_filter(" 1 , 2 "), vec![1, 2]);
}

#[test]
fn parse_items_filter_skips_junk_entries() {
    assert_eq!(parse_items_filter("1,abc,,3"), vec![1, 3]);
    assert!(parse_items_filter("").is_empty());
}

#[test]
fn point_errors_map_to_expected_statuses() {
    assert_eq!(
        point_error_to_status(PointError::Invalid("name must not be empty")),
        StatusCode::UNPROCESSABLE_ENTITY
    );
    assert_eq!(point_error_to_status(PointError::UnknownItem(42)), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(point_error_to_status(PointError::NotFound(7)), StatusCode::NOT_FOUND);
}
