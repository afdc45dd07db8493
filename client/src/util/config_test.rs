use super::*;

#[test]
fn normalize_base_url_strips_trailing_slashes() {
    assert_eq!(normalize_base_url("http://fleet.local:8000/"), "http://fleet.local:8000");
    assert_eq!(normalize_base_url("http://fleet.local//"), "http://fleet.local");
}

#[test]
fn normalize_base_url_keeps_same_origin_empty() {
    assert_eq!(normalize_base_url(""), "");
    assert_eq!(normalize_base_url("  "), "");
}
