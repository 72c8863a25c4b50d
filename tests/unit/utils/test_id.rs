use cloudplugs_client::utils::id::get_id;

#[test]
fn test_get_id_length() {
    assert_eq!(get_id().len(), 24);
}

#[test]
fn test_get_id_contains_valid_chars() {
    let id = get_id();
    for c in id.chars() {
        assert!(c.is_ascii_hexdigit() && !c.is_ascii_uppercase(), "Invalid character: {}", c);
    }
}

#[test]
fn test_get_id_uniqueness() {
    let id1 = get_id();
    let id2 = get_id();
    assert_ne!(id1, id2);
}
