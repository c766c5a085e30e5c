use crate::support::shared::resolve_test_database;

#[test]
fn missing_database_fails_unless_skipped() {
    let err = resolve_test_database(None, None).unwrap_err();
    assert!(err.to_string().contains("DECKBREW_SKIP_DB_TESTS"), "{err}");
    assert!(resolve_test_database(None, Some("0".into())).is_err());

    assert_eq!(resolve_test_database(None, Some("1".into())).unwrap(), None);
    assert_eq!(resolve_test_database(None, Some("TRUE".into())).unwrap(), None);
}

#[test]
fn configured_database_is_always_used() {
    let url = "postgres://localhost/deckbrew_test".to_string();
    assert_eq!(
        resolve_test_database(Some(url.clone()), Some("1".into())).unwrap(),
        Some(url)
    );
}
