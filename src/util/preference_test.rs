use super::*;

#[test]
fn memory_store_reads_back_writes() {
    let store = MemoryStore::default();
    assert_eq!(store.get("theme"), Ok(None));
    store.set("theme", "light-theme").unwrap();
    assert_eq!(store.get("theme"), Ok(Some("light-theme".to_owned())));
    store.set("theme", "dark-theme").unwrap();
    assert_eq!(store.get("theme"), Ok(Some("dark-theme".to_owned())));
}

#[test]
fn unavailable_store_fails_reads_and_writes() {
    let store = MemoryStore::unavailable();
    assert_eq!(store.get("theme"), Err(PreferenceError::Unavailable));
    assert_eq!(store.set("theme", "x"), Err(PreferenceError::Unavailable));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_without_hydrate() {
    let store = BrowserStorage;
    assert_eq!(store.set("theme", "light-theme"), Ok(()));
    assert_eq!(store.get("theme"), Ok(None));
}

#[test]
fn error_messages_name_the_key() {
    let err = PreferenceError::Write { key: "theme".into(), reason: "quota".into() };
    assert_eq!(err.to_string(), "preference write failed for theme: quota");
}
