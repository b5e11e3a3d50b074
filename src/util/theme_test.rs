use super::*;
use crate::util::preference::MemoryStore;

#[test]
fn read_preference_absent_is_none() {
    assert_eq!(read_preference(&MemoryStore::default()), Ok(None));
}

#[test]
fn read_preference_parses_stored_value() {
    let store = MemoryStore::default();
    store.set(STORAGE_KEY, "light-theme").unwrap();
    assert_eq!(read_preference(&store), Ok(Some(Theme::Light)));
}

#[test]
fn read_preference_ignores_unknown_value() {
    let store = MemoryStore::default();
    store.set(STORAGE_KEY, "neon").unwrap();
    assert_eq!(read_preference(&store), Ok(None));
}

#[test]
fn toggle_persists_new_choice() {
    let store = MemoryStore::default();
    assert_eq!(toggle(Theme::Dark, &store), Ok(Theme::Light));
    assert_eq!(store.get(STORAGE_KEY), Ok(Some("light-theme".to_owned())));
    assert_eq!(toggle(Theme::Light, &store), Ok(Theme::Dark));
    assert_eq!(store.get(STORAGE_KEY), Ok(Some("dark-theme".to_owned())));
}

#[test]
fn toggle_twice_restores_stored_and_reloaded_state() {
    let store = MemoryStore::default();
    let once = toggle(Theme::Dark, &store).unwrap();
    let twice = toggle(once, &store).unwrap();
    assert_eq!(twice, Theme::Dark);
    assert_eq!(read_preference(&store), Ok(Some(Theme::Dark)));
}

#[test]
fn storage_failures_propagate() {
    let store = MemoryStore::unavailable();
    assert_eq!(read_preference(&store), Err(PreferenceError::Unavailable));
    assert_eq!(toggle(Theme::Dark, &store), Err(PreferenceError::Unavailable));
}

#[test]
fn apply_is_callable_without_browser() {
    apply(Theme::Light);
    apply(Theme::Dark);
}
