//! Theme initialization and toggle.
//!
//! Reads the persisted theme and applies its class to the `<html>` element.
//! Toggle flips the class and writes the new choice back. Requires a browser
//! environment for the class changes; SSR paths no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::theme::{STORAGE_KEY, Theme};
use crate::util::preference::{PreferenceError, PreferenceStore};

/// Read the stored theme. Absent or unrecognized values yield `None`.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn read_preference(store: &impl PreferenceStore) -> Result<Option<Theme>, PreferenceError> {
    Ok(store.get(STORAGE_KEY)?.as_deref().and_then(Theme::from_stored))
}

/// Put `theme`'s class on the `<html>` element and drop the other one.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let classes = root.class_list();
        let _ = classes.remove_1(theme.toggled().css_class());
        let _ = classes.add_1(theme.css_class());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist the new choice.
///
/// # Errors
///
/// Returns an error if the new choice cannot be persisted. The class change
/// has already been applied at that point.
pub fn toggle(current: Theme, store: &impl PreferenceStore) -> Result<Theme, PreferenceError> {
    let next = current.toggled();
    apply(next);
    store.set(STORAGE_KEY, next.as_stored())?;
    Ok(next)
}
