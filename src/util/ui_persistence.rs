//! Browser localStorage access for the remembered sign-in identifier.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sign-in form's "remember me" box keeps the identifier here as a plain
//! string. Reads and writes are hydrate-only and best-effort; SSR paths
//! no-op.

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

#[cfg(feature = "hydrate")]
const REMEMBERED_IDENTIFIER_KEY: &str = "aura_remembered_identifier";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn load_remembered_identifier() -> Option<String> {
    #[cfg(feature = "hydrate")]
    let raw = local_storage().and_then(|storage| storage.get_item(REMEMBERED_IDENTIFIER_KEY).ok().flatten());
    #[cfg(not(feature = "hydrate"))]
    let raw = None;
    normalize_identifier(raw)
}

/// Store `identifier` for the next visit, or forget it when `None` or blank.
pub fn store_remembered_identifier(identifier: Option<&str>) {
    let identifier = normalize_identifier(identifier.map(str::to_owned));
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let _ = match identifier {
            Some(identifier) => storage.set_item(REMEMBERED_IDENTIFIER_KEY, &identifier),
            None => storage.remove_item(REMEMBERED_IDENTIFIER_KEY),
        };
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = identifier;
    }
}

/// Trimmed identifier, or `None` when nothing usable is stored.
fn normalize_identifier(raw: Option<String>) -> Option<String> {
    raw.map(|identifier| identifier.trim().to_owned()).filter(|identifier| !identifier.is_empty())
}
