// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Durable user preferences of the import workflow.

use std::collections::BTreeMap;

use klug_core::{ImportCursor, ImportMode, ImportSettings};
use thiserror::Error;

mod file;
pub use self::file::FilePreferenceStore;

pub const USER_ID_KEY: &str = "klug.import_user_id";

pub const MODE_KEY: &str = "klug.import_mode";

pub const DRY_RUN_KEY: &str = "klug.import_dry_run";

pub const RESUME_KEY: &str = "klug.import_resume";

/// The last known cursor as JSON text.
pub const LAST_CURSOR_KEY: &str = "klug.import_last_cursor";

#[derive(Debug, Error)]
pub enum PreferenceStoreError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Serialize(#[from] ron::Error),

    #[error(transparent)]
    Deserialize(#[from] ron::error::SpannedError),
}

/// String key/value storage scoped to a single profile.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: String) -> Result<(), PreferenceStoreError>;
}

/// Volatile storage without persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    entries: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), PreferenceStoreError> {
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }
}

/// Restore the import settings.
///
/// Missing or unrecognized values fall back to their defaults. Resuming
/// is enabled unless it has been disabled explicitly.
#[must_use]
pub fn restore_settings(store: &impl PreferenceStore) -> ImportSettings {
    let user_id = store.get(USER_ID_KEY).unwrap_or_default();
    let mode = store
        .get(MODE_KEY)
        .and_then(|mode| mode.parse::<ImportMode>().ok())
        .unwrap_or_default();
    let dry_run = store.get(DRY_RUN_KEY).as_deref() == Some("true");
    let resume_from_latest = store.get(RESUME_KEY).as_deref() != Some("false");
    ImportSettings {
        user_id,
        mode,
        dry_run,
        resume_from_latest,
    }
}

pub fn save_settings(
    store: &mut impl PreferenceStore,
    settings: &ImportSettings,
) -> Result<(), PreferenceStoreError> {
    let ImportSettings {
        user_id,
        mode,
        dry_run,
        resume_from_latest,
    } = settings;
    store.set(USER_ID_KEY, user_id.trim().to_owned())?;
    store.set(MODE_KEY, mode.as_str().to_owned())?;
    store.set(DRY_RUN_KEY, dry_run.to_string())?;
    store.set(RESUME_KEY, resume_from_latest.to_string())?;
    log::info!("Saved import settings");
    Ok(())
}

#[must_use]
pub fn restore_last_cursor(store: &impl PreferenceStore) -> Option<ImportCursor> {
    let json = store.get(LAST_CURSOR_KEY)?;
    let cursor = ImportCursor::from_json_str(&json);
    if cursor.is_none() {
        log::warn!("Ignoring invalid last cursor: {json}");
    }
    cursor
}

pub fn save_last_cursor(
    store: &mut impl PreferenceStore,
    cursor: &ImportCursor,
) -> Result<(), PreferenceStoreError> {
    store.set(LAST_CURSOR_KEY, cursor.to_json_string())?;
    log::info!("Saved last cursor");
    Ok(())
}
