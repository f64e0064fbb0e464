// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use super::{PreferenceStore, PreferenceStoreError};

const FILE_NAME: &str = "klug_preferences";

const FILE_SUFFIX: &str = "ron";

/// Preferences stored in a RON file within the profile directory.
///
/// The whole file is rewritten on every modification.
#[derive(Debug)]
pub struct FilePreferenceStore {
    file_path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FilePreferenceStore {
    /// Load the preferences of a profile.
    ///
    /// A missing file results in empty preferences.
    pub fn open(profile_dir: &Path) -> Result<Self, PreferenceStoreError> {
        let file_path = new_preferences_file_path(profile_dir.to_path_buf());
        log::info!("Loading preferences from file: {}", file_path.display());
        let entries = match fs::read_to_string(&file_path) {
            Ok(text) => ron::from_str(&text)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Default::default(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self { file_path, entries })
    }

    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn save(&self) -> Result<(), PreferenceStoreError> {
        log::debug!("Saving preferences into file: {}", self.file_path.display());
        let text = ron::ser::to_string_pretty(&self.entries, Default::default())?;
        if let Some(parent_path) = self.file_path.parent() {
            fs::create_dir_all(parent_path)?;
        }
        fs::write(&self.file_path, text)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), PreferenceStoreError> {
        if self.entries.get(key) == Some(&value) {
            return Ok(());
        }
        let previous = self.entries.insert(key.to_owned(), value);
        let result = self.save();
        if result.is_err() {
            // Keep the entries in sync with the file
            match previous {
                Some(previous) => self.entries.insert(key.to_owned(), previous),
                None => self.entries.remove(key),
            };
        }
        result
    }
}

#[must_use]
fn new_preferences_file_path(parent_dir: PathBuf) -> PathBuf {
    let mut path_buf = parent_dir;
    path_buf.push(FILE_NAME);
    path_buf.set_extension(FILE_SUFFIX);
    path_buf
}
