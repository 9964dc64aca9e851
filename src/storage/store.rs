//! The config/instruction store
//!
//! One JSON record at a fixed path holds everything the bot persists:
//! credentials, the support-chat id, the admin password, the thank-you text
//! and the instruction payload. Every accessor loads the whole record and
//! every setter is a read-modify-write of the whole record; there is no
//! caching and no concurrency control (single-admin, low write rate).

use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to serialize config record: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write config store: {0}")]
    Write(#[source] std::io::Error),
}

/// The distributable instruction payload. Either field may be absent
/// independently; the instruction is available to users as soon as one of
/// them is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    pub file_id: Option<String>,
    pub text: Option<String>,
}

impl Instruction {
    pub fn is_available(&self) -> bool {
        self.file_id.is_some() || self.text.is_some()
    }
}

/// The persisted configuration record. Loaded and saved as one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigRecord {
    pub bot_token: String,
    /// Support-group chat id; 0 means "not configured".
    pub support_chat: i64,
    pub admin_password: String,
    pub thanks_message: String,
    pub instruction: Instruction,
}

impl Default for ConfigRecord {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            support_chat: 0,
            admin_password: "changeme".to_string(),
            thanks_message: "Благодарим вас за покупку! Мы всегда на связи, если появятся вопросы.".to_string(),
            instruction: Instruction::default(),
        }
    }
}

/// Handle to the JSON store on disk.
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the record from disk. A missing store is seeded with defaults
    /// (the defaults are written out so the operator has a file to edit);
    /// an unreadable or corrupt store falls back to defaults WITHOUT
    /// touching the bad file.
    pub fn load(&self) -> ConfigRecord {
        if !self.path.exists() {
            let record = ConfigRecord::default();
            if let Err(e) = self.save(&record) {
                log::warn!("Failed to seed config store at {}: {}", self.path.display(), e);
            }
            return record;
        }

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("Failed to read config store at {}: {}", self.path.display(), e);
                return ConfigRecord::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(record) => record,
            Err(e) => {
                log::warn!(
                    "Config store at {} is corrupt ({}); using defaults without overwriting it",
                    self.path.display(),
                    e
                );
                ConfigRecord::default()
            }
        }
    }

    /// Persists the whole record. Last writer wins.
    pub fn save(&self, record: &ConfigRecord) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(record).map_err(StoreError::Serialize)?;
        fs::write(&self.path, raw).map_err(StoreError::Write)
    }

    pub fn bot_token(&self) -> String {
        self.load().bot_token
    }

    pub fn support_chat(&self) -> i64 {
        self.load().support_chat
    }

    pub fn set_support_chat(&self, chat_id: i64) -> Result<(), StoreError> {
        let mut record = self.load();
        record.support_chat = chat_id;
        self.save(&record)
    }

    pub fn admin_password(&self) -> String {
        self.load().admin_password
    }

    pub fn thanks_message(&self) -> String {
        self.load().thanks_message
    }

    pub fn instruction(&self) -> Instruction {
        self.load().instruction
    }

    /// Partial update of the instruction payload: only the fields given as
    /// `Some` are replaced, the other one keeps its stored value.
    pub fn update_instruction(&self, file_id: Option<String>, text: Option<String>) -> Result<(), StoreError> {
        let mut record = self.load();
        if let Some(file_id) = file_id {
            record.instruction.file_id = Some(file_id);
        }
        if let Some(text) = text {
            record.instruction.text = Some(text);
        }
        self.save(&record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> ConfigStore {
        ConfigStore::new(dir.path().join("data.json"))
    }

    #[test]
    fn load_on_missing_store_seeds_defaults() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let record = store.load();

        assert_eq!(record, ConfigRecord::default());
        assert!(store.path().exists(), "first load should write the default record");
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let record = ConfigRecord {
            bot_token: "123:ABC".to_string(),
            support_chat: -100555,
            admin_password: "s3cret".to_string(),
            thanks_message: "спасибо".to_string(),
            instruction: Instruction {
                file_id: Some("FILE1".to_string()),
                text: Some("Hello".to_string()),
            },
        };

        store.save(&record).unwrap();
        assert_eq!(store.load(), record);
    }

    #[test]
    fn corrupt_store_falls_back_to_defaults_without_overwriting() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "{not json").unwrap();

        let record = store.load();

        assert_eq!(record, ConfigRecord::default());
        let on_disk = fs::read_to_string(store.path()).unwrap();
        assert_eq!(on_disk, "{not json", "corrupt file must be left in place");
    }

    #[test]
    fn instruction_fields_update_independently() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.update_instruction(Some("ABC123".to_string()), None).unwrap();
        assert_eq!(
            store.instruction(),
            Instruction {
                file_id: Some("ABC123".to_string()),
                text: None,
            }
        );

        store.update_instruction(None, Some("Hello".to_string())).unwrap();
        assert_eq!(
            store.instruction(),
            Instruction {
                file_id: Some("ABC123".to_string()),
                text: Some("Hello".to_string()),
            }
        );

        // Re-uploading the file keeps the text untouched.
        store.update_instruction(Some("DEF456".to_string()), None).unwrap();
        assert_eq!(
            store.instruction(),
            Instruction {
                file_id: Some("DEF456".to_string()),
                text: Some("Hello".to_string()),
            }
        );
    }

    #[test]
    fn empty_store_has_no_instruction() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let instruction = store.instruction();
        assert_eq!(instruction, Instruction { file_id: None, text: None });
        assert!(!instruction.is_available());
    }

    #[test]
    fn set_support_chat_persists() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.support_chat(), 0);
        store.set_support_chat(-100555).unwrap();
        assert_eq!(store.support_chat(), -100555);
    }

    #[test]
    fn unknown_keys_do_not_break_deserialization() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"{"bot_token": "t", "support_chat": 7, "legacy_field": true}"#,
        )
        .unwrap();

        let record = store.load();
        assert_eq!(record.bot_token, "t");
        assert_eq!(record.support_chat, 7);
        assert_eq!(record.admin_password, ConfigRecord::default().admin_password);
    }
}
