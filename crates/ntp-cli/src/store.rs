//! Named save slots kept together in one JSON file.

use std::path::Path;

use chrono::{DateTime, Utc};
use ntp_core::CharacterRecord;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One saved character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    pub name: String,
    pub saved_at: DateTime<Utc>,
    pub record: CharacterRecord,
}

/// Every saved slot, in save order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlotStore {
    pub slots: Vec<Slot>,
}

impl SlotStore {
    /// Read the store. A missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            debug!(path = %path.display(), "no slot store yet");
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        serde_json::from_str(&json)
            .map_err(|e| format!("invalid slot store {}: {e}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("cannot serialize slot store: {e}"))?;
        std::fs::write(path, json).map_err(|e| format!("cannot write {}: {e}", path.display()))
    }

    /// Store a record under `name`, replacing a slot with the same name.
    pub fn put(&mut self, name: &str, record: CharacterRecord, saved_at: DateTime<Utc>) {
        let slot = Slot {
            name: name.to_string(),
            saved_at,
            record,
        };
        match self.slots.iter_mut().find(|s| s.name == name) {
            Some(existing) => *existing = slot,
            None => self.slots.push(slot),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.name == name)
    }

    /// Returns false when no slot had that name.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.slots.len();
        self.slots.retain(|s| s.name != name);
        self.slots.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_replaces_same_name() {
        let mut store = SlotStore::default();
        store.put("a", CharacterRecord::new("One"), Utc::now());
        store.put("b", CharacterRecord::new("Two"), Utc::now());
        store.put("a", CharacterRecord::new("Three"), Utc::now());
        assert_eq!(store.slots.len(), 2);
        assert_eq!(store.get("a").unwrap().record.name, "Three");
        assert_eq!(store.slots[0].name, "a");
    }

    #[test]
    fn remove_reports_missing() {
        let mut store = SlotStore::default();
        store.put("a", CharacterRecord::new("One"), Utc::now());
        assert!(store.remove("a"));
        assert!(!store.remove("a"));
        assert!(store.get("a").is_none());
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = SlotStore::load(&dir.path().join("none.json")).unwrap();
        assert!(store.slots.is_empty());
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slots.json");
        let mut store = SlotStore::default();
        store.put("run", CharacterRecord::new("Ada"), Utc::now());
        store.save(&path).unwrap();

        let loaded = SlotStore::load(&path).unwrap();
        assert_eq!(loaded.get("run").unwrap().record, store.get("run").unwrap().record);
    }
}
