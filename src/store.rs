//! Persistence port and the JSON file cache store.
//!
//! The engine never touches storage; the surrounding application wires an
//! [`InvestorStore`] in and hands the loaded collection to the scoring
//! functions. Two implementations ship: this module's JSON file cache (the
//! successor of the browser localStorage blob) and the SQLite row store in
//! `db.rs`.

use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::CrmError;
use crate::types::Investor;
use crate::util::atomic_write_str;

/// Change notification emitted after a successful store mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Upserted(u64),
    Deleted(u64),
    /// The whole collection was replaced; carries the new record count.
    Replaced(usize),
}

pub type Listener = Box<dyn Fn(&StoreEvent) + Send + Sync>;

/// Persistence port for the investor collection.
pub trait InvestorStore {
    /// Load the full collection. An absent backing file/table is an empty
    /// collection, not an error.
    fn load(&self) -> Result<Vec<Investor>, CrmError>;

    /// Replace the persisted collection.
    fn save_all(&self, investors: &[Investor]) -> Result<(), CrmError>;

    /// Insert or update one record by id.
    fn upsert(&self, investor: &Investor) -> Result<(), CrmError>;

    /// Delete by id. Deleting an unknown id is a no-op, matching the remote
    /// row store this port was modeled on.
    fn delete(&self, id: u64) -> Result<(), CrmError>;

    /// Register a change listener. Listeners fire synchronously after each
    /// successful mutation.
    fn subscribe(&self, listener: Listener);
}

/// Versioned on-disk cache format.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CacheFile {
    #[serde(default = "default_version")]
    version: u32,
    investors: Vec<Investor>,
}

fn default_version() -> u32 {
    1
}

/// Local JSON cache: one file holding the whole collection.
///
/// Reads tolerate the legacy bare-array export; writes always produce the
/// versioned envelope, atomically.
pub struct JsonFileStore {
    path: PathBuf,
    listeners: Mutex<Vec<Listener>>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore {
            path: path.into(),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Default cache location: `~/.fundpipe/investors.json`.
    pub fn open_default() -> Result<Self, CrmError> {
        let home = dirs::home_dir().ok_or(CrmError::HomeDirNotFound)?;
        Ok(Self::new(home.join(".fundpipe").join("investors.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn notify(&self, event: StoreEvent) {
        for listener in self.listeners.lock().iter() {
            listener(&event);
        }
    }

    fn write(&self, investors: &[Investor]) -> Result<(), CrmError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)
                    .map_err(|_| CrmError::CreateDir(parent.to_path_buf()))?;
            }
        }
        let cache = CacheFile {
            version: 1,
            investors: investors.to_vec(),
        };
        let content = serde_json::to_string_pretty(&cache)?;
        atomic_write_str(&self.path, &content)?;
        Ok(())
    }
}

impl InvestorStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Investor>, CrmError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)?;

        // Fast path: versioned envelope. Legacy path: bare array, the shape
        // the browser localStorage export used.
        if let Ok(cache) = serde_json::from_str::<CacheFile>(&content) {
            return Ok(cache.investors);
        }
        let investors: Vec<Investor> = serde_json::from_str(&content)?;
        log::info!(
            "Loaded legacy bare-array cache from {} ({} records)",
            self.path.display(),
            investors.len()
        );
        Ok(investors)
    }

    fn save_all(&self, investors: &[Investor]) -> Result<(), CrmError> {
        self.write(investors)?;
        self.notify(StoreEvent::Replaced(investors.len()));
        Ok(())
    }

    fn upsert(&self, investor: &Investor) -> Result<(), CrmError> {
        let mut investors = self.load()?;
        match investors.iter_mut().find(|i| i.id == investor.id) {
            Some(existing) => *existing = investor.clone(),
            None => investors.push(investor.clone()),
        }
        self.write(&investors)?;
        self.notify(StoreEvent::Upserted(investor.id));
        Ok(())
    }

    fn delete(&self, id: u64) -> Result<(), CrmError> {
        let mut investors = self.load()?;
        investors.retain(|i| i.id != id);
        self.write(&investors)?;
        self.notify(StoreEvent::Deleted(id));
        Ok(())
    }

    fn subscribe(&self, listener: Listener) {
        self.listeners.lock().push(listener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{InvestorType, Priority, Stage};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn investor(id: u64, name: &str) -> Investor {
        Investor {
            id,
            name: name.to_string(),
            company: String::new(),
            email: None,
            investor_type: InvestorType::CryptoVc,
            stage: Stage::Contacted,
            priority: Priority::High,
            pitch_angle: Default::default(),
            commitment: 0,
            notes: String::new(),
            next_action: String::new(),
            last_contact: None,
            source: "manual".to_string(),
            website: String::new(),
            twitter: String::new(),
            location: String::new(),
            focus: String::new(),
            aum: String::new(),
            activities: Vec::new(),
        }
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("investors.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_all_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("investors.json"));
        let records = vec![investor(1, "A"), investor(2, "B")];
        store.save_all(&records).unwrap();
        assert_eq!(store.load().unwrap(), records);
    }

    #[test]
    fn upsert_inserts_then_updates() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("investors.json"));
        store.upsert(&investor(1, "A")).unwrap();
        store.upsert(&investor(1, "A renamed")).unwrap();
        store.upsert(&investor(2, "B")).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].name, "A renamed");
    }

    #[test]
    fn delete_is_noop_for_unknown_id() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("investors.json"));
        store.save_all(&[investor(1, "A")]).unwrap();
        store.delete(99).unwrap();
        store.delete(1).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn reads_legacy_bare_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("investors.json");
        let records = vec![investor(1, "A")];
        std::fs::write(&path, serde_json::to_string(&records).unwrap()).unwrap();

        let store = JsonFileStore::new(&path);
        assert_eq!(store.load().unwrap(), records);

        // A save upgrades the file to the versioned envelope.
        store.save_all(&records).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"version\""));
    }

    #[test]
    fn unknown_tags_survive_a_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("investors.json");
        std::fs::write(
            &path,
            r#"[{"id": 1, "name": "A", "stage": "negotiating",
                 "priority": "urgent", "pitchAngle": "custom-angle"}]"#,
        )
        .unwrap();

        let store = JsonFileStore::new(&path);
        let loaded = store.load().unwrap();
        assert_eq!(loaded[0].stage, Stage::Unknown("negotiating".to_string()));
        store.save_all(&loaded).unwrap();

        // The rewrite keeps tags this build does not know, instead of
        // collapsing them into known values.
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("negotiating"));
        assert!(content.contains("urgent"));
        assert!(content.contains("custom-angle"));
    }

    #[test]
    fn deleting_one_record_leaves_other_records_tags_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("investors.json");
        std::fs::write(
            &path,
            r#"[{"id": 1, "name": "A", "stage": "negotiating"},
                {"id": 2, "name": "B", "stage": "contacted"}]"#,
        )
        .unwrap();

        let store = JsonFileStore::new(&path);
        store.delete(2).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("negotiating"));
        assert_eq!(
            store.load().unwrap()[0].stage,
            Stage::Unknown("negotiating".to_string())
        );
    }

    #[test]
    fn listeners_fire_on_mutations() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("investors.json"));
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        store.subscribe(Box::new(move |event| {
            match event {
                StoreEvent::Upserted(1) | StoreEvent::Deleted(1) => {}
                StoreEvent::Replaced(n) => assert_eq!(*n, 1),
                other => panic!("unexpected event {:?}", other),
            }
            seen.fetch_add(1, Ordering::SeqCst);
        }));

        store.save_all(&[investor(1, "A")]).unwrap();
        store.upsert(&investor(1, "A")).unwrap();
        store.delete(1).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }
}
