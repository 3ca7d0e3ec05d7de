//! SQLite row store for the investor collection.
//!
//! The database lives at `~/.fundpipe/investors.db` and mirrors the JSON
//! cache into one queryable table. Either side can rebuild the other; the
//! row shape is ported from the remote row store the browser app synced to
//! (snake_case columns, activities embedded as JSON).

use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::CrmError;
use crate::store::{InvestorStore, Listener, StoreEvent};
use crate::types::{Activity, Investor};

/// Serialize a tag enum to its wire string ("crypto-vc", "term-sheet", ...).
fn to_tag<T: Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(s)) => s,
        _ => String::new(),
    }
}

/// Parse a tag enum from its wire string. Tags this build does not know land
/// in the enum's catch-all variant, which carries the raw string so a later
/// write puts the same tag back.
fn from_tag<T: DeserializeOwned + Default>(tag: String) -> T {
    serde_json::from_value(serde_json::Value::String(tag)).unwrap_or_default()
}

/// SQLite connection wrapper implementing the persistence port.
///
/// Intentionally not `Clone`. Hold it behind a `Mutex` (or give it to one
/// owner) when sharing across threads.
pub struct SqliteStore {
    conn: Connection,
    listeners: Mutex<Vec<Listener>>,
}

impl SqliteStore {
    /// Open (or create) the database at `~/.fundpipe/investors.db` and apply
    /// the schema.
    pub fn open() -> Result<Self, CrmError> {
        let path = Self::db_path()?;
        Self::open_at(path)
    }

    /// Open a database at an explicit path. Useful for testing.
    pub fn open_at(path: impl AsRef<Path>) -> Result<Self, CrmError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)
                    .map_err(|_| CrmError::CreateDir(parent.to_path_buf()))?;
            }
        }

        let conn = Connection::open(path)?;

        // WAL for better concurrent read behavior; schema is idempotent.
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        conn.execute_batch(include_str!("schema.sql"))?;

        Ok(SqliteStore {
            conn,
            listeners: Mutex::new(Vec::new()),
        })
    }

    fn db_path() -> Result<PathBuf, CrmError> {
        let home = dirs::home_dir().ok_or(CrmError::HomeDirNotFound)?;
        Ok(home.join(".fundpipe").join("investors.db"))
    }

    fn notify(&self, event: StoreEvent) {
        for listener in self.listeners.lock().iter() {
            listener(&event);
        }
    }

    fn insert_row(&self, investor: &Investor) -> Result<(), CrmError> {
        let activities = serde_json::to_string(&investor.activities)?;
        self.conn.execute(
            "INSERT OR REPLACE INTO investors
               (id, name, company, email, type, stage, priority, pitch_angle,
                commitment, notes, next_action, last_contact, source, website,
                twitter, location, focus, aum, activities)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13,
                     ?14, ?15, ?16, ?17, ?18, ?19)",
            params![
                investor.id as i64,
                investor.name,
                investor.company,
                investor.email,
                to_tag(&investor.investor_type),
                to_tag(&investor.stage),
                to_tag(&investor.priority),
                to_tag(&investor.pitch_angle),
                investor.commitment as i64,
                investor.notes,
                investor.next_action,
                investor.last_contact,
                investor.source,
                investor.website,
                investor.twitter,
                investor.location,
                investor.focus,
                investor.aum,
                activities,
            ],
        )?;
        Ok(())
    }
}

impl InvestorStore for SqliteStore {
    fn load(&self) -> Result<Vec<Investor>, CrmError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, company, email, type, stage, priority, pitch_angle,
                    commitment, notes, next_action, last_contact, source, website,
                    twitter, location, focus, aum, activities
             FROM investors
             ORDER BY name",
        )?;

        let rows = stmt.query_map([], |row| {
            let activities_json: String = row.get(18)?;
            let activities: Vec<Activity> =
                serde_json::from_str(&activities_json).unwrap_or_default();
            Ok(Investor {
                id: row.get::<_, i64>(0)? as u64,
                name: row.get(1)?,
                company: row.get(2)?,
                email: row.get(3)?,
                investor_type: from_tag(row.get::<_, String>(4)?),
                stage: from_tag(row.get::<_, String>(5)?),
                priority: from_tag(row.get::<_, String>(6)?),
                pitch_angle: from_tag(row.get::<_, String>(7)?),
                commitment: row.get::<_, i64>(8)?.max(0) as u64,
                notes: row.get(9)?,
                next_action: row.get(10)?,
                last_contact: row.get(11)?,
                source: row.get(12)?,
                website: row.get(13)?,
                twitter: row.get(14)?,
                location: row.get(15)?,
                focus: row.get(16)?,
                aum: row.get(17)?,
                activities,
            })
        })?;

        let mut investors = Vec::new();
        for row in rows {
            investors.push(row?);
        }
        Ok(investors)
    }

    fn save_all(&self, investors: &[Investor]) -> Result<(), CrmError> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM investors", [])?;
        // insert_row goes through the same connection, so the rows land
        // inside this transaction.
        for investor in investors {
            self.insert_row(investor)?;
        }
        tx.commit()?;
        self.notify(StoreEvent::Replaced(investors.len()));
        Ok(())
    }

    fn upsert(&self, investor: &Investor) -> Result<(), CrmError> {
        self.insert_row(investor)?;
        self.notify(StoreEvent::Upserted(investor.id));
        Ok(())
    }

    fn delete(&self, id: u64) -> Result<(), CrmError> {
        self.conn
            .execute("DELETE FROM investors WHERE id = ?1", params![id as i64])?;
        self.notify(StoreEvent::Deleted(id));
        Ok(())
    }

    fn subscribe(&self, listener: Listener) {
        self.listeners.lock().push(listener);
    }
}
