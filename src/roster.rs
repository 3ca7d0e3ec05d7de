//! In-memory investor collection and its lifecycle operations.
//!
//! The roster owns the `Vec<Investor>`; the scoring functions only borrow
//! it. Single-threaded by design: callers wire persistence and rendering
//! around it, and nothing here locks.

use chrono::{DateTime, Utc};

use crate::classify::{investor_from_raw, RawContact};
use crate::playbook::PitchAngle;
use crate::types::{Activity, Investor, InvestorType, Priority, Stage};

/// Add-form payload for a manually created record.
#[derive(Debug, Clone)]
pub struct NewInvestor {
    pub name: String,
    pub company: String,
    pub email: Option<String>,
    pub investor_type: InvestorType,
    pub stage: Stage,
    pub priority: Priority,
    pub pitch_angle: PitchAngle,
    pub notes: String,
}

/// The tracked collection.
#[derive(Debug, Default)]
pub struct Roster {
    investors: Vec<Investor>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hydrate from a persisted collection.
    pub fn from_records(investors: Vec<Investor>) -> Self {
        Roster { investors }
    }

    pub fn records(&self) -> &[Investor] {
        &self.investors
    }

    pub fn into_records(self) -> Vec<Investor> {
        self.investors
    }

    pub fn len(&self) -> usize {
        self.investors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.investors.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Investor> {
        self.investors.iter().find(|i| i.id == id)
    }

    /// Next id: `max(existing) + 1`. Monotonic within this roster; callers
    /// must not hand out ids from two rosters over the same data.
    fn next_id(&self) -> u64 {
        self.investors.iter().map(|i| i.id).max().unwrap_or(0) + 1
    }

    /// Create a record from the add form. Assigns the id, zeroes the
    /// engagement fields, and tags the source as "manual".
    pub fn add(&mut self, form: NewInvestor) -> u64 {
        let id = self.next_id();
        self.investors.push(Investor {
            id,
            name: form.name,
            company: form.company,
            email: form.email,
            investor_type: form.investor_type,
            stage: form.stage,
            priority: form.priority,
            pitch_angle: form.pitch_angle,
            commitment: 0,
            notes: form.notes,
            next_action: String::new(),
            last_contact: None,
            source: "manual".to_string(),
            website: String::new(),
            twitter: String::new(),
            location: String::new(),
            focus: String::new(),
            aum: String::new(),
            activities: Vec::new(),
        });
        id
    }

    /// Bulk import: replace the whole collection with full records.
    pub fn replace_all(&mut self, investors: Vec<Investor>) {
        self.investors = investors;
    }

    /// Bulk import from raw rows: classify each row and replace the
    /// collection. Ids are assigned sequentially from 1.
    pub fn import_raw(&mut self, rows: &[RawContact]) {
        self.investors = rows
            .iter()
            .enumerate()
            .map(|(idx, row)| investor_from_raw(row, idx as u64 + 1))
            .collect();
    }

    /// Edit a record in place. Returns false when the id is unknown.
    pub fn update(&mut self, id: u64, f: impl FnOnce(&mut Investor)) -> bool {
        match self.investors.iter_mut().find(|i| i.id == id) {
            Some(investor) => {
                f(investor);
                true
            }
            None => false,
        }
    }

    /// Append an activity and stamp `last_contact` with the activity time.
    /// Activities are append-only; there is no edit or delete.
    pub fn log_activity(&mut self, id: u64, kind: &str, note: &str, now: DateTime<Utc>) -> bool {
        let stamp = now.to_rfc3339();
        self.update(id, |investor| {
            investor.activities.push(Activity {
                kind: kind.to_string(),
                date: stamp.clone(),
                note: note.to_string(),
            });
            investor.last_contact = Some(stamp.clone());
        })
    }

    /// Bulk stage reassignment. Returns how many records moved.
    pub fn set_stage(&mut self, ids: &[u64], stage: Stage) -> usize {
        let mut moved = 0;
        for investor in &mut self.investors {
            if ids.contains(&investor.id) {
                investor.stage = stage.clone();
                moved += 1;
            }
        }
        moved
    }

    /// Delete by id. Returns the removed record so callers can mirror the
    /// delete to the store.
    pub fn remove(&mut self, id: u64) -> Option<Investor> {
        let idx = self.investors.iter().position(|i| i.id == id)?;
        Some(self.investors.remove(idx))
    }
}
