//! fundpipe: single-tenant fundraising CRM engine.
//!
//! Tracks investor contacts through an outreach pipeline and derives, from
//! the in-memory collection alone: a 0-100 engagement score per record,
//! an outreach-urgency tag, a ranked top-10 target list with reasons, and
//! category-labeled recommendation buckets. All scoring is pure and takes
//! `now` as an explicit parameter; persistence sits behind the
//! [`store::InvestorStore`] port and never leaks into the engine.

// Serde envelope fields (e.g. the cache file version) appear unused to the
// compiler but are required for forward-compatible JSON deserialization.
#![allow(dead_code)]

pub mod classify;
pub mod db;
pub mod engagement;
mod error;
pub mod playbook;
pub mod prioritization;
pub mod recommendations;
pub mod roster;
pub mod store;
pub mod summary;
pub mod types;
pub mod util;

pub use error::CrmError;
