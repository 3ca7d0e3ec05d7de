//! Pipeline KPI rollup for the dashboard shell.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::engagement::{outreach_urgency, UrgencyLevel};
use crate::types::{Investor, Stage};

/// Headline numbers derived from the current collection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineSummary {
    /// Total tracked contacts.
    pub total: usize,
    /// Sum of committed dollars across committed records.
    pub committed_total: u64,
    /// Records actively worked: stage past identified and not closed.
    pub active: usize,
    /// Records whose outreach urgency is "now".
    pub needs_action: usize,
    /// Per-stage counts in pipeline order, including empty stages.
    pub by_stage: Vec<(Stage, usize)>,
}

pub fn pipeline_summary(investors: &[Investor], now: DateTime<Utc>) -> PipelineSummary {
    let committed_total = investors
        .iter()
        .filter(|i| i.stage == Stage::Committed)
        .map(|i| i.commitment)
        .sum();

    let active = investors
        .iter()
        .filter(|i| !i.stage.is_closed() && i.stage != Stage::Identified)
        .count();

    let needs_action = investors
        .iter()
        .filter(|i| {
            outreach_urgency(i, now).is_some_and(|u| u.level == UrgencyLevel::Now)
        })
        .count();

    let by_stage = Stage::ALL
        .into_iter()
        .map(|s| {
            let count = investors.iter().filter(|i| i.stage == s).count();
            (s, count)
        })
        .collect();

    PipelineSummary {
        total: investors.len(),
        committed_total,
        active,
        needs_action,
        by_stage,
    }
}
