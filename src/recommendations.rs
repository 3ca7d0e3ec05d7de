//! Outreach recommendation buckets.
//!
//! Six named buckets, evaluated and emitted in a fixed order. A bucket that
//! matches nothing is omitted entirely, and every bucket truncates its
//! member list to ten records.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::{Investor, InvestorType, Priority, Stage};
use crate::util::{days_since, parse_timestamp};

const MAX_BUCKET_SIZE: usize = 10;

/// A named, capped group of investors sharing a recommendation rationale.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub category: &'static str,
    pub action: &'static str,
    pub investors: Vec<Investor>,
}

fn push_bucket(
    recs: &mut Vec<Recommendation>,
    category: &'static str,
    action: &'static str,
    mut investors: Vec<Investor>,
) {
    if investors.is_empty() {
        return;
    }
    investors.truncate(MAX_BUCKET_SIZE);
    recs.push(Recommendation {
        category,
        action,
        investors,
    });
}

/// Bucket the collection into category-labeled recommendation lists.
pub fn generate_recommendations(investors: &[Investor], now: DateTime<Utc>) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    // High priority, not yet contacted.
    let high_uncontacted: Vec<Investor> = investors
        .iter()
        .filter(|i| {
            i.priority == Priority::High
                && matches!(
                    i.stage,
                    Stage::Identified | Stage::Researching | Stage::OutreachReady
                )
        })
        .cloned()
        .collect();
    push_bucket(
        &mut recs,
        "High Priority — Not Yet Contacted",
        "These should be your first outreach targets",
        high_uncontacted,
    );

    // Stale conversations, coldest first.
    let mut stale: Vec<Investor> = investors
        .iter()
        .filter(|i| {
            if i.stage.is_closed() || i.stage == Stage::Identified {
                return false;
            }
            days_since(now, i.last_contact.as_deref()).is_some_and(|d| d > 14.0)
        })
        .cloned()
        .collect();
    stale.sort_by_key(|i| i.last_contact.as_deref().and_then(parse_timestamp));
    push_bucket(
        &mut recs,
        "Going Cold — Re-engage Now",
        "These conversations are cooling off",
        stale,
    );

    // Crypto VCs still at the research gate.
    let crypto_vcs: Vec<Investor> = investors
        .iter()
        .filter(|i| i.investor_type == InvestorType::CryptoVc && i.stage == Stage::Identified)
        .cloned()
        .collect();
    push_bucket(
        &mut recs,
        "Crypto VCs — Research & Outreach",
        "Check portfolio for Sui/MEV/DeFi infrastructure overlap, then warm intro",
        crypto_vcs,
    );

    // Institutional family, high priority, not yet closed.
    let institutional: Vec<Investor> = investors
        .iter()
        .filter(|i| {
            matches!(
                i.investor_type,
                InvestorType::Institutional
                    | InvestorType::PensionEndowment
                    | InvestorType::FundOfFunds
                    | InvestorType::TradFi
            ) && i.priority == Priority::High
                && i.stage != Stage::Committed
        })
        .cloned()
        .collect();
    push_bucket(
        &mut recs,
        "Institutional Targets — FT Pedigree Angle",
        "Lead with Franklin Templeton exit + institutional risk framework",
        institutional,
    );

    // Angels without a commitment amount.
    let angels_no_amount: Vec<Investor> = investors
        .iter()
        .filter(|i| {
            i.investor_type == InvestorType::Angel && i.commitment == 0 && i.stage != Stage::Passed
        })
        .cloned()
        .collect();
    push_bucket(
        &mut recs,
        "Angels — Close the Commitment",
        "These contacts need a specific ask and commitment confirmation",
        angels_no_amount,
    );

    // Inception funds still at the research gate.
    let inception_ready: Vec<Investor> = investors
        .iter()
        .filter(|i| i.investor_type == InvestorType::InceptionFund && i.stage == Stage::Identified)
        .cloned()
        .collect();
    push_bucket(
        &mut recs,
        "Inception Funds — First Check Writers",
        "These funds specialize in pre-seed. Research crypto thesis fit, then cold outreach",
        inception_ready,
    );

    recs
}
