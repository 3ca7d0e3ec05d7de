//! Weighted prioritizer: ranks open pipeline records and annotates each with
//! a score, the top reasons behind it, and one recommended next action.
//!
//! The weights here are independent of the engagement score in
//! `engagement.rs`; the two models answer different questions ("how engaged
//! is this record" vs "what should I work on next") and are tuned
//! separately.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::{Investor, InvestorType, Priority, Stage};
use crate::util::days_since;

/// How many records the prioritizer returns.
const MAX_RESULTS: usize = 10;
/// How many reasons survive truncation, in emission order.
const MAX_REASONS: usize = 3;

/// One prioritized record with scoring rationale.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrioritizedInvestor {
    #[serde(flatten)]
    pub investor: Investor,
    pub ai_score: i32,
    pub ai_reasons: Vec<String>,
    pub ai_action: String,
}

/// Score and rank the open records, descending, truncated to the top 10.
///
/// Committed and passed records are excluded before scoring. The sort is
/// stable, so ties keep their original relative order.
pub fn prioritize_investors(investors: &[Investor], now: DateTime<Utc>) -> Vec<PrioritizedInvestor> {
    let mut scored: Vec<PrioritizedInvestor> = investors
        .iter()
        .filter(|i| !i.stage.is_closed())
        .map(|i| score_investor(i, now))
        .collect();

    scored.sort_by(|a, b| b.ai_score.cmp(&a.ai_score));
    scored.truncate(MAX_RESULTS);
    scored
}

fn score_investor(investor: &Investor, now: DateTime<Utc>) -> PrioritizedInvestor {
    let mut score = 0;
    let mut reasons = Vec::new();

    // 1. Stage momentum: closer to close ranks higher.
    score += match investor.stage {
        Stage::TermSheet => 50,
        Stage::InDiligence => 40,
        Stage::MeetingScheduled => 35,
        Stage::Contacted => 25,
        Stage::OutreachReady => 20,
        Stage::Researching => 10,
        Stage::Identified => 5,
        _ => 0,
    };
    match investor.stage {
        Stage::TermSheet => reasons.push("Term sheet stage - close this".to_string()),
        Stage::InDiligence => reasons.push("In diligence - keep momentum".to_string()),
        Stage::MeetingScheduled => reasons.push("Meeting scheduled - prepare".to_string()),
        _ => {}
    }

    // 2. Type fit for the crypto/Web3 thesis.
    score += match investor.investor_type {
        InvestorType::CryptoVc => 25,
        InvestorType::InceptionFund => 22,
        InvestorType::ExchangeVc => 20,
        InvestorType::Angel => 18,
        InvestorType::CorporateVc => 15,
        InvestorType::FundOfFunds => 12,
        InvestorType::FamilyOffice => 10,
        InvestorType::Institutional => 8,
        InvestorType::TradFi => 5,
        _ => 0,
    };
    if matches!(
        investor.investor_type,
        InvestorType::CryptoVc | InvestorType::InceptionFund | InvestorType::ExchangeVc
    ) {
        reasons.push("Strong crypto/Web3 thesis fit".to_string());
    }

    // 3. Timing: mutually exclusive recency branches.
    match days_since(now, investor.last_contact.as_deref()) {
        Some(days) => {
            let rounded = days.round() as i64;
            if days > 21.0 && investor.stage != Stage::Identified {
                score += 20;
                reasons.push(format!("{} days cold - re-engage now", rounded));
            } else if days > 14.0 {
                score += 15;
                reasons.push(format!("{} days - follow up soon", rounded));
            } else if days < 3.0 {
                score += 10;
                reasons.push("Recently engaged - maintain momentum".to_string());
            }
        }
        None => {
            if investor.stage == Stage::OutreachReady {
                score += 18;
                reasons.push("Ready for first outreach".to_string());
            }
        }
    }

    // 4. Priority boost.
    match investor.priority {
        Priority::High => {
            score += 20;
            reasons.push("High priority target".to_string());
        }
        Priority::Medium => score += 8,
        _ => {}
    }

    // 5. Contactability. A missing email emits a reason but no points.
    if investor.has_email() {
        score += 10;
        reasons.push("Email available - can reach out".to_string());
    } else {
        reasons.push("Need to find contact info".to_string());
    }

    // 6. Existing relationship.
    if investor.commitment > 0 {
        score += 15;
        reasons.push(format!(
            "Already committed ${:.1}K",
            investor.commitment as f64 / 1000.0
        ));
    }

    // 7. Activity depth signals interest.
    if investor.activities.len() > 2 {
        score += 10;
        reasons.push("Active conversation history".to_string());
    }

    reasons.truncate(MAX_REASONS);

    PrioritizedInvestor {
        ai_action: recommend_action(investor, now),
        investor: investor.clone(),
        ai_score: score,
        ai_reasons: reasons,
    }
}

/// One recommended next step, independent of the score. Branches are
/// mutually exclusive and checked in priority order.
fn recommend_action(investor: &Investor, now: DateTime<Utc>) -> String {
    if !investor.has_email() {
        return "Find contact - try Apollo or LinkedIn".to_string();
    }
    match investor.stage {
        Stage::Identified | Stage::Researching => {
            "Research their portfolio - craft personalized intro".to_string()
        }
        Stage::OutreachReady => "Send intro email using pitch playbook".to_string(),
        // The follow-up threshold compares whole days, so a contact between
        // 7.0 and 7.5 days old still counts as 7 and keeps waiting.
        Stage::Contacted => match days_since(now, investor.last_contact.as_deref()) {
            Some(days) if days.round() as i64 > 7 => "Send follow-up email".to_string(),
            Some(_) => "Wait for response".to_string(),
            None => "Review and update status".to_string(),
        },
        Stage::MeetingScheduled => "Prepare deck & talking points".to_string(),
        Stage::InDiligence => "Respond to DD questions promptly".to_string(),
        Stage::TermSheet => "Review terms & close".to_string(),
        _ => "Review and update status".to_string(),
    }
}
