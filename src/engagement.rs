//! Engagement scoring and outreach urgency.
//!
//! Both functions are pure: `now` is an explicit parameter so two calls with
//! the same inputs always agree, and tests can freeze time instead of racing
//! day boundaries.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::{Investor, Priority, Stage};
use crate::util::days_since;

const URGENT_COLOR: &str = "#EF4444";
const WARM_COLOR: &str = "#F59E0B";
const OK_COLOR: &str = "#10B981";

/// Additive 0-100 heuristic indicating how engaged a record is.
///
/// Stage base + contact recency + priority + activity volume + commitment,
/// clamped to [0, 100]. Derived on every read, never stored.
pub fn engagement_score(investor: &Investor, now: DateTime<Utc>) -> u8 {
    let mut score: i32 = match investor.stage {
        Stage::Committed => 100,
        Stage::TermSheet => 80,
        Stage::InDiligence => 60,
        Stage::MeetingScheduled => 40,
        Stage::Contacted => 20,
        Stage::OutreachReady => 10,
        Stage::Researching => 5,
        Stage::Identified | Stage::Passed | Stage::Unknown(_) => 0,
    };

    if let Some(days) = days_since(now, investor.last_contact.as_deref()) {
        if days < 7.0 {
            score += 30;
        } else if days < 14.0 {
            score += 20;
        } else if days < 30.0 {
            score += 10;
        } else {
            score -= 10;
        }
    }

    match investor.priority {
        Priority::High => score += 15,
        Priority::Medium => score += 5,
        _ => {}
    }

    score += (investor.activities.len() as i32 * 5).min(25);

    if investor.commitment > 0 {
        score += 20;
    }

    score.clamp(0, 100) as u8
}

/// How overdue outreach is for a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Now,
    Soon,
    Ok,
}

/// Urgency tag with display label and color. `None` for closed records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Urgency {
    pub level: UrgencyLevel,
    pub label: String,
    pub color: &'static str,
}

impl Urgency {
    fn new(level: UrgencyLevel, label: impl Into<String>, color: &'static str) -> Self {
        Urgency {
            level,
            label: label.into(),
            color,
        }
    }
}

/// Classify whether outreach is due. First applicable branch wins.
///
/// Returns `None` exactly when the record is closed (committed or passed).
/// Day counts in labels are rounded half-away-from-zero from the fractional
/// day difference.
pub fn outreach_urgency(investor: &Investor, now: DateTime<Utc>) -> Option<Urgency> {
    if investor.stage.is_closed() {
        return None;
    }

    let days = match days_since(now, investor.last_contact.as_deref()) {
        Some(d) => d,
        None => {
            if investor.stage == Stage::OutreachReady || investor.priority == Priority::High {
                return Some(Urgency::new(UrgencyLevel::Now, "Ready to contact", URGENT_COLOR));
            }
            return Some(Urgency::new(
                UrgencyLevel::Soon,
                "Needs research first",
                WARM_COLOR,
            ));
        }
    };
    let rounded = days.round() as i64;

    if matches!(investor.stage, Stage::MeetingScheduled | Stage::InDiligence) {
        if days > 7.0 {
            return Some(Urgency::new(
                UrgencyLevel::Now,
                format!("{}d since last touch — follow up", rounded),
                URGENT_COLOR,
            ));
        }
        return Some(Urgency::new(UrgencyLevel::Ok, "Active engagement", OK_COLOR));
    }

    if days > 21.0 {
        Some(Urgency::new(
            UrgencyLevel::Now,
            format!("{}d cold — re-engage", rounded),
            URGENT_COLOR,
        ))
    } else if days > 14.0 {
        Some(Urgency::new(
            UrgencyLevel::Soon,
            format!("{}d — warming needed", rounded),
            WARM_COLOR,
        ))
    } else {
        Some(Urgency::new(
            UrgencyLevel::Ok,
            format!("{}d — on track", rounded),
            OK_COLOR,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 24, 12, 0, 0).unwrap()
    }

    fn days_ago(days: i64) -> String {
        (now() - Duration::days(days)).to_rfc3339()
    }

    fn investor(stage: Stage, priority: Priority, last_contact: Option<String>) -> Investor {
        Investor {
            id: 1,
            name: "Test Fund".to_string(),
            company: String::new(),
            email: None,
            investor_type: crate::types::InvestorType::CryptoVc,
            stage,
            priority,
            pitch_angle: Default::default(),
            commitment: 0,
            notes: String::new(),
            next_action: String::new(),
            last_contact,
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
    fn hot_term_sheet_clamps_to_100() {
        // 80 stage + 30 recency + 15 priority = 125, clamped.
        let inv = investor(Stage::TermSheet, Priority::High, Some(days_ago(2)));
        assert_eq!(engagement_score(&inv, now()), 100);
    }

    #[test]
    fn score_is_deterministic_for_frozen_now() {
        let inv = investor(Stage::Contacted, Priority::Medium, Some(days_ago(10)));
        assert_eq!(engagement_score(&inv, now()), engagement_score(&inv, now()));
    }

    #[test]
    fn stale_identified_record_floors_at_zero() {
        // 0 stage - 10 stale contact + 0 low priority, clamped at 0.
        let inv = investor(Stage::Identified, Priority::Low, Some(days_ago(45)));
        assert_eq!(engagement_score(&inv, now()), 0);
    }

    #[test]
    fn activity_volume_bonus_caps_at_25() {
        let mut inv = investor(Stage::Identified, Priority::Low, None);
        for _ in 0..8 {
            inv.activities.push(crate::types::Activity {
                kind: "call".to_string(),
                date: days_ago(1),
                note: String::new(),
            });
        }
        assert_eq!(engagement_score(&inv, now()), 25);
    }

    #[test]
    fn commitment_adds_twenty() {
        let mut inv = investor(Stage::Identified, Priority::Low, None);
        inv.commitment = 50_000;
        assert_eq!(engagement_score(&inv, now()), 20);
    }

    #[test]
    fn unrecognized_priority_scores_like_low() {
        let low = investor(Stage::Contacted, Priority::Low, None);
        let other = investor(
            Stage::Contacted,
            Priority::Other("urgent".to_string()),
            None,
        );
        assert_eq!(engagement_score(&low, now()), engagement_score(&other, now()));
    }

    #[test]
    fn malformed_last_contact_scores_like_absent() {
        let with_garbage = investor(
            Stage::Contacted,
            Priority::Medium,
            Some("not-a-date".to_string()),
        );
        let without = investor(Stage::Contacted, Priority::Medium, None);
        assert_eq!(
            engagement_score(&with_garbage, now()),
            engagement_score(&without, now())
        );
    }

    #[test]
    fn urgency_is_none_exactly_for_closed_stages() {
        for stage in Stage::ALL {
            let inv = investor(stage, Priority::High, Some(days_ago(30)));
            assert_eq!(
                outreach_urgency(&inv, now()).is_none(),
                inv.stage.is_closed()
            );
        }
    }

    #[test]
    fn uncontacted_low_priority_needs_research_first() {
        let inv = investor(Stage::Identified, Priority::Low, None);
        let u = outreach_urgency(&inv, now()).unwrap();
        assert_eq!(u.level, UrgencyLevel::Soon);
        assert_eq!(u.label, "Needs research first");
    }

    #[test]
    fn uncontacted_outreach_ready_is_ready_now() {
        let inv = investor(Stage::OutreachReady, Priority::Low, None);
        let u = outreach_urgency(&inv, now()).unwrap();
        assert_eq!(u.level, UrgencyLevel::Now);
        assert_eq!(u.label, "Ready to contact");

        let inv = investor(Stage::Identified, Priority::High, None);
        let u = outreach_urgency(&inv, now()).unwrap();
        assert_eq!(u.level, UrgencyLevel::Now);
    }

    #[test]
    fn cold_contacted_record_says_reengage() {
        let inv = investor(Stage::Contacted, Priority::Medium, Some(days_ago(25)));
        let u = outreach_urgency(&inv, now()).unwrap();
        assert_eq!(u.level, UrgencyLevel::Now);
        assert_eq!(u.label, "25d cold — re-engage");
    }

    #[test]
    fn warming_band_between_14_and_21_days() {
        let inv = investor(Stage::Contacted, Priority::Medium, Some(days_ago(17)));
        let u = outreach_urgency(&inv, now()).unwrap();
        assert_eq!(u.level, UrgencyLevel::Soon);
        assert_eq!(u.label, "17d — warming needed");
    }

    #[test]
    fn recent_contact_is_on_track() {
        let inv = investor(Stage::Contacted, Priority::Medium, Some(days_ago(4)));
        let u = outreach_urgency(&inv, now()).unwrap();
        assert_eq!(u.level, UrgencyLevel::Ok);
        assert_eq!(u.label, "4d — on track");
    }

    #[test]
    fn active_stages_use_the_seven_day_window() {
        let inv = investor(Stage::InDiligence, Priority::Medium, Some(days_ago(9)));
        let u = outreach_urgency(&inv, now()).unwrap();
        assert_eq!(u.level, UrgencyLevel::Now);
        assert_eq!(u.label, "9d since last touch — follow up");

        let inv = investor(Stage::MeetingScheduled, Priority::Medium, Some(days_ago(3)));
        let u = outreach_urgency(&inv, now()).unwrap();
        assert_eq!(u.level, UrgencyLevel::Ok);
        assert_eq!(u.label, "Active engagement");
    }
}
