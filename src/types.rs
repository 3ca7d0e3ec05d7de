//! Domain model for the fundraising pipeline.
//!
//! `Investor` is the only domain entity. Engagement score and outreach
//! urgency are derived values and are never stored on the record; they are
//! recomputed from current fields on every read so they cannot drift.

use serde::{Deserialize, Serialize};

/// Pipeline position of an investor, ordered from first touch to close.
///
/// Unknown stage strings deserialize to [`Stage::Unknown`] instead of
/// failing: stale exports keep loading, the record just renders with a
/// default label and contributes no stage points. The catch-all carries the
/// original tag and serializes it back verbatim, so a load-save cycle never
/// rewrites a value this build does not recognize.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Stage {
    Identified,
    Researching,
    OutreachReady,
    Contacted,
    MeetingScheduled,
    InDiligence,
    TermSheet,
    Committed,
    Passed,
    Unknown(String),
}

impl From<String> for Stage {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "identified" => Stage::Identified,
            "researching" => Stage::Researching,
            "outreach-ready" => Stage::OutreachReady,
            "contacted" => Stage::Contacted,
            "meeting-scheduled" => Stage::MeetingScheduled,
            "in-diligence" => Stage::InDiligence,
            "term-sheet" => Stage::TermSheet,
            "committed" => Stage::Committed,
            "passed" => Stage::Passed,
            _ => Stage::Unknown(tag),
        }
    }
}

impl From<Stage> for String {
    fn from(stage: Stage) -> Self {
        match stage {
            Stage::Identified => "identified".to_string(),
            Stage::Researching => "researching".to_string(),
            Stage::OutreachReady => "outreach-ready".to_string(),
            Stage::Contacted => "contacted".to_string(),
            Stage::MeetingScheduled => "meeting-scheduled".to_string(),
            Stage::InDiligence => "in-diligence".to_string(),
            Stage::TermSheet => "term-sheet".to_string(),
            Stage::Committed => "committed".to_string(),
            Stage::Passed => "passed".to_string(),
            Stage::Unknown(tag) => tag,
        }
    }
}

impl Default for Stage {
    fn default() -> Self {
        Stage::Identified
    }
}

impl Stage {
    /// All known stages in pipeline order.
    pub const ALL: [Stage; 9] = [
        Stage::Identified,
        Stage::Researching,
        Stage::OutreachReady,
        Stage::Contacted,
        Stage::MeetingScheduled,
        Stage::InDiligence,
        Stage::TermSheet,
        Stage::Committed,
        Stage::Passed,
    ];

    /// Sort key within the pipeline. Unknown stages sort last.
    pub fn order(&self) -> u8 {
        match self {
            Stage::Identified => 0,
            Stage::Researching => 1,
            Stage::OutreachReady => 2,
            Stage::Contacted => 3,
            Stage::MeetingScheduled => 4,
            Stage::InDiligence => 5,
            Stage::TermSheet => 6,
            Stage::Committed => 7,
            Stage::Passed => 8,
            Stage::Unknown(_) => 9,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Stage::Identified => "Identified",
            Stage::Researching => "Researching",
            Stage::OutreachReady => "Outreach Ready",
            Stage::Contacted => "Contacted",
            Stage::MeetingScheduled => "Meeting Scheduled",
            Stage::InDiligence => "In Diligence",
            Stage::TermSheet => "Term Sheet",
            Stage::Committed => "Committed",
            Stage::Passed => "Passed",
            Stage::Unknown(_) => "Unknown",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Stage::Identified => "#94A3B8",
            Stage::Researching => "#A78BFA",
            Stage::OutreachReady => "#60A5FA",
            Stage::Contacted => "#FBBF24",
            Stage::MeetingScheduled => "#FB923C",
            Stage::InDiligence => "#F472B6",
            Stage::TermSheet => "#34D399",
            Stage::Committed => "#10B981",
            Stage::Passed => "#EF4444",
            Stage::Unknown(_) => "#94A3B8",
        }
    }

    /// Committed and passed records are closed: no outreach urgency, no
    /// prioritization.
    pub fn is_closed(&self) -> bool {
        matches!(self, Stage::Committed | Stage::Passed)
    }
}

/// Manual priority set on a record. Unknown strings behave as `Low` (no
/// boost anywhere) but keep their tag, so they round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    High,
    Medium,
    Low,
    Other(String),
}

impl From<String> for Priority {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "high" => Priority::High,
            "medium" => Priority::Medium,
            "low" => Priority::Low,
            _ => Priority::Other(tag),
        }
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::High => "high".to_string(),
            Priority::Medium => "medium".to_string(),
            Priority::Low => "low".to_string(),
            Priority::Other(tag) => tag,
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

/// Investor taxonomy. Assigned by the classifier on import. Unknown strings
/// display as `Other` and score nothing, but keep their tag through a
/// round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InvestorType {
    Angel,
    CryptoVc,
    Institutional,
    FundOfFunds,
    CorporateVc,
    InceptionFund,
    FamilyOffice,
    PensionEndowment,
    ExchangeVc,
    TradFi,
    Individual,
    Other,
    Unknown(String),
}

impl From<String> for InvestorType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "angel" => InvestorType::Angel,
            "crypto-vc" => InvestorType::CryptoVc,
            "institutional" => InvestorType::Institutional,
            "fund-of-funds" => InvestorType::FundOfFunds,
            "corporate-vc" => InvestorType::CorporateVc,
            "inception-fund" => InvestorType::InceptionFund,
            "family-office" => InvestorType::FamilyOffice,
            "pension-endowment" => InvestorType::PensionEndowment,
            "exchange-vc" => InvestorType::ExchangeVc,
            "tradfi" => InvestorType::TradFi,
            "individual" => InvestorType::Individual,
            "other" => InvestorType::Other,
            _ => InvestorType::Unknown(tag),
        }
    }
}

impl From<InvestorType> for String {
    fn from(investor_type: InvestorType) -> Self {
        match investor_type {
            InvestorType::Angel => "angel".to_string(),
            InvestorType::CryptoVc => "crypto-vc".to_string(),
            InvestorType::Institutional => "institutional".to_string(),
            InvestorType::FundOfFunds => "fund-of-funds".to_string(),
            InvestorType::CorporateVc => "corporate-vc".to_string(),
            InvestorType::InceptionFund => "inception-fund".to_string(),
            InvestorType::FamilyOffice => "family-office".to_string(),
            InvestorType::PensionEndowment => "pension-endowment".to_string(),
            InvestorType::ExchangeVc => "exchange-vc".to_string(),
            InvestorType::TradFi => "tradfi".to_string(),
            InvestorType::Individual => "individual".to_string(),
            InvestorType::Other => "other".to_string(),
            InvestorType::Unknown(tag) => tag,
        }
    }
}

impl Default for InvestorType {
    fn default() -> Self {
        InvestorType::Other
    }
}

impl InvestorType {
    pub fn label(&self) -> &'static str {
        match self {
            InvestorType::Angel => "Angel",
            InvestorType::CryptoVc => "Crypto/Web3 VC",
            InvestorType::Institutional => "Institutional / SWF",
            InvestorType::FundOfFunds => "Fund of Funds",
            InvestorType::CorporateVc => "Corporate VC",
            InvestorType::InceptionFund => "Inception Stage Fund",
            InvestorType::FamilyOffice => "Family Office",
            InvestorType::PensionEndowment => "Pension / Endowment",
            InvestorType::ExchangeVc => "Exchange VC",
            InvestorType::TradFi => "TradFi / Banks",
            InvestorType::Individual => "Individual",
            InvestorType::Other | InvestorType::Unknown(_) => "Other",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            InvestorType::Angel => "#10B981",
            InvestorType::CryptoVc => "#8B5CF6",
            InvestorType::Institutional => "#3B82F6",
            InvestorType::FundOfFunds => "#F59E0B",
            InvestorType::CorporateVc => "#EF4444",
            InvestorType::InceptionFund => "#EC4899",
            InvestorType::FamilyOffice => "#14B8A6",
            InvestorType::PensionEndowment => "#6366F1",
            InvestorType::ExchangeVc => "#F97316",
            InvestorType::TradFi => "#64748B",
            InvestorType::Individual => "#A3A3A3",
            InvestorType::Other | InvestorType::Unknown(_) => "#737373",
        }
    }
}

/// One logged touchpoint (call, email, meeting, note). Append-only: there is
/// no edit or delete operation, insertion order is chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: String,
    pub date: String,
    #[serde(default)]
    pub note: String,
}

/// One tracked contact in the fundraising pipeline.
///
/// Timestamps (`last_contact`, `Activity::date`) are RFC 3339 strings, the
/// same shape the browser-era export wrote. Parsing is permissive: a value
/// that does not parse behaves as if it were absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investor {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "type", default)]
    pub investor_type: InvestorType,
    #[serde(default)]
    pub stage: Stage,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub pitch_angle: crate::playbook::PitchAngle,
    /// Committed amount in whole dollars.
    #[serde(default)]
    pub commitment: u64,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub next_action: String,
    #[serde(default)]
    pub last_contact: Option<String>,
    /// Free-text origin tag, e.g. "manual", "angel-list".
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub focus: String,
    #[serde(default)]
    pub aum: String,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

impl Investor {
    /// True when the record has a usable email address. An empty string
    /// counts as missing, matching the original truthiness check.
    pub fn has_email(&self) -> bool {
        self.email.as_deref().is_some_and(|e| !e.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_round_trips_kebab_case() {
        let json = serde_json::to_string(&Stage::OutreachReady).unwrap();
        assert_eq!(json, "\"outreach-ready\"");
        let back: Stage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Stage::OutreachReady);
    }

    #[test]
    fn unknown_stage_degrades_but_round_trips_verbatim() {
        let stage: Stage = serde_json::from_str("\"negotiating\"").unwrap();
        assert_eq!(stage, Stage::Unknown("negotiating".to_string()));
        assert_eq!(stage.label(), "Unknown");
        assert_eq!(serde_json::to_string(&stage).unwrap(), "\"negotiating\"");
    }

    #[test]
    fn unknown_type_keeps_its_tag() {
        let t: InvestorType = serde_json::from_str("\"quantum-fund\"").unwrap();
        assert_eq!(t, InvestorType::Unknown("quantum-fund".to_string()));
        assert_eq!(t.label(), "Other");
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"quantum-fund\"");
    }

    #[test]
    fn tradfi_uses_flat_tag() {
        assert_eq!(
            serde_json::to_string(&InvestorType::TradFi).unwrap(),
            "\"tradfi\""
        );
        let back: InvestorType = serde_json::from_str("\"tradfi\"").unwrap();
        assert_eq!(back, InvestorType::TradFi);
    }

    #[test]
    fn unknown_priority_keeps_its_tag() {
        let p: Priority = serde_json::from_str("\"urgent\"").unwrap();
        assert_eq!(p, Priority::Other("urgent".to_string()));
        assert_eq!(serde_json::to_string(&p).unwrap(), "\"urgent\"");
    }

    #[test]
    fn investor_deserializes_from_browser_export_shape() {
        let json = r#"{
            "id": 3,
            "name": "Mysten Capital",
            "company": "Mysten Capital",
            "email": null,
            "type": "crypto-vc",
            "stage": "contacted",
            "priority": "high",
            "pitchAngle": "jito-for-sui",
            "commitment": 0,
            "notes": "",
            "nextAction": "Send deck",
            "lastContact": "2026-08-20T10:00:00Z",
            "source": "manual",
            "activities": [{"type": "email", "date": "2026-08-20T10:00:00Z", "note": "intro"}]
        }"#;
        let inv: Investor = serde_json::from_str(json).unwrap();
        assert_eq!(inv.investor_type, InvestorType::CryptoVc);
        assert_eq!(inv.stage, Stage::Contacted);
        assert!(!inv.has_email());
        assert_eq!(inv.activities.len(), 1);
        assert_eq!(inv.activities[0].kind, "email");
    }

    #[test]
    fn closed_stages() {
        assert!(Stage::Committed.is_closed());
        assert!(Stage::Passed.is_closed());
        assert!(!Stage::TermSheet.is_closed());
        assert!(!Stage::Unknown("negotiating".to_string()).is_closed());
    }
}
