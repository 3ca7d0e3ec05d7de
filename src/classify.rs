//! Investor-type classification for loosely structured import rows.
//!
//! Import sources disagree on field names (`type` vs `investorType`, `name`
//! vs `company` vs `firm`), so [`RawContact`] keeps every candidate field
//! and the classifier picks the first non-empty one, the same way the
//! browser version leaned on `||` truthiness.
//!
//! Rule order in [`classify_investor_type`] is significant and encodes
//! priority: "sovereign wealth" must win over the generic venture keywords,
//! so reordering the cascade changes results for rows that match more than
//! one keyword set.

use serde::Deserialize;

use crate::playbook::suggest_pitch_angle;
use crate::types::{Investor, InvestorType, Priority, Stage};

/// One raw import row. Every field is optional; empty strings count as
/// missing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContact {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub investor_type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub firm: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub aum: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Provenance tag of the import list, e.g. "angel", "inception",
    /// "web3vc".
    #[serde(default, rename = "_source", alias = "source")]
    pub source: Option<String>,
}

/// First non-empty candidate, lower-cased; empty string when none is set.
fn first_filled(candidates: &[&Option<String>]) -> String {
    candidates
        .iter()
        .filter_map(|c| c.as_deref())
        .find(|s| !s.is_empty())
        .unwrap_or("")
        .to_lowercase()
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Classify a raw row into the investor-type taxonomy.
///
/// Total function: always returns a tag, never fails. The final fallback is
/// [`InvestorType::Other`].
pub fn classify_investor_type(raw: &RawContact) -> InvestorType {
    let t = first_filled(&[&raw.kind, &raw.investor_type]);
    let n = first_filled(&[&raw.name, &raw.company, &raw.firm]);
    let notes = first_filled(&[&raw.notes, &raw.aum, &raw.description]);
    let source = raw.source.as_deref().unwrap_or("");

    if source == "angel" {
        return InvestorType::Angel;
    }
    if contains_any(&t, &["sovereign", "swf"]) || notes.contains("sovereign") {
        return InvestorType::Institutional;
    }
    if contains_any(&t, &["pension", "endowment"])
        || contains_any(&n, &["university", "foundation", "trs", "pers"])
    {
        return InvestorType::PensionEndowment;
    }
    if contains_any(&t, &["fund of fund", "fof", "private markets"]) {
        return InvestorType::FundOfFunds;
    }
    if t.contains("family office") {
        return InvestorType::FamilyOffice;
    }
    if t.contains("corporate") {
        return InvestorType::CorporateVc;
    }
    if t.contains("exchange") {
        return InvestorType::ExchangeVc;
    }
    if contains_any(&t, &["crypto", "web3", "defi", "blockchain"]) {
        return InvestorType::CryptoVc;
    }
    if contains_any(&t, &["tradfi", "bank", "insurance", "asset management"]) {
        return InvestorType::TradFi;
    }
    if contains_any(&t, &["individual", "personal"]) {
        return InvestorType::Individual;
    }
    if contains_any(&t, &["venture", "vc", "growth"]) {
        return InvestorType::CryptoVc;
    }
    if source == "inception" {
        return InvestorType::InceptionFund;
    }
    if source == "web3vc" {
        return InvestorType::CryptoVc;
    }
    InvestorType::Other
}

/// Build a full investor record from a raw import row.
///
/// Classifies the type, suggests the pitch angle from it, and zeroes the
/// derived/engagement fields. The caller assigns the id.
pub fn investor_from_raw(raw: &RawContact, id: u64) -> Investor {
    let investor_type = classify_investor_type(raw);
    let pitch_angle = suggest_pitch_angle(investor_type.clone());
    let name = raw
        .name
        .as_deref()
        .or(raw.company.as_deref())
        .or(raw.firm.as_deref())
        .filter(|s| !s.is_empty())
        .unwrap_or("Unknown")
        .to_string();

    Investor {
        id,
        name,
        company: raw.company.clone().unwrap_or_default(),
        email: raw.email.clone().filter(|e| !e.is_empty()),
        investor_type,
        stage: Stage::Identified,
        priority: Priority::Medium,
        pitch_angle,
        commitment: 0,
        notes: raw.notes.clone().unwrap_or_default(),
        next_action: String::new(),
        last_contact: None,
        source: raw.source.clone().unwrap_or_else(|| "import".to_string()),
        website: String::new(),
        twitter: String::new(),
        location: String::new(),
        focus: String::new(),
        aum: raw.aum.clone().unwrap_or_default(),
        activities: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(kind: &str, name: &str) -> RawContact {
        RawContact {
            kind: Some(kind.to_string()),
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn sovereign_wealth_beats_generic_venture() {
        // "Sovereign Venture Growth" also matches the venture keywords;
        // the sovereign rule has to run first.
        assert_eq!(
            classify_investor_type(&raw("Sovereign Wealth Fund", "GIC")),
            InvestorType::Institutional
        );
        assert_eq!(
            classify_investor_type(&raw("Sovereign Venture Growth", "GIC")),
            InvestorType::Institutional
        );
    }

    #[test]
    fn university_name_classifies_as_pension_endowment() {
        assert_eq!(
            classify_investor_type(&raw("", "Acme University Endowment")),
            InvestorType::PensionEndowment
        );
    }

    #[test]
    fn type_field_falls_back_to_investor_type() {
        let row = RawContact {
            kind: Some(String::new()),
            investor_type: Some("Family Office".to_string()),
            name: Some("Smith Capital".to_string()),
            ..Default::default()
        };
        assert_eq!(classify_investor_type(&row), InvestorType::FamilyOffice);
    }

    #[test]
    fn angel_source_tag_wins_over_keywords() {
        let mut row = raw("Crypto VC", "Some Fund");
        row.source = Some("angel".to_string());
        assert_eq!(classify_investor_type(&row), InvestorType::Angel);
    }

    #[test]
    fn venture_keywords_map_to_crypto_vc() {
        assert_eq!(
            classify_investor_type(&raw("Growth Equity", "Summit")),
            InvestorType::CryptoVc
        );
    }

    #[test]
    fn inception_and_web3vc_source_tags() {
        let mut row = raw("", "Day One Fund");
        row.source = Some("inception".to_string());
        assert_eq!(classify_investor_type(&row), InvestorType::InceptionFund);
        row.source = Some("web3vc".to_string());
        assert_eq!(classify_investor_type(&row), InvestorType::CryptoVc);
    }

    #[test]
    fn empty_row_falls_back_to_other() {
        assert_eq!(
            classify_investor_type(&RawContact::default()),
            InvestorType::Other
        );
    }

    #[test]
    fn exchange_checked_before_crypto() {
        assert_eq!(
            classify_investor_type(&raw("Crypto Exchange", "BitVentures")),
            InvestorType::ExchangeVc
        );
    }

    #[test]
    fn raw_row_builds_full_record() {
        let mut row = raw("Crypto VC", "Mysten Capital");
        row.email = Some("partners@mysten.example".to_string());
        let inv = investor_from_raw(&row, 7);
        assert_eq!(inv.id, 7);
        assert_eq!(inv.name, "Mysten Capital");
        assert_eq!(inv.investor_type, InvestorType::CryptoVc);
        assert_eq!(inv.pitch_angle, crate::playbook::PitchAngle::JitoForSui);
        assert_eq!(inv.stage, Stage::Identified);
        assert!(inv.last_contact.is_none());
        assert!(inv.activities.is_empty());
    }
}
