//! Pitch playbook: the five canned messaging angles and the per-type
//! suggester.
//!
//! Angle order in [`ANGLES`] is significant. The suggester walks the list
//! and returns the first angle whose best-for set contains the investor
//! type, so reordering the table changes which angle wins for types that
//! appear in more than one set (crypto-vc is in three of them).

use serde::{Deserialize, Serialize};

use crate::types::InvestorType;

/// Key of one pitch-angle definition. Unknown wire tags display with the
/// neutral-auction definition but keep their tag, so a load-save cycle never
/// rewrites them into a known value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PitchAngle {
    JitoForSui,
    OrderFlowInfrastructure,
    ExecutionMarketIntelligence,
    NeutralAuction,
    FounderPedigree,
    Custom(String),
}

impl From<String> for PitchAngle {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "jito-for-sui" => PitchAngle::JitoForSui,
            "order-flow-infrastructure" => PitchAngle::OrderFlowInfrastructure,
            "execution-market-intelligence" => PitchAngle::ExecutionMarketIntelligence,
            "neutral-auction" => PitchAngle::NeutralAuction,
            "founder-pedigree" => PitchAngle::FounderPedigree,
            _ => PitchAngle::Custom(tag),
        }
    }
}

impl From<PitchAngle> for String {
    fn from(angle: PitchAngle) -> Self {
        match angle {
            PitchAngle::JitoForSui => "jito-for-sui".to_string(),
            PitchAngle::OrderFlowInfrastructure => "order-flow-infrastructure".to_string(),
            PitchAngle::ExecutionMarketIntelligence => "execution-market-intelligence".to_string(),
            PitchAngle::NeutralAuction => "neutral-auction".to_string(),
            PitchAngle::FounderPedigree => "founder-pedigree".to_string(),
            PitchAngle::Custom(tag) => tag,
        }
    }
}

impl Default for PitchAngle {
    fn default() -> Self {
        PitchAngle::NeutralAuction
    }
}

/// One messaging template, mapped to deck slides and investor types.
#[derive(Debug, Clone)]
pub struct AngleDef {
    pub angle: PitchAngle,
    pub label: &'static str,
    pub description: &'static str,
    pub best_for: &'static [InvestorType],
    pub key_slides: &'static [u8],
    pub talking_points: &'static [&'static str],
}

/// All angles in suggestion order.
pub const ANGLES: [AngleDef; 5] = [
    AngleDef {
        angle: PitchAngle::JitoForSui,
        label: "Jito for Sui",
        description: "MEV infrastructure parallel: Jito went 0 to 90% on Solana, we're day 1 on Sui",
        best_for: &[InvestorType::CryptoVc, InvestorType::ExchangeVc],
        key_slides: &[3, 6, 8, 11],
        talking_points: &[
            "SIP-19 live: validators auto-accept tips, zero adoption grind",
            "SHIO competitor analysis: $494K Jan MEV from single pipe",
            "Jito went 0 to 90% in 18 months on Solana",
            "Neutral auction vs direct extraction: we're infrastructure, not a player",
        ],
    },
    AngleDef {
        angle: PitchAngle::OrderFlowInfrastructure,
        label: "Order Flow Infrastructure",
        description: "Wall Street pays $3.8B/yr for order flow routing; Sui DEXs pay nothing",
        best_for: &[
            InvestorType::Institutional,
            InvestorType::TradFi,
            InvestorType::FundOfFunds,
        ],
        key_slides: &[2, 4, 10, 14],
        talking_points: &[
            "Kevin built ML hedge fund, sold to Franklin Templeton, built their crypto funds",
            "$3.8B PFOF market in TradFi; DeFi order flow is more valuable and unmonetized",
            "Institutional risk framework: protocol-level data, not block explorer scraping",
            "46 bps cost efficiency vs traditional MEV extraction approaches",
        ],
    },
    AngleDef {
        angle: PitchAngle::ExecutionMarketIntelligence,
        label: "Execution Market Intelligence",
        description: "Protocol-level data platform: MEV is just the first application",
        best_for: &[InvestorType::CryptoVc, InvestorType::CorporateVc],
        key_slides: &[4, 10, 11, 12],
        talking_points: &[
            "3M+ transactions classified with proprietary MEV taxonomy",
            "Own Sui full node: 100% of chain, not sampled, real-time",
            "Jupiter parallel: they built flow classification last (Ultra Signaling), we build it first",
            "Platform play: MEV auction, then DEX intelligence, then multi-chain expansion",
        ],
    },
    AngleDef {
        angle: PitchAngle::NeutralAuction,
        label: "Neutral Auction Layer",
        description: "We don't compete with DEXs; we're the infrastructure they all route through",
        best_for: &[InvestorType::CryptoVc, InvestorType::InceptionFund],
        key_slides: &[4, 7, 8, 16],
        talking_points: &[
            "SHIO = player + referee (conflict of interest). BIRDAI = neutral infrastructure",
            "7 DEXs on Sui: concentrated market, everyone reachable",
            "Zero-friction GTM: 'Send us your flow, we pay you'",
            "Sui Foundation aligned: flagged searcher monopoly as a threat",
        ],
    },
    AngleDef {
        angle: PitchAngle::FounderPedigree,
        label: "Founder Pedigree Play",
        description: "ML hedge fund, sold to Franklin Templeton, built their crypto funds, now this",
        best_for: &[
            InvestorType::Angel,
            InvestorType::FamilyOffice,
            InvestorType::Individual,
            InvestorType::InceptionFund,
        ],
        key_slides: &[9, 15, 16],
        talking_points: &[
            "Kevin: built and sold ML hedge fund to Franklin Templeton, built their crypto funds post-acquisition",
            "Greg: quant trader at Citadel 2020-2022, order flow and alpha generation specialist",
            "Both founders have built order flow infrastructure at institutional scale",
            "$2M seed at $20M post-money, 24+ months runway",
        ],
    },
];

impl PitchAngle {
    /// Definition backing this angle key. Indexes into [`ANGLES`], which is
    /// declared in the same order as the enum; custom tags display with the
    /// neutral-auction definition.
    pub fn def(&self) -> &'static AngleDef {
        let idx = match self {
            PitchAngle::JitoForSui => 0,
            PitchAngle::OrderFlowInfrastructure => 1,
            PitchAngle::ExecutionMarketIntelligence => 2,
            PitchAngle::NeutralAuction | PitchAngle::Custom(_) => 3,
            PitchAngle::FounderPedigree => 4,
        };
        &ANGLES[idx]
    }

    pub fn label(&self) -> &'static str {
        self.def().label
    }
}

/// Suggest the messaging angle for a classified investor type: first angle
/// in [`ANGLES`] whose best-for set includes the type, else the neutral
/// auction default.
pub fn suggest_pitch_angle(investor_type: InvestorType) -> PitchAngle {
    for def in &ANGLES {
        if def.best_for.contains(&investor_type) {
            return def.angle.clone();
        }
    }
    PitchAngle::NeutralAuction
}
