use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalStyle {
    /// Patient, contrarian long-term investor
    LongTerm,
    /// Buy-the-dip tactical allocator
    Tactical,
}

impl SignalStyle {
    pub fn title(&self) -> &'static str {
        match self {
            SignalStyle::LongTerm => "Buffett-Style Long-Term Investor Signal",
            SignalStyle::Tactical => "Tom Lee (Fundstrat) Tactical Signal",
        }
    }

    pub fn quote(&self) -> &'static str {
        match self {
            SignalStyle::LongTerm => {
                "Be fearful when others are greedy, and greedy when others are fearful. (Warren Buffett)"
            }
            SignalStyle::Tactical => {
                "When everyone is cautious, that's when opportunity strikes. The market often climbs a wall of worry. (Tom Lee, paraphrased)"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Verdict {
    StrongBuy,
    Accumulate,
    Wait,
    Overheated,
    HoldOff,
    BuyTheDip,
    TooHot,
    StayInvested,
}

impl Verdict {
    pub fn headline(&self) -> &'static str {
        match self {
            Verdict::StrongBuy => {
                "🟢 Buffett: Really Good Time to Buy (Be Greedy When Others Are Fearful)"
            }
            Verdict::Accumulate => "🟡 Buffett: Good Time to Accumulate, Be Patient",
            Verdict::Wait => "⚪ Buffett: Wait, Stay Patient (No Edge)",
            Verdict::Overheated => "🔴 Buffett: Market Overheated, Wait for Pullback",
            Verdict::HoldOff => "🔴 Buffett: Hold Off (No Opportunity Detected)",
            Verdict::BuyTheDip => "🟢 Tom Lee: Good Time to Buy (Buy the Dip Mentality)",
            Verdict::TooHot => "🔴 Tom Lee: Even Tom Lee says: Hold Off, Too Hot!",
            Verdict::StayInvested => "⚪ Tom Lee: Stay Invested or Accumulate Slowly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalReason {
    pub description: String,
}

/// Result of running one style's rule table against a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalOutcome {
    pub style: SignalStyle,
    pub verdict: Verdict,
    pub headline: String,
    /// Number of tally conditions met (fear count / bullishness score)
    pub tally: u32,
    /// Id of the rule that fired; `None` when the fallback applied
    pub rule_id: Option<String>,
    pub reasons: Vec<SignalReason>,
}
