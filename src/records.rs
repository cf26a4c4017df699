use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar dates travel as strings in this fixed format; anything that does
/// not parse simply falls outside every reporting window.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Successful,
    Failed,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    // Unique, used as the newest-first sort key.
    pub id: u64,
    pub name: String,
    pub email: String,
    pub package: String,
    pub amount: u32,
    pub date: String,
    pub time: String,
    pub status: TxStatus,
    pub reference: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipOutcome {
    Pending,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipTier {
    Free,
    Premium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tip {
    pub market: String,
    pub prediction: String,
    pub risk: RiskLevel,
    pub outcome: TipOutcome,
    pub tier: TipTier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: String,
    pub league: String,
    pub home: String,
    pub away: String,
    pub date: String,
    pub time: String,
    pub status: String,
    pub tips: Vec<Tip>,
}

impl MatchRecord {
    /// Displayed tip count. Derived from the collection so the two can never
    /// disagree.
    pub fn tip_count(&self) -> usize {
        self.tips.len()
    }
}

pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DAY_FORMAT).ok()
}
