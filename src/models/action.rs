use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ActionalyzeError;

/// Kind of corporate action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    Dividend,
    #[serde(rename = "Stock Split")]
    StockSplit,
    #[serde(rename = "Bonus Issue")]
    BonusIssue,
    Merger,
    Acquisition,
    #[serde(rename = "Rights Issue")]
    RightsIssue,
    #[serde(rename = "Spin Off")]
    SpinOff,
}

impl ActionType {
    /// Declaration order; the synthesizer indexes into this
    pub const ALL: [ActionType; 7] = [
        ActionType::Dividend,
        ActionType::StockSplit,
        ActionType::BonusIssue,
        ActionType::Merger,
        ActionType::Acquisition,
        ActionType::RightsIssue,
        ActionType::SpinOff,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Dividend => "Dividend",
            ActionType::StockSplit => "Stock Split",
            ActionType::BonusIssue => "Bonus Issue",
            ActionType::Merger => "Merger",
            ActionType::Acquisition => "Acquisition",
            ActionType::RightsIssue => "Rights Issue",
            ActionType::SpinOff => "Spin Off",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionType {
    type Err = ActionalyzeError;

    /// Accepts display names and their compact forms ("stock-split", "stocksplit")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        ActionType::ALL
            .iter()
            .copied()
            .find(|t| {
                t.as_str()
                    .chars()
                    .filter(|c| c.is_ascii_alphanumeric())
                    .map(|c| c.to_ascii_lowercase())
                    .eq(wanted.chars())
            })
            .ok_or_else(|| ActionalyzeError::DataError(format!("Unknown action type: {}", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionStatus {
    Upcoming,
    Completed,
    Announced,
}

impl ActionStatus {
    pub const ALL: [ActionStatus; 3] = [
        ActionStatus::Upcoming,
        ActionStatus::Completed,
        ActionStatus::Announced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionStatus::Upcoming => "Upcoming",
            ActionStatus::Completed => "Completed",
            ActionStatus::Announced => "Announced",
        }
    }
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Corporate action event owned by one company
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorporateAction {
    pub id: String,
    pub ticker: String,
    #[serde(rename = "type")]
    pub action_type: ActionType,
    pub date: NaiveDate,
    pub description: String,
    pub status: ActionStatus,
    /// Per-share amount for dividends, ratio for splits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}
