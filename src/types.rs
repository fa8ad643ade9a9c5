//! Core types used throughout BetSlip
//!
//! Defines the market kinds, teams and the selections a user puts on a slip.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::odds::{AmericanOdds, Stake};

/// Bet market kinds offered on a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketType {
    /// Which team wins outright
    Moneyline,
    /// Margin of victory
    Spread,
    /// Combined score threshold
    Total,
}

impl Default for MarketType {
    fn default() -> Self {
        MarketType::Moneyline
    }
}

impl MarketType {
    pub const ALL: [MarketType; 3] = [MarketType::Moneyline, MarketType::Spread, MarketType::Total];

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "moneyline" | "ml" => Some(MarketType::Moneyline),
            "spread" => Some(MarketType::Spread),
            "total" | "totals" => Some(MarketType::Total),
            _ => None,
        }
    }
}

impl fmt::Display for MarketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketType::Moneyline => write!(f, "moneyline"),
            MarketType::Spread => write!(f, "spread"),
            MarketType::Total => write!(f, "total"),
        }
    }
}

/// Team a selection backs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub abbreviation: String,
}

impl Team {
    pub fn new(id: impl Into<String>, name: impl Into<String>, abbreviation: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            abbreviation: abbreviation.into(),
        }
    }
}

/// A single bet option placed on the slip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetSelection {
    /// Unique per slip, e.g. "1-moneyline-home"
    pub id: String,
    pub market: MarketType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<Team>,
    /// Spread or total line text ("+3.5", "Over 224.5")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
    pub description: String,
    pub odds: AmericanOdds,
    #[serde(default)]
    pub stake: Stake,
}

impl BetSelection {
    /// New selection with a zero stake
    pub fn new(
        id: impl Into<String>,
        market: MarketType,
        description: impl Into<String>,
        odds: AmericanOdds,
    ) -> Self {
        Self {
            id: id.into(),
            market,
            team: None,
            line: None,
            description: description.into(),
            odds,
            stake: Stake::ZERO,
        }
    }

    pub fn with_team(mut self, team: Team) -> Self {
        self.team = Some(team);
        self
    }

    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.line = Some(line.into());
        self
    }

    pub fn with_stake(mut self, stake: Stake) -> Self {
        self.stake = stake;
        self
    }
}
