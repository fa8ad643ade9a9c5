//! Betting slip - the user's pending selections and their stakes
//!
//! The slip owns the selections; all payout math goes through the pure
//! functions in [`crate::odds`] and [`totals`].

pub mod summary;
pub mod totals;

pub use totals::{aggregate, SlipTotals};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::SlipConfig;
use crate::error::SlipError;
use crate::odds::{compute_winnings, AmericanOdds, Stake};
use crate::types::BetSelection;

/// One bet as submitted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedBet {
    pub id: String,
    pub description: String,
    pub odds: AmericanOdds,
    pub stake: Stake,
    pub potential_win: Decimal,
}

/// Result of placing the slip. Nothing is stored; the caller decides what
/// to do with it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacementReceipt {
    pub ticket: Uuid,
    pub placed_at: DateTime<Utc>,
    pub bets: Vec<PlacedBet>,
    pub totals: SlipTotals,
}

#[derive(Debug, Clone)]
pub struct BetSlip {
    selections: Vec<BetSelection>,
    max_selections: usize,
}

impl Default for BetSlip {
    fn default() -> Self {
        Self::new()
    }
}

impl BetSlip {
    pub fn new() -> Self {
        Self::with_config(&SlipConfig::default())
    }

    pub fn with_config(config: &SlipConfig) -> Self {
        Self {
            selections: Vec::new(),
            max_selections: config.max_selections,
        }
    }

    pub fn max_selections(&self) -> usize {
        self.max_selections
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&BetSelection> {
        self.selections.iter().find(|s| s.id == id)
    }

    /// Selections in the order they were added
    pub fn iter(&self) -> impl Iterator<Item = &BetSelection> {
        self.selections.iter()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.selections.iter().position(|s| s.id == id)
    }

    pub fn add(&mut self, selection: BetSelection) -> Result<(), SlipError> {
        if self.contains(&selection.id) {
            return Err(SlipError::Duplicate(selection.id));
        }
        if self.selections.len() >= self.max_selections {
            return Err(SlipError::Full(self.max_selections));
        }
        debug!(id = %selection.id, odds = %selection.odds, market = %selection.market, "selection added");
        self.selections.push(selection);
        Ok(())
    }

    /// Add the selection if absent, remove it if present. Returns whether it
    /// is on the slip afterwards.
    pub fn toggle(&mut self, selection: BetSelection) -> Result<bool, SlipError> {
        if self.remove(&selection.id).is_some() {
            return Ok(false);
        }
        self.add(selection)?;
        Ok(true)
    }

    pub fn remove(&mut self, id: &str) -> Option<BetSelection> {
        let idx = self.position(id)?;
        debug!(id, "selection removed");
        Some(self.selections.remove(idx))
    }

    pub fn clear(&mut self) {
        if !self.selections.is_empty() {
            debug!(count = self.selections.len(), "slip cleared");
        }
        self.selections.clear();
    }

    pub fn set_stake(&mut self, id: &str, stake: Stake) -> Result<(), SlipError> {
        let sel = self
            .selections
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| SlipError::UnknownSelection(id.to_string()))?;
        sel.stake = stake;
        debug!(id, stake = %stake, "stake updated");
        Ok(())
    }

    /// Stake from raw input text; unparseable text sets a zero stake
    pub fn set_stake_text(&mut self, id: &str, text: &str) -> Result<(), SlipError> {
        self.set_stake(id, Stake::parse(text))
    }

    pub fn winnings(&self, id: &str) -> Option<Decimal> {
        self.get(id).map(|s| compute_winnings(s.stake, s.odds))
    }

    /// Potential winnings keyed by selection id
    pub fn winnings_by_id(&self) -> BTreeMap<String, Decimal> {
        self.selections
            .iter()
            .map(|s| (s.id.clone(), compute_winnings(s.stake, s.odds)))
            .collect()
    }

    pub fn totals(&self) -> SlipTotals {
        aggregate(&self.selections)
    }

    pub fn can_place(&self) -> bool {
        self.totals().total_stake > Decimal::ZERO
    }

    /// Submit every selection and empty the slip
    pub fn place(&mut self) -> Result<PlacementReceipt, SlipError> {
        if !self.can_place() {
            return Err(SlipError::NothingStaked);
        }

        let totals = self.totals();
        let bets = self
            .selections
            .drain(..)
            .map(|s| PlacedBet {
                potential_win: compute_winnings(s.stake, s.odds),
                id: s.id,
                description: s.description,
                odds: s.odds,
                stake: s.stake,
            })
            .collect::<Vec<_>>();

        let receipt = PlacementReceipt {
            ticket: Uuid::new_v4(),
            placed_at: Utc::now(),
            bets,
            totals,
        };
        info!(
            ticket = %receipt.ticket,
            bets = receipt.bets.len(),
            stake = %totals.total_stake,
            potential_return = %totals.total_potential_return,
            "🎟️ slip placed"
        );
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MarketType, Team};
    use rust_decimal_macros::dec;

    fn lakers_ml() -> BetSelection {
        BetSelection::new(
            "1-moneyline-home",
            MarketType::Moneyline,
            "Los Angeles Lakers to win",
            AmericanOdds::new(-160).unwrap(),
        )
        .with_team(Team::new("lal", "Los Angeles Lakers", "LAL"))
    }

    fn heat_spread() -> BetSelection {
        BetSelection::new(
            "3-spread-away",
            MarketType::Spread,
            "Miami Heat +3.5",
            AmericanOdds::new(-110).unwrap(),
        )
        .with_team(Team::new("mia", "Miami Heat", "MIA"))
        .with_line("+3.5")
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut slip = BetSlip::new();
        slip.add(heat_spread()).unwrap();
        slip.add(lakers_ml()).unwrap();
        let ids: Vec<_> = slip.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["3-spread-away", "1-moneyline-home"]);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut slip = BetSlip::new();
        slip.add(lakers_ml()).unwrap();
        assert_eq!(
            slip.add(lakers_ml()),
            Err(SlipError::Duplicate("1-moneyline-home".to_string()))
        );
        assert_eq!(slip.len(), 1);
    }

    #[test]
    fn test_full_slip_rejected() {
        let mut slip = BetSlip::with_config(&SlipConfig {
            max_selections: 1,
            ..SlipConfig::default()
        });
        slip.add(lakers_ml()).unwrap();
        assert_eq!(slip.add(heat_spread()), Err(SlipError::Full(1)));
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut slip = BetSlip::new();
        assert!(slip.toggle(lakers_ml()).unwrap());
        assert!(slip.contains("1-moneyline-home"));
        assert!(!slip.toggle(lakers_ml()).unwrap());
        assert!(slip.is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut slip = BetSlip::new();
        slip.add(lakers_ml()).unwrap();
        slip.add(heat_spread()).unwrap();

        let removed = slip.remove("1-moneyline-home").unwrap();
        assert_eq!(removed.description, "Los Angeles Lakers to win");
        assert!(slip.remove("1-moneyline-home").is_none());

        slip.clear();
        assert!(slip.is_empty());
        assert_eq!(slip.totals(), SlipTotals::default());
    }

    #[test]
    fn test_stake_text_updates_winnings() {
        let mut slip = BetSlip::new();
        slip.add(lakers_ml()).unwrap();
        slip.set_stake_text("1-moneyline-home", "100").unwrap();
        assert_eq!(slip.winnings("1-moneyline-home"), Some(dec!(62.50)));

        slip.set_stake_text("1-moneyline-home", "").unwrap();
        assert_eq!(slip.winnings("1-moneyline-home"), Some(Decimal::ZERO));
        assert_eq!(slip.winnings("missing"), None);
    }

    #[test]
    fn test_set_stake_unknown_id() {
        let mut slip = BetSlip::new();
        assert_eq!(
            slip.set_stake("nope", Stake::new(dec!(5))),
            Err(SlipError::UnknownSelection("nope".to_string()))
        );
    }

    #[test]
    fn test_winnings_by_id() {
        let mut slip = BetSlip::new();
        slip.add(lakers_ml()).unwrap();
        slip.add(heat_spread()).unwrap();
        slip.set_stake("1-moneyline-home", Stake::new(dec!(100))).unwrap();
        slip.set_stake("3-spread-away", Stake::new(dec!(30))).unwrap();

        let map = slip.winnings_by_id();
        assert_eq!(map.len(), 2);
        assert_eq!(map["1-moneyline-home"], dec!(62.50));
        assert_eq!(map["3-spread-away"], dec!(27.27));
    }

    #[test]
    fn test_place_requires_stake() {
        let mut slip = BetSlip::new();
        assert_eq!(slip.place(), Err(SlipError::NothingStaked));
        slip.add(lakers_ml()).unwrap();
        assert!(!slip.can_place());
        assert_eq!(slip.place(), Err(SlipError::NothingStaked));
        assert_eq!(slip.len(), 1);
    }

    #[test]
    fn test_place_empties_slip() {
        let mut slip = BetSlip::new();
        slip.add(lakers_ml()).unwrap();
        slip.add(heat_spread()).unwrap();
        slip.set_stake_text("1-moneyline-home", "100").unwrap();

        let receipt = slip.place().unwrap();
        assert!(slip.is_empty());
        assert_eq!(receipt.bets.len(), 2);
        assert_eq!(receipt.bets[0].potential_win, dec!(62.50));
        assert!(receipt.bets[1].stake.is_zero());
        assert_eq!(receipt.totals.total_potential_return, dec!(162.50));
    }
}
