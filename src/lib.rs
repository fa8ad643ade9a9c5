//! BetSlip Library
//!
//! American odds payout math and betting slip totals

pub mod config;
pub mod error;
pub mod logging;
pub mod odds;
pub mod slip;
pub mod types;

pub use error::{OddsError, SlipError};
pub use odds::{compute_return, compute_winnings, parlay_odds, AmericanOdds, Stake};
pub use slip::{aggregate, BetSlip, PlacementReceipt, SlipTotals};
pub use types::{BetSelection, MarketType, Team};
