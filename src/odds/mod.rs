//! American odds math: line parsing, stake coercion, payouts and parlays.

pub mod american;
pub mod parlay;
pub mod payout;
pub mod stake;

pub use american::AmericanOdds;
pub use parlay::parlay_odds;
pub use payout::{compute_return, compute_winnings};
pub use stake::{round_currency, Stake, CURRENCY_DP, MAX_STAKE};
