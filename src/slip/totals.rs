use rust_decimal::Decimal;
use serde::Serialize;
use std::iter::Sum;
use std::ops::Add;

use crate::odds::{compute_winnings, round_currency};
use crate::types::BetSelection;

/// Slip-level totals, each at currency precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlipTotals {
    pub total_stake: Decimal,
    /// Winnings only, returned stake excluded
    pub total_potential_winnings: Decimal,
    pub total_potential_return: Decimal,
    /// Unrounded stake sum, so combined totals round once
    #[serde(skip)]
    exact_stake: Decimal,
}

impl Default for SlipTotals {
    fn default() -> Self {
        Self::from_parts(Decimal::ZERO, Decimal::ZERO)
    }
}

impl SlipTotals {
    /// `winnings` is a sum of per-selection winnings already at cents
    fn from_parts(exact_stake: Decimal, winnings: Decimal) -> Self {
        let total_potential_winnings = round_currency(winnings);
        Self {
            total_stake: round_currency(exact_stake),
            total_potential_winnings,
            total_potential_return: round_currency(exact_stake.saturating_add(total_potential_winnings)),
            exact_stake,
        }
    }
}

impl Add for SlipTotals {
    type Output = SlipTotals;

    fn add(self, rhs: SlipTotals) -> SlipTotals {
        SlipTotals::from_parts(
            self.exact_stake.saturating_add(rhs.exact_stake),
            self.total_potential_winnings
                .saturating_add(rhs.total_potential_winnings),
        )
    }
}

impl Sum for SlipTotals {
    fn sum<I: Iterator<Item = SlipTotals>>(iter: I) -> Self {
        iter.fold(SlipTotals::default(), Add::add)
    }
}

/// Totals across a set of selections.
///
/// Stakes are summed as entered and rounded once; each selection's winnings
/// are rounded to cents before summing. Totals of any partition of the
/// selections add up to the totals of the whole.
pub fn aggregate<'a, I>(selections: I) -> SlipTotals
where
    I: IntoIterator<Item = &'a BetSelection>,
{
    let (stake, winnings) = selections
        .into_iter()
        .fold((Decimal::ZERO, Decimal::ZERO), |(stake, winnings), sel| {
            (
                stake.saturating_add(sel.stake.amount()),
                winnings.saturating_add(compute_winnings(sel.stake, sel.odds)),
            )
        });
    SlipTotals::from_parts(stake, winnings)
}
