use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::american::AmericanOdds;
use crate::error::OddsError;

/// Combined American line for a multi-leg parlay.
///
/// Leg decimal odds are multiplied, then converted back: a combined decimal
/// price of 2.0 or more is quoted as `+(d - 1) * 100`, anything shorter as
/// `-100 / (d - 1)`, rounded to the nearest whole line. Combinations whose
/// line does not fit an `i32` are rejected with [`OddsError::OutOfRange`].
pub fn parlay_odds(legs: &[AmericanOdds]) -> Result<AmericanOdds, OddsError> {
    if legs.len() < 2 {
        return Err(OddsError::NotEnoughLegs(legs.len()));
    }

    let combined = legs
        .iter()
        .try_fold(Decimal::ONE, |acc, leg| acc.checked_mul(leg.decimal_odds()))
        .ok_or(OddsError::OutOfRange)?;
    let profit = combined - Decimal::ONE;

    let line = if combined >= Decimal::TWO {
        profit.checked_mul(Decimal::ONE_HUNDRED)
    } else {
        Decimal::ONE_HUNDRED.checked_div(profit).map(|l| -l)
    }
    .ok_or(OddsError::OutOfRange)?;

    let rounded = line
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i32()
        .ok_or(OddsError::OutOfRange)?;
    AmericanOdds::new(rounded)
}
