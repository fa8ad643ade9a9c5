use rust_decimal::Decimal;

use super::american::AmericanOdds;
use super::stake::{round_currency, Stake};

/// Potential winnings (profit only, stake not included) at currency precision.
///
/// Underdog lines pay `stake * odds / 100`, favorite lines pay
/// `stake * 100 / |odds|`. A zero stake wins exactly zero.
pub fn compute_winnings(stake: Stake, odds: AmericanOdds) -> Decimal {
    if stake.is_zero() {
        return round_currency(Decimal::ZERO);
    }
    let magnitude = Decimal::from(odds.value().unsigned_abs());
    let raw = if odds.is_underdog() {
        stake.amount().saturating_mul(magnitude) / Decimal::ONE_HUNDRED
    } else {
        stake.amount().saturating_mul(Decimal::ONE_HUNDRED) / magnitude
    };
    round_currency(raw)
}

/// Stake plus winnings
pub fn compute_return(stake: Stake, odds: AmericanOdds) -> Decimal {
    round_currency(stake.amount().saturating_add(compute_winnings(stake, odds)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::RoundingStrategy;
    use rust_decimal_macros::dec;

    fn odds(v: i32) -> AmericanOdds {
        AmericanOdds::new(v).unwrap()
    }

    #[test]
    fn test_underdog_line() {
        assert_eq!(compute_winnings(Stake::new(dec!(100)), odds(180)), dec!(180.00));
        assert_eq!(compute_winnings(Stake::new(dec!(50)), odds(180)), dec!(90.00));
    }

    #[test]
    fn test_favorite_line() {
        assert_eq!(compute_winnings(Stake::new(dec!(100)), odds(-160)), dec!(62.50));
        assert_eq!(compute_winnings(Stake::new(dec!(30)), odds(-110)), dec!(27.27));
        assert_eq!(compute_winnings(Stake::new(dec!(110)), odds(-110)), dec!(100.00));
    }

    #[test]
    fn test_zero_stake_wins_nothing() {
        for v in [-110, -160, 100, 180, 5000, -10000] {
            assert_eq!(compute_winnings(Stake::ZERO, odds(v)), Decimal::ZERO);
            assert_eq!(compute_winnings(Stake::parse(""), odds(v)), Decimal::ZERO);
        }
    }

    #[test]
    fn test_negative_stake_wins_nothing() {
        assert_eq!(compute_winnings(Stake::new(dec!(-20)), odds(250)), Decimal::ZERO);
    }

    #[test]
    fn test_result_is_rounded_half_up() {
        // 10 * 100 / 160 = 6.25; 1 * 100 / 115 = 0.8695...
        assert_eq!(compute_winnings(Stake::new(dec!(10)), odds(-160)), dec!(6.25));
        assert_eq!(compute_winnings(Stake::new(dec!(1)), odds(-115)), dec!(0.87));
        // 0.05 * 105 / 100 = 0.0525
        assert_eq!(compute_winnings(Stake::new(dec!(0.05)), odds(105)), dec!(0.05));
        // 0.10 * 125 / 100 = 0.125
        assert_eq!(compute_winnings(Stake::new(dec!(0.10)), odds(125)), dec!(0.13));
    }

    #[test]
    fn test_sub_cent_stakes() {
        // 0.004 * 1000 / 100 = 0.04
        assert_eq!(compute_winnings(Stake::parse("0.004"), odds(1000)), dec!(0.04));
        // 1.005 * 100 / 200 = 0.5025
        assert_eq!(compute_winnings(Stake::parse("1.005"), odds(-200)), dec!(0.50));
        // 0.015 * 100 / 300 = 0.005, a midpoint
        assert_eq!(compute_winnings(Stake::parse("0.015"), odds(-300)), dec!(0.01));
        // 2.999 * 150 / 100 = 4.4985
        assert_eq!(compute_winnings(Stake::parse("2.999"), odds(150)), dec!(4.50));
        assert_eq!(compute_return(Stake::parse("1.005"), odds(-200)), dec!(1.51));
    }

    #[test]
    fn test_extreme_lines_and_stakes() {
        let max_stake = Stake::new(crate::odds::MAX_STAKE);
        assert_eq!(
            compute_winnings(max_stake, odds(i32::MAX)),
            dec!(21474836470000000000.00)
        );
        assert_eq!(compute_winnings(max_stake, odds(i32::MIN)), dec!(46566.13));
        assert_eq!(compute_winnings(Stake::parse("1e27"), odds(100_000)), Decimal::ZERO);
        assert_eq!(compute_return(max_stake, odds(-100)), dec!(2000000000000.00));
    }

    #[test]
    fn test_winnings_match_formula() {
        let stakes = [dec!(0.005), dec!(0.01), dec!(1.0049), dec!(3.333), dec!(19.99), dec!(1234.56)];
        let lines = [101, 150, 333, 1200, -101, -125, -250, -999];
        for s in stakes {
            for v in lines {
                let expected = if v > 0 {
                    s * Decimal::from(v) / dec!(100)
                } else {
                    s * dec!(100) / Decimal::from(-v)
                };
                assert_eq!(
                    compute_winnings(Stake::new(s), odds(v)),
                    expected.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
                    "stake {} odds {}",
                    s,
                    v
                );
            }
        }
    }

    #[test]
    fn test_return_includes_stake() {
        assert_eq!(compute_return(Stake::new(dec!(100)), odds(-160)), dec!(162.50));
        assert_eq!(compute_return(Stake::ZERO, odds(-160)), dec!(0));
    }
}
