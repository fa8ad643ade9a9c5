use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Currency precision for payouts and totals
pub const CURRENCY_DP: u32 = 2;

/// Largest accepted stake, one trillion. Larger amounts are treated like invalid input.
pub const MAX_STAKE: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Round to currency precision, half away from zero, with a fixed 2-dp scale.
pub fn round_currency(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CURRENCY_DP);
    rounded
}

/// Amount wagered on one selection. Never negative, never above [`MAX_STAKE`].
///
/// The entered amount is kept at full precision; only payouts and totals are
/// rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Stake(Decimal);

impl Default for Stake {
    fn default() -> Self {
        Stake::ZERO
    }
}

impl Stake {
    pub const ZERO: Stake = Stake(Decimal::from_parts(0, 0, 0, false, CURRENCY_DP));

    /// Negative amounts clamp to zero, amounts above [`MAX_STAKE`] are rejected as zero
    pub fn new(amount: Decimal) -> Self {
        if amount.is_sign_negative() {
            return Stake::ZERO;
        }
        if amount > MAX_STAKE {
            debug!(%amount, "stake above limit, treating as zero");
            return Stake::ZERO;
        }
        Stake(amount)
    }

    /// Parse user-entered stake text. Empty, non-numeric, negative or
    /// over-limit input yields a zero stake instead of an error.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();
        if trimmed.is_empty() {
            return Stake::ZERO;
        }

        let parsed = Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed));
        match parsed {
            Ok(amount) => Stake::new(amount),
            Err(_) => {
                debug!(input = text, "stake text is not numeric, treating as zero");
                Stake::ZERO
            }
        }
    }

    /// Non-finite input yields zero
    pub fn from_f64(value: f64) -> Self {
        match Decimal::try_from(value) {
            Ok(amount) => Stake::new(amount),
            Err(_) => {
                debug!(value, "stake is not representable, treating as zero");
                Stake::ZERO
            }
        }
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<Decimal> for Stake {
    fn from(amount: Decimal) -> Self {
        Stake::new(amount)
    }
}

impl fmt::Display for Stake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", round_currency(self.0))
    }
}

impl<'de> Deserialize<'de> for Stake {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawStake {
            Int(i64),
            Float(f64),
            Text(String),
        }

        Ok(match RawStake::deserialize(deserializer)? {
            RawStake::Int(v) => Stake::new(Decimal::from(v)),
            RawStake::Float(v) => Stake::from_f64(v),
            RawStake::Text(s) => Stake::parse(&s),
        })
    }
}
