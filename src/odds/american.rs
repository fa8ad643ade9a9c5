use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::OddsError;

/// American (moneyline-style) betting line.
///
/// `+X` means a 100 stake wins `X`; `-Y` means a `Y` stake wins 100.
/// Zero is never a valid line and cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AmericanOdds(i32);

impl AmericanOdds {
    pub fn new(value: i32) -> Result<Self, OddsError> {
        if value == 0 {
            return Err(OddsError::ZeroOdds);
        }
        Ok(Self(value))
    }

    /// Parse "+180", "180" or "-160"
    pub fn parse(text: &str) -> Result<Self, OddsError> {
        let trimmed = text.trim();
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let value: i32 = digits
            .parse()
            .map_err(|_| OddsError::Invalid(text.to_string()))?;
        Self::new(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    pub fn is_underdog(&self) -> bool {
        self.0 > 0
    }

    pub fn is_favorite(&self) -> bool {
        self.0 < 0
    }

    /// Profit per unit staked, before rounding
    fn profit_multiplier(&self) -> Decimal {
        let magnitude = Decimal::from(self.0.unsigned_abs());
        if self.is_underdog() {
            magnitude / Decimal::ONE_HUNDRED
        } else {
            Decimal::ONE_HUNDRED / magnitude
        }
    }

    /// Total return per unit staked (European decimal odds)
    pub fn decimal_odds(&self) -> Decimal {
        Decimal::ONE + self.profit_multiplier()
    }

    /// Break-even win probability implied by the line, vig included
    pub fn implied_probability(&self) -> Decimal {
        let magnitude = Decimal::from(self.0.unsigned_abs());
        if self.is_underdog() {
            Decimal::ONE_HUNDRED / (magnitude + Decimal::ONE_HUNDRED)
        } else {
            magnitude / (magnitude + Decimal::ONE_HUNDRED)
        }
    }
}

impl TryFrom<i32> for AmericanOdds {
    type Error = OddsError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for AmericanOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 > 0 {
            write!(f, "+{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl Serialize for AmericanOdds {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.0)
    }
}

impl<'de> Deserialize<'de> for AmericanOdds {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawOdds {
            Int(i64),
            Text(String),
        }

        let parsed = match RawOdds::deserialize(deserializer)? {
            RawOdds::Int(v) => i32::try_from(v)
                .map_err(|_| OddsError::Invalid(v.to_string()))
                .and_then(AmericanOdds::new),
            RawOdds::Text(s) => AmericanOdds::parse(&s),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}
