//! Alcohol-by-volume percentage.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

/// Alcohol-by-volume percentage with exactly one decimal place.
///
/// Valid range is `0.0`–`99.9`: at most two digits before the decimal point
/// and one after it, matching the `numeric(3,1)` column it is stored in.
/// Serializes as a decimal string (`"4.5"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Abv(Decimal);

/// Reasons an ABV value is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AbvError {
    #[error("ABV must not be negative")]
    Negative,
    #[error("ensure that there are no more than 2 digits before the decimal point")]
    TooLarge,
    #[error("ensure that there are no more than 1 decimal place")]
    TooPrecise,
    #[error("ABV {0:.1}% greater than or equal to 100%. Aborting migration")]
    LegacyOutOfRange(Decimal),
}

impl Abv {
    /// Number of decimal places every stored value carries.
    pub const SCALE: u32 = 1;

    pub fn new(value: Decimal) -> Result<Self, AbvError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(AbvError::Negative);
        }
        if value >= Decimal::ONE_HUNDRED {
            return Err(AbvError::TooLarge);
        }
        let mut normalized = value.normalize();
        if normalized.scale() > Self::SCALE {
            return Err(AbvError::TooPrecise);
        }
        normalized.rescale(Self::SCALE);
        Ok(Self(normalized))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Rescale a legacy tenths-of-a-percent integer (`45` becomes `4.5`).
    ///
    /// Fails when the rescaled value would not fit two integer digits.
    pub fn from_legacy_tenths(tenths: i64) -> Result<Self, AbvError> {
        let value = Decimal::new(tenths, Self::SCALE);
        if value >= Decimal::ONE_HUNDRED {
            return Err(AbvError::LegacyOutOfRange(value));
        }
        Self::new(value)
    }

    /// Inverse of [`Abv::from_legacy_tenths`].
    pub fn to_legacy_tenths(&self) -> i64 {
        // scale is pinned to 1 and the value is below 100, so the mantissa
        // is the tenths count and always fits.
        self.0.mantissa() as i64
    }
}

impl fmt::Display for Abv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}
