use core::fmt;
use dcbor::prelude::*;
use crate::{Error, Result, Sign};

/// A signed infinity in the typed value model.
///
/// In dCBOR it is carried as an ordinary float: `f97c00` for `+inf`, `f9fc00`
/// for `-inf`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InfinityValue {
    sign: Sign,
}

impl InfinityValue {
    /// Positive infinity.
    pub const POSITIVE: Self = Self::new(Sign::Positive);
    /// Negative infinity.
    pub const NEGATIVE: Self = Self::new(Sign::Negative);

    /// Construct an infinity with the given sign.
    pub const fn new(sign: Sign) -> Self { Self { sign } }

    /// Returns the sign of this infinity.
    pub fn sign(self) -> Sign { self.sign }

    /// Returns the host infinity of the same sign.
    pub fn to_host(self) -> f64 {
        match self.sign {
            Sign::Positive => f64::INFINITY,
            Sign::Negative => f64::NEG_INFINITY,
        }
    }

    /// Accepts exactly `f64::INFINITY` and `f64::NEG_INFINITY`.
    pub fn from_host(raw: f64) -> Result<Self> {
        if raw == f64::INFINITY {
            Ok(Self::POSITIVE)
        } else if raw == f64::NEG_INFINITY {
            Ok(Self::NEGATIVE)
        } else {
            tracing::trace!(
                target: "extremes",
                ?raw,
                "rejected host float as infinity"
            );
            Err(Error::NotAnInfinity(raw))
        }
    }
}

impl From<InfinityValue> for f64 {
    fn from(value: InfinityValue) -> Self { value.to_host() }
}

impl TryFrom<f64> for InfinityValue {
    type Error = Error;
    fn try_from(raw: f64) -> Result<Self> { Self::from_host(raw) }
}

// ───────────────────────────── CBOR Conversions ─────────────────────────────

impl From<InfinityValue> for CBOR {
    fn from(value: InfinityValue) -> Self { CBOR::from(value.to_host()) }
}

impl TryFrom<CBOR> for InfinityValue {
    type Error = Error;
    fn try_from(cbor: CBOR) -> Result<Self> {
        let raw = f64::try_from(cbor)?;
        Self::from_host(raw)
    }
}

impl fmt::Display for InfinityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}inf", self.sign)
    }
}
