use core::fmt;
use dcbor::prelude::*;
use crate::{Error, InfinityValue, NanValue, Result, Sign};

/// A floating-point value that is not finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extreme {
    Infinity(InfinityValue),
    Nan(NanValue),
}

impl Extreme {
    /// Returns the sign of the wrapped value.
    pub fn sign(self) -> Sign {
        match self {
            Self::Infinity(v) => v.sign(),
            Self::Nan(v) => v.sign(),
        }
    }

    /// Returns true if this is a NaN rather than an infinity.
    pub fn is_nan(self) -> bool { matches!(self, Self::Nan(_)) }
}

impl From<InfinityValue> for Extreme {
    fn from(value: InfinityValue) -> Self { Self::Infinity(value) }
}

impl From<NanValue> for Extreme {
    fn from(value: NanValue) -> Self { Self::Nan(value) }
}

impl From<Extreme> for CBOR {
    fn from(value: Extreme) -> Self {
        match value {
            Extreme::Infinity(v) => v.into(),
            Extreme::Nan(v) => v.into(),
        }
    }
}

/// Tries the infinity interpretation first, then the NaN marker.
///
/// An item carrying the nan-bstr tag that fails to decode reports the
/// underlying error rather than [`Error::NotAnExtreme`].
impl TryFrom<CBOR> for Extreme {
    type Error = Error;
    fn try_from(cbor: CBOR) -> Result<Self> {
        if let Ok(v) = InfinityValue::try_from(cbor.clone()) {
            return Ok(Self::Infinity(v));
        }
        match NanValue::try_from(cbor) {
            Ok(v) => Ok(Self::Nan(v)),
            Err(dcbor::Error::WrongTag(..) | dcbor::Error::WrongType) => {
                Err(Error::NotAnExtreme)
            }
            Err(err) => Err(Error::Cbor(err)),
        }
    }
}

impl fmt::Display for Extreme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Infinity(v) => fmt::Display::fmt(v, f),
            Self::Nan(v) => fmt::Display::fmt(v, f),
        }
    }
}
