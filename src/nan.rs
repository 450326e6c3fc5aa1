//! Sign-tagged NaNs and the sentinel pair that stands in for them.
//!
//! A host NaN cannot carry the sign through a round trip: it never compares
//! equal to itself, and dCBOR canonicalizes every NaN to `f97e00`. So a
//! [`NanValue`] is never turned into a floating-point NaN. It maps to one of
//! two process-wide markers, [`POSITIVE_NAN`] and [`NEGATIVE_NAN`], which are
//! compared by address only.
//!
//! On the wire a marker is a nan-bstr (tag 102) holding the canonical
//! binary16 quiet NaN with the matching sign bit: `102(h'7e00')` or
//! `102(h'fe00')`. A bare NaN float is not a marker.

use core::{any::Any, fmt, ptr};
use dcbor::prelude::*;
use crate::{Error, Result, Sign};

/// Canonical binary16 quiet NaN without its sign bit.
const CANONICAL_NAN_BITS: u16 = 0x7E00;

/// Opaque sentinel identity for a signed NaN.
///
/// Only the two statics below exist; the type cannot be constructed or
/// cloned outside this module. Equality is identity.
pub struct NanMarker {
    sign: Sign,
}

/// Host encoding of a positive NaN.
pub static POSITIVE_NAN: NanMarker = NanMarker { sign: Sign::Positive };

/// Host encoding of a negative NaN.
pub static NEGATIVE_NAN: NanMarker = NanMarker { sign: Sign::Negative };

impl NanMarker {
    /// Returns the marker for `sign`.
    pub fn for_sign(sign: Sign) -> &'static Self {
        match sign {
            Sign::Positive => &POSITIVE_NAN,
            Sign::Negative => &NEGATIVE_NAN,
        }
    }

    /// Returns the sign this marker stands for.
    pub fn sign(&self) -> Sign { self.sign }

    /// The binary16 bit pattern this marker is transported as.
    pub fn nan_bits(&self) -> u16 {
        CANONICAL_NAN_BITS | (u16::from(self.sign.sign_bit()) << 15)
    }

    /// Resolves the big‑endian nan-bstr content back to its marker.
    ///
    /// Only the canonical binary16 quiet NaN of either sign is accepted; any
    /// other NaN payload, width, or non-NaN pattern is rejected.
    pub fn from_be_bytes(bytes: impl AsRef<[u8]>) -> Result<&'static Self> {
        let b = bytes.as_ref();
        match <[u8; 2]>::try_from(b).map(u16::from_be_bytes) {
            Ok(bits) if bits & 0x7FFF == CANONICAL_NAN_BITS => {
                Ok(Self::for_sign(Sign::from_sign_bit(bits >> 15 == 1)))
            }
            _ => Err(Error::UnrecognizedNanBits(hex::encode(b))),
        }
    }
}

impl PartialEq for NanMarker {
    fn eq(&self, other: &Self) -> bool { ptr::eq(self, other) }
}

impl Eq for NanMarker {}

impl fmt::Debug for NanMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NanMarker({})", self)
    }
}

impl fmt::Display for NanMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}NaN", self.sign)
    }
}

/// A sign-tagged NaN in the typed value model. The payload is not kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NanValue {
    sign: Sign,
}

impl NanValue {
    /// The positive NaN.
    pub const POSITIVE: Self = Self::new(Sign::Positive);
    /// The negative NaN.
    pub const NEGATIVE: Self = Self::new(Sign::Negative);

    /// Construct a NaN with the given sign.
    pub const fn new(sign: Sign) -> Self { Self { sign } }

    /// Returns the sign of this NaN.
    pub fn sign(self) -> Sign { self.sign }

    /// Returns the sentinel standing in for this NaN.
    pub fn to_host(self) -> &'static NanMarker {
        NanMarker::for_sign(self.sign)
    }

    /// Accepts a host value only if it is one of the two sentinels.
    ///
    /// `raw` may be the marker itself or a `&'static NanMarker`. Any `f64`,
    /// including a NaN computed elsewhere, is rejected.
    pub fn from_host(raw: &dyn Any) -> Result<Self> {
        let marker = raw
            .downcast_ref::<NanMarker>()
            .or_else(|| raw.downcast_ref::<&'static NanMarker>().copied());
        match marker {
            Some(m) if ptr::eq(m, &POSITIVE_NAN) => Ok(Self::POSITIVE),
            Some(m) if ptr::eq(m, &NEGATIVE_NAN) => Ok(Self::NEGATIVE),
            _ => {
                tracing::trace!(
                    target: "extremes",
                    "rejected host value as NaN marker"
                );
                Err(Error::NotANanMarker)
            }
        }
    }
}

impl From<NanValue> for &'static NanMarker {
    fn from(value: NanValue) -> Self { value.to_host() }
}

// ───────────────────────── CBOR Tagged Implementation ───────────────────────

impl CBORTagged for NanValue {
    fn cbor_tags() -> Vec<Tag> {
        tags_for_values(&[bc_tags::TAG_NAN_BSTR])
    }
}

impl CBORTaggedEncodable for NanValue {
    fn untagged_cbor(&self) -> CBOR {
        let bytes = self.to_host().nan_bits().to_be_bytes();
        CBOR::from(ByteString::from(bytes.as_slice()))
    }
}

impl CBORTaggedDecodable for NanValue {
    fn from_untagged_cbor(cbor: CBOR) -> dcbor::Result<Self> {
        let bs: ByteString =
            cbor.try_into().map_err(|_| dcbor::Error::WrongType)?;
        let marker = NanMarker::from_be_bytes(bs.data())?;
        Ok(Self::from_host(marker)?)
    }
}

impl From<NanValue> for CBOR {
    fn from(value: NanValue) -> Self {
        value.tagged_cbor()
    }
}

impl TryFrom<CBOR> for NanValue {
    type Error = dcbor::Error;
    fn try_from(cbor: CBOR) -> dcbor::Result<Self> {
        Self::from_tagged_cbor(cbor)
    }
}

impl fmt::Display for NanValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}nan", self.sign)
    }
}
