//! Sign-Preserving Bridge for IEEE‑754 Infinities and NaNs in dCBOR
//!
//! The typed value model treats sign as an explicit attribute of both
//! infinities and NaNs. The host float domain keeps the sign of an infinity
//! but not of a NaN: a NaN never equals itself, and dCBOR reduces every NaN
//! to the single canonical `f97e00`.
//!
//! [`InfinityValue`] maps to the host's `f64::INFINITY` and
//! `f64::NEG_INFINITY`. [`NanValue`] maps to one of two identity-compared
//! sentinels, [`POSITIVE_NAN`] and [`NEGATIVE_NAN`], which never coincide
//! with a computed NaN. Decoding only accepts what encoding produces; NaN
//! payload bits are not preserved.

mod sign;
pub use sign::*;
mod infinity;
pub use infinity::*;
mod nan;
pub use nan::*;
mod extreme;
pub use extreme::*;
mod error;
pub use error::*;
