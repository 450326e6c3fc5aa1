use core::fmt;

/// The sign carried by an infinity or a NaN.
///
/// Exactly one of [`Sign::is_positive`] and [`Sign::is_negative`] holds for
/// every value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// Returns true for [`Sign::Positive`].
    pub fn is_positive(self) -> bool { matches!(self, Self::Positive) }

    /// Returns true for [`Sign::Negative`].
    pub fn is_negative(self) -> bool { matches!(self, Self::Negative) }

    /// Maps an IEEE‑754 sign bit (true if set) to a sign.
    pub fn from_sign_bit(bit: bool) -> Self {
        if bit { Self::Negative } else { Self::Positive }
    }

    /// Returns true if this sign sets the IEEE‑754 sign bit.
    pub fn sign_bit(self) -> bool { self.is_negative() }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Positive => "+",
            Self::Negative => "-",
        })
    }
}
