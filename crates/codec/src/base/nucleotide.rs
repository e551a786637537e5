use core::fmt;

use serde::{Deserialize, Serialize};

/// A DNA nucleotide base.
///
/// The discriminants double as the 2-bit code used by the direct mapping
/// (A=0b00, C=0b01, G=0b10, T=0b11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Nucleotide {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
}

impl Nucleotide {
    /// Base for a 2-bit value. Only the low two bits are used.
    #[inline(always)]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Self::A,
            1 => Self::C,
            2 => Self::G,
            _ => Self::T,
        }
    }

    /// The 2-bit value of this base.
    #[inline(always)]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Parse an ASCII symbol, accepting lowercase.
    #[inline]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'A' | b'a' => Some(Self::A),
            b'C' | b'c' => Some(Self::C),
            b'G' | b'g' => Some(Self::G),
            b'T' | b't' => Some(Self::T),
            _ => None,
        }
    }

    /// Uppercase ASCII symbol.
    #[inline(always)]
    pub const fn to_ascii(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::C => b'C',
            Self::G => b'G',
            Self::T => b'T',
        }
    }

    /// Return true for the bases that carry a `1` in the one-bit-per-base
    /// scheme (G and T).
    #[inline(always)]
    pub const fn is_high(self) -> bool {
        matches!(self, Self::G | Self::T)
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_ascii() as char)
    }
}
