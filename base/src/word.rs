//! Unsigned fixed-width words.  The ALU's operands and result are
//! two bits wide and its operation selector is three bits wide.
//! Both are stored in a `u8`, and every operation on them keeps the
//! unused high-order bits of that `u8` clear.

use std::fmt::{self, Binary, Debug, Display, Formatter};

use serde::Serialize;
use test_strategy::Arbitrary;

use super::error::ConversionFailed;

#[cfg(test)]
mod tests;

/// This macro implements conversions from the word types to native
/// types which are always possible (e.g. From<Unsigned2Bit> for i8).
macro_rules! from_self_to_native_type {
    ($SelfT:ty, $($to:ty)*) => {
        $(
            impl From<$SelfT> for $to {
                fn from(n: $SelfT) -> $to {
                    // n.bits never exceeds 7, so it fits in every
                    // native integer type; the compiler just doesn't
                    // know that.
                    n.bits as $to
                }
            }
        )*
    }
}

/// This macro implements conversions from native types to the word
/// types, all of which may fail (e.g. TryFrom<i64> for
/// Unsigned2Bit).
macro_rules! try_from_native_type_to_self {
    ($SelfT:ty, $($from:ty)*) => {
        $(
            impl TryFrom<$from> for $SelfT {
                type Error = ConversionFailed;
                // This macro is also used for unsigned source types,
                // where `n < 0` is always false.
                #[allow(unused_comparisons)]
                fn try_from(n: $from) -> Result<Self, ConversionFailed> {
                    let bits: u8 = match u8::try_from(n) {
                        Err(_) => {
                            if n < 0 {
                                return Err(ConversionFailed::TooSmall);
                            } else {
                                return Err(ConversionFailed::TooLarge);
                            }
                        }
                        Ok(value) if value > Self::VALUE_BITS => {
                            return Err(ConversionFailed::TooLarge);
                        }
                        Ok(value) => value,
                    };
                    Ok(Self { bits })
                }
            }
        )*
    }
}

/// This macro implements the base functionality of the word types.
/// `SelfT` is the name of the type we are defining and `BITS` is
/// its width.
macro_rules! unsigned_word_impl {
    ($SelfT:ty, $BITS:expr) => {
        impl $SelfT {
            const MODULUS: u8 = 1 << $BITS;
            const VALUE_BITS: u8 = Self::MODULUS - 1;

            /// The width of the word, in bits.
            pub const BITS: u32 = $BITS;

            pub const MAX: Self = Self {
                bits: Self::VALUE_BITS,
            };
            pub const ZERO: Self = Self { bits: 0 };
            pub const ONE: Self = Self { bits: 1 };
            pub const MIN: Self = Self::ZERO;

            // An out-of-range `N` fails at compile time.  It's pub so
            // that it can be used in u2!() and u3!().
            pub const fn new<const N: u8>() -> $SelfT {
                type Word = $SelfT;
                struct Helper<const M: u8>;
                impl<const M: u8> Helper<M> {
                    const U: Word = {
                        if M > Word::MAX.bits {
                            panic!("input value is out of range")
                        } else {
                            Word {
                                bits: Word::MAX.bits & M,
                            }
                        }
                    };
                }
                Helper::<N>::U
            }

            /// Keeps only the low `BITS` bits of `n`.
            pub const fn truncate(n: u8) -> Self {
                Self {
                    bits: n & Self::VALUE_BITS,
                }
            }

            pub const fn is_zero(&self) -> bool {
                self.bits == 0
            }

            /// Returns the state of bit `n`, where bit 0 is the least
            /// significant.  Bits at or beyond the word width are
            /// always clear.
            pub const fn bit(&self, n: u32) -> bool {
                n < Self::BITS && (self.bits >> n) & 1 != 0
            }

            /// All values of the type, in ascending order.
            pub fn all() -> impl Iterator<Item = Self> {
                (0..=Self::VALUE_BITS).map(|bits| Self { bits })
            }

            /// Adds `rhs`, returning the sum modulo 2^BITS and whether
            /// a carry came out of the top bit.
            pub const fn overflowing_add(self, rhs: $SelfT) -> ($SelfT, bool) {
                let total = self.bits + rhs.bits;
                (
                    Self {
                        bits: total & Self::VALUE_BITS,
                    },
                    total > Self::VALUE_BITS,
                )
            }

            pub const fn wrapping_add(self, rhs: $SelfT) -> $SelfT {
                self.overflowing_add(rhs).0
            }
        }

        impl Default for $SelfT {
            fn default() -> Self {
                Self::ZERO
            }
        }

        impl Display for $SelfT {
            fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
                Display::fmt(&self.bits, f)
            }
        }

        /// Binary output is always zero-padded to the full width of
        /// the word.
        impl Binary for $SelfT {
            fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
                write!(f, "{:0width$b}", self.bits, width = Self::BITS as usize)
            }
        }

        impl Debug for $SelfT {
            fn fmt(&self, f: &mut Formatter) -> fmt::Result {
                write!(f, concat!(stringify!($SelfT), "{{bits: {:#b}}}"), self.bits)
            }
        }

        impl PartialEq<u8> for $SelfT {
            fn eq(&self, other: &u8) -> bool {
                self.bits == *other
            }
        }

        impl std::ops::Not for $SelfT {
            type Output = Self;
            fn not(self) -> Self {
                Self {
                    bits: (!self.bits) & Self::VALUE_BITS,
                }
            }
        }

        impl std::ops::BitAnd for $SelfT {
            type Output = Self;
            fn bitand(self, rhs: Self) -> Self {
                Self {
                    bits: self.bits & rhs.bits,
                }
            }
        }

        impl std::ops::BitOr for $SelfT {
            type Output = Self;
            fn bitor(self, rhs: Self) -> Self {
                Self {
                    bits: self.bits | rhs.bits,
                }
            }
        }

        impl std::ops::BitXor for $SelfT {
            type Output = Self;
            fn bitxor(self, rhs: Self) -> Self {
                Self {
                    bits: self.bits ^ rhs.bits,
                }
            }
        }

        from_self_to_native_type!($SelfT, u8 i8 u16 i16 u32 i32 u64 i64 usize isize);
        try_from_native_type_to_self!($SelfT, u8 i8 u16 i16 u32 i32 u64 i64 usize isize);
    };
}

/// `Unsigned2Bit` is the width of the ALU's operands (A and B) and
/// of its result.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Arbitrary)]
#[serde(transparent)]
pub struct Unsigned2Bit {
    #[strategy(0..4u8)]
    pub(crate) bits: u8,
}

/// `Unsigned3Bit` is the value carried on the ALU's three operation
/// select lines.  Only six of its eight values select an operation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Arbitrary)]
#[serde(transparent)]
pub struct Unsigned3Bit {
    #[strategy(0..8u8)]
    pub(crate) bits: u8,
}

unsigned_word_impl!(Unsigned2Bit, 2);
unsigned_word_impl!(Unsigned3Bit, 3);

impl Unsigned2Bit {
    /// Builds a value from the states of its two bit lines, as a
    /// front end showing one checkbox or lamp per bit would.
    pub const fn from_bits(high: bool, low: bool) -> Unsigned2Bit {
        Unsigned2Bit {
            bits: ((high as u8) << 1) | (low as u8),
        }
    }
}

impl From<Unsigned2Bit> for Unsigned3Bit {
    fn from(n: Unsigned2Bit) -> Self {
        Self { bits: n.bits }
    }
}

impl TryFrom<Unsigned3Bit> for Unsigned2Bit {
    type Error = ConversionFailed;
    fn try_from(n: Unsigned3Bit) -> Result<Self, ConversionFailed> {
        Unsigned2Bit::try_from(n.bits)
    }
}
