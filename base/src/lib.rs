//! The `base` crate defines the fixed-width values which the 2-bit
//! ALU works on (the operands, the result and the operation
//! selector), plus a binary formatter for displaying them.  It has
//! no knowledge of the ALU itself, so a front end which only needs
//! to display or parse values can depend on it alone.

mod error;
mod word;

pub mod binary;
pub mod prelude;
pub use crate::error::ConversionFailed;
pub use crate::word::*;

#[macro_export]
macro_rules! u2 {
    ($n:expr) => {
        $crate::prelude::Unsigned2Bit::new::<{ $n }>()
    };
}

#[macro_export]
macro_rules! u3 {
    ($n:expr) => {
        $crate::prelude::Unsigned3Bit::new::<{ $n }>()
    };
}

#[test]
fn test_u2() {
    use prelude::Unsigned2Bit;
    let m: Unsigned2Bit = u2!(3);
    let n: Unsigned2Bit = Unsigned2Bit::try_from(3_u32).expect("test data should be in range");
    assert_eq!(m, n);
    assert_eq!(m, Unsigned2Bit::MAX);
}

#[test]
fn test_u3() {
    use prelude::Unsigned3Bit;
    let p: Unsigned3Bit = u3!(0b101);
    let q: Unsigned3Bit = Unsigned3Bit::try_from(5_i64).expect("test data should be in range");
    assert_eq!(p, q);
}
