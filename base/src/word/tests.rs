use super::{ConversionFailed, Unsigned2Bit, Unsigned3Bit};

#[test]
fn test_unsigned2bit_max() {
    assert_eq!(Unsigned2Bit::MAX.bits, 0b11);
}

#[test]
fn test_unsigned2bit_min() {
    assert_eq!(Unsigned2Bit::MIN.bits, 0);
}

#[test]
fn test_unsigned3bit_max() {
    assert_eq!(Unsigned3Bit::MAX.bits, 0b111);
}

#[test]
fn test_try_from_u8() {
    assert_eq!(Unsigned2Bit::try_from(0_u8), Ok(Unsigned2Bit { bits: 0 }));
    assert_eq!(Unsigned2Bit::try_from(3_u8), Ok(Unsigned2Bit { bits: 3 }));
    assert_eq!(Unsigned2Bit::try_from(4_u8), Err(ConversionFailed::TooLarge));
    assert_eq!(Unsigned2Bit::try_from(255_u8), Err(ConversionFailed::TooLarge));
    assert_eq!(Unsigned3Bit::try_from(7_u8), Ok(Unsigned3Bit { bits: 7 }));
    assert_eq!(Unsigned3Bit::try_from(8_u8), Err(ConversionFailed::TooLarge));
}

#[test]
fn test_try_from_signed() {
    assert_eq!(Unsigned2Bit::try_from(2_i8), Ok(Unsigned2Bit { bits: 2 }));
    assert_eq!(Unsigned2Bit::try_from(-1_i8), Err(ConversionFailed::TooSmall));
    assert_eq!(Unsigned2Bit::try_from(-1_i64), Err(ConversionFailed::TooSmall));
    assert_eq!(
        Unsigned2Bit::try_from(i64::MIN),
        Err(ConversionFailed::TooSmall)
    );
    assert_eq!(
        Unsigned2Bit::try_from(i64::MAX),
        Err(ConversionFailed::TooLarge)
    );
    assert_eq!(Unsigned2Bit::try_from(256_i32), Err(ConversionFailed::TooLarge));
}

#[test]
fn test_round_tripping() {
    for i in 0..=3_u32 {
        let w = Unsigned2Bit::try_from(i).expect("test data should be in range");
        assert_eq!(u32::from(w), i, "round trip failed for {i}");
    }
    for i in 0..=7_i16 {
        let w = Unsigned3Bit::try_from(i).expect("test data should be in range");
        assert_eq!(i16::from(w), i, "round trip failed for {i}");
    }
}

#[test]
fn test_from_bits() {
    assert_eq!(Unsigned2Bit::from_bits(false, false), 0_u8);
    assert_eq!(Unsigned2Bit::from_bits(false, true), 1_u8);
    assert_eq!(Unsigned2Bit::from_bits(true, false), 2_u8);
    assert_eq!(Unsigned2Bit::from_bits(true, true), 3_u8);
}

#[test]
fn test_bit() {
    let two = Unsigned2Bit::from_bits(true, false);
    assert!(!two.bit(0));
    assert!(two.bit(1));
    // Beyond the word width.
    assert!(!Unsigned2Bit::MAX.bit(2));
    assert!(!Unsigned2Bit::MAX.bit(31));
    assert!(Unsigned3Bit::MAX.bit(2));
}

#[test]
fn test_all() {
    let values: Vec<u8> = Unsigned2Bit::all().map(u8::from).collect();
    assert_eq!(values, vec![0, 1, 2, 3]);
    assert_eq!(Unsigned3Bit::all().count(), 8);
}

#[test]
fn test_truncate() {
    assert_eq!(Unsigned2Bit::truncate(0b1110), 0b10_u8);
    assert_eq!(Unsigned3Bit::truncate(0xFF), 0b111_u8);
}

#[test]
fn test_not() {
    assert_eq!(!Unsigned2Bit::ZERO, Unsigned2Bit::MAX);
    assert_eq!(!Unsigned2Bit::from_bits(true, false), 1_u8);
    assert_eq!(!Unsigned3Bit::ONE, 0b110_u8);
}

#[test]
fn test_bitwise() {
    let a = Unsigned2Bit::from_bits(true, true);
    let b = Unsigned2Bit::from_bits(false, true);
    assert_eq!(a & b, 1_u8);
    assert_eq!(a | b, 3_u8);
    assert_eq!(a ^ b, 2_u8);
}

#[test]
fn test_overflowing_add() {
    assert_eq!(
        Unsigned2Bit::MAX.overflowing_add(Unsigned2Bit::ONE),
        (Unsigned2Bit::ZERO, true)
    );
    assert_eq!(
        Unsigned2Bit::ONE.overflowing_add(Unsigned2Bit::ONE),
        (Unsigned2Bit { bits: 2 }, false)
    );
    assert_eq!(
        Unsigned2Bit::MAX.overflowing_add(Unsigned2Bit::MAX),
        (Unsigned2Bit { bits: 2 }, true)
    );
}

#[test]
fn test_wrapping_add() {
    assert_eq!(Unsigned2Bit::MAX.wrapping_add(Unsigned2Bit::ONE), 0_u8);
    assert_eq!(Unsigned2Bit::MAX.wrapping_add(Unsigned2Bit::MAX), 2_u8);
    assert_eq!(Unsigned3Bit::MAX.wrapping_add(Unsigned3Bit::ONE), 0_u8);
    // Adding the complement plus one is subtraction.
    assert_eq!(
        Unsigned2Bit::ONE.wrapping_add((!Unsigned2Bit::MAX).wrapping_add(Unsigned2Bit::ONE)),
        Unsigned2Bit { bits: 2 }
    );
}

#[test]
fn test_formatting() {
    let w = Unsigned2Bit::ONE;
    assert_eq!(format!("{w}"), "1");
    assert_eq!(format!("{w:b}"), "01");
    assert_eq!(format!("{w:?}"), "Unsigned2Bit{bits: 0b1}");
    assert_eq!(format!("{:b}", Unsigned3Bit::from(w)), "001");
}

#[test]
fn test_serialize() {
    let w = Unsigned2Bit::MAX;
    assert_eq!(serde_json::to_string(&w).expect("serializable"), "3");
}

#[cfg(test)]
mod u2_proptests {
    use super::super::Unsigned2Bit;
    use test_strategy::{proptest, Arbitrary};

    #[derive(Debug, Arbitrary)]
    struct U2SubtractionTestInput {
        #[strategy(0..4u8)]
        greater: u8,
        #[strategy(0..=#greater)]
        lesser: u8,
    }

    #[proptest]
    fn overflowing_add_matches_native_sum(a: Unsigned2Bit, b: Unsigned2Bit) {
        let total = u8::from(a) + u8::from(b);
        let (sum, carry) = a.overflowing_add(b);
        assert_eq!(u8::from(sum), total % 4);
        assert_eq!(carry, total > 3);
    }

    #[proptest]
    fn adding_the_complement_reverses_addition(input: U2SubtractionTestInput) {
        let lesser = Unsigned2Bit::try_from(input.lesser).unwrap();
        let greater = Unsigned2Bit::try_from(input.greater).unwrap();

        let diff = greater.wrapping_add((!lesser).wrapping_add(Unsigned2Bit::ONE));
        assert_eq!(u8::from(diff), input.greater - input.lesser);
        assert_eq!(lesser.wrapping_add(diff), greater);
        assert_eq!(diff.wrapping_add(lesser), greater);
    }

    #[proptest]
    fn arbitrary_values_are_in_range(w: Unsigned2Bit) {
        assert!(u8::from(w) <= 3);
        assert_eq!(!!w, w);
    }
}
