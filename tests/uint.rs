use mathplus::error::ArithmeticError;
use mathplus::primitives::{U128, U256, U512, U1024, Uint};

use core::convert::TryFrom;

#[test]
fn constants() {
    assert_eq!(U128::BITS, 128);
    assert_eq!(U1024::LIMBS, 32);
    assert_eq!(U256::ZERO, U256::from(0u8));
    assert_eq!(U256::ONE, U256::from(1u8));
    assert_eq!(U512::MAX, U512::from_limbs([u32::MAX; 16]));
    assert_eq!(U128::default(), U128::ZERO);
}

#[test]
fn limb_accessor_is_zero_out_of_range() {
    let a = U128::from_limbs([1, 2, 3, 4]);

    assert_eq!(a.limb(0), 1);
    assert_eq!(a.limb(3), 4);
    assert_eq!(a.limb(4), 0);
    assert_eq!(a.limb(usize::MAX), 0);
}

#[test]
fn ordering_is_numeric() {
    let small = U256::from(u64::MAX);
    let large = U256::ONE << 64u32;

    assert!(small < large);
    assert!(large > small);
    assert!(U256::ZERO <= U256::ZERO);
    assert_eq!(small.max(large), large);
}

#[test]
fn display_u64_max() {
    assert_eq!(U128::from(u64::MAX).to_string(), "18446744073709551615");
}

#[test]
fn display_zero_and_two_pow_32() {
    assert_eq!(U128::ZERO.to_string(), "0");
    assert_eq!((U128::ONE << 32u32).to_string(), "4294967296");
}

#[test]
fn display_u128_max() {
    assert_eq!(U128::MAX.to_string(), u128::MAX.to_string());
}

#[test]
fn display_u1024_max() {
    assert_eq!(
        U1024::MAX.to_string(),
        "179769313486231590772930519078902473361797697894230657273430081157732675805500963132708477322407536021120113879871393357658789768814416622492847430639474124377767893424865485276302219601246094119453082952085005768838150682342462881473913110540827237163350510684586298239947245938479716304835356329624224137215"
    );
}

#[test]
fn display_around_powers_of_ten() {
    let ten = U256::from(10u8);
    let mut power = U256::ONE;

    // 10^77 is the largest power of ten below 2^256.
    for k in 1..=77 {
        power = power * ten;

        assert_eq!(power.to_string(), format!("1{}", "0".repeat(k)));
        assert_eq!((power - U256::ONE).to_string(), "9".repeat(k));
        assert_eq!((power + U256::ONE).to_string(), format!("1{}1", "0".repeat(k - 1)));
    }
}

#[test]
fn display_honours_width() {
    assert_eq!(format!("{:>6}", U256::from(42u8)), "    42");
    assert_eq!(format!("{:06}", U256::from(42u8)), "000042");
}

#[test]
fn hex_formatting() {
    let a = U256::from(0x1_0000_00ABu64);

    assert_eq!(format!("{a:x}"), "1000000ab");
    assert_eq!(format!("{a:X}"), "1000000AB");
    assert_eq!(format!("{a:#x}"), "0x1000000ab");
    assert_eq!(format!("{:x}", U256::ZERO), "0");
}

#[test]
fn division_by_zero_is_an_error() {
    let five = U128::from(5u8);

    assert_eq!(five.div_rem(U128::ZERO), Err(ArithmeticError::DivisionByZero));
    assert_eq!(five.checked_div(U128::ZERO), None);
    assert_eq!(five.checked_rem(U128::ZERO), None);
}

#[test]
#[should_panic(expected = "division by zero")]
fn division_operator_panics_on_zero() {
    let _ = U128::from(5u8) / U128::ZERO;
}

#[test]
#[should_panic(expected = "division by zero")]
fn remainder_operator_panics_on_zero() {
    let _ = U128::from(5u8) % U128::ZERO;
}

#[test]
fn remainder_of_small_values() {
    assert_eq!(U256::from(300u16) % U256::from(7u8), U256::from(6u8));
    assert_eq!(U256::from(300u16) / U256::from(7u8), U256::from(42u8));
}

#[test]
fn division_matches_native_u128() {
    let pairs = [
        (u128::MAX, 3u128),
        (0x0123_4567_89AB_CDEF_FEDC_BA98_7654_3210, 0xFFFF_FFFF_FFFF),
        (1 << 100, (1 << 50) + 1),
        (12345, 12346),
        (99, 99),
    ];

    for (n, d) in pairs {
        let (q, r) = U128::from(n).div_rem(U128::from(d)).unwrap();
        assert_eq!(q.low_u128(), n / d, "{n} / {d}");
        assert_eq!(r.low_u128(), n % d, "{n} % {d}");
    }
}

#[test]
fn division_identity_at_1024_bits() {
    let a = (U1024::from(u128::MAX) << 700u32) | U1024::from(0xDEAD_BEEFu32);
    let b = (U1024::from(0x1234_5678_9ABCu64) << 300u32) + U1024::from(17u8);

    let (q, r) = a.div_rem(b).unwrap();
    assert!(r < b);
    assert_eq!(q * b + r, a);
}

#[test]
fn compound_division() {
    let mut a = U512::from(1000u16);
    a /= U512::from(9u8);
    assert_eq!(a, U512::from(111u8));

    a %= U512::from(10u8);
    assert_eq!(a, U512::ONE);
}

#[test]
fn addition_wraps() {
    assert_eq!(U128::MAX + U128::ONE, U128::ZERO);
    assert_eq!(U128::MAX.overflowing_add(U128::ONE), (U128::ZERO, true));
    assert_eq!(U128::MAX.checked_add(U128::ONE), None);
}

#[test]
fn addition_carries_across_limbs() {
    let a = U256::from(u32::MAX);
    assert_eq!(a + U256::ONE, U256::ONE << 32u32);
}

#[test]
fn subtraction_wraps() {
    assert_eq!(U256::ZERO - U256::ONE, U256::MAX);
    assert_eq!(U256::ZERO.overflowing_sub(U256::ONE), (U256::MAX, true));
    assert_eq!(U256::ONE.checked_sub(U256::from(2u8)), None);
    assert_eq!(U256::from(10u8) - U256::from(3u8), U256::from(7u8));
}

#[test]
fn subtraction_borrows_across_limbs() {
    let a = U128::ONE << 64u32;
    assert_eq!(a - U128::ONE, U128::from(u64::MAX));
}

#[test]
fn multiplication_matches_native() {
    let a = 0xFFFF_FFFF_FFFF_FFFFu128;
    let b = 0x1_0000_0001u128;

    assert_eq!((U128::from(a) * U128::from(b)).low_u128(), a.wrapping_mul(b));
}

#[test]
fn multiplication_wraps() {
    let half = U128::ONE << 64u32;

    assert_eq!(half * half, U128::ZERO);
    assert_eq!(half.overflowing_mul(half), (U128::ZERO, true));
    assert_eq!(half.checked_mul(half), None);
    assert_eq!(U128::MAX * U128::MAX, U128::ONE);
}

#[test]
fn compound_arithmetic() {
    let mut a = U256::from(5u8);
    a += U256::from(10u8);
    a -= U256::from(3u8);
    a *= U256::from(4u8);

    assert_eq!(a, U256::from(48u8));
}

#[test]
fn bitwise_operators() {
    let a = U128::from(0b1100u8);
    let b = U128::from(0b1010u8);

    assert_eq!(a & b, U128::from(0b1000u8));
    assert_eq!(a | b, U128::from(0b1110u8));
    assert_eq!(a ^ b, U128::from(0b0110u8));
    assert_eq!(!U128::ZERO, U128::MAX);

    let mut c = a;
    c &= b;
    c |= U128::ONE;
    c ^= U128::from(0b1001u8);
    assert_eq!(c, U128::ZERO);
}

#[test]
fn shifts_cross_limb_boundaries() {
    let a = U128::from(0x8000_0001u32);

    assert_eq!(a << 1u32, U128::from(0x1_0000_0002u64));
    assert_eq!((a << 1u32) >> 1u32, a);
    assert_eq!(U128::ONE << 127u32, U128::from_limbs([0x8000_0000, 0, 0, 0]));
    assert_eq!(U128::from_limbs([0x8000_0000, 0, 0, 0]) >> 127u32, U128::ONE);
}

#[test]
fn shift_by_limb_multiples() {
    let a = U256::from(0xABCDu16);

    assert_eq!((a << 64u32).limb(5), 0xABCD);
    assert_eq!((a << 64u32) >> 64u32, a);
    assert_eq!(a << 0u32, a);
    assert_eq!(a >> 0u32, a);
}

#[test]
fn shift_by_width_or_more_is_zero() {
    assert_eq!(U128::MAX << 128u32, U128::ZERO);
    assert_eq!(U128::MAX >> 128u32, U128::ZERO);
    assert_eq!(U512::MAX << 1000usize, U512::ZERO);
    assert_eq!(U512::MAX >> 1000usize, U512::ZERO);
}

#[test]
fn shift_round_trip_clears_top_bits() {
    let n = 40u32;
    let back = (U128::MAX << n) >> n;

    assert_eq!(back.leading_zeros(), n);
    assert_eq!(back, U128::MAX >> n);
}

#[test]
fn compound_shifts() {
    let mut a = U256::ONE;
    a <<= 100u32;
    assert!(a.bit(100));
    assert_eq!(a.bits(), 101);

    a >>= 99usize;
    assert_eq!(a, U256::from(2u8));
}

#[test]
fn leading_zeros_and_bits() {
    assert_eq!(U256::ZERO.leading_zeros(), 256);
    assert_eq!(U256::ZERO.bits(), 0);
    assert_eq!(U256::ONE.leading_zeros(), 255);
    assert_eq!(U256::MAX.leading_zeros(), 0);
    assert_eq!(U256::from(u64::MAX).bits(), 64);
}

#[test]
fn widening_zero_extends() {
    let a = U128::from(0xDEAD_BEEFu32);

    assert_eq!(U256::from(a), U256::from(0xDEAD_BEEFu32));
    assert_eq!(U1024::from(U512::MAX).leading_zeros(), 512);
}

#[test]
fn narrowing_truncates() {
    let a = (U256::ONE << 200u32) + U256::from(5u8);
    let narrow: U128 = a.resize();

    assert_eq!(narrow, U128::from(5u8));
    assert_eq!(a.low_u64(), 5);
    assert_eq!(a.low_u32(), 5);
}

#[test]
fn checked_narrowing() {
    let fits = U512::from(u128::MAX);
    assert_eq!(U128::try_from(fits), Ok(U128::MAX));

    let too_big = (U256::ONE << 200u32) + U256::from(5u8);
    assert_eq!(U128::try_from(too_big), Err(ArithmeticError::Overflow));
}

#[test]
fn widen_then_narrow_round_trips() {
    let x = U256::from_limbs([9, 8, 7, 6, 5, 4, 3, 2]);

    assert_eq!(U256::try_from(U1024::from(x)), Ok(x));
    assert_eq!(U1024::from(x).resize::<8>(), x);
}

#[test]
fn native_conversions() {
    let a = U512::from(0x12u8);
    assert_eq!(u8::try_from(a), Ok(0x12));

    let a = U512::from(0x0123_4567_89AB_CDEFu64);
    assert_eq!(u64::try_from(a), Ok(0x0123_4567_89AB_CDEF));
    assert!(u32::try_from(a).is_err());

    let a = U512::from(u128::MAX);
    assert_eq!(u128::try_from(a), Ok(u128::MAX));
    assert!(u128::try_from(a + U512::ONE).is_err());

    assert_eq!(usize::try_from(U256::from(7usize)), Ok(7));
}

#[test]
fn limb_array_conversions() {
    let limbs = [0u32, 0, 1, 2];
    let a = U128::from(limbs);

    assert_eq!(a, U128::from((1u64 << 32) | 2));
    assert_eq!(<[u32; 4]>::from(a), limbs);
    assert_eq!(a.as_ref(), &limbs[..]);
    assert_eq!(a.limbs(), &limbs);
}

#[test]
fn generic_over_width() {
    fn double<const L: usize>(x: Uint<L>) -> Uint<L> {
        x + x
    }

    assert_eq!(double(U128::from(21u8)), U128::from(42u8));
    assert_eq!(double(U1024::ONE << 1022u32), U1024::ONE << 1023u32);
}

#[test]
fn num_traits_identities() {
    use num_traits::{One, Zero};

    assert!(<U256 as Zero>::is_zero(&U256::zero()));
    assert_eq!(U256::one(), U256::ONE);
}
