use mathplus::primitives::{U128, U256, U1024};
use proptest::prelude::*;

fn u256() -> impl Strategy<Value = U256> {
    prop::array::uniform8(any::<u32>()).prop_map(U256::from_limbs)
}

fn u128_native() -> impl Strategy<Value = u128> {
    any::<u128>()
}

proptest! {
    #[test]
    fn add_then_sub_restores(a in u256(), b in u256()) {
        prop_assert_eq!((a + b) - b, a);
    }

    #[test]
    fn identities(a in u256()) {
        prop_assert_eq!(a * U256::ONE, a);
        prop_assert_eq!(a + U256::ZERO, a);
        prop_assert_eq!(a & a, a);
        prop_assert_eq!(a | U256::ZERO, a);
        prop_assert_eq!(a ^ a, U256::ZERO);
    }

    #[test]
    fn addition_commutes(a in u256(), b in u256()) {
        prop_assert_eq!(a + b, b + a);
        prop_assert_eq!(a * b, b * a);
    }

    #[test]
    fn division_identity(a in u256(), b in u256()) {
        prop_assume!(!b.is_zero());

        let (q, r) = a.div_rem(b).unwrap();
        prop_assert!(r < b);
        prop_assert_eq!(q * b + r, a);
    }

    #[test]
    fn arithmetic_matches_native(a in u128_native(), b in u128_native()) {
        let (x, y) = (U128::from(a), U128::from(b));

        prop_assert_eq!((x + y).low_u128(), a.wrapping_add(b));
        prop_assert_eq!((x - y).low_u128(), a.wrapping_sub(b));
        prop_assert_eq!((x * y).low_u128(), a.wrapping_mul(b));

        if b != 0 {
            prop_assert_eq!((x / y).low_u128(), a / b);
            prop_assert_eq!((x % y).low_u128(), a % b);
        }
    }

    #[test]
    fn shifts_match_native(a in u128_native(), n in 0u32..128) {
        let x = U128::from(a);

        prop_assert_eq!((x << n).low_u128(), a << n);
        prop_assert_eq!((x >> n).low_u128(), a >> n);
    }

    #[test]
    fn shift_round_trip_keeps_low_bits(a in u256(), n in 0u32..256) {
        let mask = U256::MAX >> n;
        prop_assert_eq!((a << n) >> n, a & mask);
    }

    #[test]
    fn shift_by_width_clears(a in u256()) {
        prop_assert_eq!(a << 256u32, U256::ZERO);
        prop_assert_eq!(a >> 256u32, U256::ZERO);
    }

    #[test]
    fn widen_then_narrow(a in u256()) {
        let wide = U1024::from(a);

        prop_assert_eq!(U256::try_from(wide).unwrap(), a);
        prop_assert_eq!(wide.resize::<8>(), a);
    }

    #[test]
    fn ordering_matches_native(a in u128_native(), b in u128_native()) {
        prop_assert_eq!(U128::from(a).cmp(&U128::from(b)), a.cmp(&b));
    }

    #[test]
    fn display_matches_native(a in u128_native()) {
        prop_assert_eq!(U128::from(a).to_string(), a.to_string());
        prop_assert_eq!(format!("{:x}", U128::from(a)), format!("{a:x}"));
    }
}
