//! Exponentiations and reductions in the secp256r1 base field,
//! `p = 2^256 - 2^224 + 2^192 + 2^96 - 1`, beyond what `p256` exposes.
//!
//! Functions used in constants are `const fn` and call the inherent
//! arithmetic of [`FieldElement`] by path, since the operator traits are not
//! usable in constant evaluation.

use crate::{FieldBytes, FieldElement};
use elliptic_curve::subtle::{Choice, ConstantTimeEq};

/// Bytes of a wide integer accepted by [`from_wide_bytes`].
pub const WIDE_FIELD_BYTES: usize = 48;

/// 2^192 mod p, used to fold the high half of a 48-byte integer.
const F_2_192: FieldElement = {
    let f_2_64 = FieldElement::square(&FieldElement::from_u64(1 << 32));
    FieldElement::multiply(&FieldElement::square(&f_2_64), &f_2_64)
};

/// Squares `x` `n` times.
pub(crate) const fn sqn(x: &FieldElement, n: usize) -> FieldElement {
    let mut x = *x;
    let mut i = 0;
    while i < n {
        x = FieldElement::square(&x);
        i += 1;
    }
    x
}

/// `x^((p - 3) / 4)`.
///
/// Shares its addition chain with inversion.
pub(crate) const fn pow_p_minus_3_div_4(x: &FieldElement) -> FieldElement {
    // xk = x^(2^k - 1)
    let x2 = FieldElement::multiply(&FieldElement::square(x), x);
    let x3 = FieldElement::multiply(&FieldElement::square(&x2), x);
    let x6 = FieldElement::multiply(&sqn(&x3, 3), &x3);
    let x12 = FieldElement::multiply(&sqn(&x6, 6), &x6);
    let x15 = FieldElement::multiply(&sqn(&x12, 3), &x3);
    let x16 = FieldElement::multiply(&FieldElement::square(&x15), x);
    let x32 = FieldElement::multiply(&sqn(&x16, 16), &x16);
    let x47 = FieldElement::multiply(&sqn(&x32, 15), &x15);

    let t = FieldElement::multiply(&sqn(&x32, 32), x);
    let t = FieldElement::multiply(&sqn(&t, 143), &x47);
    FieldElement::multiply(&sqn(&t, 47), &x47)
}

/// `x^(p - 2)`, which maps zero to zero.
pub(crate) const fn invert_unchecked(x: &FieldElement) -> FieldElement {
    // p - 2 = 4 * ((p - 3) / 4) + 1
    FieldElement::multiply(&sqn(&pow_p_minus_3_div_4(x), 2), x)
}

/// Computes a square root of `u / v` without inverting `v`.
///
/// With `root = (u·v³)^((p - 3) / 4) · u·v`, returns `(1, root)` when `u / v`
/// is a square, and otherwise `(0, root)` with `root^2 = -u / v` (-1 is a
/// non-square since p ≡ 3 mod 4). When `v = 0` the result is `(u == 0, 0)`.
pub fn sqrt_ratio(u: &FieldElement, v: &FieldElement) -> (Choice, FieldElement) {
    let uv = u * v;
    let x = uv * v.square();
    let root = pow_p_minus_3_div_4(&x) * uv;
    let is_square = (root.square() * v).ct_eq(u);
    (is_square, root)
}

/// Reduces a 48-byte big-endian integer modulo p.
///
/// The input is split into two 24-byte halves `d0 || d1`, each below 2^192
/// and therefore already in range, and recombined as `d0 * 2^192 + d1`.
pub fn from_wide_bytes(bytes: &[u8; WIDE_FIELD_BYTES]) -> FieldElement {
    let (d0, d1) = bytes.split_at(WIDE_FIELD_BYTES / 2);
    from_half(d0) * F_2_192 + from_half(d1)
}

/// Embeds a 24-byte big-endian integer.
fn from_half(bytes: &[u8]) -> FieldElement {
    let mut repr = FieldBytes::default();
    repr[32 - bytes.len()..].copy_from_slice(bytes);
    FieldElement::from_bytes(&repr).unwrap_or(FieldElement::ZERO)
}

#[cfg(test)]
mod tests {
    use super::{
        F_2_192, WIDE_FIELD_BYTES, from_wide_bytes, invert_unchecked, pow_p_minus_3_div_4, sqn,
        sqrt_ratio,
    };
    use crate::{FieldBytes, FieldElement};
    use hex_literal::hex;
    use proptest::prelude::*;

    /// (p - 3) / 4
    const P_MINUS_3_DIV_4: [u64; 4] = [
        0xffffffffffffffff,
        0x000000003fffffff,
        0x4000000000000000,
        0x3fffffffc0000000,
    ];

    /// p - 2
    const P_MINUS_2: [u64; 4] = [
        0xfffffffffffffffd,
        0x00000000ffffffff,
        0x0000000000000000,
        0xffffffff00000001,
    ];

    /// Evaluated at compile time.
    const NEG_ONE: FieldElement = FieldElement::neg(&FieldElement::ONE);
    const INV_THREE: FieldElement = invert_unchecked(&FieldElement::from_u64(3));

    /// Byte-at-a-time reduction using only field multiplication and addition.
    fn horner(bytes: &[u8]) -> FieldElement {
        let radix = FieldElement::from_u64(256);
        bytes.iter().fold(FieldElement::ZERO, |acc, &byte| {
            acc * radix + FieldElement::from_u64(byte.into())
        })
    }

    fn wide(bytes: &[u8]) -> [u8; WIDE_FIELD_BYTES] {
        bytes.try_into().unwrap()
    }

    #[test]
    fn const_evaluation() {
        assert_eq!(NEG_ONE + FieldElement::ONE, FieldElement::ZERO);
        assert_eq!(INV_THREE * FieldElement::from_u64(3), FieldElement::ONE);
        assert_eq!(F_2_192, FieldElement::from_u64(2).pow_vartime(&[192]));
    }

    #[test]
    fn repeated_squaring() {
        let two = FieldElement::from_u64(2);
        assert_eq!(sqn(&two, 0), two);
        assert_eq!(sqn(&two, 3), FieldElement::from_u64(256));
        assert_eq!(sqn(&two, 8), two.pow_vartime(&[256]));
    }

    #[test]
    fn addition_chain() {
        let x = FieldElement::from_u64(0x1234_5678_9abc_def0);
        assert_eq!(pow_p_minus_3_div_4(&x), x.pow_vartime(&P_MINUS_3_DIV_4));
        assert_eq!(invert_unchecked(&x), x.pow_vartime(&P_MINUS_2));
        assert_eq!(invert_unchecked(&x), x.invert().unwrap());
        assert_eq!(invert_unchecked(&FieldElement::ZERO), FieldElement::ZERO);
    }

    #[test]
    fn sqrt_ratio_square() {
        let u = FieldElement::from_u64(12);
        let v = FieldElement::from_u64(3);
        let (is_square, root) = sqrt_ratio(&u, &v);
        assert!(bool::from(is_square));
        assert_eq!(root.square() * v, u);
    }

    #[test]
    fn sqrt_ratio_non_square() {
        // 6 is the multiplicative generator, hence a non-square
        let u = FieldElement::from_u64(6);
        let v = FieldElement::from_u64(5);
        let (is_square, root) = sqrt_ratio(&u, &v);
        assert!(!bool::from(is_square));
        assert_eq!(root.square() * v, -u);
    }

    #[test]
    fn sqrt_ratio_zero_denominator() {
        let (is_square, root) = sqrt_ratio(&FieldElement::ONE, &FieldElement::ZERO);
        assert!(!bool::from(is_square));
        assert_eq!(root, FieldElement::ZERO);

        let (is_square, root) = sqrt_ratio(&FieldElement::ZERO, &FieldElement::ZERO);
        assert!(bool::from(is_square));
        assert_eq!(root, FieldElement::ZERO);
    }

    #[test]
    fn sqrt_ratio_zero_numerator() {
        let (is_square, root) = sqrt_ratio(&FieldElement::ZERO, &FieldElement::from_u64(7));
        assert!(bool::from(is_square));
        assert_eq!(root, FieldElement::ZERO);
    }

    #[test]
    fn wide_reduction() {
        let mut bytes = [0u8; 48];
        for (i, byte) in bytes[16..].iter_mut().enumerate() {
            *byte = i as u8;
        }
        assert_eq!(
            from_wide_bytes(&bytes).to_bytes(),
            FieldBytes::from(hex!(
                "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f"
            ))
        );

        let mut bytes = [0u8; 48];
        bytes[15] = 1;
        assert_eq!(
            from_wide_bytes(&bytes).to_bytes(),
            FieldBytes::from(hex!(
                "00000000fffffffeffffffffffffffffffffffff000000000000000000000001"
            ))
        );

        assert_eq!(
            from_wide_bytes(&[0x01; 48]).to_bytes(),
            FieldBytes::from(hex!(
                "fffffffefefefefffefefefefefefeff01010102030303030303030302020201"
            ))
        );

        assert_eq!(
            from_wide_bytes(&[0xff; 48]).to_bytes(),
            FieldBytes::from(hex!(
                "fffffffe00000001000000000000000200000002fffffffffffffffefffffffd"
            ))
        );
    }

    proptest! {
        #[test]
        fn wide_reduction_matches_horner(bytes in prop::collection::vec(any::<u8>(), 48)) {
            prop_assert_eq!(from_wide_bytes(&wide(&bytes)), horner(&bytes));
        }

        #[test]
        fn sqrt_ratio_agrees_with_sqrt(
            u in prop::collection::vec(any::<u8>(), 48),
            v in prop::collection::vec(any::<u8>(), 48),
        ) {
            let u = from_wide_bytes(&wide(&u));
            let v = from_wide_bytes(&wide(&v));
            prop_assume!(!bool::from(v.is_zero()));

            let (is_square, root) = sqrt_ratio(&u, &v);
            let ratio = u * v.invert().unwrap();
            prop_assert_eq!(bool::from(is_square), bool::from(ratio.sqrt().is_some()));
            let expected = if bool::from(is_square) { ratio } else { -ratio };
            prop_assert_eq!(root.square(), expected);
        }
    }
}
