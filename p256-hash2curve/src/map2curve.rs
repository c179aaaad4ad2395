//! Constant-time simplified Shallue-van de Woestijne-Ulas map for secp256r1.
//!
//! <https://www.rfc-editor.org/rfc/rfc9380.html#name-simplified-shallue-van-de-w>

#[cfg(test)]
mod reference;

use crate::{
    AffinePoint, Error, FieldElement, Result,
    arithmetic::{
        EQUATION_A, EQUATION_B, affine_from_fraction,
        field::{invert_unchecked, pow_p_minus_3_div_4, sqrt_ratio},
    },
};
use elliptic_curve::subtle::{Choice, ConditionallySelectable};

/// Trait for determining the parity of the field
pub trait Sgn0 {
    /// Return the parity of the field
    /// 1 == negative
    /// 0 == non-negative
    fn sgn0(&self) -> Choice;
}

impl Sgn0 for FieldElement {
    fn sgn0(&self) -> Choice {
        self.is_odd()
    }
}

/// Trait for converting field elements into a point via a mapping method like
/// Simplified Shallue-van de Woestijne-Ulas.
pub trait MapToCurve {
    /// The output point
    type Output;

    /// Map a field element into a point.
    fn map_to_curve(&self) -> Self::Output;
}

/// Constants of the simplified SWU map for `y² = x³ + Ax + B`.
#[derive(Clone, Copy, Debug)]
pub struct OsswuMapParams {
    /// Curve A coefficient
    pub map_a: FieldElement,
    /// Curve B coefficient
    pub map_b: FieldElement,
    /// The Z parameter, a non-square with `g(B / (Z·A))` square
    pub z: FieldElement,
    /// `-B / A`
    pub c1: FieldElement,
    /// `B / (Z·A)`, the abscissa used when `Z²u⁴ + Zu² = 0`
    pub c2: FieldElement,
    /// `sqrt(-Z³)`
    pub c3: FieldElement,
}

const Z: FieldElement = FieldElement::neg(&FieldElement::from_u64(10));

/// Parameters for P-256 with `Z = -10`.
pub const PARAMS: OsswuMapParams = OsswuMapParams {
    map_a: EQUATION_A,
    map_b: EQUATION_B,
    z: Z,
    // -B / A = B / 3
    c1: FieldElement::multiply(&EQUATION_B, &invert_unchecked(&FieldElement::from_u64(3))),
    // B / (Z·A) = B / 30
    c2: FieldElement::multiply(&EQUATION_B, &invert_unchecked(&FieldElement::from_u64(30))),
    // sqrt(1000) = 1000^((p + 1) / 4)
    c3: FieldElement::multiply(
        &pow_p_minus_3_div_4(&FieldElement::from_u64(1000)),
        &FieldElement::from_u64(1000),
    ),
};

impl MapToCurve for FieldElement {
    type Output = AffinePoint;

    /// Runs a fixed sequence of field operations whatever `self` is. The
    /// abscissa stays a fraction `xn / xd` until the final step, which spends
    /// the map's only inversion.
    fn map_to_curve(&self) -> AffinePoint {
        let u = self;
        let params = &PARAMS;

        // 1.  e0 = sgn0(u)
        let sgn0_u = u.sgn0();
        // 2.  u2 = u^2, zu2 = Z * u2
        let u2 = u.square();
        let zu2 = params.z * u2;
        // 3.  t1 = Z^2 * u^4 + Z * u^2
        let t1 = zu2.square() + zu2;
        // 4.  x1 = -B/A * (1 + 1/t1), or B/(Z*A) when t1 == 0
        let t1_is_zero = t1.is_zero();
        let x1n = FieldElement::conditional_select(
            &(params.c1 * (t1 + FieldElement::ONE)),
            &params.c2,
            t1_is_zero,
        );
        let xd = FieldElement::conditional_select(&t1, &FieldElement::ONE, t1_is_zero);
        // 5.  gx1 = N / D with D = xd^3, N = x1n^3 + A * x1n * xd^2 + B * xd^3
        let xd2 = xd.square();
        let gx1d = xd2 * xd;
        let gx1n = x1n * (x1n.square() + params.map_a * xd2) + params.map_b * gx1d;
        // 6.  x2 = Z * u^2 * x1, over the same denominator
        let x2n = zu2 * x1n;
        // 7.  y1 = sqrt(gx1), or sqrt(-gx1) if gx1 is not square
        let (gx1_is_square, y1) = sqrt_ratio(&gx1n, &gx1d);
        // 8.  y2 = sqrt(gx2) = sqrt(-Z^3) * u^3 * y1, since gx2 = Z^3 * u^6 * gx1
        let y2 = params.c3 * u2 * u * y1;
        // 9.  (xn, y) = gx1 square ? (x1n, y1) : (x2n, y2)
        let xn = FieldElement::conditional_select(&x2n, &x1n, gx1_is_square);
        let y = FieldElement::conditional_select(&y2, &y1, gx1_is_square);
        // 10. fix the sign so that sgn0(y) == sgn0(u)
        let y = FieldElement::conditional_select(&y, &-y, sgn0_u ^ y.sgn0());
        // 11. (x, y) = (xn / xd, y)
        affine_from_fraction(&xn, &y, &xd)
    }
}

/// Maps a 32-byte big-endian field element to a curve point.
///
/// # Errors
/// [`Error::InvalidFieldEncoding`] if `bytes` is not 32 bytes long or
/// encodes a value `>= p`.
pub fn map_to_curve(bytes: &[u8]) -> Result<AffinePoint> {
    let u = FieldElement::from_slice(bytes).map_err(|_| Error::InvalidFieldEncoding)?;
    Ok(u.map_to_curve())
}
