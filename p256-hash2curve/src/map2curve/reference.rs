//! Straightforward simplified SWU with two inversions and up to two square
//! roots, following the branching description of the map. Test oracle only.

use super::{PARAMS, Sgn0};
use crate::{AffinePoint, EncodedPoint, FieldElement};
use elliptic_curve::sec1::FromEncodedPoint;

fn g(x: &FieldElement) -> FieldElement {
    (x.square() + PARAMS.map_a) * x + PARAMS.map_b
}

pub(super) fn map_to_curve_simple_swu(u: &FieldElement) -> AffinePoint {
    let zu2 = PARAMS.z * u.square();
    let tv1 = zu2.square() + zu2;

    let x1 = if bool::from(tv1.is_zero()) {
        PARAMS.map_b * (PARAMS.z * PARAMS.map_a).invert().unwrap()
    } else {
        -PARAMS.map_b
            * PARAMS.map_a.invert().unwrap()
            * (FieldElement::ONE + tv1.invert().unwrap())
    };
    let x2 = zu2 * x1;

    let (x, y) = match Option::<FieldElement>::from(g(&x1).sqrt()) {
        Some(y1) => (x1, y1),
        None => (x2, g(&x2).sqrt().unwrap()),
    };

    let y = if bool::from(u.sgn0()) == bool::from(y.sgn0()) {
        y
    } else {
        -y
    };

    let encoded = EncodedPoint::from_affine_coordinates(&x.to_bytes(), &y.to_bytes(), false);
    AffinePoint::from_encoded_point(&encoded).unwrap()
}
