//! secp256r1 constants and point conversions used by the map, on top of the
//! field and group types of `p256`.

pub(crate) mod field;

use crate::{AffinePoint, EncodedPoint, FieldElement, ProjectivePoint};
use elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use p256::NistP256;
use primeorder::PrimeCurveParams;

/// a = -3
pub(crate) const EQUATION_A: FieldElement = <NistP256 as PrimeCurveParams>::EQUATION_A;

/// b = 0x5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B
pub(crate) const EQUATION_B: FieldElement = <NistP256 as PrimeCurveParams>::EQUATION_B;

/// Size of [`ToUncompressedBytes::to_uncompressed_bytes`] output.
pub const UNCOMPRESSED_POINT_SIZE: usize = 65;

/// Fixed-width SEC1 uncompressed encoding, `0x04 || x || y`.
pub trait ToUncompressedBytes {
    /// Encodes the point. The identity encodes as 65 zero bytes.
    fn to_uncompressed_bytes(&self) -> [u8; UNCOMPRESSED_POINT_SIZE];
}

impl ToUncompressedBytes for AffinePoint {
    fn to_uncompressed_bytes(&self) -> [u8; UNCOMPRESSED_POINT_SIZE] {
        let encoded = self.to_encoded_point(false);
        let sec1 = encoded.as_bytes();
        let mut bytes = [0u8; UNCOMPRESSED_POINT_SIZE];
        bytes[..sec1.len()].copy_from_slice(sec1);
        bytes
    }
}

impl ToUncompressedBytes for ProjectivePoint {
    fn to_uncompressed_bytes(&self) -> [u8; UNCOMPRESSED_POINT_SIZE] {
        self.to_affine().to_uncompressed_bytes()
    }
}

/// Builds the affine point `(xn / xd, y)` with a single inversion.
///
/// Yields the identity if `xd = 0` or the result is not on the curve; the
/// map never produces either.
pub(crate) fn affine_from_fraction(
    xn: &FieldElement,
    y: &FieldElement,
    xd: &FieldElement,
) -> AffinePoint {
    let x = *xn * xd.invert().unwrap_or(FieldElement::ZERO);
    let encoded = EncodedPoint::from_affine_coordinates(&x.to_bytes(), &y.to_bytes(), false);
    AffinePoint::from_encoded_point(&encoded).unwrap_or(AffinePoint::IDENTITY)
}
