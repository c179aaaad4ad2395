#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Usage
//!
//! ```
//! use p256_hash2curve::{SUITE_ID_RO, ToUncompressedBytes, hash_to_curve};
//!
//! let dst = b"QUUX-V01-CS02-with-P256_XMD:SHA-256_SSWU_RO_";
//! assert!(dst.starts_with(b"QUUX-V01-CS02-with-"));
//! assert!(dst.ends_with(SUITE_ID_RO));
//!
//! let point = hash_to_curve(b"abc", dst)?.to_affine();
//! assert!(!bool::from(point.is_identity()));
//! assert_eq!(point.to_uncompressed_bytes()[0], 0x04);
//! # Ok::<(), p256_hash2curve::Error>(())
//! ```

#[cfg(feature = "alloc")]
extern crate alloc;

mod arithmetic;
mod error;
pub mod hash2field;
pub mod map2curve;

pub use crate::{
    arithmetic::{
        ToUncompressedBytes, UNCOMPRESSED_POINT_SIZE,
        field::{WIDE_FIELD_BYTES, from_wide_bytes, sqrt_ratio},
    },
    error::{Error, Result},
    map2curve::{MapToCurve, Sgn0, map_to_curve},
};
pub use elliptic_curve;
pub use p256::{AffinePoint, EncodedPoint, FieldBytes, FieldElement, NistP256, ProjectivePoint};

use elliptic_curve::group::cofactor::CofactorGroup;

/// Suite identifier of the uniform encoding, for building domain separation tags.
pub const SUITE_ID_RO: &[u8] = b"P256_XMD:SHA-256_SSWU_RO_";

/// Suite identifier of the non-uniform encoding, for building domain separation tags.
pub const SUITE_ID_NU: &[u8] = b"P256_XMD:SHA-256_SSWU_NU_";

/// Hashes `msg` to a point whose distribution is indistinguishable from
/// uniform (`hash_to_curve` of the `P256_XMD:SHA-256_SSWU_RO_` suite).
///
/// # Errors
/// [`Error::DomainTagTooLong`] if `dst` is longer than 255 bytes.
pub fn hash_to_curve(msg: &[u8], dst: &[u8]) -> Result<ProjectivePoint> {
    hash_from_bytes(&[msg], dst)
}

/// Like [`hash_to_curve`] for a message given as the concatenation of
/// several slices.
///
/// # Errors
/// [`Error::DomainTagTooLong`] if `dst` is longer than 255 bytes.
pub fn hash_from_bytes(msg: &[&[u8]], dst: &[u8]) -> Result<ProjectivePoint> {
    let [u0, u1] = hash2field::hash_to_field::<2, WIDE_FIELD_BYTES, FieldElement>(msg, dst)?;
    let q0 = ProjectivePoint::from(u0.map_to_curve());
    let q1 = u1.map_to_curve();
    Ok((q0 + q1).clear_cofactor())
}

/// Encodes `msg` to a point with a single map evaluation
/// (`encode_to_curve` of the `P256_XMD:SHA-256_SSWU_NU_` suite).
///
/// The output covers only part of the curve and is not uniformly
/// distributed; use [`hash_to_curve`] where a random oracle is required.
///
/// # Errors
/// [`Error::DomainTagTooLong`] if `dst` is longer than 255 bytes.
pub fn encode_to_curve(msg: &[u8], dst: &[u8]) -> Result<ProjectivePoint> {
    encode_from_bytes(&[msg], dst)
}

/// Like [`encode_to_curve`] for a message given as the concatenation of
/// several slices.
///
/// # Errors
/// [`Error::DomainTagTooLong`] if `dst` is longer than 255 bytes.
pub fn encode_from_bytes(msg: &[&[u8]], dst: &[u8]) -> Result<ProjectivePoint> {
    let [u] = hash2field::hash_to_field::<1, WIDE_FIELD_BYTES, FieldElement>(msg, dst)?;
    Ok(ProjectivePoint::from(u.map_to_curve()).clear_cofactor())
}
