//! Hashing byte strings to field elements.
//!
//! <https://www.rfc-editor.org/rfc/rfc9380.html#name-hashing-to-a-finite-field>

mod expand_msg;

#[cfg(feature = "alloc")]
pub use expand_msg::expand_message_xmd_vec;
pub use expand_msg::{ExpandMsgXmd, Expander, expand_message_xmd};

use crate::{
    Error, FieldElement, Result,
    arithmetic::field::{WIDE_FIELD_BYTES, from_wide_bytes},
};

/// Conversion of `L` uniform bytes into a field element.
pub trait FromOkm<const L: usize> {
    /// Convert a byte sequence into a field element.
    fn from_okm(data: &[u8; L]) -> Self;
}

/// `L = ceil((ceil(log2(p)) + k) / 8)` with `k = 128`, i.e. 48 bytes, so the
/// reduction bias is at most 2^-128.
impl FromOkm<WIDE_FIELD_BYTES> for FieldElement {
    fn from_okm(data: &[u8; WIDE_FIELD_BYTES]) -> Self {
        from_wide_bytes(data)
    }
}

/// Convert an arbitrary byte sequence into `N` field elements.
///
/// The message is the concatenation of `msg`. `N * L` uniform bytes are
/// drawn from `expand_message_xmd` and split, in order, into one chunk per
/// element.
///
/// # Errors
/// - [`Error::DomainTagTooLong`] if `dst` is longer than 255 bytes
/// - [`Error::OutputTooLarge`] if `N * L` exceeds the expander's limit
pub fn hash_to_field<const N: usize, const L: usize, T>(
    msg: &[&[u8]],
    dst: &[u8],
) -> Result<[T; N]>
where
    T: FromOkm<L> + Default + Copy,
{
    let len_in_bytes = L.checked_mul(N).ok_or(Error::OutputTooLarge)?;
    let mut tmp = [0u8; L];
    let mut expander = ExpandMsgXmd::expand_message(msg, dst, len_in_bytes)?;

    let mut out = [T::default(); N];
    for o in out.iter_mut() {
        expander.fill_bytes(&mut tmp);
        *o = T::from_okm(&tmp);
    }
    Ok(out)
}
