//! `expand_message_xmd` with SHA-256.
//!
//! <https://www.rfc-editor.org/rfc/rfc9380.html#name-expand_message_xmd>

use crate::{Error, Result};
use digest::{Digest, Output, core_api::Block};
use sha2::Sha256;

/// Streaming output of an expansion; call `fill_bytes` until the requested
/// length is consumed.
pub trait Expander {
    /// Fill the slice with the next expanded bytes.
    ///
    /// Once the requested output length is exhausted the remaining slots of
    /// `okm` are left untouched.
    fn fill_bytes(&mut self, okm: &mut [u8]);
}

/// The domain separation tag, hashed as `DST || I2OSP(len(DST), 1)`.
#[derive(Clone, Copy, Debug)]
struct Domain<'a> {
    dst: &'a [u8],
    len: u8,
}

impl<'a> Domain<'a> {
    fn new(dst: &'a [u8]) -> Result<Self> {
        let len = u8::try_from(dst.len()).map_err(|_| Error::DomainTagTooLong)?;
        Ok(Self { dst, len })
    }

    fn update_hash(&self, hash: &mut Sha256) {
        hash.update(self.dst);
        hash.update([self.len]);
    }
}

/// Placeholder type for implementing `expand_message_xmd` based on SHA-256.
///
/// The first two blocks are hashed when the expander is created; later ones
/// are hashed as [`Expander::fill_bytes`] consumes them.
#[derive(Debug)]
pub struct ExpandMsgXmd<'a> {
    b_0: Output<Sha256>,
    b_vals: Output<Sha256>,
    domain: Domain<'a>,
    index: u8,
    offset: usize,
    ell: u8,
    remaining: usize,
}

impl<'a> ExpandMsgXmd<'a> {
    /// Expands the concatenation of `msg` to `len_in_bytes` bytes.
    ///
    /// # Errors
    /// - [`Error::DomainTagTooLong`] if `dst` is longer than 255 bytes
    /// - [`Error::OutputTooLarge`] if `len_in_bytes` needs more than 255 SHA-256 blocks
    pub fn expand_message(msg: &[&[u8]], dst: &'a [u8], len_in_bytes: usize) -> Result<Self> {
        let b_in_bytes = Sha256::output_size();
        let ell = u8::try_from(len_in_bytes.div_ceil(b_in_bytes))
            .map_err(|_| Error::OutputTooLarge)?;
        // 255 blocks of 32 bytes always fit in two bytes
        let len_in_bytes_u16 = u16::try_from(len_in_bytes).map_err(|_| Error::OutputTooLarge)?;
        let domain = Domain::new(dst)?;

        let mut b_0 = Sha256::new();
        b_0.update(Block::<Sha256>::default());
        for m in msg {
            b_0.update(m);
        }
        b_0.update(len_in_bytes_u16.to_be_bytes());
        b_0.update([0u8]);
        domain.update_hash(&mut b_0);
        let b_0 = b_0.finalize();

        let mut b_vals = Sha256::new();
        b_vals.update(&b_0);
        b_vals.update([1u8]);
        domain.update_hash(&mut b_vals);
        let b_vals = b_vals.finalize();

        Ok(Self {
            b_0,
            b_vals,
            domain,
            index: 1,
            offset: 0,
            ell,
            remaining: len_in_bytes,
        })
    }

    /// Hashes `b_(i+1) = H((b_0 XOR b_i) || I2OSP(i + 1, 1) || DST')`.
    fn next(&mut self) -> bool {
        if self.index >= self.ell {
            return false;
        }

        self.index += 1;
        self.offset = 0;

        let mut chained = self.b_0;
        for (c, b) in chained.iter_mut().zip(self.b_vals.iter()) {
            *c ^= b;
        }

        let mut b_vals = Sha256::new();
        b_vals.update(&chained);
        b_vals.update([self.index]);
        self.domain.update_hash(&mut b_vals);
        self.b_vals = b_vals.finalize();
        true
    }
}

impl Expander for ExpandMsgXmd<'_> {
    fn fill_bytes(&mut self, okm: &mut [u8]) {
        for byte in okm {
            if self.remaining == 0 {
                return;
            }

            if self.offset == self.b_vals.len() && !self.next() {
                return;
            }

            *byte = self.b_vals[self.offset];
            self.offset += 1;
            self.remaining -= 1;
        }
    }
}

/// Fills `out` with `expand_message_xmd(msg, dst, out.len())`.
pub fn expand_message_xmd(msg: &[u8], dst: &[u8], out: &mut [u8]) -> Result<()> {
    ExpandMsgXmd::expand_message(&[msg], dst, out.len())?.fill_bytes(out);
    Ok(())
}

/// Returns `expand_message_xmd(msg, dst, len_in_bytes)` as a vector.
#[cfg(feature = "alloc")]
pub fn expand_message_xmd_vec(
    msg: &[u8],
    dst: &[u8],
    len_in_bytes: usize,
) -> Result<alloc::vec::Vec<u8>> {
    let mut out = alloc::vec![0u8; len_in_bytes];
    expand_message_xmd(msg, dst, &mut out)?;
    Ok(out)
}
