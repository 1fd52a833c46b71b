const C1: u32 = 0xcc9e_2d51;
const C2: u32 = 0x1b87_3593;

pub trait Mixer {
    /// Mixes two words into one. Must be deterministic and well distributed:
    /// distinct `(y, z)` pairs are expected to yield independent-looking bits.
    fn mix(&self, y: u32, z: u32) -> u32;
}

impl<F> Mixer for F
where
    F: Fn(u32, u32) -> u32,
{
    fn mix(&self, y: u32, z: u32) -> u32 {
        self(y, z)
    }
}

/// MurmurHash3 (x86, 32-bit, seed 0) over `y.to_le_bytes() ++ z.to_le_bytes()`.
///
/// Bit-compatible with `murmur3::murmur3_32(&mut Cursor::new(&buf), 0)` on the
/// same 8-byte buffer, without its `io::Result` or reader plumbing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Murmur3;

impl Mixer for Murmur3 {
    #[inline]
    fn mix(&self, y: u32, z: u32) -> u32 {
        // both words are full 4-byte blocks, so there is no tail to fold in
        let mut h = 0;
        h = block(h, y);
        h = block(h, z);
        fmix(h ^ 8)
    }
}

#[inline]
pub fn mix(y: u32, z: u32) -> u32 {
    Murmur3.mix(y, z)
}

#[inline(always)]
fn block(h: u32, k: u32) -> u32 {
    let k = k.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2);
    (h ^ k)
        .rotate_left(13)
        .wrapping_mul(5)
        .wrapping_add(0xe654_6b64)
}

#[inline(always)]
fn fmix(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^ (h >> 16)
}
