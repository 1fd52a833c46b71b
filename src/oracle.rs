use crate::mixer::{Mixer, Murmur3};

/// Deterministic bit stream keyed by `seed`.
///
/// Position `o` reads bit `o % 32` of `mix(o / 32, seed)`, so every run of 32
/// consecutive positions shares one mixer evaluation. Positions are `u64` so
/// retry offsets never wrap; block indices past `u32::MAX` fold their high
/// word into the seed, which keeps distinct positions on distinct inputs.
#[derive(Debug, Clone, Copy)]
pub struct BitOracle<'a, M> {
    mixer: &'a M,
    seed: u32,
}

impl<'a, M> BitOracle<'a, M>
where
    M: Mixer,
{
    pub fn new(mixer: &'a M, seed: u32) -> Self {
        Self { mixer, seed }
    }

    #[inline]
    pub fn bit(&self, o: u64) -> bool {
        let block = o >> 5;
        let word = self
            .mixer
            .mix(block as u32, self.seed ^ (block >> 32) as u32);
        (word >> (o & 31)) & 1 == 1
    }
}

#[inline]
pub fn bit(o: u64, seed: u32) -> bool {
    BitOracle::new(&Murmur3, seed).bit(o)
}
