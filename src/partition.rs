use thiserror::Error;
use tracing::{debug, error, trace};

use crate::{
    mixer::{Mixer, Murmur3},
    option::PartitionOption,
    oracle::BitOracle,
};

/// Maps fingerprints onto `[0, n)` by walking a virtual binary tree of
/// `s = 2^k >= n` leaves, rejecting leaves `>= n`.
///
/// The walk only depends on `s` and the oracle bits, and `n` is consulted
/// solely as the acceptance bound. Growing `n` to `n + 1` therefore either
/// keeps a fingerprint where it was or moves it into partition `n`.
#[derive(Debug, Clone, Default)]
pub struct Partitioner<M = Murmur3> {
    mixer: M,
    option: PartitionOption,
}

impl<M> Partitioner<M>
where
    M: Mixer,
{
    pub fn new(mixer: M) -> Self {
        Self::with_option(mixer, PartitionOption::default())
    }

    pub fn with_option(mixer: M, option: PartitionOption) -> Self {
        if option != PartitionOption::default() {
            debug!(max_attempts = option.max_attempts, "partitioner with custom option");
        }
        Self { mixer, option }
    }

    pub fn option(&self) -> &PartitionOption {
        &self.option
    }

    pub fn partition(&self, fingerprint: u32, n: u32) -> Result<u32, PartitionError> {
        if n < 2 {
            return Err(PartitionError::InvalidArgument { n });
        }
        let k = u32::BITS - (n - 1).leading_zeros();
        let s = 1_u64 << k;
        let half = s >> 1;
        let root = s - 1;
        let bound = u64::from(n);
        let oracle = BitOracle::new(&self.mixer, fingerprint);

        let max_attempts = self.option.attempt_bound();
        for attempt in 0..max_attempts {
            // each retry reads a disjoint window of the stream
            let offset = u64::from(attempt) * s;

            let leaf = if oracle.bit(root + offset) {
                descend(&oracle, half, root - 1, half >> 1, offset, bound)
            } else {
                // low half holds s / 2 < n leaves, so it never overflows and
                // never needs the offset
                descend(&oracle, 0, root - half, half >> 1, 0, bound)
            };
            if let Some(leaf) = leaf {
                return Ok(leaf as u32);
            }
            trace!(fingerprint, n, attempt, offset, "partition attempt overflowed");
        }

        error!(fingerprint, n, max_attempts, "partition attempts exhausted, mixer is not uniform");
        Err(PartitionError::InternalInvariantViolation {
            fingerprint,
            n,
            attempts: max_attempts,
        })
    }
}

/// Walks down from node `o` with accumulated leaf `v` and weight `p`,
/// returning `None` as soon as the leaf is known to be `>= bound`.
#[inline]
fn descend<M: Mixer>(
    oracle: &BitOracle<'_, M>,
    mut v: u64,
    mut o: u64,
    mut p: u64,
    offset: u64,
    bound: u64,
) -> Option<u64> {
    while p >= 1 {
        if oracle.bit(o + offset) {
            v += p;
            if v >= bound {
                return None;
            }
            o -= 1;
        } else {
            o -= p;
        }
        p >>= 1;
    }
    Some(v)
}

/// [`Partitioner::partition`] with the default mixer and options.
pub fn partition(fingerprint: u32, n: u32) -> Result<u32, PartitionError> {
    Partitioner::<Murmur3>::default().partition(fingerprint, n)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PartitionError {
    #[error("partition count {n} is too small, at least 2 partitions are required")]
    InvalidArgument { n: u32 },
    #[error(
        "fingerprint {fingerprint:#010x} overflowed {attempts} consecutive attempts for {n} \
         partitions"
    )]
    InternalInvariantViolation {
        fingerprint: u32,
        n: u32,
        attempts: u32,
    },
}
