use std::hash::Hash;

use crate::{
    mixer::Mixer,
    partition::{PartitionError, Partitioner},
};

/// 32-bit FxHash of `key`. Fast and unseeded, so only stable for the same
/// key type on the same platform.
#[inline]
pub fn fingerprint<K>(key: &K) -> u32
where
    K: Hash + ?Sized,
{
    fxhash::hash32(key)
}

impl<M> Partitioner<M>
where
    M: Mixer,
{
    pub fn partition_key<K>(&self, key: &K, n: u32) -> Result<u32, PartitionError>
    where
        K: Hash + ?Sized,
    {
        self.partition(fingerprint(key), n)
    }
}
