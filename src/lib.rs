//! Consistent partitioning of 32-bit fingerprints onto `[0, n)`.
//!
//! Growing `n` to `n + 1` only moves fingerprints into the new partition `n`,
//! never between partitions that already existed.
//!
//! ```
//! use magic_partition::partition;
//!
//! let p = partition(12345, 7).unwrap();
//! assert!(p < 7);
//! let q = partition(12345, 8).unwrap();
//! assert!(q == p || q == 7);
//! ```
mod key;
pub mod mixer;
pub mod option;
pub mod oracle;
mod partition;

pub use key::fingerprint;
pub use mixer::{mix, Mixer, Murmur3};
pub use option::PartitionOption;
pub use oracle::{bit, BitOracle};
pub use partition::{partition, PartitionError, Partitioner};
