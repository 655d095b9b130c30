//! Packed composite claim identifier.

use crate::LogCoordinate;
use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

/// Width of each packed coordinate field, in bits.
const FIELD_BITS: usize = 64;

/// A claim's composite identifier: the `(block, tx_index, log_index)`
/// coordinate packed into a single unsigned scalar.
///
/// The three fields occupy disjoint 64-bit ranges,
/// `(block · 2^64 + tx_index) · 2^64 + log_index`, so the packed value is
/// 192 bits wide at most and cannot overflow the 256-bit scalar. Comparing
/// two identifiers is equivalent to comparing their coordinates
/// lexicographically, which is what lets a single strictly-ascending check
/// stand in for uniqueness and ordering over the triples.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ClaimId(U256);

impl ClaimId {
    /// The zero identifier, carried by every inactive (padding) slot.
    pub const ZERO: Self = Self(U256::ZERO);

    /// Wrap an already-packed scalar.
    ///
    /// Used by the branch-free multiplexer, which reconstructs an identifier
    /// from a sum of masked scalar terms.
    pub const fn from_scalar(scalar: U256) -> Self {
        Self(scalar)
    }

    /// Pack a log coordinate into its composite identifier.
    pub fn pack(coordinate: LogCoordinate) -> Self {
        let id = ((U256::from(coordinate.block) << FIELD_BITS) | U256::from(coordinate.tx_index))
            << FIELD_BITS
            | U256::from(coordinate.log_index);
        Self(id)
    }

    /// Pack a log coordinate, multiplicatively masked by an activity flag.
    ///
    /// Inactive slots yield exactly [`ClaimId::ZERO`] regardless of the
    /// (ignored) padding content of the coordinate.
    pub fn masked(coordinate: LogCoordinate, active: bool) -> Self {
        Self(Self::pack(coordinate).0 * U256::from(active as u64))
    }

    /// Returns `true` if this is the zero (inactive-slot) identifier.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns the packed scalar.
    pub const fn into_inner(self) -> U256 {
        self.0
    }
}

impl From<ClaimId> for U256 {
    fn from(id: ClaimId) -> Self {
        id.0
    }
}
