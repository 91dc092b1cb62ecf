//! Handles for interned identifiers.
//!
//! Every key the symbol table stores is a `Name`: variable, function, struct
//! and field identifiers from the shader source, and the mangled signatures
//! overloaded functions are keyed by. Two names are equal iff the strings
//! they were interned from are equal.

use std::fmt;

/// An identifier interned in a `StringInterner`.
///
/// The top 4 bits pick the interner shard; the low 28 bits index the string
/// inside it.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// The empty identifier, interned by every interner up front.
    pub const EMPTY: Name = Name(0);

    /// Largest string index a shard can hand out.
    pub const MAX_LOCAL: u32 = 0x0FFF_FFFF;

    pub const NUM_SHARDS: usize = 16;

    const SHARD_SHIFT: u32 = 28;

    #[inline]
    pub(crate) const fn new(shard: u32, local: u32) -> Self {
        debug_assert!(shard < 16);
        debug_assert!(local <= Self::MAX_LOCAL);
        Name((shard << Self::SHARD_SHIFT) | local)
    }

    #[inline]
    pub(crate) const fn shard(self) -> usize {
        (self.0 >> Self::SHARD_SHIFT) as usize
    }

    #[inline]
    pub(crate) const fn local(self) -> usize {
        (self.0 & Self::MAX_LOCAL) as usize
    }

    pub fn is_empty(self) -> bool {
        self == Self::EMPTY
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({}:{})", self.shard(), self.local())
    }
}

#[cfg(test)]
mod tests;
