//! Declaration errors.
//!
//! Lookups never fail: a miss is `None`. Only inserting can be rejected, and
//! whether a rejection is a user-facing diagnostic is the caller's decision.

use essl_ir::Name;

use crate::SymbolId;

/// Error when a declaration cannot be entered into a level.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeclareError {
    /// The level already holds a symbol under the same key.
    ///
    /// For functions the key is the mangled signature, so this only fires
    /// for a true redeclaration, never for an overload.
    #[error("{name:?} is already declared in this scope as symbol {existing}")]
    Redeclaration { name: Name, existing: SymbolId },

    /// `declare_rebound` found no visible declaration to rebind.
    #[error("{name:?} has no visible declaration to rebind")]
    Unresolved { name: Name },
}
