//! ESSL symbol table.
//!
//! Resolves identifiers across nested scopes, keeps the version-tiered
//! built-in symbols, and computes the mangled names that overload resolution
//! and type equality key on.
//!
//! # Pieces
//!
//! - [`TypeDesc`]: a finalized type, with shape queries, object size and a
//!   memoized mangled name
//! - [`Aggregate`]: a struct or interface-block definition and its
//!   structural queries
//! - [`Symbol`]: a variable, function or type name, owned by one level
//! - [`TableLevel`]: one scope or built-in tier
//! - [`SymbolTable`]: the level stack and the dialect-aware lookups
//!
//! The table is single-threaded. Only the string interner is shared.

mod aggregate;
mod error;
mod level;
mod public_type;
mod symbol;
mod table;
mod tracing_setup;
mod ty;

pub use aggregate::{Aggregate, AggregateKind, Field};
pub use error::DeclareError;
pub use level::TableLevel;
pub use public_type::PublicType;
pub use symbol::{ConstantValue, Function, Param, Symbol, SymbolId, SymbolKind, Variable};
pub use table::{
    eligible_levels, next_eligible_level, BuiltinLevel, Lookup, ShaderVersion, SymbolTable,
    GLOBAL_LEVEL, LAST_BUILTIN_LEVEL,
};
pub use tracing_setup::init_tracing;
pub use ty::{TypeDesc, MAX_OBJECT_SIZE, UNSIZED_ARRAY};
