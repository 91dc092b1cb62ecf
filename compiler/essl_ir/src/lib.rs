//! ESSL IR - shared vocabulary for the shader front end.
//!
//! This crate holds the small value types that the grammar layer hands to
//! the symbol table:
//! - `Name` handles for interned identifiers, and the interner behind them
//! - `BasicType`, the closed set of ESSL type kinds
//! - `Precision`, `Qualifier` and `LayoutQualifier`
//!
//! Everything here is `Copy` or cheaply clonable. The symbol table, the type
//! descriptors built from these values, and the structural queries over
//! them live in `essl_symtab`.

mod basic_type;
mod interner;
mod name;
mod qualifier;

pub use basic_type::BasicType;
pub use interner::{InternError, SharedInterner, StringInterner, StringLookup};
pub use name::Name;
pub use qualifier::{BlockStorage, LayoutQualifier, MatrixPacking, Precision, Qualifier};
