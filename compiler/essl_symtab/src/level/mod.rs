//! One lexical scope, or one built-in tier.

use rustc_hash::{FxHashMap, FxHashSet};

use essl_ir::Name;

use crate::{DeclareError, Symbol, SymbolId};

/// Symbols declared in one scope, keyed by their level key.
///
/// The level owns its symbols; dropping it drops them along with their
/// types and parameters.
#[derive(Debug, Default)]
pub struct TableLevel {
    symbols: FxHashMap<Name, Symbol>,
    /// Plain names of the functions declared here, for checks that do not
    /// know the argument types yet.
    unmangled: FxHashSet<Name>,
}

impl TableLevel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `symbol` under `key`.
    ///
    /// A taken key is rejected and the level is left unchanged.
    pub fn insert(&mut self, key: Name, symbol: Symbol) -> Result<&Symbol, DeclareError> {
        if let Some(existing) = self.symbols.get(&key) {
            return Err(DeclareError::Redeclaration {
                name: symbol.name(),
                existing: existing.id(),
            });
        }
        Ok(self.symbols.entry(key).or_insert(symbol))
    }

    /// Record that a function called `name` is declared here.
    pub fn insert_unmangled(&mut self, name: Name) {
        self.unmangled.insert(name);
    }

    pub fn has_unmangled_function(&self, name: Name) -> bool {
        self.unmangled.contains(&name)
    }

    pub fn find(&self, key: Name) -> Option<&Symbol> {
        self.symbols.get(&key)
    }

    pub fn find_mut(&mut self, key: Name) -> Option<&mut Symbol> {
        self.symbols.get_mut(&key)
    }

    /// Find a symbol by id. Linear in the level size.
    pub fn get_by_id(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.values().find(|symbol| symbol.id() == id)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.values()
    }
}
