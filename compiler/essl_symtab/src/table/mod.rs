//! The symbol table: a stack of levels with built-in tiers at the bottom.
//!
//! # Levels
//!
//! ```text
//!   n   innermost user scope   <- current level
//!   ..
//!   3   global scope           (GLOBAL_LEVEL)
//!   2   ESSL 3.00 built-ins    (LAST_BUILTIN_LEVEL)
//!   1   ESSL 1.00 built-ins
//!   0   shared built-ins
//! ```
//!
//! The built-in levels exist from construction and are never popped. Lookups
//! walk down from the current level, skipping the version tier that does not
//! match the lookup's dialect, and stop at the first level that has the key.

mod builtins;
mod precision;

use essl_ir::{BasicType, Name, Precision, Qualifier, SharedInterner, StringLookup};

use crate::level::TableLevel;
use crate::symbol::build_signature;
use crate::{
    ConstantValue, DeclareError, Function, Param, PublicType, Symbol, SymbolId, SymbolKind,
    TypeDesc, Variable,
};

pub use builtins::{
    eligible_levels, next_eligible_level, BuiltinLevel, ShaderVersion, GLOBAL_LEVEL,
    LAST_BUILTIN_LEVEL,
};
use precision::PrecisionStack;

/// A successful `find`.
#[derive(Copy, Clone, Debug)]
pub struct Lookup<'a> {
    pub symbol: &'a Symbol,
    /// Level the symbol was found in.
    pub level: usize,
    /// Found in one of the built-in tiers.
    pub is_builtin: bool,
    /// Found in the current (innermost) level.
    pub is_same_scope: bool,
}

/// Scoped symbol table for one compilation.
pub struct SymbolTable {
    levels: Vec<TableLevel>,
    precision: PrecisionStack,
    interner: SharedInterner,
    /// Next symbol id. Only advanced when a symbol is actually stored.
    next_id: u32,
}

impl SymbolTable {
    /// A table holding the three (empty) built-in tiers.
    ///
    /// Populate the tiers with the `insert_builtin*` methods, then
    /// `push_scope` once to open the global scope.
    pub fn new(interner: SharedInterner) -> Self {
        let mut table = SymbolTable {
            levels: Vec::with_capacity(GLOBAL_LEVEL + 4),
            precision: PrecisionStack::default(),
            interner,
            next_id: 1,
        };
        for _ in BuiltinLevel::ALL {
            table.levels.push(TableLevel::new());
            table.precision.push();
        }
        table
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    /// Index of the innermost level.
    pub fn current_level(&self) -> usize {
        self.levels.len().saturating_sub(1)
    }

    /// No user scope is open yet.
    pub fn at_builtin_level(&self) -> bool {
        self.current_level() <= LAST_BUILTIN_LEVEL
    }

    pub fn at_global_level(&self) -> bool {
        self.current_level() == GLOBAL_LEVEL
    }

    pub fn level(&self, index: usize) -> Option<&TableLevel> {
        self.levels.get(index)
    }

    /// Open a new innermost scope.
    #[tracing::instrument(level = "trace", skip_all, fields(level = self.levels.len()))]
    pub fn push_scope(&mut self) {
        self.levels.push(TableLevel::new());
        self.precision.push();
    }

    /// Close the innermost scope, dropping everything declared in it.
    ///
    /// Returns `false` and changes nothing if only built-in levels are left;
    /// that is a caller bug and asserts in debug builds.
    #[tracing::instrument(level = "trace", skip_all, fields(level = self.current_level()))]
    pub fn pop_scope(&mut self) -> bool {
        debug_assert!(
            !self.at_builtin_level(),
            "pop_scope below the built-in boundary"
        );
        if self.at_builtin_level() {
            return false;
        }
        self.levels.pop();
        self.precision.pop();
        true
    }

    /// Declare `name` in the current level.
    ///
    /// Functions are keyed by their mangled signature, so overloads coexist
    /// and only an identical signature is a redeclaration.
    #[tracing::instrument(level = "trace", skip_all, fields(level = self.current_level(), kind = kind.describe()))]
    pub fn declare(&mut self, name: Name, kind: SymbolKind) -> Result<SymbolId, DeclareError> {
        let symbol = Symbol::new(SymbolId::new(self.next_id), name, kind);
        self.insert_at(self.current_level(), symbol)
    }

    /// Place a copy of the visible declaration of `key` into the current
    /// level, under a fresh id.
    #[tracing::instrument(level = "trace", skip_all, fields(level = self.current_level()))]
    pub fn declare_rebound(
        &mut self,
        key: Name,
        version: ShaderVersion,
    ) -> Result<SymbolId, DeclareError> {
        let id = SymbolId::new(self.next_id);
        let rebound = self
            .find(key, version)
            .map(|found| found.symbol.rebind(id))
            .ok_or(DeclareError::Unresolved { name: key })?;
        self.insert_at(self.current_level(), rebound)
    }

    /// Declare `name` in built-in tier `level`.
    pub fn insert_builtin(
        &mut self,
        level: BuiltinLevel,
        name: &str,
        kind: SymbolKind,
    ) -> Result<SymbolId, DeclareError> {
        let name = self.interner.intern(name);
        let symbol = Symbol::new(SymbolId::new(self.next_id), name, kind);
        self.insert_at(level.index(), symbol)
    }

    /// Declare a built-in function with unnamed parameters.
    pub fn insert_builtin_function(
        &mut self,
        level: BuiltinLevel,
        return_type: TypeDesc,
        name: &str,
        params: Vec<TypeDesc>,
    ) -> Result<SymbolId, DeclareError> {
        let params = params.into_iter().map(Param::unnamed).collect();
        self.insert_builtin(
            level,
            name,
            SymbolKind::Function(Function::new(return_type, params)),
        )
    }

    pub fn insert_builtin_variable(
        &mut self,
        level: BuiltinLevel,
        name: &str,
        ty: TypeDesc,
    ) -> Result<SymbolId, DeclareError> {
        self.insert_builtin(level, name, SymbolKind::Variable(Variable::new(ty)))
    }

    /// Declare a built-in `const int`, e.g. `gl_MaxDrawBuffers`.
    pub fn insert_constant_int(
        &mut self,
        level: BuiltinLevel,
        name: &str,
        value: i32,
    ) -> Result<SymbolId, DeclareError> {
        let ty = TypeDesc::new(BasicType::Int, Precision::Undefined, Qualifier::Const, 1, 1);
        let var = Variable::constant(ty, vec![ConstantValue::Int(value)]);
        self.insert_builtin(level, name, SymbolKind::Variable(var))
    }

    fn insert_at(&mut self, level: usize, symbol: Symbol) -> Result<SymbolId, DeclareError> {
        let id = symbol.id();
        let name = symbol.name();
        let is_function = symbol.is_function();
        let key = symbol.level_key(&self.interner);

        let scope = &mut self.levels[level];
        if let Err(err) = scope.insert(key, symbol) {
            tracing::debug!(level, %err, "declaration rejected");
            return Err(err);
        }
        if is_function {
            scope.insert_unmangled(name);
        }
        self.next_id += 1;
        Ok(id)
    }

    /// Resolve `key` from the current level down, as seen by `version`.
    ///
    /// `key` is a plain name, or a mangled signature for functions.
    pub fn find(&self, key: Name, version: ShaderVersion) -> Option<Lookup<'_>> {
        let current = self.current_level();
        let (level, symbol) = eligible_levels(current, version)
            .find_map(|level| self.levels[level].find(key).map(|symbol| (level, symbol)))?;

        let is_builtin = level <= LAST_BUILTIN_LEVEL;
        if is_builtin {
            tracing::trace!(level, version = version.raw(), "resolved to built-in");
        }
        Some(Lookup {
            symbol,
            level,
            is_builtin,
            is_same_scope: level == current,
        })
    }

    /// Resolve `key` in the built-in tiers only, ignoring user shadowing.
    pub fn find_builtin(&self, key: Name, version: ShaderVersion) -> Option<&Symbol> {
        eligible_levels(LAST_BUILTIN_LEVEL, version).find_map(|level| self.levels[level].find(key))
    }

    /// Resolve a call `name(args...)` to the overload with exactly these
    /// argument types.
    pub fn find_function(
        &self,
        name: Name,
        arg_types: &[TypeDesc],
        version: ShaderVersion,
    ) -> Option<Lookup<'_>> {
        let names: &dyn StringLookup = &self.interner;
        let signature = build_signature(names.lookup(name), arg_types, names);
        // A signature nobody declared was never interned.
        let key = self.interner.get(&signature)?;
        self.find(key, version)
    }

    /// Is any function called `name` visible in the built-in tiers?
    pub fn has_unmangled_builtin(&self, name: Name, version: ShaderVersion) -> bool {
        eligible_levels(LAST_BUILTIN_LEVEL, version)
            .any(|level| self.levels[level].has_unmangled_function(name))
    }

    /// Mutable access to a symbol declared in the current level, e.g. to
    /// mark a function defined or to resolve an unsized array.
    pub fn find_in_current_mut(&mut self, key: Name) -> Option<&mut Symbol> {
        self.levels.last_mut().and_then(|level| level.find_mut(key))
    }

    /// Find a live symbol by id.
    pub fn symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.levels.iter().rev().find_map(|level| level.get_by_id(id))
    }

    /// Set the current scope's default precision for `ty`.
    ///
    /// Samplers are accepted and ignored. Otherwise only non-array `float`
    /// and `int` scalars take a default; anything else returns `false`.
    pub fn set_default_precision(&mut self, ty: &PublicType, precision: Precision) -> bool {
        if ty.basic.is_sampler() {
            return true;
        }
        if !matches!(ty.basic, BasicType::Float | BasicType::Int) {
            return false;
        }
        if ty.primary_size > 1 || ty.secondary_size > 1 || ty.is_array() {
            return false;
        }
        self.precision.set(ty.basic, precision);
        true
    }

    /// Default precision for `basic` in the current scope.
    pub fn default_precision(&self, basic: BasicType) -> Precision {
        self.precision.get(basic)
    }
}

#[cfg(test)]
mod tests;
