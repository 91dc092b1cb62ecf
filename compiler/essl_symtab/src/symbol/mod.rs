//! Symbols: the entries stored in table levels.
//!
//! A symbol is one of three kinds, matched exhaustively where used:
//! - `Variable`: a variable or constant, with its type
//! - `Function`: a prototype or definition, with its parameters
//! - `TypeName`: a struct or interface-block declaration
//!
//! Symbols are owned by exactly one level. They are not `Clone`: placing an
//! existing symbol into another scope goes through `Symbol::rebind`, which
//! makes the copy explicit and gives it a fresh id.

mod function;

use std::fmt;
use std::rc::Rc;

use essl_ir::{Name, StringInterner, StringLookup};

use crate::{Aggregate, TypeDesc};

pub use function::{Function, Param};
pub(crate) use function::build_signature;

/// Identity of a symbol within one table.
///
/// Ids are allocated from a counter owned by the table and strictly increase
/// in allocation order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SymbolId(u32);

impl SymbolId {
    pub(crate) const fn new(raw: u32) -> Self {
        SymbolId(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One folded component of a `const` value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConstantValue {
    Float(f32),
    Int(i32),
    UInt(u32),
    Bool(bool),
}

/// A variable, uniform, varying, or folded constant.
#[derive(Clone, Debug)]
pub struct Variable {
    ty: TypeDesc,
    /// The variable's type names a struct or interface block.
    user_type: bool,
    /// Folded value, component by component, for `const` variables.
    constant: Option<Vec<ConstantValue>>,
    extension: Option<Name>,
}

impl Variable {
    pub fn new(ty: TypeDesc) -> Self {
        let user_type = ty.aggregate().is_some();
        Variable {
            ty,
            user_type,
            constant: None,
            extension: None,
        }
    }

    /// A variable with a known constant value.
    pub fn constant(ty: TypeDesc, value: Vec<ConstantValue>) -> Self {
        debug_assert!(value.len() <= ty.object_size());
        Variable {
            constant: Some(value),
            ..Self::new(ty)
        }
    }

    #[must_use]
    pub fn with_extension(mut self, extension: Name) -> Self {
        self.extension = Some(extension);
        self
    }

    pub fn ty(&self) -> &TypeDesc {
        &self.ty
    }

    /// Mutable access, for resolving an unsized array's length.
    pub fn ty_mut(&mut self) -> &mut TypeDesc {
        &mut self.ty
    }

    pub fn is_user_type(&self) -> bool {
        self.user_type
    }

    pub fn constant_value(&self) -> Option<&[ConstantValue]> {
        self.constant.as_deref()
    }

    pub fn extension(&self) -> Option<Name> {
        self.extension
    }
}

/// What a symbol declares.
#[derive(Clone, Debug)]
pub enum SymbolKind {
    Variable(Variable),
    Function(Function),
    TypeName(Rc<Aggregate>),
}

impl SymbolKind {
    /// Readable kind name for diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            SymbolKind::Variable(_) => "variable",
            SymbolKind::Function(_) => "function",
            SymbolKind::TypeName(def) if def.is_interface_block() => "interface block",
            SymbolKind::TypeName(_) => "struct",
        }
    }
}

/// A named entry in a table level.
#[derive(Debug)]
pub struct Symbol {
    id: SymbolId,
    name: Name,
    kind: SymbolKind,
}

impl Symbol {
    pub(crate) fn new(id: SymbolId, name: Name, kind: SymbolKind) -> Self {
        Symbol { id, name, kind }
    }

    pub fn id(&self) -> SymbolId {
        self.id
    }

    pub fn name(&self) -> Name {
        self.name
    }

    pub fn kind(&self) -> &SymbolKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut SymbolKind {
        &mut self.kind
    }

    pub fn as_variable(&self) -> Option<&Variable> {
        match &self.kind {
            SymbolKind::Variable(var) => Some(var),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match &self.kind {
            SymbolKind::Function(func) => Some(func),
            _ => None,
        }
    }

    pub fn as_type_name(&self) -> Option<&Rc<Aggregate>> {
        match &self.kind {
            SymbolKind::TypeName(def) => Some(def),
            _ => None,
        }
    }

    pub fn is_function(&self) -> bool {
        matches!(self.kind, SymbolKind::Function(_))
    }

    /// Key inside a level: the name, or the mangled signature for functions.
    ///
    /// Function signatures are interned here, on insert.
    pub fn level_key(&self, interner: &StringInterner) -> Name {
        match &self.kind {
            SymbolKind::Function(func) => {
                let name = interner.lookup(self.name);
                interner.intern_owned(func.mangled_signature(name, interner as &dyn StringLookup))
            }
            SymbolKind::Variable(_) | SymbolKind::TypeName(_) => self.name,
        }
    }

    /// A copy of this symbol under a new id, for placing into another scope.
    ///
    /// The definition is copied, not shared: changes to the copy (e.g.
    /// marking a function defined) leave the original untouched. Aggregate
    /// definitions are immutable and stay shared.
    pub fn rebind(&self, id: SymbolId) -> Symbol {
        Symbol {
            id,
            name: self.name,
            kind: self.kind.clone(),
        }
    }
}
