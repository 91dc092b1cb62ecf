//! Struct and interface-block definitions.
//!
//! An `Aggregate` is built once when its declaration is parsed and never
//! changes afterwards, so every derived fact about it is memoized. The
//! definition is shared through `Rc` by the type-name symbol that declares
//! it and by every `TypeDesc` that refers to it.
//!
//! Nesting is acyclic: a field can only name an aggregate declared before
//! the enclosing one, so the recursive queries always terminate.

use std::cell::OnceCell;
use std::rc::Rc;

use essl_ir::{BasicType, BlockStorage, MatrixPacking, Name, StringLookup};
use essl_stack::ensure_sufficient_stack;

use crate::ty::{TypeDesc, MAX_OBJECT_SIZE};

/// A named, typed member of an aggregate.
#[derive(Clone, Debug)]
pub struct Field {
    pub name: Name,
    pub ty: TypeDesc,
}

impl Field {
    pub fn new(name: Name, ty: TypeDesc) -> Self {
        Field { name, ty }
    }
}

/// What kind of aggregate a definition is.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AggregateKind {
    Struct,
    /// Uniform block, optionally with an instance name (`uniform B { .. } b;`).
    InterfaceBlock {
        instance_name: Option<Name>,
        block_storage: BlockStorage,
        matrix_packing: MatrixPacking,
    },
}

impl AggregateKind {
    /// Prefix that keeps struct and block mangled names apart.
    fn mangled_prefix(self) -> &'static str {
        match self {
            AggregateKind::Struct => "struct-",
            AggregateKind::InterfaceBlock { .. } => "iblock-",
        }
    }
}

/// A struct or interface-block definition.
#[derive(Debug)]
pub struct Aggregate {
    name: Name,
    kind: AggregateKind,
    fields: Vec<Field>,
    mangled: OnceCell<String>,
    object_size: OnceCell<usize>,
    deepest_nesting: OnceCell<u32>,
}

impl Aggregate {
    fn new(name: Name, kind: AggregateKind, fields: Vec<Field>) -> Self {
        Aggregate {
            name,
            kind,
            fields,
            mangled: OnceCell::new(),
            object_size: OnceCell::new(),
            deepest_nesting: OnceCell::new(),
        }
    }

    /// A struct with the given fields, in declaration order.
    pub fn structure(name: Name, fields: Vec<Field>) -> Self {
        Self::new(name, AggregateKind::Struct, fields)
    }

    /// A uniform block with the given fields, in declaration order.
    pub fn interface_block(
        name: Name,
        instance_name: Option<Name>,
        block_storage: BlockStorage,
        matrix_packing: MatrixPacking,
        fields: Vec<Field>,
    ) -> Self {
        Self::new(
            name,
            AggregateKind::InterfaceBlock {
                instance_name,
                block_storage,
                matrix_packing,
            },
            fields,
        )
    }

    pub fn name(&self) -> Name {
        self.name
    }

    pub fn kind(&self) -> AggregateKind {
        self.kind
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn is_interface_block(&self) -> bool {
        matches!(self.kind, AggregateKind::InterfaceBlock { .. })
    }

    /// The `BasicType` a value of this aggregate has.
    pub fn basic_type(&self) -> BasicType {
        match self.kind {
            AggregateKind::Struct => BasicType::Struct,
            AggregateKind::InterfaceBlock { .. } => BasicType::InterfaceBlock,
        }
    }

    /// Look up a field by name.
    pub fn field(&self, name: Name) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// True if any field is an array, at any depth.
    pub fn contains_arrays(&self) -> bool {
        ensure_sufficient_stack(|| {
            self.fields
                .iter()
                .any(|f| f.ty.is_array() || f.ty.is_structure_containing_arrays())
        })
    }

    /// True if any field has kind `basic`, at any depth.
    pub fn contains_type(&self, basic: BasicType) -> bool {
        ensure_sufficient_stack(|| {
            self.fields
                .iter()
                .any(|f| f.ty.basic_type() == basic || f.ty.is_structure_containing_type(basic))
        })
    }

    /// True if any field is a sampler, at any depth.
    pub fn contains_samplers(&self) -> bool {
        ensure_sufficient_stack(|| {
            self.fields
                .iter()
                .any(|f| f.ty.is_sampler() || f.ty.is_structure_containing_samplers())
        })
    }

    /// Sum of the fields' object sizes, saturating at `MAX_OBJECT_SIZE`.
    ///
    /// Once the sum saturates it stays saturated.
    pub fn object_size(&self) -> usize {
        *self.object_size.get_or_init(|| {
            ensure_sufficient_stack(|| {
                self.fields.iter().fold(0, |size: usize, f| {
                    let field_size = f.ty.object_size();
                    if field_size > MAX_OBJECT_SIZE - size {
                        MAX_OBJECT_SIZE
                    } else {
                        size + field_size
                    }
                })
            })
        })
    }

    /// `1 + ` the deepest nesting among the fields' types.
    ///
    /// An aggregate with no aggregate fields (or no fields at all) has depth 1.
    pub fn deepest_nesting(&self) -> u32 {
        *self.deepest_nesting.get_or_init(|| {
            let deepest = self
                .fields
                .iter()
                .map(|f| f.ty.deepest_struct_nesting())
                .max()
                .unwrap_or(0);
            deepest.saturating_add(1)
        })
    }

    /// Same kind, same name and pairwise-equal field types, in order.
    ///
    /// Field names, block storage and instance names are ignored, matching
    /// what `mangled_name` encodes.
    pub fn same_structure(&self, other: &Aggregate) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        self.name == other.name
            && self.kind.mangled_prefix() == other.kind.mangled_prefix()
            && self.fields.len() == other.fields.len()
            && ensure_sufficient_stack(|| {
                self.fields
                    .iter()
                    .zip(&other.fields)
                    .all(|(a, b)| a.ty == b.ty)
            })
    }

    /// `struct-<name>-<field>-<field>...`, or `iblock-...` for blocks.
    pub fn mangled_name(&self, names: &dyn StringLookup) -> &str {
        self.mangled.get_or_init(|| {
            let mut out = String::from(self.kind.mangled_prefix());
            out.push_str(names.lookup(self.name));
            for field in &self.fields {
                out.push('-');
                out.push_str(field.ty.mangled_name(names));
            }
            out
        })
    }
}

// Nested definitions are released with a worklist: the default recursive
// drop would use one stack frame per nesting level.
impl Drop for Aggregate {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.fields);
        while let Some(mut field) = pending.pop() {
            if let Some(def) = field.ty.take_aggregate() {
                if let Ok(mut def) = Rc::try_unwrap(def) {
                    pending.append(&mut def.fields);
                }
            }
        }
    }
}
