//! Type descriptors.
//!
//! A `TypeDesc` is built once per declared type and owned by whatever
//! declares it: a variable, a function parameter, a function's return, or an
//! aggregate field. It is immutable except for one transition: an unsized
//! array (`T[]`) getting its length once the initializer is known.
//!
//! # Shape
//!
//! `primary_size` and `secondary_size` are both at least 1:
//! - scalar: `1 x 1`
//! - vector: `n x 1`, `n > 1`
//! - matrix: `r x c`, `c > 1`
//!
//! Samplers and aggregates are always `1 x 1`.

mod mangle;

use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;

use essl_ir::{BasicType, LayoutQualifier, Precision, Qualifier, StringLookup};

use crate::{Aggregate, PublicType};

/// Array length of a declared-but-unsized array (`float a[];`).
pub const UNSIZED_ARRAY: u32 = 0;

/// Ceiling for `object_size`. Sizes saturate here rather than overflow.
pub const MAX_OBJECT_SIZE: usize = 0x7FFF_FFFF;

/// Type of a declared entity.
#[derive(Clone, Debug)]
pub struct TypeDesc {
    basic: BasicType,
    precision: Precision,
    qualifier: Qualifier,
    invariant: bool,
    layout: LayoutQualifier,
    primary_size: u8,
    secondary_size: u8,
    array_size: Option<u32>,
    /// Present iff `basic` is `Struct` or `InterfaceBlock`.
    aggregate: Option<Rc<Aggregate>>,
    /// 0 for non-aggregates.
    deepest_struct_nesting: u32,
    /// Memoized mangled name; cleared when the array size is resolved.
    mangled: OnceCell<String>,
}

impl TypeDesc {
    /// A numeric, boolean, void or sampler type.
    ///
    /// Aggregate types must go through `from_aggregate` or `from_public`.
    pub fn new(
        basic: BasicType,
        precision: Precision,
        qualifier: Qualifier,
        primary_size: u8,
        secondary_size: u8,
    ) -> Self {
        debug_assert!(
            !basic.is_aggregate(),
            "aggregate types need their definition"
        );
        debug_assert!(primary_size >= 1 && secondary_size >= 1);
        Self {
            basic,
            precision,
            qualifier,
            invariant: false,
            layout: LayoutQualifier::default(),
            primary_size: primary_size.max(1),
            secondary_size: secondary_size.max(1),
            array_size: None,
            aggregate: None,
            deepest_struct_nesting: 0,
            mangled: OnceCell::new(),
        }
    }

    /// Shorthand for a temporary, precision-less scalar.
    pub fn scalar(basic: BasicType) -> Self {
        Self::new(basic, Precision::Undefined, Qualifier::Temporary, 1, 1)
    }

    /// Shorthand for a temporary, precision-less vector.
    pub fn vector(basic: BasicType, size: u8) -> Self {
        Self::new(basic, Precision::Undefined, Qualifier::Temporary, size, 1)
    }

    /// A value of a struct or interface-block type.
    pub fn from_aggregate(def: Rc<Aggregate>) -> Self {
        let deepest_struct_nesting = def.deepest_nesting();
        Self {
            basic: def.basic_type(),
            precision: Precision::Undefined,
            qualifier: Qualifier::Temporary,
            invariant: false,
            layout: LayoutQualifier::default(),
            primary_size: 1,
            secondary_size: 1,
            array_size: None,
            aggregate: Some(def),
            deepest_struct_nesting,
            mangled: OnceCell::new(),
        }
    }

    /// Finalize a parser-provided type.
    ///
    /// A public type with a struct kind but no definition (or a definition
    /// but a non-aggregate kind) is a parser bug. Debug builds assert; release
    /// builds keep the aggregate only when the kind agrees with it.
    pub fn from_public(public: &PublicType) -> Self {
        debug_assert_eq!(
            public.basic.is_aggregate(),
            public.user_def.is_some(),
            "aggregate reference must be present iff the kind is an aggregate"
        );
        let aggregate = public
            .user_def
            .clone()
            .filter(|def| def.basic_type() == public.basic);
        let deepest_struct_nesting = aggregate.as_ref().map_or(0, |def| def.deepest_nesting());
        Self {
            basic: public.basic,
            precision: public.precision,
            qualifier: public.qualifier,
            invariant: public.invariant,
            layout: public.layout,
            primary_size: public.primary_size.max(1),
            secondary_size: public.secondary_size.max(1),
            array_size: public.array,
            aggregate,
            deepest_struct_nesting,
            mangled: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn with_array(mut self, len: u32) -> Self {
        self.set_array_size(len);
        self
    }

    #[must_use]
    pub fn with_qualifier(mut self, qualifier: Qualifier) -> Self {
        self.qualifier = qualifier;
        self
    }

    #[must_use]
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Make this an array of `len`, or resolve an unsized array's length.
    ///
    /// Invalidates the memoized mangled name.
    pub fn set_array_size(&mut self, len: u32) {
        self.array_size = Some(len);
        self.mangled = OnceCell::new();
    }

    /// The same type with array-ness removed.
    #[must_use]
    pub fn element_type(&self) -> Self {
        let mut element = self.clone();
        if element.array_size.take().is_some() {
            element.mangled = OnceCell::new();
        }
        element
    }

    pub fn basic_type(&self) -> BasicType {
        self.basic
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn qualifier(&self) -> Qualifier {
        self.qualifier
    }

    pub fn is_invariant(&self) -> bool {
        self.invariant
    }

    pub fn layout(&self) -> LayoutQualifier {
        self.layout
    }

    /// Vector length or matrix row count.
    pub fn nominal_size(&self) -> u8 {
        self.primary_size
    }

    /// Matrix column count; 1 for non-matrices.
    pub fn secondary_size(&self) -> u8 {
        self.secondary_size
    }

    pub fn is_matrix(&self) -> bool {
        self.secondary_size > 1
    }

    pub fn is_vector(&self) -> bool {
        self.secondary_size == 1 && self.primary_size > 1
    }

    pub fn is_scalar(&self) -> bool {
        self.primary_size == 1 && self.secondary_size == 1 && !self.basic.is_aggregate()
    }

    pub fn is_array(&self) -> bool {
        self.array_size.is_some()
    }

    /// Declared as `T[]` and not yet resolved.
    pub fn is_unsized_array(&self) -> bool {
        self.array_size == Some(UNSIZED_ARRAY)
    }

    /// Array length, if this is an array.
    pub fn array_size(&self) -> Option<u32> {
        self.array_size
    }

    pub fn is_sampler(&self) -> bool {
        self.basic.is_sampler()
    }

    /// The struct or interface block this type refers to.
    pub fn aggregate(&self) -> Option<&Rc<Aggregate>> {
        self.aggregate.as_ref()
    }

    /// The referenced struct, if this is a struct type.
    pub fn structure(&self) -> Option<&Rc<Aggregate>> {
        self.aggregate.as_ref().filter(|def| !def.is_interface_block())
    }

    /// The referenced interface block, if this is a block type.
    pub fn interface_block(&self) -> Option<&Rc<Aggregate>> {
        self.aggregate.as_ref().filter(|def| def.is_interface_block())
    }

    /// Detach the aggregate reference, for iterative teardown.
    pub(crate) fn take_aggregate(&mut self) -> Option<Rc<Aggregate>> {
        self.aggregate.take()
    }

    /// Deepest aggregate-within-aggregate nesting; 0 for non-aggregates.
    pub fn deepest_struct_nesting(&self) -> u32 {
        self.deepest_struct_nesting
    }

    /// Canonical structural encoding, used as an overload and equality key.
    ///
    /// Computed on first use and cached.
    pub fn mangled_name(&self, names: &dyn StringLookup) -> &str {
        self.mangled.get_or_init(|| {
            let mut out = String::new();
            mangle::build_mangled_name(self, names, &mut out);
            out
        })
    }

    /// Storage size in components, saturating at `MAX_OBJECT_SIZE`.
    ///
    /// Scalars, vectors and matrices count their components. Aggregates sum
    /// their fields. Arrays multiply the element size by their length.
    pub fn object_size(&self) -> usize {
        let element = match &self.aggregate {
            Some(def) => def.object_size(),
            None => usize::from(self.primary_size) * usize::from(self.secondary_size),
        };
        match self.array_size {
            None => element,
            Some(len) => usize::try_from(len)
                .ok()
                .and_then(|len| element.checked_mul(len))
                .filter(|&size| size <= MAX_OBJECT_SIZE)
                .unwrap_or(MAX_OBJECT_SIZE),
        }
    }

    /// Total size of the referenced aggregate.
    ///
    /// Calling this on a non-aggregate type is a caller bug: debug builds
    /// panic, release builds return 0.
    pub fn struct_size(&self) -> usize {
        debug_assert!(self.aggregate.is_some(), "not a struct");
        self.aggregate.as_ref().map_or(0, |def| def.object_size())
    }

    /// True if the referenced aggregate contains an array at any depth.
    pub fn is_structure_containing_arrays(&self) -> bool {
        self.aggregate.as_ref().is_some_and(|def| def.contains_arrays())
    }

    /// True if the referenced aggregate contains a field of `basic` at any depth.
    pub fn is_structure_containing_type(&self, basic: BasicType) -> bool {
        self.aggregate
            .as_ref()
            .is_some_and(|def| def.contains_type(basic))
    }

    /// True if the referenced aggregate contains a sampler at any depth.
    pub fn is_structure_containing_samplers(&self) -> bool {
        self.aggregate
            .as_ref()
            .is_some_and(|def| def.contains_samplers())
    }

    /// Same kind, shape and aggregate structure, ignoring array-ness,
    /// precision and qualifiers.
    pub fn same_element_type(&self, other: &TypeDesc) -> bool {
        self.basic == other.basic
            && self.primary_size == other.primary_size
            && self.secondary_size == other.secondary_size
            && same_aggregate(self.aggregate.as_ref(), other.aggregate.as_ref())
    }
}

fn same_aggregate(a: Option<&Rc<Aggregate>>, b: Option<&Rc<Aggregate>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.same_structure(b),
        _ => false,
    }
}

/// Structural equality: kind, shape, array length and, for aggregates, name
/// and field types. Precision, qualifiers and layout do not participate.
///
/// Two types are equal iff their mangled names are.
impl PartialEq for TypeDesc {
    fn eq(&self, other: &Self) -> bool {
        self.same_element_type(other) && self.array_size == other.array_size
    }
}

impl Eq for TypeDesc {}

/// Readable form for diagnostics, e.g. `uniform highp array[2] of 3-component
/// vector of float`.
impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.invariant {
            f.write_str("invariant ")?;
        }
        if !matches!(self.qualifier, Qualifier::Temporary | Qualifier::Global) {
            write!(f, "{} ", self.qualifier)?;
        }
        if self.precision != Precision::Undefined {
            write!(f, "{} ", self.precision.keyword())?;
        }
        if let Some(len) = self.array_size {
            write!(f, "array[{len}] of ")?;
        }
        if self.is_matrix() {
            write!(
                f,
                "{}X{} matrix of ",
                self.primary_size, self.secondary_size
            )?;
        } else if self.is_vector() {
            write!(f, "{}-component vector of ", self.primary_size)?;
        }
        f.write_str(self.basic.name())
    }
}

#[cfg(test)]
mod tests;
