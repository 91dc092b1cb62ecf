//! Parser-facing type description.
//!
//! The grammar layer accumulates a `PublicType` while it reads a type
//! specifier (`highp vec4`, `mat3`, `MyStruct[4]`, ...) and hands it over
//! once the declaration's type is final. `TypeDesc::from_public` turns it
//! into the immutable descriptor the table stores.

use std::rc::Rc;

use essl_ir::{BasicType, LayoutQualifier, Precision, Qualifier};

use crate::Aggregate;

/// A type as seen by the grammar, before it becomes a `TypeDesc`.
#[derive(Clone, Debug)]
pub struct PublicType {
    pub basic: BasicType,
    pub precision: Precision,
    pub qualifier: Qualifier,
    pub invariant: bool,
    pub layout: LayoutQualifier,
    /// Vector length, or matrix row count. At least 1.
    pub primary_size: u8,
    /// Matrix column count; 1 if not a matrix.
    pub secondary_size: u8,
    /// Array length. `Some(UNSIZED_ARRAY)` for `T[]`.
    pub array: Option<u32>,
    /// The struct or interface block this type names.
    pub user_def: Option<Rc<Aggregate>>,
}

impl PublicType {
    /// A scalar or opaque type (`float`, `bool`, `sampler2D`, ...).
    pub fn scalar(basic: BasicType) -> Self {
        Self {
            basic,
            precision: Precision::Undefined,
            qualifier: Qualifier::Temporary,
            invariant: false,
            layout: LayoutQualifier::default(),
            primary_size: 1,
            secondary_size: 1,
            array: None,
            user_def: None,
        }
    }

    /// A vector type (`vec3`, `ivec2`, ...).
    pub fn vector(basic: BasicType, size: u8) -> Self {
        debug_assert!((2..=4).contains(&size), "vector size out of range");
        Self {
            primary_size: size,
            ..Self::scalar(basic)
        }
    }

    /// A float matrix with `rows` x `columns` components.
    pub fn matrix(rows: u8, columns: u8) -> Self {
        debug_assert!((2..=4).contains(&rows) && (2..=4).contains(&columns));
        Self {
            primary_size: rows,
            secondary_size: columns,
            ..Self::scalar(BasicType::Float)
        }
    }

    /// A type naming a struct or interface block.
    pub fn aggregate(def: Rc<Aggregate>) -> Self {
        let basic = def.basic_type();
        Self {
            user_def: Some(def),
            ..Self::scalar(basic)
        }
    }

    #[must_use]
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    #[must_use]
    pub fn with_qualifier(mut self, qualifier: Qualifier) -> Self {
        self.qualifier = qualifier;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: LayoutQualifier) -> Self {
        self.layout = layout;
        self
    }

    /// Make this an array of `len` elements.
    #[must_use]
    pub fn with_array(mut self, len: u32) -> Self {
        self.array = Some(len);
        self
    }

    #[must_use]
    pub fn invariant(mut self) -> Self {
        self.invariant = true;
        self
    }

    pub fn is_array(&self) -> bool {
        self.array.is_some()
    }

    pub fn is_matrix(&self) -> bool {
        self.secondary_size > 1
    }

    pub fn is_vector(&self) -> bool {
        self.secondary_size == 1 && self.primary_size > 1
    }
}
