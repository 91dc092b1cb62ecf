//! Function symbols and their overload key.

use essl_ir::{Name, StringLookup};

use crate::TypeDesc;

/// A function parameter. Prototypes may leave parameters unnamed.
#[derive(Clone, Debug)]
pub struct Param {
    pub name: Option<Name>,
    pub ty: TypeDesc,
}

impl Param {
    pub fn new(name: Name, ty: TypeDesc) -> Self {
        Param {
            name: Some(name),
            ty,
        }
    }

    pub fn unnamed(ty: TypeDesc) -> Self {
        Param { name: None, ty }
    }
}

/// A function prototype or definition.
///
/// Owns its return type and parameter types; they are dropped with it.
#[derive(Clone, Debug)]
pub struct Function {
    return_type: TypeDesc,
    params: Vec<Param>,
    defined: bool,
    extension: Option<Name>,
}

impl Function {
    pub fn new(return_type: TypeDesc, params: Vec<Param>) -> Self {
        Function {
            return_type,
            params,
            defined: false,
            extension: None,
        }
    }

    /// Require `extension` to be enabled before the function can be called.
    #[must_use]
    pub fn with_extension(mut self, extension: Name) -> Self {
        self.extension = Some(extension);
        self
    }

    pub fn return_type(&self) -> &TypeDesc {
        &self.return_type
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    pub fn push_param(&mut self, param: Param) {
        self.params.push(param);
    }

    /// True once a body has been seen.
    pub fn is_defined(&self) -> bool {
        self.defined
    }

    pub fn set_defined(&mut self) {
        self.defined = true;
    }

    pub fn extension(&self) -> Option<Name> {
        self.extension
    }

    /// `name(<param mangled>...)`, the key that tells overloads apart.
    ///
    /// Two declarations with the same signature are the same function.
    pub fn mangled_signature(&self, name: &str, names: &dyn StringLookup) -> String {
        build_signature(name, self.params.iter().map(|p| &p.ty), names)
    }
}

/// Build a signature from a name and parameter (or argument) types.
///
/// Each type's mangled name ends in a size digit or a `]`, and no kind tag
/// starts with a digit, so concatenating them is unambiguous.
pub(crate) fn build_signature<'a>(
    name: &str,
    params: impl IntoIterator<Item = &'a TypeDesc>,
    names: &dyn StringLookup,
) -> String {
    let mut out = String::with_capacity(name.len() + 8);
    out.push_str(name);
    out.push('(');
    for ty in params {
        out.push_str(ty.mangled_name(names));
    }
    out.push(')');
    out
}
