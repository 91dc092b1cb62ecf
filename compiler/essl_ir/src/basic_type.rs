//! Basic type kind for ESSL types.
//!
//! Every type descriptor carries exactly one `BasicType`. Vector and matrix
//! shape is carried separately (primary/secondary size), so `vec4` and
//! `float` share `BasicType::Float`.
//!
//! # Kind Ranges
//!
//! Discriminants are grouped so that category checks are range compares:
//! - 0-15: Scalar component kinds (`Void`, `Float`, `Int`, `UInt`, `Bool`)
//! - 16-63: Opaque sampler kinds
//! - 64-79: Aggregates (`Struct`, `InterfaceBlock`)

use std::fmt;

/// Type kind discriminant.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum BasicType {
    // === Scalar components (0-15) ===
    /// No value; only valid as a function return type.
    Void = 0,
    /// 32-bit float.
    Float = 1,
    /// 32-bit signed integer.
    Int = 2,
    /// 32-bit unsigned integer (ESSL 3.00).
    UInt = 3,
    /// Boolean.
    Bool = 4,

    // === Samplers (16-63) ===
    /// `sampler2D`
    Sampler2D = 16,
    /// `sampler3D`
    Sampler3D = 17,
    /// `samplerCube`
    SamplerCube = 18,
    /// `sampler2DArray`
    Sampler2DArray = 19,
    /// `samplerExternalOES`
    SamplerExternalOES = 20,
    /// `isampler2D`
    ISampler2D = 24,
    /// `isampler3D`
    ISampler3D = 25,
    /// `isamplerCube`
    ISamplerCube = 26,
    /// `isampler2DArray`
    ISampler2DArray = 27,
    /// `usampler2D`
    USampler2D = 32,
    /// `usampler3D`
    USampler3D = 33,
    /// `usamplerCube`
    USamplerCube = 34,
    /// `usampler2DArray`
    USampler2DArray = 35,
    /// `sampler2DShadow`
    Sampler2DShadow = 40,
    /// `samplerCubeShadow`
    SamplerCubeShadow = 41,
    /// `sampler2DArrayShadow`
    Sampler2DArrayShadow = 42,

    // === Aggregates (64-79) ===
    /// User-defined struct.
    Struct = 64,
    /// Uniform block.
    InterfaceBlock = 65,
}

impl BasicType {
    /// Every kind, in discriminant order.
    pub const ALL: [BasicType; 23] = [
        Self::Void,
        Self::Float,
        Self::Int,
        Self::UInt,
        Self::Bool,
        Self::Sampler2D,
        Self::Sampler3D,
        Self::SamplerCube,
        Self::Sampler2DArray,
        Self::SamplerExternalOES,
        Self::ISampler2D,
        Self::ISampler3D,
        Self::ISamplerCube,
        Self::ISampler2DArray,
        Self::USampler2D,
        Self::USampler3D,
        Self::USamplerCube,
        Self::USampler2DArray,
        Self::Sampler2DShadow,
        Self::SamplerCubeShadow,
        Self::Sampler2DArrayShadow,
        Self::Struct,
        Self::InterfaceBlock,
    ];

    /// True for any opaque sampler kind.
    #[inline]
    pub const fn is_sampler(self) -> bool {
        let v = self as u8;
        v >= 16 && v < 64
    }

    /// True for `isampler*` and `usampler*`.
    #[inline]
    pub const fn is_integer_sampler(self) -> bool {
        let v = self as u8;
        v >= 24 && v < 40
    }

    /// True for the shadow comparison samplers.
    #[inline]
    pub const fn is_shadow_sampler(self) -> bool {
        matches!(
            self,
            Self::Sampler2DShadow | Self::SamplerCubeShadow | Self::Sampler2DArrayShadow
        )
    }

    /// True for `Struct` and `InterfaceBlock`.
    #[inline]
    pub const fn is_aggregate(self) -> bool {
        matches!(self, Self::Struct | Self::InterfaceBlock)
    }

    /// True for the numeric and boolean component kinds.
    #[inline]
    pub const fn is_component(self) -> bool {
        matches!(self, Self::Float | Self::Int | Self::UInt | Self::Bool)
    }

    /// Fixed mangling tag for this kind.
    ///
    /// Each numeric and sampler kind maps to a distinct tag. A size digit
    /// always follows the tag, and no tag extends another by a digit, so
    /// mangled types stay unambiguous. `Void` has no tag. Aggregates splice
    /// in their own mangled name instead.
    pub const fn mangled_tag(self) -> Option<&'static str> {
        Some(match self {
            Self::Float => "f",
            Self::Int => "i",
            Self::UInt => "u",
            Self::Bool => "b",
            Self::Sampler2D => "s2",
            Self::Sampler3D => "s3",
            Self::SamplerCube => "sC",
            Self::Sampler2DArray => "s2a",
            Self::SamplerExternalOES => "sext",
            Self::ISampler2D => "is2",
            Self::ISampler3D => "is3",
            Self::ISamplerCube => "isC",
            Self::ISampler2DArray => "is2a",
            Self::USampler2D => "us2",
            Self::USampler3D => "us3",
            Self::USamplerCube => "usC",
            Self::USampler2DArray => "us2a",
            Self::Sampler2DShadow => "s2s",
            Self::SamplerCubeShadow => "sCs",
            Self::Sampler2DArrayShadow => "s2as",
            Self::Void | Self::Struct | Self::InterfaceBlock => return None,
        })
    }

    /// ESSL spelling of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Float => "float",
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Bool => "bool",
            Self::Sampler2D => "sampler2D",
            Self::Sampler3D => "sampler3D",
            Self::SamplerCube => "samplerCube",
            Self::Sampler2DArray => "sampler2DArray",
            Self::SamplerExternalOES => "samplerExternalOES",
            Self::ISampler2D => "isampler2D",
            Self::ISampler3D => "isampler3D",
            Self::ISamplerCube => "isamplerCube",
            Self::ISampler2DArray => "isampler2DArray",
            Self::USampler2D => "usampler2D",
            Self::USampler3D => "usampler3D",
            Self::USamplerCube => "usamplerCube",
            Self::USampler2DArray => "usampler2DArray",
            Self::Sampler2DShadow => "sampler2DShadow",
            Self::SamplerCubeShadow => "samplerCubeShadow",
            Self::Sampler2DArrayShadow => "sampler2DArrayShadow",
            Self::Struct => "structure",
            Self::InterfaceBlock => "interface block",
        }
    }
}

impl fmt::Debug for BasicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BasicType::{}", self.name())
    }
}

impl fmt::Display for BasicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const _: () = assert!(std::mem::size_of::<BasicType>() == 1);
