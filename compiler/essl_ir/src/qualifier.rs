//! Precision, storage and layout qualifiers.

use std::fmt;

/// Precision qualifier.
///
/// Ordered from weakest to strongest so that `max` picks the higher one.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Precision {
    /// No precision given and no default in scope.
    #[default]
    Undefined,
    Low,
    Medium,
    High,
}

impl Precision {
    /// ESSL keyword, or `""` for `Undefined`.
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Undefined => "",
            Self::Low => "lowp",
            Self::Medium => "mediump",
            Self::High => "highp",
        }
    }
}

/// Storage / parameter qualifier.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Qualifier {
    /// Local temporary.
    #[default]
    Temporary,
    /// Global without storage qualifier.
    Global,
    Const,
    /// ESSL 1.00 vertex input.
    Attribute,
    /// ESSL 1.00 fragment input.
    VaryingIn,
    /// ESSL 1.00 vertex output.
    VaryingOut,
    Uniform,

    /// ESSL 3.00 vertex input.
    VertexIn,
    /// ESSL 3.00 fragment output.
    FragmentOut,
    SmoothOut,
    FlatOut,
    CentroidOut,
    SmoothIn,
    FlatIn,
    CentroidIn,

    // Function parameters
    In,
    Out,
    InOut,
    /// `const in` parameter.
    ConstReadOnly,

    // Built-in variables
    Position,
    PointSize,
    FragCoord,
    FrontFacing,
    PointCoord,
    FragColor,
    FragData,
    FragDepth,
    InstanceId,
    VertexId,
}

impl Qualifier {
    /// True for qualifiers valid on function parameters.
    pub const fn is_parameter(self) -> bool {
        matches!(self, Self::In | Self::Out | Self::InOut | Self::ConstReadOnly)
    }

    /// True for qualifiers that denote stage inputs.
    pub const fn is_shader_input(self) -> bool {
        matches!(
            self,
            Self::Attribute
                | Self::VaryingIn
                | Self::VertexIn
                | Self::SmoothIn
                | Self::FlatIn
                | Self::CentroidIn
        )
    }

    /// True for qualifiers that denote stage outputs.
    pub const fn is_shader_output(self) -> bool {
        matches!(
            self,
            Self::VaryingOut
                | Self::FragmentOut
                | Self::SmoothOut
                | Self::FlatOut
                | Self::CentroidOut
        )
    }

    /// Readable name for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Temporary => "Temporary",
            Self::Global => "Global",
            Self::Const => "const",
            Self::Attribute => "attribute",
            Self::VaryingIn | Self::VaryingOut => "varying",
            Self::Uniform => "uniform",
            Self::VertexIn | Self::In => "in",
            Self::FragmentOut | Self::Out => "out",
            Self::SmoothOut => "smooth out",
            Self::FlatOut => "flat out",
            Self::CentroidOut => "centroid out",
            Self::SmoothIn => "smooth in",
            Self::FlatIn => "flat in",
            Self::CentroidIn => "centroid in",
            Self::InOut => "inout",
            Self::ConstReadOnly => "const",
            Self::Position => "Position",
            Self::PointSize => "PointSize",
            Self::FragCoord => "FragCoord",
            Self::FrontFacing => "FrontFacing",
            Self::PointCoord => "PointCoord",
            Self::FragColor => "FragColor",
            Self::FragData => "FragData",
            Self::FragDepth => "FragDepth",
            Self::InstanceId => "InstanceID",
            Self::VertexId => "VertexID",
        }
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Matrix layout inside a uniform block.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum MatrixPacking {
    #[default]
    Unspecified,
    RowMajor,
    ColumnMajor,
}

/// Memory layout of a uniform block.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockStorage {
    #[default]
    Unspecified,
    Shared,
    Packed,
    Std140,
}

/// `layout(...)` qualifier contents.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutQualifier {
    /// `location = N`
    pub location: Option<u32>,
    pub matrix_packing: MatrixPacking,
    pub block_storage: BlockStorage,
}

impl LayoutQualifier {
    /// True if nothing was specified.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Layout with only a location.
    pub fn with_location(location: u32) -> Self {
        Self {
            location: Some(location),
            ..Self::default()
        }
    }
}
