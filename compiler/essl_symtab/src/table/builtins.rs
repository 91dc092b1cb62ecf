//! Built-in tiers and dialect gating.
//!
//! The bottom three levels of every table hold built-ins. The shared tier is
//! always searched; each version tier is searched only when the lookup's
//! dialect is exactly that version. The two version tiers therefore never
//! compete: for any lookup at least one of them is invisible.

/// Fixed built-in tiers, by level index.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum BuiltinLevel {
    /// Built-ins shared by every dialect.
    Common = 0,
    /// ESSL 1.00 only.
    Essl1 = 1,
    /// ESSL 3.00 only.
    Essl3 = 2,
}

impl BuiltinLevel {
    pub const ALL: [BuiltinLevel; 3] = [Self::Common, Self::Essl1, Self::Essl3];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Topmost built-in level.
pub const LAST_BUILTIN_LEVEL: usize = BuiltinLevel::Essl3.index();

/// Level created by the first `push_scope`.
pub const GLOBAL_LEVEL: usize = LAST_BUILTIN_LEVEL + 1;

/// Shader dialect a lookup is made for, as written in `#version`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ShaderVersion(u32);

impl ShaderVersion {
    /// `#version 100`
    pub const ESSL1: ShaderVersion = ShaderVersion(100);
    /// `#version 300 es`
    pub const ESSL3: ShaderVersion = ShaderVersion(300);

    pub const fn new(version: u32) -> Self {
        ShaderVersion(version)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// May a lookup for `version` search `level`?
fn is_eligible(level: usize, version: ShaderVersion) -> bool {
    if level == BuiltinLevel::Essl1.index() {
        version == ShaderVersion::ESSL1
    } else if level == BuiltinLevel::Essl3.index() {
        version == ShaderVersion::ESSL3
    } else {
        true
    }
}

/// The next level below `level` that a lookup for `version` may search.
///
/// `None` once level 0 has been passed.
pub fn next_eligible_level(level: usize, version: ShaderVersion) -> Option<usize> {
    (0..level).rev().find(|&l| is_eligible(l, version))
}

/// Levels a lookup for `version` searches, from `top` downwards.
///
/// Both `find` and `find_builtin` walk this sequence, so the two can never
/// disagree about which tiers a dialect sees.
pub fn eligible_levels(top: usize, version: ShaderVersion) -> impl Iterator<Item = usize> {
    let first = if is_eligible(top, version) {
        Some(top)
    } else {
        next_eligible_level(top, version)
    };
    std::iter::successors(first, move |&level| next_eligible_level(level, version))
}
