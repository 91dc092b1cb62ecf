//! Sharded string interner for identifier storage.
//!
//! Symbol names, struct names, field names and mangled function signatures
//! are all interned, so level maps can key on a `Name` instead of a string.

use super::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Per-shard storage for interned strings.
struct InternShard {
    /// Map from string content to local index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents.
    strings: Vec<&'static str>,
}

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InternError {
    /// Shard exceeded its local index space.
    #[error("interner shard {shard_idx} exceeded capacity: {count} strings, max is {}", Name::MAX_LOCAL)]
    ShardOverflow { shard_idx: usize, count: usize },
}

impl InternShard {
    fn new() -> Self {
        Self {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(128),
        }
    }

    fn with_empty() -> Self {
        let mut shard = Self::new();
        // Index 0 of shard 0 is Name::EMPTY
        let empty: &'static str = "";
        shard.map.insert(empty, 0);
        shard.strings.push(empty);
        shard
    }

    fn push(&mut self, shard_idx: usize, leaked: &'static str) -> Result<u32, InternError> {
        let local = u32::try_from(self.strings.len())
            .ok()
            .filter(|&local| local <= Name::MAX_LOCAL)
            .ok_or(InternError::ShardOverflow {
                shard_idx,
                count: self.strings.len(),
            })?;
        self.strings.push(leaked);
        self.map.insert(leaked, local);
        Ok(local)
    }
}

/// Sharded string interner.
///
/// Lookup and equality of interned strings are O(1). Strings are leaked and
/// live for the rest of the process, which matches the lifetime of a
/// compiler's identifier pool.
pub struct StringInterner {
    shards: [RwLock<InternShard>; Name::NUM_SHARDS],
    /// Total count of interned strings across all shards.
    total_count: AtomicUsize,
}

impl StringInterner {
    /// Create a new interner with ESSL keywords and built-in type names
    /// pre-interned.
    pub fn new() -> Self {
        let shards = std::array::from_fn(|i| {
            if i == 0 {
                RwLock::new(InternShard::with_empty())
            } else {
                RwLock::new(InternShard::new())
            }
        });

        let interner = Self {
            shards,
            total_count: AtomicUsize::new(1),
        };
        interner.pre_intern_keywords();
        interner
    }

    /// Compute shard for a string based on its hash.
    #[inline]
    fn shard_for(s: &str) -> usize {
        let mut hash = 0u32;
        for byte in s.bytes().take(8) {
            hash = hash.wrapping_mul(31).wrapping_add(u32::from(byte));
        }
        (hash as usize) % Name::NUM_SHARDS
    }

    /// Shared fast/slow path for borrowed and owned input.
    ///
    /// `S` is only converted into an owned, leaked string when the slow
    /// path actually inserts.
    fn try_intern_impl<S>(&self, s: S) -> Result<Name, InternError>
    where
        S: AsRef<str> + Into<Box<str>>,
    {
        let shard_idx = Self::shard_for(s.as_ref());
        #[expect(
            clippy::cast_possible_truncation,
            reason = "shard_idx is bounded by NUM_SHARDS (16)"
        )]
        let shard_idx_u32 = shard_idx as u32;
        let shard = &self.shards[shard_idx];

        {
            let guard = shard.read();
            if let Some(&local) = guard.map.get(s.as_ref()) {
                return Ok(Name::new(shard_idx_u32, local));
            }
        }

        let mut guard = shard.write();

        // Another writer may have inserted it between the two locks.
        if let Some(&local) = guard.map.get(s.as_ref()) {
            return Ok(Name::new(shard_idx_u32, local));
        }

        let leaked: &'static str = Box::leak(s.into());
        let local = guard.push(shard_idx, leaked)?;
        self.total_count.fetch_add(1, Ordering::Relaxed);

        Ok(Name::new(shard_idx_u32, local))
    }

    /// Try to intern a string, returning an error on shard overflow.
    #[inline]
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        self.try_intern_impl(s)
    }

    /// Intern a string.
    ///
    /// # Panics
    /// Panics if a shard exceeds capacity. Use `try_intern` to handle that.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Try to intern an owned String without copying it again.
    pub fn try_intern_owned(&self, s: String) -> Result<Name, InternError> {
        self.try_intern_impl(s)
    }

    /// Intern an owned String, e.g. a freshly built mangled signature.
    ///
    /// # Panics
    /// Panics if a shard exceeds capacity.
    pub fn intern_owned(&self, s: String) -> Name {
        self.try_intern_owned(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Find an already-interned string without inserting it.
    ///
    /// Lookups by a freshly built key (e.g. a call-site signature) use this
    /// so that probing for an undeclared overload does not grow the pool.
    pub fn get(&self, s: &str) -> Option<Name> {
        let shard_idx = Self::shard_for(s);
        #[expect(
            clippy::cast_possible_truncation,
            reason = "shard_idx is bounded by NUM_SHARDS (16)"
        )]
        let shard_idx_u32 = shard_idx as u32;
        let guard = self.shards[shard_idx].read();
        guard
            .map
            .get(s)
            .map(|&local| Name::new(shard_idx_u32, local))
    }

    /// Look up the string for a Name.
    pub fn lookup(&self, name: Name) -> &str {
        self.lookup_static(name)
    }

    /// Look up the string for a Name with `'static` lifetime.
    ///
    /// Interned strings are leaked and never freed.
    pub fn lookup_static(&self, name: Name) -> &'static str {
        let guard = self.shards[name.shard()].read();
        guard.strings[name.local()]
    }

    /// Pre-intern ESSL keywords and the names the built-in tiers use.
    fn pre_intern_keywords(&self) {
        const KEYWORDS: &[&str] = &[
            // Storage and parameter qualifiers
            "attribute",
            "const",
            "uniform",
            "varying",
            "in",
            "out",
            "inout",
            "invariant",
            "centroid",
            "flat",
            "smooth",
            "layout",
            // Precision
            "precision",
            "lowp",
            "mediump",
            "highp",
            // Control flow
            "break",
            "continue",
            "do",
            "for",
            "while",
            "switch",
            "case",
            "default",
            "if",
            "else",
            "discard",
            "return",
            "struct",
            "true",
            "false",
            // Basic types
            "void",
            "bool",
            "int",
            "uint",
            "float",
            "vec2",
            "vec3",
            "vec4",
            "ivec2",
            "ivec3",
            "ivec4",
            "uvec2",
            "uvec3",
            "uvec4",
            "bvec2",
            "bvec3",
            "bvec4",
            "mat2",
            "mat3",
            "mat4",
            "sampler2D",
            "sampler3D",
            "samplerCube",
            "sampler2DArray",
            "samplerExternalOES",
            "sampler2DShadow",
            "samplerCubeShadow",
            "sampler2DArrayShadow",
            // Common built-ins
            "main",
            "gl_Position",
            "gl_PointSize",
            "gl_FragCoord",
            "gl_FrontFacing",
            "gl_PointCoord",
            "gl_FragColor",
            "gl_FragData",
            "gl_FragDepth",
            "gl_InstanceID",
            "gl_VertexID",
            "gl_DepthRange",
            "gl_DepthRangeParameters",
        ];

        for kw in KEYWORDS {
            self.intern(kw);
        }
    }

    /// Number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.total_count.load(Ordering::Relaxed)
    }

    /// True if only the empty string is interned.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Read access to interned names.
///
/// Type and symbol code takes `&impl StringLookup` (or `&dyn StringLookup`)
/// so that it never depends on the concrete interner.
pub trait StringLookup {
    /// Look up the string for an interned name.
    fn lookup(&self, name: Name) -> &str;
}

impl StringLookup for StringInterner {
    fn lookup(&self, name: Name) -> &str {
        StringInterner::lookup(self, name)
    }
}

impl StringLookup for SharedInterner {
    fn lookup(&self, name: Name) -> &str {
        self.0.lookup(name)
    }
}

/// Shared interner handle.
///
/// The driver creates one per compilation and hands clones to the symbol
/// table, which needs to intern mangled function signatures on insert.
#[derive(Clone)]
pub struct SharedInterner(Arc<StringInterner>);

impl SharedInterner {
    /// Create a new shared interner.
    pub fn new() -> Self {
        SharedInterner(Arc::new(StringInterner::new()))
    }
}

impl Default for SharedInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for SharedInterner {
    type Target = StringInterner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
