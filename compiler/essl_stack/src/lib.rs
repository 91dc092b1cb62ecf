//! Stack safety for recursive type walks.
//!
//! Mangling and the structural aggregate queries (`contains_arrays`,
//! `object_size`, `contains_samplers`, ...) recurse once per level of
//! struct-within-struct nesting. Shader sources are untrusted input, so a
//! generated file with thousands of nested struct declarations must not be
//! able to overflow the compiler's stack.
//!
//! # Platform Support
//!
//! - **Native targets**: grows the stack on demand via `stacker`.
//! - **WASM targets**: passthrough.
//!
//! # Usage
//!
//! ```text
//! pub fn contains_arrays(&self) -> bool {
//!     ensure_sufficient_stack(|| {
//!         self.fields
//!             .iter()
//!             .any(|f| f.ty.is_array() || f.ty.is_structure_containing_arrays())
//!     })
//! }
//! ```

/// Minimum stack space to keep available (64KB red zone).
const RED_ZONE: usize = 64 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version, calls `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
