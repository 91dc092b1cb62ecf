//! Mangled-name construction.
//!
//! Layout: `[m|v] <kind> <primary digit> [<secondary digit>] [ '[' len ']' ]`
//!
//! - `m` marks a matrix, `v` a vector; scalars, samplers and aggregates
//!   have no shape prefix.
//! - `<kind>` is `BasicType::mangled_tag`, or the aggregate's own mangled
//!   name for structs and interface blocks.
//! - The secondary digit is only present for matrices.
//! - Unsized arrays mangle their sentinel length (`[0]`).

use essl_ir::StringLookup;
use essl_stack::ensure_sufficient_stack;

use super::TypeDesc;

pub(super) fn build_mangled_name(ty: &TypeDesc, names: &dyn StringLookup, out: &mut String) {
    if ty.is_matrix() {
        out.push('m');
    } else if ty.is_vector() {
        out.push('v');
    }

    match ty.aggregate() {
        Some(def) => {
            ensure_sufficient_stack(|| out.push_str(def.mangled_name(names)));
        }
        None => {
            if let Some(tag) = ty.basic_type().mangled_tag() {
                out.push_str(tag);
            }
        }
    }

    push_digit(out, ty.nominal_size());
    if ty.is_matrix() {
        push_digit(out, ty.secondary_size());
    }

    if let Some(len) = ty.array_size() {
        out.push('[');
        out.push_str(&len.to_string());
        out.push(']');
    }
}

/// `'0' + n`. Dimensions never exceed 4, so this is a decimal digit.
fn push_digit(out: &mut String, n: u8) {
    debug_assert!(n < 10, "dimension {n} does not fit a single digit");
    out.push(char::from(b'0'.saturating_add(n)));
}
