use super::*;
use pretty_assertions::assert_eq;

fn levels(top: usize, version: ShaderVersion) -> Vec<usize> {
    eligible_levels(top, version).collect()
}

// Level stepping

#[test]
fn test_eligible_levels_essl1() {
    assert_eq!(levels(5, ShaderVersion::ESSL1), vec![5, 4, 3, 1, 0]);
    assert_eq!(levels(LAST_BUILTIN_LEVEL, ShaderVersion::ESSL1), vec![1, 0]);
}

#[test]
fn test_eligible_levels_essl3() {
    assert_eq!(levels(4, ShaderVersion::ESSL3), vec![4, 3, 2, 0]);
    assert_eq!(levels(LAST_BUILTIN_LEVEL, ShaderVersion::ESSL3), vec![2, 0]);
}

#[test]
fn test_other_versions_see_only_common_tier() {
    assert_eq!(levels(3, ShaderVersion::new(310)), vec![3, 0]);
}

#[test]
fn test_next_eligible_level() {
    assert_eq!(next_eligible_level(3, ShaderVersion::ESSL1), Some(1));
    assert_eq!(next_eligible_level(3, ShaderVersion::ESSL3), Some(2));
    assert_eq!(next_eligible_level(2, ShaderVersion::ESSL3), Some(0));
    assert_eq!(next_eligible_level(0, ShaderVersion::ESSL3), None);
}

#[test]
fn test_builtin_level_indices() {
    assert_eq!(BuiltinLevel::Common.index(), 0);
    assert_eq!(BuiltinLevel::Essl1.index(), 1);
    assert_eq!(BuiltinLevel::Essl3.index(), 2);
    assert_eq!(GLOBAL_LEVEL, 3);
}

// Scope bookkeeping

#[test]
fn test_new_table_is_at_builtin_level() {
    let mut table = SymbolTable::new(SharedInterner::new());
    assert!(table.at_builtin_level());
    assert_eq!(table.current_level(), LAST_BUILTIN_LEVEL);

    table.push_scope();
    assert!(table.at_global_level());
    assert!(!table.at_builtin_level());

    table.push_scope();
    assert_eq!(table.current_level(), GLOBAL_LEVEL + 1);
    assert!(table.pop_scope());
    assert!(table.at_global_level());
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "below the built-in boundary")]
fn test_pop_builtin_level_asserts() {
    let mut table = SymbolTable::new(SharedInterner::new());
    table.pop_scope();
}

#[cfg(not(debug_assertions))]
#[test]
fn test_pop_builtin_level_is_noop() {
    let mut table = SymbolTable::new(SharedInterner::new());
    assert!(!table.pop_scope());
    assert_eq!(table.current_level(), LAST_BUILTIN_LEVEL);
}

#[test]
fn test_ids_increase_and_failed_insert_does_not_consume() {
    let interner = SharedInterner::new();
    let mut table = SymbolTable::new(interner.clone());
    table.push_scope();
    let a = interner.intern("a");
    let b = interner.intern("b");
    let float = || SymbolKind::Variable(Variable::new(TypeDesc::scalar(BasicType::Float)));

    let first = table.declare(a, float());
    let dup = table.declare(a, float());
    let second = table.declare(b, float());

    assert!(dup.is_err());
    match (first, second) {
        (Ok(first), Ok(second)) => assert_eq!(second.raw(), first.raw() + 1),
        other => panic!("unexpected declare results: {other:?}"),
    }
}

#[test]
fn test_symbol_by_id_respects_scope_lifetime() {
    let interner = SharedInterner::new();
    let mut table = SymbolTable::new(interner.clone());
    table.push_scope();
    table.push_scope();
    let local = table
        .declare(
            interner.intern("tmp"),
            SymbolKind::Variable(Variable::new(TypeDesc::scalar(BasicType::Int))),
        )
        .ok();
    let local = local.and_then(|id| table.symbol(id).map(Symbol::id));
    assert!(local.is_some());

    table.pop_scope();
    assert!(local.and_then(|id| table.symbol(id)).is_none());
}

#[test]
fn test_builtin_constant() {
    let interner = SharedInterner::new();
    let mut table = SymbolTable::new(interner.clone());
    let _ = table.insert_constant_int(BuiltinLevel::Essl3, "gl_MaxDrawBuffers", 8);
    table.push_scope();

    let key = interner.intern("gl_MaxDrawBuffers");
    let value = table
        .find(key, ShaderVersion::ESSL3)
        .and_then(|found| found.symbol.as_variable())
        .and_then(|var| var.constant_value().map(<[_]>::to_vec));
    assert_eq!(value, Some(vec![ConstantValue::Int(8)]));
    assert!(table.find(key, ShaderVersion::ESSL1).is_none());
}

#[test]
fn test_find_in_current_mut_resolves_unsized_array() {
    let interner = SharedInterner::new();
    let mut table = SymbolTable::new(interner.clone());
    table.push_scope();
    let data = interner.intern("data");
    let ty = TypeDesc::scalar(BasicType::Float).with_array(crate::UNSIZED_ARRAY);
    let _ = table.declare(data, SymbolKind::Variable(Variable::new(ty)));

    if let Some(SymbolKind::Variable(var)) = table.find_in_current_mut(data).map(Symbol::kind_mut) {
        var.ty_mut().set_array_size(3);
    }

    let size = table
        .find(data, ShaderVersion::ESSL3)
        .and_then(|found| found.symbol.as_variable())
        .map(|var| var.ty().object_size());
    assert_eq!(size, Some(3));
}

// Default precision

#[test]
fn test_default_precision_scoping() {
    let mut table = SymbolTable::new(SharedInterner::new());
    table.push_scope();
    assert_eq!(table.default_precision(BasicType::Float), Precision::Undefined);

    assert!(table.set_default_precision(&PublicType::scalar(BasicType::Float), Precision::Medium));
    table.push_scope();
    assert!(table.set_default_precision(&PublicType::scalar(BasicType::Float), Precision::High));
    assert_eq!(table.default_precision(BasicType::Float), Precision::High);

    table.pop_scope();
    assert_eq!(table.default_precision(BasicType::Float), Precision::Medium);
}

#[test]
fn test_uint_shares_int_precision() {
    let mut table = SymbolTable::new(SharedInterner::new());
    table.push_scope();
    assert!(table.set_default_precision(&PublicType::scalar(BasicType::Int), Precision::Low));
    assert_eq!(table.default_precision(BasicType::UInt), Precision::Low);
    assert_eq!(table.default_precision(BasicType::Bool), Precision::Undefined);
}

#[test]
fn test_default_precision_rejects_non_scalars() {
    let mut table = SymbolTable::new(SharedInterner::new());
    table.push_scope();

    assert!(!table.set_default_precision(&PublicType::vector(BasicType::Float, 4), Precision::High));
    assert!(!table.set_default_precision(&PublicType::matrix(3, 3), Precision::High));
    assert!(!table.set_default_precision(
        &PublicType::scalar(BasicType::Float).with_array(2),
        Precision::High
    ));
    assert!(!table.set_default_precision(&PublicType::scalar(BasicType::Bool), Precision::High));
    assert_eq!(table.default_precision(BasicType::Float), Precision::Undefined);

    // Samplers are accepted but have no effect.
    assert!(table.set_default_precision(&PublicType::scalar(BasicType::Sampler2D), Precision::Low));
    assert_eq!(table.default_precision(BasicType::Sampler2D), Precision::Undefined);
}
