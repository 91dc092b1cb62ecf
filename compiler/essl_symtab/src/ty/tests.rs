use std::rc::Rc;

use super::*;
use crate::Field;
use essl_ir::StringInterner;
use pretty_assertions::assert_eq;

fn float() -> TypeDesc {
    TypeDesc::scalar(BasicType::Float)
}

fn mat(rows: u8, columns: u8) -> TypeDesc {
    TypeDesc::new(
        BasicType::Float,
        Precision::Undefined,
        Qualifier::Temporary,
        rows,
        columns,
    )
}

fn point(interner: &StringInterner) -> Rc<Aggregate> {
    Rc::new(Aggregate::structure(
        interner.intern("Point"),
        vec![
            Field::new(interner.intern("x"), float()),
            Field::new(interner.intern("y"), float()),
        ],
    ))
}

// Shape

#[test]
fn test_shape_classification() {
    let scalar = float();
    assert!(scalar.is_scalar());
    assert!(!scalar.is_vector());
    assert!(!scalar.is_matrix());

    let vec3 = TypeDesc::vector(BasicType::Float, 3);
    assert!(vec3.is_vector());
    assert!(!vec3.is_scalar());
    assert!(!vec3.is_matrix());

    let mat2x3 = mat(2, 3);
    assert!(mat2x3.is_matrix());
    assert!(!mat2x3.is_vector());
    assert_eq!(mat2x3.nominal_size(), 2);
    assert_eq!(mat2x3.secondary_size(), 3);
}

#[test]
fn test_aggregate_is_not_scalar() {
    let interner = StringInterner::new();
    let ty = TypeDesc::from_aggregate(point(&interner));
    assert!(!ty.is_scalar());
    assert!(!ty.is_vector());
    assert_eq!(ty.basic_type(), BasicType::Struct);
}

#[test]
fn test_unsized_array() {
    let ty = float().with_array(UNSIZED_ARRAY);
    assert!(ty.is_array());
    assert!(ty.is_unsized_array());

    let sized = float().with_array(4);
    assert!(!sized.is_unsized_array());
    assert_eq!(sized.array_size(), Some(4));
}

#[test]
fn test_element_type_drops_array() {
    let arr = TypeDesc::vector(BasicType::Int, 2).with_array(3);
    let elem = arr.element_type();
    assert!(!elem.is_array());
    assert!(elem.same_element_type(&arr));
    assert_eq!(elem, TypeDesc::vector(BasicType::Int, 2));
}

// Mangling

#[test]
fn test_mangle_scalars_and_vectors() {
    let interner = StringInterner::new();
    assert_eq!(float().mangled_name(&interner), "f1");
    assert_eq!(TypeDesc::scalar(BasicType::Bool).mangled_name(&interner), "b1");
    assert_eq!(
        TypeDesc::vector(BasicType::Int, 3).mangled_name(&interner),
        "vi3"
    );
    assert_eq!(
        TypeDesc::vector(BasicType::UInt, 4).mangled_name(&interner),
        "vu4"
    );
}

#[test]
fn test_mangle_matrix_has_both_digits() {
    let interner = StringInterner::new();
    assert_eq!(mat(4, 4).mangled_name(&interner), "mf44");
    assert_eq!(mat(2, 3).mangled_name(&interner), "mf23");
}

#[cfg(not(debug_assertions))]
#[test]
fn test_mangle_oversized_dimension_stays_distinct() {
    let interner = StringInterner::new();
    let wide = TypeDesc::vector(BasicType::Float, 10);
    assert_eq!(wide.mangled_name(&interner), "vf:");
    assert_ne!(wide.mangled_name(&interner), "vf0");
}

#[test]
fn test_mangle_samplers() {
    let interner = StringInterner::new();
    let cases = [
        (BasicType::Sampler2D, "s21"),
        (BasicType::USampler2D, "us21"),
        (BasicType::Sampler2DArrayShadow, "s2as1"),
        (BasicType::SamplerExternalOES, "sext1"),
    ];
    for (basic, expected) in cases {
        assert_eq!(TypeDesc::scalar(basic).mangled_name(&interner), expected);
    }
}

#[test]
fn test_mangle_array_suffix() {
    let interner = StringInterner::new();
    assert_eq!(float().with_array(8).mangled_name(&interner), "f1[8]");
    assert_eq!(
        float().with_array(UNSIZED_ARRAY).mangled_name(&interner),
        "f1[0]"
    );
}

#[test]
fn test_mangle_struct_splices_definition() {
    let interner = StringInterner::new();
    let ty = TypeDesc::from_aggregate(point(&interner));
    assert_eq!(ty.mangled_name(&interner), "struct-Point-f1-f11");
}

#[test]
fn test_resolving_array_size_remangles() {
    let interner = StringInterner::new();
    let mut ty = float().with_array(UNSIZED_ARRAY);
    assert_eq!(ty.mangled_name(&interner), "f1[0]");

    ty.set_array_size(5);
    assert_eq!(ty.mangled_name(&interner), "f1[5]");
}

#[test]
fn test_mangle_ignores_precision_and_qualifier() {
    let interner = StringInterner::new();
    let plain = TypeDesc::vector(BasicType::Float, 4);
    let qualified = TypeDesc::vector(BasicType::Float, 4)
        .with_precision(Precision::High)
        .with_qualifier(Qualifier::Uniform);
    assert_eq!(
        plain.mangled_name(&interner),
        qualified.mangled_name(&interner)
    );
    assert_eq!(plain, qualified);
}

// Sizes

#[test]
fn test_object_size_components() {
    assert_eq!(float().object_size(), 1);
    assert_eq!(TypeDesc::vector(BasicType::Float, 3).object_size(), 3);
    assert_eq!(mat(3, 4).object_size(), 12);
    assert_eq!(mat(4, 4).with_array(2).object_size(), 32);
}

#[test]
fn test_object_size_saturates() {
    let huge = mat(4, 4).with_array(u32::MAX);
    assert_eq!(huge.object_size(), MAX_OBJECT_SIZE);

    let just_fits = float().with_array(0x7FFF_FFFF);
    assert_eq!(just_fits.object_size(), MAX_OBJECT_SIZE);
}

#[test]
fn test_unsized_array_has_zero_size() {
    assert_eq!(float().with_array(UNSIZED_ARRAY).object_size(), 0);
}

#[test]
fn test_struct_size() {
    let interner = StringInterner::new();
    let ty = TypeDesc::from_aggregate(point(&interner)).with_array(3);
    assert_eq!(ty.struct_size(), 2);
    assert_eq!(ty.object_size(), 6);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "not a struct")]
fn test_struct_size_of_scalar_asserts() {
    let _ = float().struct_size();
}

#[cfg(not(debug_assertions))]
#[test]
fn test_struct_size_of_scalar_is_zero() {
    assert_eq!(float().struct_size(), 0);
}

// Nesting and containment

#[test]
fn test_nesting_of_non_aggregate_is_zero() {
    assert_eq!(float().deepest_struct_nesting(), 0);
    assert_eq!(mat(2, 2).with_array(4).deepest_struct_nesting(), 0);
}

#[test]
fn test_containment_queries_on_non_aggregate() {
    let ty = float().with_array(2);
    assert!(!ty.is_structure_containing_arrays());
    assert!(!ty.is_structure_containing_samplers());
    assert!(!ty.is_structure_containing_type(BasicType::Float));
}

#[test]
fn test_from_public() {
    let interner = StringInterner::new();
    let public = PublicType::vector(BasicType::Float, 4)
        .with_precision(Precision::Medium)
        .with_qualifier(Qualifier::VaryingIn)
        .with_array(2)
        .invariant();
    let ty = TypeDesc::from_public(&public);

    assert_eq!(ty.precision(), Precision::Medium);
    assert_eq!(ty.qualifier(), Qualifier::VaryingIn);
    assert!(ty.is_invariant());
    assert_eq!(ty.array_size(), Some(2));
    assert_eq!(ty.mangled_name(&interner), "vf4[2]");

    let def = point(&interner);
    let ty = TypeDesc::from_public(&PublicType::aggregate(Rc::clone(&def)));
    assert!(ty.structure().is_some());
    assert!(ty.interface_block().is_none());
    assert_eq!(ty.deepest_struct_nesting(), 1);
}

// Equality

#[test]
fn test_aggregate_equality_is_structural() {
    let interner = StringInterner::new();
    let a = point(&interner);
    let b = point(&interner);
    assert_eq!(
        TypeDesc::from_aggregate(Rc::clone(&a)),
        TypeDesc::from_aggregate(Rc::clone(&a))
    );

    // Separately built but identical definitions mangle alike, so they compare equal.
    let (ta, tb) = (TypeDesc::from_aggregate(a), TypeDesc::from_aggregate(b));
    assert_eq!(ta.mangled_name(&interner), tb.mangled_name(&interner));
    assert_eq!(ta, tb);

    let renamed = Rc::new(Aggregate::structure(
        interner.intern("Pair"),
        vec![
            Field::new(interner.intern("x"), float()),
            Field::new(interner.intern("y"), float()),
        ],
    ));
    let widened = Rc::new(Aggregate::structure(
        interner.intern("Point"),
        vec![
            Field::new(interner.intern("x"), float()),
            Field::new(interner.intern("y"), TypeDesc::scalar(BasicType::Int)),
        ],
    ));
    assert_ne!(ta, TypeDesc::from_aggregate(renamed));
    assert_ne!(ta, TypeDesc::from_aggregate(widened));
}

#[test]
fn test_array_length_participates_in_equality() {
    assert_ne!(float().with_array(2), float().with_array(3));
    assert_ne!(float().with_array(2), float());
    assert!(float().with_array(2).same_element_type(&float()));
}

// Display

#[test]
fn test_display() {
    let ty = TypeDesc::vector(BasicType::Float, 4).with_precision(Precision::High);
    assert_eq!(ty.to_string(), "highp 4-component vector of float");

    let ty = mat(3, 3)
        .with_qualifier(Qualifier::Uniform)
        .with_array(2);
    assert_eq!(ty.to_string(), "uniform array[2] of 3X3 matrix of float");

    assert_eq!(TypeDesc::scalar(BasicType::Sampler2D).to_string(), "sampler2D");
}
