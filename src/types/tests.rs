use super::*;

use crate::ast::BinOperator as B;
use ValueType as T;

fn int_array(len: usize) -> ValueType {
    T::Array { elem: Scalar::Int, len }
}

fn float_array(len: usize) -> ValueType {
    T::Array { elem: Scalar::Float, len }
}

#[test]
fn int_accepts_every_operator() {
    for op in BinOperator::ALL {
        assert_eq!(binop_result(T::Int, op, T::Int), Some(T::Int), "Int {op} Int");
    }
}

#[test]
fn float_arithmetic_widens_int() {
    assert_eq!(binop_result(T::Float, B::Power, T::Int), Some(T::Float));
    assert_eq!(binop_result(T::Float, B::Modulus, T::Float), Some(T::Float));

    // Floats have no bitwise operators, and the table only lists Float on the left.
    assert_eq!(binop_result(T::Float, B::BitAnd, T::Int), None);
    assert_eq!(binop_result(T::Int, B::Add, T::Float), None);
}

#[test]
fn concatenation_only_with_plus() {
    assert_eq!(binop_result(T::Char, B::Add, T::Char), Some(T::String));
    assert_eq!(binop_result(T::String, B::Add, T::String), Some(T::String));
    assert_eq!(binop_result(T::Tuple, B::Add, T::Tuple), Some(T::Tuple));
    assert_eq!(binop_result(T::List, B::Add, T::List), Some(T::List));

    assert_eq!(binop_result(T::String, B::Multiply, T::String), None);
    assert_eq!(binop_result(T::Char, B::Subtract, T::Char), None);
    assert_eq!(binop_result(T::List, B::Add, T::Tuple), None);
}

#[test]
fn elementwise_needs_matching_arrays() {
    assert_eq!(binop_result(int_array(3), B::Multiply, int_array(3)), Some(int_array(3)));
    assert_eq!(binop_result(float_array(2), B::Divide, float_array(2)), Some(float_array(2)));

    assert_eq!(binop_result(int_array(3), B::Add, int_array(4)), None);
    assert_eq!(binop_result(int_array(2), B::Add, float_array(2)), None);
    assert_eq!(binop_result(int_array(2), B::BitOr, int_array(2)), None);
}

#[test]
fn array_with_scalar() {
    assert_eq!(binop_result(int_array(5), B::Add, T::Int), Some(int_array(5)));
    assert_eq!(binop_result(int_array(5), B::Add, T::Float), Some(float_array(5)));
    assert_eq!(binop_result(float_array(5), B::Subtract, T::Int), Some(float_array(5)));
    assert_eq!(binop_result(float_array(5), B::Power, T::Float), Some(float_array(5)));

    assert_eq!(binop_result(T::Int, B::Add, int_array(5)), None);
}

#[test]
fn concat_only_types() {
    assert!(concat_only(T::Char));
    assert!(concat_only(T::List));
    assert!(!concat_only(T::Int));
    assert!(!concat_only(int_array(1)));
}

#[test]
fn display_names() {
    assert_eq!(int_array(4).to_string(), "Array<Int>[4]");
    assert_eq!(T::Tuple.to_string(), "Tuple<Any>");
}
