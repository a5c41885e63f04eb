//! Which operand types each binary operator accepts, and what it produces.
//!
//! The tree stores operators and operands without checking them against this
//! table. A type checker, once it knows the type of each operand, asks
//! [`binop_result`]; `None` means the combination is a type error.

use std::fmt;

use crate::ast::{BinOperator, OperatorClass};

#[cfg(test)]
mod tests;

/// Element type of an array. Arrays only hold scalar numbers.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Scalar {
    Int,
    Float,
}

/// The type of a value, in as much detail as the rule table needs.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum ValueType {
    Int,
    Float,
    Char,
    String,
    Tuple,
    List,
    /// Immutable and fixed length.
    Array { elem: Scalar, len: usize },
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Int => f.write_str("Int"),
            ValueType::Float => f.write_str("Float"),
            ValueType::Char => f.write_str("Char"),
            ValueType::String => f.write_str("String"),
            ValueType::Tuple => f.write_str("Tuple<Any>"),
            ValueType::List => f.write_str("List<Any>"),
            ValueType::Array { elem: Scalar::Int, len } => write!(f, "Array<Int>[{len}]"),
            ValueType::Array { elem: Scalar::Float, len } => write!(f, "Array<Float>[{len}]"),
        }
    }
}

/* Rule Table */

/// Which operands a rule row matches.
#[derive(Clone, Copy, Debug)]
pub enum Operand {
    Int,
    Float,
    /// Int or Float.
    Number,
    Char,
    String,
    Tuple,
    List,
    ArrayOf(Scalar),
    /// Any array, as long as the other side is an array of the same element type and length.
    SameArray,
}

/// Which operators a rule row accepts.
#[derive(Clone, Copy, Debug)]
pub enum Operators {
    Class(OperatorClass),
    /// `+` only.
    Concat,
}

/// What a matching row produces.
#[derive(Clone, Copy, Debug)]
pub enum Outcome {
    Int,
    Float,
    String,
    Tuple,
    List,
    /// An array of the given element type, as long as the left operand.
    ArrayOf(Scalar),
    /// The left operand's type.
    Elementwise,
}

#[derive(Clone, Copy, Debug)]
pub struct Rule {
    pub lhs: Operand,
    pub ops: Operators,
    pub rhs: Operand,
    pub result: Outcome,
}

const fn rule(lhs: Operand, ops: Operators, rhs: Operand, result: Outcome) -> Rule {
    Rule { lhs, ops, rhs, result }
}

const ARITHMETIC: Operators = Operators::Class(OperatorClass::Arithmetic);
const BITWISE: Operators = Operators::Class(OperatorClass::Bitwise);

/// Every legal operand combination. Anything not listed is a type error.
pub static BINOP_RULES: [Rule; 11] = [
    rule(Operand::Int, ARITHMETIC, Operand::Int, Outcome::Int),
    rule(Operand::Int, BITWISE, Operand::Int, Outcome::Int),
    rule(Operand::Float, ARITHMETIC, Operand::Number, Outcome::Float),
    rule(Operand::Char, Operators::Concat, Operand::Char, Outcome::String),
    rule(Operand::Tuple, Operators::Concat, Operand::Tuple, Outcome::Tuple),
    rule(Operand::SameArray, ARITHMETIC, Operand::SameArray, Outcome::Elementwise),
    rule(Operand::ArrayOf(Scalar::Int), ARITHMETIC, Operand::Int, Outcome::ArrayOf(Scalar::Int)),
    rule(Operand::ArrayOf(Scalar::Int), ARITHMETIC, Operand::Float, Outcome::ArrayOf(Scalar::Float)),
    rule(Operand::ArrayOf(Scalar::Float), ARITHMETIC, Operand::Number, Outcome::ArrayOf(Scalar::Float)),
    rule(Operand::List, Operators::Concat, Operand::List, Outcome::List),
    rule(Operand::String, Operators::Concat, Operand::String, Outcome::String),
];

impl Operand {
    fn matches(self, ty: ValueType) -> bool {
        use ValueType as T;

        match self {
            Operand::Int => ty == T::Int,
            Operand::Float => ty == T::Float,
            Operand::Number => matches!(ty, T::Int | T::Float),
            Operand::Char => ty == T::Char,
            Operand::String => ty == T::String,
            Operand::Tuple => ty == T::Tuple,
            Operand::List => ty == T::List,
            Operand::ArrayOf(scalar) => matches!(ty, T::Array { elem, .. } if elem == scalar),
            Operand::SameArray => matches!(ty, T::Array { .. }),
        }
    }
}

impl Operators {
    fn accepts(self, op: BinOperator) -> bool {
        match self {
            Operators::Class(class) => op.class() == class,
            Operators::Concat => op == BinOperator::Add,
        }
    }
}

impl Rule {
    /// The result of applying this row, or `None` if it does not match.
    pub fn apply(&self, lhs: ValueType, op: BinOperator, rhs: ValueType) -> Option<ValueType> {
        if !self.lhs.matches(lhs) || !self.ops.accepts(op) || !self.rhs.matches(rhs) {
            return None;
        }

        match (self.lhs, self.rhs) {
            (Operand::SameArray, Operand::SameArray) if lhs != rhs => return None,
            _ => {}
        }

        Some(match self.result {
            Outcome::Int => ValueType::Int,
            Outcome::Float => ValueType::Float,
            Outcome::String => ValueType::String,
            Outcome::Tuple => ValueType::Tuple,
            Outcome::List => ValueType::List,
            Outcome::Elementwise => lhs,
            Outcome::ArrayOf(elem) => {
                let ValueType::Array { len, .. } = lhs else {
                    return None; // Only array rows produce arrays.
                };
                ValueType::Array { elem, len }
            }
        })
    }
}

/* Queries */

/// The type `lhs op rhs` produces, or `None` if the table has no row for it.
pub fn binop_result(lhs: ValueType, op: BinOperator, rhs: ValueType) -> Option<ValueType> {
    BINOP_RULES.iter().find_map(|rule| rule.apply(lhs, op, rhs))
}

/// True for types whose only binary operation is concatenation with `+`.
pub fn concat_only(ty: ValueType) -> bool {
    matches!(ty, ValueType::Char | ValueType::String | ValueType::Tuple | ValueType::List)
}
