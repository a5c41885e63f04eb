//! Operator tags stored in [`BinOpAST`](super::BinOpAST), [`BinCompAST`](super::BinCompAST)
//! and [`CondAST`](super::CondAST).

use std::fmt;

/// Arithmetic and bitwise binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOperator {
    Add,
    Subtract,
    Multiply,
    Power,
    Divide,
    Modulus,
    BitAnd,
    BitOr,
    BitXor,
    ShiftLeft,
    ShiftRight,
}

/// Operators are grouped by the rule-table rows that accept them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorClass {
    /// `+ - * ** / %`
    Arithmetic,
    /// `& | >> << ^`
    Bitwise,
}

impl BinOperator {
    /// Every operator, in table order.
    pub const ALL: [BinOperator; 11] = [
        BinOperator::Add,
        BinOperator::Subtract,
        BinOperator::Multiply,
        BinOperator::Power,
        BinOperator::Divide,
        BinOperator::Modulus,
        BinOperator::BitAnd,
        BinOperator::BitOr,
        BinOperator::BitXor,
        BinOperator::ShiftLeft,
        BinOperator::ShiftRight,
    ];

    /// The canonical source symbol.
    pub fn symbol(self) -> &'static str {
        use BinOperator as B;

        match self {
            B::Add => "+",
            B::Subtract => "-",
            B::Multiply => "*",
            B::Power => "**",
            B::Divide => "/",
            B::Modulus => "%",
            B::BitAnd => "&",
            B::BitOr => "|",
            B::BitXor => "^",
            B::ShiftLeft => "<<",
            B::ShiftRight => ">>",
        }
    }

    pub fn class(self) -> OperatorClass {
        use BinOperator as B;

        match self {
            B::Add | B::Subtract | B::Multiply | B::Power | B::Divide | B::Modulus => OperatorClass::Arithmetic,
            B::BitAnd | B::BitOr | B::BitXor | B::ShiftLeft | B::ShiftRight => OperatorClass::Bitwise,
        }
    }
}

impl fmt::Display for BinOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    Equal,
    NotEqual,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl Comparison {
    pub fn symbol(self) -> &'static str {
        use Comparison as C;

        match self {
            C::Equal => "==",
            C::NotEqual => "!=",
            C::Less => "<",
            C::LessOrEqual => "<=",
            C::Greater => ">",
            C::GreaterOrEqual => ">=",
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Binary logical connectives. Negation has its own [`CondAST`](super::CondAST) form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicOperation {
    And,
    Or,
    Xor,
}

impl LogicOperation {
    pub fn symbol(self) -> &'static str {
        match self {
            LogicOperation::And => "&&",
            LogicOperation::Or => "||",
            LogicOperation::Xor => "^^",
        }
    }
}

impl fmt::Display for LogicOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
