//! List operations and the operand shapes each one takes.
//!
//! A [`ListOpAST`] always carries operands whose [`OperandShape`] equals
//! `kind.shape()`. The per-kind constructors guarantee it by their signatures;
//! [`ListOpAST::new`] checks it and refuses anything else.

use std::fmt;

use super::{IdAST, IntAST, Node};
use crate::error::ASTError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListOpKind {
    /// `list[key]`
    Access,
    /// `list[0]`
    AccessByIndex,
    /// `list[name]`
    AccessByName,
    /// `[?= value]`
    GetIndexByValue,
    /// `[[<] ?= value]`
    GetIndexByValueFromRight,
    /// `[?^ (v0, v1, ...)]`
    GetIndicesByManyValues,
    /// `[+: value]`
    AppendValue,
    /// `[+: index <- value]`
    InsertItemByIndex,
    /// `[-: index]`
    RemoveItemByIndex,
    /// `[-: ?= value]`
    RemoveItemByValue,
    /// `[[<] -: ?= value]`
    RemoveItemByValueFromRight,
    /// `[-: (i0, i1, ...)]`
    RemoveItemsByManyIndices,
    /// `[-: ?^ (v0, v1, ...)]`
    RemoveItemsByManyValues,
    /// `[[<] -: ?^ (v0, v1, ...)]`
    RemoveItemsByManyValuesFromRight,
    /// `[<]`
    GetReversed,
}

impl ListOpKind {
    /// The operands a list operation of this kind is built from.
    pub fn shape(self) -> OperandShape {
        use ListOpKind as K;
        use OperandShape as S;

        match self {
            K::GetReversed => S::Bare,
            K::Access
            | K::GetIndexByValue
            | K::GetIndexByValueFromRight
            | K::AppendValue
            | K::RemoveItemByValue
            | K::RemoveItemByValueFromRight => S::Value,
            K::AccessByName => S::Name,
            K::AccessByIndex | K::RemoveItemByIndex => S::Index,
            K::InsertItemByIndex => S::IndexValue,
            K::RemoveItemsByManyIndices => S::Indices,
            K::GetIndicesByManyValues | K::RemoveItemsByManyValues | K::RemoveItemsByManyValuesFromRight => S::Values,
        }
    }

    pub fn name(self) -> &'static str {
        use ListOpKind as K;

        match self {
            K::Access => "Access",
            K::AccessByIndex => "AccessByIndex",
            K::AccessByName => "AccessByName",
            K::GetIndexByValue => "GetIndexByValue",
            K::GetIndexByValueFromRight => "GetIndexByValueFromRight",
            K::GetIndicesByManyValues => "GetIndicesByManyValues",
            K::AppendValue => "AppendValue",
            K::InsertItemByIndex => "InsertItemByIndex",
            K::RemoveItemByIndex => "RemoveItemByIndex",
            K::RemoveItemByValue => "RemoveItemByValue",
            K::RemoveItemByValueFromRight => "RemoveItemByValueFromRight",
            K::RemoveItemsByManyIndices => "RemoveItemsByManyIndices",
            K::RemoveItemsByManyValues => "RemoveItemsByManyValues",
            K::RemoveItemsByManyValuesFromRight => "RemoveItemsByManyValuesFromRight",
            K::GetReversed => "GetReversed",
        }
    }
}

impl fmt::Display for ListOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which operands are populated, without the operands themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandShape {
    Bare,
    Value,
    Name,
    Index,
    IndexValue,
    Indices,
    Values,
}

impl fmt::Display for OperandShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OperandShape::Bare => "no operands",
            OperandShape::Value => "a value",
            OperandShape::Name => "a name",
            OperandShape::Index => "an index",
            OperandShape::IndexValue => "an index and a value",
            OperandShape::Indices => "a list of indices",
            OperandShape::Values => "a list of values",
        })
    }
}

/// The operands of a list operation. Indices are always integer literals.
#[derive(Debug, Clone, PartialEq)]
pub enum ListOperands {
    Bare,
    Value(Box<Node>),
    Name(IdAST),
    Index(IntAST),
    IndexValue(IntAST, Box<Node>),
    Indices(Vec<IntAST>),
    Values(Vec<Node>),
}

impl ListOperands {
    pub fn shape(&self) -> OperandShape {
        match self {
            ListOperands::Bare => OperandShape::Bare,
            ListOperands::Value(_) => OperandShape::Value,
            ListOperands::Name(_) => OperandShape::Name,
            ListOperands::Index(_) => OperandShape::Index,
            ListOperands::IndexValue(..) => OperandShape::IndexValue,
            ListOperands::Indices(_) => OperandShape::Indices,
            ListOperands::Values(_) => OperandShape::Values,
        }
    }
}

/// An index or value query, or a mutation, applied to a list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListOpAST {
    list: Box<Node>,
    kind: ListOpKind,
    operands: ListOperands,
}

impl ListOpAST {
    /// Builds a list operation from a kind tag and operands, rejecting operands
    /// whose shape does not belong to the kind.
    pub fn new(list: Node, kind: ListOpKind, operands: ListOperands) -> Result<ListOpAST, ASTError> {
        let expected = kind.shape();
        let found = operands.shape();

        if expected != found {
            tracing::debug!(%kind, %expected, %found, "rejected list operation");
            return Err(ASTError::ShapeMismatch { kind, expected, found });
        }

        Ok(ListOpAST { list: Box::new(list), kind, operands })
    }

    // Only called by the typed constructors below, whose signatures fix the shape.
    fn build(list: Node, kind: ListOpKind, operands: ListOperands) -> ListOpAST {
        debug_assert_eq!(kind.shape(), operands.shape());

        ListOpAST { list: Box::new(list), kind, operands }
    }

    pub fn access(list: Node, key: Node) -> ListOpAST {
        Self::build(list, ListOpKind::Access, ListOperands::Value(Box::new(key)))
    }

    pub fn access_by_index(list: Node, index: IntAST) -> ListOpAST {
        Self::build(list, ListOpKind::AccessByIndex, ListOperands::Index(index))
    }

    pub fn access_by_name(list: Node, name: IdAST) -> ListOpAST {
        Self::build(list, ListOpKind::AccessByName, ListOperands::Name(name))
    }

    pub fn get_index_by_value(list: Node, value: Node) -> ListOpAST {
        Self::build(list, ListOpKind::GetIndexByValue, ListOperands::Value(Box::new(value)))
    }

    pub fn get_index_by_value_from_right(list: Node, value: Node) -> ListOpAST {
        Self::build(list, ListOpKind::GetIndexByValueFromRight, ListOperands::Value(Box::new(value)))
    }

    pub fn get_indices_by_many_values(list: Node, values: Vec<Node>) -> ListOpAST {
        Self::build(list, ListOpKind::GetIndicesByManyValues, ListOperands::Values(values))
    }

    pub fn append_value(list: Node, value: Node) -> ListOpAST {
        Self::build(list, ListOpKind::AppendValue, ListOperands::Value(Box::new(value)))
    }

    pub fn insert_item_by_index(list: Node, index: IntAST, value: Node) -> ListOpAST {
        Self::build(list, ListOpKind::InsertItemByIndex, ListOperands::IndexValue(index, Box::new(value)))
    }

    pub fn remove_item_by_index(list: Node, index: IntAST) -> ListOpAST {
        Self::build(list, ListOpKind::RemoveItemByIndex, ListOperands::Index(index))
    }

    pub fn remove_item_by_value(list: Node, value: Node) -> ListOpAST {
        Self::build(list, ListOpKind::RemoveItemByValue, ListOperands::Value(Box::new(value)))
    }

    pub fn remove_item_by_value_from_right(list: Node, value: Node) -> ListOpAST {
        Self::build(list, ListOpKind::RemoveItemByValueFromRight, ListOperands::Value(Box::new(value)))
    }

    pub fn remove_items_by_many_indices(list: Node, indices: Vec<IntAST>) -> ListOpAST {
        Self::build(list, ListOpKind::RemoveItemsByManyIndices, ListOperands::Indices(indices))
    }

    pub fn remove_items_by_many_values(list: Node, values: Vec<Node>) -> ListOpAST {
        Self::build(list, ListOpKind::RemoveItemsByManyValues, ListOperands::Values(values))
    }

    pub fn remove_items_by_many_values_from_right(list: Node, values: Vec<Node>) -> ListOpAST {
        Self::build(list, ListOpKind::RemoveItemsByManyValuesFromRight, ListOperands::Values(values))
    }

    pub fn get_reversed(list: Node) -> ListOpAST {
        Self::build(list, ListOpKind::GetReversed, ListOperands::Bare)
    }

    /// The list being operated on.
    pub fn list(&self) -> &Node {
        &self.list
    }

    pub fn kind(&self) -> ListOpKind {
        self.kind
    }

    pub fn operands(&self) -> &ListOperands {
        &self.operands
    }
}
