//! Tests for the ast module.

use super::*;

use crate::error::ASTError;

fn ids(names: &[&str]) -> Vec<IdAST> {
    names.iter().map(|name| IdAST::new(*name)).collect()
}

#[test]
fn children_come_back_in_order() {
    let list = ListAST::new(vec![Node::int(3), Node::id("x"), Node::string("s")]);
    assert_eq!(list.elems(), &[Node::int(3), Node::id("x"), Node::string("s")]);

    let range = RangeAST::new(Node::int(0), Node::int(10), Node::int(1));
    assert_eq!(range.start(), &Node::int(0));
    assert_eq!(range.end(), &Node::int(10));
    assert_eq!(range.step(), &Node::int(1));

    let bin_op = BinOpAST::new(Node::int(2), BinOperator::Power, Node::float(0.5));
    assert_eq!(bin_op.lhs(), &Node::int(2));
    assert_eq!(bin_op.op(), BinOperator::Power);
    assert_eq!(bin_op.rhs(), &Node::float(0.5));

    let block = BlockAST::new(vec![Node::Pass, Node::Break], Some(Node::True));
    assert_eq!(block.stmts(), &[Node::Pass, Node::Break]);
    assert_eq!(block.ret(), Some(&Node::True));
}

#[test]
fn match_cases_keep_declared_order() {
    let cases = vec![(Node::int(1), Node::string("one")), (Node::int(2), Node::string("two")), (Node::None, Node::Pass)];
    let match_block = MatchBlockAST::new(cases.clone());

    assert_eq!(match_block.cases(), cases.as_slice());
}

#[test]
fn bindings_share_payload_but_not_kind() {
    let flex = Node::flex_bind(IdAST::new("a"), Node::int(1));
    let fixed = Node::final_bind(IdAST::new("a"), Node::int(1));

    assert_eq!(flex.kind(), NodeKind::FlexBind);
    assert_eq!(fixed.kind(), NodeKind::FinalBind);
    assert_ne!(flex, fixed);

    let Node::FinalBind(bind) = fixed else { panic!("expected a final binding") };
    assert_eq!(bind.var().name(), "a");
    assert_eq!(bind.value(), &Node::int(1));
}

#[test]
fn kinds_match_variants() {
    let cases = [
        (Node::None, NodeKind::None),
        (Node::EmptyList, NodeKind::EmptyList),
        (Node::char('c'), NodeKind::Char),
        (Node::from(ExtLinkAST::new("https://styio.dev")), NodeKind::ExtLink),
        (Node::from(SizeOfAST::new(Node::id("xs"))), NodeKind::SizeOf),
        (Node::from(ReturnAST::new(Node::int(0))), NodeKind::Return),
        (Node::from(IterInfLoopAST::new(vec![], BlockAST::new(vec![], None))), NodeKind::IterInfLoop),
        (Node::from(TypeAST::new("i32")), NodeKind::Type),
        (Node::from(SetAST::new(vec![])), NodeKind::Set),
        (Node::from(CheckIsInAST::new(Node::id("xs"))), NodeKind::CheckIsIn),
        (Node::from(ForwardAST::run(vec![], Node::Pass)), NodeKind::Forward),
    ];

    for (node, kind) in cases {
        assert_eq!(node.kind(), kind);
    }
}

#[test]
fn leaf_kinds() {
    assert!(NodeKind::Int.is_leaf());
    assert!(NodeKind::EmptyList.is_leaf());
    assert!(!NodeKind::List.is_leaf());
    assert!(!NodeKind::Block.is_leaf());
    assert!(NodeKind::Type.is_leaf());
    assert!(!NodeKind::FmtStr.is_leaf());
}

#[test]
fn list_op_constructors_fix_the_shape() {
    let list = || Node::id("xs");

    let ops = [
        ListOpAST::access(list(), Node::string("key")),
        ListOpAST::access_by_index(list(), IntAST::new(0)),
        ListOpAST::access_by_name(list(), IdAST::new("field")),
        ListOpAST::get_index_by_value(list(), Node::int(1)),
        ListOpAST::get_index_by_value_from_right(list(), Node::int(1)),
        ListOpAST::get_indices_by_many_values(list(), vec![Node::int(1)]),
        ListOpAST::append_value(list(), Node::int(1)),
        ListOpAST::insert_item_by_index(list(), IntAST::new(0), Node::int(1)),
        ListOpAST::remove_item_by_index(list(), IntAST::new(0)),
        ListOpAST::remove_item_by_value(list(), Node::int(1)),
        ListOpAST::remove_item_by_value_from_right(list(), Node::int(1)),
        ListOpAST::remove_items_by_many_indices(list(), vec![IntAST::new(0)]),
        ListOpAST::remove_items_by_many_values(list(), vec![Node::int(1)]),
        ListOpAST::remove_items_by_many_values_from_right(list(), vec![Node::int(1)]),
        ListOpAST::get_reversed(list()),
    ];

    for op in &ops {
        assert_eq!(op.operands().shape(), op.kind().shape(), "{}", op.kind());
        assert_eq!(op.list(), &list());
    }
}

#[test]
fn list_op_new_accepts_matching_operands() {
    let op = ListOpAST::new(
        Node::id("xs"),
        ListOpKind::InsertItemByIndex,
        ListOperands::IndexValue(IntAST::new(2), Box::new(Node::int(9))),
    )
    .unwrap();

    assert_eq!(op, ListOpAST::insert_item_by_index(Node::id("xs"), IntAST::new(2), Node::int(9)));
}

#[test]
fn insert_without_value_is_rejected() {
    let err = ListOpAST::new(Node::id("xs"), ListOpKind::InsertItemByIndex, ListOperands::Index(IntAST::new(2)))
        .unwrap_err();

    assert_eq!(
        err,
        ASTError::ShapeMismatch {
            kind: ListOpKind::InsertItemByIndex,
            expected: OperandShape::IndexValue,
            found: OperandShape::Index,
        }
    );
    assert_eq!(
        err.to_string(),
        "list operation InsertItemByIndex expects an index and a value, found an index"
    );
}

#[test]
fn reversed_takes_no_operands() {
    let err = ListOpAST::new(Node::id("xs"), ListOpKind::GetReversed, ListOperands::Value(Box::new(Node::int(1))))
        .unwrap_err();

    assert!(matches!(err, ASTError::ShapeMismatch { found: OperandShape::Value, .. }));
    assert!(ListOpAST::new(Node::id("xs"), ListOpKind::GetReversed, ListOperands::Bare).is_ok());
}

#[test]
fn var_def_needs_an_identifier() {
    assert_eq!(VarDefAST::new(vec![]), Err(ASTError::EmptyVarDef));

    let var_def = VarDefAST::new(ids(&["a", "b"])).unwrap();
    assert_eq!(var_def.vars(), ids(&["a", "b"]).as_slice());
}

#[test]
fn ext_pack_rejects_blank_paths() {
    assert_eq!(ExtPackAST::new(vec![]), Err(ASTError::EmptyExtPack));

    let err = ExtPackAST::new(vec!["std/io".to_string(), "  ".to_string()]).unwrap_err();
    assert_eq!(err, ASTError::BlankPackagePath { position: 1 });
    assert_eq!(err.to_string(), "external package path 1 is blank");

    let pack = ExtPackAST::new(vec!["std/io".to_string()]).unwrap();
    assert_eq!(pack.paths(), ["std/io".to_string()]);
}

#[test]
fn cond_flow_branches() {
    let then_block = BlockAST::new(vec![Node::Pass], None);
    let else_block = BlockAST::new(vec![Node::Break], None);

    let only_then = CondFlowAST::if_true(Node::True, then_block.clone());
    assert_eq!(only_then.then_block(), Some(&then_block));
    assert_eq!(only_then.else_block(), None);

    let only_else = CondFlowAST::if_false(Node::True, else_block.clone());
    assert_eq!(only_else.then_block(), None);
    assert_eq!(only_else.else_block(), Some(&else_block));

    let both = CondFlowAST::if_else(Node::True, then_block.clone(), else_block.clone());
    assert_eq!(both.cond(), &Node::True);
    assert_eq!((both.then_block(), both.else_block()), (Some(&then_block), Some(&else_block)));
}

#[test]
fn inf_loop_counter() {
    let body = BlockAST::new(vec![], None);

    let plain = InfLoopAST::new(body.clone());
    assert_eq!((plain.start(), plain.increment()), (None, None));

    let counting = InfLoopAST::incremental(Node::int(0), Node::int(2), body);
    assert_eq!(counting.start(), Some(&Node::int(0)));
    assert_eq!(counting.increment(), Some(&Node::int(2)));
}

#[test]
fn operator_symbols() {
    let symbols: Vec<_> = BinOperator::ALL.iter().map(|op| op.symbol()).collect();
    assert_eq!(symbols, ["+", "-", "*", "**", "/", "%", "&", "|", "^", "<<", ">>"]);

    assert_eq!(Comparison::LessOrEqual.to_string(), "<=");
    assert_eq!(LogicOperation::Xor.to_string(), "^^");
    assert_eq!(BinOperator::ShiftRight.class(), OperatorClass::Bitwise);
}

#[test]
fn format_string_fragments_surround_exprs() {
    let fmt_str = FmtStrAST::new(vec!["Hi ".to_string(), "!".to_string()], vec![Node::id("name")]).unwrap();
    assert_eq!(fmt_str.fragments(), ["Hi ".to_string(), "!".to_string()]);
    assert_eq!(fmt_str.exprs(), &[Node::id("name")]);

    assert!(FmtStrAST::new(vec!["plain".to_string()], vec![]).is_ok());
    assert_eq!(
        FmtStrAST::new(vec!["a".to_string(), "b".to_string()], vec![Node::id("x"), Node::id("y")]),
        Err(ASTError::FragmentMismatch { fragments: 2, exprs: 2 })
    );
    assert_eq!(FmtStrAST::new(vec![], vec![]), Err(ASTError::FragmentMismatch { fragments: 0, exprs: 0 }));
}

#[test]
fn forward_bodies() {
    let check = CheckEqAST::new(Node::int(0));
    let guarded = ForwardAST::if_equal(ids(&["n"]), check.clone(), Node::string("zero"));

    assert_eq!(guarded.vars(), ids(&["n"]).as_slice());
    assert_eq!(guarded.body(), &ForwardBody::IfEqual(check, Box::new(Node::string("zero"))));

    let plain = ForwardAST::run(vec![], Node::Pass);
    assert!(plain.vars().is_empty());
    assert!(matches!(plain.body(), ForwardBody::Run(then) if **then == Node::Pass));

    let cases = MatchBlockAST::new(vec![(Node::int(1), Node::True)]);
    assert_eq!(ForwardAST::cases(vec![], cases.clone()).body(), &ForwardBody::Cases(cases));
}

#[test]
fn typed_var_and_guards() {
    let typed = TypedVarAST::new(IdAST::new("x"), TypeAST::new("f64"));
    assert_eq!((typed.var().name(), typed.ty().name()), ("x", "f64"));

    assert_eq!(CheckIsInAST::new(Node::id("xs")).iterable(), &Node::id("xs"));

    let from_to = FromToAST::new(Node::int(1), Node::int(5));
    assert_eq!((from_to.from(), from_to.to()), (&Node::int(1), &Node::int(5)));

    let resource = ResourceAST::new(vec![Node::id("f")]);
    assert_eq!(resource.resources(), &[Node::id("f")]);
}
