use std::collections::HashSet;

use styio_ast::*;

fn block(stmts: Vec<Node>) -> BlockAST {
    BlockAST::new(stmts, None)
}

fn range() -> RangeAST {
    RangeAST::new(Node::int(0), Node::int(10), Node::int(1))
}

/// At least one node of every kind, most of them with children.
fn one_of_each() -> Vec<Node> {
    let sum = || Node::from(BinOpAST::new(Node::int(2), BinOperator::Add, Node::int(3)));
    let xs = || Node::id("xs");

    vec![
        Node::None,
        Node::True,
        Node::False,
        Node::Pass,
        Node::Break,
        Node::id("x"),
        Node::int(42),
        Node::float(0.25),
        Node::char('z'),
        Node::string("text"),
        Node::from(CommentAST::new("a comment")),
        Node::from(ExtPathAST::new("./file")),
        Node::from(ExtLinkAST::new("https://example.org")),
        Node::EmptyList,
        Node::from(ListAST::new(vec![Node::int(3), sum()])),
        Node::from(TupleAST::new(vec![Node::char('a'), Node::False])),
        Node::from(range()),
        Node::from(SizeOfAST::new(xs())),
        sum(),
        Node::from(BinCompAST::new(sum(), Comparison::NotEqual, Node::int(0))),
        Node::from(CondAST::binary(Node::True, LogicOperation::Or, Node::id("flag"))),
        Node::from(CondAST::not(Node::id("flag"))),
        Node::from(CondAST::raw(Node::id("flag"))),
        Node::from(ListOpAST::insert_item_by_index(xs(), IntAST::new(1), sum())),
        Node::from(ListOpAST::remove_items_by_many_values_from_right(xs(), vec![Node::int(1), Node::int(2)])),
        Node::from(ListOpAST::access_by_name(xs(), IdAST::new("len"))),
        Node::from(CallAST::new(IdAST::new("f"), vec![sum(), Node::id("y")])),
        Node::from(VarDefAST::new(vec![IdAST::new("a")]).expect("Non-empty definition")),
        Node::flex_bind(IdAST::new("a"), sum()),
        Node::final_bind(IdAST::new("b"), Node::from(ListAST::new(vec![]))),
        Node::from(ReadFileAST::new(IdAST::new("f"), Node::from(ExtPathAST::new("./in")))),
        Node::from(WriteStdOutAST::new(vec![Node::string("out"), sum()])),
        Node::from(ExtPackAST::new(vec!["a/b".to_string()]).expect("Valid package list")),
        Node::from(BlockAST::new(vec![Node::Pass, sum()], Some(Node::id("r")))),
        Node::from(MatchBlockAST::new(vec![(Node::int(1), sum()), (Node::None, Node::Pass)])),
        Node::from(CondFlowAST::if_else(Node::True, block(vec![sum()]), block(vec![]))),
        Node::from(ReturnAST::new(sum())),
        Node::from(FuncAST::new(IdAST::new("g"), vec![], block(vec![Node::Pass]), false)),
        Node::from(ICBSLayerAST::new(vec![Node::id("x")], None, Some(Node::id("m")))),
        Node::from(InfLoopAST::new(block(vec![Node::Break]))),
        Node::from(InfLoopAST::incremental(Node::int(0), Node::int(1), block(vec![]))),
        Node::from(IterInfLoopAST::new(vec![IdAST::new("i")], block(vec![Node::Break]))),
        Node::from(IterListAST::new(xs(), vec![IdAST::new("x"), IdAST::new("y")], block(vec![sum()]))),
        Node::from(IterRangeAST::new(range(), vec![IdAST::new("i")], block(vec![]))),
        Node::from(TypeAST::new("i32")),
        Node::from(TypedVarAST::new(IdAST::new("n"), TypeAST::new("i32"))),
        Node::from(
            FmtStrAST::new(vec!["sum: ".to_string(), "\n".to_string()], vec![sum()]).expect("One fragment per gap"),
        ),
        Node::from(SetAST::new(vec![Node::int(1), Node::char('\'')])),
        Node::from(FromToAST::new(Node::id("a"), xs())),
        Node::from(ResourceAST::new(vec![Node::final_bind(IdAST::new("f"), Node::from(ExtPathAST::new("./in")))])),
        Node::from(CheckEqAST::new(Node::int(0))),
        Node::from(CheckIsInAST::new(xs())),
        Node::from(ForwardAST::run(vec![], sum())),
        Node::from(ForwardAST::if_equal(vec![IdAST::new("n")], CheckEqAST::new(Node::int(0)), Node::Pass)),
        Node::from(ForwardAST::cond(
            vec![],
            CondFlowAST::if_true(Node::from(CondAST::raw(Node::id("ok"))), block(vec![])),
        )),
        // Text with line breaks and quotes in it.
        Node::string("two\nlines \"quoted\""),
        Node::char('\n'),
        Node::from(CommentAST::new("first\r\nsecond")),
        Node::from(ExtLinkAST::new("https://example.org/a\nb")),
        Node::from(ExtPackAST::new(vec!["dir\nname".to_string()]).expect("Valid package list")),
    ]
}

fn padding(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

#[test]
fn samples_cover_every_kind() {
    let kinds: HashSet<_> = one_of_each().iter().map(Node::kind).collect();

    assert_eq!(kinds.len(), 48);
}

#[test]
fn rendering_is_deterministic() {
    for node in one_of_each() {
        for inline in [false, true] {
            assert_eq!(render(&node, 1, inline), render(&node, 1, inline));
        }
    }
}

#[test]
fn block_form_starts_with_the_kind_name() {
    for node in one_of_each() {
        let rendered = render(&node, 0, false);

        assert!(rendered.starts_with(node.kind().name()), "{rendered}");
        assert!(!rendered.ends_with('\n'), "{rendered:?}");
    }
}

#[test]
fn inline_form_is_one_line() {
    for node in one_of_each() {
        let rendered = render(&node, 0, true);

        assert!(!rendered.contains('\n'), "{rendered:?}");
        assert_eq!(rendered, rendered.trim(), "{rendered:?}");
    }
}

#[test]
fn padding_grows_one_level_at_a_time() {
    let config = RenderConfig { indent_width: 3, colorful: false };

    for node in one_of_each() {
        let rendered = render_with(&node, 1, false, &config);
        let mut lines = rendered.lines();
        let mut previous = config.indent_width; // The first line sits at depth 1.
        assert_eq!(padding(lines.next().expect("At least one line")), 0);

        for (i, line) in lines.enumerate() {
            let pad = padding(line);
            assert_eq!(pad % config.indent_width, 0, "{rendered}");
            assert!(pad > config.indent_width, "{rendered}");
            if i == 0 {
                assert_eq!(pad, previous + config.indent_width, "{rendered}");
            } else {
                assert!(pad <= previous + config.indent_width, "{rendered}");
            }
            previous = pad;
        }
    }
}

#[test]
fn deeper_indent_shifts_every_line_below_the_first() {
    for node in one_of_each() {
        let shallow = render(&node, 0, false);
        let deep = render(&node, 2, false);

        assert_eq!(shallow.lines().count(), deep.lines().count());
        for (a, b) in shallow.lines().zip(deep.lines()).skip(1) {
            assert_eq!(padding(b), padding(a) + 4);
            assert_eq!(a.trim_start(), b.trim_start());
        }
    }
}

#[test]
fn empty_containers_render_alike_in_both_forms() {
    let empties = [
        (Node::from(ListAST::new(vec![])), "List [ ]"),
        (Node::from(TupleAST::new(vec![])), "Tuple ( )"),
        (Node::from(WriteStdOutAST::new(vec![])), "WriteStdOut { }"),
        (Node::from(BlockAST::new(vec![], None)), "Block { }"),
        (Node::from(MatchBlockAST::new(vec![])), "MatchBlock { }"),
        (Node::EmptyList, "EmptyList [ ]"),
    ];

    for (node, expected) in empties {
        assert_eq!(render(&node, 0, false), expected);
        assert_eq!(render(&node, 5, true), expected);
    }
}

#[test]
fn colour_only_touches_kind_names() {
    let colourful = RenderConfig { colorful: true, ..RenderConfig::default() };

    for node in one_of_each() {
        for inline in [false, true] {
            let plain = render(&node, 0, inline);
            let coloured = render_with(&node, 0, inline, &colourful);

            assert_eq!(coloured.replace("\x1b[1;36m", "").replace("\x1b[0m", ""), plain);
        }
    }
}

#[test]
fn final_binding_is_not_checked_when_rendered() {
    // Rebinding a final name is rejected by a later pass, never by the tree.
    let first = Node::final_bind(IdAST::new("c"), Node::int(1));
    let second = Node::final_bind(IdAST::new("c"), Node::int(2));
    let program = Node::from(BlockAST::new(vec![first, second], None));

    assert_eq!(
        render(&program, 0, true),
        "Block { FinalBind { Var: c; Val: 1 }; FinalBind { Var: c; Val: 2 } }"
    );
}
