//! This module defines the node enum, its payload types, and simple methods on those types.

use super::list_op::ListOpAST;
use super::operators::{BinOperator, Comparison, LogicOperation};
use super::NodeKind;

use crate::error::ASTError;

/* Node Definition */

/// A single node of the syntax tree.
///
/// Unit variants are leaves with nothing to store. Every other variant holds a
/// payload struct which exclusively owns that node's children. A tree is built
/// bottom up and is read-only afterwards: payload fields are private and only
/// exposed through accessors.
///
/// [`FlexBind`](Node::FlexBind) and [`FinalBind`](Node::FinalBind) share
/// [`BindAST`]; that a final binding is never reassigned is checked by a later
/// pass, not here.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    None,
    True,
    False,
    Pass,
    Break,
    Id(IdAST),
    Int(IntAST),
    Float(FloatAST),
    Char(CharAST),
    String(StringAST),
    FmtStr(FmtStrAST),
    Comment(CommentAST),
    ExtPath(ExtPathAST),
    ExtLink(ExtLinkAST),
    Type(TypeAST),
    EmptyList,
    List(ListAST),
    Tuple(TupleAST),
    Set(SetAST),
    Range(RangeAST),
    FromTo(FromToAST),
    SizeOf(SizeOfAST),
    BinOp(BinOpAST),
    BinComp(BinCompAST),
    Cond(CondAST),
    ListOp(ListOpAST),
    Call(CallAST),
    CheckEq(CheckEqAST),
    CheckIsIn(CheckIsInAST),
    VarDef(VarDefAST),
    TypedVar(TypedVarAST),
    FlexBind(BindAST),
    FinalBind(BindAST),
    ReadFile(ReadFileAST),
    WriteStdOut(WriteStdOutAST),
    ExtPack(ExtPackAST),
    Resource(ResourceAST),
    Block(BlockAST),
    MatchBlock(MatchBlockAST),
    CondFlow(CondFlowAST),
    Forward(ForwardAST),
    Return(ReturnAST),
    Func(FuncAST),
    ICBSLayer(ICBSLayerAST),
    InfLoop(InfLoopAST),
    IterInfLoop(IterInfLoopAST),
    IterList(IterListAST),
    IterRange(IterRangeAST),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        use Node as N;
        use NodeKind as K;

        match self {
            N::None => K::None,
            N::True => K::True,
            N::False => K::False,
            N::Pass => K::Pass,
            N::Break => K::Break,
            N::Id(_) => K::Id,
            N::Int(_) => K::Int,
            N::Float(_) => K::Float,
            N::Char(_) => K::Char,
            N::String(_) => K::String,
            N::FmtStr(_) => K::FmtStr,
            N::Comment(_) => K::Comment,
            N::ExtPath(_) => K::ExtPath,
            N::ExtLink(_) => K::ExtLink,
            N::Type(_) => K::Type,
            N::EmptyList => K::EmptyList,
            N::List(_) => K::List,
            N::Tuple(_) => K::Tuple,
            N::Set(_) => K::Set,
            N::Range(_) => K::Range,
            N::FromTo(_) => K::FromTo,
            N::SizeOf(_) => K::SizeOf,
            N::BinOp(_) => K::BinOp,
            N::BinComp(_) => K::BinComp,
            N::Cond(_) => K::Cond,
            N::ListOp(_) => K::ListOp,
            N::Call(_) => K::Call,
            N::CheckEq(_) => K::CheckEq,
            N::CheckIsIn(_) => K::CheckIsIn,
            N::VarDef(_) => K::VarDef,
            N::TypedVar(_) => K::TypedVar,
            N::FlexBind(_) => K::FlexBind,
            N::FinalBind(_) => K::FinalBind,
            N::ReadFile(_) => K::ReadFile,
            N::WriteStdOut(_) => K::WriteStdOut,
            N::ExtPack(_) => K::ExtPack,
            N::Resource(_) => K::Resource,
            N::Block(_) => K::Block,
            N::MatchBlock(_) => K::MatchBlock,
            N::CondFlow(_) => K::CondFlow,
            N::Forward(_) => K::Forward,
            N::Return(_) => K::Return,
            N::Func(_) => K::Func,
            N::ICBSLayer(_) => K::ICBSLayer,
            N::InfLoop(_) => K::InfLoop,
            N::IterInfLoop(_) => K::IterInfLoop,
            N::IterList(_) => K::IterList,
            N::IterRange(_) => K::IterRange,
        }
    }

    /* Shorthands for the leaves the parser builds most often. */

    pub fn id(name: impl Into<String>) -> Node {
        Node::Id(IdAST::new(name))
    }

    pub fn int(value: i128) -> Node {
        Node::Int(IntAST::new(value))
    }

    pub fn float(value: f64) -> Node {
        Node::Float(FloatAST::new(value))
    }

    pub fn char(value: char) -> Node {
        Node::Char(CharAST::new(value))
    }

    pub fn string(value: impl Into<String>) -> Node {
        Node::String(StringAST::new(value))
    }

    pub fn flex_bind(var: IdAST, value: Node) -> Node {
        Node::FlexBind(BindAST::new(var, value))
    }

    pub fn final_bind(var: IdAST, value: Node) -> Node {
        Node::FinalBind(BindAST::new(var, value))
    }
}

// Wraps a payload in the one variant that can hold it. `BindAST` is left out
// since it belongs to two variants.
macro_rules! node_from_payload {
    ($($variant:ident($payload:ty)),* $(,)?) => {
        $(
            impl From<$payload> for Node {
                fn from(value: $payload) -> Self {
                    Node::$variant(value)
                }
            }
        )*
    };
}

node_from_payload!(
    Id(IdAST),
    Int(IntAST),
    Float(FloatAST),
    Char(CharAST),
    String(StringAST),
    FmtStr(FmtStrAST),
    Comment(CommentAST),
    ExtPath(ExtPathAST),
    ExtLink(ExtLinkAST),
    Type(TypeAST),
    List(ListAST),
    Tuple(TupleAST),
    Set(SetAST),
    Range(RangeAST),
    FromTo(FromToAST),
    SizeOf(SizeOfAST),
    BinOp(BinOpAST),
    BinComp(BinCompAST),
    Cond(CondAST),
    ListOp(ListOpAST),
    Call(CallAST),
    CheckEq(CheckEqAST),
    CheckIsIn(CheckIsInAST),
    VarDef(VarDefAST),
    TypedVar(TypedVarAST),
    ReadFile(ReadFileAST),
    WriteStdOut(WriteStdOutAST),
    ExtPack(ExtPackAST),
    Resource(ResourceAST),
    Block(BlockAST),
    MatchBlock(MatchBlockAST),
    CondFlow(CondFlowAST),
    Forward(ForwardAST),
    Return(ReturnAST),
    Func(FuncAST),
    ICBSLayer(ICBSLayerAST),
    InfLoop(InfLoopAST),
    IterInfLoop(IterInfLoopAST),
    IterList(IterListAST),
    IterRange(IterRangeAST),
);

/* Leaves */

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdAST {
    name: String,
}

impl IdAST {
    pub fn new(name: impl Into<String>) -> IdAST {
        IdAST { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An integer literal.
///
/// i128 can hold every literal up to u64 and i64. Whether a literal fits a
/// specific type is decided later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntAST {
    value: i128,
}

impl IntAST {
    pub fn new(value: i128) -> IntAST {
        IntAST { value }
    }

    pub fn value(&self) -> i128 {
        self.value
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatAST {
    value: f64,
}

impl FloatAST {
    pub fn new(value: f64) -> FloatAST {
        FloatAST { value }
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharAST {
    value: char,
}

impl CharAST {
    pub fn new(value: char) -> CharAST {
        CharAST { value }
    }

    pub fn value(&self) -> char {
        self.value
    }
}

/// A string literal. The content has escapes processed and no quotes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StringAST {
    value: String,
}

impl StringAST {
    pub fn new(value: impl Into<String>) -> StringAST {
        StringAST { value: value.into() }
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommentAST {
    text: String,
}

impl CommentAST {
    pub fn new(text: impl Into<String>) -> CommentAST {
        CommentAST { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A file path used as a data resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtPathAST {
    path: String,
}

impl ExtPathAST {
    pub fn new(path: impl Into<String>) -> ExtPathAST {
        ExtPathAST { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// A web link used as a data resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtLinkAST {
    link: String,
}

impl ExtLinkAST {
    pub fn new(link: impl Into<String>) -> ExtLinkAST {
        ExtLinkAST { link: link.into() }
    }

    pub fn link(&self) -> &str {
        &self.link
    }
}

/// A type annotation, kept as the name the programmer wrote.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeAST {
    name: String,
}

impl TypeAST {
    pub fn new(name: impl Into<String>) -> TypeAST {
        TypeAST { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/* Collections */

/// An extendable list literal. An empty `ListAST` is legal and distinct from
/// [`Node::EmptyList`], which is the `[]` literal itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ListAST {
    elems: Vec<Node>,
}

impl ListAST {
    pub fn new(elems: Vec<Node>) -> ListAST {
        ListAST { elems }
    }

    pub fn elems(&self) -> &[Node] {
        &self.elems
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TupleAST {
    elems: Vec<Node>,
}

impl TupleAST {
    pub fn new(elems: Vec<Node>) -> TupleAST {
        TupleAST { elems }
    }

    pub fn elems(&self) -> &[Node] {
        &self.elems
    }
}

/// A range with a start, an end, and a step. All three are required.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeAST {
    start: Box<Node>,
    end: Box<Node>,
    step: Box<Node>,
}

impl RangeAST {
    pub fn new(start: Node, end: Node, step: Node) -> RangeAST {
        RangeAST { start: Box::new(start), end: Box::new(end), step: Box::new(step) }
    }

    pub fn start(&self) -> &Node {
        &self.start
    }

    pub fn end(&self) -> &Node {
        &self.end
    }

    pub fn step(&self) -> &Node {
        &self.step
    }
}

/// Unordered distinct elements. Duplicates are rejected by a later pass, so
/// the elements keep the order they were written in.
#[derive(Debug, Clone, PartialEq)]
pub struct SetAST {
    elems: Vec<Node>,
}

impl SetAST {
    pub fn new(elems: Vec<Node>) -> SetAST {
        SetAST { elems }
    }

    pub fn elems(&self) -> &[Node] {
        &self.elems
    }
}

/// `from -> to`, a pair of endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct FromToAST {
    from: Box<Node>,
    to: Box<Node>,
}

impl FromToAST {
    pub fn new(from: Node, to: Node) -> FromToAST {
        FromToAST { from: Box::new(from), to: Box::new(to) }
    }

    pub fn from(&self) -> &Node {
        &self.from
    }

    pub fn to(&self) -> &Node {
        &self.to
    }
}

/// A format string, split into literal fragments around its embedded
/// expressions.
///
/// `"Hi {name}!"` is the fragments `["Hi ", "!"]` and the expressions `[name]`:
/// there is always exactly one more fragment than there are expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct FmtStrAST {
    fragments: Vec<String>,
    exprs: Vec<Node>,
}

impl FmtStrAST {
    pub fn new(fragments: Vec<String>, exprs: Vec<Node>) -> Result<FmtStrAST, ASTError> {
        if fragments.len() != exprs.len() + 1 {
            tracing::debug!(fragments = fragments.len(), exprs = exprs.len(), "rejected format string");
            return Err(ASTError::FragmentMismatch { fragments: fragments.len(), exprs: exprs.len() });
        }

        Ok(FmtStrAST { fragments, exprs })
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn exprs(&self) -> &[Node] {
        &self.exprs
    }
}

/* Basic Operations */

/// The size (length) of a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeOfAST {
    value: Box<Node>,
}

impl SizeOfAST {
    pub fn new(value: Node) -> SizeOfAST {
        SizeOfAST { value: Box::new(value) }
    }

    pub fn value(&self) -> &Node {
        &self.value
    }
}

/// An arithmetic or bitwise operation.
///
/// The operands are stored as given. Which operand types an operator accepts is
/// described by [`crate::types::BINOP_RULES`] and enforced by the type checker.
#[derive(Debug, Clone, PartialEq)]
pub struct BinOpAST {
    op: BinOperator,
    lhs: Box<Node>,
    rhs: Box<Node>,
}

impl BinOpAST {
    pub fn new(lhs: Node, op: BinOperator, rhs: Node) -> BinOpAST {
        BinOpAST { op, lhs: Box::new(lhs), rhs: Box::new(rhs) }
    }

    pub fn op(&self) -> BinOperator {
        self.op
    }

    pub fn lhs(&self) -> &Node {
        &self.lhs
    }

    pub fn rhs(&self) -> &Node {
        &self.rhs
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinCompAST {
    op: Comparison,
    lhs: Box<Node>,
    rhs: Box<Node>,
}

impl BinCompAST {
    pub fn new(lhs: Node, op: Comparison, rhs: Node) -> BinCompAST {
        BinCompAST { op, lhs: Box::new(lhs), rhs: Box::new(rhs) }
    }

    pub fn op(&self) -> Comparison {
        self.op
    }

    pub fn lhs(&self) -> &Node {
        &self.lhs
    }

    pub fn rhs(&self) -> &Node {
        &self.rhs
    }
}

/// A condition, as used by [`CondFlowAST`].
#[derive(Debug, Clone, PartialEq)]
pub struct CondAST {
    form: CondForm,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CondForm {
    Binary { op: LogicOperation, lhs: Box<Node>, rhs: Box<Node> },
    Not(Box<Node>),
    /// A value used directly as a condition.
    Raw(Box<Node>),
}

impl CondAST {
    pub fn binary(lhs: Node, op: LogicOperation, rhs: Node) -> CondAST {
        CondAST { form: CondForm::Binary { op, lhs: Box::new(lhs), rhs: Box::new(rhs) } }
    }

    pub fn not(value: Node) -> CondAST {
        CondAST { form: CondForm::Not(Box::new(value)) }
    }

    pub fn raw(value: Node) -> CondAST {
        CondAST { form: CondForm::Raw(Box::new(value)) }
    }

    pub fn form(&self) -> &CondForm {
        &self.form
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallAST {
    callee: IdAST,
    args: Vec<Node>,
}

impl CallAST {
    pub fn new(callee: IdAST, args: Vec<Node>) -> CallAST {
        CallAST { callee, args }
    }

    pub fn callee(&self) -> &IdAST {
        &self.callee
    }

    pub fn args(&self) -> &[Node] {
        &self.args
    }
}

/// `?= value`: lets a value through only if it equals `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckEqAST {
    value: Box<Node>,
}

impl CheckEqAST {
    pub fn new(value: Node) -> CheckEqAST {
        CheckEqAST { value: Box::new(value) }
    }

    pub fn value(&self) -> &Node {
        &self.value
    }
}

/// `?^ iterable`: lets a value through only if `iterable` contains it.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckIsInAST {
    iterable: Box<Node>,
}

impl CheckIsInAST {
    pub fn new(iterable: Node) -> CheckIsInAST {
        CheckIsInAST { iterable: Box::new(iterable) }
    }

    pub fn iterable(&self) -> &Node {
        &self.iterable
    }
}

/* Statements */

/// Declares variables without binding them.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDefAST {
    vars: Vec<IdAST>,
}

impl VarDefAST {
    /// Fails if `vars` is empty: a definition always declares something.
    pub fn new(vars: Vec<IdAST>) -> Result<VarDefAST, ASTError> {
        if vars.is_empty() {
            tracing::debug!("rejected variable definition without identifiers");
            return Err(ASTError::EmptyVarDef);
        }

        Ok(VarDefAST { vars })
    }

    pub fn vars(&self) -> &[IdAST] {
        &self.vars
    }
}

/// A variable-value binding, flexible or final depending on the [`Node`] variant holding it.
#[derive(Debug, Clone, PartialEq)]
pub struct BindAST {
    var: IdAST,
    value: Box<Node>,
}

impl BindAST {
    pub fn new(var: IdAST, value: Node) -> BindAST {
        BindAST { var, value: Box::new(value) }
    }

    pub fn var(&self) -> &IdAST {
        &self.var
    }

    pub fn value(&self) -> &Node {
        &self.value
    }
}

/// Reads the resource named by `path` into `var`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadFileAST {
    var: IdAST,
    path: Box<Node>,
}

impl ReadFileAST {
    pub fn new(var: IdAST, path: Node) -> ReadFileAST {
        ReadFileAST { var, path: Box::new(path) }
    }

    pub fn var(&self) -> &IdAST {
        &self.var
    }

    pub fn path(&self) -> &Node {
        &self.path
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WriteStdOutAST {
    outputs: Vec<Node>,
}

impl WriteStdOutAST {
    pub fn new(outputs: Vec<Node>) -> WriteStdOutAST {
        WriteStdOutAST { outputs }
    }

    pub fn outputs(&self) -> &[Node] {
        &self.outputs
    }
}

/// External packages the program depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtPackAST {
    paths: Vec<String>,
}

impl ExtPackAST {
    /// Fails if there are no paths or any path is blank.
    pub fn new(paths: Vec<String>) -> Result<ExtPackAST, ASTError> {
        if paths.is_empty() {
            tracing::debug!("rejected empty package list");
            return Err(ASTError::EmptyExtPack);
        }

        if let Some(position) = paths.iter().position(|path| path.trim().is_empty()) {
            tracing::debug!(position, "rejected blank package path");
            return Err(ASTError::BlankPackagePath { position });
        }

        Ok(ExtPackAST { paths })
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }
}

/// A variable with a declared type, `x: i32`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedVarAST {
    var: IdAST,
    ty: TypeAST,
}

impl TypedVarAST {
    pub fn new(var: IdAST, ty: TypeAST) -> TypedVarAST {
        TypedVarAST { var, ty }
    }

    pub fn var(&self) -> &IdAST {
        &self.var
    }

    pub fn ty(&self) -> &TypeAST {
        &self.ty
    }
}

/// `@(...)`: the resources a scope acquires, usually bindings to files or links.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceAST {
    resources: Vec<Node>,
}

impl ResourceAST {
    pub fn new(resources: Vec<Node>) -> ResourceAST {
        ResourceAST { resources }
    }

    pub fn resources(&self) -> &[Node] {
        &self.resources
    }
}

/* Blocks */

/// Statements run in order. The optional trailing expression supplies the
/// block's value.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockAST {
    stmts: Vec<Node>,
    ret: Option<Box<Node>>,
}

impl BlockAST {
    pub fn new(stmts: Vec<Node>, ret: Option<Node>) -> BlockAST {
        BlockAST { stmts, ret: ret.map(Box::new) }
    }

    pub fn stmts(&self) -> &[Node] {
        &self.stmts
    }

    pub fn ret(&self) -> Option<&Node> {
        self.ret.as_deref()
    }
}

/// Ordered (pattern, branch) pairs. The first pattern that matches picks the
/// branch, so order is significant.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchBlockAST {
    cases: Vec<(Node, Node)>,
}

impl MatchBlockAST {
    pub fn new(cases: Vec<(Node, Node)>) -> MatchBlockAST {
        MatchBlockAST { cases }
    }

    pub fn cases(&self) -> &[(Node, Node)] {
        &self.cases
    }
}

/// A conditional with a then branch, an else branch, or both.
#[derive(Debug, Clone, PartialEq)]
pub struct CondFlowAST {
    cond: Box<Node>,
    then_block: Option<BlockAST>,
    else_block: Option<BlockAST>,
}

impl CondFlowAST {
    /// Runs `then_block` when `cond` holds.
    pub fn if_true(cond: Node, then_block: BlockAST) -> CondFlowAST {
        CondFlowAST { cond: Box::new(cond), then_block: Some(then_block), else_block: None }
    }

    /// Runs `else_block` when `cond` does not hold.
    pub fn if_false(cond: Node, else_block: BlockAST) -> CondFlowAST {
        CondFlowAST { cond: Box::new(cond), then_block: None, else_block: Some(else_block) }
    }

    pub fn if_else(cond: Node, then_block: BlockAST, else_block: BlockAST) -> CondFlowAST {
        CondFlowAST { cond: Box::new(cond), then_block: Some(then_block), else_block: Some(else_block) }
    }

    pub fn cond(&self) -> &Node {
        &self.cond
    }

    pub fn then_block(&self) -> Option<&BlockAST> {
        self.then_block.as_ref()
    }

    pub fn else_block(&self) -> Option<&BlockAST> {
        self.else_block.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnAST {
    value: Box<Node>,
}

impl ReturnAST {
    pub fn new(value: Node) -> ReturnAST {
        ReturnAST { value: Box::new(value) }
    }

    pub fn value(&self) -> &Node {
        &self.value
    }
}

/// A function definition. A final function may not be redefined, which, like
/// final bindings, is left to a later pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FuncAST {
    name: IdAST,
    params: Vec<IdAST>,
    body: BlockAST,
    is_final: bool,
}

impl FuncAST {
    pub fn new(name: IdAST, params: Vec<IdAST>, body: BlockAST, is_final: bool) -> FuncAST {
        FuncAST { name, params, body, is_final }
    }

    pub fn name(&self) -> &IdAST {
        &self.name
    }

    pub fn params(&self) -> &[IdAST] {
        &self.params
    }

    pub fn body(&self) -> &BlockAST {
        &self.body
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }
}

/// What a forward does with the value it receives.
#[derive(Debug, Clone, PartialEq)]
pub enum ForwardBody {
    /// `=> expr`
    Run(Box<Node>),
    /// `?= value => expr`
    IfEqual(CheckEqAST, Box<Node>),
    /// `?^ iterable => expr`
    IfIsIn(CheckIsInAST, Box<Node>),
    /// `?= { cases }`
    Cases(MatchBlockAST),
    /// `? (cond) \t { } \f { }`
    Cond(CondFlowAST),
}

/// `>> (a, b) => ...`: hands a value on to an expression, optionally binding it
/// to temporary variables first. Function bodies and loops are forwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardAST {
    vars: Vec<IdAST>,
    body: ForwardBody,
}

impl ForwardAST {
    pub fn new(vars: Vec<IdAST>, body: ForwardBody) -> ForwardAST {
        ForwardAST { vars, body }
    }

    pub fn run(vars: Vec<IdAST>, then: Node) -> ForwardAST {
        Self::new(vars, ForwardBody::Run(Box::new(then)))
    }

    pub fn if_equal(vars: Vec<IdAST>, check: CheckEqAST, then: Node) -> ForwardAST {
        Self::new(vars, ForwardBody::IfEqual(check, Box::new(then)))
    }

    pub fn if_is_in(vars: Vec<IdAST>, check: CheckIsInAST, then: Node) -> ForwardAST {
        Self::new(vars, ForwardBody::IfIsIn(check, Box::new(then)))
    }

    pub fn cases(vars: Vec<IdAST>, cases: MatchBlockAST) -> ForwardAST {
        Self::new(vars, ForwardBody::Cases(cases))
    }

    pub fn cond(vars: Vec<IdAST>, flow: CondFlowAST) -> ForwardAST {
        Self::new(vars, ForwardBody::Cond(flow))
    }

    /// Temporary variables the value is bound to. Empty when the value is passed on as is.
    pub fn vars(&self) -> &[IdAST] {
        &self.vars
    }

    pub fn body(&self) -> &ForwardBody {
        &self.body
    }
}

/* Layers and Loops */

/// Intermediate Connection Between Scopes: the elements an iteration hands to
/// its body, with an optional filter and an optional match applied per step.
///
/// Whether each element is a fresh temporary, an outer variable refreshed per
/// step, or a re-evaluated expression is decided by the interpreter.
#[derive(Debug, Clone, PartialEq)]
pub struct ICBSLayerAST {
    vars: Vec<Node>,
    filter: Option<Box<Node>>,
    matcher: Option<Box<Node>>,
}

impl ICBSLayerAST {
    pub fn new(vars: Vec<Node>, filter: Option<Node>, matcher: Option<Node>) -> ICBSLayerAST {
        ICBSLayerAST { vars, filter: filter.map(Box::new), matcher: matcher.map(Box::new) }
    }

    pub fn vars(&self) -> &[Node] {
        &self.vars
    }

    pub fn filter(&self) -> Option<&Node> {
        self.filter.as_deref()
    }

    pub fn matcher(&self) -> Option<&Node> {
        self.matcher.as_deref()
    }
}

/// An infinite loop, optionally counting from `start` by `increment`.
#[derive(Debug, Clone, PartialEq)]
pub struct InfLoopAST {
    counter: Option<(Box<Node>, Box<Node>)>,
    body: BlockAST,
}

impl InfLoopAST {
    pub fn new(body: BlockAST) -> InfLoopAST {
        InfLoopAST { counter: None, body }
    }

    pub fn incremental(start: Node, increment: Node, body: BlockAST) -> InfLoopAST {
        InfLoopAST { counter: Some((Box::new(start), Box::new(increment))), body }
    }

    pub fn start(&self) -> Option<&Node> {
        self.counter.as_ref().map(|(start, _)| start.as_ref())
    }

    pub fn increment(&self) -> Option<&Node> {
        self.counter.as_ref().map(|(_, increment)| increment.as_ref())
    }

    pub fn body(&self) -> &BlockAST {
        &self.body
    }
}

/// `[...] >> { }`
#[derive(Debug, Clone, PartialEq)]
pub struct IterInfLoopAST {
    vars: Vec<IdAST>,
    body: BlockAST,
}

impl IterInfLoopAST {
    pub fn new(vars: Vec<IdAST>, body: BlockAST) -> IterInfLoopAST {
        IterInfLoopAST { vars, body }
    }

    pub fn vars(&self) -> &[IdAST] {
        &self.vars
    }

    pub fn body(&self) -> &BlockAST {
        &self.body
    }
}

/// `list >> vars => { }`. The source may be any expression producing a list.
#[derive(Debug, Clone, PartialEq)]
pub struct IterListAST {
    list: Box<Node>,
    vars: Vec<IdAST>,
    body: BlockAST,
}

impl IterListAST {
    pub fn new(list: Node, vars: Vec<IdAST>, body: BlockAST) -> IterListAST {
        IterListAST { list: Box::new(list), vars, body }
    }

    pub fn list(&self) -> &Node {
        &self.list
    }

    pub fn vars(&self) -> &[IdAST] {
        &self.vars
    }

    pub fn body(&self) -> &BlockAST {
        &self.body
    }
}

/// `range >> vars => { }`
#[derive(Debug, Clone, PartialEq)]
pub struct IterRangeAST {
    range: RangeAST,
    vars: Vec<IdAST>,
    body: BlockAST,
}

impl IterRangeAST {
    pub fn new(range: RangeAST, vars: Vec<IdAST>, body: BlockAST) -> IterRangeAST {
        IterRangeAST { range, vars, body }
    }

    pub fn range(&self) -> &RangeAST {
        &self.range
    }

    pub fn vars(&self) -> &[IdAST] {
        &self.vars
    }

    pub fn body(&self) -> &BlockAST {
        &self.body
    }
}
