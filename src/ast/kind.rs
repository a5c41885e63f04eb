use std::fmt;

/// The discriminant of a [`Node`](super::Node).
///
/// This set is stable: downstream passes may switch on it, and every match in
/// this crate over it is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    None,
    True,
    False,
    Pass,
    Break,
    Id,
    Int,
    Float,
    Char,
    String,
    FmtStr,
    Comment,
    ExtPath,
    ExtLink,
    Type,
    EmptyList,
    List,
    Tuple,
    Set,
    Range,
    FromTo,
    SizeOf,
    BinOp,
    BinComp,
    Cond,
    ListOp,
    Call,
    CheckEq,
    CheckIsIn,
    VarDef,
    TypedVar,
    FlexBind,
    FinalBind,
    ReadFile,
    WriteStdOut,
    ExtPack,
    Resource,
    Block,
    MatchBlock,
    CondFlow,
    Forward,
    Return,
    Func,
    ICBSLayer,
    InfLoop,
    IterInfLoop,
    IterList,
    IterRange,
}

impl NodeKind {
    /// The name printed at the head of a node's rendering.
    pub fn name(self) -> &'static str {
        use NodeKind as K;

        match self {
            K::None => "None",
            K::True => "True",
            K::False => "False",
            K::Pass => "Pass",
            K::Break => "Break",
            K::Id => "Id",
            K::Int => "Int",
            K::Float => "Float",
            K::Char => "Char",
            K::String => "String",
            K::FmtStr => "FmtStr",
            K::Comment => "Comment",
            K::ExtPath => "ExtPath",
            K::ExtLink => "ExtLink",
            K::Type => "Type",
            K::EmptyList => "EmptyList",
            K::List => "List",
            K::Tuple => "Tuple",
            K::Set => "Set",
            K::Range => "Range",
            K::FromTo => "FromTo",
            K::SizeOf => "SizeOf",
            K::BinOp => "BinOp",
            K::BinComp => "BinComp",
            K::Cond => "Cond",
            K::ListOp => "ListOp",
            K::Call => "Call",
            K::CheckEq => "CheckEq",
            K::CheckIsIn => "CheckIsIn",
            K::VarDef => "VarDef",
            K::TypedVar => "TypedVar",
            K::FlexBind => "FlexBind",
            K::FinalBind => "FinalBind",
            K::ReadFile => "ReadFile",
            K::WriteStdOut => "WriteStdOut",
            K::ExtPack => "ExtPack",
            K::Resource => "Resource",
            K::Block => "Block",
            K::MatchBlock => "MatchBlock",
            K::CondFlow => "CondFlow",
            K::Forward => "Forward",
            K::Return => "Return",
            K::Func => "Func",
            K::ICBSLayer => "ICBSLayer",
            K::InfLoop => "InfLoop",
            K::IterInfLoop => "IterInfLoop",
            K::IterList => "IterList",
            K::IterRange => "IterRange",
        }
    }

    /// True for kinds that never have children.
    pub fn is_leaf(self) -> bool {
        use NodeKind as K;

        matches!(
            self,
            K::None
                | K::True
                | K::False
                | K::Pass
                | K::Break
                | K::Id
                | K::Int
                | K::Float
                | K::Char
                | K::String
                | K::Comment
                | K::ExtPath
                | K::ExtLink
                | K::Type
                | K::EmptyList
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
