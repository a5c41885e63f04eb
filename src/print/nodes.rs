//! How each kind of node lays itself out.

use super::{Delims, Entry, Printer, Render};

use crate::ast::*;

impl Render for Node {
    fn write(&self, p: &mut Printer<'_>, depth: usize, inline: bool) {
        use Node as N;
        use NodeKind as K;

        match self {
            N::None => p.leaf(K::None, None, Some("None"), inline),
            N::True => p.leaf(K::True, None, Some("true"), inline),
            N::False => p.leaf(K::False, None, Some("false"), inline),
            N::Pass => p.leaf(K::Pass, None, Some("pass"), inline),
            N::Break => p.leaf(K::Break, None, Some("break"), inline),
            N::EmptyList => {
                p.head(K::EmptyList, None);
                p.body(Delims::SEQUENCE, &[], depth, inline);
            }
            N::Id(id) => id.write(p, depth, inline),
            N::Int(int) => int.write(p, depth, inline),
            N::Float(float) => float.write(p, depth, inline),
            N::Char(c) => c.write(p, depth, inline),
            N::String(string) => string.write(p, depth, inline),
            N::FmtStr(fmt_str) => fmt_str.write(p, depth, inline),
            N::Comment(comment) => p.leaf(K::Comment, Some(&escaped(comment.text())), None, inline),
            N::ExtPath(path) => p.leaf(K::ExtPath, Some(&escaped(path.path())), None, inline),
            N::ExtLink(link) => p.leaf(K::ExtLink, Some(&escaped(link.link())), None, inline),
            N::Type(ty) => ty.write(p, depth, inline),
            N::List(list) => list.write(p, depth, inline),
            N::Tuple(tuple) => tuple.write(p, depth, inline),
            N::Set(set) => set.write(p, depth, inline),
            N::Range(range) => range.write(p, depth, inline),
            N::FromTo(from_to) => from_to.write(p, depth, inline),
            N::SizeOf(size_of) => size_of.write(p, depth, inline),
            N::BinOp(bin_op) => bin_op.write(p, depth, inline),
            N::BinComp(bin_comp) => bin_comp.write(p, depth, inline),
            N::Cond(cond) => cond.write(p, depth, inline),
            N::ListOp(list_op) => list_op.write(p, depth, inline),
            N::Call(call) => call.write(p, depth, inline),
            N::CheckEq(check) => check.write(p, depth, inline),
            N::CheckIsIn(check) => check.write(p, depth, inline),
            N::VarDef(var_def) => var_def.write(p, depth, inline),
            N::TypedVar(typed_var) => typed_var.write(p, depth, inline),
            N::FlexBind(bind) => write_bind(p, K::FlexBind, bind, depth, inline),
            N::FinalBind(bind) => write_bind(p, K::FinalBind, bind, depth, inline),
            N::ReadFile(read_file) => read_file.write(p, depth, inline),
            N::WriteStdOut(write_std_out) => write_std_out.write(p, depth, inline),
            N::ExtPack(ext_pack) => ext_pack.write(p, depth, inline),
            N::Resource(resource) => resource.write(p, depth, inline),
            N::Block(block) => block.write(p, depth, inline),
            N::MatchBlock(match_block) => match_block.write(p, depth, inline),
            N::CondFlow(cond_flow) => cond_flow.write(p, depth, inline),
            N::Forward(forward) => forward.write(p, depth, inline),
            N::Return(ret) => ret.write(p, depth, inline),
            N::Func(func) => func.write(p, depth, inline),
            N::ICBSLayer(layer) => layer.write(p, depth, inline),
            N::InfLoop(inf_loop) => inf_loop.write(p, depth, inline),
            N::IterInfLoop(iter) => iter.write(p, depth, inline),
            N::IterList(iter) => iter.write(p, depth, inline),
            N::IterRange(iter) => iter.write(p, depth, inline),
        }
    }
}

/* Leaves */

// Source text goes through `escape_debug`, so a newline or quote inside it can
// never break the line structure or end a quoted literal early.
fn escaped(text: &str) -> String {
    text.escape_debug().to_string()
}

impl Render for IdAST {
    fn write(&self, p: &mut Printer<'_>, _depth: usize, inline: bool) {
        let name = escaped(self.name());
        p.leaf(NodeKind::Id, Some(&name), Some(&name), inline);
    }
}

impl Render for TypeAST {
    fn write(&self, p: &mut Printer<'_>, _depth: usize, inline: bool) {
        let name = escaped(self.name());
        p.leaf(NodeKind::Type, Some(&name), Some(&name), inline);
    }
}

impl Render for IntAST {
    fn write(&self, p: &mut Printer<'_>, _depth: usize, inline: bool) {
        let value = self.value().to_string();
        p.leaf(NodeKind::Int, Some(&value), Some(&value), inline);
    }
}

impl Render for FloatAST {
    fn write(&self, p: &mut Printer<'_>, _depth: usize, inline: bool) {
        // Debug keeps the fractional part on whole numbers (`2.0`, not `2`).
        let value = format!("{:?}", self.value());
        p.leaf(NodeKind::Float, Some(&value), Some(&value), inline);
    }
}

impl Render for CharAST {
    fn write(&self, p: &mut Printer<'_>, _depth: usize, inline: bool) {
        let value = format!("'{}'", self.value().escape_debug());
        p.leaf(NodeKind::Char, Some(&value), Some(&value), inline);
    }
}

impl Render for StringAST {
    fn write(&self, p: &mut Printer<'_>, _depth: usize, inline: bool) {
        let value = format!("\"{}\"", self.value().escape_debug());
        p.leaf(NodeKind::String, Some(&value), Some(&value), inline);
    }
}

/* Collections */

impl Render for ListAST {
    fn write(&self, p: &mut Printer<'_>, depth: usize, inline: bool) {
        let entries: Vec<_> = self.elems().iter().map(Entry::child).collect();

        p.head(NodeKind::List, None);
        p.body(Delims::SEQUENCE, &entries, depth, inline);
    }
}

impl Render for TupleAST {
    fn write(&self, p: &mut Printer<'_>, depth: usize, inline: bool) {
        let entries: Vec<_> = self.elems().iter().map(Entry::child).collect();

        p.head(NodeKind::Tuple, None);
        p.body(Delims::TUPLE, &entries, depth, inline);
    }
}

impl Render for RangeAST {
    fn write(&self, p: &mut Printer<'_>, depth: usize, inline: bool) {
        let entries = [
            Entry::field("Start", self.start()),
            Entry::field("End", self.end()),
            Entry::field("Step", self.step()),
        ];

        p.head(NodeKind::Range, None);
        p.body(Delims::RECORD, &entries, depth, inline);
    }
}

impl Render for SetAST {
    fn write(&self, p: &mut Printer<'_>, depth: usize, inline: bool) {
        let entries: Vec<_> = self.elems().iter().map(Entry::child).collect();

        p.head(NodeKind::Set, None);
        p.body(Delims::SEQUENCE, &entries, depth, inline);
    }
}

impl Render for FromToAST {
    fn write(&self, p: &mut Printer<'_>, depth: usize, inline: bool) {
        let entries = [Entry::field("From", self.from()), Entry::field("To", self.to())];

        p.head(NodeKind::FromTo, None);
        p.body(Delims::RECORD, &entries, depth, inline);
    }
}

impl Render for FmtStrAST {
    fn write(&self, p: &mut Printer<'_>, depth: usize, inline: bool) {
        let fragments = self.fragments().iter().map(|fragment| Entry::text(format!("\"{}\"", escaped(fragment))));
        let entries = [
            Entry::field_seq("Fragments", Delims::SEQUENCE, fragments.collect()),
            Entry::field_seq("Exprs", Delims::SEQUENCE, self.exprs().iter().map(Entry::child).collect()),
        ];

        p.head(NodeKind::FmtStr, None);
        p.body(Delims::RECORD, &entries, depth, inline);
    }
}

/* Operations */

impl Render for SizeOfAST {
    fn write(&self, p: &mut Printer<'_>, depth: usize, inline: bool) {
        p.head(NodeKind::SizeOf, None);
        p.body(Delims::GROUP, &[Entry::child(self.value())], depth, inline);
    }
}

/// `Kind { lhs op rhs }`, the inline form shared by every binary operation.
fn write_infix(p: &mut Printer<'_>, kind: NodeKind, lhs: &Node, symbol: &str, rhs: &Node, depth: usize) {
    p.head(kind, None);
    p.text(" { ");
    p.child(lhs, depth, true);
    p.text(" ");
    p.text(symbol);
    p.text(" ");
    p.child(rhs, depth, true);
    p.text(" }");
}

impl Render for BinOpAST {
    fn write(&self, p: &mut Printer<'_>, depth: usize, inline: bool) {
        if inline {
            write_infix(p, NodeKind::BinOp, self.lhs(), self.op().symbol(), self.rhs(), depth);
            return;
        }

        let entries = [
            Entry::field("LHS", self.lhs()),
            Entry::field_text("Op", self.op().symbol()),
            Entry::field("RHS", self.rhs()),
        ];

        p.head(NodeKind::BinOp, None);
        p.body(Delims::RECORD, &entries, depth, false);
    }
}

impl Render for BinCompAST {
    fn write(&self, p: &mut Printer<'_>, depth: usize, inline: bool) {
        if inline {
            write_infix(p, NodeKind::BinComp, self.lhs(), self.op().symbol(), self.rhs(), depth);
            return;
        }

        let entries = [
            Entry::field("LHS", self.lhs()),
            Entry::field_text("Op", self.op().symbol()),
            Entry::field("RHS", self.rhs()),
        ];

        p.head(NodeKind::BinComp, None);
        p.body(Delims::RECORD, &entries, depth, false);
    }
}

impl Render for CondAST {
    fn write(&self, p: &mut Printer<'_>, depth: usize, inline: bool) {
        match (self.form(), inline) {
            (CondForm::Binary { op, lhs, rhs }, true) => {
                write_infix(p, NodeKind::Cond, lhs, op.symbol(), rhs, depth);
            }
            (CondForm::Not(value), true) => {
                p.head(NodeKind::Cond, None);
                p.text(" { !");
                p.child(&**value, depth, true);
                p.text(" }");
            }
            (CondForm::Raw(value), true) => {
                p.head(NodeKind::Cond, None);
                p.body(Delims::GROUP, &[Entry::child(&**value)], depth, true);
            }
            (CondForm::Binary { op, lhs, rhs }, false) => {
                let entries = [
                    Entry::field_text("Op", op.symbol()),
                    Entry::field("LHS", &**lhs),
                    Entry::field("RHS", &**rhs),
                ];
                p.head(NodeKind::Cond, None);
                p.body(Delims::RECORD, &entries, depth, false);
            }
            (CondForm::Not(value), false) => {
                let entries = [Entry::field_text("Op", "!"), Entry::field("Value", &**value)];
                p.head(NodeKind::Cond, None);
                p.body(Delims::RECORD, &entries, depth, false);
            }
            (CondForm::Raw(value), false) => {
                p.head(NodeKind::Cond, None);
                p.body(Delims::RECORD, &[Entry::field("Value", &**value)], depth, false);
            }
        }
    }
}

impl Render for ListOpAST {
    fn write(&self, p: &mut Printer<'_>, depth: usize, inline: bool) {
        let mut entries = vec![Entry::field("List", self.list())];

        match self.operands() {
            ListOperands::Bare => {}
            ListOperands::Value(value) => {
                let label = if self.kind() == ListOpKind::Access { "Key" } else { "Value" };
                entries.push(Entry::field(label, &**value));
            }
            ListOperands::Name(name) => entries.push(Entry::field("Name", name)),
            ListOperands::Index(index) => entries.push(Entry::field("Index", index)),
            ListOperands::IndexValue(index, value) => {
                entries.push(Entry::field("Index", index));
                entries.push(Entry::field("Value", &**value));
            }
            ListOperands::Indices(indices) => entries.push(Entry::field_seq(
                "Indices",
                Delims::SEQUENCE,
                indices.iter().map(Entry::child).collect(),
            )),
            ListOperands::Values(values) => entries.push(Entry::field_seq(
                "Values",
                Delims::SEQUENCE,
                values.iter().map(Entry::child).collect(),
            )),
        }

        p.head(NodeKind::ListOp, Some(self.kind().name()));
        p.body(Delims::RECORD, &entries, depth, inline);
    }
}

impl Render for CallAST {
    fn write(&self, p: &mut Printer<'_>, depth: usize, inline: bool) {
        let entries = [
            Entry::field("Func", self.callee()),
            Entry::field_seq("Args", Delims::TUPLE, self.args().iter().map(Entry::child).collect()),
        ];

        p.head(NodeKind::Call, None);
        p.body(Delims::RECORD, &entries, depth, inline);
    }
}

impl Render for CheckEqAST {
    fn write(&self, p: &mut Printer<'_>, depth: usize, inline: bool) {
        p.head(NodeKind::CheckEq, None);
        p.body(Delims::GROUP, &[Entry::child(self.value())], depth, inline);
    }
}

impl Render for CheckIsInAST {
    fn write(&self, p: &mut Printer<'_>, depth: usize, inline: bool) {
        p.head(NodeKind::CheckIsIn, None);
        p.body(Delims::GROUP, &[Entry::child(self.iterable())], depth, inline);
    }
}

/* Statements */

impl Render for VarDefAST {
    fn write(&self, p: &mut Printer<'_>, depth: usize, inline: bool) {
        let entries: Vec<_> = self.vars().iter().map(Entry::child).collect();

        p.head(NodeKind::VarDef, None);
        p.body(Delims::GROUP, &entries, depth, inline);
    }
}

impl Render for TypedVarAST {
    fn write(&self, p: &mut Printer<'_>, depth: usize, inline: bool) {
        let entries = [Entry::field("Var", self.var()), Entry::field("Type", self.ty())];

        p.head(NodeKind::TypedVar, None);
        p.body(Delims::RECORD, &entries, depth, inline);
    }
}

// Shared by flexible and final bindings, which differ only in their kind.
fn write_bind(p: &mut Printer<'_>, kind: NodeKind, bind: &BindAST, depth: usize, inline: bool) {
    let entries = [Entry::field("Var", bind.var()), Entry::field("Val", bind.value())];

    p.head(kind, None);
    p.body(Delims::RECORD, &entries, depth, inline);
}

impl Render for ReadFileAST {
    fn write(&self, p: &mut Printer<'_>, depth: usize, inline: bool) {
        let entries = [Entry::field("Var", self.var()), Entry::field("Val", self.path())];

        p.head(NodeKind::ReadFile, None);
        p.body(Delims::RECORD, &entries, depth, inline);
    }
}

impl Render for WriteStdOutAST {
    fn write(&self, p: &mut Printer<'_>, depth: usize, inline: bool) {
        let entries: Vec<_> = self.outputs().iter().map(Entry::child).collect();

        p.head(NodeKind::WriteStdOut, None);
        p.body(Delims::GROUP, &entries, depth, inline);
    }
}

impl Render for ExtPackAST {
    fn write(&self, p: &mut Printer<'_>, depth: usize, inline: bool) {
        let entries: Vec<_> = self.paths().iter().map(|path| Entry::text(escaped(path))).collect();

        p.head(NodeKind::ExtPack, None);
        p.body(Delims::GROUP, &entries, depth, inline);
    }
}

impl Render for ResourceAST {
    fn write(&self, p: &mut Printer<'_>, depth: usize, inline: bool) {
        let entries: Vec<_> = self.resources().iter().map(Entry::child).collect();

        p.head(NodeKind::Resource, None);
        p.body(Delims::GROUP, &entries, depth, inline);
    }
}

/* Blocks */

impl Render for BlockAST {
    fn write(&self, p: &mut Printer<'_>, depth: usize, inline: bool) {
        let mut entries: Vec<_> = self.stmts().iter().map(Entry::child).collect();
        if let Some(ret) = self.ret() {
            entries.push(Entry::field("Ret", ret));
        }

        p.head(NodeKind::Block, None);
        p.body(Delims::RECORD, &entries, depth, inline);
    }
}

impl Render for MatchBlockAST {
    fn write(&self, p: &mut Printer<'_>, depth: usize, inline: bool) {
        let entries: Vec<_> = self
            .cases()
            .iter()
            .flat_map(|(pattern, branch)| [Entry::field("Case", pattern), Entry::field("Then", branch)])
            .collect();

        p.head(NodeKind::MatchBlock, None);
        p.body(Delims::RECORD, &entries, depth, inline);
    }
}

impl Render for CondFlowAST {
    fn write(&self, p: &mut Printer<'_>, depth: usize, inline: bool) {
        let mut entries = vec![Entry::field("Cond", self.cond())];
        if let Some(then_block) = self.then_block() {
            entries.push(Entry::field("Then", then_block));
        }
        if let Some(else_block) = self.else_block() {
            entries.push(Entry::field("Else", else_block));
        }

        p.head(NodeKind::CondFlow, None);
        p.body(Delims::RECORD, &entries, depth, inline);
    }
}

impl Render for ForwardAST {
    fn write(&self, p: &mut Printer<'_>, depth: usize, inline: bool) {
        let mut entries = Vec::new();
        if !self.vars().is_empty() {
            entries.push(vars_entry(self.vars()));
        }

        match self.body() {
            ForwardBody::Run(then) => entries.push(Entry::field("Run", &**then)),
            ForwardBody::IfEqual(check, then) => {
                entries.push(Entry::child(check));
                entries.push(Entry::field("Run", &**then));
            }
            ForwardBody::IfIsIn(check, then) => {
                entries.push(Entry::child(check));
                entries.push(Entry::field("Run", &**then));
            }
            ForwardBody::Cases(cases) => entries.push(Entry::field("Cases", cases)),
            ForwardBody::Cond(flow) => entries.push(Entry::child(flow)),
        }

        p.head(NodeKind::Forward, None);
        p.body(Delims::RECORD, &entries, depth, inline);
    }
}

impl Render for ReturnAST {
    fn write(&self, p: &mut Printer<'_>, depth: usize, inline: bool) {
        p.head(NodeKind::Return, None);
        p.body(Delims::GROUP, &[Entry::child(self.value())], depth, inline);
    }
}

impl Render for FuncAST {
    fn write(&self, p: &mut Printer<'_>, depth: usize, inline: bool) {
        let entries = [
            Entry::field("Name", self.name()),
            Entry::field_seq("Params", Delims::TUPLE, self.params().iter().map(Entry::child).collect()),
            Entry::field("Body", self.body()),
        ];

        p.head(NodeKind::Func, Some(if self.is_final() { "Final" } else { "Flexible" }));
        p.body(Delims::RECORD, &entries, depth, inline);
    }
}

/* Layers and Loops */

impl Render for ICBSLayerAST {
    fn write(&self, p: &mut Printer<'_>, depth: usize, inline: bool) {
        let mut entries =
            vec![Entry::field_seq("Vars", Delims::TUPLE, self.vars().iter().map(Entry::child).collect())];
        if let Some(filter) = self.filter() {
            entries.push(Entry::field("Filter", filter));
        }
        if let Some(matcher) = self.matcher() {
            entries.push(Entry::field("Match", matcher));
        }

        p.head(NodeKind::ICBSLayer, None);
        p.body(Delims::RECORD, &entries, depth, inline);
    }
}

impl Render for InfLoopAST {
    fn write(&self, p: &mut Printer<'_>, depth: usize, inline: bool) {
        let mut entries = Vec::new();
        if let (Some(start), Some(increment)) = (self.start(), self.increment()) {
            entries.push(Entry::field("Start", start));
            entries.push(Entry::field("Increment", increment));
        }
        entries.push(Entry::field("Body", self.body()));

        p.head(NodeKind::InfLoop, None);
        p.body(Delims::RECORD, &entries, depth, inline);
    }
}

fn vars_entry(vars: &[IdAST]) -> Entry<'_> {
    Entry::field_seq("Vars", Delims::TUPLE, vars.iter().map(Entry::child).collect())
}

impl Render for IterInfLoopAST {
    fn write(&self, p: &mut Printer<'_>, depth: usize, inline: bool) {
        let entries = [vars_entry(self.vars()), Entry::field("Body", self.body())];

        p.head(NodeKind::IterInfLoop, None);
        p.body(Delims::RECORD, &entries, depth, inline);
    }
}

impl Render for IterListAST {
    fn write(&self, p: &mut Printer<'_>, depth: usize, inline: bool) {
        let entries = [Entry::field("List", self.list()), vars_entry(self.vars()), Entry::field("Body", self.body())];

        p.head(NodeKind::IterList, None);
        p.body(Delims::RECORD, &entries, depth, inline);
    }
}

impl Render for IterRangeAST {
    fn write(&self, p: &mut Printer<'_>, depth: usize, inline: bool) {
        let entries = [Entry::field("Range", self.range()), vars_entry(self.vars()), Entry::field("Body", self.body())];

        p.head(NodeKind::IterRange, None);
        p.body(Delims::RECORD, &entries, depth, inline);
    }
}
