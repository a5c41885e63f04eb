// Golden samples are picked up by `test_resources` at compile time, so the
// build must be redone whenever one is added or edited.
fn main() {
    build_deps::rerun_if_changed_paths("samples/**/*.txt").expect("samples glob should be valid");
    build_deps::rerun_if_changed_paths("samples/*").expect("samples glob should be valid");
}
