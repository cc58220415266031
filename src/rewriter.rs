//! Rewriting anonymous definitions into named ones.

/// Literal pattern replaced during the rewrite.
const ANONYMOUS_DEFINE: &str = "define([";

/// Outcome of a rewrite attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    /// The pattern was not present; content is byte-identical.
    Unchanged,
    /// New content with the module name injected.
    Changed(String),
}

/// Inject `module_name` into the first anonymous definition in
/// `content`, turning `define([` into `define("<name>", [`.
///
/// Only the first occurrence is rewritten; one module per file is
/// assumed. If the literal pattern is absent the content passes
/// through as [`Rewrite::Unchanged`] rather than an error — the
/// detector tolerates case and leading-whitespace variance that this
/// literal scan does not, and that drift is deliberately harmless.
pub fn name_module(content: &str, module_name: &str) -> Rewrite {
    let named = content.replacen(
        ANONYMOUS_DEFINE,
        &format!("define(\"{}\", [", module_name),
        1,
    );

    if named == content {
        Rewrite::Unchanged
    } else {
        Rewrite::Changed(named)
    }
}
