//! Detection of anonymous AMD module definitions.

/// Token sequence that opens an anonymous definition: a `define` call
/// whose first argument is directly the dependency array, with no name
/// string in front of it.
const ANONYMOUS_DEFINE: &[u8] = b"define([";

/// Returns true iff the content contains a line that, after stripping
/// leading whitespace, begins case-insensitively with `define([`.
///
/// Scanning stops at the first matching line. A `define([` appearing
/// mid-line does not count; definitions start their own statement.
/// Safe to call on any text, including non-JavaScript content, which
/// simply yields false.
pub fn is_anonymous_module(content: &str) -> bool {
    content.lines().any(opens_anonymous_definition)
}

fn opens_anonymous_definition(line: &str) -> bool {
    let line = line.trim_start().as_bytes();
    line.len() >= ANONYMOUS_DEFINE.len()
        && line[..ANONYMOUS_DEFINE.len()].eq_ignore_ascii_case(ANONYMOUS_DEFINE)
}
