//! Constant assignment scanning
//!
//! Recognizes lines of the form `<identifier> = "<value>"`, possibly
//! indented, with anything allowed after the closing quote. Every other
//! line is ignored.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

// Indented identifier, `=`, then a non-empty double-quoted value
static CONST_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*(?P<name>[A-Za-z_][A-Za-z0-9_]*)\s*=\s*"(?P<value>[^"]+)""#).unwrap()
});

/// Position and literal value of one constant assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantEntry {
    /// Zero-based index into the line buffer
    pub line: usize,
    /// The quoted value, without quotes
    pub value: String,
}

/// Constant name to its assignment
pub type ConstantTable = HashMap<String, ConstantEntry>;

/// Split file content into lines, each keeping its terminator
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(String::from).collect()
}

/// Concatenate a line buffer back into file content
pub fn join_lines(lines: &[String]) -> String {
    lines.concat()
}

/// Scan every line for constant assignments
///
/// When a name is assigned on several lines the last one wins.
pub fn parse_constants(lines: &[String]) -> ConstantTable {
    let mut constants = ConstantTable::new();

    for (index, line) in lines.iter().enumerate() {
        let Some(caps) = CONST_LINE_RE.captures(line) else {
            continue;
        };
        let name = &caps["name"];
        let entry = ConstantEntry {
            line: index,
            value: caps["value"].to_string(),
        };

        if let Some(previous) = constants.insert(name.to_string(), entry) {
            debug!(
                name,
                previous_line = previous.line + 1,
                line = index + 1,
                "constant assigned more than once, keeping the last assignment"
            );
        }
    }

    constants
}
