//! Constants file handling
//!
//! This module provides:
//! - Line buffer splitting that keeps every line terminator
//! - Narrow `name = "value"` assignment scanning (no host-language parsing)
//! - Tag patching that rewrites only the tag suffix of updated values
//! - Whole-buffer reads and writes of the constants file

mod parser;
mod writer;

pub use parser::{join_lines, parse_constants, split_lines, ConstantEntry, ConstantTable};
pub use writer::{apply_updates, read_lines, write_lines, ConstantsWriter, WriteResult};
