//! Source block accumulation and template assembly
//!
//! Blocks are kept per tag in insertion order. A template marks where each
//! tag expands with a line of the form `#pragma map: <tag>`.

use std::collections::HashMap;

use log::{trace, warn};

use super::program::{ShaderProgram, UniformLocation, UniformValue};

const PRAGMA_PREFIX: &str = "#pragma map:";

/// Accumulated shader source blocks, keyed by tag
///
/// Implements [`ShaderProgram`] for the build phase; the uniform path is a
/// no-op because nothing is linked yet.
#[derive(Debug, Default, Clone)]
pub struct ShaderSource {
    blocks: HashMap<String, Vec<String>>,
    tag_order: Vec<String>,
}

impl ShaderSource {
    /// Create an empty source set
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks added under `tag`, in order
    pub fn blocks(&self, tag: &str) -> &[String] {
        self.blocks.get(tag).map_or(&[], Vec::as_slice)
    }

    /// Concatenated text of every block under `tag`
    pub fn joined(&self, tag: &str) -> String {
        self.blocks(tag).concat()
    }

    /// Tags in the order they first received a block
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tag_order.iter().map(String::as_str)
    }

    /// Expand every `#pragma map: <tag>` line of `template`
    ///
    /// Unknown tags expand to nothing. Tags holding blocks that the template
    /// never references are reported, since that code would be silently lost.
    pub fn assemble(&self, template: &str) -> String {
        let mut output = String::with_capacity(template.len());
        let mut used: Vec<&str> = Vec::new();

        for line in template.lines() {
            match line.trim().strip_prefix(PRAGMA_PREFIX) {
                Some(tag) => {
                    let tag = tag.trim();
                    output.push_str(&self.joined(tag));
                    output.push('\n');
                    used.push(tag);
                }
                None => {
                    output.push_str(line);
                    output.push('\n');
                }
            }
        }

        for tag in self.tags().filter(|tag| !used.contains(tag)) {
            warn!("Shader template has no '{PRAGMA_PREFIX} {tag}' line; {} block(s) dropped", self.blocks(tag).len());
        }

        output
    }
}

impl ShaderProgram for ShaderSource {
    fn add_source_block(&mut self, tag: &str, block: &str, allow_duplicate: bool) -> bool {
        if !self.blocks.contains_key(tag) {
            self.tag_order.push(tag.to_string());
        }
        let blocks = self.blocks.entry(tag.to_string()).or_default();

        if !allow_duplicate && blocks.iter().any(|existing| existing == block) {
            return false;
        }

        blocks.push(block.to_string());
        true
    }

    fn set_uniform(&mut self, location: &UniformLocation, _value: UniformValue) {
        trace!("Ignoring uniform '{}' on an unlinked shader source", location.name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_blocks_are_skipped_unless_allowed() {
        let mut source = ShaderSource::new();
        assert!(source.add_source_block("lighting", "struct A {};\n", false));
        assert!(!source.add_source_block("lighting", "struct A {};\n", false));
        assert!(source.add_source_block("lighting", "struct A {};\n", true));
        assert_eq!(source.blocks("lighting").len(), 2);
    }

    #[test]
    fn test_assemble_expands_pragmas_in_place() {
        let mut source = ShaderSource::new();
        source.add_source_block("defines", "#define A\n", false);
        source.add_source_block("setup", "x = 1;\n", true);
        source.add_source_block("setup", "y = 2;\n", true);

        let template = "#pragma map: defines\nvoid main() {\n    #pragma map: setup\n}\n";
        let assembled = source.assemble(template);

        assert_eq!(assembled, "#define A\n\nvoid main() {\nx = 1;\ny = 2;\n\n}\n");
    }

    #[test]
    fn test_unknown_tags_expand_to_nothing() {
        let source = ShaderSource::new();
        assert_eq!(source.assemble("a\n#pragma map: nothing\nb"), "a\n\nb\n");
    }

    #[test]
    fn test_tags_keep_first_insertion_order() {
        let mut source = ShaderSource::new();
        source.add_source_block("b", "1", false);
        source.add_source_block("a", "2", false);
        source.add_source_block("b", "3", false);
        assert_eq!(source.tags().collect::<Vec<_>>(), vec!["b", "a"]);
    }
}
