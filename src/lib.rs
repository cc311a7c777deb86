pub mod blocks;
pub mod config;
pub mod emit;
pub mod expr;
pub mod ir;
pub mod normalize;
pub mod project;
pub mod render;
pub mod section;
pub mod types;

use ir::{BlockMarker, Context};

/// Output of one translation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub cpp: String,
    /// Markers still open at end of input, innermost last.
    pub open_blocks: Vec<BlockMarker>,
    /// `END IF`/`NEXT` lines that found no matching opener.
    pub unmatched_closers: usize,
}

impl Translation {
    pub fn is_balanced(&self) -> bool {
        self.open_blocks.is_empty() && self.unmatched_closers == 0
    }
}

pub fn transpile(text: &str) -> Translation {
    let mut ctx = Context::new();

    for line in normalize::source_lines(text) {
        if !section::is_declaration(line) {
            if let Some(next) = section::route(line) {
                ctx.section = next;
                continue;
            }
        }
        let emission = emit::emit_line(line, &mut ctx.blocks);
        ctx.push(emission);
    }

    Translation {
        cpp: render::render(&ctx),
        open_blocks: ctx.blocks.markers().to_vec(),
        unmatched_closers: ctx.blocks.unmatched_closers(),
    }
}

/// Translates source text to an Arduino sketch. Never fails; unsupported
/// lines become `// TODO:` comments.
pub fn translate(text: &str) -> String {
    transpile(text).cpp
}
