use crate::blocks::BlockStack;

/// Which routine currently receives emitted statements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    None,
    Init,
    Loop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockMarker {
    If,
    For,
}

/// Bucket an emitted line is appended to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Global,
    Current,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emission {
    pub target: Target,
    pub line: String,
}

/// State of a single translation call.
#[derive(Debug, Default)]
pub struct Context {
    pub global: Vec<String>,
    pub init: Vec<String>,
    pub loop_: Vec<String>,
    pub blocks: BlockStack,
    pub section: Section,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, emission: Emission) {
        let bucket = match (emission.target, self.section) {
            (Target::Global, _) | (Target::Current, Section::None) => &mut self.global,
            (Target::Current, Section::Init) => &mut self.init,
            (Target::Current, Section::Loop) => &mut self.loop_,
        };
        bucket.push(emission.line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current(line: &str) -> Emission {
        Emission {
            target: Target::Current,
            line: line.to_string(),
        }
    }

    #[test]
    fn test_current_follows_section() {
        let mut ctx = Context::new();
        ctx.push(current("a"));
        ctx.section = Section::Init;
        ctx.push(current("b"));
        ctx.section = Section::Loop;
        ctx.push(current("c"));
        assert_eq!(ctx.global, vec!["a"]);
        assert_eq!(ctx.init, vec!["b"]);
        assert_eq!(ctx.loop_, vec!["c"]);
    }

    #[test]
    fn test_global_ignores_section() {
        let mut ctx = Context::new();
        ctx.section = Section::Loop;
        ctx.push(Emission {
            target: Target::Global,
            line: "int X = 0;".to_string(),
        });
        assert_eq!(ctx.global, vec!["int X = 0;"]);
        assert!(ctx.loop_.is_empty());
    }
}
