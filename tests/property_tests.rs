use proptest::prelude::*;
use vb2arduino::blocks::BlockStack;
use vb2arduino::emit::emit_line;
use vb2arduino::expr::rewrite;
use vb2arduino::{translate, transpile};

proptest! {
    /// Translation accepts any text and always produces the sketch framing.
    #[test]
    fn translate_never_panics(s in "\\PC*") {
        let out = translate(&s);
        let has_include = out.starts_with("#include <Arduino.h>\n\n");
        let has_setup = out.contains("\n\nvoid setup() {\n    ");
        let closes_loop = out.ends_with("\n}\n");
        prop_assert!(has_include, "missing include line");
        prop_assert!(has_setup, "missing setup framing");
        prop_assert!(closes_loop, "loop routine not closed");
    }

    /// Lines that start with an unknown word fall back to a verbatim comment
    /// and leave the block stack alone.
    #[test]
    fn unknown_statement_is_commented(word in "ZZ[A-Z]{1,8}", rest in "[ -<>-~]{0,20}") {
        let line = format!("{} {}", word, rest).trim().to_string();
        let mut blocks = BlockStack::new();
        let emission = emit_line(&line, &mut blocks);
        prop_assert_eq!(emission.line, format!("// TODO: {}", line));
        prop_assert!(blocks.is_empty());
        prop_assert_eq!(blocks.unmatched_closers(), 0);
    }

    /// Nested well-formed For/If pairs always leave the stack empty.
    #[test]
    fn nested_blocks_balance(kinds in proptest::collection::vec(any::<bool>(), 0..8)) {
        let mut src = String::from("Sub Loop()\n");
        for is_for in &kinds {
            src.push_str(if *is_for { "For i = 1 To 3\n" } else { "If x Then\n" });
        }
        for is_for in kinds.iter().rev() {
            src.push_str(if *is_for { "Next\n" } else { "End If\n" });
        }
        src.push_str("End Sub\n");
        let t = transpile(&src);
        prop_assert!(t.is_balanced());
        let opens = t.cpp.matches(") {").count();
        prop_assert_eq!(opens, kinds.len() + 2);
    }

    /// Identifiers without logical keywords or builtins pass through unchanged.
    #[test]
    fn plain_operands_untouched(a in "[xy][0-9]{0,3}", b in "[xy][0-9]{0,3}") {
        let expr = format!("{} + {}", a, b);
        prop_assert_eq!(rewrite(&expr), expr);
    }
}
