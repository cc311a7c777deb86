use crate::ir::Context;

const INCLUDE: &str = "#include <Arduino.h>";
const INDENT: &str = "    ";

fn routine(name: &str, body: &[String]) -> String {
    let sep = format!("\n{}", INDENT);
    format!("void {}() {{\n{}{}\n}}", name, INDENT, body.join(&sep))
}

/// Assembles the buckets into the final sketch text.
pub fn render(ctx: &Context) -> String {
    let sections = [
        INCLUDE.to_string(),
        ctx.global.join("\n"),
        routine("setup", &ctx.init),
        routine("loop", &ctx.loop_),
    ];
    let mut out = sections.join("\n\n");
    out.push('\n');
    out
}
