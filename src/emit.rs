use crate::blocks::BlockStack;
use crate::expr::rewrite;
use crate::ir::{BlockMarker, Emission, Target};
use crate::types::TypeToken;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_CONST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^CONST\s+(\w+)\s*=\s*(.+)").unwrap());
static RE_DIM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^DIM\s+(\w+)(?:\s+AS\s+(\w+))?").unwrap());
static RE_IF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^IF\s+(.+?)\s+THEN").unwrap());
static RE_ELSEIF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^ELSEIF\s+(.+?)\s+THEN").unwrap());
static RE_FOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^FOR \s*(\w+)\s*=\s*(.+)\s+TO\s+(.+)").unwrap());

static RE_PINMODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^PINMODE\s+(\w+),\s*(\w+)").unwrap());
static RE_DIGITALWRITE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^DIGITALWRITE\s+(\w+),\s*(\w+)").unwrap());
static RE_DELAY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^DELAY\s+(.+)").unwrap());
static RE_ANALOGWRITE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^ANALOGWRITE\s+(\w+),\s*(.+)").unwrap());
static RE_SERIALBEGIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^SERIALBEGIN\s+(.+)").unwrap());
static RE_SERIALPRINTLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^SERIALPRINTLINE\s+(.+)").unwrap());
static RE_SERIALPRINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^SERIALPRINT\s+(.+)").unwrap());

static RE_ASSIGN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\w+)\s*=\s*(.+)").unwrap());

/// How a rule recognizes its line. `Prefix` and `Exact` compare against the
/// upper-cased line.
pub enum Matcher {
    Prefix(&'static str),
    Exact(&'static [&'static str]),
    Pattern(&'static LazyLock<Regex>),
}

type Handler = fn(&str, Option<&Captures>, &mut BlockStack) -> Emission;

pub struct Rule {
    pub name: &'static str,
    pub matcher: Matcher,
    handler: Handler,
}

/// Statement rules in priority order; the first matching rule wins and
/// anything left over becomes a fallback comment.
pub static RULES: &[Rule] = &[
    Rule { name: "const", matcher: Matcher::Prefix("CONST "), handler: emit_const },
    Rule { name: "dim", matcher: Matcher::Prefix("DIM "), handler: emit_dim },
    Rule { name: "if", matcher: Matcher::Prefix("IF "), handler: emit_if },
    Rule { name: "elseif", matcher: Matcher::Prefix("ELSEIF "), handler: emit_elseif },
    Rule { name: "else", matcher: Matcher::Exact(&["ELSE"]), handler: emit_else },
    Rule { name: "end if", matcher: Matcher::Exact(&["END IF", "ENDIF"]), handler: emit_end_if },
    Rule { name: "for", matcher: Matcher::Pattern(&RE_FOR), handler: emit_for },
    Rule { name: "next", matcher: Matcher::Prefix("NEXT"), handler: emit_next },
    Rule { name: "pinmode", matcher: Matcher::Pattern(&RE_PINMODE), handler: emit_pin_mode },
    Rule { name: "digitalwrite", matcher: Matcher::Pattern(&RE_DIGITALWRITE), handler: emit_digital_write },
    Rule { name: "delay", matcher: Matcher::Pattern(&RE_DELAY), handler: emit_delay },
    Rule { name: "analogwrite", matcher: Matcher::Pattern(&RE_ANALOGWRITE), handler: emit_analog_write },
    Rule { name: "serialbegin", matcher: Matcher::Pattern(&RE_SERIALBEGIN), handler: emit_serial_begin },
    Rule { name: "serialprintline", matcher: Matcher::Pattern(&RE_SERIALPRINTLINE), handler: emit_serial_println },
    Rule { name: "serialprint", matcher: Matcher::Pattern(&RE_SERIALPRINT), handler: emit_serial_print },
    Rule { name: "assign", matcher: Matcher::Pattern(&RE_ASSIGN), handler: emit_assign },
];

impl Rule {
    /// Runs the rule against `line`, or returns `None` when it does not apply.
    pub fn apply(&self, line: &str, upper: &str, blocks: &mut BlockStack) -> Option<Emission> {
        match self.matcher {
            Matcher::Prefix(prefix) => {
                upper.starts_with(prefix).then(|| (self.handler)(line, None, blocks))
            }
            Matcher::Exact(words) => {
                words.contains(&upper).then(|| (self.handler)(line, None, blocks))
            }
            Matcher::Pattern(re) => {
                let caps = re.captures(line)?;
                Some((self.handler)(line, Some(&caps), blocks))
            }
        }
    }
}

/// Translates one classified line. Never fails.
pub fn emit_line(line: &str, blocks: &mut BlockStack) -> Emission {
    let upper = line.to_uppercase();
    RULES
        .iter()
        .find_map(|rule| rule.apply(line, &upper, blocks))
        .unwrap_or_else(|| current(format!("// TODO: {}", line)))
}

fn global(line: String) -> Emission {
    Emission {
        target: Target::Global,
        line,
    }
}

fn current(line: String) -> Emission {
    Emission {
        target: Target::Current,
        line,
    }
}

fn cap<'a>(caps: Option<&'a Captures>, i: usize) -> &'a str {
    caps.and_then(|c| c.get(i)).map_or("", |m| m.as_str())
}

fn emit_const(line: &str, _: Option<&Captures>, _: &mut BlockStack) -> Emission {
    match RE_CONST.captures(line) {
        Some(caps) => global(format!("const auto {} = {};", &caps[1], rewrite(&caps[2]))),
        None => global(format!("// TODO const: {}", line)),
    }
}

// Every type, String included, starts from a zero literal.
fn emit_dim(line: &str, _: Option<&Captures>, _: &mut BlockStack) -> Emission {
    match RE_DIM.captures(line) {
        Some(caps) => {
            let ty = TypeToken::from_capture(caps.get(2).map(|m| m.as_str()));
            global(format!("{} {} = 0;", ty.cpp_type(), &caps[1]))
        }
        None => global(format!("// TODO dim: {}", line)),
    }
}

fn condition(re: &Regex, line: &str) -> String {
    re.captures(line)
        .map_or_else(|| "/*cond*/".to_string(), |caps| rewrite(&caps[1]))
}

fn emit_if(line: &str, _: Option<&Captures>, blocks: &mut BlockStack) -> Emission {
    let cond = condition(&RE_IF, line);
    blocks.open(BlockMarker::If);
    current(format!("if ({}) {{", cond))
}

fn emit_elseif(line: &str, _: Option<&Captures>, _: &mut BlockStack) -> Emission {
    current(format!("}} else if ({}) {{", condition(&RE_ELSEIF, line)))
}

fn emit_else(_: &str, _: Option<&Captures>, _: &mut BlockStack) -> Emission {
    current("} else {".to_string())
}

fn emit_end_if(_: &str, _: Option<&Captures>, blocks: &mut BlockStack) -> Emission {
    blocks.close(BlockMarker::If);
    current("}".to_string())
}

fn emit_for(_: &str, caps: Option<&Captures>, blocks: &mut BlockStack) -> Emission {
    let var = cap(caps, 1);
    let start = rewrite(cap(caps, 2));
    let end = rewrite(cap(caps, 3));
    blocks.open(BlockMarker::For);
    current(format!(
        "for (int {var} = {start}; {var} <= {end}; ++{var}) {{"
    ))
}

fn emit_next(_: &str, _: Option<&Captures>, blocks: &mut BlockStack) -> Emission {
    blocks.close(BlockMarker::For);
    current("}".to_string())
}

fn emit_pin_mode(_: &str, caps: Option<&Captures>, _: &mut BlockStack) -> Emission {
    current(format!("pinMode({}, {});", cap(caps, 1), cap(caps, 2)))
}

fn emit_digital_write(_: &str, caps: Option<&Captures>, _: &mut BlockStack) -> Emission {
    current(format!("digitalWrite({}, {});", cap(caps, 1), cap(caps, 2)))
}

fn emit_delay(_: &str, caps: Option<&Captures>, _: &mut BlockStack) -> Emission {
    current(format!("delay({});", rewrite(cap(caps, 1))))
}

fn emit_analog_write(_: &str, caps: Option<&Captures>, _: &mut BlockStack) -> Emission {
    current(format!(
        "analogWrite({}, {});",
        cap(caps, 1),
        rewrite(cap(caps, 2))
    ))
}

fn emit_serial_begin(_: &str, caps: Option<&Captures>, _: &mut BlockStack) -> Emission {
    current(format!("Serial.begin({});", rewrite(cap(caps, 1))))
}

fn emit_serial_println(_: &str, caps: Option<&Captures>, _: &mut BlockStack) -> Emission {
    current(format!("Serial.println({});", rewrite(cap(caps, 1))))
}

fn emit_serial_print(_: &str, caps: Option<&Captures>, _: &mut BlockStack) -> Emission {
    current(format!("Serial.print({});", rewrite(cap(caps, 1))))
}

fn emit_assign(_: &str, caps: Option<&Captures>, _: &mut BlockStack) -> Emission {
    current(format!("{} = {};", cap(caps, 1), rewrite(cap(caps, 2))))
}
