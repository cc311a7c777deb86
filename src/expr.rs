use regex::Regex;
use std::sync::LazyLock;

static RE_AND: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bAND\b").unwrap());
static RE_OR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bOR\b").unwrap());
static RE_NOT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bNOT\b").unwrap());

static RE_DIGITAL_READ: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bDIGITALREAD\s*\(([^)]+)\)").unwrap());
static RE_ANALOG_READ: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bANALOGREAD\s*\(([^)]+)\)").unwrap());
static RE_SERIAL_AVAILABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bSERIALAVAILABLE\s*\(\)").unwrap());
static RE_SERIAL_READ: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bSERIALREAD\s*\(\)").unwrap());

pub fn rewrite_logical(expr: &str) -> String {
    let expr = RE_AND.replace_all(expr, "&&").to_string();
    let expr = RE_OR.replace_all(&expr, "||").to_string();
    RE_NOT.replace_all(&expr, "!").to_string()
}

pub fn rewrite_builtins(expr: &str) -> String {
    let expr = RE_DIGITAL_READ.replace_all(expr, "digitalRead(${1})").to_string();
    let expr = RE_ANALOG_READ.replace_all(&expr, "analogRead(${1})").to_string();
    let expr = RE_SERIAL_AVAILABLE
        .replace_all(&expr, "Serial.available()")
        .to_string();
    RE_SERIAL_READ.replace_all(&expr, "Serial.read()").to_string()
}

/// Rewrites a sub-expression into C++ spelling. Purely lexical: string
/// literals are not protected.
pub fn rewrite(expr: &str) -> String {
    let expr = rewrite_logical(expr.trim());
    let expr = expr.replace("<>", "!=");
    rewrite_builtins(&expr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_keywords() {
        assert_eq!(rewrite("A AND NOT B"), "A && ! B");
        assert_eq!(rewrite("a or b"), "a || b");
    }

    #[test]
    fn test_whole_word_only() {
        assert_eq!(rewrite("BRAND + ORDER + NOTE"), "BRAND + ORDER + NOTE");
    }

    #[test]
    fn test_not_equal() {
        assert_eq!(rewrite("x <> 3"), "x != 3");
    }

    #[test]
    fn test_read_builtins() {
        assert_eq!(rewrite("DigitalRead(BTN)"), "digitalRead(BTN)");
        assert_eq!(rewrite("analogread (A0) / 4"), "analogRead(A0) / 4");
    }

    #[test]
    fn test_query_builtins() {
        assert_eq!(rewrite("SerialAvailable() > 0"), "Serial.available() > 0");
        assert_eq!(rewrite("SERIALREAD()"), "Serial.read()");
    }

    #[test]
    fn test_trims_input() {
        assert_eq!(rewrite("  42  "), "42");
    }

    #[test]
    fn test_literals_are_not_protected() {
        assert_eq!(rewrite("\"Rock and Roll\""), "\"Rock && Roll\"");
    }

    #[test]
    fn test_order_not_before_not_equal() {
        assert_eq!(rewrite("NOT x <> y"), "! x != y");
    }
}
