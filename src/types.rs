/// Declared type of a `DIM` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeToken {
    Absent,
    Named(String),
}

impl TypeToken {
    pub fn from_capture(token: Option<&str>) -> Self {
        match token {
            Some(t) if !t.is_empty() => TypeToken::Named(t.to_string()),
            _ => TypeToken::Absent,
        }
    }

    /// C++ type for the token; unknown names fall back to `int`.
    pub fn cpp_type(&self) -> &'static str {
        let TypeToken::Named(name) = self else {
            return "int";
        };
        match name.to_lowercase().as_str() {
            "integer" | "long" => "int",
            "byte" => "uint8_t",
            "boolean" => "bool",
            "single" | "double" => "float",
            "string" => "String",
            _ => "int",
        }
    }
}
