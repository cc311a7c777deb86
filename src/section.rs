use crate::ir::Section;

const BOUNDARIES: &[(&str, Section)] = &[
    ("SUB SETUP", Section::Init),
    ("SUB LOOP", Section::Loop),
    ("END SUB", Section::None),
];

/// Returns the section a subroutine-boundary line switches to, or `None` when
/// the line is an ordinary statement.
pub fn route(line: &str) -> Option<Section> {
    let upper = line.to_uppercase();
    BOUNDARIES
        .iter()
        .find(|(prefix, _)| upper.starts_with(prefix))
        .map(|(_, section)| *section)
}

/// Declarations go to the global bucket wherever they appear.
pub fn is_declaration(line: &str) -> bool {
    let upper = line.to_uppercase();
    upper.starts_with("CONST ") || upper.starts_with("DIM ")
}
