//! Conversion of arbitrary strings into package identifiers.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Reserved words of the target language. These are not identifiers.
const KEYWORDS: [&str; 25] = [
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Letters are any of the `L*` general categories, plus `_`.
fn is_start(c: char) -> bool {
    c == '_'
        || matches!(
            get_general_category(c),
            GeneralCategory::UppercaseLetter
                | GeneralCategory::LowercaseLetter
                | GeneralCategory::TitlecaseLetter
                | GeneralCategory::ModifierLetter
                | GeneralCategory::OtherLetter
        )
}

/// Only decimal digits (`Nd`) may follow; letter numbers, other numbers and
/// combining marks may not.
fn is_continue(c: char) -> bool {
    is_start(c) || get_general_category(c) == GeneralCategory::DecimalNumber
}

/// Convert `raw` into a valid identifier.
///
/// Leading characters that cannot start an identifier are dropped, the rest
/// of the disallowed characters become `_`, and keywords get a `_` suffix.
/// The result is empty when `raw` has no character that can start an
/// identifier. `sanitize(sanitize(s)) == sanitize(s)` for every `s`.
pub fn sanitize(raw: &str) -> String {
    let mut ident: String = raw
        .trim_start_matches(|c: char| !is_start(c))
        .chars()
        .map(|c| if is_continue(c) { c } else { '_' })
        .collect();

    if KEYWORDS.contains(&ident.as_str()) {
        ident.push('_');
    }
    ident
}

/// Whether `s` is a non-empty identifier that is not a keyword.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if is_start(first) => {}
        _ => return false,
    }
    chars.all(is_continue) && !KEYWORDS.contains(&s)
}
