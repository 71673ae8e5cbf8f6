use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Any letter means the notation carries unit labels
    static ref UNIT_LETTER: Regex = Regex::new(r"[A-Za-z]").unwrap();

    /// One signless term: optional numeric text, optional trailing unit label.
    /// Unit labels start with a letter and may continue with letters, digits or '_'.
    /// Examples: "3", "2.5i", "1 j", "0.25e_3"
    static ref TERM_PATTERN: Regex = Regex::new(
        r"^(?P<coefficient>[^A-Za-z]*?)\s*(?P<unit>[A-Za-z][A-Za-z0-9_]*)?$"
    ).unwrap();
}

/// True when `text` has no unit labels and should be read as a bare real.
pub fn is_real_notation(text: &str) -> bool {
    !UNIT_LETTER.is_match(text)
}

/// Split a signless term into its numeric text and unit label.
/// Returns `None` when the term does not have that shape at all.
pub fn split_term(term: &str) -> Option<(&str, &str)> {
    let captures = TERM_PATTERN.captures(term.trim())?;
    let coefficient = captures
        .name("coefficient")
        .map(|m| m.as_str().trim())
        .unwrap_or("");
    let unit = captures.name("unit").map(|m| m.as_str()).unwrap_or("");
    Some((coefficient, unit))
}
