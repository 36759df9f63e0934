use once_cell::sync::OnceCell;
use regex::Regex;

/// Club suffixes dropped from display names, checked in this order.
pub const TEAM_SUFFIXES: &[&str] = &[
    " FC",
    " AFC",
    " United",
    " City",
    " Town",
    " Athletic",
    " Atletico",
];

/// Turns a badge file name into the team label shown in the game.
///
/// The extension is dropped, then at most one trailing suffix from
/// [`TEAM_SUFFIXES`] (the first that matches), then whitespace runs are
/// collapsed and the result trimmed. A name made only of a suffix cleans
/// down to an empty string.
pub fn clean_team_name(filename: &str) -> String {
    let mut name = strip_extension(filename);

    if let Some(suffix) = TEAM_SUFFIXES.iter().find(|s| name.ends_with(*s)) {
        name = &name[..name.len() - suffix.len()];
    }

    static WHITESPACE: OnceCell<Regex> = OnceCell::new();
    let whitespace = WHITESPACE.get_or_init(|| Regex::new(r"\s+").unwrap());

    whitespace.replace_all(name, " ").trim().to_string()
}

/// Drops everything from the last dot on, unless only dots precede it
/// (`.png` is a name, not an extension).
fn strip_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(idx) if !filename[..idx].chars().all(|c| c == '.') => &filename[..idx],
        _ => filename,
    }
}
