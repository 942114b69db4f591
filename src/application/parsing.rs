//! # Command Parsing
//!
//! Splits a chat line into a command name and its arguments.

/// Command name (without prefix) if the line itself starts with `prefix`.
/// Leading whitespace is not skipped: ` !cmd` is plain chat.
pub fn parse_command<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(prefix)?;
    let name = rest.split(char::is_whitespace).next()?;
    (!name.is_empty()).then_some(name)
}

/// Second whitespace-separated token, if any.
pub fn second_token(line: &str) -> Option<&str> {
    line.split_whitespace().nth(1)
}

/// Everything after the first space, trimmed. `None` when nothing is left.
pub fn rest_after_first_space(line: &str) -> Option<&str> {
    let (_, rest) = line.split_once(' ')?;
    let rest = rest.trim();
    (!rest.is_empty()).then_some(rest)
}

/// `bob` and `@bob` both become `@bob`.
pub fn as_mention(name: &str) -> String {
    if name.starts_with('@') {
        name.to_string()
    } else {
        format!("@{name}")
    }
}
