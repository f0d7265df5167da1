//! Argument reading
//!
//! Positions are byte offsets into the source and always sit on a char
//! boundary. Malformed input never fails: an unterminated group yields the
//! rest of the string.

/// Character at `pos`, if any.
pub(crate) fn char_at(s: &str, pos: usize) -> Option<char> {
    s.get(pos..).and_then(|rest| rest.chars().next())
}

/// Advance `pos` past any whitespace.
pub(crate) fn skip_spaces(s: &str, mut pos: usize) -> usize {
    while let Some(c) = char_at(s, pos) {
        if !c.is_whitespace() {
            break;
        }
        pos += c.len_utf8();
    }
    pos
}

/// Read a brace group or a single character starting at `pos`.
///
/// Returns the group interior (braces stripped) and the position just past
/// the group.
pub fn read_group(s: &str, pos: usize) -> (&str, usize) {
    let pos = skip_spaces(s, pos);
    match char_at(s, pos) {
        None => ("", s.len().max(pos)),
        Some('{') => {
            let start = pos + 1;
            let end = find_group_end(s, start);
            match end {
                Some(end) => (&s[start..end], end + 1),
                None => (&s[start..], s.len()),
            }
        }
        Some(c) => {
            let next = pos + c.len_utf8();
            (&s[pos..next], next)
        }
    }
}

/// Like [`read_group`], but a backslash command is read as one token
/// (`\alpha`, `\,`) instead of a lone backslash.
pub fn read_group_or_command(s: &str, pos: usize) -> (&str, usize) {
    let pos = skip_spaces(s, pos);
    if char_at(s, pos) == Some('\\') {
        let end = command_end(s, pos + 1);
        return (&s[pos..end], end);
    }
    read_group(s, pos)
}

/// End of the command name starting at `pos` (just after the backslash): a
/// run of ASCII letters, or one other character.
pub(crate) fn command_end(s: &str, pos: usize) -> usize {
    let letters = s[pos..]
        .char_indices()
        .find(|(_, c)| !c.is_ascii_alphabetic())
        .map(|(i, _)| pos + i)
        .unwrap_or(s.len());
    if letters > pos {
        return letters;
    }
    match char_at(s, pos) {
        Some(c) => pos + c.len_utf8(),
        None => pos,
    }
}

/// Position of the `}` closing a group whose interior starts at `start`.
/// Escaped braces (`\{`, `\}`) do not count.
fn find_group_end(s: &str, start: usize) -> Option<usize> {
    let mut depth = 1usize;
    let mut chars = s[start..].char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Read a `[...]` optional argument at `pos`, balancing nested brackets.
/// Returns `None` (and leaves the position alone) if there is no `[`.
pub(crate) fn read_optional(s: &str, pos: usize) -> Option<(&str, usize)> {
    let pos = skip_spaces(s, pos);
    if char_at(s, pos) != Some('[') {
        return None;
    }
    let start = pos + 1;
    let mut depth = 1usize;
    let mut braces = 0usize;
    for (i, c) in s[start..].char_indices() {
        match c {
            '{' => braces += 1,
            '}' => braces = braces.saturating_sub(1),
            '[' if braces == 0 => depth += 1,
            ']' if braces == 0 => {
                depth -= 1;
                if depth == 0 {
                    return Some((&s[start..start + i], start + i + 1));
                }
            }
            _ => {}
        }
    }
    Some((&s[start..], s.len()))
}
