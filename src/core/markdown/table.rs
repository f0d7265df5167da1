//! Markdown table rows

use chatdoc_ir::TableRow;

/// A `|---|:--:|` style row: only pipes, dashes, colons and whitespace.
pub fn is_separator_row(line: &str) -> bool {
    line.contains('-')
        && line
            .chars()
            .all(|c| matches!(c, '|' | '-' | ':') || c.is_whitespace())
}

/// Split a table line into trimmed cells.
///
/// One outer pipe is removed from each end. Pipes inside `$...$` or escaped
/// as `\|` do not split cells.
pub fn parse_row(line: &str) -> TableRow {
    let trimmed = line.trim();
    let inner = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    if inner.trim().is_empty() {
        return TableRow::new(Vec::new());
    }

    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut in_math = false;
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'|') => {
                chars.next();
                if in_math {
                    cell.push_str("\\|");
                } else {
                    cell.push('|');
                }
            }
            '$' => {
                in_math = !in_math;
                cell.push(c);
            }
            '|' if !in_math => {
                cells.push(cell.trim().to_string());
                cell.clear();
            }
            _ => cell.push(c),
        }
    }
    cells.push(cell.trim().to_string());
    TableRow::new(cells)
}
