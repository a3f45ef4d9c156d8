//! Per-line pattern matchers for the heuristic scanner
//!
//! These are deliberately permissive, single-line heuristics, not grammar
//! rules: a type token is any run of `[A-Za-z0-9_:]` with an optional
//! trailing `*`, and an identifier is the usual `[A-Za-z_][A-Za-z0-9_]*`.

use super::records::StructureKind;

fn is_type_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == ':'
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Match a declaration header: `struct|class|union` at the start of the
/// line (leading whitespace allowed), followed by whitespace and an
/// identifier.
pub(crate) fn match_header(line: &str) -> Option<(StructureKind, String)> {
    let trimmed = line.trim_start();
    let keyword_end = trimmed.find(|c: char| c.is_whitespace())?;
    let kind = StructureKind::from_keyword(&trimmed[..keyword_end])?;

    let rest = trimmed[keyword_end..].trim_start();
    let mut chars = rest.chars();
    let first = chars.next()?;
    if !is_ident_start(first) {
        return None;
    }
    let name: String = std::iter::once(first)
        .chain(chars.take_while(|c| is_ident_char(*c)))
        .collect();
    Some((kind, name))
}

/// Scan body text for member declarations: a type token, whitespace, an
/// identifier, then `;` or `=`. Text containing `(` never yields members
/// (that keeps function declarations out of this pass). A single line may
/// carry several members, as in a one-line structure body.
pub(crate) fn match_members(text: &str) -> Vec<(String, String)> {
    if text.contains('(') {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let mut out = Vec::new();
    let mut i = 0;

    while i < len {
        if !is_type_char(chars[i]) {
            i += 1;
            continue;
        }

        let ty_start = i;
        while i < len && is_type_char(chars[i]) {
            i += 1;
        }
        let mut ty_end = i;
        if i < len && chars[i] == '*' {
            i += 1;
            ty_end = i;
        }

        // whitespace between type and name is mandatory
        let mut j = i;
        while j < len && (chars[j] == ' ' || chars[j] == '\t') {
            j += 1;
        }
        if j == i || j >= len || !is_ident_start(chars[j]) {
            continue;
        }
        let name_start = j;
        while j < len && is_ident_char(chars[j]) {
            j += 1;
        }

        let mut k = j;
        while k < len && (chars[k] == ' ' || chars[k] == '\t') {
            k += 1;
        }
        if k < len && (chars[k] == ';' || chars[k] == '=') {
            out.push((
                chars[ty_start..ty_end].iter().collect(),
                chars[name_start..j].iter().collect(),
            ));
            i = k + 1;
        } else {
            // the candidate name may itself open a declaration
            i = name_start;
        }
    }

    out
}

/// Match a method declaration or inline definition: a type token,
/// whitespace, an identifier, `(`, parameter text, `)`. Lines ending in
/// `;` are excluded; inline bodies and plain declarations both match.
pub(crate) fn match_method(text: &str) -> Option<(String, String, Vec<String>)> {
    if text.trim_end().ends_with(';') {
        return None;
    }

    let open = text.find('(')?;
    let close = matching_paren(text, open)?;

    let head = text[..open].trim_end();

    // trailing identifier run is the method name
    let mut name_start = head.len();
    for (i, c) in head.char_indices().rev() {
        if is_ident_char(c) {
            name_start = i;
        } else {
            break;
        }
    }
    let name = &head[name_start..];
    if name.is_empty() || !name.chars().next().map(is_ident_start).unwrap_or(false) {
        return None;
    }

    let before = head[..name_start].trim_end();
    if before.is_empty() {
        return None;
    }

    // trailing type token of the remainder is the return type
    let mut ty_start = before.len();
    let mut rev = before.char_indices().rev().peekable();
    if let Some(&(i, '*')) = rev.peek() {
        ty_start = i;
        rev.next();
    }
    for (i, c) in rev {
        if is_type_char(c) {
            ty_start = i;
        } else {
            break;
        }
    }
    let return_type = &before[ty_start..];
    if !return_type.chars().any(is_type_char) {
        return None;
    }

    let params_text = &text[open + 1..close];
    let parameters = if params_text.trim().is_empty() {
        Vec::new()
    } else {
        params_text.split(',').map(|p| p.trim().to_string()).collect()
    };

    Some((return_type.to_string(), name.to_string(), parameters))
}

/// Index of the `)` that closes the paren opened at `open`, if any.
fn matching_paren(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0i32;
    for (i, c) in text.char_indices().skip_while(|&(i, _)| i < open) {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}
