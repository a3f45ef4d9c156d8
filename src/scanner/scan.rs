//! Line-oriented structural scan
//!
//! The scanner walks the source one line at a time, tracking a single open
//! structure and its brace depth. It recovers declarations, members, and
//! methods without building a real grammar: templates, macros, and braces
//! inside strings or comments are all outside its accuracy envelope. That
//! is a documented limit of the approach, not a bug.

use tracing::debug;

use super::lines;
use super::records::{Member, Method, StructureRecord};

/// Scan raw source text into structure records.
///
/// Deterministic and total: malformed input produces fewer records, never
/// an error. A structure still open at end of input is dropped.
pub fn scan(text: &str) -> Vec<StructureRecord> {
    let mut records = Vec::new();
    let mut open: Option<StructureRecord> = None;
    let mut depth: i32 = 0;

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;

        // Opening line: only the text after the first `{` is body. A header
        // without a brace contributes no body text on its own line.
        let body = if open.is_some() {
            line
        } else if let Some((kind, name)) = lines::match_header(line) {
            open = Some(StructureRecord::open(name, kind, line_no));
            depth = 0;
            match line.find('{') {
                Some(at) => &line[at + 1..],
                None => "",
            }
        } else {
            continue;
        };

        if let Some(record) = open.as_mut() {
            // Member detection first; a line that yields members is never
            // also read as a method.
            let members = lines::match_members(body);
            if members.is_empty() {
                if let Some((return_type, name, parameters)) = lines::match_method(body) {
                    record.methods.push(Method {
                        name,
                        return_type,
                        parameters,
                        line: line_no,
                    });
                }
            } else {
                for (declared_type, name) in members {
                    record.members.push(Member {
                        name,
                        is_pointer: declared_type.contains('*'),
                        declared_type,
                        line: line_no,
                    });
                }
            }
        }

        depth += brace_delta(line);

        if depth <= 0 && line.contains('}') {
            if let Some(mut record) = open.take() {
                record.end_line = line_no;
                debug!(
                    name = %record.name,
                    members = record.members.len(),
                    methods = record.methods.len(),
                    "closed structure"
                );
                records.push(record);
            }
        }
    }

    debug!(count = records.len(), "structure scan complete");
    records
}

fn brace_delta(line: &str) -> i32 {
    let mut delta = 0;
    for c in line.chars() {
        match c {
            '{' => delta += 1,
            '}' => delta -= 1,
            _ => {}
        }
    }
    delta
}
