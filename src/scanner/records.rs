// Structure records recovered by the scanner

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declaration keyword that opened a structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructureKind {
    Struct,
    Class,
    Union,
}

impl StructureKind {
    /// Map a source keyword back to its kind, if it is one.
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "struct" => Some(StructureKind::Struct),
            "class" => Some(StructureKind::Class),
            "union" => Some(StructureKind::Union),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            StructureKind::Struct => "struct",
            StructureKind::Class => "class",
            StructureKind::Union => "union",
        }
    }
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// A member variable declaration inside a structure body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub name: String,

    /// The raw type text as written, including any trailing `*`
    pub declared_type: String,

    /// True iff the declared type carries a pointer marker
    pub is_pointer: bool,

    /// 1-based source line of the declaration
    pub line: usize,
}

/// A method declaration or inline definition inside a structure body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    pub name: String,
    pub return_type: String,

    /// Raw parameter strings, comma-split and trimmed, in source order
    pub parameters: Vec<String>,

    /// 1-based source line of the declaration
    pub line: usize,
}

/// One recovered struct/class/union declaration
///
/// Records are created once per scan pass and never mutated afterwards;
/// a new scan replaces the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureRecord {
    pub name: String,
    pub kind: StructureKind,

    /// 1-based line of the opening declaration
    pub start_line: usize,

    /// 1-based line of the closing brace; >= `start_line`
    pub end_line: usize,

    pub members: Vec<Member>,
    pub methods: Vec<Method>,
}

impl StructureRecord {
    pub(crate) fn open(name: String, kind: StructureKind, line: usize) -> Self {
        StructureRecord {
            name,
            kind,
            start_line: line,
            end_line: line,
            members: Vec::new(),
            methods: Vec::new(),
        }
    }
}
