//! Code explorer node model.

use crate::filter::FilterableItem;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of ABL construct an outline node stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutlineKind {
    Root,
    Procedure,
    Function,
    Method,
    Constructor,
    Destructor,
    Property,
    Event,
    Include,
    Preprocessor,
    Label,
    Block,
    Table,
    Buffer,
    Variable,
    Parameter,
}

impl OutlineKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 16] = [
        Self::Root,
        Self::Procedure,
        Self::Function,
        Self::Method,
        Self::Constructor,
        Self::Destructor,
        Self::Property,
        Self::Event,
        Self::Include,
        Self::Preprocessor,
        Self::Label,
        Self::Block,
        Self::Table,
        Self::Buffer,
        Self::Variable,
        Self::Parameter,
    ];

    /// Lower-case name used in outline dumps.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Procedure => "procedure",
            Self::Function => "function",
            Self::Method => "method",
            Self::Constructor => "constructor",
            Self::Destructor => "destructor",
            Self::Property => "property",
            Self::Event => "event",
            Self::Include => "include",
            Self::Preprocessor => "preprocessor",
            Self::Label => "label",
            Self::Block => "block",
            Self::Table => "table",
            Self::Buffer => "buffer",
            Self::Variable => "variable",
            Self::Parameter => "parameter",
        }
    }

    /// Whether nodes of this kind can own child nodes.
    #[must_use]
    pub const fn is_container(self) -> bool {
        matches!(
            self,
            Self::Root
                | Self::Procedure
                | Self::Function
                | Self::Method
                | Self::Constructor
                | Self::Destructor
                | Self::Block
        )
    }
}

impl fmt::Display for OutlineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutlineKind {
    type Err = crate::AblStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| crate::AblStyleError::Config(format!("unknown outline kind: {s}")))
    }
}

/// One node of the code explorer tree.
///
/// Nodes are stored flat, in document order, with their tree depth in
/// `level`; `has_children` tells a renderer whether to draw an expander.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineItem {
    pub name: String,
    pub kind: OutlineKind,
    /// One-based source line of the declaration.
    pub line: u32,
    /// Depth in the tree; top-level nodes are `0`.
    pub level: u8,
    /// Declared outside the current file or otherwise unreachable.
    #[serde(default)]
    pub is_disabled: bool,
    #[serde(default)]
    pub has_children: bool,
}

impl OutlineItem {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: OutlineKind, line: u32, level: u8) -> Self {
        Self {
            name: name.into(),
            kind,
            line,
            level,
            is_disabled: false,
            has_children: false,
        }
    }

    /// Marks the node as disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.is_disabled = true;
        self
    }
}

impl FilterableItem for OutlineItem {
    fn display_text(&self) -> &str {
        &self.name
    }

    fn is_disabled(&self) -> bool {
        self.is_disabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_parses_back_from_its_name() {
        for kind in OutlineKind::ALL {
            assert_eq!(kind.as_str().parse::<OutlineKind>().ok(), Some(kind));
            assert_eq!(
                serde_json::to_string(&kind).ok(),
                Some(format!("\"{}\"", kind.as_str()))
            );
        }
    }

    #[test]
    fn kind_names_ignore_case_and_padding() {
        assert_eq!(" Method ".parse::<OutlineKind>().ok(), Some(OutlineKind::Method));
        assert!("gizmo".parse::<OutlineKind>().is_err());
    }
}
