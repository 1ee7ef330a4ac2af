//! Content of the `HEAD` file
//!
//! HEAD either names a commit directly (detached) or points at another ref
//! with a `ref: <path>` line.

use crate::artifacts::SYMREF_REGEX;
use crate::artifacts::ref_name::SymRefName;
use crate::errors::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadContent {
    /// Raw content, to be validated as a commit ID
    Detached(String),
    /// Symbolic reference to another ref
    SymRef { sym_ref_name: SymRefName },
}

impl HeadContent {
    pub fn parse(content: &str) -> Result<Self> {
        let content = content.trim();

        let symref_match = regex::Regex::new(SYMREF_REGEX)?.captures(content);
        if let Some(symref_match) = symref_match {
            Ok(HeadContent::SymRef {
                sym_ref_name: SymRefName::new(symref_match[1].trim().to_string()),
            })
        } else {
            Ok(HeadContent::Detached(content.to_string()))
        }
    }

    pub fn sym_ref_name(&self) -> Option<&SymRefName> {
        match self {
            HeadContent::SymRef { sym_ref_name } => Some(sym_ref_name),
            HeadContent::Detached(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_detached_head() {
        let head = HeadContent::parse("a2d1bdf\n").unwrap();

        assert_eq!(head, HeadContent::Detached("a2d1bdf".to_string()));
        assert_eq!(head.sym_ref_name(), None);
    }

    #[test]
    fn parses_symbolic_ref() {
        let head = HeadContent::parse("ref: refs/heads/main\n").unwrap();

        assert_eq!(
            head.sym_ref_name(),
            Some(&SymRefName::new("refs/heads/main".to_string()))
        );
    }

    #[test]
    fn keeps_garbage_as_detached_content() {
        let head = HeadContent::parse("garbage contents").unwrap();

        assert_eq!(head, HeadContent::Detached("garbage contents".to_string()));
    }

    #[test]
    fn ref_prefix_without_target_is_not_symbolic() {
        let head = HeadContent::parse("ref:").unwrap();

        assert_eq!(head, HeadContent::Detached("ref:".to_string()));
    }
}
