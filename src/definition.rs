//! Loading L-system definitions from their line-oriented text format.

use crate::grammar::Grammar;
use serde::{Deserialize, Serialize};
use std::num::ParseIntError;
use std::path::Path;
use thiserror::Error;

/// Error raised while loading a definition.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// A definition carries at least a name, a division count and an axiom.
    #[error("definition needs at least 3 non-blank lines, found {0}")]
    TooFewLines(usize),

    /// Line 2 did not parse as an integer.
    #[error("angle division count {raw:?} is not an integer")]
    InvalidDivisions {
        raw: String,
        #[source]
        source: ParseIntError,
    },

    /// A division count of zero leaves the angle increment undefined.
    #[error("angle division count must be non-zero")]
    ZeroDivisions,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A named L-system as read from a definition file.
///
/// The format is plain text, one field per line, blank lines ignored:
/// line 1 is the display name, line 2 the integer angle-division count `d`
/// (angle increment = 360/d degrees), line 3 the axiom, and every further
/// line a rule `<symbol><whitespace><replacement>` with whitespace inside
/// the replacement stripped.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SystemDefinition {
    /// Display name, free text.
    pub name: String,

    /// How many equal parts a full turn is divided into.
    pub angle_divisions: i32,

    /// Axiom and production rules.
    pub grammar: Grammar,
}

impl SystemDefinition {
    /// Reads and parses a definition file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DefinitionError> {
        let text = std::fs::read_to_string(&path)?;
        let definition = Self::parse(&text)?;
        tracing::info!(
            name = %definition.name,
            path = %path.as_ref().display(),
            "loaded L-system definition"
        );
        Ok(definition)
    }

    /// Parses a definition from already-loaded text.
    pub fn parse(text: &str) -> Result<Self, DefinitionError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() < 3 {
            return Err(DefinitionError::TooFewLines(lines.len()));
        }

        let name = lines[0].to_owned();
        let angle_divisions: i32 =
            lines[1]
                .parse()
                .map_err(|source| DefinitionError::InvalidDivisions {
                    raw: lines[1].to_owned(),
                    source,
                })?;
        if angle_divisions == 0 {
            return Err(DefinitionError::ZeroDivisions);
        }

        let mut grammar = Grammar::new(lines[2]);
        for line in &lines[3..] {
            let mut parts = line.splitn(2, char::is_whitespace);
            let (Some(lhs), Some(rhs)) = (parts.next(), parts.next()) else {
                continue;
            };
            let mut symbols = lhs.chars();
            // Only a single-symbol left-hand side can fire in a per-symbol
            // rewrite; anything else is skipped.
            if let (Some(symbol), None) = (symbols.next(), symbols.next()) {
                let replacement: String = rhs.chars().filter(|c| !c.is_whitespace()).collect();
                grammar.set_rule(symbol, replacement);
            }
        }

        Ok(Self {
            name,
            angle_divisions,
            grammar,
        })
    }

    /// Angle increment in degrees: 360 divided by the division count.
    pub fn angle_increment(&self) -> f32 {
        360.0 / self.angle_divisions as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KOCH: &str = "Koch curve\n6\nF\nF F + F - - F + F\n";

    #[test]
    fn parses_full_definition() {
        let definition = SystemDefinition::parse(KOCH).unwrap();
        assert_eq!(definition.name, "Koch curve");
        assert_eq!(definition.angle_divisions, 6);
        assert_eq!(definition.grammar.axiom(), "F");
        // Whitespace inside the replacement is stripped.
        assert_eq!(definition.grammar.rule('F'), Some("F+F--F+F"));
        assert_eq!(definition.angle_increment(), 60.0);
    }

    #[test]
    fn blank_lines_are_ignored() {
        let text = "\nPlant\n\n  \n4\nX\n\nX F[+X]F\nF FF\n\n";
        let definition = SystemDefinition::parse(text).unwrap();
        assert_eq!(definition.name, "Plant");
        assert_eq!(definition.grammar.rule('X'), Some("F[+X]F"));
        assert_eq!(definition.grammar.rule('F'), Some("FF"));
    }

    #[test]
    fn two_lines_is_too_few() {
        let err = SystemDefinition::parse("Name\n6\n").unwrap_err();
        assert!(matches!(err, DefinitionError::TooFewLines(2)));
    }

    #[test]
    fn non_integer_divisions_is_rejected() {
        let err = SystemDefinition::parse("Name\nsix\nF\n").unwrap_err();
        assert!(matches!(err, DefinitionError::InvalidDivisions { .. }));
    }

    #[test]
    fn zero_divisions_is_rejected() {
        let err = SystemDefinition::parse("Name\n0\nF\n").unwrap_err();
        assert!(matches!(err, DefinitionError::ZeroDivisions));
    }

    #[test]
    fn rules_without_replacement_are_skipped() {
        let definition = SystemDefinition::parse("Name\n4\nF\nF\nAB CD\nG GG\n").unwrap();
        assert_eq!(definition.grammar.rule('F'), None);
        assert_eq!(definition.grammar.rule('A'), None);
        assert_eq!(definition.grammar.rule('G'), Some("GG"));
    }

    #[test]
    fn negative_divisions_give_negative_increment() {
        let definition = SystemDefinition::parse("Name\n-4\nF\n").unwrap();
        assert_eq!(definition.angle_increment(), -90.0);
    }
}
