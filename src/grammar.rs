//! L-System grammar: an axiom plus production rules, grown by rewriting.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A context-free rewriting grammar over a `char` alphabet.
///
/// Symbols without a registered production are terminals and replace
/// themselves on every pass. The grammar is immutable during expansion;
/// rules may reference any symbol, including ones with no production of
/// their own.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Grammar {
    axiom: String,
    rules: HashMap<char, String>,
}

impl Grammar {
    /// Creates a grammar with the given axiom and no rules.
    pub fn new(axiom: impl Into<String>) -> Self {
        Self {
            axiom: axiom.into(),
            rules: HashMap::new(),
        }
    }

    /// Adds a production rule (builder pattern).
    pub fn with_rule(mut self, symbol: char, replacement: impl Into<String>) -> Self {
        self.set_rule(symbol, replacement);
        self
    }

    /// Registers or replaces the production for `symbol`.
    ///
    /// An empty replacement is legal; the symbol then vanishes from the
    /// sequence on the next pass.
    pub fn set_rule(&mut self, symbol: char, replacement: impl Into<String>) {
        self.rules.insert(symbol, replacement.into());
    }

    /// The initial symbol sequence.
    pub fn axiom(&self) -> &str {
        &self.axiom
    }

    /// The replacement registered for `symbol`, if any.
    pub fn rule(&self, symbol: char) -> Option<&str> {
        self.rules.get(&symbol).map(String::as_str)
    }

    /// Applies one global rewrite pass to `sequence`.
    ///
    /// Every symbol is replaced by its production's right-hand side, or kept
    /// unchanged if it has none, and the replacements are concatenated in
    /// order.
    pub fn step(&self, sequence: &str) -> String {
        let mut next = String::with_capacity(sequence.len() * 2);
        for sym in sequence.chars() {
            match self.rules.get(&sym) {
                Some(replacement) => next.push_str(replacement),
                None => next.push(sym),
            }
        }
        next
    }

    /// Expands the axiom by `generations` rewrite passes.
    ///
    /// Generation 0 is the axiom itself. Sequence length can grow
    /// exponentially with the generation count; the caller bounds the range
    /// (see [`ScalePolicy`](crate::layout::ScalePolicy)).
    pub fn expand(&self, generations: usize) -> String {
        let mut sequence = self.axiom.clone();
        for generation in 1..=generations {
            sequence = self.step(&sequence);
            tracing::debug!(generation, len = sequence.len(), "expanded sequence");
        }
        sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_generations_returns_axiom() {
        let grammar = Grammar::new("F+F").with_rule('F', "FF");
        assert_eq!(grammar.expand(0), "F+F");
    }

    #[test]
    fn koch_rule_expands_once() {
        let grammar = Grammar::new("F").with_rule('F', "F+F--F+F");
        assert_eq!(grammar.expand(1), "F+F--F+F");
    }

    #[test]
    fn terminals_pass_through() {
        let grammar = Grammar::new("A");
        assert_eq!(grammar.expand(7), "A");
    }

    #[test]
    fn empty_replacement_erases_symbol() {
        let grammar = Grammar::new("AFA").with_rule('F', "");
        assert_eq!(grammar.expand(1), "AA");
        assert_eq!(grammar.expand(2), "AA");
    }

    #[test]
    fn mutually_recursive_rules_grow() {
        // Dragon curve: F -> F+G, G -> F-G.
        let grammar = Grammar::new("F").with_rule('F', "F+G").with_rule('G', "F-G");
        let g1 = grammar.expand(1);
        let g2 = grammar.expand(2);
        assert_eq!(g1, "F+G");
        assert_eq!(g2, "F+G+F-G");
        assert!(g2.len() > g1.len());
    }
}
