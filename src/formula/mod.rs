//! Chemical formula parsing.
//!
//! [`parse_formula`] turns formula text like `"Fe2O3"` or `"(NH4)2SO4"`
//! into a [`ParsedFormula`]: a merged, first-occurrence-ordered multiset
//! of `element × count` terms with all group multipliers expanded.

pub mod error;
mod parser;

use std::fmt;
use std::fmt::Write;

use crate::element::Element;
pub use error::FormulaError;

/// One merged term of a parsed formula. `count` is always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormulaTerm {
    pub element: Element,
    pub count: u32,
}

/// The atomic composition of one formula unit.
///
/// Holds at most one term per distinct element; terms appear in the
/// order their element first occurs in the source string, which is the
/// order callers display rows in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFormula {
    terms: Vec<FormulaTerm>,
}

impl ParsedFormula {
    pub fn terms(&self) -> &[FormulaTerm] {
        &self.terms
    }

    pub fn iter(&self) -> impl Iterator<Item = &FormulaTerm> {
        self.terms.iter()
    }

    /// Number of distinct elements.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Atom count for one element, `None` if the element does not occur.
    pub fn count_of(&self, element: Element) -> Option<u32> {
        self.terms
            .iter()
            .find(|t| t.element == element)
            .map(|t| t.count)
    }

    /// Total atoms in one formula unit.
    pub fn total_atoms(&self) -> u32 {
        self.terms.iter().map(|t| t.count).sum()
    }

    /// Average formula weight in daltons, from IUPAC standard atomic
    /// weights.
    pub fn weight(&self) -> f64 {
        self.terms
            .iter()
            .map(|t| t.element.atomic_weight() * t.count as f64)
            .sum()
    }
}

impl fmt::Display for ParsedFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        for t in &self.terms {
            out.push_str(t.element.symbol());
            if t.count > 1 {
                write!(out, "{}", t.count)?;
            }
        }
        f.write_str(&out)
    }
}

impl<'a> IntoIterator for &'a ParsedFormula {
    type Item = &'a FormulaTerm;
    type IntoIter = std::slice::Iter<'a, FormulaTerm>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

/// Parse a formula string into its merged term sequence.
///
/// The input is expected to be pre-trimmed; interior whitespace is an
/// error. Repeated occurrences of an element ("CH3COOH") are summed
/// into a single term at the position of the first occurrence.
pub fn parse_formula(s: &str) -> Result<ParsedFormula, FormulaError> {
    if s.is_empty() {
        return Err(FormulaError::EmptyInput);
    }
    let raw = parser::parse(s)?;

    // Distinct-element counts stay small, so a linear scan beats a map
    // and keeps first-occurrence order for free.
    let mut terms: Vec<FormulaTerm> = Vec::new();
    for t in raw {
        match terms.iter_mut().find(|m| m.element == t.element) {
            Some(merged) => merged.count += t.count,
            None => terms.push(FormulaTerm {
                element: t.element,
                count: t.count,
            }),
        }
    }
    Ok(ParsedFormula { terms })
}
