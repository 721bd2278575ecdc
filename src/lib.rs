pub mod element;
pub mod formula;
pub mod oxidation;

pub use element::Element;
pub use formula::{parse_formula, FormulaError, FormulaTerm, ParsedFormula};
pub use oxidation::{
    assign_oxidations, oxidation_numbers, OxidationAssignment, OxidationError,
};

#[cfg(test)]
mod tests;
