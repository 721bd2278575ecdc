use std::fmt;

use crate::element::Element;
use crate::formula::FormulaError;

/// Errors produced when assigning oxidation numbers to a compound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OxidationError {
    /// The formula text could not be parsed.
    Formula(FormulaError),
    /// No integer oxidation state for this element satisfies the charge
    /// balance.
    Unsolvable { element: Element },
    /// Every element is fixed by convention, yet the contributions do not
    /// sum to the declared net charge.
    ChargeImbalance { sum: i32, net_charge: i32 },
}

impl fmt::Display for OxidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Formula(e) => write!(f, "{}", e),
            Self::Unsolvable { element } => {
                write!(
                    f,
                    "no consistent integer oxidation state for {}",
                    element.symbol()
                )
            }
            Self::ChargeImbalance { sum, net_charge } => {
                write!(
                    f,
                    "fixed oxidation states sum to {} but net charge is {}",
                    sum, net_charge
                )
            }
        }
    }
}

impl std::error::Error for OxidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Formula(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FormulaError> for OxidationError {
    fn from(e: FormulaError) -> Self {
        Self::Formula(e)
    }
}
