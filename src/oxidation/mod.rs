//! Oxidation-number assignment.
//!
//! [`oxidation_numbers`] parses a neutral formula and assigns an integer
//! oxidation state to each element so that the states, weighted by atom
//! counts, sum to zero. [`assign_oxidations`] is the lower-level entry
//! that takes an already-parsed formula and a net charge, which covers
//! polyatomic ions.
//!
//! Fixed-valence elements are assigned straight from the reference
//! table. Hydride and peroxide motifs override the hydrogen and oxygen
//! defaults. Whatever remains is solved from the linear charge balance;
//! with several unknowns a deterministic bounded search pins all but one
//! to their most common state and solves for the rest in turn.

pub mod error;

use std::cmp::Ordering;
use std::ops::RangeInclusive;

use crate::element::Element;
use crate::formula::{parse_formula, FormulaError, FormulaTerm, ParsedFormula};
pub use error::OxidationError;

// Single-atom oxidation states outside this range do not occur in real
// compounds; balance solutions beyond it are rejected rather than
// reported as chemistry.
const STATE_RANGE: RangeInclusive<i32> = -4..=8;

/// Oxidation numbers for one specific compound, in the parsed formula's
/// term order. Never shared between compounds: the same element can
/// carry a different state elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OxidationAssignment {
    entries: Vec<(Element, i8)>,
    textbook: bool,
}

impl OxidationAssignment {
    pub fn get(&self, element: Element) -> Option<i8> {
        self.entries
            .iter()
            .find(|(e, _)| *e == element)
            .map(|(_, v)| *v)
    }

    /// `(element, oxidation number)` pairs in formula term order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, i8)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether every assigned state is among the element's listed common
    /// states. False means the charge balance forced an unusual but
    /// integral state, which callers may want to flag.
    pub fn is_textbook(&self) -> bool {
        self.textbook
    }
}

/// Parse a neutral formula and assign oxidation numbers to its elements.
pub fn oxidation_numbers(formula: &str) -> Result<OxidationAssignment, OxidationError> {
    let parsed = parse_formula(formula)?;
    assign_oxidations(&parsed, 0)
}

/// Assign oxidation numbers to a parsed formula with the given net
/// charge. Every `Ok` result satisfies
/// `sum(count_i * state_i) == net_charge`.
pub fn assign_oxidations(
    parsed: &ParsedFormula,
    net_charge: i32,
) -> Result<OxidationAssignment, OxidationError> {
    let terms = parsed.terms();
    if terms.is_empty() {
        return Err(FormulaError::EmptyInput.into());
    }

    // Elemental form: all atoms of a single-element formula share the
    // charge evenly, zero for neutral Fe, O2, S8.
    if terms.len() == 1 {
        let t = terms[0];
        let x = solve_linear(net_charge, t.count, t.element)?;
        let textbook = x == 0 || t.element.oxidation_states().contains(&x);
        return Ok(OxidationAssignment {
            entries: vec![(t.element, x)],
            textbook,
        });
    }

    let mut states: Vec<Option<i8>> = terms
        .iter()
        .map(|t| t.element.fixed_oxidation())
        .collect();

    // Hydride motif: in a binary compound with a metal less
    // electronegative than hydrogen, H takes -1 (NaH, CaH2). Everywhere
    // else it is +1.
    if let Some(hi) = terms.iter().position(|t| t.element == Element::H) {
        if states[hi].is_none() {
            let hydride = terms.len() == 2 && {
                let partner = terms[1 - hi].element;
                partner.is_metal() && less_electronegative_than_hydrogen(partner)
            };
            states[hi] = Some(if hydride { -1 } else { 1 });
        }
    }

    // Oxygen defaults to -2 unless fluorine is present, in which case it
    // must float (OF2 resolves O to +2). The peroxide correction happens
    // at the balance check below.
    let oxygen_idx = terms.iter().position(|t| t.element == Element::O);
    let mut oxygen_defaulted = false;
    if let Some(oi) = oxygen_idx {
        let has_fluorine = terms.iter().any(|t| t.element == Element::F);
        if states[oi].is_none() && !has_fluorine {
            states[oi] = Some(-2);
            oxygen_defaulted = true;
        }
    }

    let floaters: Vec<usize> = (0..terms.len()).filter(|&i| states[i].is_none()).collect();

    match floaters.len() {
        0 => {
            let sum = contribution_sum(terms, &states);
            if sum == net_charge {
                return Ok(finish(terms, &states));
            }
            // Peroxide motif: every companion element is fixed and the
            // balance holds with O at -1 instead of -2 (H2O2, Na2O2).
            if let (true, Some(oi)) = (oxygen_defaulted, oxygen_idx) {
                states[oi] = Some(-1);
                if contribution_sum(terms, &states) == net_charge {
                    return Ok(finish(terms, &states));
                }
            }
            Err(OxidationError::ChargeImbalance { sum, net_charge })
        }
        1 => {
            let fi = floaters[0];
            // An element with no compound chemistry cannot float.
            if terms[fi].element.oxidation_states().is_empty() {
                return Err(OxidationError::Unsolvable {
                    element: terms[fi].element,
                });
            }
            let fixed_sum = contribution_sum_excluding(terms, &states, fi);
            let x = solve_linear(net_charge - fixed_sum, terms[fi].count, terms[fi].element)?;
            states[fi] = Some(x);
            Ok(finish(terms, &states))
        }
        _ => solve_underdetermined(terms, &states, &floaters, net_charge),
    }
}

/// Bounded deterministic search for formulas with several floating
/// elements. Candidates are ordered by narrowest common-state list, ties
/// broken by higher electronegativity, then atomic number. Each
/// candidate is solved for while the others sit at their most common
/// state; a strict pass requiring a listed solution runs before the
/// relaxed in-range pass.
fn solve_underdetermined(
    terms: &[FormulaTerm],
    states: &[Option<i8>],
    floaters: &[usize],
    net_charge: i32,
) -> Result<OxidationAssignment, OxidationError> {
    let mut order = floaters.to_vec();
    order.sort_by(|&a, &b| {
        let breadth = |i: usize| {
            let s = terms[i].element.oxidation_states();
            if s.is_empty() { usize::MAX } else { s.len() }
        };
        let en = |i: usize| terms[i].element.electronegativity().unwrap_or(0.0);
        breadth(a)
            .cmp(&breadth(b))
            .then_with(|| en(b).partial_cmp(&en(a)).unwrap_or(Ordering::Equal))
            .then_with(|| terms[a].element.atomic_num().cmp(&terms[b].element.atomic_num()))
    });

    for strict in [true, false] {
        for &fi in &order {
            // Elements with no known states can neither be solved for
            // nor pinned; any such floater makes the formula unsolvable.
            if terms[fi].element.oxidation_states().is_empty() {
                continue;
            }
            let pinnable = floaters
                .iter()
                .all(|&o| o == fi || !terms[o].element.oxidation_states().is_empty());
            if !pinnable {
                continue;
            }
            let mut trial = states.to_vec();
            for &o in floaters {
                if o != fi {
                    trial[o] = Some(terms[o].element.oxidation_states()[0]);
                }
            }
            let fixed_sum = contribution_sum_excluding(terms, &trial, fi);
            let x = match solve_linear(net_charge - fixed_sum, terms[fi].count, terms[fi].element) {
                Ok(x) => x,
                Err(_) => continue,
            };
            if strict && !terms[fi].element.oxidation_states().contains(&x) {
                continue;
            }
            trial[fi] = Some(x);
            return Ok(finish(terms, &trial));
        }
    }

    Err(OxidationError::Unsolvable {
        element: terms[order[0]].element,
    })
}

/// Solves `count * x = residual` for an integer state within the
/// plausible range.
fn solve_linear(residual: i32, count: u32, element: Element) -> Result<i8, OxidationError> {
    let count = count as i32;
    if residual % count != 0 {
        return Err(OxidationError::Unsolvable { element });
    }
    let x = residual / count;
    if !STATE_RANGE.contains(&x) {
        return Err(OxidationError::Unsolvable { element });
    }
    Ok(x as i8)
}

fn less_electronegative_than_hydrogen(e: Element) -> bool {
    match (e.electronegativity(), Element::H.electronegativity()) {
        (Some(en), Some(h)) => en < h,
        // Metals without tabulated values are strongly electropositive.
        _ => true,
    }
}

fn contribution_sum(terms: &[FormulaTerm], states: &[Option<i8>]) -> i32 {
    contribution_sum_excluding(terms, states, usize::MAX)
}

fn contribution_sum_excluding(
    terms: &[FormulaTerm],
    states: &[Option<i8>],
    skip: usize,
) -> i32 {
    terms
        .iter()
        .zip(states)
        .enumerate()
        .filter(|(i, _)| *i != skip)
        .map(|(_, (t, s))| t.count as i32 * s.unwrap_or(0) as i32)
        .sum()
}

fn finish(terms: &[FormulaTerm], states: &[Option<i8>]) -> OxidationAssignment {
    let entries: Vec<(Element, i8)> = terms
        .iter()
        .zip(states)
        .map(|(t, s)| (t.element, s.unwrap_or(0)))
        .collect();
    let textbook = entries
        .iter()
        .all(|(e, v)| e.oxidation_states().contains(v));
    OxidationAssignment { entries, textbook }
}
