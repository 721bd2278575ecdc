use crate::*;

// Sum of parsed counts for a flat formula (no groups) must equal the
// counts read straight off the digits, with bare symbols counting one.
#[test]
fn flat_formula_count_invariant() {
    for f in ["H2O", "KMnO4", "C6H12O6", "NaCl", "H2SO4", "Fe2O3"] {
        let parsed = parse_formula(f).unwrap();
        let chars: Vec<char> = f.chars().collect();
        let mut expected = 0u32;
        let mut i = 0;
        while i < chars.len() {
            assert!(chars[i].is_ascii_uppercase());
            i += 1;
            while i < chars.len() && chars[i].is_ascii_lowercase() {
                i += 1;
            }
            let digit_start = i;
            let mut n = 0u32;
            while i < chars.len() && chars[i].is_ascii_digit() {
                n = n * 10 + (chars[i] as u32 - '0' as u32);
                i += 1;
            }
            expected += if i > digit_start { n } else { 1 };
        }
        assert_eq!(parsed.total_atoms(), expected, "count mismatch for {}", f);
    }
}

#[test]
fn charge_balance_over_compound_corpus() {
    let compounds = [
        "H2O", "H2O2", "Fe2O3", "FeO", "KMnO4", "MnO2", "NaCl", "NaH",
        "CaH2", "NH3", "CH4", "CO", "CO2", "H2SO4", "HNO3", "NaOH",
        "(NH4)2SO4", "Ca(OH)2", "Fe(OH)3", "Al2(SO4)3", "K2Cr2O7",
        "Na2O2", "OF2", "FeCl3", "CuSO4", "AgNO3", "PbO2", "SnCl2",
    ];
    for f in compounds {
        let parsed = parse_formula(f).unwrap();
        let assignment = oxidation_numbers(f).unwrap();
        let sum: i32 = parsed
            .iter()
            .map(|t| t.count as i32 * assignment.get(t.element).unwrap() as i32)
            .sum();
        assert_eq!(sum, 0, "{} does not balance", f);
        assert_eq!(assignment.len(), parsed.len());
    }
}

#[test]
fn group_expansion_end_to_end() {
    let parsed = parse_formula("(NH4)2SO4").unwrap();
    let got: Vec<(&str, u32)> = parsed
        .iter()
        .map(|t| (t.element.symbol(), t.count))
        .collect();
    assert_eq!(got, vec![("N", 2), ("H", 8), ("S", 1), ("O", 4)]);
}

// The caller pattern: parse and solve the same formula independently,
// then zip terms with states by element for display.
#[test]
fn parse_and_solve_zip_by_element() {
    let formula = "Al2(SO4)3";
    let parsed = parse_formula(formula).unwrap();
    let assignment = oxidation_numbers(formula).unwrap();

    let rows: Vec<(&str, u32, i8)> = parsed
        .iter()
        .map(|t| {
            (
                t.element.symbol(),
                t.count,
                assignment.get(t.element).unwrap(),
            )
        })
        .collect();
    assert_eq!(rows, vec![("Al", 2, 3), ("S", 3, 6), ("O", 12, -2)]);
}

#[test]
fn assignments_are_per_compound() {
    // Sulfur is -2 in one compound and +6 in the other; nothing leaks
    // between calls.
    let sulfide = oxidation_numbers("H2S").unwrap();
    let sulfate = oxidation_numbers("H2SO4").unwrap();
    assert_eq!(sulfide.get(Element::S), Some(-2));
    assert_eq!(sulfate.get(Element::S), Some(6));
}

#[test]
fn errors_name_the_failure() {
    let err = oxidation_numbers("Fe(OH").unwrap_err();
    assert!(err.to_string().contains("unmatched parenthesis"));
    let err = parse_formula("Xx2O").unwrap_err();
    assert!(err.to_string().contains("unknown element 'Xx'"));
}
