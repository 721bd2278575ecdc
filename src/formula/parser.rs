use crate::element::Element;
use crate::formula::error::FormulaError;

/// One raw `element × count` contribution, before merging. The same
/// element may appear several times ("CH3COOH" yields four carbon-bearing
/// positions worth of raw terms).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawTerm {
    pub element: Element,
    pub count: u32,
}

/// Recursive descent over the character stream. Returns raw terms in
/// source order with all group multipliers already applied.
pub fn parse(input: &str) -> Result<Vec<RawTerm>, FormulaError> {
    let chars: Vec<char> = input.chars().collect();
    let mut i = 0;
    parse_sequence(&chars, &mut i, None)
}

/// Parses terms until end of input or, inside a group, the closing paren.
/// `open_pos` is the position of the enclosing '(' when recursing.
fn parse_sequence(
    chars: &[char],
    i: &mut usize,
    open_pos: Option<usize>,
) -> Result<Vec<RawTerm>, FormulaError> {
    let mut terms: Vec<RawTerm> = Vec::new();

    while *i < chars.len() {
        match chars[*i] {
            'A'..='Z' => {
                let (element, sym_end) = parse_symbol(chars, *i)?;
                *i = sym_end;
                let count = parse_count(chars, i)?.unwrap_or(1);
                terms.push(RawTerm { element, count });
            }
            '(' => {
                let group_pos = *i;
                *i += 1;
                let inner = parse_sequence(chars, i, Some(group_pos))?;
                if *i >= chars.len() || chars[*i] != ')' {
                    return Err(FormulaError::UnmatchedParen { pos: group_pos });
                }
                if inner.is_empty() {
                    return Err(FormulaError::EmptyGroup { pos: group_pos });
                }
                *i += 1; // skip ')'
                let count_pos = *i;
                let multiplier = parse_count(chars, i)?.unwrap_or(1);
                for term in inner {
                    let count = term
                        .count
                        .checked_mul(multiplier)
                        .ok_or(FormulaError::InvalidCount { pos: count_pos })?;
                    terms.push(RawTerm {
                        element: term.element,
                        count,
                    });
                }
            }
            ')' => {
                if open_pos.is_some() {
                    return Ok(terms);
                }
                return Err(FormulaError::UnmatchedParen { pos: *i });
            }
            ch => return Err(FormulaError::UnexpectedChar { pos: *i, ch }),
        }
    }

    if let Some(pos) = open_pos {
        return Err(FormulaError::UnmatchedParen { pos });
    }
    Ok(terms)
}

/// An element symbol is one uppercase letter greedily extended by one
/// lowercase letter. The matched token must name a known element; a
/// miss is an error, never a silent skip.
fn parse_symbol(chars: &[char], start: usize) -> Result<(Element, usize), FormulaError> {
    let two_letter = start + 1 < chars.len() && chars[start + 1].is_ascii_lowercase();
    let end = if two_letter { start + 2 } else { start + 1 };
    let symbol: String = chars[start..end].iter().collect();
    match Element::from_symbol(&symbol) {
        Some(e) => Ok((e, end)),
        None => Err(FormulaError::UnknownElement { pos: start, symbol }),
    }
}

/// Parses an optional decimal count. `Ok(None)` when the next character
/// is not a digit; an explicit count of zero is rejected.
fn parse_count(chars: &[char], i: &mut usize) -> Result<Option<u32>, FormulaError> {
    let start = *i;
    let mut val: u32 = 0;
    while *i < chars.len() && chars[*i].is_ascii_digit() {
        val = val
            .checked_mul(10)
            .and_then(|v| v.checked_add(chars[*i] as u32 - '0' as u32))
            .ok_or(FormulaError::InvalidCount { pos: start })?;
        *i += 1;
    }
    if *i == start {
        return Ok(None);
    }
    if val == 0 {
        return Err(FormulaError::InvalidCount { pos: start });
    }
    Ok(Some(val))
}
