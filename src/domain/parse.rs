//! Raw text to number conversion for a single field.

/// Outcome of reading one input box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParsedValue {
    /// Blank or whitespace only.
    Absent,
    Number(f64),
    Invalid,
}

impl ParsedValue {
    pub fn is_filled(&self) -> bool {
        !matches!(self, ParsedValue::Absent)
    }

    pub fn number(&self) -> Option<f64> {
        match self {
            ParsedValue::Number(value) => Some(*value),
            _ => None,
        }
    }
}

pub fn parse_input(raw: &str) -> ParsedValue {
    let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    if trimmed.is_empty() {
        return ParsedValue::Absent;
    }

    match parse_number(trimmed) {
        Some(value) if value.is_finite() => ParsedValue::Number(value),
        _ => ParsedValue::Invalid,
    }
}

/// Decimal literals (with sign, fraction and exponent) plus unsigned
/// `0x`/`0o`/`0b` integers. Words such as `inf` or `nan` are rejected.
fn parse_number(text: &str) -> Option<f64> {
    if let Some(value) = parse_radix_literal(text) {
        return Some(value);
    }

    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let looks_decimal = unsigned
        .chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, '.' | 'e' | 'E' | '+' | '-'));
    if !looks_decimal || !unsigned.chars().any(|ch| ch.is_ascii_digit()) {
        return None;
    }

    text.parse::<f64>().ok()
}

fn parse_radix_literal(text: &str) -> Option<f64> {
    let prefix = text.get(..2)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() {
        return None;
    }

    digits.chars().try_fold(0.0_f64, |acc, ch| {
        ch.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    })
}
