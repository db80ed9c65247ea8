//! Display formatting for derived values.
//!
//! Values of magnitude one or more get two decimals; smaller values get three
//! significant digits. Rounding works on the exact decimal expansion of the
//! double, so ties round away from zero at any magnitude.

/// Enough fractional digits to hold the exact expansion of any finite `f64`.
const EXACT_FRACTION_DIGITS: usize = 1100;

/// Magnitude from which fixed notation gives way to exponent form.
const FIXED_NOTATION_LIMIT: f64 = 1e21;

/// `None` when the value cannot be shown (NaN or infinite).
pub fn format_value(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }

    let formatted = if value.abs() >= 1.0 {
        to_fixed(value, 2)
    } else {
        to_significant(value, 3)
    };
    Some(formatted)
}

/// `value` with exactly `decimals` digits after the point. Magnitudes of 1e21
/// and above use the shortest exponent form instead (`1e+21`).
pub fn to_fixed(value: f64, decimals: usize) -> String {
    let abs = value.abs();
    if abs >= FIXED_NOTATION_LIMIT {
        return with_sign(value, shortest_exponent(abs));
    }

    let decimals = decimals as isize;
    let rounded = Rounded::half_up(&ExactDigits::of(abs), decimals);
    with_sign(value, rounded.render_fixed(decimals))
}

/// `value` with `digits` significant digits, switching to exponent form for
/// very small or very large magnitudes.
pub fn to_significant(value: f64, digits: usize) -> String {
    let digits = digits.max(1);
    if value == 0.0 {
        return format!("{:.*}", digits - 1, 0.0);
    }

    let exact = ExactDigits::of(value.abs());
    let mut exponent = exact.exponent();
    let mut decimals = digits as isize - 1 - exponent;
    let mut rounded = Rounded::half_up(&exact, decimals);
    // Rounding may carry into the next power of ten (0.9996 -> 1.00).
    if rounded.significant().len() > digits {
        exponent += 1;
        decimals -= 1;
        rounded = Rounded::half_up(&exact, decimals);
    }

    let formatted = if exponent < -6 || exponent >= digits as isize {
        rounded.render_exponent(exponent)
    } else {
        rounded.render_fixed(decimals)
    };
    with_sign(value, formatted)
}

fn with_sign(value: f64, unsigned: String) -> String {
    if value < 0.0 {
        format!("-{unsigned}")
    } else {
        unsigned
    }
}

/// Shortest round-trip digits with an explicit exponent sign (`1.5e+21`).
fn shortest_exponent(abs: f64) -> String {
    let scientific = format!("{abs:e}");
    match scientific.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => scientific,
    }
}

/// Every decimal digit of a non-negative double, point position noted.
struct ExactDigits {
    digits: Vec<u8>,
    int_len: usize,
}

impl ExactDigits {
    fn of(abs: f64) -> Self {
        let expansion = format!("{:.*}", EXACT_FRACTION_DIGITS, abs);
        let (int, frac) = expansion
            .split_once('.')
            .unwrap_or((expansion.as_str(), ""));
        Self {
            digits: int.bytes().chain(frac.bytes()).collect(),
            int_len: int.len(),
        }
    }

    /// Power of ten of the leading non-zero digit; 0 for zero.
    fn exponent(&self) -> isize {
        self.digits
            .iter()
            .position(|digit| *digit != b'0')
            .map(|first| self.int_len as isize - 1 - first as isize)
            .unwrap_or(0)
    }
}

/// Digits kept after rounding at `10^-decimals`; `int_len` of them (padded
/// with zeros when fewer are kept) sit left of the point.
struct Rounded {
    digits: Vec<u8>,
    int_len: usize,
}

impl Rounded {
    fn half_up(exact: &ExactDigits, decimals: isize) -> Self {
        let keep = exact.int_len as isize + decimals;
        if keep < 0 {
            return Self {
                digits: Vec::new(),
                int_len: exact.int_len,
            };
        }

        let keep = (keep as usize).min(exact.digits.len());
        let mut digits = exact.digits[..keep].to_vec();
        let mut int_len = exact.int_len;
        let round_up = exact.digits.get(keep).is_some_and(|next| *next >= b'5');
        if round_up && !increment(&mut digits) {
            digits.insert(0, b'1');
            int_len += 1;
        }
        Self { digits, int_len }
    }

    /// Kept digits from the first non-zero one on.
    fn significant(&self) -> &[u8] {
        let first = self
            .digits
            .iter()
            .position(|digit| *digit != b'0')
            .unwrap_or(self.digits.len());
        &self.digits[first..]
    }

    fn render_fixed(&self, decimals: isize) -> String {
        let split = self.int_len.min(self.digits.len());
        let mut int: String = self.digits[..split].iter().map(|d| char::from(*d)).collect();
        int.extend(std::iter::repeat('0').take(self.int_len - split));
        let int = match int.trim_start_matches('0') {
            "" => "0",
            trimmed => trimmed,
        };

        if decimals <= 0 {
            return int.to_string();
        }
        let frac: String = self.digits[split..].iter().map(|d| char::from(*d)).collect();
        format!("{int}.{frac:0<width$}", width = decimals as usize)
    }

    fn render_exponent(&self, exponent: isize) -> String {
        let significant = self.significant();
        let Some((lead, rest)) = significant.split_first() else {
            return "0".to_string();
        };
        let mut mantissa = char::from(*lead).to_string();
        if !rest.is_empty() {
            mantissa.push('.');
            mantissa.extend(rest.iter().map(|d| char::from(*d)));
        }
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{}", exponent.abs())
    }
}

/// Adds one at the last digit. Returns `false` when the carry runs off the front.
fn increment(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return true;
        }
    }
    false
}
