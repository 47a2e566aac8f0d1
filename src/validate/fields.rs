//! Field predicates
//!
//! Pure checks on single form values.

use std::sync::OnceLock;

use regex::Regex;

/// `<no-ws-no-@>@<no-ws-no-@>.<no-ws-no-@>`
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"))
}

/// True iff the trimmed name has at least one character
pub fn is_non_empty_name(s: &str) -> bool {
    !s.trim().is_empty()
}

/// True iff `s` has one "@", a "." after it, and no whitespace
pub fn is_valid_email(s: &str) -> bool {
    email_regex().is_match(s)
}

/// True iff `n` is a finite whole number greater than zero
pub fn is_positive_integer(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0 && n > 0.0
}

/// Why a raw age value was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeProblem {
    /// Empty or not numeric at all
    NotANumber,

    /// Numeric but fractional, zero or negative
    NotPositiveInteger,

    /// Above the configured cap
    AboveMax(u32),
}

/// Parse a raw age form value
///
/// Accepts whole numbers written as `30` or `30.0`; anything else is
/// reported with the most specific problem.
pub fn parse_age(raw: &str, max_age: Option<u32>) -> Result<u32, AgeProblem> {
    let raw = raw.trim();

    let age = match raw.parse::<i64>() {
        Ok(n) if n > 0 => n,
        Ok(_) => return Err(AgeProblem::NotPositiveInteger),
        Err(_) => {
            let n: f64 = raw.parse().map_err(|_| AgeProblem::NotANumber)?;
            if n.is_nan() {
                return Err(AgeProblem::NotANumber);
            }
            if !is_positive_integer(n) || n > i64::MAX as f64 {
                return Err(AgeProblem::NotPositiveInteger);
            }
            n as i64
        }
    };

    let age = match u32::try_from(age) {
        Ok(age) => age,
        Err(_) => return Err(AgeProblem::AboveMax(max_age.unwrap_or(u32::MAX))),
    };

    match max_age {
        Some(max) if age > max => Err(AgeProblem::AboveMax(max)),
        _ => Ok(age),
    }
}
