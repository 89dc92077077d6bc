//! Workflow controllers for the dashboard's transactional flows.
//!
//! Each flow is an explicit state machine over locally validated inputs:
//! submission is reachable only from a state whose inputs already passed
//! validation, and a per-flow `in_flight` flag blocks duplicate submission
//! while a request is pending.

pub mod balance_withdraw;
pub mod invest;
pub mod pool_withdraw;

/// Strip everything but digits and the decimal point from raw amount input.
pub(crate) fn sanitize_amount(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// Parse a sanitized amount; `None` for empty or non-numeric input.
pub(crate) fn parse_amount(input: &str) -> Option<f64> {
    let value: f64 = input.parse().ok()?;
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_amount_strips_noise() {
        assert_eq!(sanitize_amount("$1,250.50 usd"), "1250.50");
        assert_eq!(sanitize_amount("abc"), "");
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert_eq!(parse_amount("100.5"), Some(100.5));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("1.2.3"), None);
    }
}
