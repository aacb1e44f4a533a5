//! List-mode input parsing

use hub_core::parse_number;

/// Result of splitting a free-form list of numbers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedValues {
    /// Finite numbers, in input order
    pub values: Vec<f64>,
    /// Tokens that were not finite numbers
    pub rejected: Vec<String>,
}

fn is_separator(c: char) -> bool {
    c == ',' || c == ';' || c.is_whitespace()
}

/// Split on commas, semicolons, newlines and other whitespace.
///
/// Tokens that do not parse as finite numbers are set aside, not fatal.
pub fn parse_values(input: &str) -> ParsedValues {
    let mut parsed = ParsedValues::default();
    for token in input.split(is_separator).filter(|t| !t.is_empty()) {
        match parse_number(token) {
            Ok(v) => parsed.values.push(v),
            Err(_) => parsed.rejected.push(token.to_string()),
        }
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_separated() {
        assert_eq!(parse_values("1, 2, 3").values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_mixed_separators() {
        let parsed = parse_values("1\n2\t3  4;5,,6\r\n");
        assert_eq!(parsed.values, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert!(parsed.rejected.is_empty());
    }

    #[test]
    fn test_drops_malformed_tokens() {
        let parsed = parse_values("1, abc, 3");
        assert_eq!(parsed.values, vec![1.0, 3.0]);
        assert_eq!(parsed.rejected, vec!["abc".to_string()]);
    }

    #[test]
    fn test_drops_non_finite_tokens() {
        let parsed = parse_values("NaN inf -infinity 4");
        assert_eq!(parsed.values, vec![4.0]);
        assert_eq!(parsed.rejected.len(), 3);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_values("   \n "), ParsedValues::default());
    }

    #[test]
    fn test_scientific_and_negative() {
        assert_eq!(parse_values("-1.5 2e3").values, vec![-1.5, 2000.0]);
    }
}
