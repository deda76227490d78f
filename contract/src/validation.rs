//! Argument validation shared by the handlers.
//!
//! Each handler validates arity first, then its individual arguments.
//! Validation failures are terminal and leave the store untouched — no
//! handler writes before its arguments have been fully validated, except
//! for `update`'s deliberate write-then-read sequence.

use keystone_primitives::{amount_from_str, Amount, ContractError, ContractResult};

/// Require exactly `expected` arguments.
pub fn expect_arity(args: &[String], expected: usize) -> ContractResult<()> {
    if args.len() != expected {
        return Err(ContractError::WrongArity {
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

/// Validate an entity key: keys are opaque but must be non-empty.
pub fn require_key(arg: &str) -> ContractResult<&str> {
    if arg.is_empty() {
        return Err(ContractError::EmptyKey);
    }
    Ok(arg)
}

/// Parse an argument that must be a base-10 integer.
pub fn parse_amount(arg: &str) -> ContractResult<Amount> {
    amount_from_str(arg).ok_or(ContractError::ExpectingInteger)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expect_arity() {
        let args = vec!["A".to_string(), "123".to_string()];
        assert!(expect_arity(&args, 2).is_ok());

        let err = expect_arity(&args, 1).unwrap_err();
        assert!(matches!(
            err,
            ContractError::WrongArity {
                expected: 1,
                got: 2
            }
        ));
    }

    #[test]
    fn test_expect_arity_empty() {
        let args: Vec<String> = Vec::new();
        assert!(expect_arity(&args, 0).is_ok());
        assert!(expect_arity(&args, 1).is_err());
    }

    #[test]
    fn test_require_key() {
        assert_eq!(require_key("A").unwrap(), "A");
        assert!(matches!(require_key("").unwrap_err(), ContractError::EmptyKey));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("123").unwrap(), 123);
        assert_eq!(parse_amount("-45").unwrap(), -45);
        assert!(matches!(
            parse_amount("12a").unwrap_err(),
            ContractError::ExpectingInteger
        ));
        assert!(matches!(
            parse_amount("").unwrap_err(),
            ContractError::ExpectingInteger
        ));
    }
}
