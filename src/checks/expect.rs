use std::fmt::Debug;

use crate::checks::CheckError;

/// Fail with `message` unless `cond` holds.
pub fn expect_that(cond: bool, message: impl Into<String>) -> Result<(), CheckError> {
    if cond {
        Ok(())
    } else {
        Err(CheckError::Assertion(message.into()))
    }
}

/// Fail unless `actual == expected`; the message carries both values.
pub fn expect_eq<T: PartialEq + Debug + ?Sized>(
    actual: &T,
    expected: &T,
    message: &str,
) -> Result<(), CheckError> {
    if actual == expected {
        Ok(())
    } else {
        Err(CheckError::Assertion(format!(
            "{}: expected {:?}, got {:?}",
            message, expected, actual
        )))
    }
}

/// Fail unless `needle` occurs in `haystack`.
pub fn expect_contains(haystack: &str, needle: &str, message: &str) -> Result<(), CheckError> {
    if haystack.contains(needle) {
        Ok(())
    } else {
        Err(CheckError::Assertion(format!(
            "{}: {:?} not found in {:?}",
            message, needle, haystack
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_values() {
        let err = expect_eq("0", "2", "wrong INFO count").unwrap_err();
        assert_eq!(err.to_string(), "assertion failed: wrong INFO count: expected \"2\", got \"0\"");

        let err = expect_contains("abc", "z", "missing").unwrap_err();
        assert!(err.to_string().contains("\"z\" not found"));

        assert!(expect_that(true, "unused").is_ok());
        assert!(matches!(expect_that(false, "nope"), Err(CheckError::Assertion(m)) if m == "nope"));
    }
}
