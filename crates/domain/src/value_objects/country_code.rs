//! Country code value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// ISO 3166-1 alpha-2 country code, stored upper-case (e.g. "KE")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Parse a two-letter country code, case-insensitive
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCountryCode` unless the input is exactly
    /// two ASCII letters.
    pub fn parse(code: &str) -> Result<Self, DomainError> {
        let code = code.trim();
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::InvalidCountryCode(code.to_string()));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Get the upper-case code
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_uppercases() {
        let code = CountryCode::parse("ke").expect("valid");
        assert_eq!(code.as_str(), "KE");
        assert_eq!(code.to_string(), "KE");
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(CountryCode::parse(" de ").expect("valid").as_str(), "DE");
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(CountryCode::parse("KEN").is_err());
        assert!(CountryCode::parse("").is_err());
    }

    #[test]
    fn rejects_non_letters() {
        assert!(CountryCode::parse("K1").is_err());
    }

    #[test]
    fn deserializes_with_validation() {
        let code: CountryCode = serde_json::from_str("\"us\"").expect("valid");
        assert_eq!(code.as_str(), "US");
        assert!(serde_json::from_str::<CountryCode>("\"usa\"").is_err());
    }
}
