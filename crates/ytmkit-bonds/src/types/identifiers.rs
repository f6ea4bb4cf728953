//! Bond identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{BondError, BondResult};

/// International Securities Identification Number.
///
/// Treated as an opaque identity: the value is trimmed and must be
/// non-empty, but its check digit and country prefix are not verified.
///
/// # Example
///
/// ```
/// use ytmkit_bonds::types::Isin;
///
/// let isin = Isin::new(" US0378331005 ").unwrap();
/// assert_eq!(isin.as_str(), "US0378331005");
/// assert!(Isin::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Isin(String);

impl Isin {
    /// Creates an ISIN from any non-blank string.
    ///
    /// # Errors
    ///
    /// Returns `BondError::MissingField` if the value is empty or whitespace.
    pub fn new(value: &str) -> BondResult<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(BondError::missing_field("isin"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Isin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Isin {
    type Error = BondError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Isin> for String {
    fn from(isin: Isin) -> Self {
        isin.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isin_is_opaque() {
        // Check digit is not verified
        let isin = Isin::new("XS0000000000").unwrap();
        assert_eq!(isin.to_string(), "XS0000000000");
    }

    #[test]
    fn test_isin_requires_value() {
        assert!(matches!(
            Isin::new(""),
            Err(BondError::MissingField { .. })
        ));
    }

    #[test]
    fn test_isin_serde() {
        let isin = Isin::new("US0378331005").unwrap();
        let json = serde_json::to_string(&isin).unwrap();
        assert_eq!(json, "\"US0378331005\"");

        let parsed: Isin = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, isin);
        assert!(serde_json::from_str::<Isin>("\"\"").is_err());
    }
}
