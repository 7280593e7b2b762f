//! `Currency` — an ISO 4217 settlement currency.

use crate::currencies::ALL;
use vs_core::errors::{Error, Result};

/// Data describing a single currency.
///
/// Currencies are compared and hashed on all fields; two records with the
/// same ISO code from the built-in table are always identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency {
    /// Full name (e.g. "U.S. Dollar").
    pub name: &'static str,
    /// ISO 4217 alphabetic code (e.g. "USD").
    pub code: &'static str,
    /// ISO 4217 numeric code (e.g. 840).
    pub numeric_code: u16,
    /// Number of fractional units per whole unit (e.g. 100 for cents).
    pub fractions_per_unit: u16,
}

impl Currency {
    /// Look up a built-in currency by its ISO code (case-insensitive).
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] for unknown codes.
    pub fn from_code(code: &str) -> Result<Currency> {
        ALL.iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
            .copied()
            .ok_or_else(|| Error::InvalidArgument(format!("unknown currency code {code:?}")))
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Currency {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Currency {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let code = <String as serde::Deserialize>::deserialize(deserializer)?;
        Currency::from_code(&code).map_err(serde::de::Error::custom)
    }
}
