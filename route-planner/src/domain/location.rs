//! Location identifier and code types.

use std::fmt;

use serde::Serialize;

/// Error returned when parsing an invalid location identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid location id {value:?}: {reason}")]
pub struct InvalidLocationId {
    value: String,
    reason: &'static str,
}

/// Error returned when parsing an invalid location code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid location code: {reason}")]
pub struct InvalidLocationCode {
    reason: &'static str,
}

/// Stable numeric identifier of a location in the road network.
///
/// # Examples
///
/// ```
/// use route_planner::domain::LocationId;
///
/// let id = LocationId::parse(" 42 ").unwrap();
/// assert_eq!(id, LocationId(42));
/// assert!(LocationId::parse("-1").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LocationId(pub u32);

impl LocationId {
    /// Parse an identifier, ignoring surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidLocationId> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidLocationId {
                value: s.to_string(),
                reason: "must not be empty",
            });
        }

        trimmed
            .parse::<u32>()
            .map(LocationId)
            .map_err(|_| InvalidLocationId {
                value: s.to_string(),
                reason: "must be a non-negative integer",
            })
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for LocationId {
    fn from(id: u32) -> Self {
        LocationId(id)
    }
}

/// External alphanumeric code of a location (e.g. `"PK3"`).
///
/// Codes are non-empty and contain only ASCII letters, digits, `_` or `-`.
/// They are used for name-based lookup when loading roads.
///
/// ```
/// use route_planner::domain::LocationCode;
///
/// let code = LocationCode::parse("PK3").unwrap();
/// assert_eq!(code.as_str(), "PK3");
/// assert!(LocationCode::parse("").is_err());
/// assert!(LocationCode::parse("P K").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LocationCode(String);

impl LocationCode {
    /// Parse a location code, ignoring surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidLocationCode> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidLocationCode {
                reason: "must not be empty",
            });
        }

        if !trimmed
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
        {
            return Err(InvalidLocationCode {
                reason: "must contain only ASCII letters, digits, '_' or '-'",
            });
        }

        Ok(LocationCode(trimmed.to_string()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocationCode({})", self.0)
    }
}

impl fmt::Display for LocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any printed u32 parses back to the same identifier
        #[test]
        fn id_roundtrip(n in any::<u32>()) {
            let id = LocationId::parse(&n.to_string()).unwrap();
            prop_assert_eq!(id, LocationId(n));
        }

        /// Valid codes are kept verbatim
        #[test]
        fn code_roundtrip(s in "[A-Za-z0-9_-]{1,12}") {
            let code = LocationCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// Interior whitespace is always rejected
        #[test]
        fn interior_space_rejected(a in "[A-Z]{1,4}", b in "[A-Z]{1,4}") {
            let joined = format!("{a} {b}");
            prop_assert!(LocationCode::parse(&joined).is_err());
        }
    }
}
