//! Network construction errors.

use crate::domain::{LocationCode, LocationId};

/// Errors raised while building a [`RoadNetwork`](super::RoadNetwork).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A location with this id already exists
    #[error("duplicate location id {0}")]
    DuplicateId(LocationId),

    /// A location with this code already exists
    #[error("duplicate location code {0}")]
    DuplicateCode(LocationCode),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = NetworkError::DuplicateId(LocationId(7));
        assert_eq!(err.to_string(), "duplicate location id 7");

        let err = NetworkError::DuplicateCode(LocationCode::parse("PK1").unwrap());
        assert_eq!(err.to_string(), "duplicate location code PK1");
    }
}
