//! Error types.

use thiserror::Error;

/// Failure reported by a catalog or store collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
    #[error("catalog record corrupt: {0}")]
    Corrupt(String),
}

/// Errors surfaced by timetable generation and lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimetableError {
    /// A required catalog collection is empty; nothing was generated.
    #[error(
        "Insufficient data for timetable generation: no {missing} for {department} semester {semester}"
    )]
    InsufficientData {
        department: String,
        semester: u32,
        missing: &'static str,
    },
    /// Direct-by-id lookup found nothing.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
    /// Malformed request.
    #[error("invalid request: {0}")]
    Invalid(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl TimetableError {
    pub(crate) fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Transport status for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InsufficientData { .. } | Self::Invalid(_) => 400,
            Self::NotFound { .. } => 404,
            Self::Catalog(_) => 502,
        }
    }

    /// Whether the caller sent something the generator cannot work with.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

pub type Result<T> = std::result::Result<T, TimetableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_message() {
        let err = TimetableError::InsufficientData {
            department: "Computer Science".into(),
            semester: 3,
            missing: "faculty",
        };
        assert_eq!(
            err.to_string(),
            "Insufficient data for timetable generation: no faculty for Computer Science semester 3"
        );
        assert_eq!(err.status_code(), 400);
        assert!(err.is_client_error());
    }

    #[test]
    fn test_not_found_status() {
        let err = TimetableError::not_found("Timetable", "abc");
        assert_eq!(err.to_string(), "Timetable not found: abc");
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_catalog_from() {
        let err: TimetableError = CatalogError::Unavailable("connection reset".into()).into();
        assert_eq!(err.to_string(), "catalog unavailable: connection reset");
        assert_eq!(err.status_code(), 502);
        assert!(!err.is_client_error());
    }
}
