use common::ApplicationRecord;

/// Result of the last submit or query action. Drives the result page.
///
/// Replaced wholesale by the next action, never merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success { id: String },
    Error,
    QuerySuccess { id: String, data: ApplicationRecord },
    QueryError,
}

impl SubmissionOutcome {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Success { .. } => "success",
            Self::Error => "error",
            Self::QuerySuccess { .. } => "query-success",
            Self::QueryError => "query-error",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Error | Self::QueryError)
    }
}
