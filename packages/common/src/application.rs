use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A required field was left empty at submit time.
///
/// Only the empty string is rejected. Whitespace-only input passes untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    MissingField(&'static str),
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

/// Split a comma-separated member list, trimming each entry.
///
/// Empty entries produced by doubled or trailing commas are kept in place.
pub fn parse_members(raw: &str) -> Vec<String> {
    raw.split(',').map(|m| m.trim().to_string()).collect()
}

/// Request body for `POST /apply-quiz`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizApplication {
    pub name: String,
    pub email: String,
    pub answers: String,
}

impl QuizApplication {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("answers", &self.answers)
    }
}

/// Request body for `POST /apply-comp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompApplication {
    /// Sent as `name` on the wire.
    #[serde(rename = "name")]
    pub team_name: String,
    pub members: Vec<String>,
    pub competition_details: String,
}

impl CompApplication {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("team name", &self.team_name)?;
        if self.members.is_empty() {
            return Err(ValidationError::MissingField("members"));
        }
        require("competition details", &self.competition_details)
    }
}

/// Identifier typed into the status-query form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusQuery {
    pub id: String,
}

impl StatusQuery {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("application id", &self.id)
    }
}

/// Submission endpoints accepted by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplyEndpoint {
    Quiz,
    Comp,
}

impl ApplyEndpoint {
    /// Path relative to the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Quiz => "/apply-quiz",
            Self::Comp => "/apply-comp",
        }
    }
}

impl fmt::Display for ApplyEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Either kind of application, serialized as its inner body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Application {
    Quiz(QuizApplication),
    Comp(CompApplication),
}

impl Application {
    pub fn endpoint(&self) -> ApplyEndpoint {
        match self {
            Self::Quiz(_) => ApplyEndpoint::Quiz,
            Self::Comp(_) => ApplyEndpoint::Comp,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Quiz(quiz) => quiz.validate(),
            Self::Comp(comp) => comp.validate(),
        }
    }
}

impl From<QuizApplication> for Application {
    fn from(quiz: QuizApplication) -> Self {
        Self::Quiz(quiz)
    }
}

impl From<CompApplication> for Application {
    fn from(comp: CompApplication) -> Self {
        Self::Comp(comp)
    }
}
