//! Input holders for the four forms.
//!
//! Each form keeps its own field state, validates required fields on submit and
//! hands a normalized payload to a caller-supplied async handler. Forms never
//! track loading or error state; the controller's pipelines own that.

use std::fmt;
use std::future::Future;

use common::{
    Application, CompApplication, QuizApplication, StatusQuery, ValidationError, parse_members,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizForm {
    pub name: String,
    pub email: String,
    pub answers: String,
}

impl QuizForm {
    pub fn payload(&self) -> Result<QuizApplication, ValidationError> {
        let quiz = QuizApplication {
            name: self.name.clone(),
            email: self.email.clone(),
            answers: self.answers.clone(),
        };
        quiz.validate()?;
        Ok(quiz)
    }

    /// Validate, then pass the application to `on_apply`. The handler is not
    /// called when validation fails.
    pub async fn submit<F, Fut>(&self, on_apply: F) -> Result<(), ValidationError>
    where
        F: FnOnce(Application) -> Fut,
        Fut: Future<Output = ()>,
    {
        let payload = self.payload()?;
        on_apply(payload.into()).await;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompForm {
    pub team_name: String,
    /// Raw comma-separated member list as typed.
    pub members: String,
    pub competition_details: String,
}

impl CompForm {
    pub fn payload(&self) -> Result<CompApplication, ValidationError> {
        if self.members.is_empty() {
            return Err(ValidationError::MissingField("members"));
        }
        let comp = CompApplication {
            team_name: self.team_name.clone(),
            members: parse_members(&self.members),
            competition_details: self.competition_details.clone(),
        };
        comp.validate()?;
        Ok(comp)
    }

    pub async fn submit<F, Fut>(&self, on_apply: F) -> Result<(), ValidationError>
    where
        F: FnOnce(Application) -> Fut,
        Fut: Future<Output = ()>,
    {
        let payload = self.payload()?;
        on_apply(payload.into()).await;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusQueryForm {
    pub id: String,
}

impl StatusQueryForm {
    pub fn payload(&self) -> Result<StatusQuery, ValidationError> {
        let query = StatusQuery {
            id: self.id.clone(),
        };
        query.validate()?;
        Ok(query)
    }

    pub async fn submit<F, Fut>(&self, on_query: F) -> Result<(), ValidationError>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = ()>,
    {
        let query = self.payload()?;
        on_query(query.id).await;
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct AdminLoginForm {
    pub password: String,
}

impl fmt::Debug for AdminLoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminLoginForm")
            .field("password", &"<redacted>")
            .finish()
    }
}

impl AdminLoginForm {
    pub async fn submit<F, Fut>(&self, on_login: F) -> Result<(), ValidationError>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = ()>,
    {
        if self.password.is_empty() {
            return Err(ValidationError::MissingField("password"));
        }
        on_login(self.password.clone()).await;
        Ok(())
    }
}
