pub mod application;
pub mod auth;
pub mod record;

pub use application::{
    Application, ApplyEndpoint, CompApplication, QuizApplication, StatusQuery, ValidationError,
    parse_members,
};
pub use auth::{LoginRequest, LoginResponse};
pub use record::{ApplicationKind, ApplicationRecord, SubmitReceipt};
