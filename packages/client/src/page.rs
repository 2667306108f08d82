use std::fmt;
use std::str::FromStr;

/// The page currently shown. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Home,
    QuizApply,
    CompApply,
    StatusQuery,
    /// Only reachable while a submission outcome is set.
    StatusResult,
    AdminLogin,
    /// Admin content is only rendered while a session is active.
    AdminDashboard,
}

impl Page {
    /// All pages, in navigation order.
    pub const ALL: &'static [Page] = &[
        Self::Home,
        Self::QuizApply,
        Self::CompApply,
        Self::StatusQuery,
        Self::StatusResult,
        Self::AdminLogin,
        Self::AdminDashboard,
    ];

    /// Pages listed in the navigation bar for everyone.
    pub const PUBLIC_NAV: &'static [Page] = &[Self::QuizApply, Self::CompApply, Self::StatusQuery];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::QuizApply => "quiz-apply",
            Self::CompApply => "comp-apply",
            Self::StatusQuery => "status-query",
            Self::StatusResult => "status-result",
            Self::AdminLogin => "admin-login",
            Self::AdminDashboard => "admin-dashboard",
        }
    }

    /// Label shown in navigation menus.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::QuizApply => "Quiz application",
            Self::CompApply => "Competition application",
            Self::StatusQuery => "Status query",
            Self::StatusResult => "Result",
            Self::AdminLogin => "Admin login",
            Self::AdminDashboard => "Admin dashboard",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing an unknown page tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePageError {
    invalid: String,
}

impl fmt::Display for ParsePageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid page '{}'. Valid values: {}",
            self.invalid,
            Page::ALL
                .iter()
                .map(|p| p.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl std::error::Error for ParsePageError {}

impl FromStr for Page {
    type Err = ParsePageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParsePageError {
                invalid: s.to_string(),
            })
    }
}
