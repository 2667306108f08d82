use std::fmt;

use common::ApplicationRecord;

use crate::outcome::SubmissionOutcome;
use crate::page::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Failure,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultLine {
    Field { label: &'static str, value: String },
    Note(String),
}

impl ResultLine {
    fn field(label: &'static str, value: impl Into<String>) -> Self {
        Self::Field {
            label,
            value: value.into(),
        }
    }
}

impl fmt::Display for ResultLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field { label, value } => write!(f, "{label}: {value}"),
            Self::Note(text) => f.write_str(text),
        }
    }
}

/// What the result page shows for an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub tone: Tone,
    pub title: String,
    pub lines: Vec<ResultLine>,
    /// Where the back action leads.
    pub back: Page,
}

impl ResultView {
    /// Value of the first field with `label`.
    pub fn field(&self, label: &str) -> Option<&str> {
        self.lines.iter().find_map(|line| match line {
            ResultLine::Field { label: l, value } if *l == label => Some(value.as_str()),
            _ => None,
        })
    }
}

impl fmt::Display for ResultView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Optional record fields, in display order, skipping the ones not present.
///
/// An empty member list still renders; empty strings do not.
pub(crate) fn detail_lines(record: &ApplicationRecord) -> Vec<ResultLine> {
    let mut lines = Vec::new();
    if let Some(email) = non_empty(&record.email) {
        lines.push(ResultLine::field("Email", email));
    }
    if let Some(members) = &record.members {
        lines.push(ResultLine::field("Members", members.join(", ")));
    }
    if let Some(details) = non_empty(&record.competition_details) {
        lines.push(ResultLine::field("Competition details", details));
    }
    if let Some(answers) = non_empty(&record.answers) {
        lines.push(ResultLine::field("Answers", answers));
    }
    lines
}

/// Render an outcome. `status` is shown exactly as the server sent it.
pub fn present(outcome: &SubmissionOutcome) -> ResultView {
    match outcome {
        SubmissionOutcome::Success { id } => ResultView {
            tone: Tone::Success,
            title: "Application submitted!".into(),
            lines: vec![
                ResultLine::field("Your application ID", id.clone()),
                ResultLine::Note("Keep this ID to check your application status later.".into()),
            ],
            back: Page::Home,
        },
        SubmissionOutcome::Error => ResultView {
            tone: Tone::Failure,
            title: "Submission failed".into(),
            lines: vec![ResultLine::Note(
                "Please check your network connection or try again later.".into(),
            )],
            back: Page::Home,
        },
        SubmissionOutcome::QuerySuccess { data, .. } => {
            let mut lines = vec![
                ResultLine::field("Application ID", data.id.clone()),
                ResultLine::field("Status", data.status.clone()),
                ResultLine::Note(data.kind.label().into()),
            ];
            if let Some(name) = non_empty(&data.name) {
                lines.push(ResultLine::field("Applicant / team", name));
            }
            lines.extend(detail_lines(data));
            ResultView {
                tone: Tone::Info,
                title: "Application status".into(),
                lines,
                back: Page::Home,
            }
        }
        SubmissionOutcome::QueryError => ResultView {
            tone: Tone::Failure,
            title: "Query failed".into(),
            lines: vec![ResultLine::Note(
                "No application was found for that ID. Please check it and try again.".into(),
            )],
            back: Page::Home,
        },
    }
}
