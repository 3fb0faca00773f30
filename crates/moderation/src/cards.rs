use chrono::{DateTime, Utc};
use pagination::markup::escape_html;
use serde::Serialize;
use shared::domain::{Submission, SubmissionPosition};

const PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionCard {
    pub position: SubmissionPosition,
    pub title: String,
    pub type_label: String,
    pub author: String,
    pub submitted_at: Option<String>,
    pub preview: String,
}

impl SubmissionCard {
    pub fn new(position: SubmissionPosition, submission: &Submission) -> Self {
        Self {
            position,
            title: non_empty(submission.title.as_deref()).unwrap_or("No Title").to_string(),
            type_label: type_label(submission.kind.as_deref()),
            author: non_empty(submission.author.as_deref())
                .unwrap_or("Unknown Author")
                .to_string(),
            submitted_at: submission.timestamp.and_then(format_timestamp),
            preview: preview(submission.content.as_deref().unwrap_or_default()),
        }
    }

    pub fn to_markup(&self) -> String {
        let time = self
            .submitted_at
            .as_deref()
            .map(|t| format!(r#"<p class="submission-time">{}</p>"#, escape_html(t)))
            .unwrap_or_default();
        format!(
            concat!(
                r#"<div class="submission-card" data-index="{index}">"#,
                r#"<div class="submission-header"><h3>{title}</h3><span class="submission-type">[{kind}]</span></div>"#,
                r#"<p class="submission-author">By: {author}</p>"#,
                "{time}",
                r#"<div class="submission-preview">{preview}</div>"#,
                r#"<div class="submission-actions"><button class="approve">Approve</button><button class="reject">Reject</button></div>"#,
                "</div>"
            ),
            index = self.position.get(),
            title = escape_html(&self.title),
            kind = escape_html(&self.type_label),
            author = escape_html(&self.author),
            time = time,
            preview = escape_html(&self.preview),
        )
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// `private_sales` -> `PRIVATE SALES`.
pub fn type_label(kind: Option<&str>) -> String {
    match non_empty(kind) {
        Some(kind) => kind.replace('_', " ").to_uppercase(),
        None => "UNKNOWN".to_string(),
    }
}

/// First 100 characters, with an ellipsis only when something was cut.
pub fn preview(content: &str) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

pub fn format_timestamp(seconds: i64) -> Option<String> {
    if seconds == 0 {
        return None;
    }
    DateTime::<Utc>::from_timestamp(seconds, 0).map(|at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}
