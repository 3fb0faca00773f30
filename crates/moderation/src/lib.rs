//! Moderation dashboard: pending submissions, approve/reject, publish.
//!
//! Submissions are addressed by their 1-based position in the list last
//! fetched from the host. Those positions go stale as soon as the host changes
//! its queue, so every action is followed by a refetch, successful or not.

use host_client::HostApi;
use pagination::markup::{DEFAULT_NUMBER, DEFAULT_TITLE, DEFAULT_VOLUME};
use serde::Serialize;
use shared::{
    domain::{HeaderDetails, ModerationAction, Submission, SubmissionPosition},
    protocol::{Decoded, HostMessage},
};
use tracing::{error, info, warn};

pub mod cards;

pub use cards::SubmissionCard;

pub const DEFAULT_PUBLISH_DATE: &str = "Unknown Date";

/// Operator-entered header fields for the next issue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PublishForm {
    pub date: String,
    pub volume: String,
    pub number: String,
}

impl PublishForm {
    pub fn header_details(&self) -> HeaderDetails {
        fn or(value: &str, default: &str) -> String {
            if value.is_empty() {
                default.to_string()
            } else {
                value.to_string()
            }
        }
        HeaderDetails {
            date: or(&self.date, DEFAULT_PUBLISH_DATE),
            volume: or(&self.volume, DEFAULT_VOLUME),
            number: or(&self.number, DEFAULT_NUMBER),
            title: DEFAULT_TITLE.to_string(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Something the operator should be told about, shown once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Published,
    ActionFailed(String),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::Published => "Newspaper published successfully!".to_string(),
            Notice::ActionFailed(reason) => format!("Error with submission action: {reason}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub visible: bool,
    pub cards: Vec<SubmissionCard>,
    pub form: PublishForm,
}

impl DashboardView {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn to_markup(&self) -> String {
        if self.cards.is_empty() {
            return r#"<p id="no-submissions-message">No pending submissions.</p>"#.to_string();
        }
        let cards: String = self.cards.iter().map(SubmissionCard::to_markup).collect();
        format!(r#"<div id="submissions-list">{cards}</div>"#)
    }
}

pub struct Dashboard<H: HostApi> {
    host: H,
    visible: bool,
    submissions: Vec<Submission>,
    pub form: PublishForm,
    notice: Option<Notice>,
}

impl<H: HostApi> Dashboard<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            visible: false,
            submissions: Vec::new(),
            form: PublishForm::default(),
            notice: None,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    /// Reacts to a host message; only `owner_ui` concerns the dashboard.
    pub async fn handle_message(&mut self, decoded: &Decoded) -> bool {
        match decoded {
            Decoded::Message(HostMessage::OwnerUi) => {
                self.open().await;
                true
            }
            Decoded::Rejected(err) => {
                warn!(error = %err, "ignoring malformed host message");
                false
            }
            _ => false,
        }
    }

    pub async fn open(&mut self) {
        self.visible = true;
        self.refresh().await;
    }

    /// Replaces the list with the host's current queue. A failed fetch shows
    /// an empty list.
    pub async fn refresh(&mut self) {
        match self.host.pending_submissions().await {
            Ok(submissions) => self.submissions = submissions,
            Err(err) => {
                error!(error = %err, "failed to fetch pending submissions");
                self.submissions.clear();
            }
        }
    }

    pub async fn moderate(&mut self, action: ModerationAction, position: SubmissionPosition) {
        match self.host.moderate(action, position).await {
            Ok(_) => info!(?action, position = position.get(), "submission moderated"),
            Err(err) => {
                warn!(?action, position = position.get(), error = %err, "moderation failed");
                self.notice = Some(Notice::ActionFailed(err.to_string()));
            }
        }
        self.refresh().await;
    }

    pub async fn approve(&mut self, position: SubmissionPosition) {
        self.moderate(ModerationAction::Approve, position).await;
    }

    pub async fn reject(&mut self, position: SubmissionPosition) {
        self.moderate(ModerationAction::Reject, position).await;
    }

    /// Publishes with the form's header fields. The form is only cleared when
    /// the host reports success; failures are logged and leave it untouched.
    pub async fn publish(&mut self) -> bool {
        let header_details = self.form.header_details();
        match self.host.publish(header_details).await {
            Ok(outcome) if outcome.ok => {
                info!("newspaper published");
                self.notice = Some(Notice::Published);
                self.form.clear();
                self.refresh().await;
                true
            }
            Ok(_) => {
                warn!("host declined to publish newspaper");
                false
            }
            Err(err) => {
                error!(error = %err, "error publishing newspaper");
                false
            }
        }
    }

    pub async fn write_own_article(&self) {
        if let Err(err) = self.host.write_my_own_article().await {
            warn!(error = %err, "write-article request failed");
        }
    }

    pub async fn close(&mut self) {
        self.visible = false;
        if let Err(err) = self.host.close_ui().await {
            warn!(error = %err, "closeUI request failed");
        }
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    pub fn view(&self) -> DashboardView {
        DashboardView {
            visible: self.visible,
            cards: self
                .submissions
                .iter()
                .enumerate()
                .map(|(offset, submission)| {
                    SubmissionCard::new(SubmissionPosition::from_offset(offset), submission)
                })
                .collect(),
            form: self.form.clone(),
        }
    }
}

/// Plain-text line for a card, for terminal output.
pub fn card_summary(card: &SubmissionCard) -> String {
    let mut line = format!(
        "{}. {} [{}] by {}",
        card.position.get(),
        card.title,
        card.type_label,
        card.author
    );
    if let Some(at) = &card.submitted_at {
        line.push_str(&format!(" ({at})"));
    }
    line
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
