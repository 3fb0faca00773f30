use std::sync::Mutex;

use async_trait::async_trait;
use host_client::{HostApi, HostError};
use serde_json::json;
use shared::{
    domain::{Category, HeaderDetails, ModerationAction, Submission, SubmissionPosition},
    protocol::{decode_message, Decoded, PublishResponse, SubmissionActionResponse},
};

use crate::controller::{
    events::{UiCommand, UiEvent},
    orchestration::dispatch_host_command,
    reducer::ReaderState,
};

fn show(articles: serde_json::Value) -> UiEvent {
    UiEvent::Host(decode_message(&json!({
        "type": "showPublicUI",
        "issueData": {
            "header": { "title": "Evening Edition" },
            "articles": articles,
            "advertisements": [{ "image": "https://ads.example/a.png", "title": "Ad" }]
        }
    })))
}

fn shown_state() -> ReaderState {
    let mut state = ReaderState::default();
    state.update(show(json!([
        { "type": "opinion", "title": "o1", "content": "x", "author": "A" },
        { "type": "crime", "title": "c1", "content": "x", "author": "B", "image": "https://img.example/c1.png" },
        { "type": "wanted", "title": "w1", "content": "x", "author": "C" },
        { "type": "gossip", "title": "g1", "content": "x", "author": "D" }
    ])));
    state
}

#[test]
fn hidden_until_show_message() {
    let mut state = ReaderState::default();
    assert!(!state.is_visible());
    assert!(state.view().spread.is_none());

    assert_eq!(state.update(UiEvent::NextPage), None);
    assert_eq!(state.cursor().index(), 0);

    state.update(UiEvent::Host(decode_message(&json!({ "type": "owner_ui" }))));
    assert!(!state.is_visible());
}

#[test]
fn show_builds_pages_and_resets_to_cover() {
    let mut state = shown_state();
    assert!(state.is_visible());
    assert_eq!(state.book().len(), 4);

    state.update(UiEvent::NextPage);
    assert_eq!(state.cursor().index(), 1);

    state.update(show(json!([])));
    assert_eq!(state.cursor().index(), 0);
    assert_eq!(state.book().len(), 1);
    let view = state.view();
    let spread = view.spread.expect("spread");
    assert!(spread.left.title_page);
    assert!(!spread.controls.next);
}

#[test]
fn malformed_messages_leave_state_untouched() {
    let mut state = shown_state();
    state.update(UiEvent::NextPage);
    state.update(UiEvent::Host(decode_message(&json!({ "type": "showPublicUI" }))));
    state.update(UiEvent::Host(Decoded::Unrecognized(json!("garbage"))));
    assert_eq!(state.cursor().index(), 1);
    assert_eq!(state.book().len(), 4);
}

#[test]
fn wanted_button_jumps_to_wanted_spread() {
    let mut state = shown_state();
    // cover, opinion, crime, wanted
    state.update(UiEvent::SelectCategory(Category::Wanted));
    assert_eq!(state.cursor().index(), 3);
    state.update(UiEvent::SelectCategory(Category::Crime));
    assert_eq!(state.cursor().index(), 1);
    state.update(UiEvent::SelectCategory(Category::Misc));
    assert_eq!(state.cursor().index(), 1);
    state.update(UiEvent::Home);
    assert_eq!(state.cursor().index(), 0);
}

#[test]
fn escape_closes_modal_before_requesting_close() {
    let mut state = shown_state();
    state.update(UiEvent::OpenArticle(1));
    let view = state.view();
    let modal = view.modal.expect("modal open");
    assert_eq!(modal.title, "c1");
    assert_eq!(modal.author_line, "- B");
    assert_eq!(modal.image, Some("https://img.example/c1.png"));

    assert_eq!(state.update(UiEvent::Escape), None);
    assert!(state.view().modal.is_none());
    assert!(state.is_visible());

    assert_eq!(state.update(UiEvent::Escape), Some(UiCommand::CloseUi));
    assert!(!state.is_visible());
}

#[test]
fn backdrop_and_close_button_dismiss_modal() {
    let mut state = shown_state();
    state.update(UiEvent::OpenArticle(3));
    assert_eq!(state.view().modal.expect("unpaginated article").title, "g1");
    state.update(UiEvent::BackdropClick);
    assert!(state.view().modal.is_none());

    state.update(UiEvent::OpenArticle(0));
    state.update(UiEvent::CloseModal);
    assert!(state.view().modal.is_none());

    state.update(UiEvent::OpenArticle(42));
    assert!(state.view().modal.is_none());
}

#[test]
fn markup_reflects_spread_and_controls() {
    let mut state = shown_state();
    let cover = state.view().to_markup();
    assert!(cover.contains(r#"class="page-content title-page-container""#));
    assert!(cover.contains(r#"<button id="prev-page-btn" style="display:none">"#));
    assert!(cover.contains(r#"<button id="next-page-btn" style="display:block">"#));
    assert!(cover.contains(r#"class="modal-hidden""#));

    state.update(UiEvent::NextPage);
    let spread = state.view().to_markup();
    assert!(spread.contains("Opinion &amp; Editorial"));
    assert!(spread.contains("Crime Reports"));
    assert!(spread.contains(r#"<button id="home-btn" style="display:block">"#));
}

#[test]
fn view_serializes_for_the_bridge() {
    let state = shown_state();
    let value = serde_json::to_value(state.view()).expect("serialize");
    assert_eq!(value["visible"], true);
    assert_eq!(value["spread"]["left"]["page_index"], 0);
    assert_eq!(value["spread"]["controls"]["next"], true);
    assert!(value["modal"].is_null());
}

struct CloseRecorder {
    closes: Mutex<u32>,
    fail: bool,
}

#[async_trait]
impl HostApi for CloseRecorder {
    async fn close_ui(&self) -> Result<(), HostError> {
        *self.closes.lock().expect("closes") += 1;
        if self.fail {
            return Err(HostError::EmptyBody { endpoint: "closeUI" });
        }
        Ok(())
    }

    async fn pending_submissions(&self) -> Result<Vec<Submission>, HostError> {
        Ok(Vec::new())
    }

    async fn moderate(
        &self,
        _action: ModerationAction,
        _position: SubmissionPosition,
    ) -> Result<SubmissionActionResponse, HostError> {
        Ok(SubmissionActionResponse::default())
    }

    async fn publish(&self, _header_details: HeaderDetails) -> Result<PublishResponse, HostError> {
        Ok(PublishResponse::default())
    }

    async fn write_my_own_article(&self) -> Result<(), HostError> {
        Ok(())
    }
}

#[tokio::test]
async fn close_command_reaches_host_and_failures_are_swallowed() {
    for fail in [false, true] {
        let host = CloseRecorder {
            closes: Mutex::new(0),
            fail,
        };
        dispatch_host_command(&host, UiCommand::CloseUi).await;
        assert_eq!(*host.closes.lock().expect("closes"), 1);
    }
}
