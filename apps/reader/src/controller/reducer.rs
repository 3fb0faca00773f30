//! Newspaper state and its transitions. All state lives in [`ReaderState`];
//! each event is applied in full before the next one is looked at.

use pagination::{render_spread, ArticleModal, ModalView, PageBook, SpreadCursor, SpreadView};
use serde::Serialize;
use shared::protocol::{Decoded, HostMessage};
use tracing::{debug, info, warn};

use crate::controller::events::{UiCommand, UiEvent};

#[derive(Debug, Default)]
pub struct ReaderState {
    visible: bool,
    book: PageBook,
    cursor: SpreadCursor,
    modal: ArticleModal,
}

impl ReaderState {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn book(&self) -> &PageBook {
        &self.book
    }

    pub fn cursor(&self) -> SpreadCursor {
        self.cursor
    }

    pub fn update(&mut self, event: UiEvent) -> Option<UiCommand> {
        match event {
            UiEvent::Host(decoded) => {
                self.apply_host_message(decoded);
                None
            }
            UiEvent::Escape => {
                if self.modal.close() {
                    return None;
                }
                self.visible = false;
                Some(UiCommand::CloseUi)
            }
            UiEvent::CloseModal | UiEvent::BackdropClick => {
                self.modal.close();
                None
            }
            _ if !self.visible => {
                debug!(?event, "newspaper hidden; ignoring input");
                None
            }
            UiEvent::NextPage => {
                self.cursor.next(self.book.len());
                None
            }
            UiEvent::PrevPage => {
                self.cursor.prev();
                None
            }
            UiEvent::Home => {
                self.cursor.home();
                None
            }
            UiEvent::SelectCategory(category) => {
                self.cursor.jump_to_category(&self.book, category);
                None
            }
            UiEvent::OpenArticle(index) => {
                if !self.modal.open(self.book.articles(), index) {
                    debug!(index, "no article at index");
                }
                None
            }
        }
    }

    fn apply_host_message(&mut self, decoded: Decoded) {
        match decoded {
            Decoded::Message(HostMessage::ShowPublicUi { issue_data }) => {
                // A new issue replaces everything, including an open modal.
                self.book = PageBook::from_issue(issue_data);
                self.cursor = SpreadCursor::default();
                self.modal = ArticleModal::default();
                self.visible = true;
                info!(pages = self.book.len(), "showing newspaper");
            }
            Decoded::Message(HostMessage::OwnerUi) => {}
            Decoded::Unrecognized(_) => debug!("ignoring unrecognized host message"),
            Decoded::Rejected(err) => warn!(error = %err, "ignoring malformed host message"),
        }
    }

    pub fn view(&self) -> ReaderView<'_> {
        ReaderView {
            visible: self.visible,
            spread: self
                .visible
                .then(|| render_spread(&self.book, self.cursor)),
            modal: self.modal.view(self.book.articles()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReaderView<'a> {
    pub visible: bool,
    pub spread: Option<SpreadView>,
    pub modal: Option<ModalView<'a>>,
}

impl ReaderView<'_> {
    pub fn to_markup(&self) -> String {
        let Some(spread) = &self.spread else {
            return r#"<div id="newspaper" style="display:none"></div>"#.to_string();
        };
        let left_class = if spread.left.title_page {
            "page-content title-page-container"
        } else {
            "page-content"
        };
        let modal = match &self.modal {
            Some(modal) => format!(r#"<div id="article-modal">{}</div>"#, modal.to_markup()),
            None => r#"<div id="article-modal" class="modal-hidden"></div>"#.to_string(),
        };
        format!(
            concat!(
                r#"<div id="newspaper" style="display:flex">"#,
                r#"<div id="left-page-content" class="{left_class}">{left}</div>"#,
                r#"<div id="right-page-content" class="page-content">{right}</div>"#,
                r#"<button id="prev-page-btn" style="display:{prev}">Prev</button>"#,
                r#"<button id="home-btn" style="display:{home}">Home</button>"#,
                r#"<button id="next-page-btn" style="display:{next}">Next</button>"#,
                "</div>{modal}"
            ),
            left_class = left_class,
            left = spread.left.content,
            right = spread.right.content,
            prev = display(spread.controls.prev),
            home = display(spread.controls.home),
            next = display(spread.controls.next),
            modal = modal,
        )
    }
}

fn display(shown: bool) -> &'static str {
    if shown {
        "block"
    } else {
        "none"
    }
}
