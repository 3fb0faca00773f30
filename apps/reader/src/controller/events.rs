//! Inputs to the newspaper controller and the host commands it can emit.

use shared::{domain::Category, protocol::Decoded};

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Host(Decoded),
    NextPage,
    PrevPage,
    Home,
    /// A cover link or the crime section's wanted-poster button.
    SelectCategory(Category),
    /// A content card, by the article's position in the issue.
    OpenArticle(usize),
    CloseModal,
    BackdropClick,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    CloseUi,
}

impl UiCommand {
    pub fn name(self) -> &'static str {
        match self {
            UiCommand::CloseUi => "close_ui",
        }
    }
}
