use serde::Serialize;
use shared::domain::Category;
use tracing::debug;

use crate::pages::PageBook;

/// Left-hand page of the spread on screen.
///
/// Index 0 shows the cover on the left. Every other reachable index is odd,
/// so page 0 never shares a spread with content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SpreadCursor {
    index: usize,
}

impl SpreadCursor {
    pub fn index(self) -> usize {
        self.index
    }

    pub fn is_cover(self) -> bool {
        self.index == 0
    }

    pub fn next(&mut self, page_count: usize) -> bool {
        if !self.controls(page_count).next {
            return false;
        }
        self.index += if self.is_cover() { 1 } else { 2 };
        true
    }

    pub fn prev(&mut self) -> bool {
        let step = if self.index == 1 { 1 } else { 2 };
        match self.index.checked_sub(step) {
            Some(index) => {
                self.index = index;
                true
            }
            None => false,
        }
    }

    pub fn home(&mut self) {
        self.index = 0;
    }

    /// Moves to the spread holding the first page of `category`. Returns
    /// `false` when the issue has no such page.
    pub fn jump_to_category(&mut self, book: &PageBook, category: Category) -> bool {
        match book.first_page_of(category) {
            Some(first) if first > 0 => {
                self.index = spread_start(first);
                debug!(category = category.key(), first, index = self.index, "jumped to category");
                true
            }
            _ => false,
        }
    }

    pub fn controls(self, page_count: usize) -> NavControls {
        let on_content = self.index > 0;
        NavControls {
            prev: on_content,
            home: on_content,
            next: (!on_content && page_count > 1) || (on_content && self.index + 2 < page_count),
        }
    }
}

fn spread_start(page: usize) -> usize {
    let start = if page % 2 == 0 { page - 1 } else { page };
    start.max(1)
}

/// Which navigation buttons are shown. Hidden buttons are never disabled, just absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavControls {
    pub prev: bool,
    pub home: bool,
    pub next: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Pane {
    pub page_index: Option<usize>,
    pub content: String,
    pub title_page: bool,
}

impl Pane {
    pub fn is_blank(&self) -> bool {
        self.page_index.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpreadView {
    pub left: Pane,
    pub right: Pane,
    pub controls: NavControls,
}

pub fn render_spread(book: &PageBook, cursor: SpreadCursor) -> SpreadView {
    let left = cursor.index();
    SpreadView {
        left: pane(book, left),
        right: pane(book, left + 1),
        controls: cursor.controls(book.len()),
    }
}

fn pane(book: &PageBook, index: usize) -> Pane {
    match book.page(index) {
        Some(page) => Pane {
            page_index: Some(index),
            content: page.content.clone(),
            title_page: index == 0,
        },
        None => Pane::default(),
    }
}
