//! Newspaper layout: turns an issue into pages, pages into two-page spreads,
//! and articles into modal views.

pub mod markup;
pub mod modal;
pub mod pages;
pub mod spread;

pub use modal::{ArticleModal, ModalView};
pub use pages::{build_pages, Page, PageBook, Slot, SLOTS_PER_PAGE};
pub use spread::{render_spread, NavControls, Pane, SpreadCursor, SpreadView};

#[cfg(test)]
#[path = "tests/pages_tests.rs"]
mod pages_tests;

#[cfg(test)]
#[path = "tests/spread_tests.rs"]
mod spread_tests;
