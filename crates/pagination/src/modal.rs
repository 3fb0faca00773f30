use serde::Serialize;
use shared::domain::Article;

use crate::markup::escape_html;

/// The full-article overlay. Keyed by an article's position in the issue's
/// flat article list, so it also reaches articles that were not paginated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArticleModal {
    open: Option<usize>,
}

impl ArticleModal {
    /// Opens the modal on `original_index`; out-of-range indices are ignored.
    pub fn open(&mut self, articles: &[Article], original_index: usize) -> bool {
        if original_index >= articles.len() {
            return false;
        }
        self.open = Some(original_index);
        true
    }

    /// Returns whether the modal was open.
    pub fn close(&mut self) -> bool {
        self.open.take().is_some()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn view<'a>(&self, articles: &'a [Article]) -> Option<ModalView<'a>> {
        let article = articles.get(self.open?)?;
        Some(ModalView {
            title: &article.title,
            content: &article.content,
            author_line: format!("- {}", article.author),
            image: article.image.as_deref().filter(|image| !image.is_empty()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModalView<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub author_line: String,
    pub image: Option<&'a str>,
}

impl ModalView<'_> {
    pub fn to_markup(&self) -> String {
        let image = match self.image {
            Some(src) => format!(r#"<img id="modal-image" src="{}">"#, escape_html(src)),
            None => r#"<img id="modal-image" style="display:none">"#.to_string(),
        };
        format!(
            r#"<h2 id="modal-title">{}</h2>{image}<p id="modal-text">{}</p><p id="modal-author">{}</p>"#,
            escape_html(self.title),
            escape_html(self.content),
            escape_html(&self.author_line),
        )
    }
}
