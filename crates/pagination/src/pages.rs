use serde::Serialize;
use shared::domain::{Article, Category, Issue};
use tracing::debug;

use crate::markup;

/// Content slots per category page, not counting the trailing filler slot.
pub const SLOTS_PER_PAGE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Slot {
    Article { original_index: usize },
    WantedPoster { original_index: usize },
    WantedButton,
    Advertisement { ad_index: usize },
    Empty,
}

impl Slot {
    pub fn article_index(self) -> Option<usize> {
        match self {
            Slot::Article { original_index } | Slot::WantedPoster { original_index } => {
                Some(original_index)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Empty for the cover.
    pub slots: Vec<Slot>,
    pub content: String,
}

impl Page {
    pub fn is_cover(&self) -> bool {
        self.category.is_none()
    }
}

/// The pages of one issue together with the flat article list they index into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageBook {
    articles: Vec<Article>,
    pages: Vec<Page>,
}

impl PageBook {
    pub fn from_issue(issue: Issue) -> Self {
        let pages = build_pages(&issue);
        Self {
            articles: issue.articles,
            pages,
        }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn article(&self, original_index: usize) -> Option<&Article> {
        self.articles.get(original_index)
    }

    pub fn first_page_of(&self, category: Category) -> Option<usize> {
        self.pages
            .iter()
            .position(|page| page.category == Some(category))
    }
}

/// Lays out an issue: the cover first, then each category's articles three to
/// a page, categories in the order they are first met among the articles.
pub fn build_pages(issue: &Issue) -> Vec<Page> {
    let mut pages = vec![Page {
        category: None,
        slots: Vec::new(),
        content: markup::cover(&issue.header),
    }];

    let has_wanted_posters = issue.articles.iter().any(Article::is_wanted);
    let mut ad_counter = 0usize;

    for (category, indices) in group_by_category(&issue.articles) {
        for (chunk_index, chunk) in indices.chunks(SLOTS_PER_PAGE).enumerate() {
            let mut slots: Vec<Slot> = chunk
                .iter()
                .map(|&original_index| {
                    if issue.articles[original_index].is_wanted() {
                        Slot::WantedPoster { original_index }
                    } else {
                        Slot::Article { original_index }
                    }
                })
                .collect();
            slots.resize(SLOTS_PER_PAGE, Slot::Empty);

            let filler = if category == Category::Crime && chunk_index == 0 && has_wanted_posters {
                Slot::WantedButton
            } else if !issue.advertisements.is_empty() {
                let ad_index = ad_counter % issue.advertisements.len();
                ad_counter += 1;
                Slot::Advertisement { ad_index }
            } else {
                Slot::Empty
            };
            slots.push(filler);

            let content = markup::category_page(category, &slots, issue);
            pages.push(Page {
                category: Some(category),
                slots,
                content,
            });
        }
    }

    debug!(
        pages = pages.len(),
        articles = issue.articles.len(),
        ad_slots = ad_counter,
        "built newspaper pages"
    );
    pages
}

fn group_by_category(articles: &[Article]) -> Vec<(Category, Vec<usize>)> {
    let mut groups: Vec<(Category, Vec<usize>)> = Vec::new();
    for (index, article) in articles.iter().enumerate() {
        let Some(category) = article.category() else {
            debug!(index, kind = %article.kind, "article has no known category; not paginated");
            continue;
        };
        match groups.iter_mut().find(|(existing, _)| *existing == category) {
            Some((_, indices)) => indices.push(index),
            None => groups.push((category, vec![index])),
        }
    }
    groups
}
