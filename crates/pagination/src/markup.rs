//! HTML fragments for the cover and category pages.

use shared::domain::{Category, Issue, IssueHeader};

use crate::pages::Slot;

pub const DEFAULT_TITLE: &str = "The New Dawn Gazette";
pub const DEFAULT_VOLUME: &str = "VOL. 001";
pub const DEFAULT_DATE: &str = "Date Unknown";
pub const DEFAULT_NUMBER: &str = "NO. 1";

pub const WANTED_POSTER_IMAGE: &str = "https://i.ibb.co/k2cQYy1/generic-wanted-poster.png";

/// Characters of content shown on a card before the ellipsis.
pub const PREVIEW_CHARS: usize = 100;

pub fn cover(header: &IssueHeader) -> String {
    let links: String = Category::COVER_LINKS
        .iter()
        .map(|category| {
            format!(
                r#"<div class="nav-btn" data-category="{}">{}</div>"#,
                category.key(),
                escape_html(category.title())
            )
        })
        .collect();

    format!(
        concat!(
            r#"<div class="newspaper-header">"#,
            r#"<div class="title">{title}</div>"#,
            r#"<div class="sub-header"><span>{volume}</span><span>{date}</span><span>{number}</span></div>"#,
            r#"</div>"#,
            r#"<div class="contents-links">{links}</div>"#
        ),
        title = escape_html(or_default(&header.title, DEFAULT_TITLE)),
        volume = escape_html(or_default(&header.volume, DEFAULT_VOLUME)),
        date = escape_html(or_default(&header.date, DEFAULT_DATE)),
        number = escape_html(or_default(&header.number, DEFAULT_NUMBER)),
        links = links,
    )
}

pub fn category_page(category: Category, slots: &[Slot], issue: &Issue) -> String {
    let mut html = format!(
        r#"<div class="page-title">{}</div>"#,
        escape_html(category.title())
    );
    for slot in slots {
        html.push_str(&slot_markup(*slot, issue));
    }
    html
}

fn slot_markup(slot: Slot, issue: &Issue) -> String {
    match slot {
        Slot::Article { original_index } => {
            let Some(article) = issue.articles.get(original_index) else {
                return empty_slot();
            };
            format!(
                r#"<div class="article-box" data-index="{original_index}"><h3>{}</h3><p>{}...</p></div>"#,
                escape_html(&article.title),
                escape_html(&preview(&article.content)),
            )
        }
        Slot::WantedPoster { original_index } => {
            let Some(article) = issue.articles.get(original_index) else {
                return empty_slot();
            };
            format!(
                r#"<div class="article-box wanted-poster-box" data-index="{original_index}"><img src="{WANTED_POSTER_IMAGE}" alt="Wanted Poster"><h3>{}</h3></div>"#,
                escape_html(&article.title),
            )
        }
        Slot::WantedButton => format!(
            r#"<div class="wanted-button" data-category="{}">View<br>Wanted Posters</div>"#,
            Category::Wanted.key()
        ),
        Slot::Advertisement { ad_index } => {
            let Some(ad) = issue.advertisements.get(ad_index) else {
                return empty_slot();
            };
            format!(
                r#"<div class="ad-box"><img src="{}" alt="{}"></div>"#,
                escape_html(&ad.image),
                escape_html(&ad.title),
            )
        }
        Slot::Empty => empty_slot(),
    }
}

fn empty_slot() -> String {
    "<div></div>".to_string()
}

/// First [`PREVIEW_CHARS`] characters of `content`.
pub fn preview(content: &str) -> String {
    content.chars().take(PREVIEW_CHARS).collect()
}

fn or_default<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    value.as_deref().filter(|v| !v.is_empty()).unwrap_or(default)
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
