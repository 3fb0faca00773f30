use shared::domain::{Article, Category, Issue};

use crate::{
    modal::ArticleModal,
    pages::PageBook,
    spread::{render_spread, SpreadCursor},
};

fn book_with(kinds: &[&str]) -> PageBook {
    let articles = kinds
        .iter()
        .enumerate()
        .map(|(n, kind)| Article {
            kind: (*kind).into(),
            title: format!("t{n}"),
            content: format!("content {n}"),
            author: format!("author {n}"),
            image: (n == 0).then(|| "https://img.example/0.png".to_string()),
        })
        .collect();
    PageBook::from_issue(Issue {
        articles,
        ..Issue::default()
    })
}

/// Seven pages: cover + latest_news x3 + crime x2 + misc.
fn seven_page_book() -> PageBook {
    let mut kinds = vec!["latest_news"; 9];
    kinds.extend(["crime"; 6]);
    kinds.push("misc");
    let book = book_with(&kinds);
    assert_eq!(book.len(), 7);
    book
}

#[test]
fn cover_only_issue_hides_every_control() {
    let book = book_with(&[]);
    let mut cursor = SpreadCursor::default();
    let view = render_spread(&book, cursor);
    assert!(view.left.title_page);
    assert!(view.right.is_blank());
    assert!(!view.controls.next && !view.controls.prev && !view.controls.home);
    assert!(!cursor.next(book.len()));
    assert_eq!(cursor.index(), 0);
}

#[test]
fn next_steps_one_from_cover_then_two() {
    let book = seven_page_book();
    let mut cursor = SpreadCursor::default();
    assert!(cursor.next(book.len()));
    assert_eq!(cursor.index(), 1);
    assert!(cursor.next(book.len()));
    assert_eq!(cursor.index(), 3);
    assert!(cursor.next(book.len()));
    assert_eq!(cursor.index(), 5);
    assert!(!render_spread(&book, cursor).controls.next);
    assert!(!cursor.next(book.len()));
    assert_eq!(cursor.index(), 5);
}

#[test]
fn prev_steps_two_then_one_back_to_cover() {
    let book = seven_page_book();
    let mut cursor = SpreadCursor::default();
    while cursor.next(book.len()) {}
    assert!(cursor.prev());
    assert_eq!(cursor.index(), 3);
    assert!(cursor.prev());
    assert_eq!(cursor.index(), 1);
    assert!(cursor.prev());
    assert_eq!(cursor.index(), 0);
    assert!(!cursor.prev());
    assert_eq!(cursor.index(), 0);
}

#[test]
fn home_returns_to_cover() {
    let book = seven_page_book();
    let mut cursor = SpreadCursor::default();
    cursor.next(book.len());
    cursor.next(book.len());
    cursor.home();
    assert!(cursor.is_cover());
    let view = render_spread(&book, cursor);
    assert!(!view.controls.prev && !view.controls.home && view.controls.next);
}

#[test]
fn jump_normalizes_to_spread_start_and_never_lands_on_cover() {
    let book = seven_page_book();
    let mut cursor = SpreadCursor::default();

    assert!(cursor.jump_to_category(&book, Category::LatestNews));
    assert_eq!(cursor.index(), 1);

    assert!(cursor.jump_to_category(&book, Category::Crime));
    assert_eq!(cursor.index(), 3);

    assert!(cursor.jump_to_category(&book, Category::Misc));
    assert_eq!(cursor.index(), 5);

    assert!(!cursor.jump_to_category(&book, Category::Opinion));
    assert_eq!(cursor.index(), 5);
}

#[test]
fn jump_to_even_first_page_moves_back_one() {
    // cover, opinion, crime -> crime starts at page 2
    let book = book_with(&["opinion", "crime"]);
    let mut cursor = SpreadCursor::default();
    assert!(cursor.jump_to_category(&book, Category::Crime));
    assert_eq!(cursor.index(), 1);
}

#[test]
fn reachable_spreads_never_show_two_blank_panes() {
    for article_count in 0..12 {
        let kinds: Vec<&str> = (0..article_count)
            .map(|n| if n % 2 == 0 { "misc" } else { "crime" })
            .collect();
        let book = book_with(&kinds);
        let mut cursor = SpreadCursor::default();
        loop {
            assert!(cursor.index() < book.len());
            let view = render_spread(&book, cursor);
            assert!(!(view.left.is_blank() && view.right.is_blank()));
            if !cursor.next(book.len()) {
                break;
            }
        }
    }
}

#[test]
fn spread_panes_carry_page_content() {
    let book = book_with(&["misc", "crime"]);
    let mut cursor = SpreadCursor::default();
    cursor.next(book.len());
    let view = render_spread(&book, cursor);
    assert_eq!(view.left.page_index, Some(1));
    assert_eq!(view.right.page_index, Some(2));
    assert!(!view.left.title_page);
    assert!(view.left.content.contains("Miscellaneous"));
    assert!(view.right.content.contains("Crime Reports"));
}

#[test]
fn modal_shows_article_by_original_index() {
    let book = book_with(&["misc", "horoscope"]);
    let mut modal = ArticleModal::default();

    assert!(modal.open(book.articles(), 0));
    let view = modal.view(book.articles()).expect("modal view");
    assert_eq!(view.title, "t0");
    assert_eq!(view.content, "content 0");
    assert_eq!(view.author_line, "- author 0");
    assert_eq!(view.image, Some("https://img.example/0.png"));

    assert!(modal.open(book.articles(), 1));
    let view = modal.view(book.articles()).expect("unpaginated article");
    assert_eq!(view.image, None);
    assert!(view.to_markup().contains(r#"style="display:none""#));

    assert!(modal.close());
    assert!(!modal.close());
}

#[test]
fn modal_ignores_missing_articles() {
    let book = book_with(&["misc"]);
    let mut modal = ArticleModal::default();
    assert!(!modal.open(book.articles(), 7));
    assert!(!modal.is_open());
    assert!(modal.view(book.articles()).is_none());
}
