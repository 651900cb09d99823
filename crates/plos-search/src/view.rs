//! Client-side view pipeline: filter, sort, paginate.
//!
//! `paginate` is a pure function from the full article list plus a
//! `ViewState` to the visible page slice; identical inputs always yield
//! identical output. The controller re-runs it on every filter/sort/page
//! event without touching the network.

use crate::config::DEFAULT_PAGE_SIZE;
use crate::models::Article;

/// Date sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Most recent publication date first.
    #[default]
    Newest,
    /// Oldest publication date first.
    Oldest,
}

/// Active article-type filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeFilter {
    /// All article types pass.
    #[default]
    All,
    /// Only articles with exactly this type pass.
    Only(String),
}

impl TypeFilter {
    /// Whether the article passes this filter. Articles with no type are
    /// excluded whenever a specific type is selected.
    #[must_use]
    pub fn matches(&self, article: &Article) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => article.article_type.as_deref() == Some(wanted),
        }
    }
}

/// Immutable view parameters. The session owns the single mutable copy and
/// replaces fields through its event methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Current page, 1-based.
    pub page: usize,

    /// Articles per page.
    pub page_size: usize,

    /// Active type filter.
    pub type_filter: TypeFilter,

    /// Inclusive lower year bound.
    pub year_from: Option<i32>,

    /// Inclusive upper year bound.
    pub year_to: Option<i32>,

    /// Active sort order.
    pub sort: SortOrder,
}

impl ViewState {
    /// Fresh view at page 1 with no filters.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            type_filter: TypeFilter::All,
            year_from: None,
            year_to: None,
            sort: SortOrder::Newest,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// One visible page of results.
#[derive(Debug, Clone, Default)]
pub struct PageView {
    /// Articles on this page, in view order.
    pub articles: Vec<Article>,

    /// Articles surviving the filters, across all pages.
    pub total: usize,

    /// Total page count for the filtered set.
    pub total_pages: usize,

    /// The page this view shows, 1-based.
    pub page: usize,
}

/// Run the view pipeline: type filter, year filter, sort, slice.
///
/// Articles with no extractable publication year are excluded by the year
/// step regardless of bounds. An out-of-range page yields an empty slice,
/// not an error.
#[must_use]
pub fn paginate(articles: &[Article], view: &ViewState) -> PageView {
    let mut filtered: Vec<&Article> = articles
        .iter()
        .filter(|article| view.type_filter.matches(article))
        .filter(|article| passes_year_range(article, view.year_from, view.year_to))
        .collect();

    let page_size = view.page_size.max(1);
    let total = filtered.len();
    let total_pages = total.div_ceil(page_size);

    match view.sort {
        SortOrder::Newest => filtered.sort_by(|a, b| b.sort_key().cmp(&a.sort_key())),
        SortOrder::Oldest => filtered.sort_by(|a, b| a.sort_key().cmp(&b.sort_key())),
    }

    let start = view.page.saturating_sub(1).saturating_mul(page_size);
    let page_articles = filtered.into_iter().skip(start).take(page_size).cloned().collect();

    PageView { articles: page_articles, total, total_pages, page: view.page }
}

fn passes_year_range(article: &Article, from: Option<i32>, to: Option<i32>) -> bool {
    let Some(year) = article.year() else {
        return false;
    };
    if from.is_some_and(|bound| year < bound) {
        return false;
    }
    if to.is_some_and(|bound| year > bound) {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(id: &str, date: Option<&str>, article_type: Option<&str>) -> Article {
        Article {
            id: id.to_string(),
            publication_date: date.map(String::from),
            article_type: article_type.map(String::from),
            ..Article::default()
        }
    }

    fn ids(page: &PageView) -> Vec<&str> {
        page.articles.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn test_type_filter_excludes_untyped() {
        let articles = vec![
            article("a", Some("2020-01-01"), Some("research-article")),
            article("b", Some("2021-01-01"), None),
            article("c", Some("2022-01-01"), Some("correction")),
        ];

        let mut view = ViewState::default();
        view.type_filter = TypeFilter::Only("research-article".to_string());

        let page = paginate(&articles, &view);
        assert_eq!(ids(&page), vec!["a"]);
        assert_eq!(page.total, 1);
    }

    #[test]
    fn test_year_step_excludes_undated_even_without_bounds() {
        let articles = vec![
            article("dated", Some("2020-01-01"), None),
            article("undated", None, None),
            article("garbled", Some("not a date"), None),
        ];

        let page = paginate(&articles, &ViewState::default());
        assert_eq!(ids(&page), vec!["dated"]);
    }

    #[test]
    fn test_year_bounds_are_inclusive() {
        let articles = vec![
            article("a", Some("2018-06-01"), None),
            article("b", Some("2020-06-01"), None),
            article("c", Some("2022-06-01"), None),
        ];

        let mut view = ViewState::default();
        view.year_from = Some(2018);
        view.year_to = Some(2020);
        view.sort = SortOrder::Oldest;

        let page = paginate(&articles, &view);
        assert_eq!(ids(&page), vec!["a", "b"]);
    }

    #[test]
    fn test_sort_newest_puts_recent_first() {
        let articles = vec![
            article("old", Some("2010-01-01"), None),
            article("new", Some("2024-01-01"), None),
            article("mid", Some("2017-01-01"), None),
        ];

        let page = paginate(&articles, &ViewState::default());
        assert_eq!(ids(&page), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let articles = vec![article("a", Some("2020-01-01"), None)];

        let mut view = ViewState::default();
        view.page = 7;

        let page = paginate(&articles, &view);
        assert!(page.articles.is_empty());
        assert_eq!(page.total, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_empty_input_yields_zero_pages() {
        let page = paginate(&[], &ViewState::default());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.articles.is_empty());
    }

    #[test]
    fn test_page_size_floor_is_one() {
        let view = ViewState::new(0);
        assert_eq!(view.page_size, 1);
    }
}
