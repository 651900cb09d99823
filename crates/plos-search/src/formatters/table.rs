//! Result-page rendering: numbered rows, count line, pagination strip.

use regex::RegexBuilder;

use crate::models::Article;
use crate::view::PageView;

/// Mark query occurrences in `text`, case-insensitively. The original
/// casing of the matched text is preserved inside the markers.
#[must_use]
pub fn highlight(text: &str, query: &str) -> String {
    if query.is_empty() {
        return text.to_string();
    }

    match RegexBuilder::new(&regex::escape(query)).case_insensitive(true).build() {
        Ok(re) => re.replace_all(text, "[$0]").into_owned(),
        Err(_) => text.to_string(),
    }
}

/// Render one page of results as numbered rows. Row numbers are page-local
/// and 1-based, matching the detail command.
#[must_use]
pub fn format_page(page: &PageView, query: &str) -> String {
    if page.articles.is_empty() {
        return "No results.\n".to_string();
    }

    let mut output = String::new();
    for (i, article) in page.articles.iter().enumerate() {
        output.push_str(&format_row(article, i + 1, query));
    }
    output
}

fn format_row(article: &Article, index: usize, query: &str) -> String {
    let mut row = format!("{index}. {}", highlight(article.title_or_default(), query));
    if let Some(kind) = &article.article_type {
        row.push_str(&format!("  ({kind})"));
    }
    row.push('\n');

    let authors = if article.author_display.is_empty() {
        "No authors".to_string()
    } else {
        article.authors_joined(", ")
    };
    let doi = if article.id.is_empty() { "No DOI".to_string() } else { article.id.clone() };

    row.push_str(&format!("   {authors} | {} | {doi}\n", format_date(article)));
    row
}

/// Long-form publication date, e.g. "March 1, 2009".
fn format_date(article: &Article) -> String {
    article
        .published_at()
        .map_or_else(|| "No date".to_string(), |d| d.format("%B %-d, %Y").to_string())
}

/// The "N articles found" line.
#[must_use]
pub fn format_results_count(total: usize) -> String {
    if total == 0 { "No articles found".to_string() } else { format!("Found {total} articles") }
}

/// Page strip with the current page marked. Empty for a single page.
#[must_use]
pub fn format_pagination(total_pages: usize, current: usize) -> String {
    if total_pages <= 1 {
        return String::new();
    }

    let pages: Vec<String> = (1..=total_pages)
        .map(|p| if p == current { format!("[{p}]") } else { p.to_string() })
        .collect();

    format!("Page {current} of {total_pages}: {}", pages.join(" "))
}
