//! Single-article detail view.

use crate::models::Article;

/// Render the detail block for one article: title, authors, date, type,
/// abstract, and the doi.org link.
#[must_use]
pub fn format_detail(article: &Article) -> String {
    let mut output = format!("{}\n\n", article.title_or_default());

    output.push_str(&format!("Authors: {}\n", article.authors_joined(", ")));
    output.push_str(&format!(
        "Publication date: {}\n",
        article.publication_date.as_deref().unwrap_or("N/A")
    ));
    output.push_str(&format!(
        "Article type: {}\n",
        article.article_type.as_deref().unwrap_or("N/A")
    ));

    let abstract_text = if article.abstract_paragraphs.is_empty() {
        "No abstract available".to_string()
    } else {
        article.abstract_paragraphs.join(" ")
    };
    output.push_str(&format!("\nAbstract:\n{abstract_text}\n"));

    output.push_str(&format!("\nView full article: {}\n", article.doi_url()));

    output
}
