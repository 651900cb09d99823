//! CSV export of the full result list.
//!
//! Rows follow store order, not the filtered/sorted view. Field values are
//! wrapped in double quotes verbatim; embedded quote characters are not
//! escaped (an accepted limitation of the format produced here).

use std::path::Path;

use crate::models::Article;

/// Column header row.
pub const CSV_HEADER: &str = "Title,Authors,Publication Date,Article Type,DOI";

/// Default export filename.
pub const DEFAULT_FILENAME: &str = "articles.csv";

/// Serialize articles to CSV. `None` when the list is empty, so callers
/// can skip producing a file entirely.
#[must_use]
pub fn to_csv(articles: &[Article]) -> Option<String> {
    if articles.is_empty() {
        return None;
    }

    let mut rows = vec![CSV_HEADER.to_string()];

    for article in articles {
        let authors = article.authors_joined("; ");
        let fields = [
            article.title_display.as_deref().unwrap_or(""),
            authors.as_str(),
            article.publication_date.as_deref().unwrap_or(""),
            article.article_type.as_deref().unwrap_or(""),
            article.id.as_str(),
        ];

        let quoted: Vec<String> = fields.iter().map(|value| format!("\"{value}\"")).collect();
        rows.push(quoted.join(","));
    }

    Some(rows.join("\n"))
}

/// Write the CSV export to a file. Returns `false` without touching the
/// filesystem when the list is empty.
///
/// # Errors
///
/// Returns error if the file cannot be written.
pub fn write_csv(path: &Path, articles: &[Article]) -> std::io::Result<bool> {
    match to_csv(articles) {
        Some(csv) => {
            std::fs::write(path, csv)?;
            tracing::info!(path = %path.display(), rows = articles.len(), "exported articles");
            Ok(true)
        }
        None => {
            tracing::debug!("export skipped, no articles in store");
            Ok(false)
        }
    }
}
