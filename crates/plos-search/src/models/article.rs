//! Article data model matching the PLOS search API document schema.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A published article from the PLOS search API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Article {
    /// DOI of the article. Unique within a result set.
    pub id: String,

    /// Display title.
    #[serde(default)]
    pub title_display: Option<String>,

    /// Author display names, in publication order.
    #[serde(default)]
    pub author_display: Vec<String>,

    /// Publication date, ISO-like (e.g. `2009-03-01T00:00:00Z`).
    #[serde(default)]
    pub publication_date: Option<String>,

    /// Categorical article type (e.g. `research-article`).
    #[serde(default)]
    pub article_type: Option<String>,

    /// Abstract paragraphs.
    #[serde(default, rename = "abstract")]
    pub abstract_paragraphs: Vec<String>,
}

impl Article {
    /// Get the title, falling back to "No title" if not available.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title_display.as_deref().unwrap_or("No title")
    }

    /// Publication instant parsed from `publication_date`.
    ///
    /// Accepts RFC 3339, `YYYY-MM-DD`, or a bare leading year. Returns
    /// `None` when the field is absent or unparsable.
    #[must_use]
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        parse_publication_date(self.publication_date.as_deref()?)
    }

    /// Calendar year of publication, if extractable.
    #[must_use]
    pub fn year(&self) -> Option<i32> {
        self.published_at().map(|instant| instant.year())
    }

    /// Sort key for date ordering. Articles without a parseable date sort
    /// as the Unix epoch (earliest).
    #[must_use]
    pub fn sort_key(&self) -> DateTime<Utc> {
        self.published_at().unwrap_or(DateTime::UNIX_EPOCH)
    }

    /// Authors joined with the given separator.
    #[must_use]
    pub fn authors_joined(&self, separator: &str) -> String {
        self.author_display.join(separator)
    }

    /// Link to the full article.
    #[must_use]
    pub fn doi_url(&self) -> String {
        format!("https://doi.org/{}", self.id)
    }
}

fn parse_publication_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| Utc.from_utc_datetime(&dt));
    }

    // Bare leading year, e.g. "2009"
    let year: i32 = raw.get(..4)?.parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, 1, 1)?;
    date.and_hms_opt(0, 0, 0).map(|dt| Utc.from_utc_datetime(&dt))
}

/// Top-level search response; only `response.docs` is consumed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Response envelope.
    #[serde(default)]
    pub response: ResponseBody,
}

/// Response envelope holding the document list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseBody {
    /// Matched documents. A missing field decodes to an empty list.
    #[serde(default)]
    pub docs: Vec<Article>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_deserialize_minimal() {
        let json = r#"{"id": "10.1371/journal.pone.0001"}"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.id, "10.1371/journal.pone.0001");
        assert!(article.title_display.is_none());
        assert!(article.author_display.is_empty());
        assert!(article.abstract_paragraphs.is_empty());
    }

    #[test]
    fn test_article_deserialize_full() {
        let json = r#"{
            "id": "10.1371/journal.pone.0001",
            "title_display": "Cancer Stem Cells",
            "author_display": ["Ada Lovelace", "Charles Babbage"],
            "publication_date": "2009-03-01T00:00:00Z",
            "article_type": "research-article",
            "abstract": ["First paragraph.", "Second paragraph."]
        }"#;

        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.title_or_default(), "Cancer Stem Cells");
        assert_eq!(article.year(), Some(2009));
        assert_eq!(article.authors_joined("; "), "Ada Lovelace; Charles Babbage");
        assert_eq!(article.abstract_paragraphs.len(), 2);
        assert_eq!(article.doi_url(), "https://doi.org/10.1371/journal.pone.0001");
    }

    #[test]
    fn test_publication_date_formats() {
        assert_eq!(parse_publication_date("2009-03-01T00:00:00Z").map(|d| d.year()), Some(2009));
        assert_eq!(parse_publication_date("2015-11-30").map(|d| d.year()), Some(2015));
        assert_eq!(parse_publication_date("1998").map(|d| d.year()), Some(1998));
        assert!(parse_publication_date("not a date").is_none());
        assert!(parse_publication_date("").is_none());
    }

    #[test]
    fn test_sort_key_missing_date_is_epoch() {
        let article = Article::default();
        assert_eq!(article.sort_key(), DateTime::UNIX_EPOCH);
    }

    #[test]
    fn test_search_response_missing_docs() {
        let json = r#"{"response": {}}"#;
        let decoded: SearchResponse = serde_json::from_str(json).unwrap();
        assert!(decoded.response.docs.is_empty());

        let json = r"{}";
        let decoded: SearchResponse = serde_json::from_str(json).unwrap();
        assert!(decoded.response.docs.is_empty());
    }
}
