//! Property-based tests for the Article model.

use proptest::prelude::*;

use plos_search::models::Article;

/// Generate arbitrary Article structs for testing.
fn arb_article() -> impl Strategy<Value = Article> {
    (
        "10\\.1371/[a-z]{4}\\.[0-9]{7}",                  // id (DOI-like)
        proptest::option::of("[A-Za-z0-9 ]{1,100}"),      // title
        proptest::collection::vec("[A-Za-z ]{1,30}", 0..5), // authors
        proptest::option::of(1900i32..2100),              // publication year
        proptest::option::of("[a-z-]{1,20}"),             // article type
    )
        .prop_map(|(id, title_display, author_display, year, article_type)| Article {
            id,
            title_display,
            author_display,
            publication_date: year.map(|y| format!("{y}-06-15T00:00:00Z")),
            article_type,
            ..Article::default()
        })
}

proptest! {
    /// Serialization roundtrip preserves every field.
    #[test]
    fn article_roundtrip(article in arb_article()) {
        let json = serde_json::to_value(&article).expect("serialize");
        let decoded: Article = serde_json::from_value(json).expect("deserialize");

        prop_assert_eq!(&article.id, &decoded.id);
        prop_assert_eq!(&article.title_display, &decoded.title_display);
        prop_assert_eq!(&article.author_display, &decoded.author_display);
        prop_assert_eq!(&article.publication_date, &decoded.publication_date);
        prop_assert_eq!(&article.article_type, &decoded.article_type);
    }

    /// Year extraction agrees with the year the date was built from.
    #[test]
    fn year_matches_generated_date(article in arb_article()) {
        let consistent = match (&article.publication_date, article.year()) {
            (Some(date), Some(year)) => date.starts_with(&year.to_string()),
            (None, None) => true,
            _ => false,
        };
        prop_assert!(consistent);
    }

    /// Decoding never panics on arbitrary field values.
    #[test]
    fn article_from_arbitrary_json_never_panics(
        title in proptest::option::of(".*"),
        date in proptest::option::of(".*"),
    ) {
        let json = serde_json::json!({
            "id": "10.1371/fuzz",
            "title_display": title,
            "publication_date": date,
        });

        // Should not panic - may succeed or fail gracefully
        let _ = serde_json::from_value::<Article>(json);
    }

    /// An unparsable date degrades to "no year", never an error.
    #[test]
    fn malformed_dates_degrade_to_no_year(raw in "[^0-9]{0,12}") {
        let article = Article {
            id: "10.1371/date".to_string(),
            publication_date: Some(raw),
            ..Article::default()
        };

        prop_assert!(article.year().is_none());
    }
}
