//! Data model for collected articles.
//!
//! An [`ArticleRecord`] is the preview of a single article as it appears on
//! the listing page. Records are plain values: no identity beyond their
//! fields, no deduplication, owned by the caller once returned.

use serde::{Deserialize, Serialize};

/// One article preview extracted from a feed item block.
///
/// All four fields are required; a block missing any of them never becomes a
/// record. `link` and `image` are kept exactly as they appear in the markup.
///
/// Field order matters: it is the column order of the CSV export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Headline text of the article.
    pub title: String,
    /// Short summary shown under the headline.
    pub description: String,
    /// Target of the headline link.
    pub link: String,
    /// Source of the preview image.
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_record_creation() {
        let record = ArticleRecord {
            title: "Title".to_string(),
            description: "Description".to_string(),
            link: "https://example.com/a".to_string(),
            image: "https://example.com/a.jpg".to_string(),
        };
        assert_eq!(record.title, "Title");
        assert_eq!(record.link, "https://example.com/a");
    }

    #[test]
    fn test_article_record_serialization_field_order() {
        let record = ArticleRecord {
            title: "t".to_string(),
            description: "d".to_string(),
            link: "l".to_string(),
            image: "i".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"title":"t","description":"d","link":"l","image":"i"}"#
        );
    }
}
