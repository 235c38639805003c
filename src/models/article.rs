use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

/// A news article as returned to callers
///
/// Every field is optional because the provider omits fields freely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Headline
    pub title: Option<String>,
    /// Byline, when the provider knows it
    pub author: Option<String>,
    /// Short summary
    pub description: Option<String>,
    /// Link to the full article
    pub url: Option<String>,
    /// Publication timestamp, kept as the provider's text
    pub published_at: Option<String>,
}

#[cfg(test)]
impl Article {
    /// Create an article with only a title
    pub(crate) fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

/// Response body of every provider endpoint we call
///
/// Only the article list is read; totals and paging fields are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct ArticleList {
    pub articles: Vec<Article>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let json = r#"{
            "title": "A",
            "author": "B",
            "description": "C",
            "url": "D",
            "publishedAt": "2024-01-01",
            "content": "ignored",
            "image": "https://example.com/a.png",
            "source": { "name": "Example", "url": "https://example.com" }
        }"#;

        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.title.as_deref(), Some("A"));
        assert_eq!(article.author.as_deref(), Some("B"));
        assert_eq!(article.description.as_deref(), Some("C"));
        assert_eq!(article.url.as_deref(), Some("D"));
        assert_eq!(article.published_at.as_deref(), Some("2024-01-01"));
    }

    #[test]
    fn test_deserialize_missing_and_null_fields() {
        let article: Article = serde_json::from_str(r#"{"title": null}"#).unwrap();
        assert_eq!(article, Article::default());
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let article = Article {
            published_at: Some("2024-01-01".to_string()),
            ..Article::titled("A")
        };

        let value = serde_json::to_value(&article).unwrap();
        assert_eq!(value["publishedAt"], "2024-01-01");
        assert_eq!(value["title"], "A");
        assert!(value.get("published_at").is_none());
    }

    #[test]
    fn test_article_list_requires_articles_field() {
        let missing = serde_json::from_str::<ArticleList>(r#"{"totalArticles": 0}"#);
        assert!(missing.is_err());
        let malformed = serde_json::from_str::<ArticleList>(r#"{"articles": "nope"}"#);
        assert!(malformed.is_err());

        let json = r#"{"totalArticles": 1, "articles": [{"title": "A"}]}"#;
        let list: ArticleList = serde_json::from_str(json).unwrap();
        assert_eq!(list.articles, vec![Article::titled("A")]);
    }
}
