use std::fmt;

/// Deterministic cache key for one logical query
///
/// Rendered as `<operation>:<value>`. Operation names never contain `:`, and
/// every key carries exactly one parameter, so splitting at the first `:`
/// always recovers the full parameter value. Values containing `:` therefore
/// cannot alias another query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Key for `articles(max)`; an absent `max` renders as an empty value
    pub fn articles(max: Option<i64>) -> Self {
        match max {
            Some(max) => Self::compose("articles", &max.to_string()),
            None => Self::compose("articles", ""),
        }
    }

    /// Key for `article(title)`
    pub fn article(title: &str) -> Self {
        Self::compose("article", title)
    }

    /// Key for `search(keyword)`
    pub fn search(keyword: &str) -> Self {
        Self::compose("search", keyword)
    }

    fn compose(operation: &str, value: &str) -> Self {
        debug_assert!(!operation.contains(':'));
        Self(format!("{}:{}", operation, value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_format() {
        assert_eq!(CacheKey::articles(Some(5)).as_str(), "articles:5");
        assert_eq!(CacheKey::articles(None).as_str(), "articles:");
        let key = CacheKey::article("Mars rover");
        assert_eq!(key.as_str(), "article:Mars rover");
        assert_eq!(CacheKey::search("ai").as_str(), "search:ai");
    }

    #[test]
    fn test_same_query_same_key() {
        assert_eq!(CacheKey::search("ai"), CacheKey::search("ai"));
        assert_eq!(CacheKey::articles(Some(10)), CacheKey::articles(Some(10)));
    }

    #[test]
    fn test_operations_do_not_collide() {
        assert_ne!(CacheKey::article("x"), CacheKey::search("x"));
        assert_ne!(CacheKey::articles(Some(5)), CacheKey::search("5"));
        assert_ne!(CacheKey::articles(None), CacheKey::articles(Some(0)));
    }

    #[test]
    fn test_delimiter_in_value_does_not_alias() {
        // "search:a:b" can only come from keyword "a:b"
        let with_colon = CacheKey::search("a:b");
        assert_ne!(with_colon, CacheKey::search("a"));
        assert_ne!(with_colon, CacheKey::article("a:b"));
        assert_eq!(with_colon.as_str(), "search:a:b");

        // A title that looks like another key stays under its own operation
        assert_ne!(CacheKey::article("search:x"), CacheKey::search("x"));
    }

    #[test]
    fn test_negative_max() {
        assert_eq!(CacheKey::articles(Some(-1)).as_str(), "articles:-1");
    }
}
