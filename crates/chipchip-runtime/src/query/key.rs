use std::fmt;

use serde::Serialize;

/// Hierarchical cache key such as `["tweets"]` or `["tweets", "my"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// `["tweets"]`: the public timeline, and the prefix of every chirp list
    pub fn tweets() -> Self {
        Self::new(["tweets"])
    }

    /// `["tweets", "my"]`
    pub fn my_tweets() -> Self {
        Self::new(["tweets", "my"])
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Prefix match on whole segments. Every key starts with itself.
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_matches_whole_segments() {
        let tweets = QueryKey::tweets();
        let mine = QueryKey::my_tweets();
        let other = QueryKey::new(["tweetsx"]);

        assert!(tweets.starts_with(&tweets));
        assert!(mine.starts_with(&tweets));
        assert!(!tweets.starts_with(&mine));
        assert!(!other.starts_with(&tweets));
    }

    #[test]
    fn test_display() {
        assert_eq!(QueryKey::my_tweets().to_string(), "[tweets, my]");
    }
}
