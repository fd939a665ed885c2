//! Navigable location carrying the sort state.
//!
//! The active sort key lives in the `sort` query parameter so a view can be
//! shared or bookmarked. The default key is represented by the absence of
//! the parameter.

use std::fmt;

use url::{ParseError, Position, Url};

use super::sort::SortKey;

/// Query parameter holding the sort key.
pub const SORT_PARAM: &str = "sort";

/// A URL whose query reflects the standings view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    url: Url,
}

impl Location {
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    /// Parse a full URL, or a relative reference such as `?sort=total`
    /// resolved against `base`.
    pub fn parse(input: &str, base: &Url) -> Result<Self, ParseError> {
        let url = match Url::parse(input) {
            Ok(url) => url,
            Err(ParseError::RelativeUrlWithoutBase) => base.join(input)?,
            Err(e) => return Err(e),
        };
        Ok(Self { url })
    }

    /// First value of a query parameter.
    pub fn param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }

    /// Sort key selected by this location. Unrecognized values fall back
    /// to the default key.
    pub fn sort_key(&self) -> SortKey {
        SortKey::from_query(self.param(SORT_PARAM).as_deref())
    }

    /// Location with `name` set to `value`, or removed when `value` is
    /// `None`. Other parameters keep their order.
    pub fn with_param(&self, name: &str, value: Option<&str>) -> Self {
        let mut pairs: Vec<(String, String)> = self
            .url
            .query_pairs()
            .filter(|(k, _)| k != name)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        if let Some(value) = value {
            pairs.push((name.to_string(), value.to_string()));
        }

        let mut url = self.url.clone();
        if pairs.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(pairs);
        }
        Self { url }
    }

    /// Location reflecting `key`.
    pub fn with_sort(&self, key: SortKey) -> Self {
        if key == SortKey::default() {
            self.with_param(SORT_PARAM, None)
        } else {
            self.with_param(SORT_PARAM, Some(key.as_str()))
        }
    }

    /// Path and query only, for in-page links.
    pub fn relative(&self) -> &str {
        &self.url[Position::BeforePath..Position::AfterQuery]
    }

    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("http://localhost:3000/").unwrap()
    }

    #[test]
    fn test_parse_full_url() {
        let loc = Location::parse("http://example.com/standings?sort=total", &base()).unwrap();
        assert_eq!(loc.sort_key(), SortKey::Total);
        assert_eq!(loc.url().host_str(), Some("example.com"));
    }

    #[test]
    fn test_parse_relative_query() {
        let loc = Location::parse("?sort=bronze", &base()).unwrap();
        assert_eq!(loc.as_str(), "http://localhost:3000/?sort=bronze");
        assert_eq!(loc.sort_key(), SortKey::Bronze);
    }

    #[test]
    fn test_missing_or_invalid_sort_is_gold() {
        let loc = Location::new(base());
        assert_eq!(loc.sort_key(), SortKey::Gold);

        let loc = Location::parse("?sort=medals", &base()).unwrap();
        assert_eq!(loc.sort_key(), SortKey::Gold);
    }

    #[test]
    fn test_with_sort_sets_param() {
        let loc = Location::new(base()).with_sort(SortKey::Silver);
        assert_eq!(loc.as_str(), "http://localhost:3000/?sort=silver");
        assert_eq!(loc.relative(), "/?sort=silver");
    }

    #[test]
    fn test_with_default_sort_removes_param() {
        let loc = Location::parse("?sort=total", &base()).unwrap().with_sort(SortKey::Gold);
        assert_eq!(loc.as_str(), "http://localhost:3000/");
        assert_eq!(loc.relative(), "/");
    }

    #[test]
    fn test_with_sort_preserves_other_params() {
        let loc = Location::parse("?theme=dark&sort=total", &base())
            .unwrap()
            .with_sort(SortKey::Bronze);
        assert_eq!(loc.relative(), "/?theme=dark&sort=bronze");

        let loc = loc.with_sort(SortKey::Gold);
        assert_eq!(loc.relative(), "/?theme=dark");
        assert_eq!(loc.param("theme").as_deref(), Some("dark"));
    }
}
