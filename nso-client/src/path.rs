//! Resource paths and query parameters.

use std::fmt::{Display, Formatter};

use url::Url;

/// Ordered list of path segments below a datastore.
///
/// Segments are joined with `/` as they are: nothing is escaped or validated,
/// so list keys such as `tenant,name,esc` or prefixed nodes such as
/// `nfvo-esc:esc` go through untouched.
///
/// ```
/// use nso_client::DataPath;
///
/// let path = DataPath::from(["nfvo", "vnfd"]).with("my-vnfd");
/// assert_eq!(path.to_string(), "nfvo/vnfd/my-vnfd");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataPath(Vec<String>);

impl DataPath {
    /// An empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: impl Into<String>) {
        self.0.push(segment.into());
    }

    /// Returns the path extended with one more segment.
    pub fn with(mut self, segment: impl Into<String>) -> Self {
        self.push(segment);
        self
    }

    /// Path segments in order.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// True when the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The segments joined with `/`.
    pub fn join(&self) -> String {
        self.0.join("/")
    }
}

impl Display for DataPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.join())
    }
}

impl<S: AsRef<str>> From<&[S]> for DataPath {
    fn from(value: &[S]) -> Self {
        value.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for DataPath {
    fn from(value: [S; N]) -> Self {
        value.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

impl<S: AsRef<str>, const N: usize> From<&[S; N]> for DataPath {
    fn from(value: &[S; N]) -> Self {
        value.iter().map(|s| s.as_ref().to_string()).collect()
    }
}

impl From<Vec<String>> for DataPath {
    fn from(value: Vec<String>) -> Self {
        Self(value)
    }
}

impl<S: Into<String>> FromIterator<S> for DataPath {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Param {
    Flag(String),
    Pair(String, String),
}

/// Query parameters appended to a request URL.
///
/// NSO takes both key-only flags (`?deep`) and key/value pairs
/// (`?limit=10`). Parameters keep their insertion order.
///
/// ```
/// use nso_client::Params;
///
/// let params = Params::new().flag("deep").with("limit", "10");
/// assert_eq!(params.to_string(), "deep&limit=10");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<Param>);

impl Params {
    /// No parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a key-only parameter.
    pub fn flag(mut self, key: impl Into<String>) -> Self {
        self.0.push(Param::Flag(key.into()));
        self
    }

    /// Adds a `key=value` parameter.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.push(Param::Pair(key.into(), value.into()));
        self
    }

    /// True when there is nothing to append.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn apply(&self, url: &mut Url) {
        if self.is_empty() {
            return;
        }
        let mut query = url.query_pairs_mut();
        for param in &self.0 {
            match param {
                Param::Flag(key) => query.append_key_only(key),
                Param::Pair(key, value) => query.append_pair(key, value),
            };
        }
    }
}

impl Display for Params {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for param in &self.0 {
            match param {
                Param::Flag(key) => serializer.append_key_only(key),
                Param::Pair(key, value) => serializer.append_pair(key, value),
            };
        }
        f.write_str(&serializer.finish())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn joins_segments_without_escaping() {
        let path = DataPath::from([
            "nfvo",
            "vnfr",
            "nfvo-esc:esc",
            "vnf-deployment",
            "t1,dep1,esc1",
        ]);
        assert_eq!(
            path.join(),
            "nfvo/vnfr/nfvo-esc:esc/vnf-deployment/t1,dep1,esc1"
        );
    }

    #[test]
    fn builds_from_any_sequence() {
        let from_slice = DataPath::from(&["a", "b"][..]);
        let from_vec = DataPath::from(vec!["a".to_string(), "b".to_string()]);
        let from_iter: DataPath = "a/b".split('/').collect();
        let pushed = DataPath::new().with("a").with("b");

        assert_eq!(from_slice, from_vec);
        assert_eq!(from_vec, from_iter);
        assert_eq!(from_iter, pushed);
        assert_eq!(pushed.segments(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn empty_path() {
        let path = DataPath::new();
        assert!(path.is_empty());
        assert_eq!(path.join(), "");
    }

    #[test]
    fn params_are_applied_in_order() {
        let mut url = Url::parse("http://localhost:8080/api/running").unwrap();
        Params::new()
            .flag("deep")
            .with("limit", "10")
            .apply(&mut url);
        assert_eq!(url.query(), Some("deep&limit=10"));
    }

    #[test]
    fn empty_params_leave_the_url_untouched() {
        let mut url = Url::parse("http://localhost:8080/api/running").unwrap();
        Params::new().apply(&mut url);
        assert_eq!(url.as_str(), "http://localhost:8080/api/running");
    }
}
