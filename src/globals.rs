//! Ambient request state snapshot.
//!
//! The host captures method, URI, headers, and form fields once per
//! request-handling cycle; the snapshot stays read-only afterwards.

use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::core::headers::Headers;

/// Read-only snapshot of the host's request state.
#[derive(Clone, Debug)]
pub struct Globals {
    method: String,
    uri: String,
    headers: Headers,
    form: Vec<(String, String)>,
}

impl Globals {
    /// Snapshot a request line. Headers and form fields are attached with
    /// the `with_` modifiers.
    pub fn new(method: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            uri: uri.into(),
            headers: Headers::new(),
            form: Vec::new(),
        }
    }

    /// Attach a request header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let value: String = value.into();
        self.headers.insert(name, value);
        self
    }

    /// Attach a captured form field (the host's parsed request body).
    pub fn with_form_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.form.push((name.into(), value.into()));
        self
    }

    /// The request method, as captured.
    #[inline]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The request URI, as captured.
    #[inline]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The captured headers.
    #[inline]
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// The captured form fields, in capture order.
    #[inline]
    pub fn form_fields(&self) -> &[(String, String)] {
        &self.form
    }

    /// Form fields as a JSON mapping, for body-stream encoding.
    pub fn form_map(&self) -> Map<String, Value> {
        self.form
            .iter()
            .map(|(name, value)| (name.clone(), Value::String(value.clone())))
            .collect()
    }

    /// Query parameters parsed from the URI, percent-decoded.
    pub fn query_params(&self) -> Vec<(String, String)> {
        match self.uri.split_once('?') {
            Some((_, query)) => parse_query_string(query),
            None => Vec::new(),
        }
    }
}

/// Parse a query string into key-value pairs.
pub fn parse_query_string(query: &str) -> Vec<(String, String)> {
    let pair_count = query.matches('&').count() + 1;
    let mut params = Vec::with_capacity(pair_count.min(16));

    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }

        let (key, value) = match pair.find('=') {
            Some(pos) => (&pair[..pos], &pair[pos + 1..]),
            None => (pair, ""),
        };

        if !key.is_empty() {
            params.push((
                percent_decode(key).into_owned(),
                percent_decode(value).into_owned(),
            ));
        }
    }

    params
}

/// Percent decode, skipping the work when nothing is encoded.
fn percent_decode(s: &str) -> Cow<'_, str> {
    if s.contains('%') {
        Cow::Owned(
            percent_encoding::percent_decode_str(s)
                .decode_utf8_lossy()
                .into_owned(),
        )
    } else {
        Cow::Borrowed(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_params_parsed_and_decoded() {
        let globals = Globals::new("GET", "/page?name=J%C3%BCrgen&flag");
        let params = globals.query_params();

        assert_eq!(params.len(), 2);
        assert_eq!(params[0], ("name".to_string(), "Jürgen".to_string()));
        assert_eq!(params[1], ("flag".to_string(), String::new()));
    }

    #[test]
    fn test_no_query_string() {
        let globals = Globals::new("GET", "/page");
        assert!(globals.query_params().is_empty());
    }

    #[test]
    fn test_parse_query_string_skips_empty_pairs() {
        let params = parse_query_string("a=1&&=orphan&b=2");

        assert_eq!(params.len(), 2);
        assert_eq!(params[0], ("a".to_string(), "1".to_string()));
        assert_eq!(params[1], ("b".to_string(), "2".to_string()));
    }

    #[test]
    fn test_form_map() {
        let globals = Globals::new("POST", "/submit")
            .with_form_field("title", "hello")
            .with_form_field("count", "3");

        let map = globals.form_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map["title"], json!("hello"));
        assert_eq!(map["count"], json!("3"));
    }

    #[test]
    fn test_headers_captured() {
        let globals = Globals::new("GET", "/").with_header("Host", "example.test");
        assert!(globals.headers().contains("host"));
    }
}
