//! Header mapping with original-casing keys and explicit value variants.

/// Value(s) held under a single header name.
///
/// Multi-value headers normalize to one comma-joined line at write time,
/// never to repeated header lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderValues {
    /// A single value.
    Single(String),
    /// An ordered sequence of values.
    Multi(Vec<String>),
}

impl HeaderValues {
    /// The textual form written to the wire.
    pub fn to_line(&self) -> String {
        match self {
            HeaderValues::Single(value) => value.clone(),
            HeaderValues::Multi(values) => values.join(","),
        }
    }

    /// Append one more value, promoting `Single` to `Multi`.
    pub fn push(&mut self, value: impl Into<String>) {
        match self {
            HeaderValues::Single(existing) => {
                *self = HeaderValues::Multi(vec![std::mem::take(existing), value.into()]);
            }
            HeaderValues::Multi(values) => values.push(value.into()),
        }
    }
}

impl From<String> for HeaderValues {
    fn from(value: String) -> Self {
        HeaderValues::Single(value)
    }
}

impl From<&str> for HeaderValues {
    fn from(value: &str) -> Self {
        HeaderValues::Single(value.to_string())
    }
}

impl From<Vec<String>> for HeaderValues {
    fn from(values: Vec<String>) -> Self {
        HeaderValues::Multi(values)
    }
}

/// Ordered header mapping.
///
/// Lookup is case-insensitive; the casing and position of the first
/// insertion are preserved on output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, HeaderValues)>,
}

impl Headers {
    /// Create an empty mapping.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of header names.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a header by name, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&HeaderValues> {
        self.position(name).map(|idx| &self.entries[idx].1)
    }

    /// Whether a header with this name exists, case-insensitively.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Insert a header, replacing the value of an existing
    /// case-insensitive match in place.
    pub fn insert(&mut self, name: impl Into<String>, values: impl Into<HeaderValues>) {
        let name = name.into();
        let values = values.into();
        match self.position(&name) {
            Some(idx) => self.entries[idx].1 = values,
            None => self.entries.push((name, values)),
        }
    }

    /// Append a value, extending an existing entry into a multi-value.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        match self.position(&name) {
            Some(idx) => self.entries[idx].1.push(value),
            None => self.entries.push((name, HeaderValues::Single(value.into()))),
        }
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HeaderValues)> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(key, _)| key.eq_ignore_ascii_case(name))
    }
}

impl<N: Into<String>, V: Into<HeaderValues>> FromIterator<(N, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (name, values) in iter {
            headers.insert(name, values);
        }
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_lookup() {
        let mut headers = Headers::new();
        headers.insert("Content-Type", "text/html");

        assert!(headers.contains("content-type"));
        assert!(headers.contains("CONTENT-TYPE"));
        assert_eq!(
            headers.get("content-type"),
            Some(&HeaderValues::Single("text/html".to_string()))
        );
        assert!(!headers.contains("content-length"));
    }

    #[test]
    fn test_insert_replaces_keeping_casing() {
        let mut headers = Headers::new();
        headers.insert("X-Custom", "one");
        headers.insert("x-custom", "two");

        assert_eq!(headers.len(), 1);
        let (name, values) = headers.iter().next().unwrap();
        assert_eq!(name, "X-Custom");
        assert_eq!(values.to_line(), "two");
    }

    #[test]
    fn test_append_promotes_to_multi() {
        let mut headers = Headers::new();
        headers.append("Vary", "Accept");
        headers.append("Vary", "Accept-Encoding");

        assert_eq!(
            headers.get("vary"),
            Some(&HeaderValues::Multi(vec![
                "Accept".to_string(),
                "Accept-Encoding".to_string()
            ]))
        );
        assert_eq!(headers.get("vary").unwrap().to_line(), "Accept,Accept-Encoding");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let headers: Headers = [("B", "2"), ("A", "1"), ("C", "3")]
            .into_iter()
            .collect();

        let names: Vec<&str> = headers.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_multi_from_vec() {
        let mut headers = Headers::new();
        headers.insert("Accept", vec!["text/html".to_string(), "text/plain".to_string()]);

        assert_eq!(headers.get("accept").unwrap().to_line(), "text/html,text/plain");
    }
}
