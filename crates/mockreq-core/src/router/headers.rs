//! Case-insensitive request headers and registration overrides.

use crate::config::options::MockOptions;
use crate::types::entry::UseLimit;

pub const CONTENT_TYPE: &str = "content-type";
pub const MOCK_METHOD: &str = "mock-method";
pub const MOCK_RESPONSE: &str = "mock-response";
pub const MOCK_LIMIT: &str = "mock-limit";

/// Request headers with lowercased names, in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestHeaders {
    pairs: Vec<(String, String)>,
}

impl RequestHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.pairs
            .push((name.as_ref().to_lowercase(), value.into()));
    }

    /// First value for `name`, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        let name = name.to_lowercase();
        self.pairs
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Headers whose name starts with `prefix`, with the prefix stripped.
    pub fn with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = (&'a str, &'a str)> {
        let prefix = prefix.to_lowercase();
        self.pairs.iter().filter_map(move |(k, v)| {
            k.strip_prefix(prefix.as_str())
                .filter(|name| !name.is_empty())
                .map(|name| (name, v.as_str()))
        })
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for RequestHeaders {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = RequestHeaders::new();
        for (k, v) in iter {
            headers.insert(k, v);
        }
        headers
    }
}

/// What a registration request asks for, after defaulting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationOverrides {
    pub method: String,
    pub status: u16,
    pub limit: UseLimit,
    pub headers: Vec<(String, String)>,
}

impl RegistrationOverrides {
    /// Read the override headers. Malformed values fall back to the option defaults.
    pub fn from_headers(headers: &RequestHeaders, options: &MockOptions) -> Self {
        let method = headers
            .get(MOCK_METHOD)
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(options.default_method.as_str())
            .to_owned();

        let status = headers
            .get(MOCK_RESPONSE)
            .and_then(|v| v.trim().parse::<u16>().ok())
            .filter(|s| (100..=999).contains(s))
            .unwrap_or(options.default_status);

        let limit = headers
            .get(MOCK_LIMIT)
            .and_then(|v| v.trim().parse::<u32>().ok())
            .map(UseLimit::from_count)
            .unwrap_or_else(|| UseLimit::from_count(options.default_limit));

        let mut response_headers = Vec::new();
        if let Some(content_type) = headers.get(CONTENT_TYPE) {
            response_headers.push((CONTENT_TYPE.to_owned(), content_type.to_owned()));
        }
        // A marked header replaces any earlier value for the same name.
        for (name, value) in headers.with_prefix(&options.header_prefix) {
            response_headers.retain(|(k, _)| k != name);
            response_headers.push((name.to_owned(), value.to_owned()));
        }

        Self {
            method,
            status,
            limit,
            headers: response_headers,
        }
    }
}
