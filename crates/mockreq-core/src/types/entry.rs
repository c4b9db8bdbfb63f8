//! Mock entry types.

use bytes::Bytes;

/// Canned response written back for a served mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockResponse {
    /// HTTP status code (100-999)
    pub status: u16,
    /// Response headers, in registration order
    pub headers: Vec<(String, String)>,
    /// Raw response body
    pub body: Bytes,
}

impl MockResponse {
    pub fn new(status: u16, headers: Vec<(String, String)>, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Empty `200` response used by the control endpoints.
    pub fn ok() -> Self {
        Self::new(200, Vec::new(), Bytes::new())
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// How many more requests an entry may answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseLimit {
    /// Entry expires after this many more requests (always >= 1 while live)
    Remaining(u32),
    /// Entry never expires on its own
    Unlimited,
}

impl UseLimit {
    /// Map a requested use count onto a limit: `0` means unlimited.
    pub fn from_count(count: u32) -> Self {
        if count == 0 {
            UseLimit::Unlimited
        } else {
            UseLimit::Remaining(count)
        }
    }

    /// Record one use. Returns `true` once the entry is exhausted.
    fn record_use(&mut self) -> bool {
        match self {
            UseLimit::Remaining(n) => {
                *n = n.saturating_sub(1);
                *n == 0
            }
            UseLimit::Unlimited => false,
        }
    }
}

/// One queued canned response with its remaining use count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockEntry {
    pub response: MockResponse,
    pub remaining: UseLimit,
}

impl MockEntry {
    pub fn new(response: MockResponse, remaining: UseLimit) -> Self {
        Self {
            response,
            remaining,
        }
    }

    /// Serve the entry once.
    ///
    /// Returns the response as it was before the use was recorded, and whether
    /// the entry is now exhausted.
    pub fn serve(&mut self) -> (MockResponse, bool) {
        let snapshot = self.response.clone();
        let exhausted = self.remaining.record_use();
        (snapshot, exhausted)
    }
}
