//! HTTP transport types for the host-does-IO pattern.
//!
//! The client builds an `HttpRequest` and parses an `HttpResponse`; whoever
//! holds a [`Transport`](crate::Transport) performs the round-trip in between.
//! Every request the client makes is a GET, so no method field is carried.

/// An outgoing GET request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Absolute URL including the query string.
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Whether the status falls in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
