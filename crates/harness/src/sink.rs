//! Write-only stand-ins for an HTTP response.
//!
//! Routers write into a [`ResponseSink`] instead of a socket: benchmarks use the
//! stateless [`DiscardSink`], correctness tests use [`RecordingSink`].

use std::io;

use bytes::BytesMut;
use http::{HeaderMap, StatusCode};

pub trait ResponseSink {
    /// Response headers; a sink is free to hand out a map it never reads.
    fn headers_mut(&mut self) -> &mut HeaderMap;

    fn write(&mut self, buf: &[u8]) -> io::Result<usize>;

    fn set_status(&mut self, status: StatusCode);
}

/// Discards everything written to it without retaining any buffer.
#[derive(Debug, Default)]
pub struct DiscardSink {
    headers: HeaderMap,
}

impl DiscardSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResponseSink for DiscardSink {
    #[inline]
    fn headers_mut(&mut self) -> &mut HeaderMap {
        // an empty map never allocates, clearing keeps it that way
        self.headers.clear();
        &mut self.headers
    }

    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    #[inline]
    fn set_status(&mut self, _status: StatusCode) {}
}

/// Records status, headers and body, starting from `200 OK`.
#[derive(Debug)]
pub struct RecordingSink {
    status: StatusCode,
    headers: HeaderMap,
    body: BytesMut,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self { status: StatusCode::OK, headers: HeaderMap::new(), body: BytesMut::new() }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The body as text, with invalid UTF-8 replaced.
    pub fn body_str(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Returns the sink to its initial state, keeping the body allocation.
    pub fn reset(&mut self) {
        self.status = StatusCode::OK;
        self.headers.clear();
        self.body.clear();
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseSink for RecordingSink {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.body.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn discard_reports_full_length() {
        let mut sink = DiscardSink::new();
        assert_eq!(sink.write(b"/user/gordon").unwrap(), 12);

        sink.headers_mut().insert(http::header::CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        assert!(sink.headers_mut().is_empty());
    }

    #[test]
    fn recording_collects_body() {
        let mut sink = RecordingSink::new();
        sink.write(b"/1/classes/").unwrap();
        sink.write(b"go").unwrap();

        assert_eq!(sink.status(), StatusCode::OK);
        assert_eq!(sink.body_str(), "/1/classes/go");
    }

    #[test]
    fn recording_reset() {
        let mut sink = RecordingSink::new();
        sink.set_status(StatusCode::NOT_FOUND);
        sink.headers_mut().insert(http::header::CONTENT_LENGTH, HeaderValue::from(3));
        sink.write(b"404").unwrap();

        sink.reset();

        assert_eq!(sink.status(), StatusCode::OK);
        assert!(sink.headers().is_empty());
        assert!(sink.body().is_empty());
    }
}
