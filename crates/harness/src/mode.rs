//! The three synthetic handler behaviors every adapter can be built with.
//!
//! Adapters select a [`ModeFn`] once, at build time, and register it for every route;
//! on dispatch they hand it the request, whatever parameter carrier the wrapped router
//! produced (as a [`ParamSource`]) and the response sink.

use std::fmt;
use std::str::FromStr;

use http::Request;
use tracing::trace;

use crate::error::ModeError;
use crate::sink::ResponseSink;

/// The parameter read by [`Mode::WriteParameter`].
pub const PARAM_NAME: &str = "name";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Return immediately, no I/O.
    SkipData,
    /// Write the value of the `name` path parameter.
    WriteParameter,
    /// Write the request path.
    WritePath,
}

/// A mode handler, as registered with the wrapped router.
pub type ModeFn = fn(&Request<()>, &dyn ParamSource, &mut dyn ResponseSink);

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::SkipData, Mode::WriteParameter, Mode::WritePath];

    pub fn handler(self) -> ModeFn {
        match self {
            Mode::SkipData => skip_data,
            Mode::WriteParameter => write_parameter,
            Mode::WritePath => write_path,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::SkipData => "skip-data",
            Mode::WriteParameter => "write-parameter",
            Mode::WritePath => "write-path",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "skip" | "skip-data" => Ok(Mode::SkipData),
            "parameter" | "write-parameter" => Ok(Mode::WriteParameter),
            "path" | "write-path" => Ok(Mode::WritePath),
            _ => Err(ModeError::unknown(s)),
        }
    }
}

fn skip_data(_req: &Request<()>, _params: &dyn ParamSource, _sink: &mut dyn ResponseSink) {}

fn write_parameter(req: &Request<()>, params: &dyn ParamSource, sink: &mut dyn ResponseSink) {
    if let Some(value) = params.param(PARAM_NAME) {
        write_body(req, sink, value);
        return;
    }

    let query = QueryParams::from_request(req);
    if let Some(value) = query.param(PARAM_NAME) {
        write_body(req, sink, value);
    }
}

fn write_path(req: &Request<()>, _params: &dyn ParamSource, sink: &mut dyn ResponseSink) {
    write_body(req, sink, req.uri().path());
}

#[inline]
fn write_body(req: &Request<()>, sink: &mut dyn ResponseSink, body: &str) {
    if let Err(e) = sink.write(body.as_bytes()) {
        trace!(path = req.uri().path(), cause = %e, "response sink rejected body");
    }
}

/// Read access to the path parameters a router extracted.
pub trait ParamSource {
    fn param(&self, name: &str) -> Option<&str>;
}

/// No parameters at all.
impl ParamSource for () {
    #[inline]
    fn param(&self, _name: &str) -> Option<&str> {
        None
    }
}

impl ParamSource for &[(&str, &str)] {
    fn param(&self, name: &str) -> Option<&str> {
        self.iter().find(|(key, _)| *key == name).map(|(_, value)| *value)
    }
}

/// Parameters decoded from the request query string.
///
/// Routers that cannot extract path parameters themselves are expected to expose them
/// as query arguments, so this is the fallback of [`Mode::WriteParameter`].
#[derive(Debug, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn from_request<B>(req: &Request<B>) -> Self {
        req.uri().query().map(Self::parse).unwrap_or_default()
    }

    /// Decodes an `application/x-www-form-urlencoded` query; a decoding error yields no pairs.
    pub fn parse(query: &str) -> Self {
        let pairs = serde_urlencoded::from_str::<Vec<(String, String)>>(query).unwrap_or_default();
        Self { pairs }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl ParamSource for QueryParams {
    fn param(&self, name: &str) -> Option<&str> {
        self.pairs.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
    }
}
