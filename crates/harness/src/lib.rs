//! The uniform contract behind the route-bench router benchmarks.
//!
//! Dozens of independently written HTTP routers are compared by feeding them identical
//! route tables and firing identical requests at them. This crate holds everything that
//! is shared between the routers under test and the benchmark driver:
//!
//! - [`Route`] and [`Fixture`]: static `{method, path}` tables
//! - [`ParamStyle`]: colon (`/user/:name`) or brace (`/user/{name}`) parameters, with the
//!   textual rewrite between them
//! - [`Mode`]: the three synthetic handler behaviors (skip, write the `name` parameter,
//!   write the request path)
//! - [`ResponseSink`]: the write-only response target, [`DiscardSink`] for measurement
//!   and [`RecordingSink`] for correctness checks
//! - [`RequestHandler`]: what a built router looks like to the driver
//! - [`Adapter`] and [`Registry`]: how routers are built and enumerated
//!
//! # Example
//!
//! ```
//! use http::Request;
//! use route_bench::{handler_fn, Mode, RecordingSink, RequestHandler, ResponseSink};
//!
//! let mode = Mode::WritePath.handler();
//! let router = handler_fn(move |req: &Request<()>, sink: &mut dyn ResponseSink| mode(req, &(), sink));
//!
//! let mut sink = RecordingSink::new();
//! router.handle(&Request::get("/people/118051310819094153327").body(()).unwrap(), &mut sink);
//! assert_eq!(sink.body_str(), "/people/118051310819094153327");
//! ```
//!
//! # Error Handling
//!
//! Every error here is a configuration error made while setting up a benchmark:
//!
//! - [`BuildError`]: unknown method, or a route the wrapped router rejects
//! - [`RegistryError`]: empty or duplicate adapter name
//! - [`ModeError`]: unknown handler mode name
//!
//! The fallible forms return them; [`Adapter::build`] and [`Registry::register`] abort.

mod adapter;
mod error;
mod handler;
mod mode;
mod registry;
mod route;
mod sink;

mod utils;
pub(crate) use utils::ensure;

pub use adapter::Adapter;
pub use error::{BuildError, ModeError, RegistryError};
pub use handler::{handler_fn, BoxHandler, FnHandler, RequestHandler};
pub use mode::{Mode, ModeFn, ParamSource, QueryParams, PARAM_NAME};
pub use registry::{Registry, Snapshot};
pub use route::{param_names, Fixture, ParamStyle, Route};
pub use sink::{DiscardSink, RecordingSink, ResponseSink};
