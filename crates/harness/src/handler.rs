use std::fmt;

use http::Request;

use crate::sink::ResponseSink;

/// The generic handler contract every built router satisfies.
///
/// Dispatch is synchronous: the handler resolves the route, runs the mode handler and
/// writes into the sink before returning.
pub trait RequestHandler: Send + Sync {
    fn handle(&self, req: &Request<()>, sink: &mut dyn ResponseSink);
}

/// An opaque built router, owned by the case that requested it.
pub type BoxHandler = Box<dyn RequestHandler>;

impl<H: RequestHandler + ?Sized> RequestHandler for Box<H> {
    #[inline]
    fn handle(&self, req: &Request<()>, sink: &mut dyn ResponseSink) {
        (**self).handle(req, sink);
    }
}

pub struct FnHandler<F> {
    f: F,
}

impl<F> fmt::Debug for FnHandler<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHandler").finish_non_exhaustive()
    }
}

impl<F> RequestHandler for FnHandler<F>
where
    F: Fn(&Request<()>, &mut dyn ResponseSink) + Send + Sync,
{
    #[inline]
    fn handle(&self, req: &Request<()>, sink: &mut dyn ResponseSink) {
        (self.f)(req, sink);
    }
}

pub fn handler_fn<F>(f: F) -> FnHandler<F>
where
    F: Fn(&Request<()>, &mut dyn ResponseSink) + Send + Sync,
{
    FnHandler { f }
}
