use tracing::{debug, error};

use crate::error::BuildError;
use crate::handler::BoxHandler;
use crate::mode::Mode;
use crate::route::{ParamStyle, Route};

/// A uniform construction contract over one third-party router.
///
/// Implementors loop over the routes, rewrite each path into [`Adapter::param_style`]
/// and register [`Mode::handler`] with the router they wrap. Requests the router cannot
/// resolve answer `404 Not Found`.
#[cfg_attr(test, mockall::automock)]
pub trait Adapter: Send + Sync {
    /// Unique name, used as the registry key and benchmark id.
    fn name(&self) -> &'static str;

    fn param_style(&self) -> ParamStyle;

    fn try_build(&self, routes: &[Route], mode: Mode) -> Result<BoxHandler, BuildError>;

    /// Builds the router, aborting on any configuration error.
    ///
    /// # Panics
    ///
    /// When [`Adapter::try_build`] fails: an unknown method or a route the wrapped router
    /// rejects leaves nothing meaningful to measure.
    fn build(&self, routes: &[Route], mode: Mode) -> BoxHandler {
        debug!(adapter = self.name(), routes = routes.len(), %mode, "building router");
        match self.try_build(routes, mode) {
            Ok(handler) => handler,
            Err(e) => {
                error!(adapter = self.name(), cause = %e, "failed to build router");
                panic!("{} failed to build router: {e}", self.name());
            }
        }
    }
}
