use http::Request;
use route_bench::{Adapter, BoxHandler, BuildError, Mode, ParamStyle, Route};

use crate::driver;

/// A single-route router fed a single request.
#[derive(Debug, Copy, Clone)]
pub struct MicroCase {
    name: &'static str,
    mode: Mode,
    colon: &'static str,
    brace: &'static str,
    url: &'static str,
}

impl MicroCase {
    pub const fn new(name: &'static str, mode: Mode, colon: &'static str, brace: &'static str, url: &'static str) -> Self {
        Self { name, mode, colon, brace, url }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn url(&self) -> &'static str {
        self.url
    }

    /// The route pattern in the syntax of the given style.
    pub fn matcher(&self, style: ParamStyle) -> &'static str {
        match style {
            ParamStyle::Colon => self.colon,
            ParamStyle::Brace => self.brace,
        }
    }

    pub fn route(&self, style: ParamStyle) -> Route {
        Route::get(self.matcher(style))
    }

    /// A single-route router in this case's mode, using the adapter's parameter syntax.
    pub fn build(&self, adapter: &dyn Adapter) -> BoxHandler {
        adapter.build(&[self.route(adapter.param_style())], self.mode)
    }

    pub fn request(&self) -> Result<Request<()>, BuildError> {
        driver::request(&Route::get(self.url))
    }
}

const FIVE_COLON: &str = "/:a/:b/:c/:d/:e";
const FIVE_BRACE: &str = "/{a}/{b}/{c}/{d}/{e}";
const FIVE_ROUTE: &str = "/a/b/c/d/e";

const TWENTY_COLON: &str = "/:a/:b/:c/:d/:e/:f/:g/:h/:i/:j/:k/:l/:m/:n/:o/:p/:q/:r/:s/:t";
const TWENTY_BRACE: &str = "/{a}/{b}/{c}/{d}/{e}/{f}/{g}/{h}/{i}/{j}/{k}/{l}/{m}/{n}/{o}/{p}/{q}/{r}/{s}/{t}";
const TWENTY_ROUTE: &str = "/a/b/c/d/e/f/g/h/i/j/k/l/m/n/o/p/q/r/s/t";

/// The value [`PARAM_WRITE`] must answer with.
pub const PARAM_VALUE: &str = "gordon";

/// The write case doubles as the parameter-mode correctness check.
pub const PARAM_WRITE: MicroCase =
    MicroCase::new("param/write", Mode::WriteParameter, "/user/:name", "/user/{name}", "/user/gordon");

pub static MICRO_CASES: [MicroCase; 4] = [
    MicroCase::new("param/1", Mode::SkipData, "/user/:name", "/user/{name}", "/user/gordon"),
    MicroCase::new("param/5", Mode::SkipData, FIVE_COLON, FIVE_BRACE, FIVE_ROUTE),
    MicroCase::new("param/20", Mode::SkipData, TWENTY_COLON, TWENTY_BRACE, TWENTY_ROUTE),
    PARAM_WRITE,
];

/// One request fired at a router built from a whole fixture.
#[derive(Debug, Copy, Clone)]
pub struct BenchCase {
    pub name: &'static str,
    pub method: &'static str,
    pub url: &'static str,
}

impl BenchCase {
    pub fn request(&self) -> Result<Request<()>, BuildError> {
        driver::request(&Route::new(self.method, self.url))
    }
}

const fn get(name: &'static str, url: &'static str) -> BenchCase {
    BenchCase { name, method: "GET", url }
}

pub static GITHUB_CASES: [BenchCase; 2] =
    [get("static", "/user/repos"), get("param", "/repos/julienschmidt/httprouter/stargazers")];

pub static GPLUS_CASES: [BenchCase; 3] = [
    get("static", "/people"),
    get("param/1", "/people/118051310819094153327"),
    get("param/2", "/people/118051310819094153327/activities/123456789"),
];

pub static PARSE_CASES: [BenchCase; 3] =
    [get("static", "/1/users"), get("param/1", "/1/classes/go"), get("param/2", "/1/classes/go/123456789")];
