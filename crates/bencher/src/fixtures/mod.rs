//! Real-world route tables.
//!
//! All fixtures are written in the colon convention and contain no duplicate
//! `(method, path)` pairs.

mod github;
mod gplus;
mod parse;
mod static_files;

use route_bench::Fixture;

pub use github::GITHUB_API;
pub use gplus::GPLUS_API;
pub use parse::PARSE_API;
pub use static_files::STATIC_ROUTES;

pub fn all_fixtures() -> [&'static Fixture; 4] {
    [&STATIC_ROUTES, &GITHUB_API, &GPLUS_API, &PARSE_API]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fixture_sizes() {
        assert_eq!(GITHUB_API.len(), 203);
        assert_eq!(GPLUS_API.len(), 13);
        assert_eq!(PARSE_API.len(), 26);
        assert_eq!(STATIC_ROUTES.len(), 157);
    }

    #[test]
    fn routes_are_unique_and_valid() {
        for fixture in all_fixtures() {
            let mut seen = HashSet::new();
            for route in fixture.iter() {
                assert!(route.http_method().is_ok(), "{} in {}", route, fixture.name());
                assert!(route.path().starts_with('/'), "{} in {}", route, fixture.name());
                assert!(seen.insert(*route), "duplicate {} in {}", route, fixture.name());
            }
        }
    }

    #[test]
    fn static_fixture_has_no_params() {
        assert!(STATIC_ROUTES.iter().all(|route| !route.path().contains(':')));
    }
}
