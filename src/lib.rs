//! An in-process HTTP request router.
//!
//! Given a registered set of (method, path template, handler) triples, the
//! router resolves an incoming (method, URI) pair to a handler, extracts
//! named path parameters, and hands back the handler already wrapped in the
//! middleware chain that was in scope when it was registered. Transport
//! concerns (wire parsing, TLS, response encoding) belong to the process
//! that owns the listener; this crate is pure in-memory matching.
//!
//! ## Parameters
//!
//! Along with static routes, the router supports dynamic path segments:
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut router = trailhead::Router::new();
//!
//! // a required parameter, any non-empty value without `/`
//! router.map("GET", "/users/{id}", "user")?;
//!
//! // an optional parameter: matches `/page/` and `/page/13`, not `/page`
//! router.map("GET", "/page/{id?}", "page")?;
//!
//! // a trailing wildcard matches any suffix
//! router.map("GET", "/files/*", "files")?;
//!
//! let matched = router.resolve("GET", "/users/13")?;
//! assert_eq!(matched.params.get("id"), Some("13"));
//! # Ok(())
//! # }
//! ```
//!
//! A parameter can be constrained to a regular expression with
//! [`define`](Router::define); the constraint applies to every route
//! registered afterwards that uses the parameter name:
//!
//! ```rust
//! # use trailhead::MatchError;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut router = trailhead::Router::new();
//! router.define("id", "[0-9]+");
//! router.map("GET", "/products/{id}", "product")?;
//!
//! assert!(router.resolve("GET", "/products/13").is_ok());
//! assert_eq!(
//!     router.resolve("GET", "/products/abc").unwrap_err(),
//!     MatchError::NotFound,
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Priority
//!
//! At every tree position a literal segment beats a parameter, and an
//! earlier-registered parameter beats a later one, so registration order
//! never makes a static route unreachable:
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut router = trailhead::Router::new();
//! router.map("GET", "/{id}", "dynamic")?;
//! router.map("GET", "/page", "static")?;
//!
//! assert_eq!(*router.resolve("GET", "/page")?.route.handler(), "static");
//! assert_eq!(*router.resolve("GET", "/13")?.route.handler(), "dynamic");
//! # Ok(())
//! # }
//! ```
//!
//! ## Groups and middleware
//!
//! Routes can be registered under nested group scopes that accumulate a
//! path prefix and a middleware list. Middleware is any `Fn(T) -> T`
//! transform over the handler type; the first-declared middleware becomes
//! the outermost layer of the composed chain. See [`Router::group`] for a
//! complete example.
//!
//! ## Named routes
//!
//! A registered route can be named and its URL rebuilt from a parameter
//! map:
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut router = trailhead::Router::new();
//! router.map("GET", "/items/{id}", "item")?.set_name("item");
//!
//! assert_eq!(router.url_for("item", &[("id", "7")]), "/items/7");
//! assert_eq!(router.url_for("missing", &[]), "");
//! # Ok(())
//! # }
//! ```
#![deny(clippy::all)]
#![forbid(unsafe_code)]

mod error;
mod middleware;
mod params;
mod path;
mod pattern;
mod route;
mod router;
mod scope;
mod tree;

pub use error::{InsertError, MatchError};
pub use middleware::Middleware;
pub use params::{Params, ParamsIter};
pub use pattern::PatternSet;
pub use route::Route;
pub use router::{Matched, Registered, Router};
