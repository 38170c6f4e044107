use std::collections::HashMap;
use std::fmt;

use crate::error::{InsertError, MatchError};
use crate::middleware::{compose, Middleware};
use crate::params::Params;
use crate::path;
use crate::pattern::PatternSet;
use crate::route::{Route, RouteId};
use crate::scope::ScopeStack;
use crate::tree::Tree;

/// An HTTP request router.
///
/// Routes are registered as (method, path template, handler) triples, with
/// optional parameter constraints, nested group scopes, and middleware. An
/// incoming (method, URI) pair resolves to the registered route with its
/// extracted path parameters, or to [`MatchError::NotFound`].
///
/// The router is generic over the handler type `T`; it never invokes a
/// handler itself, it only composes and returns them. Middleware wraps
/// handlers at registration time, so a resolved route already carries its
/// full chain.
///
/// Registration runs on one thread; once it ends, every lookup method takes
/// `&self` and the router can be shared freely across concurrent callers.
///
/// ```
/// use std::sync::Arc;
/// use trailhead::{Middleware, Router};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// type Handler = Box<dyn Fn() -> String + Send + Sync>;
///
/// let mut router: Router<Handler> = Router::new();
/// router.define("id", "[0-9]+");
///
/// let logging: Middleware<Handler> = Arc::new(|next: Handler| -> Handler {
///     Box::new(move || format!("logged: {}", next()))
/// });
///
/// router.group("/api", vec![logging], |r| {
///     r.get("/users/{id}", Box::new(|| "user".to_string()))?;
///     Ok(())
/// })?;
///
/// let matched = router.resolve("GET", "/api/users/13")?;
/// assert_eq!(matched.params.get("id"), Some("13"));
/// assert_eq!((matched.route.handler())(), "logged: user");
/// # Ok(())
/// # }
/// ```
pub struct Router<T> {
    routes: Vec<Route<T>>,
    tree: Tree,
    names: HashMap<String, RouteId>,
    patterns: PatternSet,
    scope: ScopeStack<T>,
}

/// A successful match: the resolved route and its extracted parameters.
#[derive(Debug)]
pub struct Matched<'r, 'p, T> {
    /// The registered route the URI resolved to.
    pub route: &'r Route<T>,
    /// The extracted path parameters. Keys borrow from the route, values
    /// from the resolved URI.
    pub params: Params<'r, 'p>,
}

impl<T> Router<T> {
    /// Creates an empty router.
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            tree: Tree::new(),
            names: HashMap::new(),
            patterns: PatternSet::new(),
            scope: ScopeStack::new(),
        }
    }

    /// Assigns a regular-expression constraint to a route parameter.
    ///
    /// The constraint applies to every route registered afterwards that
    /// uses `{name}`; routes registered earlier keep the constraint they
    /// were compiled with. An invalid pattern surfaces as
    /// [`InsertError::InvalidConstraint`] from the next registration that
    /// uses it.
    pub fn define(&mut self, name: impl Into<String>, pattern: impl Into<String>) {
        let (name, pattern) = (name.into(), pattern.into());
        tracing::debug!(name = %name, pattern = %pattern, "defined parameter constraint");
        self.patterns.define(name, pattern);
    }

    /// Registers a route for `method` and `path`, returning a handle that
    /// can attach a reverse-lookup name to it.
    ///
    /// The path inherits the prefix and middleware of the active group
    /// scope. Registering an identical method and path again replaces the
    /// earlier route. On error, nothing is inserted.
    pub fn map(
        &mut self,
        method: &str,
        path: &str,
        handler: T,
    ) -> Result<Registered<'_, T>, InsertError> {
        let full = format!("{}{}", self.scope.prefix(), path);
        let spec = path::compile(&full, &self.patterns)?;
        let chain = compose(handler, self.scope.middleware());

        let id = self.routes.len();
        self.routes.push(Route::new(method.to_owned(), full, spec, chain));

        let segments = &self.routes[id].spec().segments;
        if let Some(previous) = self.tree.insert(method, segments, id) {
            tracing::debug!(
                method,
                path = self.routes[id].path(),
                previous,
                "replaced identical route"
            );
        }
        tracing::debug!(method, path = self.routes[id].path(), "registered route");

        Ok(Registered { router: self, id })
    }

    /// Registers a GET route.
    pub fn get(&mut self, path: &str, handler: T) -> Result<Registered<'_, T>, InsertError> {
        self.map("GET", path, handler)
    }

    /// Registers a POST route.
    pub fn post(&mut self, path: &str, handler: T) -> Result<Registered<'_, T>, InsertError> {
        self.map("POST", path, handler)
    }

    /// Registers a PUT route.
    pub fn put(&mut self, path: &str, handler: T) -> Result<Registered<'_, T>, InsertError> {
        self.map("PUT", path, handler)
    }

    /// Registers a PATCH route.
    pub fn patch(&mut self, path: &str, handler: T) -> Result<Registered<'_, T>, InsertError> {
        self.map("PATCH", path, handler)
    }

    /// Registers a DELETE route.
    pub fn delete(&mut self, path: &str, handler: T) -> Result<Registered<'_, T>, InsertError> {
        self.map("DELETE", path, handler)
    }

    /// Registers a HEAD route.
    pub fn head(&mut self, path: &str, handler: T) -> Result<Registered<'_, T>, InsertError> {
        self.map("HEAD", path, handler)
    }

    /// Registers an OPTIONS route.
    pub fn options(&mut self, path: &str, handler: T) -> Result<Registered<'_, T>, InsertError> {
        self.map("OPTIONS", path, handler)
    }

    /// Runs `body` with the scope extended by `prefix` and `middleware`,
    /// then restores the previous scope.
    ///
    /// Scopes nest: an inner group inherits and extends the prefix and
    /// middleware of its parent without affecting sibling scopes.
    pub fn group<F>(
        &mut self,
        prefix: &str,
        middleware: Vec<Middleware<T>>,
        body: F,
    ) -> Result<(), InsertError>
    where
        F: FnOnce(&mut Self) -> Result<(), InsertError>,
    {
        self.scope.enter(prefix, middleware);
        let result = body(self);
        self.scope.exit();
        result
    }

    /// A [`group`](Self::group) carrying only a path prefix.
    pub fn with_prefix<F>(&mut self, prefix: &str, body: F) -> Result<(), InsertError>
    where
        F: FnOnce(&mut Self) -> Result<(), InsertError>,
    {
        self.group(prefix, Vec::new(), body)
    }

    /// A [`group`](Self::group) carrying only one middleware.
    pub fn with_middleware<F>(
        &mut self,
        middleware: Middleware<T>,
        body: F,
    ) -> Result<(), InsertError>
    where
        F: FnOnce(&mut Self) -> Result<(), InsertError>,
    {
        self.group("", vec![middleware], body)
    }

    /// A [`group`](Self::group) carrying only middleware.
    pub fn with_middlewares<F>(
        &mut self,
        middleware: Vec<Middleware<T>>,
        body: F,
    ) -> Result<(), InsertError>
    where
        F: FnOnce(&mut Self) -> Result<(), InsertError>,
    {
        self.group("", middleware, body)
    }

    /// Prepends `prefix` to every route registered from here on in the
    /// active scope. Unlike [`group`](Self::group), the extension is not
    /// restored.
    pub fn add_prefix(&mut self, prefix: &str) {
        self.scope.extend(prefix, Vec::new());
    }

    /// Adds a middleware to every route registered from here on in the
    /// active scope.
    pub fn add_middleware(&mut self, middleware: Middleware<T>) {
        self.scope.extend("", vec![middleware]);
    }

    /// Adds a set of middleware to every route registered from here on in
    /// the active scope.
    pub fn add_middlewares(&mut self, middleware: Vec<Middleware<T>>) {
        self.scope.extend("", middleware);
    }

    /// Resolves `method` and `path` to a registered route and its path
    /// parameters.
    ///
    /// At each tree position, a literal match is preferred over parameter
    /// children, parameter children are tried in registration order, and a
    /// trailing wildcard matches last.
    pub fn resolve<'p>(
        &self,
        method: &str,
        path: &'p str,
    ) -> Result<Matched<'_, 'p, T>, MatchError> {
        let Some(id) = self.tree.find(method, path) else {
            tracing::trace!(method, path, "no matching route");
            return Err(MatchError::NotFound);
        };

        let route = &self.routes[id];
        Ok(Matched {
            route,
            params: route.spec().extract(path),
        })
    }

    /// Builds the URL of the named route, substituting `params` into its
    /// placeholders. Unresolved placeholders become the empty string, and
    /// an unknown name yields an empty URL rather than an error, since URL
    /// generation typically runs while rendering a response.
    pub fn url_for(&self, name: &str, params: &[(&str, &str)]) -> String {
        match self.names.get(name) {
            Some(&id) => self.routes[id].url(params),
            None => {
                tracing::debug!(name, "unknown route name");
                String::new()
            }
        }
    }
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A handle to a just-registered route, returned by
/// [`Router::map`](Router::map) and the per-method helpers.
pub struct Registered<'r, T> {
    router: &'r mut Router<T>,
    id: RouteId,
}

impl<T> Registered<'_, T> {
    /// Attaches a reverse-lookup name to the route for
    /// [`Router::url_for`](Router::url_for). Assigning a name that is
    /// already taken moves it: the last assignment wins.
    pub fn set_name(self, name: impl Into<String>) {
        let name = name.into();
        self.router.routes[self.id].set_name(name.clone());
        if let Some(previous) = self.router.names.insert(name, self.id) {
            tracing::debug!(previous, "route name reassigned");
        }
    }

    /// The route that was just registered.
    pub fn route(&self) -> &Route<T> {
        &self.router.routes[self.id]
    }
}

impl<T> fmt::Debug for Registered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registered").field("route", self.route()).finish()
    }
}
