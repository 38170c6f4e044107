use std::fmt;

use crate::path::{PathSpec, Segment};

/// Index of a route in the router's arena of registered routes.
pub(crate) type RouteId = usize;

/// A registered route: method, effective path template, and the handler
/// chain produced by wrapping the registered handler in the middleware that
/// was in scope at registration time.
///
/// Routes are immutable once inserted; the only later mutation is naming
/// them through [`Registered::set_name`](crate::Registered::set_name).
pub struct Route<T> {
    method: String,
    path: String,
    name: Option<String>,
    spec: PathSpec,
    handler: T,
}

impl<T> Route<T> {
    pub(crate) fn new(method: String, path: String, spec: PathSpec, handler: T) -> Self {
        Self {
            method,
            path,
            name: None,
            spec,
            handler,
        }
    }

    /// The HTTP method this route was registered for.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The effective path template, group prefixes included.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The reverse-lookup name, if one was attached.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The composed handler chain.
    pub fn handler(&self) -> &T {
        &self.handler
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = Some(name);
    }

    pub(crate) fn spec(&self) -> &PathSpec {
        &self.spec
    }

    /// Substitutes the supplied values into the template's placeholders.
    /// Placeholders with no supplied value, and wildcards, become the empty
    /// string.
    pub(crate) fn url(&self, params: &[(&str, &str)]) -> String {
        let mut url = String::new();
        for segment in &self.spec.segments {
            url.push('/');
            match segment {
                Segment::Static(text) => url.push_str(text),
                Segment::Param { name, .. } => {
                    if let Some((_, value)) = params.iter().find(|(key, _)| key == name) {
                        url.push_str(value);
                    }
                }
                Segment::Wildcard => {}
            }
        }
        url
    }
}

impl<T> fmt::Debug for Route<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("name", &self.name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::compile;
    use crate::pattern::PatternSet;

    fn route(path: &str) -> Route<()> {
        let spec = compile(path, &PatternSet::new()).unwrap();
        Route::new("GET".into(), path.into(), spec, ())
    }

    #[test]
    fn url_for_root() {
        assert_eq!(route("/").url(&[]), "/");
    }

    #[test]
    fn url_substitutes_in_any_order() {
        let route = route("/multi/{one}/{two}");
        assert_eq!(route.url(&[("two", "33"), ("one", "13")]), "/multi/13/33");
    }

    #[test]
    fn url_missing_value_is_empty() {
        assert_eq!(route("/single/{id}").url(&[]), "/single/");
        assert_eq!(route("/page/{id?}").url(&[]), "/page/");
    }

    #[test]
    fn url_ignores_unknown_values() {
        assert_eq!(route("/items/{id}").url(&[("id", "7"), ("x", "1")]), "/items/7");
    }
}
