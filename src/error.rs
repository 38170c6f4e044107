use thiserror::Error;

/// Represents errors that can occur when registering a new route.
///
/// A failed registration never inserts a partial route: the router is left
/// exactly as it was before the call.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InsertError {
    /// Route paths must begin with a `/`.
    #[error("route path `{path}` does not begin with `/`")]
    InvalidPath {
        /// The offending path template.
        path: String,
    },

    /// A segment mixes literal text with placeholder syntax, or contains a
    /// malformed placeholder such as `{`, `{}` or `{bad name}`.
    #[error("malformed segment `{segment}` in route path `{path}`")]
    MalformedSegment {
        /// The offending segment.
        segment: String,
        /// The full path template it appeared in.
        path: String,
    },

    /// The same parameter name appears more than once in one template.
    #[error("parameter `{{{name}}}` appears more than once in route path `{path}`")]
    DuplicateParameter {
        /// The repeated parameter name.
        name: String,
        /// The full path template it appeared in.
        path: String,
    },

    /// A constraint registered for a parameter is not a valid regular
    /// expression. Surfaces when a route using that parameter is compiled,
    /// not when the constraint is defined.
    #[error("invalid constraint `{pattern}` for parameter `{{{name}}}`")]
    InvalidConstraint {
        /// The parameter the constraint was registered for.
        name: String,
        /// The constraint source text.
        pattern: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// The whole-path matching expression failed to compile. This can only
    /// happen when a constraint interacts badly with the named capture
    /// groups the compiler emits (e.g. a constraint that itself declares a
    /// group named after a parameter).
    #[error("failed to compile matching expression for route path `{path}`")]
    InvalidExpression {
        /// The full path template.
        path: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// A wildcard segment is only allowed at the end of a route path.
    #[error("wildcard segment must be the final segment of route path `{path}`")]
    InvalidWildcard {
        /// The full path template.
        path: String,
    },
}

impl PartialEq for InsertError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidPath { path: a }, Self::InvalidPath { path: b }) => a == b,
            (
                Self::MalformedSegment { segment: a, path: ap },
                Self::MalformedSegment { segment: b, path: bp },
            ) => a == b && ap == bp,
            (
                Self::DuplicateParameter { name: a, path: ap },
                Self::DuplicateParameter { name: b, path: bp },
            ) => a == b && ap == bp,
            (
                Self::InvalidConstraint { name: a, pattern: ap, .. },
                Self::InvalidConstraint { name: b, pattern: bp, .. },
            ) => a == b && ap == bp,
            (Self::InvalidExpression { path: a, .. }, Self::InvalidExpression { path: b, .. }) => {
                a == b
            }
            (Self::InvalidWildcard { path: a }, Self::InvalidWildcard { path: b }) => a == b,
            _ => false,
        }
    }
}

/// A failed match attempt.
///
/// ```
/// use trailhead::{MatchError, Router};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut router = Router::new();
/// router.map("GET", "/home", "Welcome!")?;
///
/// // no routes match
/// if let Err(err) = router.resolve("GET", "/foobar") {
///     assert_eq!(err, MatchError::NotFound);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy, Error)]
pub enum MatchError {
    /// No matching route was found.
    ///
    /// This is the expected "no match" outcome, not a fault; the caller is
    /// expected to turn it into its own 404-equivalent response.
    #[error("matching route not found")]
    NotFound,
}
