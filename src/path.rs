use regex::Regex;

use crate::error::InsertError;
use crate::params::Params;
use crate::pattern::PatternSet;

/// The constraint applied to a placeholder with no registered pattern:
/// one or more characters excluding `/`, non-greedy.
const DEFAULT_CONSTRAINT: &str = "[^/]+?";

/// One `/`-delimited unit of a compiled path template.
#[derive(Debug, Clone)]
pub(crate) enum Segment {
    /// Literal text, matched verbatim.
    Static(String),
    /// A named placeholder, written `{name}` or `{name?}`.
    Param {
        name: String,
        optional: bool,
        constraint: Option<Constraint>,
    },
    /// A trailing `*`, matching any remaining suffix of the path.
    Wildcard,
}

/// A compiled per-segment constraint.
///
/// The regex is anchored over the whole segment value. The source is kept
/// so that node identity in the tree can distinguish two revisions of the
/// same parameter name.
#[derive(Debug, Clone)]
pub(crate) struct Constraint {
    pub(crate) source: String,
    regex: Regex,
}

impl Constraint {
    fn compile(name: &str, source: &str) -> Result<Self, InsertError> {
        let regex = Regex::new(&format!("^(?:{source})$")).map_err(|err| {
            InsertError::InvalidConstraint {
                name: name.to_owned(),
                pattern: source.to_owned(),
                source: err,
            }
        })?;

        Ok(Self {
            source: source.to_owned(),
            regex,
        })
    }

    pub(crate) fn matches(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

impl Segment {
    /// Whether this segment accepts the given path-segment value.
    ///
    /// An optional placeholder accepts the empty value unconditionally; a
    /// required one delegates to its constraint, or to the default
    /// non-empty check when no constraint is registered.
    pub(crate) fn accepts(&self, value: &str) -> bool {
        match self {
            Segment::Static(text) => text == value,
            Segment::Param {
                optional,
                constraint,
                ..
            } => {
                if value.is_empty() && *optional {
                    return true;
                }
                match constraint {
                    Some(constraint) => constraint.matches(value),
                    None => !value.is_empty(),
                }
            }
            Segment::Wildcard => true,
        }
    }

    pub(crate) fn is_static(&self) -> bool {
        matches!(self, Segment::Static(_))
    }

    pub(crate) fn is_wildcard(&self) -> bool {
        matches!(self, Segment::Wildcard)
    }
}

// Node identity in the tree: two segments share a node only if they mean
// the same thing, including the constraint source. Redefining a pattern
// between registrations therefore forks a sibling node instead of changing
// the behavior of routes compiled earlier.
impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Segment::Static(a), Segment::Static(b)) => a == b,
            (
                Segment::Param {
                    name: a,
                    optional: ao,
                    constraint: ac,
                },
                Segment::Param {
                    name: b,
                    optional: bo,
                    constraint: bc,
                },
            ) => {
                a == b
                    && ao == bo
                    && ac.as_ref().map(|c| c.source.as_str())
                        == bc.as_ref().map(|c| c.source.as_str())
            }
            (Segment::Wildcard, Segment::Wildcard) => true,
            _ => false,
        }
    }
}

/// A compiled path template: the ordered segments, the parameter names in
/// declaration order, and one start- and end-anchored matching expression
/// with a named capture group per placeholder.
#[derive(Debug, Clone)]
pub(crate) struct PathSpec {
    pub(crate) segments: Vec<Segment>,
    pub(crate) params: Vec<String>,
    regex: Regex,
}

impl PathSpec {
    /// Recovers the parameter values of a path already matched by the tree.
    ///
    /// Optional placeholders absent from the path are omitted from the
    /// result.
    pub(crate) fn extract<'k, 'p>(&'k self, path: &'p str) -> Params<'k, 'p> {
        let mut params = Params::new();

        if let Some(captures) = self.regex.captures(path) {
            for name in &self.params {
                if let Some(found) = captures.name(name) {
                    params.push(name, found.as_str());
                }
            }
        }

        params
    }
}

/// Compiles a path template into a [`PathSpec`], consulting `patterns` for
/// custom constraints. Any failure is fatal to the registration at hand and
/// leaves the router untouched.
pub(crate) fn compile(path: &str, patterns: &PatternSet) -> Result<PathSpec, InsertError> {
    if !path.starts_with('/') {
        return Err(InsertError::InvalidPath {
            path: path.to_owned(),
        });
    }

    let raw: Vec<&str> = path.split('/').skip(1).collect();

    let mut segments = Vec::with_capacity(raw.len());
    let mut params = Vec::new();

    for (position, &token) in raw.iter().enumerate() {
        let segment = match token {
            "*" => {
                if position != raw.len() - 1 {
                    return Err(InsertError::InvalidWildcard {
                        path: path.to_owned(),
                    });
                }
                Segment::Wildcard
            }
            _ if token.contains('{') || token.contains('}') => {
                let (name, optional) = parse_placeholder(token).ok_or_else(|| {
                    InsertError::MalformedSegment {
                        segment: token.to_owned(),
                        path: path.to_owned(),
                    }
                })?;

                if params.iter().any(|existing| existing == name) {
                    return Err(InsertError::DuplicateParameter {
                        name: name.to_owned(),
                        path: path.to_owned(),
                    });
                }
                params.push(name.to_owned());

                let constraint = match patterns.lookup(name) {
                    Some(source) => Some(Constraint::compile(name, source)?),
                    None => None,
                };

                Segment::Param {
                    name: name.to_owned(),
                    optional,
                    constraint,
                }
            }
            _ => Segment::Static(token.to_owned()),
        };

        segments.push(segment);
    }

    let regex = synthesize(path, &segments)?;

    Ok(PathSpec {
        segments,
        params,
        regex,
    })
}

/// Extracts the parameter name from a `{name}` / `{name?}` token occupying
/// a whole segment. Returns `None` for anything malformed.
fn parse_placeholder(token: &str) -> Option<(&str, bool)> {
    let inner = token.strip_prefix('{')?.strip_suffix('}')?;
    let (name, optional) = match inner.strip_suffix('?') {
        Some(name) => (name, true),
        None => (inner, false),
    };

    let mut chars = name.chars();
    let first = chars.next()?;
    if !(first.is_ascii_alphabetic() || first == '_') {
        return None;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }

    Some((name, optional))
}

/// Builds the anchored whole-path expression from the compiled segments.
fn synthesize(path: &str, segments: &[Segment]) -> Result<Regex, InsertError> {
    let mut source = String::from("^");

    for segment in segments {
        source.push('/');
        match segment {
            Segment::Static(text) => source.push_str(&regex::escape(text)),
            Segment::Param {
                name,
                optional,
                constraint,
            } => {
                let pattern = constraint
                    .as_ref()
                    .map(|c| c.source.as_str())
                    .unwrap_or(DEFAULT_CONSTRAINT);
                source.push_str(&format!("(?P<{name}>{pattern})"));
                if *optional {
                    source.push('?');
                }
            }
            Segment::Wildcard => source.push_str(".*"),
        }
    }
    source.push('$');

    Regex::new(&source).map_err(|err| InsertError::InvalidExpression {
        path: path.to_owned(),
        source: err,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile_ok(path: &str) -> PathSpec {
        compile(path, &PatternSet::new()).unwrap()
    }

    #[test]
    fn static_path() {
        let spec = compile_ok("/users/all");
        assert_eq!(spec.segments.len(), 2);
        assert!(spec.params.is_empty());
        assert!(spec.regex.is_match("/users/all"));
        assert!(!spec.regex.is_match("/users/all/x"));
    }

    #[test]
    fn root_path() {
        let spec = compile_ok("/");
        assert_eq!(spec.segments, vec![Segment::Static(String::new())]);
        assert!(spec.regex.is_match("/"));
        assert!(!spec.regex.is_match("/x"));
    }

    #[test]
    fn literal_text_is_escaped() {
        let spec = compile_ok("/file.txt");
        assert!(spec.regex.is_match("/file.txt"));
        assert!(!spec.regex.is_match("/fileXtxt"));
    }

    #[test]
    fn default_parameter() {
        let spec = compile_ok("/users/{id}");
        assert_eq!(spec.params, vec!["id"]);
        assert_eq!(spec.extract("/users/7").get("id"), Some("7"));
        assert!(!spec.regex.is_match("/users/"));
        assert!(!spec.regex.is_match("/users/7/posts"));
    }

    #[test]
    fn constrained_parameter() {
        let mut patterns = PatternSet::new();
        patterns.define("id", "[0-9]+");

        let spec = compile("/users/{id}", &patterns).unwrap();
        assert!(spec.regex.is_match("/users/13"));
        assert!(!spec.regex.is_match("/users/abc"));
    }

    #[test]
    fn optional_parameter() {
        let spec = compile_ok("/page/{id?}");
        assert!(spec.regex.is_match("/page/"));
        assert!(spec.regex.is_match("/page/13"));
        assert!(!spec.regex.is_match("/page"));

        assert_eq!(spec.extract("/page/13").get("id"), Some("13"));
        assert_eq!(spec.extract("/page/").get("id"), None);
    }

    #[test]
    fn declaration_order() {
        let spec = compile_ok("/{a}/{b}/{c}");
        assert_eq!(spec.params, vec!["a", "b", "c"]);
    }

    #[test]
    fn wildcard_matches_suffix() {
        let spec = compile_ok("/files/*");
        assert!(spec.regex.is_match("/files/"));
        assert!(spec.regex.is_match("/files/a/b/c"));
        assert!(!spec.regex.is_match("/files"));
    }

    #[test]
    fn wildcard_must_be_last() {
        let err = compile("/files/*/x", &PatternSet::new()).unwrap_err();
        assert_eq!(
            err,
            InsertError::InvalidWildcard {
                path: "/files/*/x".into()
            }
        );
    }

    #[test]
    fn missing_leading_slash() {
        let err = compile("users", &PatternSet::new()).unwrap_err();
        assert_eq!(err, InsertError::InvalidPath { path: "users".into() });
    }

    #[test]
    fn duplicate_parameter() {
        let err = compile("/{id}/x/{id}", &PatternSet::new()).unwrap_err();
        assert_eq!(
            err,
            InsertError::DuplicateParameter {
                name: "id".into(),
                path: "/{id}/x/{id}".into()
            }
        );
    }

    #[test]
    fn malformed_segments() {
        for segment in ["{", "{}", "{id", "id}", "a{id}", "{9id}", "{id}b", "{a b}"] {
            let path = format!("/x/{segment}");
            let err = compile(&path, &PatternSet::new()).unwrap_err();
            assert_eq!(
                err,
                InsertError::MalformedSegment {
                    segment: segment.into(),
                    path: path.clone()
                },
                "{path}"
            );
        }
    }

    #[test]
    fn invalid_constraint() {
        let mut patterns = PatternSet::new();
        patterns.define("id", "[0-9");

        let err = compile("/users/{id}", &patterns).unwrap_err();
        assert!(matches!(err, InsertError::InvalidConstraint { ref name, .. } if name == "id"));
    }
}
