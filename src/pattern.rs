use std::collections::HashMap;

/// A registry of parameter constraints.
///
/// Maps a parameter name to a regular-expression source. Once defined, the
/// constraint applies to every route compiled afterwards that uses a
/// placeholder with that name; routes compiled earlier keep the constraint
/// they were compiled with.
///
/// No regex validation happens here. A malformed source surfaces as an
/// [`InsertError::InvalidConstraint`](crate::InsertError::InvalidConstraint)
/// when a route using the parameter is registered.
#[derive(Debug, Default, Clone)]
pub struct PatternSet {
    patterns: HashMap<String, String>,
}

impl PatternSet {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a constraint for `name`, overwriting any previous one.
    pub fn define(&mut self, name: impl Into<String>, pattern: impl Into<String>) {
        self.patterns.insert(name.into(), pattern.into());
    }

    /// Returns the constraint source registered for `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.patterns.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_missing() {
        let patterns = PatternSet::new();
        assert_eq!(patterns.lookup("id"), None);
    }

    #[test]
    fn define_and_lookup() {
        let mut patterns = PatternSet::new();
        patterns.define("id", "[0-9]+");
        assert_eq!(patterns.lookup("id"), Some("[0-9]+"));
    }

    #[test]
    fn define_overwrites() {
        let mut patterns = PatternSet::new();
        patterns.define("id", "[0-9]+");
        patterns.define("id", "[a-f0-9]+");
        assert_eq!(patterns.lookup("id"), Some("[a-f0-9]+"));
    }
}
