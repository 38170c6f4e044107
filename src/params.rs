use std::{fmt, slice};

/// A single URL parameter, consisting of a key and a value.
///
/// Keys borrow from the matched route's template, values from the path that
/// was resolved, so no allocation happens on the lookup path.
#[derive(PartialEq, Eq, Ord, PartialOrd, Copy, Clone)]
struct Param<'k, 'v> {
    key: &'k str,
    value: &'v str,
}

/// A list of parameters returned by a route match.
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # let mut router = trailhead::Router::new();
/// # router.map("GET", "/users/{id}", ())?;
/// let matched = router.resolve("GET", "/users/1")?;
///
/// // Iterate through the keys and values.
/// for (key, value) in matched.params.iter() {
///     println!("key: {}, value: {}", key, value);
/// }
///
/// // Get a specific value by name.
/// let id = matched.params.get("id");
/// assert_eq!(id, Some("1"));
/// # Ok(())
/// # }
/// ```
#[derive(PartialEq, Eq, Ord, PartialOrd, Clone, Default)]
pub struct Params<'k, 'v> {
    params: Vec<Param<'k, 'v>>,
}

impl<'k, 'v> Params<'k, 'v> {
    pub(crate) fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns `true` if there are no parameters in the list.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the value of the first parameter registered under the given
    /// key.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&'v str> {
        let key = key.as_ref();
        self.params
            .iter()
            .find(|param| param.key == key)
            .map(|param| param.value)
    }

    /// Returns an iterator over the parameters in the list, in declaration
    /// order.
    pub fn iter(&self) -> ParamsIter<'_, 'k, 'v> {
        ParamsIter {
            iter: self.params.iter(),
        }
    }

    pub(crate) fn push(&mut self, key: &'k str, value: &'v str) {
        self.params.push(Param { key, value });
    }
}

impl fmt::Debug for Params<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// An iterator over the keys and values of a route's [parameters](Params).
pub struct ParamsIter<'ps, 'k, 'v> {
    iter: slice::Iter<'ps, Param<'k, 'v>>,
}

impl<'k, 'v> Iterator for ParamsIter<'_, 'k, 'v> {
    type Item = (&'k str, &'v str);

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|param| (param.key, param.value))
    }
}

impl ExactSizeIterator for ParamsIter<'_, '_, '_> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}
