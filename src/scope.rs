use crate::middleware::Middleware;

/// One group scope: the *effective* prefix and middleware for routes
/// registered while this frame is on top, ancestor contributions already
/// folded in.
struct Frame<T> {
    prefix: String,
    middleware: Vec<Middleware<T>>,
}

/// The stack of nested group scopes.
///
/// The root frame (empty prefix, no middleware) is stored apart from the
/// nested frames, so the current scope can always be read and `exit` at the
/// top level is a no-op.
pub(crate) struct ScopeStack<T> {
    root: Frame<T>,
    nested: Vec<Frame<T>>,
}

impl<T> ScopeStack<T> {
    pub(crate) fn new() -> Self {
        Self {
            root: Frame {
                prefix: String::new(),
                middleware: Vec::new(),
            },
            nested: Vec::new(),
        }
    }

    /// The effective prefix of the active scope.
    pub(crate) fn prefix(&self) -> &str {
        &self.top().prefix
    }

    /// The effective middleware of the active scope, in declaration order.
    pub(crate) fn middleware(&self) -> &[Middleware<T>] {
        &self.top().middleware
    }

    /// Opens a nested scope extending the active one.
    pub(crate) fn enter(&mut self, prefix: &str, middleware: Vec<Middleware<T>>) {
        let top = self.top();
        let mut frame = Frame {
            prefix: format!("{}{}", top.prefix, prefix),
            middleware: top.middleware.clone(),
        };
        frame.middleware.extend(middleware);
        self.nested.push(frame);
    }

    /// Closes the most recently entered scope. The root frame stays.
    pub(crate) fn exit(&mut self) {
        self.nested.pop();
    }

    /// Permanently extends the active scope, affecting every registration
    /// that follows in it. Unlike `enter`, there is no matching `exit`; the
    /// frame itself is altered, so interleaved `enter`/`exit` pairs keep
    /// their LIFO discipline.
    pub(crate) fn extend(&mut self, prefix: &str, middleware: Vec<Middleware<T>>) {
        let top = self.nested.last_mut().unwrap_or(&mut self.root);
        top.prefix.push_str(prefix);
        top.middleware.extend(middleware);
    }

    fn top(&self) -> &Frame<T> {
        self.nested.last().unwrap_or(&self.root)
    }
}

impl<T> Default for ScopeStack<T> {
    fn default() -> Self {
        Self::new()
    }
}
