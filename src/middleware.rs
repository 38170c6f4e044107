use std::sync::Arc;

/// A middleware: a transform from a handler to a wrapping handler.
///
/// Middleware is shared between the scope frames that accumulated it and
/// every route registered under them, hence the `Arc`.
pub type Middleware<T> = Arc<dyn Fn(T) -> T + Send + Sync>;

/// Wraps `handler` in `middleware`, innermost outward, so that declaration
/// order equals onion-layer order from outside in:
/// `compose(h, [m1, m2, m3])` yields `m1(m2(m3(h)))`, and `m1` observes the
/// request first and the response last.
pub(crate) fn compose<T>(handler: T, middleware: &[Middleware<T>]) -> T {
    middleware
        .iter()
        .rev()
        .fold(handler, |wrapped, layer| (**layer)(wrapped))
}
