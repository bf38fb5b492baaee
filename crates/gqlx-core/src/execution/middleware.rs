use crate::Arguments;
use crate::Value;
use crate::execution::ResolveInfo;
use crate::execution::Resolver;
use crate::execution::ResolverResult;
use std::fmt;
use std::sync::Arc;

/// Wraps field resolution.
///
/// A middleware receives the rest of the chain as `next` and decides
/// whether, and with what, to call it. Middleware registered first sees
/// each call first.
pub trait Middleware: Send + Sync {
    fn resolve(
        &self,
        next: Next<'_>,
        source: &Value,
        info: &ResolveInfo<'_>,
        args: &Arguments,
    ) -> ResolverResult;
}

/// The remainder of a middleware chain, ending in the field's resolver.
#[derive(Clone, Copy)]
pub struct Next<'a> {
    middleware: &'a [Arc<dyn Middleware>],
    resolver: &'a Resolver,
}
impl Next<'_> {
    pub fn run(self, source: &Value, info: &ResolveInfo<'_>, args: &Arguments) -> ResolverResult {
        match self.middleware.split_first() {
            Some((first, rest)) => first.resolve(
                Next {
                    middleware: rest,
                    resolver: self.resolver,
                },
                source,
                info,
                args,
            ),
            None => (self.resolver)(source, info, args),
        }
    }
}

/// Adapts a closure into a [`Middleware`].
pub struct FnMiddleware<F>(pub F);
impl<F> Middleware for FnMiddleware<F>
where
    F: Fn(Next<'_>, &Value, &ResolveInfo<'_>, &Arguments) -> ResolverResult + Send + Sync,
{
    fn resolve(
        &self,
        next: Next<'_>,
        source: &Value,
        info: &ResolveInfo<'_>,
        args: &Arguments,
    ) -> ResolverResult {
        (self.0)(next, source, info, args)
    }
}

/// An ordered list of [`Middleware`], applied outer-first to every field.
#[derive(Clone, Default)]
pub struct MiddlewareChain(Vec<Arc<dyn Middleware>>);
impl MiddlewareChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, middleware: impl Middleware + 'static) -> Self {
        self.push(middleware);
        self
    }

    pub fn with_fn<F>(self, middleware: F) -> Self
    where
        F: Fn(Next<'_>, &Value, &ResolveInfo<'_>, &Arguments) -> ResolverResult
            + Send
            + Sync
            + 'static,
    {
        self.with(FnMiddleware(middleware))
    }

    pub fn push(&mut self, middleware: impl Middleware + 'static) {
        self.0.push(Arc::new(middleware));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Runs `resolver` through the whole chain.
    pub fn resolve(
        &self,
        resolver: &Resolver,
        source: &Value,
        info: &ResolveInfo<'_>,
        args: &Arguments,
    ) -> ResolverResult {
        Next {
            middleware: &self.0,
            resolver,
        }
        .run(source, info, args)
    }
}
impl fmt::Debug for MiddlewareChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MiddlewareChain({} middleware)", self.0.len())
    }
}
