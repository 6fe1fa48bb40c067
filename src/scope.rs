// Scoped execution: acquire a resource, run a body against it, release it
// exactly once on every exit path.
use crate::error::ScopeError;

/// How the body of a scoped block finished, as seen by the exit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Failed,
}

impl Outcome {
    pub fn is_failure(self) -> bool {
        matches!(self, Outcome::Failed)
    }
}

/// Run `body` against a freshly acquired resource, then release it.
///
/// The ordering contract:
///
/// 1. `acquire` runs first. If it fails, the failure propagates as
///    [`ScopeError::Acquire`] and `release` is never invoked.
/// 2. `body` runs with exclusive access to the resource.
/// 3. `release` runs exactly once, on the success path and the failure
///    path alike, consuming the resource so no handle outlives the scope.
/// 4. A body failure is surfaced as [`ScopeError::Body`]; if the release
///    also failed, that failure rides along instead of replacing it.
pub fn with_scope<R, T, E, A, B, C>(acquire: A, body: B, release: C) -> Result<T, ScopeError<E>>
where
    A: FnOnce() -> Result<R, E>,
    B: FnOnce(&mut R) -> Result<T, E>,
    C: FnOnce(R) -> Result<(), E>,
{
    let mut resource = acquire().map_err(ScopeError::Acquire)?;
    let result = body(&mut resource);
    let released = release(resource);
    settle(result, released)
}

/// Combine the body and release outcomes with body-failure precedence.
fn settle<T, E>(result: Result<T, E>, released: Result<(), E>) -> Result<T, ScopeError<E>> {
    match (result, released) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(release)) => Err(ScopeError::Release(release)),
        (Err(body), Ok(())) => Err(ScopeError::Body {
            body,
            release: None,
        }),
        (Err(body), Err(release)) => Err(ScopeError::Body {
            body,
            release: Some(release),
        }),
    }
}

/// The enter/exit protocol: a resource type that knows how to hand out a
/// handle at the top of a scope and take it back at the bottom.
///
/// `exit` always runs when `enter` succeeded, and always receives the
/// [`Outcome`] of the body, so an implementation can react to a failing
/// scope (log it, roll back, mark the handle poisoned) before the failure
/// propagates.
pub trait Scoped {
    type Resource;
    type Error;

    fn enter(&mut self) -> Result<Self::Resource, Self::Error>;

    fn exit(&mut self, resource: Self::Resource, outcome: Outcome) -> Result<(), Self::Error>;
}

/// Drive a [`Scoped`] resource through one enter/body/exit cycle.
pub fn run_scoped<S, T, B>(scoped: &mut S, body: B) -> Result<T, ScopeError<S::Error>>
where
    S: Scoped,
    B: FnOnce(&mut S::Resource) -> Result<T, S::Error>,
{
    let mut resource = scoped.enter().map_err(ScopeError::Acquire)?;
    let result = body(&mut resource);
    let outcome = if result.is_ok() {
        Outcome::Completed
    } else {
        Outcome::Failed
    };
    let released = scoped.exit(resource, outcome);
    settle(result, released)
}

/// A value with a consuming close step.
pub trait Close {
    type Error;

    fn close(self) -> Result<(), Self::Error>;
}

/// Run `body` against an already-constructed resource and close it
/// afterwards. The resource exists before the scope, so acquisition
/// cannot fail here; the close still runs on both exit paths.
pub fn closing<C, T, B>(resource: C, body: B) -> Result<T, ScopeError<C::Error>>
where
    C: Close,
    B: FnOnce(&mut C) -> Result<T, C::Error>,
{
    with_scope(|| Ok(resource), body, C::close)
}
