// Drop-based scope guard: the try/finally of Rust.
use std::ops::{Deref, DerefMut};

/// A guard that owns a protected value and runs a cleanup closure on it
/// when the scope is left, whatever the exit path: normal fall-through,
/// early `?` return, or panic unwind. The cleanup runs at most once.
///
/// The protected value stays usable through `Deref`/`DerefMut` while the
/// guard is alive, so the body of the scope does not need a second handle.
pub struct ScopeGuard<R, F: FnOnce(R)> {
    resource: Option<R>,
    cleanup: Option<F>,
}

impl<R, F: FnOnce(R)> ScopeGuard<R, F> {
    pub fn new(resource: R, cleanup: F) -> Self {
        ScopeGuard {
            resource: Some(resource),
            cleanup: Some(cleanup),
        }
    }

    /// Take the protected value back out without running the cleanup.
    pub fn disarm(mut self) -> R {
        self.cleanup = None;
        self.resource
            .take()
            .expect("guard holds its resource until drop or disarm")
    }
}

impl<R, F: FnOnce(R)> Deref for ScopeGuard<R, F> {
    type Target = R;

    fn deref(&self) -> &R {
        self.resource
            .as_ref()
            .expect("guard holds its resource until drop or disarm")
    }
}

impl<R, F: FnOnce(R)> DerefMut for ScopeGuard<R, F> {
    fn deref_mut(&mut self) -> &mut R {
        self.resource
            .as_mut()
            .expect("guard holds its resource until drop or disarm")
    }
}

impl<R, F: FnOnce(R)> Drop for ScopeGuard<R, F> {
    fn drop(&mut self) {
        if let (Some(resource), Some(cleanup)) = (self.resource.take(), self.cleanup.take()) {
            cleanup(resource);
        }
    }
}

/// Run an expression when the enclosing scope is left.
///
/// ```
/// use resource_patterns::defer;
///
/// fn guarded_step() {
///     defer!(println!("finally..."));
///     println!("try...");
/// }
/// ```
#[macro_export]
macro_rules! defer {
    ($e:expr) => {
        let _guard = $crate::guard::ScopeGuard::new((), |_| {
            $e;
        });
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn cleanup_runs_on_normal_exit() {
        let released = Cell::new(0);
        {
            let _guard = ScopeGuard::new("handle", |_| released.set(released.get() + 1));
        }
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn cleanup_runs_exactly_once() {
        let released = Cell::new(0);
        let guard = ScopeGuard::new((), |_| released.set(released.get() + 1));
        drop(guard);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn cleanup_runs_on_early_return() {
        fn early(released: &Cell<u32>, bail: bool) -> Option<u32> {
            let guard = ScopeGuard::new(7u32, |_| released.set(released.get() + 1));
            if bail {
                return None;
            }
            Some(*guard)
        }

        let released = Cell::new(0);
        assert_eq!(early(&released, true), None);
        assert_eq!(released.get(), 1);
        assert_eq!(early(&released, false), Some(7));
        assert_eq!(released.get(), 2);
    }

    #[test]
    fn cleanup_runs_on_panic() {
        let released = Cell::new(0);
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _guard = ScopeGuard::new((), |_| released.set(released.get() + 1));
            panic!("body blew up");
        }));
        assert!(result.is_err());
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn disarm_suppresses_cleanup_and_returns_the_value() {
        let released = Cell::new(0);
        let guard = ScopeGuard::new(vec![1, 2, 3], |_| released.set(released.get() + 1));
        let value = guard.disarm();
        assert_eq!(value, vec![1, 2, 3]);
        assert_eq!(released.get(), 0);
    }

    #[test]
    fn guarded_value_is_usable_through_deref() {
        let mut guard = ScopeGuard::new(String::from("hello"), drop);
        guard.push('\n');
        assert_eq!(guard.as_str(), "hello\n");
    }

    #[test]
    fn defer_runs_at_scope_exit() {
        let order = std::cell::RefCell::new(Vec::new());
        {
            defer!(order.borrow_mut().push("finally"));
            order.borrow_mut().push("try");
        }
        assert_eq!(*order.borrow(), vec!["try", "finally"]);
    }
}
