// Function wrappers: pre/post side effects around a callable.
//
// The wrapped signature is known at the call site, so each wrapper is a
// plain higher-order function returning a new closure; no boxing, no
// dynamic dispatch.
use std::fmt::Debug;
use std::time::{Duration, Instant};

/// Run the wrapped callable twice per invocation, returning the second
/// result.
pub fn twice<T, F>(mut f: F) -> impl FnMut() -> T
where
    F: FnMut() -> T,
{
    move || {
        f();
        f()
    }
}

/// Report the runtime of each invocation of the wrapped callable.
pub fn timed<T, F>(name: &'static str, mut f: F) -> impl FnMut() -> T
where
    F: FnMut() -> T,
{
    move || {
        let start = Instant::now();
        let value = f();
        println!(
            "Finished '{}' in {:.4} secs",
            name,
            start.elapsed().as_secs_f64()
        );
        value
    }
}

/// Print the call and the return value of each invocation.
pub fn traced<A, T, F>(name: &'static str, mut f: F) -> impl FnMut(A) -> T
where
    A: Debug,
    T: Debug,
    F: FnMut(A) -> T,
{
    move |arg| {
        println!("Calling {}({:?})", name, arg);
        let value = f(arg);
        println!("{} returned {:?}", name, value);
        value
    }
}

/// A timing guard for a whole scope: reports the elapsed time when
/// dropped, however the scope is left.
pub struct Timer {
    name: &'static str,
    start: Instant,
}

impl Timer {
    pub fn start(name: &'static str) -> Self {
        Timer {
            name,
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        println!(
            "Finished '{}' in {:.4} secs",
            self.name,
            self.start.elapsed().as_secs_f64()
        );
    }
}
