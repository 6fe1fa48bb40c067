// Pattern 4: Function Wrappers
// Higher-order functions that add pre/post side effects to a callable:
// double invocation, timing, and call tracing.
//
// Run with: cargo run --bin p4_wrappers

use resource_patterns::{timed, traced, twice, Timer};

fn waste_some_time(rounds: u64) -> u64 {
    let mut sum = 0u64;
    for i in 0..rounds * 10_000 {
        sum = sum.wrapping_add(i);
    }
    sum
}

fn make_greeting(name: &str) -> String {
    format!("Hi {}", name)
}

fn main() {
    println!("=== Run Twice ===");
    let mut say_whee = twice(|| println!("Whee!"));
    say_whee();

    println!("\n=== Timing a Callable ===");
    let mut timed_waste = timed("waste_some_time", || waste_some_time(100));
    let sum = timed_waste();
    println!("sum = {}", sum);

    println!("\n=== Timing a Scope ===");
    {
        let _timer = Timer::start("whole_scope");
        let _ = waste_some_time(10);
        let _ = waste_some_time(10);
    }

    println!("\n=== Tracing Calls ===");
    let mut greet = traced("make_greeting", make_greeting);
    let greeting = greet("Eva");
    println!("got back: {}", greeting);

    println!("\n=== Stacking Wrappers ===");
    // Tracing outside, doubling inside: one traced call, two real calls.
    let mut noisy = twice(|| println!("Whee!"));
    let mut traced_noisy = traced("say_whee_twice", move |_: ()| noisy());
    traced_noisy(());

    println!("\nFunction wrappers example completed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn waste_some_time_is_deterministic() {
        assert_eq!(waste_some_time(1), waste_some_time(1));
    }

    #[test]
    fn stacked_wrappers_run_the_inner_callable_twice() {
        let calls = Cell::new(0);
        let mut inner = twice(|| calls.set(calls.get() + 1));
        let mut outer = traced("inner_twice", move |_: ()| inner());
        outer(());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn greeting_passes_through_tracing() {
        let mut greet = traced("make_greeting", make_greeting);
        assert_eq!(greet("Eva"), "Hi Eva");
    }
}
