//! # Resource Scope Patterns
//!
//! Runnable examples demonstrating scoped resource management and function
//! wrapping in Rust: acquire a resource, run a body against it, and
//! guarantee the release runs exactly once on every exit path.
//!
//! ## Patterns Covered
//!
//! 1. **Closing Adapter** - Scoped cleanup for any value with a `close` step
//! 2. **Drop Guard** - try/finally via `Drop`, with panic-safe cleanup
//! 3. **Enter/Exit Protocol** - A trait pair driven by a generic scope runner
//! 4. **Function Wrappers** - Timing, double-invocation, and call tracing
//!
//! ## Running Examples
//!
//! ```bash
//! # Pattern 1: Closing Adapter
//! cargo run --bin p1_open_close
//!
//! # Pattern 2: Drop Guard
//! cargo run --bin p2_drop_guard
//!
//! # Pattern 3: Enter/Exit Protocol
//! cargo run --bin p3_enter_exit
//!
//! # Pattern 4: Function Wrappers
//! cargo run --bin p4_wrappers
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - Derive macro for the library error types
//! - `anyhow` - Flexible error handling at the demo boundaries
//! - `tempfile` + `proptest` - Filesystem fixtures and property tests
//! - `criterion` - Benchmarks of the scope-runner overhead

pub mod error;
pub mod guard;
pub mod resource;
pub mod scope;
pub mod wrap;

pub use error::{ResourceError, ScopeError};
pub use guard::ScopeGuard;
pub use resource::{FileResource, FileText, Lifecycle};
pub use scope::{closing, run_scoped, with_scope, Close, Outcome, Scoped};
pub use wrap::{timed, traced, twice, Timer};
