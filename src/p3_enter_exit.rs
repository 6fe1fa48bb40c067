//! Pattern 3: Enter/Exit Protocol
//! Example: A resource type implementing the enter/exit pair, driven by
//! the generic scope runner
//!
//! Run with: cargo run --bin p3_enter_exit

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::PathBuf;

use resource_patterns::{run_scoped, FileResource, Lifecycle, Outcome, ResourceError, Scoped};

/// A file that narrates its own lifecycle. `enter` opens the handle,
/// `exit` observes how the body went and closes it.
struct TracedFile {
    path: PathBuf,
}

impl Scoped for TracedFile {
    type Resource = File;
    type Error = io::Error;

    fn enter(&mut self) -> io::Result<File> {
        println!("enter...");
        File::open(&self.path)
    }

    fn exit(&mut self, handle: File, outcome: Outcome) -> io::Result<()> {
        if outcome.is_failure() {
            println!("exit... (body failed)");
        } else {
            println!("exit...");
        }
        drop(handle);
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let path = "info.txt";
    fs::write(path, "hello\n")?;

    println!("=== Scope Runner ===");
    let mut traced = TracedFile { path: path.into() };
    let line = run_scoped(&mut traced, |handle| {
        let mut line = String::new();
        handle.read_to_string(&mut line)?;
        println!("---------------");
        println!("line : {}", line.trim_end());
        println!("---------------");
        println!("with statement");
        Ok(line)
    })
    .map_err(|e| anyhow::anyhow!("scope failed: {}", e))?;
    println!("read {} bytes", line.len());

    println!("\n=== Failing Body Still Exits ===");
    let mut traced = TracedFile { path: path.into() };
    let result: Result<(), _> = run_scoped(&mut traced, |_| {
        Err(io::Error::new(io::ErrorKind::InvalidData, "bad record"))
    });
    match result {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("error: {}", e),
    }

    println!("\n=== Explicit Lifecycle ===");
    let mut resource = FileResource::new(path);
    println!("state: {:?}", resource.state());
    resource.acquire()?;
    println!("state: {:?}", resource.state());
    let contents = resource.read_all()?;
    println!("line : {}", contents.trim_end());
    resource.release()?;
    println!("state: {:?}", resource.state());

    // The lifecycle is one-way: a released resource stays released.
    match resource.release() {
        Err(ResourceError::AlreadyReleased) => println!("double release rejected"),
        other => println!("unexpected: {:?}", other),
    }
    assert_eq!(resource.state(), Lifecycle::Released);

    fs::remove_file(path)?;

    println!("\nEnter/exit example completed");
    Ok(())
}
