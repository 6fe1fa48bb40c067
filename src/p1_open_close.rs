//! Pattern 1: Closing Adapter
//! Example: Scoped cleanup for any value with a consuming `close` step
//!
//! Run with: cargo run --bin p1_open_close

use std::fs;
use std::io;

use resource_patterns::{closing, Close, FileText};

/// A toy resource whose whole life is trace output.
struct OpenClose;

impl OpenClose {
    fn open(&mut self) {
        println!("open...");
    }

    fn do_something(&mut self) {
        println!("do_something...");
    }
}

impl Close for OpenClose {
    type Error = io::Error;

    fn close(self) -> Result<(), io::Error> {
        println!("close...");
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    println!("=== Closing a Toy Resource ===");
    // The close runs after the body, before control returns here.
    closing(OpenClose, |d| {
        d.open();
        d.do_something();
        Ok(())
    })
    .map_err(|e| anyhow::anyhow!("scope failed: {}", e))?;

    println!("\n=== Closing a Real File ===");
    let path = "info.txt";
    fs::write(path, "hello\n")?;

    let text = FileText::open(path)?;
    let contents = closing(text, |t| t.read_all())
        .map_err(|e| anyhow::anyhow!("scope failed: {}", e))?;
    println!("line : {}", contents.trim_end());

    fs::remove_file(path)?;

    println!("\nClosing adapter example completed");
    Ok(())
}
