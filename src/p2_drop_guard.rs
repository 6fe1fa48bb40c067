// Pattern 2: Drop Guard (try/finally)
// The cleanup is armed right after acquisition and runs when the scope is
// left, on the success path, the early-return path, and the panic path.
//
// Run with: cargo run --bin p2_drop_guard

use std::fs::{self, File};
use std::io::Read;

use anyhow::Context;
use resource_patterns::{defer, ScopeGuard};

/// Open a file, read it inside a guarded scope, and let the guard close
/// the handle. The "finally..." line prints on every exit path below the
/// successful open, including the failing read in the second section.
fn read_with_guard(path: &str) -> anyhow::Result<String> {
    println!("try...");
    println!("Start file read...");
    let file = File::open(path).with_context(|| format!("failed to open {}", path))?;
    let mut guard = ScopeGuard::new(file, |file| {
        println!("finally...");
        drop(file);
    });

    let mut line = String::new();
    guard
        .read_to_string(&mut line)
        .with_context(|| format!("failed to read {}", path))?;
    println!("---------------");
    println!("line : {}", line.trim_end());
    println!("---------------");
    Ok(line)
}

fn main() -> anyhow::Result<()> {
    let path = "info.txt";
    fs::write(path, "hello\n")?;

    println!("=== Reading Under a Guard ===");
    read_with_guard(path)?;
    println!("with...");

    println!("\n=== Acquisition Failure: No Cleanup To Run ===");
    // The guard is armed only after a successful open, so nothing prints
    // "finally..." here.
    match read_with_guard("missing.txt") {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("error: {:#}", e),
    }

    println!("\n=== Body Failure: Cleanup Still Runs ===");
    // Invalid UTF-8 makes the read fail after the guard is armed.
    fs::write(path, [0xff, 0xfe, 0xfd])?;
    match read_with_guard(path) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("error: {:#}", e),
    }

    println!("\n=== defer ===");
    {
        defer!(println!("finally..."));
        println!("with...");
    }

    fs::remove_file(path)?;

    println!("\nDrop guard example completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn reads_the_whole_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"hello\n").unwrap();
        let contents = read_with_guard(file.path().to_str().unwrap()).unwrap();
        assert_eq!(contents, "hello\n");
    }

    #[test]
    fn missing_file_is_an_acquisition_failure() {
        assert!(read_with_guard("definitely/not/here.txt").is_err());
    }

    #[test]
    fn invalid_utf8_is_a_body_failure() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe]).unwrap();
        assert!(read_with_guard(file.path().to_str().unwrap()).is_err());
    }
}
