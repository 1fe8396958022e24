//! Custom cargo commands for heapmatch.
//!
//! Usage:
//!   cargo xtask verify        - Run full verification suite
//!   cargo xtask test          - Run all tests
//!   cargo xtask check         - Quick check (test + clippy)
//!   cargo xtask kani          - Run Kani proofs (needs cargo-kani)
//!   cargo xtask fuzz [SECS]   - Run every fuzz target briefly (needs cargo-fuzz)
//!   cargo xtask bench         - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Fuzz targets defined in fuzz/Cargo.toml.
const FUZZ_TARGETS: &[&str] = &["kmp_search", "kmp_table", "heap_ops"];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("kani") => kani()?,
        Some("fuzz") => {
            let secs = match args.next() {
                Some(s) => s.parse().context("SECS must be an integer")?,
                None => 30,
            };
            fuzz(secs)?
        }
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify        Run full verification suite (tests + clippy + contracts + kani)
  test          Run all Rust tests
  check         Quick check (cargo test + clippy)
  kani          Run Kani model-checking proofs
  fuzz [SECS]   Run each fuzz target for SECS seconds (default 30)
  bench         Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("heapmatch Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking contract markers...");
    check_contract_markers()?;
    println!("✓ Contract markers present\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"], None)?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"], None)?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Running Kani proofs...");
    kani()?;
    println!("✓ Kani proofs passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

fn test() -> Result<()> {
    run_cargo(&["test"], None)
}

fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/2] cargo test...");
    run_cargo(&["test", "--quiet"], None)?;

    println!("[2/2] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"], None)?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

fn kani() -> Result<()> {
    if !has_cargo_subcommand("kani") {
        println!("  (cargo-kani not installed, skipping)");
        return Ok(());
    }
    let dir = project_root()?.join("kani-proofs");
    run_cargo(&["kani"], Some(&dir))
}

fn fuzz(secs: u64) -> Result<()> {
    if !has_cargo_subcommand("fuzz") {
        bail!("cargo-fuzz not installed (cargo install cargo-fuzz)");
    }
    let max_time = format!("-max_total_time={}", secs);
    let root = project_root()?;
    for target in FUZZ_TARGETS {
        println!("Fuzzing {} for {}s...", target, secs);
        run_cargo(&["+nightly", "fuzz", "run", target, "--", &max_time], Some(&root))?;
    }
    println!("\n✓ No fuzz failures");
    Ok(())
}

fn bench() -> Result<()> {
    run_cargo(&["bench"], None)
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to get current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str], dir: Option<&Path>) -> Result<()> {
    let dir = match dir {
        Some(d) => d.to_path_buf(),
        None => project_root()?,
    };

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&dir)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn has_cargo_subcommand(name: &str) -> bool {
    Command::new("cargo")
        .args([name, "--version"])
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

/// The debug contracts are the only runtime guard on caller preconditions.
fn check_contract_markers() -> Result<()> {
    let contracts = project_root()?.join("src/verify/contracts.rs");
    let content = std::fs::read_to_string(&contracts)
        .with_context(|| format!("Failed to read {}", contracts.display()))?;

    let count = content.matches("Contract violation:").count();
    if count < 4 {
        bail!(
            "Expected at least 4 contract assertions, found {}. Someone may have removed safety checks!",
            count
        );
    }

    Ok(())
}
