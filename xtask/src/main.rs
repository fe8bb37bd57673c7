//! Custom cargo commands for the ksum crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests (debug and release)
//!   cargo xtask kani      - Run Kani proofs
//!   cargo xtask fuzz      - Fuzz one target for a while
//!   cargo xtask check     - Quick check (no Kani)

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Cursor helpers that `kani-proofs` carries a copy of.
const MIRRORED_FNS: &[&str] = &["next_distinct", "prev_distinct"];

/// Cursor moves the shipped pair scan makes, which the proved scan must
/// make too.
const PAIR_SCAN_MOVES: &[&str] = &[
    "left = next_distinct(values, left, right)",
    "right = prev_distinct(values, right, left)",
];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("kani") => kani()?,
        Some("fuzz") => {
            let target = args.next().unwrap_or_else(|| "n_sum_invariants".to_string());
            let seconds = args.next().unwrap_or_else(|| "60".to_string());
            fuzz(&target, &seconds)?
        }
        Some("check") => check()?,
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
  verify                Run full verification suite (tests + Kani + mirror check)
  test                  Run all Rust tests, with and without debug contracts
  kani                  Run Kani proofs only
  fuzz [TARGET] [SECS]  Fuzz a target (default n_sum_invariants for 60s)
  check                 Quick check (cargo test + clippy, no Kani)
  bench                 Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("ksum Verification Suite");
    println!("==========================================\n");

    // Step 1: Check contract markers
    println!("[1/5] Checking contract markers...");
    check_contract_markers()?;
    println!("✓ Contract markers present\n");

    // Step 2: Run tests
    println!("[2/5] Running Rust tests...");
    test()?;
    println!("✓ All Rust tests passed\n");

    // Step 3: Clippy
    println!("[3/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    // Step 4: Kani
    println!("[4/5] Running Kani proofs...");
    kani()?;
    println!("✓ Kani proofs pass\n");

    // Step 5: The proved copy must match the shipped code
    println!("[5/5] Verifying kani-proofs mirrors src/search/cursor.rs and pair.rs...");
    verify_mirror()?;
    println!("✓ Cursor helpers and pair scan aligned\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");
    println!("\nSafe to commit changes.");

    Ok(())
}

/// Run all tests. Release mode compiles the debug contracts out, so both
/// builds are exercised.
fn test() -> Result<()> {
    run_cargo(&["test", "--quiet"])?;
    run_cargo(&["test", "--quiet", "--release"])?;
    run_cargo(&["test", "--quiet", "--no-default-features"])
}

/// Run Kani proofs
fn kani() -> Result<()> {
    let proofs_dir = project_root()?.join("kani-proofs");
    if !proofs_dir.exists() {
        println!("  (no kani-proofs directory, skipping)");
        return Ok(());
    }

    let status = match Command::new("cargo")
        .arg("kani")
        .current_dir(&proofs_dir)
        .status()
    {
        Ok(status) => status,
        Err(e) => {
            println!("  (cargo kani unavailable: {}, skipping)", e);
            return Ok(());
        }
    };

    if !status.success() {
        bail!("Kani proofs failed");
    }

    Ok(())
}

/// Fuzz one target for a bounded time
fn fuzz(target: &str, seconds: &str) -> Result<()> {
    let root = project_root()?;
    let max_time = format!("-max_total_time={}", seconds);

    let status = Command::new("cargo")
        .args(["+nightly", "fuzz", "run", target, "--", &max_time])
        .current_dir(&root)
        .status()
        .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

    if !status.success() {
        bail!("fuzz target {} found a failure", target);
    }

    Ok(())
}

/// Quick check (no Kani)
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_contract_markers() -> Result<()> {
    let root = project_root()?;
    let contracts = std::fs::read_to_string(root.join("src/verify/contracts.rs"))
        .context("Failed to read src/verify/contracts.rs")?;

    let count = contracts.matches("Contract violation:").count();
    if count < 4 {
        bail!(
            "Expected at least 4 contract checks, found {}. Someone may have removed a debug contract!",
            count
        );
    }

    Ok(())
}

fn verify_mirror() -> Result<()> {
    let root = project_root()?;
    let shipped = read(&root.join("src/search/cursor.rs"))?;
    let proved = read(&root.join("kani-proofs/src/lib.rs"))?;

    for name in MIRRORED_FNS {
        let ours = extract_body(&shipped, name)
            .with_context(|| format!("{} not found in src/search/cursor.rs", name))?;
        let theirs = extract_body(&proved, name)
            .with_context(|| format!("{} not found in kani-proofs/src/lib.rs", name))?;
        if ours != theirs {
            bail!("{} differs between src/search/cursor.rs and kani-proofs", name);
        }
    }

    let shipped_scan = read(&root.join("src/search/pair.rs"))?;
    let proved_scan = extract_body(&proved, "pair_scan_count")
        .context("pair_scan_count not found in kani-proofs/src/lib.rs")?;
    // Each move appears once on a mismatch branch and once after a match.
    for step in PAIR_SCAN_MOVES {
        if shipped_scan.matches(step).count() != proved_scan.matches(step).count() {
            bail!("pair scan step `{}` differs between src/search/pair.rs and kani-proofs", step);
        }
    }

    Ok(())
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Body of `fn name`, from its opening brace to the matching close, with
/// whitespace collapsed so indentation and visibility don't matter.
fn extract_body(source: &str, name: &str) -> Option<String> {
    let start = source.find(&format!("fn {}(", name))?;
    let open = start + source[start..].find('{')?;

    let mut depth = 0usize;
    for (offset, c) in source[open..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let body = &source[open..=open + offset];
                    return Some(body.split_whitespace().collect::<Vec<_>>().join(" "));
                }
            }
            _ => {}
        }
    }
    None
}
