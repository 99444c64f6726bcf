//! Icon generation entry point
//!
//! Takes no arguments; writes the four icon files next to the executable.

use anyhow::Context;
use std::env;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let out_dir = output_dir();
    icongen::generate_icons(&out_dir)
        .with_context(|| format!("failed to write icons into {}", out_dir.display()))?;
    Ok(())
}

/// The directory containing the running executable, or `.` when that
/// cannot be determined
fn output_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}
