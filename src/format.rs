//! Optional formatter pass over the generated file.
//!
//! Streams the formatter's stdout into a temporary file created next to the
//! target, then persists it over the target. The target is only replaced
//! after the formatter exits successfully; on any earlier failure the temp
//! file is dropped and removed.

use anyhow::{bail, Context, Result};
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use tempfile::NamedTempFile;

/// Reformat `path` in place using `formatter` (normally `clang-format`),
/// which is expected to print the formatted file to stdout.
pub fn format_in_place(formatter: &str, path: &Path) -> Result<()> {
    let mut child = Command::new(formatter)
        .arg(path)
        .stdout(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to run {formatter}"))?;

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temporary file in {}", dir.display()))?;

    let mut stdout = child
        .stdout
        .take()
        .with_context(|| format!("{formatter} stdout unavailable"))?;
    io::copy(&mut stdout, &mut tmp).with_context(|| format!("failed to read {formatter} output"))?;

    let status = child
        .wait()
        .with_context(|| format!("failed to wait for {formatter}"))?;
    if !status.success() {
        bail!("{formatter} exited with {status}");
    }

    tmp.persist(path)
        .with_context(|| format!("failed to replace {}", path.display()))?;
    Ok(())
}
