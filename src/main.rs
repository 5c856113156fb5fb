//! getopt-gen — generate a C test program for a declared option list.
//!
//! Reads a YAML document describing long/short options, renders a complete
//! `getopt_long` parsing program, writes it out, and checks that the result
//! builds cleanly with each configured compiler.
//!
//! Pipeline: load → sort → render → write → verify, once per invocation.

mod config;
mod format;
mod render;
mod verify;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "getopt-gen",
    about = "Generate a getopt_long test program from a YAML option list"
)]
struct Cli {
    /// Input option list
    #[arg(short = 'i', long, default_value = "getoptions.yaml")]
    input: PathBuf,

    /// Output C source file
    #[arg(short = 'o', long, default_value = "getopt_long.c")]
    output: PathBuf,

    /// Compiler to verify the generated file with (repeatable)
    #[arg(
        short = 'c',
        long = "compiler",
        default_values_t = ["gcc".to_string(), "clang".to_string()]
    )]
    compilers: Vec<String>,

    /// Run clang-format on the generated file
    #[arg(long)]
    format: bool,

    /// Generate only, skip compiler verification
    #[arg(long)]
    no_verify: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut options = config::load(&cli.input)?;
    config::sort_options(&mut options);

    let source = render::render(&options);
    fs::write(&cli.output, &source)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    if cli.format {
        // Best-effort: a missing or failing formatter never loses the output
        if let Err(err) = format::format_in_place("clang-format", &cli.output) {
            eprintln!("warning: formatting skipped: {err:#}");
        }
    }

    if cli.no_verify {
        return Ok(());
    }

    println!("Now, we test this code by using:");
    let failed: Vec<&str> = cli
        .compilers
        .iter()
        .filter(|compiler| !verify::verify(compiler, &cli.output))
        .map(String::as_str)
        .collect();

    if !failed.is_empty() {
        bail!("generated code failed to build with: {}", failed.join(", "));
    }
    Ok(())
}
