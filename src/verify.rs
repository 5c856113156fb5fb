//! Compile checks for the generated source.
//!
//! Each configured compiler is invoked with a fixed flag set (strict C11,
//! warnings as errors, threading enabled). The exact invocation is echoed
//! with a colored pass/fail marker; a missing compiler counts as a failure
//! but never stops the remaining checks.

use ansi_term::Color;
use std::path::Path;
use std::process::{Command, Stdio};

/// Fixed compile flags. The output binary is named `<stem>-<compiler>` so
/// verifying with several compilers never clobbers a previous binary.
fn compile_args(compiler: &str, source: &Path) -> Vec<String> {
    let binary = format!("{}-{}", source.with_extension("").display(), compiler);
    vec![
        "-std=c11".to_string(),
        "-Wall".to_string(),
        "-Werror".to_string(),
        "-pthread".to_string(),
        "-o".to_string(),
        binary,
        source.display().to_string(),
    ]
}

/// Run one compiler over the generated file. Returns true if it built
/// cleanly. The compiler's own output is discarded; only the exit status
/// matters here.
pub fn verify(compiler: &str, source: &Path) -> bool {
    let args = compile_args(compiler, source);

    let mut invocation = compiler.to_string();
    for arg in &args {
        invocation.push(' ');
        invocation.push_str(arg);
    }
    invocation.push_str(": ");
    print!("{invocation:>74}");

    let result = Command::new(compiler)
        .args(&args)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(status) if status.success() => {
            println!("{}", Color::Green.paint("  [OK] "));
            true
        }
        Ok(status) => {
            println!("{}", Color::Red.paint(format!("{:>10} ", "[failed]")));
            println!("{compiler} exited with {status}");
            false
        }
        Err(err) => {
            println!("{}", Color::Red.paint(format!("{:>10} ", "[failed]")));
            println!("could not run {compiler}: {err}");
            false
        }
    }
}
