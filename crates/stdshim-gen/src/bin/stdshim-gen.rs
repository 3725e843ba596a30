//! CLI entrypoint for the std compatibility shim generator.

use std::path::PathBuf;
use std::process::Command as ProcCommand;

use clap::Parser;

/// Generate a std compatibility module over `core` and `alloc`.
#[derive(Debug, Parser)]
#[command(name = "stdshim-gen")]
#[command(about = "Generate a feature-gated std compatibility module")]
struct Cli {
    /// Location of the rust source code. The default is
    /// `$(rustc --print sysroot)/lib/rustlib/src/rust/library`.
    #[arg(long)]
    src: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let library_root = match cli.src {
        Some(path) => path,
        None => default_library_root()?,
    };

    let document = stdshim_gen::generate_shim(&library_root)?;
    print!("{document}");
    Ok(())
}

/// Resolve the default source root from the active toolchain.
fn default_library_root() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let output = ProcCommand::new("rustc")
        .arg("--print")
        .arg("sysroot")
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("rustc --print sysroot failed: {stderr}").into());
    }

    let sysroot = String::from_utf8(output.stdout)?;
    Ok(PathBuf::from(sysroot.trim())
        .join("lib")
        .join("rustlib")
        .join("src")
        .join("rust")
        .join("library"))
}
