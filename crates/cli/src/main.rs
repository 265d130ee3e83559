//! mipsim CLI: execute raw big-endian MIPS-I binary images.
//!
//! The simulated program owns stdin and stdout through the memory-mapped
//! character device, so all driver diagnostics go to stderr.

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use mipsim_executor::{Cpu, Image};

/// User-mode simulator for big-endian MIPS-I binaries.
#[derive(Parser)]
#[command(name = "simulator")]
#[command(version = "0.1.0")]
#[command(about = "Execute a raw big-endian MIPS-I instruction image", long_about = None)]
struct Cli {
    /// Path to the program image (raw 4-byte big-endian instruction words).
    bin: Option<PathBuf>,

    /// Maximum number of instructions to execute.
    #[arg(long, value_name = "NUM")]
    max_steps: Option<u64>,

    /// Print a run summary to stderr on exit.
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Invoked with no image: nothing to do.
    let bin = match cli.bin {
        Some(path) => path,
        None => return,
    };

    let data = match fs::read(&bin) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("error reading {}: {}", bin.display(), e);
            process::exit(1);
        }
    };

    let image = Image::parse(&data);
    let mut cpu = Cpu::new();
    if let Err(e) = cpu.load_image(&image) {
        eprintln!("{}", e);
        process::exit(e.exit_code());
    }

    let start = Instant::now();
    let result = cpu.run(cli.max_steps);

    if cli.verbose {
        eprintln!(
            "executed {} instructions in {:?}",
            cpu.cycles(),
            start.elapsed()
        );
    }

    match result {
        Ok(status) => process::exit(status as i32),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(e.exit_code());
        }
    }
}
