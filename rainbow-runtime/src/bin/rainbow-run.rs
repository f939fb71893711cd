//! CLI tool for running Rainbow programs

use anyhow::Context;
use clap::{Parser, ValueEnum};
use colored::*;
use rainbow_runtime::{OutputMode, RainbowRuntime, RuntimeConfig, VmConfig};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "rainbow-run")]
#[command(version = "2026.1.0")]
#[command(about = "Run a Rainbow program listing", long_about = None)]
struct Cli {
    /// Input listing file (.rbw)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output rendering for PRINT
    #[arg(short, long, value_enum, default_value_t = Mode::Ascii)]
    mode: Mode,

    /// Tape size in cells
    #[arg(short, long)]
    cells: Option<usize>,

    /// Dispatch cycle limit (0 = unlimited)
    #[arg(long)]
    max_cycles: Option<u64>,

    /// Print the decoded listing and progress
    #[arg(short, long)]
    debug: bool,

    /// Print execution statistics as JSON
    #[arg(long)]
    stats: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Ascii,
    Decimal,
    Hex,
}

impl From<Mode> for OutputMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Ascii => OutputMode::Ascii,
            Mode::Decimal => OutputMode::Decimal,
            Mode::Hex => OutputMode::Hex,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let mut vm_config = VmConfig::default();
    vm_config.output_mode = cli.mode.into();
    if let Some(cells) = cli.cells {
        vm_config.tape_cells = cells;
    }
    if let Some(max_cycles) = cli.max_cycles {
        vm_config.max_cycles = max_cycles;
    }

    let config = RuntimeConfig {
        vm: vm_config,
        debug: cli.debug,
    };

    let mut runtime = RainbowRuntime::new(config);
    let status = runtime
        .run_file(&cli.input)
        .with_context(|| format!("failed to run {}", cli.input.display()))?;

    println!("\nProgram exited with status: {}", status);

    if cli.stats {
        if let Some(stats) = runtime.stats() {
            println!("{}", serde_json::to_string_pretty(stats)?);
        }
    }

    Ok(status.code())
}
