use std::path::PathBuf;

/// Game of Life on a bounded grid, stepped by sparse matrix-vector products
#[derive(clap::Parser, Debug)]
#[command(name = "sparselife", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Run a grid file for a number of generations and write the final state
    Run(RunArgs),

    /// Build the neighbor matrix for a grid size and print its statistics
    Topology(TopologyArgs),
}

#[derive(clap::Args, Clone, Debug)]
pub struct RunArgs {
    /// Initial grid file (rows of whitespace-separated 0/1), overrides `input` in the config
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub grid: Option<PathBuf>,

    /// TOML config file; command-line flags take precedence
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Number of generations to simulate, defaults to 25
    #[arg(short, long)]
    pub generations: Option<usize>,

    /// Final state file, defaults to "./final_state.txt"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Write every generation as generation_<n>.txt into this directory
    #[arg(long, value_hint = clap::ValueHint::DirPath)]
    pub frames: Option<PathBuf>,

    /// Birth/survival rule, defaults to B3/S23
    #[arg(long)]
    pub rule: Option<sparselife::Rule>,

    /// Multiply rows in parallel
    #[arg(long)]
    pub parallel: bool,
}

#[derive(clap::Args, Debug)]
pub struct TopologyArgs {
    /// Number of grid rows
    pub rows: usize,

    /// Number of grid columns
    pub cols: usize,
}
