use anyhow::{Context, Result};
use sparselife::{FrameWriter, GenerationSink, NullSink, SimConfig, Simulation, read_grid, write_grid};
use tracing::info;

use crate::cli::{Cli, RunArgs};

pub fn run(_cli: &Cli, args: &RunArgs) -> Result<()> {
    let config = resolve_config(args)?;
    let input = config.input.as_deref()
        .context("[run] No grid file given; pass GRID or set `input` in the config")?;

    info!(path = %input.display(), "loading grid");
    let grid = read_grid(input)?;
    let (rows, cols) = grid.dim();

    let mut sim = Simulation::new(&grid, config.rule)?.parallel(config.parallel);
    info!(rows, cols, generations = config.generations, rule = %config.rule, "starting simulation");

    let mut sink: Box<dyn GenerationSink> = match &config.frames {
        Some(dir) => Box::new(FrameWriter::new(dir)?),
        None => Box::new(NullSink),
    };
    sim.run(config.generations, sink.as_mut())?;

    write_grid(&config.output, &sim.grid()?)?;
    println!(
        "[run] generation {} of {}x{} grid: {} alive, written to {}",
        sim.generation(), rows, cols, sim.population(), config.output.display()
    );

    Ok(())
}

/// Load the config file, if any, and apply command-line overrides.
fn resolve_config(args: &RunArgs) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => SimConfig::from_file(path)?,
        None => SimConfig::default(),
    };
    if let Some(grid) = &args.grid { config.input = Some(grid.clone()) }
    if let Some(generations) = args.generations { config.generations = generations }
    if let Some(output) = &args.output { config.output = output.clone() }
    if let Some(frames) = &args.frames { config.frames = Some(frames.clone()) }
    if let Some(rule) = args.rule { config.rule = rule }
    if args.parallel { config.parallel = true }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;

    use super::*;
    use crate::cli::Commands;

    fn parse(argv: &[&str]) -> (Cli, RunArgs) {
        let cli = Cli::parse_from(argv.iter().copied());
        let args = match &cli.command {
            Commands::Run(args) => args.clone(),
            other => panic!("unexpected command {other:?}"),
        };
        (cli, args)
    }

    #[test]
    fn flags_override_config_file() {
        let tmp = tempfile::tempdir().unwrap();
        let config_path = tmp.path().join("life.toml");
        fs::write(&config_path, "input = \"a.txt\"\ngenerations = 4\nrule = \"B36/S23\"\n").unwrap();

        let (_, args) = parse(&["sparselife", "run", "b.txt", "-c", config_path.to_str().unwrap(), "-g", "9"]);
        let config = resolve_config(&args).unwrap();

        assert_eq!(config.input.unwrap(), std::path::PathBuf::from("b.txt"));
        assert_eq!(config.generations, 9);
        assert_eq!(config.rule.to_string(), "B36/S23");
    }

    #[test]
    fn runs_blinker_and_writes_outputs() {
        let tmp = tempfile::tempdir().unwrap();
        let grid_path = tmp.path().join("init.txt");
        let output = tmp.path().join("final_state.txt");
        let frames = tmp.path().join("frames");
        fs::write(&grid_path, "0 0 0\n1 1 1\n0 0 0\n").unwrap();

        let (cli, args) = parse(&[
            "sparselife", "run", grid_path.to_str().unwrap(),
            "-g", "3", "-o", output.to_str().unwrap(), "--frames", frames.to_str().unwrap(),
        ]);
        run(&cli, &args).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "0 1 0\n0 1 0\n0 1 0\n");
        for generation in 0..=3 {
            assert!(frames.join(format!("generation_{generation}.txt")).is_file());
        }
        assert_eq!(fs::read_to_string(frames.join("generation_0.txt")).unwrap(), "0 0 0\n1 1 1\n0 0 0\n");
    }

    #[test]
    fn missing_grid_is_an_error() {
        let (cli, args) = parse(&["sparselife", "run"]);
        let err = run(&cli, &args).unwrap_err();
        assert!(err.to_string().starts_with("[run] No grid file given"));
    }
}
