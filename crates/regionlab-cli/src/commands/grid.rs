//! Grid command implementation.

use crate::cli::GridArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use regionlab_domain::RegionClassifier;
use regionlab_sampling::GridSampler;

/// Execute the grid command.
pub fn execute_grid(args: GridArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let from = args.from.unwrap_or(config.grid.from);
    let to = args.to.unwrap_or(config.grid.to);
    let grid = GridSampler::new(from, to, args.steps)?.sample();

    println!("{}", formatter.format_grid(&grid, &RegionClassifier::reference())?);
    Ok(())
}
