//! Region command implementation.

use super::{grid_config, region_points};
use crate::cli::RegionArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the region command.
pub fn execute_region(args: RegionArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let grid = grid_config(config, &args.grid);
    let points = region_points(&grid, config.settings.parallel)?;
    println!("{}", formatter.format_points(&points)?);
    Ok(())
}
