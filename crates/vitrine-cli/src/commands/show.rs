//! Implementation of the `vitrine show` command.

use vitrine_core::application::ports::ConfigSource as _;
use vitrine_adapters::StaticConfigSource;

use crate::{
    cli::{ShowArgs, ShowKind, global::GlobalArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `vitrine show` command.
pub fn execute(args: ShowArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let source = StaticConfigSource::new();

    match args.what {
        ShowKind::Categories => {
            output.header("Categories:")?;
            for category in source.categories().map_err(CliError::Core)? {
                output.print(&format!("  {}  {}", category.name, category.image_url))?;
            }
        }
        ShowKind::Palette => {
            output.header("Palette:")?;
            for color in source.palette().map_err(CliError::Core)? {
                output.print(&format!("  {color}"))?;
            }
        }
    }

    Ok(())
}
