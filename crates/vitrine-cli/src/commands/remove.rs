//! Implementation of the `vitrine remove` command.

use tracing::instrument;

use crate::{
    cli::{RemoveArgs, global::GlobalArgs},
    commands::{catalog_service, parse_id},
    error::CliResult,
    output::OutputManager,
};

/// Execute the `vitrine remove` command.
///
/// Removal is unconditional: an identifier that is not in the catalog
/// still reports success.
#[instrument(skip_all, fields(id = %args.id))]
pub fn execute(args: RemoveArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let id = parse_id(&args.id)?;
    let service = catalog_service()?;

    let note = service.remove(&id)?;
    output.notify(&note)?;
    Ok(())
}
