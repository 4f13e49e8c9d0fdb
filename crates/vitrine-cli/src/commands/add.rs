//! Implementation of the `vitrine add` command.

use tracing::{debug, instrument};

use crate::{
    cli::{AddArgs, global::GlobalArgs},
    commands::{catalog_service, draft_from_args, resolve_category},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `vitrine add` command.
///
/// 1. Assemble the draft from the flags
/// 2. Resolve the category (flag, config default, or first built-in)
/// 3. Create via the catalog service (validates the draft)
/// 4. Render the notification and the new identifier
#[instrument(skip_all, fields(title = %args.draft.title))]
pub fn execute(
    args: AddArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let draft = draft_from_args(&args.draft);
    let category = resolve_category(args.category.as_deref(), &config)?;
    debug!(category = %category, "category resolved");

    let service = catalog_service()?;
    let (product, note) = service.create(draft, category)?;

    output.notify(&note)?;
    output.print(&format!("  id: {}", product.id()))?;
    Ok(())
}
