//! Implementation of the `vitrine edit` command.

use tracing::{debug, instrument};

use crate::{
    cli::{EditArgs, global::GlobalArgs},
    commands::{catalog_service, parse_id, resolve_category},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `vitrine edit` command.
///
/// Starts from the stored product, overlays whichever flags were given,
/// and commits the result. The full draft is re-validated, so an edit that
/// only changes the price still fails if the stored title has somehow
/// gone bad.
#[instrument(skip_all, fields(id = %args.id))]
pub fn execute(
    args: EditArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let id = parse_id(&args.id)?;
    let service = catalog_service()?;

    let mut draft = service.product(&id)?.to_draft();
    if let Some(title) = args.title {
        draft.title = title;
    }
    if let Some(description) = args.description {
        draft.description = description;
    }
    if let Some(image_url) = args.image_url {
        draft.image_url = image_url;
    }
    if let Some(price) = args.price {
        draft.price = price;
    }
    if !args.colors.is_empty() {
        draft.colors = args.colors;
    }

    let category = match args.category.as_deref() {
        Some(name) => Some(resolve_category(Some(name), &config)?),
        None => None,
    };
    debug!(category = ?category, "edit assembled");

    let (product, note) = service.update(&id, draft, category)?;

    output.notify(&note)?;
    output.print(&format!("  id: {}", product.id()))?;
    Ok(())
}
