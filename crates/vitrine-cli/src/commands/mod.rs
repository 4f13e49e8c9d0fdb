//! Command handlers.
//!
//! Each submodule implements one subcommand. Handlers translate CLI
//! arguments into core calls and render results; no business logic lives
//! here.

pub mod add;
pub mod check;
pub mod completions;
pub mod edit;
pub mod list;
pub mod remove;
pub mod show;

use vitrine_core::application::CatalogService;
use vitrine_core::application::ports::ConfigSource as _;
use vitrine_core::domain::{Category, ProductDraft, ProductId};
use vitrine_adapters::{InMemoryCatalog, StaticConfigSource};

use crate::cli::DraftArgs;
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// Build the catalog service over the seeded in-memory store.
///
/// Each invocation starts from the built-in catalog; there is no
/// persistence between runs.
pub(crate) fn catalog_service() -> CliResult<CatalogService> {
    let store = InMemoryCatalog::with_builtin().map_err(CliError::Core)?;
    Ok(CatalogService::new(Box::new(store)))
}

/// Resolve a category: the explicit name, then the configured default,
/// then the first built-in category.
pub(crate) fn resolve_category(
    name: Option<&str>,
    config: &AppConfig,
) -> CliResult<Category> {
    let source = StaticConfigSource::new();
    let requested = name.or(config.defaults.category.as_deref());

    match requested {
        Some(name) => source
            .category_by_name(name)
            .map_err(CliError::Core)?
            .ok_or_else(|| {
                CliError::UnknownCategory {
                    name: name.to_string(),
                    available: source
                        .categories()
                        .map(|cats| cats.into_iter().map(|c| c.name).collect())
                        .unwrap_or_default(),
                }
            }),
        None => source.default_category().map_err(CliError::Core),
    }
}

/// Parse a product identifier argument.
pub(crate) fn parse_id(raw: &str) -> CliResult<ProductId> {
    raw.parse::<ProductId>()
        .map_err(|e| CliError::Core(e.into()))
}

/// Assemble a draft from the shared field arguments.
pub(crate) fn draft_from_args(args: &DraftArgs) -> ProductDraft {
    ProductDraft::new()
        .title(args.title.as_str())
        .description(args.description.as_str())
        .image_url(args.image_url.as_str())
        .price(args.price.as_str())
        .colors(args.colors.iter().cloned())
}
